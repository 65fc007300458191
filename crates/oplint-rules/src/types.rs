use oplint_core::{OperatorFamily, Severity};
use serde::{Deserialize, Serialize};

/// Remediation estimate attached to every operator rule.
pub const DEFAULT_DEBT_MINUTES: u32 = 5;

/// Static description of what a rule reports.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Issue {
    pub id: String,
    pub severity: Severity,
    pub description: String,
    pub debt_minutes: u32,
}

impl Issue {
    pub fn for_family(family: OperatorFamily) -> Self {
        Self {
            id: family.rule_id().to_string(),
            severity: Severity::Style,
            description: description(family).to_string(),
            debt_minutes: DEFAULT_DEBT_MINUTES,
        }
    }
}

fn description(family: OperatorFamily) -> &'static str {
    match family {
        OperatorFamily::Arithmetic => {
            "An arithmetic operator is referenced by its named function translation. \
             This can be replaced by <value1> [+-*/%(..)] <value2>."
        }
        OperatorFamily::IndexedAccess => {
            "An \"index accessor\" operator is referenced by its named function translation. \
             This can be replaced by <value1>[<value2>]."
        }
        OperatorFamily::Containment => {
            "The \"contains\" operator is referenced by its named function translation. \
             This can be replaced by <value2> in <value1>."
        }
        OperatorFamily::Invocation => {
            "The function \"invoke\" operator is referenced by its named function translation. \
             This can be replaced by <func>([...args])."
        }
        OperatorFamily::UnaryPrefix => {
            "The unary prefix operators are referenced by their named function translation. \
             This can be replaced by [+-!]<value1>."
        }
        OperatorFamily::UnaryPostfix => {
            "The unary postfix operators are referenced by their named function translation. \
             This can be replaced by <value1>[(++)(--)]."
        }
    }
}
