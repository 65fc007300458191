use oplint_core::FamilyConfig;

use crate::advisor::Advisor;
use crate::rule::Rule;

pub const RULE_SET_ID: &str = "operator-syntax";

/// Rule identifiers a host should register for `config`, in family order.
pub fn register(config: &FamilyConfig) -> Vec<&'static str> {
    config.enabled_families().map(|f| f.rule_id()).collect()
}

/// What a host plugin loader receives: the set id plus a ready advisor.
pub struct RuleSet {
    pub id: &'static str,
    pub advisor: Advisor<'static>,
}

impl RuleSet {
    pub fn instance(config: &FamilyConfig) -> Self {
        Self {
            id: RULE_SET_ID,
            advisor: Advisor::new(config),
        }
    }

    pub fn rule_ids(&self) -> Vec<&str> {
        self.advisor.enabled_rules().map(|r| r.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oplint_core::OperatorFamily;

    #[test]
    fn registers_all_six_by_default() {
        let ids = register(&FamilyConfig::default());
        assert_eq!(
            ids,
            vec![
                "PreferArithmeticSymbolSyntax",
                "PreferBracketAccessorOverFunctionSyntax",
                "PreferInOverContainsSyntax",
                "PreferParensOverInvokeSyntax",
                "PreferUnaryPrefixOverFunctionSyntax",
                "PreferUnaryPostfixOverFunctionSyntax",
            ]
        );
    }

    #[test]
    fn skips_disabled_families() {
        let cfg = FamilyConfig::default()
            .disable(OperatorFamily::Invocation)
            .disable(OperatorFamily::IndexedAccess);
        let ids = register(&cfg);
        assert_eq!(ids.len(), 4);
        assert!(!ids.contains(&"PreferParensOverInvokeSyntax"));
    }

    #[test]
    fn rule_set_matches_register() {
        let cfg = FamilyConfig::default().disable(OperatorFamily::Containment);
        let set = RuleSet::instance(&cfg);
        assert_eq!(set.id, "operator-syntax");
        assert_eq!(set.rule_ids(), register(&cfg));
    }
}
