use crate::engine::Match;
use crate::model::{Fixity, OperatorFamily};

/// Render the diagnostic text for a matched call site.
pub fn format_message(m: &Match<'_>) -> String {
    let name = &m.target.qualified_name;
    match m.mapping.family {
        OperatorFamily::Arithmetic | OperatorFamily::Containment => {
            format!("{name} method can be replaced with the \"{}\" operator.", m.mapping.symbol)
        }
        OperatorFamily::IndexedAccess => format!("{name} method can be replaced with the \"[]\" operator."),
        OperatorFamily::Invocation => format!("{name} method can be called with just \"()\"."),
        OperatorFamily::UnaryPrefix => unary(name, Fixity::Prefix),
        OperatorFamily::UnaryPostfix => unary(name, Fixity::Postfix),
    }
}

fn unary(name: &str, fixity: Fixity) -> String {
    format!("{name} method can be replaced with its unary {} operator equivalent.", fixity.as_str())
}
