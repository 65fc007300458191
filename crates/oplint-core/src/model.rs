use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of operator categories. Each family shares one eligibility
/// shape and one message template.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum OperatorFamily {
    Arithmetic,
    IndexedAccess,
    Containment,
    Invocation,
    UnaryPrefix,
    UnaryPostfix,
}

impl OperatorFamily {
    pub const ALL: [OperatorFamily; 6] = [
        OperatorFamily::Arithmetic,
        OperatorFamily::IndexedAccess,
        OperatorFamily::Containment,
        OperatorFamily::Invocation,
        OperatorFamily::UnaryPrefix,
        OperatorFamily::UnaryPostfix,
    ];

    /// Stable rule identifier reported on every finding of this family.
    pub fn rule_id(self) -> &'static str {
        match self {
            OperatorFamily::Arithmetic => "PreferArithmeticSymbolSyntax",
            OperatorFamily::IndexedAccess => "PreferBracketAccessorOverFunctionSyntax",
            OperatorFamily::Containment => "PreferInOverContainsSyntax",
            OperatorFamily::Invocation => "PreferParensOverInvokeSyntax",
            OperatorFamily::UnaryPrefix => "PreferUnaryPrefixOverFunctionSyntax",
            OperatorFamily::UnaryPostfix => "PreferUnaryPostfixOverFunctionSyntax",
        }
    }

    /// Config key, matches the serde spelling.
    pub fn key(self) -> &'static str {
        match self {
            OperatorFamily::Arithmetic => "arithmetic",
            OperatorFamily::IndexedAccess => "indexed_access",
            OperatorFamily::Containment => "containment",
            OperatorFamily::Invocation => "invocation",
            OperatorFamily::UnaryPrefix => "unary_prefix",
            OperatorFamily::UnaryPostfix => "unary_postfix",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key.trim())
    }

    pub fn fixity(self) -> Option<Fixity> {
        match self {
            OperatorFamily::UnaryPrefix => Some(Fixity::Prefix),
            OperatorFamily::UnaryPostfix => Some(Fixity::Postfix),
            _ => None,
        }
    }
}

impl fmt::Display for OperatorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Fixity {
    Prefix,
    Postfix,
}

impl Fixity {
    pub fn as_str(self) -> &'static str {
        match self {
            Fixity::Prefix => "prefix",
            Fixity::Postfix => "postfix",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Style,
    Warning,
    Defect,
}

/// Source position handed over by the host. Lines and columns are 1-based.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_keys_round_trip() {
        for family in OperatorFamily::ALL {
            assert_eq!(OperatorFamily::from_key(family.key()), Some(family));
        }
        assert_eq!(OperatorFamily::from_key("bitwise"), None);
    }

    #[test]
    fn only_unary_families_have_fixity() {
        assert_eq!(OperatorFamily::UnaryPrefix.fixity(), Some(Fixity::Prefix));
        assert_eq!(OperatorFamily::UnaryPostfix.fixity(), Some(Fixity::Postfix));
        assert_eq!(OperatorFamily::Arithmetic.fixity(), None);
        assert_eq!(OperatorFamily::Invocation.fixity(), None);
    }

    #[test]
    fn rule_ids_are_distinct() {
        let mut ids: Vec<_> = OperatorFamily::ALL.iter().map(|f| f.rule_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), OperatorFamily::ALL.len());
    }

    #[test]
    fn location_displays_as_file_line_column() {
        assert_eq!(Location::new("Main.kt", 3, 14).to_string(), "Main.kt:3:14");
    }
}
