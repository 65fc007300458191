use serde::{Deserialize, Serialize};

use crate::model::{Location, OperatorFamily, Severity};

/// Semantic facts about the function a call site resolved to. Produced by the
/// host resolver; never re-derived here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedCallTarget {
    pub qualified_name: String,
    pub canonical_name: String,
    /// Full parameter count of the declaration, defaulted parameters included.
    #[serde(default)]
    pub declared_parameter_count: usize,
    /// Arguments actually written at the call site.
    pub supplied_argument_count: usize,
    /// Whether the declaration is a legal operator declaration in the source language.
    #[serde(default)]
    pub is_declared_operator: bool,
}

impl ResolvedCallTarget {
    pub fn new(qualified_name: impl Into<String>, canonical_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            canonical_name: canonical_name.into(),
            declared_parameter_count: 0,
            supplied_argument_count: 0,
            is_declared_operator: false,
        }
    }

    pub fn with_arguments(mut self, supplied: usize, declared: usize) -> Self {
        self.supplied_argument_count = supplied;
        self.declared_parameter_count = declared;
        self
    }

    pub fn declared_operator(mut self, flag: bool) -> Self {
        self.is_declared_operator = flag;
        self
    }
}

/// Resolver output for one call site. Serialized as `null` when unresolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<ResolvedCallTarget>", into = "Option<ResolvedCallTarget>")]
pub enum CallTarget {
    Resolved(ResolvedCallTarget),
    Unresolved,
}

impl CallTarget {
    pub fn resolved(&self) -> Option<&ResolvedCallTarget> {
        match self {
            CallTarget::Resolved(t) => Some(t),
            CallTarget::Unresolved => None,
        }
    }
}

impl From<Option<ResolvedCallTarget>> for CallTarget {
    fn from(value: Option<ResolvedCallTarget>) -> Self {
        value.map_or(CallTarget::Unresolved, CallTarget::Resolved)
    }
}

impl From<CallTarget> for Option<ResolvedCallTarget> {
    fn from(value: CallTarget) -> Self {
        match value {
            CallTarget::Resolved(t) => Some(t),
            CallTarget::Unresolved => None,
        }
    }
}

impl From<ResolvedCallTarget> for CallTarget {
    fn from(value: ResolvedCallTarget) -> Self {
        CallTarget::Resolved(value)
    }
}

/// One visited call expression, alive for a single evaluation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallSite {
    pub location: Location,
    #[serde(default = "unresolved")]
    pub target: CallTarget,
}

fn unresolved() -> CallTarget {
    CallTarget::Unresolved
}

impl CallSite {
    pub fn new(location: Location, target: impl Into<CallTarget>) -> Self {
        Self {
            location,
            target: target.into(),
        }
    }

    pub fn unresolved(location: Location) -> Self {
        Self {
            location,
            target: CallTarget::Unresolved,
        }
    }
}

/// Diagnostic for a call site that can use the symbolic operator form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    pub rule_id: String,
    pub family: OperatorFamily,
    pub severity: Severity,
    pub location: Location,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_target_deserializes_as_unresolved() {
        let site: CallSite =
            serde_json::from_str(r#"{"location":{"file":"A.kt","line":1,"column":1},"target":null}"#).unwrap();
        assert_eq!(site.target, CallTarget::Unresolved);
    }

    #[test]
    fn missing_target_deserializes_as_unresolved() {
        let site: CallSite = serde_json::from_str(r#"{"location":{"file":"A.kt","line":1,"column":1}}"#).unwrap();
        assert!(site.target.resolved().is_none());
    }

    #[test]
    fn resolved_target_keeps_facts() {
        let json = r#"{
            "location": {"file": "A.kt", "line": 2, "column": 5},
            "target": {
                "qualified_name": "kotlin.Int.plus",
                "canonical_name": "plus",
                "declared_parameter_count": 1,
                "supplied_argument_count": 1,
                "is_declared_operator": true
            }
        }"#;
        let site: CallSite = serde_json::from_str(json).unwrap();
        let target = site.target.resolved().unwrap();
        assert_eq!(target.canonical_name, "plus");
        assert!(target.is_declared_operator);
    }
}
