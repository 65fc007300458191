use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use oplint_core::{CallSite, CallTarget, Location};
use oplint_rules::Resolver;

/// Resolver output captured on disk: one record per visited call expression.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FactsFile {
    #[serde(default)]
    pub call_sites: Vec<CallSite>,
}

impl FactsFile {
    pub fn load(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::parse(&s).with_context(|| format!("parse {}", path.display()))
    }

    pub fn parse(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Replays recorded facts through the resolver interface.
#[derive(Clone, Copy, Debug, Default)]
pub struct FactsResolver;

impl Resolver for FactsResolver {
    type Node = CallSite;

    fn resolve(&self, node: &CallSite) -> CallTarget {
        node.target.clone()
    }

    fn location(&self, node: &CallSite) -> Location {
        node.location.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_records() {
        let facts = FactsFile::parse(
            r#"{
                "call_sites": [
                    {"location": {"file": "A.kt", "line": 1, "column": 1}, "target": null},
                    {"location": {"file": "A.kt", "line": 2, "column": 1},
                     "target": {"qualified_name": "kotlin.Int.div", "canonical_name": "div",
                                "supplied_argument_count": 1, "is_declared_operator": true}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(facts.call_sites.len(), 2);
        assert_eq!(FactsResolver.resolve(&facts.call_sites[0]), CallTarget::Unresolved);
        assert_eq!(FactsResolver.location(&facts.call_sites[1]).line, 2);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(FactsFile::parse("{\"call_sites\": [").is_err());
    }
}
