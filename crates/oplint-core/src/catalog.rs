use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::OperatorFamily;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has duplicate canonical name: {0}")]
    DuplicateName(String),
    #[error("catalog entry {name} has min arity {min} above max arity {max}")]
    InvalidArity { name: String, min: usize, max: usize },
    #[error("catalog entry {0} has an empty symbol")]
    EmptySymbol(String),
}

/// Inclusive bound on the supplied-argument count. `max: None` is unbounded.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    pub max: Option<usize>,
}

impl Arity {
    pub const fn exactly(n: usize) -> Self {
        Self { min: n, max: Some(n) }
    }

    pub const fn at_least(n: usize) -> Self {
        Self { min: n, max: None }
    }

    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }

    fn is_well_formed(&self) -> bool {
        self.max.map_or(true, |max| self.min <= max)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{}", self.min),
            Some(max) => write!(f, "{}..{}", self.min, max),
            None => write!(f, "{}..N", self.min),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperatorMapping {
    pub canonical_name: String,
    pub symbol: String,
    pub family: OperatorFamily,
    pub arity: Arity,
    pub requires_declared_operator: bool,
}

impl OperatorMapping {
    pub fn new(
        canonical_name: impl Into<String>,
        symbol: impl Into<String>,
        family: OperatorFamily,
        arity: Arity,
        requires_declared_operator: bool,
    ) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            symbol: symbol.into(),
            family,
            arity,
            requires_declared_operator,
        }
    }
}

/// Read-only table of named-operator functions, keyed by canonical name.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<OperatorMapping>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    pub fn from_mappings(mappings: impl IntoIterator<Item = OperatorMapping>) -> Result<Self, CatalogError> {
        let mut entries = Vec::new();
        let mut by_name = HashMap::new();
        for m in mappings {
            if m.symbol.is_empty() {
                return Err(CatalogError::EmptySymbol(m.canonical_name));
            }
            if !m.arity.is_well_formed() {
                return Err(CatalogError::InvalidArity {
                    name: m.canonical_name,
                    min: m.arity.min,
                    max: m.arity.max.unwrap_or(usize::MAX),
                });
            }
            if by_name.contains_key(&m.canonical_name) {
                return Err(CatalogError::DuplicateName(m.canonical_name));
            }
            by_name.insert(m.canonical_name.clone(), entries.len());
            entries.push(m);
        }
        Ok(Self { entries, by_name })
    }

    /// The built-in operator table.
    pub fn standard() -> Result<Self, CatalogError> {
        use OperatorFamily::*;

        let binary = |name: &str, symbol: &str| OperatorMapping::new(name, symbol, Arithmetic, Arity::exactly(1), true);
        let unary = |name: &str, symbol: &str, family| OperatorMapping::new(name, symbol, family, Arity::exactly(0), true);

        Self::from_mappings([
            binary("plus", "+"),
            binary("minus", "-"),
            binary("times", "*"),
            binary("div", "/"),
            binary("rem", "%"),
            binary("mod", "%"),
            binary("rangeTo", ".."),
            OperatorMapping::new("get", "[]", IndexedAccess, Arity::at_least(1), true),
            OperatorMapping::new("set", "[]", IndexedAccess, Arity::at_least(2), true),
            // membership is structural: only the one-argument form maps to `in`
            OperatorMapping::new("contains", "in", Containment, Arity::exactly(1), false),
            OperatorMapping::new("invoke", "()", Invocation, Arity::at_least(0), true),
            unary("inc", "++", UnaryPostfix),
            unary("dec", "--", UnaryPostfix),
            unary("unaryPlus", "+", UnaryPrefix),
            unary("unaryMinus", "-", UnaryPrefix),
            unary("not", "!", UnaryPrefix),
        ])
    }

    /// Process-wide standard catalog, built on first use.
    pub fn shared() -> &'static Catalog {
        static SHARED: OnceLock<Catalog> = OnceLock::new();
        SHARED.get_or_init(|| match Catalog::standard() {
            Ok(c) => c,
            Err(e) => panic!("built-in operator catalog is malformed: {e}"),
        })
    }

    pub fn lookup(&self, canonical_name: &str) -> Option<&OperatorMapping> {
        self.by_name.get(canonical_name).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &OperatorMapping> {
        self.entries.iter()
    }

    pub fn family_mappings(&self, family: OperatorFamily) -> impl Iterator<Item = &OperatorMapping> {
        self.entries.iter().filter(move |m| m.family == family)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
