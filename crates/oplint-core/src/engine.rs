use std::fmt;

use crate::catalog::{Catalog, OperatorMapping};
use crate::types::{CallSite, CallTarget, ResolvedCallTarget};

/// Why a call site produced no finding. Informational only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoMatchReason {
    Unresolved,
    NameMismatch,
    ArityMismatch,
    NotDeclaredOperator,
    FamilyDisabled,
}

impl fmt::Display for NoMatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NoMatchReason::Unresolved => "unresolved",
            NoMatchReason::NameMismatch => "name_mismatch",
            NoMatchReason::ArityMismatch => "arity_mismatch",
            NoMatchReason::NotDeclaredOperator => "not_declared_operator",
            NoMatchReason::FamilyDisabled => "family_disabled",
        };
        f.write_str(s)
    }
}

/// A call site eligible for its symbolic form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match<'a> {
    pub mapping: &'a OperatorMapping,
    pub target: &'a ResolvedCallTarget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evaluation<'a> {
    Match(Match<'a>),
    NoMatch(NoMatchReason),
}

impl<'a> Evaluation<'a> {
    pub fn matched(self) -> Option<Match<'a>> {
        match self {
            Evaluation::Match(m) => Some(m),
            Evaluation::NoMatch(_) => None,
        }
    }
}

/// Decide whether `site` can be written with an operator symbol.
///
/// Checks run in a fixed order: resolution, catalog membership, supplied
/// argument count, then the resolver's operator-declaration flag.
pub fn evaluate<'a>(catalog: &'a Catalog, site: &'a CallSite) -> Evaluation<'a> {
    let target = match &site.target {
        CallTarget::Resolved(t) => t,
        CallTarget::Unresolved => return Evaluation::NoMatch(NoMatchReason::Unresolved),
    };

    let Some(mapping) = catalog.lookup(&target.canonical_name) else {
        return Evaluation::NoMatch(NoMatchReason::NameMismatch);
    };

    // supplied, not declared: defaulted parameters do not count
    if !mapping.arity.contains(target.supplied_argument_count) {
        return Evaluation::NoMatch(NoMatchReason::ArityMismatch);
    }

    if mapping.requires_declared_operator && !target.is_declared_operator {
        return Evaluation::NoMatch(NoMatchReason::NotDeclaredOperator);
    }

    Evaluation::Match(Match { mapping, target })
}
