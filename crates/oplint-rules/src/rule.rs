use oplint_core::{evaluate, format_message, CallSite, Catalog, Evaluation, Finding, NoMatchReason, OperatorFamily};
use tracing::debug;

use crate::types::Issue;

pub trait Rule: Send + Sync {
    fn id(&self) -> &str;
    fn family(&self) -> OperatorFamily;
    fn issue(&self) -> &Issue;
    fn eval(&self, site: &CallSite) -> Option<Finding>;
}

/// The one data-driven rule: which family it reports is the only parameter.
pub struct OperatorRule<'c> {
    family: OperatorFamily,
    issue: Issue,
    catalog: &'c Catalog,
    active: bool,
}

impl OperatorRule<'static> {
    pub fn new(family: OperatorFamily) -> Self {
        Self::with_catalog(family, Catalog::shared())
    }
}

impl<'c> OperatorRule<'c> {
    pub fn with_catalog(family: OperatorFamily, catalog: &'c Catalog) -> Self {
        Self {
            family,
            issue: Issue::for_family(family),
            catalog,
            active: true,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Evaluation restricted to this rule's family.
    pub fn check<'a>(&'a self, site: &'a CallSite) -> Evaluation<'a> {
        if !self.active {
            return Evaluation::NoMatch(NoMatchReason::FamilyDisabled);
        }
        match evaluate(self.catalog, site) {
            Evaluation::Match(m) if m.mapping.family != self.family => Evaluation::NoMatch(NoMatchReason::NameMismatch),
            other => other,
        }
    }
}

impl Rule for OperatorRule<'_> {
    fn id(&self) -> &str {
        &self.issue.id
    }

    fn family(&self) -> OperatorFamily {
        self.family
    }

    fn issue(&self) -> &Issue {
        &self.issue
    }

    fn eval(&self, site: &CallSite) -> Option<Finding> {
        match self.check(site) {
            Evaluation::Match(m) => Some(Finding {
                rule_id: self.issue.id.clone(),
                family: self.family,
                severity: self.issue.severity,
                location: site.location.clone(),
                message: format_message(&m),
            }),
            Evaluation::NoMatch(reason) => {
                // name mismatches are the common case; not worth a line each
                if reason != NoMatchReason::NameMismatch {
                    debug!(
                        rule = %self.issue.id,
                        %reason,
                        canonical = site.target.resolved().map(|t| t.canonical_name.as_str()).unwrap_or("-"),
                        location = %site.location,
                        "call site not eligible"
                    );
                }
                None
            }
        }
    }
}
