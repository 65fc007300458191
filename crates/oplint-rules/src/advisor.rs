use oplint_core::{CallSite, Catalog, FamilyConfig, Finding, OperatorFamily};

use crate::host::{Resolver, Sink};
use crate::rule::{OperatorRule, Rule};

/// Entry point called by the host traversal once per call expression.
///
/// Holds one rule per family; disabled families stay in the list but never
/// consult the catalog. Nothing is remembered between calls.
pub struct Advisor<'c> {
    rules: Vec<OperatorRule<'c>>,
}

impl Advisor<'static> {
    pub fn new(config: &FamilyConfig) -> Self {
        Self::with_catalog(config, Catalog::shared())
    }
}

impl Default for Advisor<'static> {
    fn default() -> Self {
        Self::new(&FamilyConfig::default())
    }
}

impl<'c> Advisor<'c> {
    pub fn with_catalog(config: &FamilyConfig, catalog: &'c Catalog) -> Self {
        let rules = OperatorFamily::ALL
            .into_iter()
            .map(|family| OperatorRule::with_catalog(family, catalog).active(config.is_enabled(family)))
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> impl Iterator<Item = &OperatorRule<'c>> {
        self.rules.iter()
    }

    pub fn enabled_rules(&self) -> impl Iterator<Item = &OperatorRule<'c>> {
        self.rules.iter().filter(|r| r.is_active())
    }

    /// Run every enabled rule against `site`, report and return the finding.
    /// A canonical name belongs to one family, so at most one rule fires.
    pub fn on_call_site(&self, site: &CallSite, sink: &mut dyn Sink) -> Option<Finding> {
        let finding = self.rules.iter().find_map(|rule| rule.eval(site))?;
        sink.report(finding.clone());
        Some(finding)
    }

    pub fn visit<R: Resolver>(&self, node: &R::Node, resolver: &R, sink: &mut dyn Sink) -> Option<Finding> {
        let site = resolver.call_site(node);
        self.on_call_site(&site, sink)
    }
}
