use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use oplint_core::{CallTarget, Finding};
use oplint_rules::Advisor;

use crate::facts::{FactsFile, FactsResolver};
use crate::Config;

#[derive(Clone, Debug, Default, Serialize)]
pub struct Report {
    pub visited: usize,
    pub unresolved: usize,
    pub flagged: usize,
    pub findings: Vec<Finding>,
}

impl Report {
    /// One `file:line:col: [RuleId] message` line per finding.
    pub fn render_text(&self) -> String {
        let mut s = String::new();
        for f in &self.findings {
            s.push_str(&format!("{}: [{}] {}\n", f.location, f.rule_id, f.message));
        }
        s
    }
}

/// Run the advisor over every recorded call site, in file order.
pub fn check_facts(cfg: &Config, facts: &FactsFile) -> Report {
    let advisor = Advisor::new(&cfg.families);
    let mut report = Report::default();
    for site in &facts.call_sites {
        report.visited += 1;
        if site.target == CallTarget::Unresolved {
            report.unresolved += 1;
        }
        advisor.visit(site, &FactsResolver, &mut report.findings);
    }
    report.flagged = report.findings.len();
    report
}

pub fn check_path(cfg: &Config, path: &Path) -> Result<Report> {
    let facts = FactsFile::load(path)?;
    let report = check_facts(cfg, &facts);
    info!(
        path = %path.display(),
        visited = report.visited,
        unresolved = report.unresolved,
        flagged = report.flagged,
        "checked facts file"
    );
    Ok(report)
}
