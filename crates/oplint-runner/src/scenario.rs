use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use oplint_core::OperatorFamily;

use crate::check::{check_facts, Report};
use crate::facts::FactsFile;
use crate::Config;

#[derive(Debug, Deserialize)]
pub struct ScenarioExpected {
    pub scenario_id: String,
    #[serde(default)]
    pub disabled_families: Vec<String>,
    #[serde(default)]
    pub unresolved: usize,
    #[serde(default)]
    pub findings: Vec<ExpectedFinding>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectedFinding {
    pub line: u32,
    pub rule_id: String,
    pub message: String,
}

pub fn load_expected(dir: &Path) -> Result<ScenarioExpected> {
    let p = dir.join("expected.yaml");
    let s = std::fs::read_to_string(&p).with_context(|| format!("read expected.yaml: {}", p.display()))?;
    let exp: ScenarioExpected = serde_yaml::from_str(&s).with_context(|| "parse expected.yaml")?;
    Ok(exp)
}

/// Config the scenario runs under: defaults minus its disabled families.
pub fn scenario_config(exp: &ScenarioExpected) -> Result<Config> {
    let mut cfg = Config::default();
    for key in &exp.disabled_families {
        let family = OperatorFamily::from_key(key).ok_or_else(|| anyhow!("unknown family in expected.yaml: {key}"))?;
        cfg.families.set(family, false);
    }
    Ok(cfg)
}

/// Fixture-mode run: `facts.json` through the advisor under the scenario config.
pub fn simulate(dir: &Path) -> Result<(ScenarioExpected, Report)> {
    let exp = load_expected(dir)?;
    let cfg = scenario_config(&exp)?;
    let facts = FactsFile::load(&dir.join("facts.json"))?;
    Ok((exp, check_facts(&cfg, &facts)))
}
