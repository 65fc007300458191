pub mod check;
pub mod config;
pub mod facts;
pub mod scenario;

pub use check::*;
pub use config::*;
pub use facts::*;

#[cfg(test)]
mod scenario_tests {
    use super::scenario::*;
    use std::path::Path;

    fn run(dir: &str) {
        let p = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/scenarios").join(dir);
        let (exp, report) = simulate(&p).unwrap();
        assert_eq!(report.unresolved, exp.unresolved, "{}", exp.scenario_id);
        assert_eq!(report.findings.len(), exp.findings.len(), "{}: {:#?}", exp.scenario_id, report.findings);
        for (got, want) in report.findings.iter().zip(&exp.findings) {
            assert_eq!(got.location.line, want.line, "{}", exp.scenario_id);
            assert_eq!(got.rule_id, want.rule_id, "{}", exp.scenario_id);
            assert_eq!(got.message, want.message, "{}", exp.scenario_id);
        }
    }

    #[test]
    fn scenario_sc01_arithmetic() {
        run("SC-01-arithmetic");
    }

    #[test]
    fn scenario_sc02_contains_overloads() {
        run("SC-02-contains-overloads");
    }

    #[test]
    fn scenario_sc03_indexed_access() {
        run("SC-03-indexed-access");
    }

    #[test]
    fn scenario_sc04_unary() {
        run("SC-04-unary");
    }

    #[test]
    fn scenario_sc05_invoke_and_unresolved() {
        run("SC-05-invoke-and-unresolved");
    }

    #[test]
    fn scenario_sc06_disabled_families() {
        run("SC-06-disabled-families");
    }

    #[test]
    fn unknown_family_in_fixture_is_an_error() {
        let exp: ScenarioExpected = serde_yaml::from_str("scenario_id: x\ndisabled_families: [bitwise]\n").unwrap();
        assert!(scenario_config(&exp).is_err());
    }
}
