use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use oplint_core::Catalog;
use oplint_rules::{Rule, RuleSet};
use oplint_runner::{check_path, Config, OutputFormat};

#[derive(Parser)]
#[command(name = "oplint", version, about = "Flags named calls that could use operator syntax")]
struct Cli {
    /// Config file (default: .oplint/oplint.toml under the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default config to .oplint/oplint.toml
    Init,

    /// List enabled rules and what they report
    Rules,

    /// Print the operator catalog
    Catalog,

    /// Check a resolved-facts JSON file
    Check {
        #[arg(long)]
        facts: PathBuf,
        /// Print findings as JSON (overrides the config)
        #[arg(long, default_value_t = false)]
        json: bool,
        #[arg(long, default_value_t = false)]
        fail_on_findings: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let repo_root = std::env::current_dir()?;
    let cfg = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_default(&repo_root)?,
    };
    tracing::debug!(root = %repo_root.display(), families = ?cfg.families, "config loaded");

    match cli.cmd {
        Command::Init => {
            let path = Config::config_path(&repo_root);
            if path.exists() {
                println!("Config already exists at {}", path.display());
            } else {
                Config::default().save_to(&path)?;
                println!("Wrote {}", path.display());
            }
        }
        Command::Rules => {
            let set = RuleSet::instance(&cfg.families);
            println!("Rule set: {}", set.id);
            for rule in set.advisor.enabled_rules() {
                println!("- {} [{}]", rule.id(), rule.family());
                println!("    {}", rule.issue().description);
            }
        }
        Command::Catalog => {
            for m in Catalog::shared().iter() {
                let fixity = m.family.fixity().map(|f| f.as_str()).unwrap_or("infix");
                println!(
                    "{:<12} {:<4} {:<15} {:<7} arity={:<5} declared_operator={}",
                    m.canonical_name,
                    m.symbol,
                    m.family.key(),
                    fixity,
                    m.arity.to_string(),
                    m.requires_declared_operator
                );
            }
        }
        Command::Check { facts, json, fail_on_findings } => {
            let report = check_path(&cfg, &facts)?;
            if json || cfg.output.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render_text());
                println!("{} call sites, {} flagged, {} unresolved", report.visited, report.flagged, report.unresolved);
            }
            if fail_on_findings && report.flagged > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
