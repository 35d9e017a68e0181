//! Compute the combat score of a single stat snapshot
//!
//! Reads one feed record (the same flat JSON object the scraper produces)
//! and prints the score with its contribution breakdown.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use roster::{RosterConfig, decode_snapshot};
use score_core::{ScoreEngine, ScoreReport};

/// Score one stat snapshot file
#[derive(Parser)]
pub struct Score {
    /// Path to a JSON stat record
    #[arg(value_name = "SNAPSHOT")]
    snapshot: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Score, attack and per-stat contributions
    Summary,
    /// Full report as JSON
    Json,
}

impl Score {
    pub fn execute(self, config: &RosterConfig) -> Result<()> {
        let json = std::fs::read_to_string(&self.snapshot)
            .with_context(|| format!("Failed to read snapshot: {}", self.snapshot.display()))?;
        let record: serde_json::Value = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse snapshot: {}", self.snapshot.display()))?;

        let snapshot = decode_snapshot(&record)
            .with_context(|| format!("Invalid snapshot: {}", self.snapshot.display()))?;
        let engine = ScoreEngine::new(
            config
                .load_score_config()
                .context("Failed to load score config")?,
        );
        let report = engine.compute(&snapshot).context("Score not computed")?;

        match self.format {
            OutputFormat::Summary => print_summary(&report),
            OutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
                println!("{json}");
            }
        }
        Ok(())
    }
}

fn print_summary(report: &ScoreReport) {
    let attack = &report.attack;

    println!(
        "{} {}",
        style("Combat Score:").bold().cyan(),
        style(report.combat_score()).bold()
    );
    println!();

    println!("{}", style("Attack:").bold().yellow());
    println!("  Base sum: {}", attack.base_sum);
    println!("  Percent bonus: {:.2}%", attack.percent_multiplier);
    println!("  PvE bonus: {}", attack.pve_bonus);
    if attack.is_capped() {
        println!(
            "  Final: {} (capped from {}, total {:.2}%)",
            attack.final_attack, attack.uncapped_attack, attack.total_cap_percent
        );
    } else {
        println!("  Final: {}", attack.final_attack);
    }
    println!();

    println!("{}", style("Contributions:").bold().yellow());
    for (kind, percent) in report.breakdown.iter() {
        println!("  {:<22} {:>8.2}%", kind.to_string(), percent);
    }
    println!(
        "  {:<22} {:>9.4}",
        "total multiplier", report.result.total_multiplier
    );
    println!();

    println!("{}", style("DPS estimate:").bold().yellow());
    println!("  Base: {:.1}", report.dps.base_dps);
    println!("  Final: {:.1}", report.dps.final_dps);
}
