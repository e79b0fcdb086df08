//! Scorebook CLI
//!
//! Reads a game snapshot (game + stat lines + recorded innings) from JSON,
//! then either reconciles the linescore and emits the resulting upserts,
//! or renders the linescore table for the terminal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sb_core::{reconcile_linescore, GameSnapshot, LinescoreView, TeamLine};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sb_cli")]
#[command(about = "Reconcile and render league linescores", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile a snapshot into inning upserts
    Reconcile {
        /// Input snapshot JSON file path
        #[arg(long)]
        r#in: PathBuf,

        /// Output JSON file path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render the linescore table for a snapshot
    Linescore {
        /// Input snapshot JSON file path
        #[arg(long)]
        r#in: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Reconcile { r#in, out } => reconcile(&r#in, out.as_deref()),
        Commands::Linescore { r#in } => linescore(&r#in),
    }
}

fn load_snapshot(path: &std::path::Path) -> Result<GameSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid snapshot in {}", path.display()))
}

fn reconcile(input: &std::path::Path, output: Option<&std::path::Path>) -> Result<()> {
    let snapshot = load_snapshot(input)?;
    let upserts = reconcile_linescore(&snapshot);
    let rendered = serde_json::to_string_pretty(&upserts)?;
    match output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{rendered}"),
    }
    eprintln!("{} inning upsert(s) for game {}", upserts.len(), snapshot.game.id);
    Ok(())
}

fn linescore(input: &std::path::Path) -> Result<()> {
    let snapshot = load_snapshot(input)?;
    let view = LinescoreView::build(&snapshot.game, &snapshot.innings);

    print!("{:<12}", "team");
    for n in 1..=view.columns {
        print!("{n:>4}");
    }
    println!("{:>5}{:>4}{:>4}", "R", "H", "E");
    print_row(&view.away, view.columns);
    print_row(&view.home, view.columns);
    Ok(())
}

fn print_row(line: &TeamLine, columns: u32) {
    print!("{:<12}", line.team_id);
    for n in 0..columns as usize {
        match line.innings[n] {
            Some(runs) => print!("{runs:>4}"),
            None => print!("{:>4}", "-"),
        }
    }
    println!("{:>5}{:>4}{:>4}", line.runs, line.hits, line.errors);
}
