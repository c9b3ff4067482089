//! Paper values CLI
//!
//! Command-line tool for syncing manuscript numbers with analysis result tables.

use clap::{Args, Parser, Subcommand, ValueEnum};
use pv_core::{
    check_templates, extract_all, extract_with_progress, update_with_values, PaperConfig, ValueMap,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "paper-values")]
#[command(about = "Update manuscript text with values extracted from result tables", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    paths: PathArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PathArgs {
    /// Repository root the default layout is resolved against
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// JSON config file (overrides the default layout)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the processed TUSCO tables
    #[arg(long, global = true)]
    data_root: Option<PathBuf>,

    /// Directory holding the per-figure tables
    #[arg(long, global = true)]
    figures_root: Option<PathBuf>,

    /// Manuscript text file to update
    #[arg(long, global = true)]
    manuscript: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract values and substitute them into the manuscript
    Update {
        /// Compute everything but leave the manuscript untouched
        #[arg(long)]
        dry_run: bool,

        /// Append a record of this run to a JSON history file
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Extract values and print them
    Extract {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Report which placeholder sentences are present in the manuscript
    Check,

    /// Write the resolved configuration to a JSON file
    InitConfig {
        /// Output path for the config file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> pv_core::Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli.paths)?;

    match cli.command {
        Commands::Update { dry_run, history } => cmd_update(config, dry_run, history),
        Commands::Extract { format } => cmd_extract(&config, format),
        Commands::Check => cmd_check(&config),
        Commands::InitConfig { output } => cmd_init_config(&config, &output),
    }
}

/// Config file or default layout, then per-path overrides
fn resolve_config(paths: &PathArgs) -> pv_core::Result<PaperConfig> {
    let mut config = match &paths.config {
        Some(path) => PaperConfig::load(path)?,
        None => PaperConfig::from_repo_root(&paths.root),
    };

    if let Some(dir) = &paths.data_root {
        config.data_root = dir.clone();
    }
    if let Some(dir) = &paths.figures_root {
        config.figures_root = dir.clone();
    }
    if let Some(file) = &paths.manuscript {
        config.manuscript = file.clone();
    }

    log::debug!("resolved config: {:?}", config);
    Ok(config)
}

fn cmd_update(mut config: PaperConfig, dry_run: bool, history: Option<PathBuf>) -> pv_core::Result<()> {
    if history.is_some() {
        config.history = history;
    }

    println!("Extracting numerical values from tables...");
    let values = extract_with_progress(&config, |step, name| {
        println!();
        println!("{}. Extracting {}...", step, name);
    })?;
    print_values(&values);

    let outcome = update_with_values(&config, values, dry_run)?;

    println!();
    println!("{}", "=".repeat(50));
    println!("UPDATING PAPER TEXT...");
    println!("{}", "=".repeat(50));
    for label in &outcome.report.applied {
        println!("✓ Updated {}", label);
    }

    println!();
    if outcome.written {
        println!("✓ Paper text updated successfully!");
        println!("  Original backed up to: {}", outcome.backup.display());
    } else {
        println!("Dry run: {} not modified", config.manuscript.display());
        println!(
            "  {} of {} substitutions would apply",
            outcome.report.applied.len(),
            outcome.report.applied.len() + outcome.report.skipped.len()
        );
    }

    Ok(())
}

fn cmd_extract(config: &PaperConfig, format: Format) -> pv_core::Result<()> {
    let values = extract_all(config)?;

    match format {
        Format::Text => print_values(&values),
        Format::Json => println!("{}", serde_json::to_string_pretty(&values)?),
    }

    Ok(())
}

fn cmd_check(config: &PaperConfig) -> pv_core::Result<()> {
    println!("Manuscript: {}", config.manuscript.display());
    println!();

    let results = check_templates(config)?;
    for (label, present) in &results {
        let marker = if *present { "found" } else { "missing" };
        println!("  [{}] {}", marker, label);
    }

    let found = results.iter().filter(|(_, present)| *present).count();
    println!();
    println!("{} of {} placeholder sentences found", found, results.len());

    Ok(())
}

fn cmd_init_config(config: &PaperConfig, output: &PathBuf) -> pv_core::Result<()> {
    config.save(output)?;
    println!("Created config file: {}", output.display());
    println!();
    println!("Edit the paths, then run:");
    println!("  paper-values --config {} update", output.display());

    Ok(())
}

/// Sorted `KEY: value` listing
fn print_values(values: &ValueMap) {
    println!();
    println!("{}", "=".repeat(50));
    println!("EXTRACTED VALUES:");
    println!("{}", "=".repeat(50));
    for (key, value) in values.iter() {
        println!("{}: {}", key, value);
    }
}
