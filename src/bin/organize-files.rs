//! organize-files - sort the files of a folder into subfolders by type

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use csvscrub::logging;
use csvscrub::output::print_error;
use csvscrub::organize::{organize_folder, OrganizeConfig, OrganizeSummary};

/// Organize files inside a folder into subfolders by type
#[derive(Parser, Debug)]
#[command(name = "organize-files")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Folder whose files should be organized
    folder: PathBuf,

    /// Show what would be done without moving any files
    #[arg(long)]
    dry_run: bool,

    /// Run without printing per-file output
    #[arg(long)]
    quiet: bool,

    /// JSON file mapping category names to extension lists
    #[arg(long)]
    categories: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.categories {
        Some(path) => OrganizeConfig::from_json_file(path)?,
        None => OrganizeConfig::default(),
    }
    .with_dry_run(cli.dry_run);

    let folder = std::path::absolute(&cli.folder)
        .with_context(|| format!("Invalid folder path: {}", cli.folder.display()))?;
    let verbose = !cli.quiet;

    if verbose {
        println!("Organizing folder: {}", folder.display());
        if cli.dry_run {
            println!("Mode: DRY RUN (no files will be moved)\n");
        }
    }

    let summary = organize_folder(&folder, &config)?;

    if verbose {
        print_moves(&summary, &folder);
        print_summary(&summary);
    }
    Ok(())
}

fn print_moves(summary: &OrganizeSummary, folder: &Path) {
    let action = if summary.dry_run { "[DRY RUN]" } else { "[MOVE]" };
    for planned in &summary.moves {
        let name = planned
            .from
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let target = planned.to.strip_prefix(folder).unwrap_or(&planned.to);
        println!("{} {} -> {}", action, name, target.display());
    }
}

fn print_summary(summary: &OrganizeSummary) {
    println!("\nSummary:");
    if summary.moves.is_empty() {
        println!("  No files found to organize.");
        return;
    }
    for (category, count) in summary.sorted_counts() {
        println!("  {}: {} file(s)", category, count);
    }
}
