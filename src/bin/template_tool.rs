//! Template Tool
//!
//! Inspect saved template documents against a definition catalog.

use bio_templates::core::config::TemplateConfig;
use bio_templates::core::error::Result;
use bio_templates::defs::DefCatalog;
use bio_templates::equivalence::are_equivalent;
use bio_templates::persistence::{LoadReport, Loaded, PersistenceAdapter};
use bio_templates::records::describe::describe;
use bio_templates::records::RecordStack;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};

/// Template Tool - describe and compare saved templates
#[derive(Parser, Debug)]
#[command(name = "template_tool")]
#[command(about = "Describe, compare and validate saved template documents")]
struct Args {
    /// Definition catalog (TOML)
    #[arg(long, default_value = "data/defs/base.toml")]
    catalog: PathBuf,

    /// Settings file (TOML); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for backstory substitution on load
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the full description of a saved template
    Describe { file: PathBuf },
    /// Report whether two saved templates would stack together
    Compare { a: PathBuf, b: PathBuf },
    /// Validate a settings file
    CheckConfig { file: PathBuf },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("bio_templates=info")
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if let Command::CheckConfig { file } = &args.command {
        let config = TemplateConfig::load_file(file)?;
        println!("{} is valid", file.display());
        println!("  brain templating requires clone: {}", config.brain_templating_requires_clone);
        println!("  max cloning time: {} days", config.max_cloning_time_days);
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => TemplateConfig::load_file(path)?,
        None => TemplateConfig::default(),
    };
    let catalog = DefCatalog::load_file(&args.catalog)?;
    let adapter = PersistenceAdapter::new(&catalog, &config);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    match args.command {
        Command::Describe { file } => {
            let stack = load(&adapter, &file, &mut rng)?;
            let base = format!("A stored {}.", stack.record.variant().noun());
            println!("{}", stack.label());
            println!("{}", describe(&stack.record, &base));
        }
        Command::Compare { a, b } => {
            let first = load(&adapter, &a, &mut rng)?;
            let second = load(&adapter, &b, &mut rng)?;
            let verdict = if are_equivalent(&first.record, &second.record) {
                "stack together"
            } else {
                "do not stack"
            };
            println!("{} and {} {}", first.label_no_count(), second.label_no_count(), verdict);
        }
        Command::CheckConfig { .. } => {}
    }
    Ok(())
}

fn load(adapter: &PersistenceAdapter, path: &Path, rng: &mut ChaCha8Rng) -> Result<RecordStack> {
    let json = std::fs::read_to_string(path)?;
    let Loaded { value, report } = adapter.stack_from_json(&json, rng)?;
    print_repairs(path, &report);
    Ok(value)
}

fn print_repairs(path: &Path, report: &LoadReport) {
    if report.is_clean() {
        return;
    }
    eprintln!("Warning: {} needed repairs on load", path.display());
    if let Some(from) = report.upgraded_from {
        eprintln!("  upgraded from format version {}", from);
    }
    if let Some(kind) = &report.unresolved_kind {
        eprintln!("  kind '{}' is not installed; template is unusable", kind);
    }
    let pruned = [
        ("conditions", report.pruned_conditions),
        ("traits", report.pruned_traits),
        ("skills", report.pruned_skills),
        ("trained behaviors", report.pruned_training),
    ];
    for (what, count) in pruned.into_iter().filter(|(_, count)| *count > 0) {
        eprintln!("  pruned {} {}", count, what);
    }
    for reference in &report.dropped_references {
        eprintln!("  dropped {}", reference);
    }
    for (slot, missing) in &report.substituted_backstories {
        eprintln!("  replaced {:?} backstory '{}'", slot, missing);
    }
}
