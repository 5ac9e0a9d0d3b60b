//! Contest generation CLI
//!
//! Load a dataset, generate contests and write them out.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use contest_core::{
    assign_owners, distinct_count, seeded_rng, DataRegistry, DatasetSource, GenerationConfig,
    GenerationEngine, GenerationSummary, Identifier, Seed,
};
use contest_gen::{
    combatant_id_columns, owner_id_columns, read_id_column, write_ownership, write_records,
    CsvDataset, DatasetError, JsonDataset, OutputFormat,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "contest-gen")]
#[command(about = "Generate reproducible contest records between owned combatants", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate contests from a dataset directory
    Generate(GenerateArgs),

    /// Assign every combatant to one random owner
    Assign(AssignArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Dataset layout
    #[arg(long, value_enum, default_value = "csv")]
    format: InputFormat,

    /// Directory holding the dataset files
    #[arg(short, long)]
    input: PathBuf,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Output layout (defaults to the output file extension)
    #[arg(long, value_enum)]
    output_format: Option<OutputFormat>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed, integer or text (overrides the config file)
    #[arg(short, long)]
    seed: Option<Seed>,

    /// Opponent slots per combatant (overrides the config file)
    #[arg(long)]
    slots: Option<u32>,

    /// Redraws per slot before giving up (overrides the config file)
    #[arg(long)]
    attempt_budget: Option<u32>,
}

#[derive(Args, Debug)]
struct AssignArgs {
    /// CSV with an `id` column
    #[arg(long)]
    combatants: PathBuf,

    /// CSV with a `trainerID` column
    #[arg(long)]
    owners: PathBuf,

    /// Output CSV (`trainerID,pokename`)
    #[arg(short, long)]
    output: PathBuf,

    /// Seed, integer or text
    #[arg(short, long)]
    seed: Option<Seed>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    /// Integer ids: pokemon.csv, gym.csv, trainer_owns_pokemon.csv
    Csv,
    /// String ids: pokemon.json, gym.json, trainer.json
    Json,
}

fn load_config(args: &GenerateArgs) -> Result<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GenerationConfig::default(),
    };

    if let Some(seed) = &args.seed {
        config.seed = Some(seed.clone());
    }
    if let Some(slots) = args.slots {
        config.slots_per_combatant = slots;
    }
    if let Some(budget) = args.attempt_budget {
        config.attempt_budget = budget;
    }
    config.validate()?;
    Ok(config)
}

fn generate<Id, S>(
    source: &mut S,
    config: GenerationConfig,
    output: &Path,
    format: OutputFormat,
) -> Result<GenerationSummary>
where
    Id: Identifier + Serialize,
    S: DatasetSource<Id, Error = DatasetError>,
{
    let registry = DataRegistry::load(source, config.duplicate_ownership)
        .context("Failed to load dataset")?;

    match &config.seed {
        Some(seed) => info!(%seed, "seeded run"),
        None => info!("unseeded run"),
    }
    let engine = GenerationEngine::from_config(config)?;
    let generation = engine.run(&registry).context("Generation aborted")?;

    write_records(&generation.records, format, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(generation.summary().clone())
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let config = load_config(&args)?;
    let output = &args.output;
    let output_format = args
        .output_format
        .unwrap_or_else(|| OutputFormat::from_path(output));

    let summary = match args.format {
        InputFormat::Csv => {
            let mut source = CsvDataset::in_dir(&args.input);
            generate::<u32, _>(&mut source, config, output, output_format)?
        }
        InputFormat::Json => {
            let mut source = JsonDataset::in_dir(&args.input);
            generate::<String, _>(&mut source, config, output, output_format)?
        }
    };

    println!("Generated {} contests -> {}", summary.records, output.display());
    if summary.shortfall_slots > 0 {
        println!(
            "  - {} of {} combatants got fewer opponents than requested ({} slots unfilled)",
            summary.short_combatants, summary.owned_combatants, summary.shortfall_slots
        );
    }
    if summary.coin_flips > 0 {
        println!("  - {} contests decided by coin flip", summary.coin_flips);
    }
    Ok(())
}

fn run_assign(args: AssignArgs) -> Result<()> {
    let combatant_ids = read_id_column(&args.combatants, combatant_id_columns())
        .with_context(|| format!("Failed to read {}", args.combatants.display()))?;
    let owner_ids = read_id_column(&args.owners, owner_id_columns())
        .with_context(|| format!("Failed to read {}", args.owners.display()))?;

    let mut rng = seeded_rng(args.seed.as_ref());
    let pairs = assign_owners(&combatant_ids, &owner_ids, &mut rng)?;
    write_ownership(&pairs, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("Generated {} ownership records -> {}", pairs.len(), args.output.display());
    println!("  - {} unique combatants", pairs.len());
    println!("  - {} candidate owners", distinct_count(&owner_ids));
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Assign(args) => run_assign(args),
    }
}
