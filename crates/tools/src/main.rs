use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use levelgen::{GeneratedLayout, GenerationConfig, LayoutStrategy, RunMode, select_strategy};
use log::info;

mod level_file;
mod render;

use level_file::load_level_file;
use render::render_ascii;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output format for the generated layout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii, global = true)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the level described by a TOML file
    Generate {
        /// Path to the level TOML file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Pick the strategy for a level of a run, then generate it
    Select {
        #[arg(short, long, default_value_t = 0)]
        level: u32,
        #[arg(short, long, default_value_t = RunMode::Campaign)]
        mode: RunMode,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (strategy, config) = match args.command {
        Command::Generate { config } => {
            let level = load_level_file(&config)?;
            (level.strategy, level.config())
        }
        Command::Select { level, mode, seed } => {
            let plan = select_strategy(level, mode, seed);
            info!("level {level} of {mode} run {seed} uses {:?}", plan.strategy);
            (plan.strategy, plan.config)
        }
    };

    let layout = generate(&strategy, &config)?;
    match args.format {
        OutputFormat::Ascii => println!("{}", render_ascii(&layout)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&layout).context("Failed to serialize layout")?
        ),
    }
    println!("{}", summary(&layout));

    Ok(())
}

fn generate(strategy: &LayoutStrategy, config: &GenerationConfig) -> Result<GeneratedLayout> {
    strategy
        .generate(config)
        .with_context(|| format!("Generation failed for {strategy:?} with seed {}", config.seed))
}

fn summary(layout: &GeneratedLayout) -> String {
    format!(
        "{:?} {}x{} seed={} rooms={} floor={} fingerprint={:016x}",
        layout.kind,
        layout.width(),
        layout.height(),
        layout.seed,
        layout.rooms.len(),
        layout.floor_count(),
        layout.fingerprint()
    )
}
