//! bmgen - Beat map generator
//!
//! Usage: bmgen <input_audio_path> <output_json_path> [--title T] [--difficulty D]

use anyhow::{Context, Result};
use beatmap_cli::output::{print_json_summary, print_summary};
use beatmap_core::{
    generate_beat_map, write_beat_map, FeatureExtractor, FeatureFile, GeneratorSettings,
    RequestedDifficulty, SpectralFluxExtractor,
};
use beatmap_fmt::BeatMapStore;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bmgen")]
#[command(about = "Generate rhythm game beat maps from audio files", long_about = None)]
struct Args {
    /// Input audio file path (or feature JSON with --features)
    input: PathBuf,

    /// Output path for the beat map JSON
    output: PathBuf,

    /// Song title written into the map [default: Unknown]
    #[arg(short, long)]
    title: Option<String>,

    /// Easy, Normal or Hard [default: Normal]
    #[arg(short, long)]
    difficulty: Option<String>,

    /// Treat the input as a precomputed analysis JSON document
    #[arg(long)]
    features: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also save the map into this beat map store directory
    #[arg(long)]
    store: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Default: warnings only, so the summary stays readable
    let level = if args.verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    // Settings file is optional; built-in defaults otherwise
    let settings = match &args.config {
        Some(path) => GeneratorSettings::load(path)?,
        None => GeneratorSettings::default(),
    };

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| settings.defaults.title.clone());
    // Reject an unknown difficulty before any analysis runs
    let difficulty: RequestedDifficulty = args
        .difficulty
        .as_deref()
        .unwrap_or(&settings.defaults.difficulty)
        .parse()?;

    // Precomputed analysis or decode the audio ourselves
    let extractor: Box<dyn FeatureExtractor> = if args.features {
        Box::new(FeatureFile)
    } else {
        Box::new(SpectralFluxExtractor::new(settings.analysis.clone())?)
    };

    let report = generate_beat_map(extractor.as_ref(), &args.input, &title, difficulty)?;

    // Output file is written last, after every fallible step
    let store_dir = args
        .store
        .clone()
        .or_else(|| settings.store.directory.as_ref().map(PathBuf::from));
    if let Some(dir) = store_dir {
        let store = BeatMapStore::open(dir)?;
        store.save(&title, &report.beat_map)?;
    }

    write_beat_map(&args.output, &report.beat_map)
        .with_context(|| format!("Failed to write beat map: {}", args.output.display()))?;

    if args.json {
        print_json_summary(&report, &args.output);
    } else {
        print_summary(&report, &args.output);
    }

    Ok(())
}
