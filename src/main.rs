use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use stroke_prep::exchange::DataMessage;
use stroke_prep::{Dataset, PipelineConfig, prepare_evaluation, prepare_training};

#[derive(Parser, Debug)]
#[command(
    name = "stroke-prep",
    version,
    about = "Encode, balance and split stroke records for model training."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load, balance and split the training file.
    Prepare(PrepareArgs),
    /// Load the evaluation file without balancing or splitting.
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug)]
struct PrepareArgs {
    /// TOML file overriding the default pipeline settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Training CSV, overrides the config value.
    #[arg(long)]
    training: Option<PathBuf>,
    /// Write train.json and validation.json data messages here.
    #[arg(long)]
    emit_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Evaluation CSV, overrides the config value.
    #[arg(long)]
    evaluation: Option<PathBuf>,
    /// Write the data message to this file.
    #[arg(long)]
    emit: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Prepare(args) => run_prepare(args),
        Command::Evaluate(args) => run_evaluate(args),
    }
}

fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(PipelineConfig::default()),
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(path) = args.training {
        config.training_path = path;
    }

    let sets = prepare_training(&config).context("preparing training data")?;
    print_summary("train", &sets.train);
    print_summary("validation", &sets.validation);

    if let Some(dir) = args.emit_dir {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating {}", dir.display()))?;
        emit(&dir.join("train.json"), &sets.train)?;
        emit(&dir.join("validation.json"), &sets.validation)?;
    }
    Ok(())
}

fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(path) = args.evaluation {
        config.evaluation_path = path;
    }

    let dataset = prepare_evaluation(&config).context("preparing evaluation data")?;
    print_summary("evaluation", &dataset);

    if let Some(path) = args.emit {
        emit(&path, &dataset)?;
    }
    Ok(())
}

fn print_summary(name: &str, dataset: &Dataset) {
    let (negatives, positives) = dataset.class_counts();
    println!(
        "{name}: {} rows ({negatives} negative, {positives} positive)",
        dataset.len()
    );
}

fn emit(path: &Path, dataset: &Dataset) -> Result<()> {
    let json = DataMessage::from_dataset(dataset)
        .to_json()
        .context("serializing data message")?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Wrote {} rows to {}", dataset.len(), path.display());
    Ok(())
}
