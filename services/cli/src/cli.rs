use crate::pipeline::{self, RunOptions};
use bgate::config::AppConfig;
use bgate::error::AppError;
use bgate::telemetry;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const DEFAULT_SCENARIO_COUNT: usize = 40;
const DEFAULT_SEED: u64 = 7;

#[derive(Parser, Debug)]
#[command(
    name = "bgate",
    about = "Generate, score, and report on blockchain governance benchmark scenarios",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate scenarios, score them, and render every report (default command)
    Run(RunArgs),
    /// Generate a synthetic scenario dataset without scoring it
    Generate(GenerateArgs),
    /// Score an existing scenario dataset against the rubric
    Score(CommonArgs),
    /// Render Markdown and PDF reports from already-scored scenarios
    Report(CommonArgs),
}

#[derive(Args, Debug, Default)]
struct CommonArgs {
    /// Override the rubric file path
    #[arg(long)]
    rubric: Option<PathBuf>,
    /// Override the scenario dataset directory
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Override the scores/reports output directory
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

impl CommonArgs {
    fn apply(self, config: &mut AppConfig) {
        if let Some(rubric) = self.rubric {
            config.rubric_path = rubric;
        }
        if let Some(data_dir) = self.data_dir {
            config.data_dir = data_dir;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
    }
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Number of scenarios to generate. Defaults to 40.
    #[arg(long)]
    scenarios: Option<usize>,
    /// Seed for the scenario generator. Defaults to 7.
    #[arg(long)]
    seed: Option<u64>,
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// Number of scenarios to generate. Defaults to 40.
    #[arg(long)]
    scenarios: Option<usize>,
    /// Seed for the scenario generator. Defaults to 7.
    #[arg(long)]
    seed: Option<u64>,
    #[command(flatten)]
    common: CommonArgs,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Command::Run(RunArgs::default()));

    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Run(args) => {
            args.common.apply(&mut config);
            let options = RunOptions {
                scenario_count: args.scenarios.unwrap_or(DEFAULT_SCENARIO_COUNT),
                seed: args.seed.unwrap_or(DEFAULT_SEED),
            };
            pipeline::run_all(&config, options)
        }
        Command::Generate(args) => {
            args.common.apply(&mut config);
            let options = RunOptions {
                scenario_count: args.scenarios.unwrap_or(DEFAULT_SCENARIO_COUNT),
                seed: args.seed.unwrap_or(DEFAULT_SEED),
            };
            pipeline::generate(&config, options)
        }
        Command::Score(common) => {
            common.apply(&mut config);
            pipeline::score(&config)
        }
        Command::Report(common) => {
            common.apply(&mut config);
            pipeline::report(&config)
        }
    }
}
