use bgate::config::AppConfig;
use bgate::error::AppError;
use bgate::report::{write_markdown_report, write_pdf_report, ReportError};
use bgate::scenario::{generate_scenarios, ScenarioRecord};
use bgate::scoring::{ScoreRecord, ScoringEngine};
use bgate::{dataset, Rubric};
use std::fs;
use tracing::info;

#[derive(Debug, Clone, Copy)]
pub(crate) struct RunOptions {
    pub(crate) scenario_count: usize,
    pub(crate) seed: u64,
}

/// Full pipeline: generate, score, render, then list the produced artifacts.
pub(crate) fn run_all(config: &AppConfig, options: RunOptions) -> Result<(), AppError> {
    let scenarios = write_scenarios(config, options)?;
    let scores = score_scenarios(config, &scenarios)?;
    render_reports(config, &scenarios, &scores)?;

    println!("Done.");
    println!("Generated:");
    println!("- {}", config.scenarios_path().display());
    println!("- {}", config.scores_path().display());
    println!("- {}/*.md and *.pdf", config.reports_dir().display());
    Ok(())
}

pub(crate) fn generate(config: &AppConfig, options: RunOptions) -> Result<(), AppError> {
    write_scenarios(config, options)?;
    println!("Generated {}", config.scenarios_path().display());
    Ok(())
}

pub(crate) fn score(config: &AppConfig) -> Result<(), AppError> {
    let scenarios = dataset::read_scenarios(config.scenarios_path())?;
    let scores = score_scenarios(config, &scenarios)?;
    println!(
        "Scored {} scenarios into {}",
        scores.len(),
        config.scores_path().display()
    );
    Ok(())
}

pub(crate) fn report(config: &AppConfig) -> Result<(), AppError> {
    let scenarios = dataset::read_scenarios(config.scenarios_path())?;
    let scores = dataset::read_scores(config.scores_path())?;
    let count = render_reports(config, &scenarios, &scores)?;
    println!("Rendered {count} reports into {}", config.reports_dir().display());
    Ok(())
}

fn write_scenarios(
    config: &AppConfig,
    options: RunOptions,
) -> Result<Vec<ScenarioRecord>, AppError> {
    fs::create_dir_all(&config.data_dir)?;
    let scenarios = generate_scenarios(options.scenario_count, options.seed);
    dataset::write_scenarios(config.scenarios_path(), &scenarios)?;
    info!(
        count = scenarios.len(),
        seed = options.seed,
        "generated scenario dataset"
    );
    Ok(scenarios)
}

fn score_scenarios(
    config: &AppConfig,
    scenarios: &[ScenarioRecord],
) -> Result<Vec<ScoreRecord>, AppError> {
    let rubric = Rubric::load(&config.rubric_path)?;
    let engine = ScoringEngine::new(rubric);
    let scores = engine.score_all(scenarios);

    fs::create_dir_all(config.scores_dir())?;
    dataset::write_scores(config.scores_path(), &scores)?;
    info!(count = scores.len(), "scored scenarios");
    Ok(scores)
}

/// Render one Markdown and one PDF document per scenario, named by id.
///
/// Scores are matched to scenarios by `scenario_id`; a score without a
/// matching scenario is a dataset error, not something to skip.
fn render_reports(
    config: &AppConfig,
    scenarios: &[ScenarioRecord],
    scores: &[ScoreRecord],
) -> Result<usize, AppError> {
    let reports_dir = config.reports_dir();
    fs::create_dir_all(&reports_dir)?;

    let mut rendered = 0;
    for score in scores {
        let scenario = scenarios
            .iter()
            .find(|scenario| scenario.scenario_id == score.scenario_id)
            .ok_or_else(|| ReportError::MissingScenario {
                scenario_id: score.scenario_id.clone(),
            })?;

        let md_path = write_markdown_report(&reports_dir, scenario, score)?;
        let text = fs::read_to_string(&md_path)?;
        write_pdf_report(md_path.with_extension("pdf"), &text)?;
        rendered += 1;
    }
    info!(count = rendered, "rendered reports");
    Ok(rendered)
}
