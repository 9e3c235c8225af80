use anyhow::Context;
use story_spoiler::configuration::get_configuration;
use story_spoiler::suite::{ScenarioOutcome, run_suite};
use story_spoiler::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("story-spoiler-suite".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let report = run_suite(&configuration)
        .await
        .context("Failed to set up the Story Spoiler suite.")?;

    for entry in report.scenarios() {
        match &entry.outcome {
            ScenarioOutcome::Passed => tracing::info!(scenario = %entry.scenario, "PASSED"),
            ScenarioOutcome::Failed(reason) => {
                tracing::error!(scenario = %entry.scenario, %reason, "FAILED")
            }
            ScenarioOutcome::NotRun => tracing::warn!(scenario = %entry.scenario, "NOT RUN"),
        }
    }

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} scenarios passed.",
            report.passed_count(),
            report.scenarios().len()
        );
    }
    tracing::info!("All {} scenarios passed.", report.passed_count());
    Ok(())
}
