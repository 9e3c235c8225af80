use crate::configuration::Settings;
use crate::scenarios::{Scenario, SetupError, SuiteContext};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioOutcome {
    Passed,
    Failed(String),
    NotRun,
}

#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub outcome: ScenarioOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    scenarios: Vec<ScenarioReport>,
}

impl SuiteReport {
    fn record(&mut self, scenario: Scenario, outcome: ScenarioOutcome) {
        self.scenarios.push(ScenarioReport { scenario, outcome });
    }

    pub fn scenarios(&self) -> &[ScenarioReport] {
        &self.scenarios
    }

    pub fn outcome_of(&self, scenario: Scenario) -> Option<&ScenarioOutcome> {
        self.scenarios
            .iter()
            .find(|report| report.scenario == scenario)
            .map(|report| &report.outcome)
    }

    pub fn passed_count(&self) -> usize {
        self.scenarios
            .iter()
            .filter(|report| report.outcome == ScenarioOutcome::Passed)
            .count()
    }

    pub fn is_success(&self) -> bool {
        !self.scenarios.is_empty() && self.passed_count() == self.scenarios.len()
    }
}

/// Authenticate, then run every scenario in order against one context.
///
/// Setup failures abort before any scenario runs.
#[tracing::instrument(
    name = "Running Story Spoiler suite",
    skip_all,
    fields(suite_run_id = %Uuid::new_v4())
)]
pub async fn run_suite(settings: &Settings) -> Result<SuiteReport, SetupError> {
    let mut context = SuiteContext::build(settings).await?;
    Ok(run_scenarios(&mut context).await)
}

/// Run the scenarios in `Scenario::ALL` order. A fatal error marks the rest as not run.
pub async fn run_scenarios(context: &mut SuiteContext) -> SuiteReport {
    let mut report = SuiteReport::default();
    let mut aborted = false;
    for scenario in Scenario::ALL {
        if aborted {
            report.record(scenario, ScenarioOutcome::NotRun);
            continue;
        }
        let outcome = match scenario.run(context).await {
            Ok(()) => {
                tracing::info!(%scenario, "Scenario passed");
                ScenarioOutcome::Passed
            }
            Err(e) => {
                tracing::error!(%scenario, error.cause_chain = ?e, "Scenario failed");
                aborted = e.is_fatal();
                ScenarioOutcome::Failed(e.to_string())
            }
        };
        report.record(scenario, outcome);
    }
    report
}
