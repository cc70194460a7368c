//! Bedtime estimation command.

use bedtime_core::{
    parse_wake_time, Alert, BedtimeEstimate, BedtimeEstimator, CalculationError, Config,
    ModelArtifact,
};
use chrono::NaiveTime;

pub fn run(
    wake: Option<String>,
    sleep: Option<f64>,
    coffee: Option<u8>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    let wake_text = wake.unwrap_or_else(|| config.inputs.wake_time.clone());
    let wake_up = parse_wake_time(&wake_text)?;
    let sleep_hours = sleep.unwrap_or(config.inputs.sleep_hours);
    let coffee_cups = coffee.unwrap_or(config.inputs.coffee_cups);

    match estimate(&config, wake_up, sleep_hours, coffee_cups) {
        Ok(estimate) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                let alert = Alert::success(&estimate);
                println!("{} {}", alert.title, alert.message);
            }
            Ok(())
        }
        Err(e) => {
            tracing::debug!(cause = %e.cause(), "bedtime estimation failed");
            let alert = Alert::failure();
            eprintln!("{}: {}", alert.title, alert.message);
            std::process::exit(1);
        }
    }
}

/// Load the configured model and run one estimation. Every failure past
/// input parsing collapses into [`CalculationError`].
fn estimate(
    config: &Config,
    wake_up: NaiveTime,
    sleep_hours: f64,
    coffee_cups: u8,
) -> Result<BedtimeEstimate, CalculationError> {
    let artifact = match &config.model.path {
        Some(path) => ModelArtifact::load(path)?,
        None => ModelArtifact::bundled()?,
    };
    tracing::debug!(model = %artifact.name, version = %artifact.version, "loaded sleep model");

    let mut estimator = BedtimeEstimator::with_clock(artifact.into_predictor(), config.ui.clock);
    estimator.estimate_bedtime(wake_up, sleep_hours, coffee_cups)
}
