//! Bedtime estimation.
//!
//! Maps (wake-up time, desired sleep hours, coffee cups) through the
//! injected [`Predictor`] and subtracts the estimated sleep need from the
//! wake-up time. Plain time-of-day arithmetic: subtraction wraps past
//! midnight, no calendar dates involved.

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{CalculationError, ModelError, ValidationError};
use crate::model::{ModelArtifact, Predictor, SleepInputs};

/// Accepted desired-sleep range in hours.
pub const SLEEP_HOURS_RANGE: (f64, f64) = (2.0, 16.0);
/// Maximum daily coffee cups.
pub const MAX_COFFEE_CUPS: u8 = 10;

/// Longest prediction (seconds) accepted from a model. Anything above a
/// week is a broken artifact, not a sleep need.
const MAX_PREDICTION_SECS: f64 = 7.0 * 86_400.0;

/// Output clock format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockStyle {
    /// "10:32 PM"
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// "22:32"
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl ClockStyle {
    /// Render a time-of-day in this style, minute precision.
    pub fn format(&self, time: NaiveTime) -> String {
        match self {
            ClockStyle::TwelveHour => time.format("%-I:%M %p").to_string(),
            ClockStyle::TwentyFourHour => time.format("%H:%M").to_string(),
        }
    }
}

/// A successful estimation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BedtimeEstimate {
    /// Wake-up time minus the estimated sleep need.
    pub bedtime: NaiveTime,
    /// `bedtime` rendered in the estimator's clock style.
    pub formatted: String,
    /// Model-predicted sleep need, rounded to whole seconds.
    pub estimated_sleep_secs: i64,
}

impl BedtimeEstimate {
    pub fn estimated_sleep(&self) -> Duration {
        Duration::seconds(self.estimated_sleep_secs)
    }
}

/// Collaborator-facing title/message pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    /// The alert shown for a successful estimate.
    pub fn success(estimate: &BedtimeEstimate) -> Self {
        Self {
            title: "Your ideal bedtime is...".into(),
            message: estimate.formatted.clone(),
        }
    }

    /// The alert shown for any failed estimate. Deliberately generic: the
    /// cause never reaches this surface.
    pub fn failure() -> Self {
        Self {
            title: "Error".into(),
            message: "Failed to calculate bedtime.".into(),
        }
    }
}

/// Bedtime estimator around an injected predictor.
///
/// The predictor is supplied once and immutable for the estimator's
/// lifetime. Each call recomputes from scratch; the last successfully
/// formatted bedtime is kept and survives failed calls.
#[derive(Debug)]
pub struct BedtimeEstimator {
    predictor: Box<dyn Predictor>,
    clock: ClockStyle,
    preferred_bedtime: Option<String>,
}

impl BedtimeEstimator {
    pub fn new(predictor: Box<dyn Predictor>) -> Self {
        Self::with_clock(predictor, ClockStyle::default())
    }

    pub fn with_clock(predictor: Box<dyn Predictor>, clock: ClockStyle) -> Self {
        Self {
            predictor,
            clock,
            preferred_bedtime: None,
        }
    }

    /// Estimator over the bundled model artifact.
    pub fn bundled() -> Result<Self, ModelError> {
        Ok(Self::new(ModelArtifact::bundled()?.into_predictor()))
    }

    /// Last successfully computed bedtime, if any.
    pub fn preferred_bedtime(&self) -> Option<&str> {
        self.preferred_bedtime.as_deref()
    }

    /// Estimate the ideal bedtime for the given inputs.
    ///
    /// `sleep_hours` must lie in [2, 16] and `coffee_cups` in [0, 10].
    /// The model sees whole hours and minutes only; a seconds component in
    /// `wake_up` is not fed to the prediction, though the subtraction still
    /// starts from the exact wake-up instant given.
    pub fn estimate_bedtime(
        &mut self,
        wake_up: NaiveTime,
        sleep_hours: f64,
        coffee_cups: u8,
    ) -> Result<BedtimeEstimate, CalculationError> {
        validate_inputs(sleep_hours, coffee_cups)?;

        let wake_seconds = f64::from(wake_up.hour() * 3600 + wake_up.minute() * 60);
        let inputs = SleepInputs {
            wake_seconds,
            sleep_hours,
            coffee_cups: f64::from(coffee_cups),
        };

        let predicted = self.predictor.predict(&inputs)?;
        if !(0.0..=MAX_PREDICTION_SECS).contains(&predicted) {
            return Err(ModelError::Prediction(format!(
                "estimate of {predicted} seconds is outside 0..={MAX_PREDICTION_SECS}"
            ))
            .into());
        }

        let estimated_sleep_secs = predicted.round() as i64;
        let bedtime = wake_up - Duration::seconds(estimated_sleep_secs);
        let formatted = self.clock.format(bedtime);
        self.preferred_bedtime = Some(formatted.clone());

        Ok(BedtimeEstimate {
            bedtime,
            formatted,
            estimated_sleep_secs,
        })
    }
}

fn validate_inputs(sleep_hours: f64, coffee_cups: u8) -> Result<(), ValidationError> {
    let (min, max) = SLEEP_HOURS_RANGE;
    if !sleep_hours.is_finite() || sleep_hours < min || sleep_hours > max {
        return Err(ValidationError::OutOfRange {
            field: "sleep_hours".into(),
            value: sleep_hours,
            min,
            max,
        });
    }
    if coffee_cups > MAX_COFFEE_CUPS {
        return Err(ValidationError::OutOfRange {
            field: "coffee_cups".into(),
            value: f64::from(coffee_cups),
            min: 0.0,
            max: f64::from(MAX_COFFEE_CUPS),
        });
    }
    Ok(())
}

/// Parse a wake-up time from `HH:MM` (24-hour) or `H:MM AM/PM` text.
pub fn parse_wake_time(text: &str) -> Result<NaiveTime, ValidationError> {
    let trimmed = text.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%I:%M %p"))
        .map_err(|_| ValidationError::InvalidValue {
            field: "wake_time".into(),
            message: format!("cannot parse '{trimmed}' as a time of day"),
        })
}
