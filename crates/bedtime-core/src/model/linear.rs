//! Linear regression over the fixed input signature.
//!
//! estimate = intercept + wake_weight * wake_seconds
//!          + sleep_weight * sleep_hours + coffee_weight * coffee_cups

use serde::{Deserialize, Serialize};

use super::{Predictor, SleepInputs};
use crate::error::ModelError;

/// Linear model coefficients, deserialized from the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearParams {
    pub intercept: f64,
    pub wake_weight: f64,
    pub sleep_weight: f64,
    pub coffee_weight: f64,
    /// Lower bound on the predicted sleep seconds.
    #[serde(default)]
    pub min_sleep_secs: Option<f64>,
    /// Upper bound on the predicted sleep seconds.
    #[serde(default)]
    pub max_sleep_secs: Option<f64>,
}

impl LinearParams {
    pub(crate) fn validate(&self) -> Result<(), ModelError> {
        for (field, value) in [
            ("linear.intercept", self.intercept),
            ("linear.wake_weight", self.wake_weight),
            ("linear.sleep_weight", self.sleep_weight),
            ("linear.coffee_weight", self.coffee_weight),
        ] {
            if !value.is_finite() {
                return Err(ModelError::Invalid {
                    field: field.into(),
                    message: "must be finite".into(),
                });
            }
        }
        if let (Some(min), Some(max)) = (self.min_sleep_secs, self.max_sleep_secs) {
            if min > max {
                return Err(ModelError::Invalid {
                    field: "linear.min_sleep_secs".into(),
                    message: format!("lower bound {min} exceeds upper bound {max}"),
                });
            }
        }
        Ok(())
    }
}

/// The shipped linear predictor.
#[derive(Debug, Clone)]
pub struct LinearModel {
    params: LinearParams,
}

impl LinearModel {
    pub fn new(params: LinearParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LinearParams {
        &self.params
    }
}

impl Predictor for LinearModel {
    fn predict(&self, inputs: &SleepInputs) -> Result<f64, ModelError> {
        let p = &self.params;
        let mut estimate = p.intercept
            + p.wake_weight * inputs.wake_seconds
            + p.sleep_weight * inputs.sleep_hours
            + p.coffee_weight * inputs.coffee_cups;

        if !estimate.is_finite() {
            return Err(ModelError::Prediction(format!(
                "non-finite estimate for inputs {inputs:?}"
            )));
        }
        if let Some(min) = p.min_sleep_secs {
            estimate = estimate.max(min);
        }
        if let Some(max) = p.max_sleep_secs {
            estimate = estimate.min(max);
        }
        Ok(estimate)
    }
}
