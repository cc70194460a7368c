//! Sleep prediction models.
//!
//! The regression model is consumed as an opaque artifact: a TOML file
//! naming a model kind and its parameters, loaded once at startup and
//! immutable for the process lifetime. Estimation code only sees the
//! [`Predictor`] trait, so tests substitute deterministic doubles.

mod linear;

pub use linear::{LinearModel, LinearParams};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

const BUNDLED: &str = include_str!("bedtime.toml");

/// Fixed input signature of the regression function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepInputs {
    /// Wake-up time as seconds since midnight.
    pub wake_seconds: f64,
    /// Desired sleep in hours.
    pub sleep_hours: f64,
    /// Daily caffeinated drinks.
    pub coffee_cups: f64,
}

/// A sleep-duration predictor.
///
/// Returns the estimated sleep need in seconds for the given inputs. The
/// shipped implementation is [`LinearModel`]; unit tests inject fixed or
/// failing doubles.
pub trait Predictor: Send + Sync + std::fmt::Debug {
    /// Predict the estimated sleep duration in seconds.
    fn predict(&self, inputs: &SleepInputs) -> Result<f64, ModelError>;
}

/// Supported model families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Linear,
}

/// A pre-trained model artifact.
///
/// Serialized as TOML; see `bedtime.toml` for the packaged instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    pub version: String,
    pub kind: ModelKind,
    pub linear: LinearParams,
}

impl ModelArtifact {
    /// Load and validate an artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate an artifact from TOML text.
    pub fn parse(content: &str) -> Result<Self, ModelError> {
        let artifact: ModelArtifact =
            toml::from_str(content).map_err(|e| ModelError::ParseFailed(e.to_string()))?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// The model packaged with the library.
    pub fn bundled() -> Result<Self, ModelError> {
        Self::parse(BUNDLED)
    }

    /// Build the predictor this artifact describes.
    pub fn into_predictor(self) -> Box<dyn Predictor> {
        match self.kind {
            ModelKind::Linear => Box::new(LinearModel::new(self.linear)),
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.name.is_empty() {
            return Err(ModelError::Invalid {
                field: "name".into(),
                message: "must not be empty".into(),
            });
        }
        self.linear.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_artifact_is_valid() {
        let artifact = ModelArtifact::bundled().unwrap();
        assert_eq!(artifact.kind, ModelKind::Linear);
        assert!(!artifact.name.is_empty());
        assert!(!artifact.version.is_empty());
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        let err = ModelArtifact::parse(
            r#"
            name = "m"
            version = "1"
            kind = "forest"

            [linear]
            intercept = 0.0
            wake_weight = 0.0
            sleep_weight = 3600.0
            coffee_weight = 0.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::ParseFailed(_)));
    }

    #[test]
    fn parse_rejects_empty_name() {
        let err = ModelArtifact::parse(
            r#"
            name = ""
            version = "1"
            kind = "linear"

            [linear]
            intercept = 0.0
            wake_weight = 0.0
            sleep_weight = 3600.0
            coffee_weight = 0.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::Invalid { .. }));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ModelArtifact::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ModelError::ReadFailed { .. }));
    }
}
