//! # Bedtime Core Library
//!
//! Core logic for the bedtime estimator: given a wake-up time, desired
//! hours of sleep, and daily coffee intake, a pre-trained regression model
//! predicts the sleep need and the estimator derives the ideal bedtime.
//! Hosting surfaces (the CLI binary, or any GUI shell) are thin layers over
//! this crate: they supply the three inputs and display either a formatted
//! bedtime or a generic error alert.
//!
//! ## Key Components
//!
//! - [`BedtimeEstimator`]: pure request/response bedtime calculation
//! - [`Predictor`]: injected regression model interface
//! - [`ModelArtifact`]: TOML artifact the shipped [`LinearModel`] is built from
//! - [`Config`]: host configuration management

pub mod error;
pub mod estimator;
pub mod model;
pub mod storage;

pub use error::{CalculationError, ConfigError, CoreError, ModelError, ValidationError};
pub use estimator::{parse_wake_time, Alert, BedtimeEstimate, BedtimeEstimator, ClockStyle};
pub use model::{LinearModel, LinearParams, ModelArtifact, ModelKind, Predictor, SleepInputs};
pub use storage::Config;
