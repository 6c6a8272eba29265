//! # Aquarule
//!
//! Rule-based watering adjustment: a Mamdani fuzzy-inference engine that
//! scales a baseline watering volume by a percentage derived from the ambient
//! temperature.
//!
//! Instead of a fixed formula, the adjustment comes from linguistic
//! categories ("Freezing", "Moderate", "Very Hot") connected to percentage
//! bands ("Extreme Decrease", "No Change", "Large Increase") by a small,
//! hand-authored rule base. Sweeping the temperature across overlapping
//! categories blends adjacent rules into a smooth crisp output, which is the
//! point of using fuzzy inference here: gentle categorical-to-continuous
//! mapping rather than a lookup table.
//!
//! ## Features
//!
//! - **Membership functions**: triangular and trapezoidal shapes with
//!   validated control points
//! - **Linguistic variables**: typed category enums over a sampled universe,
//!   no stringly-typed lookups in the hot path
//! - **Mamdani inference**: min-implication, max-aggregation, centroid
//!   defuzzification over a fixed-step grid
//! - **Category labelling**: deterministic dominant-category classification
//!   for both the input reading and the inferred percentage
//! - **Adjustment service**: the public entry point with documented fallback
//!   behaviour for missing or out-of-range readings
//!
//! ## Quick Start
//!
//! ```rust
//! use aquarule::WateringAdjuster;
//!
//! # fn main() -> Result<(), aquarule::AquaruleError> {
//! let adjuster = WateringAdjuster::new()?;
//!
//! // A mild reading barely moves the baseline.
//! let mild = adjuster.adjust(200.0, Some(25.0))?;
//! assert_eq!(mild.input_category_label(), "Moderate");
//! assert!(mild.percent_adjustment.abs() < 1.0);
//!
//! // A freezing reading cuts it by roughly a third.
//! let freezing = adjuster.adjust(200.0, Some(-10.0))?;
//! assert_eq!(freezing.input_category_label(), "Freezing");
//! assert!(freezing.final_quantity_ml < 150.0);
//!
//! // No reading at all falls back to the configured neutral default.
//! let fallback = adjuster.adjust(200.0, None)?;
//! assert_eq!(fallback.temperature_used, 25.0);
//! # Ok(())
//! # }
//! ```
//!
//! The engine itself is generic over the category enums, so a different
//! domain (or a reconfigured watering table) only needs new data in
//! [`config`], not new algorithm code.
//!
//! All types are immutable after construction; a single [`WateringAdjuster`]
//! can be shared freely across threads.

use thiserror::Error;

pub mod config;
pub mod engine;
pub mod integration;
pub mod membership;
pub mod quantity;
pub mod rules;
pub mod service;
pub mod variable;

// Re-export main types
pub use config::{
    adjustment_variable, temperature_variable, watering_rules, AdjustBand, TempBand,
    DEFAULT_TEMPERATURE_C,
};
pub use engine::MamdaniEngine;
pub use integration::{
    adjust_with_source, render_notification, FixedTemperature, TemperatureSource,
    UnavailableTemperature,
};
pub use membership::MembershipFunction;
pub use quantity::{base_quantity_ml_or_default, parse_base_quantity_ml, DEFAULT_BASE_QUANTITY_ML};
pub use rules::{Rule, RuleBase};
pub use service::{AdjustmentResult, WateringAdjuster, UNDEFINED_CATEGORY};
pub use variable::{LinguisticVariable, Universe};

/// Errors raised while building or running the inference engine.
///
/// Configuration problems (`InvalidShape`, `UnknownCategory`) surface once,
/// while the engine is being built, and refuse to produce a partial engine.
/// Per-call problems are either surfaced to the caller (`InvalidInput`,
/// `InvalidArgument`) or recovered by the adjustment service (`NoRuleFired`).
#[derive(Debug, Error)]
pub enum AquaruleError {
    /// Malformed membership function control points or universe bounds.
    #[error("invalid shape: {message}")]
    InvalidShape { message: String },
    /// A rule references a category its linguistic variable does not define.
    #[error("unknown category `{category}` in variable `{variable}`")]
    UnknownCategory { variable: String, category: String },
    /// A non-finite value was passed to inference or classification.
    #[error("invalid input: {value} is not a finite number")]
    InvalidInput { value: f64 },
    /// Every rule fired with zero strength; the aggregated output set is
    /// empty and has no centroid.
    #[error("no rule fired: aggregated membership is zero")]
    NoRuleFired,
    /// A malformed caller argument, such as a negative base quantity.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl AquaruleError {
    /// Create an `InvalidShape` error from any message.
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape {
            message: message.into(),
        }
    }

    /// Create an `InvalidArgument` error from any message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type for aquarule operations
pub type AquaruleResult<T> = std::result::Result<T, AquaruleError>;
