//! The public adjustment service: the one entry point callers use.
//!
//! The service owns an engine built from the reference configuration and the
//! substitution policy for missing readings. It performs no I/O; temperature
//! acquisition happens outside and arrives as a plain `Option<f64>`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{
    adjustment_variable, temperature_variable, watering_rules, AdjustBand, TempBand,
    DEFAULT_TEMPERATURE_C,
};
use crate::{AquaruleError, AquaruleResult, MamdaniEngine};

/// Label reported when no rule fired and the adjustment fell back to neutral.
pub const UNDEFINED_CATEGORY: &str = "undefined";

/// Everything a caller needs to act on one adjustment: the percentage, the
/// temperature that produced it, the final volume and the two dominant
/// category labels. Ephemeral, recomputed per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentResult {
    /// Percentage change prescribed by the rule base, e.g. `-29.7`.
    pub percent_adjustment: f64,
    /// The temperature the inference actually ran with, after any fallback.
    pub temperature_used: f64,
    /// `base_quantity_ml * (1 + percent_adjustment / 100)`.
    pub final_quantity_ml: f64,
    /// Dominant temperature band at `temperature_used`.
    pub input_category: TempBand,
    /// Dominant percentage band at `percent_adjustment`, or `None` when no
    /// rule fired and the neutral fallback was applied.
    pub output_category: Option<AdjustBand>,
}

impl AdjustmentResult {
    pub fn input_category_label(&self) -> &'static str {
        self.input_category.label()
    }

    /// Output band label, or [`UNDEFINED_CATEGORY`] after a neutral fallback.
    pub fn output_category_label(&self) -> &'static str {
        self.output_category
            .map(AdjustBand::label)
            .unwrap_or(UNDEFINED_CATEGORY)
    }
}

/// Watering adjustment service over the reference configuration.
///
/// Immutable after construction; share one instance across as many callers
/// as needed.
#[derive(Debug, Clone)]
pub struct WateringAdjuster {
    engine: MamdaniEngine<TempBand, AdjustBand>,
    default_temperature: f64,
}

impl WateringAdjuster {
    /// Build the service with the documented neutral default of
    /// [`DEFAULT_TEMPERATURE_C`].
    pub fn new() -> AquaruleResult<Self> {
        Self::with_default_temperature(DEFAULT_TEMPERATURE_C)
    }

    /// Build the service with a caller-chosen neutral default temperature,
    /// substituted whenever a reading is absent.
    pub fn with_default_temperature(default_temperature: f64) -> AquaruleResult<Self> {
        if !default_temperature.is_finite() {
            return Err(AquaruleError::invalid_argument(format!(
                "default temperature must be finite, got {default_temperature}"
            )));
        }
        let engine = MamdaniEngine::new(
            temperature_variable()?,
            adjustment_variable()?,
            watering_rules(),
        )?;
        Ok(Self {
            engine,
            default_temperature,
        })
    }

    pub fn engine(&self) -> &MamdaniEngine<TempBand, AdjustBand> {
        &self.engine
    }

    pub fn default_temperature(&self) -> f64 {
        self.default_temperature
    }

    /// Adjust `base_quantity_ml` for the given temperature in °C.
    ///
    /// An absent reading substitutes the configured neutral default. A
    /// reading that fires no rule recovers to a 0 % adjustment with the
    /// output label left as [`UNDEFINED_CATEGORY`], so one bad reading never
    /// aborts a batch of scheduled computations. A negative or non-finite
    /// base quantity fails with `InvalidArgument`; a non-finite temperature
    /// fails with `InvalidInput`.
    pub fn adjust(
        &self,
        base_quantity_ml: f64,
        temperature: Option<f64>,
    ) -> AquaruleResult<AdjustmentResult> {
        if !base_quantity_ml.is_finite() || base_quantity_ml < 0.0 {
            return Err(AquaruleError::invalid_argument(format!(
                "base quantity must be a non-negative number of millilitres, got {base_quantity_ml}"
            )));
        }

        let temperature_used = temperature.unwrap_or(self.default_temperature);
        let input_category = self
            .engine
            .input_variable()
            .dominant_category(temperature_used)?;

        let (percent_adjustment, output_category) = match self.engine.infer(temperature_used) {
            Ok(percent) => {
                let band = self.engine.output_variable().dominant_category(percent)?;
                (percent, Some(band))
            }
            Err(AquaruleError::NoRuleFired) => {
                warn!(
                    temperature = temperature_used,
                    "no watering rule fired, keeping base quantity unchanged"
                );
                (0.0, None)
            }
            Err(err) => return Err(err),
        };

        let final_quantity_ml = base_quantity_ml * (1.0 + percent_adjustment / 100.0);
        debug!(
            percent_adjustment,
            final_quantity_ml, "computed watering adjustment"
        );

        Ok(AdjustmentResult {
            percent_adjustment,
            temperature_used,
            final_quantity_ml,
            input_category,
            output_category,
        })
    }
}
