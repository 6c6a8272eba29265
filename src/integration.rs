//! Contracts for the collaborators around the adjustment service: where a
//! temperature reading comes from and how a result is rendered for a
//! notification.
//!
//! Acquisition (weather lookups) and delivery (mail, push) stay outside this
//! crate; these traits and helpers pin down the boundary so integrations
//! agree on who substitutes defaults (the service, never the source).

use crate::{AdjustmentResult, AquaruleResult, WateringAdjuster};

/// A source of ambient temperature readings.
///
/// Implementations report an unavailable reading as `None` and must not
/// substitute a default themselves; the substitution policy belongs to
/// [`WateringAdjuster::adjust`].
pub trait TemperatureSource {
    /// Current ambient temperature in °C, or `None` when unavailable.
    fn current_temperature(&self) -> Option<f64>;
}

/// A fixed reading, for tests and offline runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedTemperature(pub f64);

impl TemperatureSource for FixedTemperature {
    fn current_temperature(&self) -> Option<f64> {
        Some(self.0)
    }
}

/// A source that never has a reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableTemperature;

impl TemperatureSource for UnavailableTemperature {
    fn current_temperature(&self) -> Option<f64> {
        None
    }
}

/// Pull one reading from `source` and run the adjustment.
pub fn adjust_with_source<S: TemperatureSource>(
    adjuster: &WateringAdjuster,
    base_quantity_ml: f64,
    source: &S,
) -> AquaruleResult<AdjustmentResult> {
    adjuster.adjust(base_quantity_ml, source.current_temperature())
}

/// Plain-text notification body for a computed adjustment.
pub fn render_notification(plant: &str, base_quantity_ml: f64, result: &AdjustmentResult) -> String {
    format!(
        "Watering reminder for {plant}\n\
         \n\
         1. Base quantity: {base_quantity_ml:.0} mL\n\
         2. Current temperature: {temperature:.1} °C ({temperature_band})\n\
         3. Suggested adjustment: {percent:+.2}% ({adjust_band})\n\
         \n\
         Final suggested quantity: {final_quantity:.0} mL\n",
        temperature = result.temperature_used,
        temperature_band = result.input_category_label(),
        percent = result.percent_adjustment,
        adjust_band = result.output_category_label(),
        final_quantity = result.final_quantity_ml,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_source_feeds_the_service() {
        let adjuster = WateringAdjuster::new().unwrap();
        let result = adjust_with_source(&adjuster, 200.0, &FixedTemperature(-10.0)).unwrap();
        assert_eq!(result.temperature_used, -10.0);
        assert!(result.percent_adjustment < 0.0);
    }

    #[test]
    fn test_unavailable_source_triggers_the_service_fallback() {
        let adjuster = WateringAdjuster::new().unwrap();
        let result = adjust_with_source(&adjuster, 200.0, &UnavailableTemperature).unwrap();
        assert_eq!(result.temperature_used, adjuster.default_temperature());
    }

    #[test]
    fn test_notification_renders_all_fields() {
        let adjuster = WateringAdjuster::new().unwrap();
        let result = adjuster.adjust(200.0, Some(-10.0)).unwrap();
        let body = render_notification("Peace Lily", 200.0, &result);

        assert!(body.contains("Peace Lily"));
        assert!(body.contains("200 mL"));
        assert!(body.contains("-10.0 °C"));
        assert!(body.contains("(Freezing)"));
        assert!(body.contains("(Extreme Decrease)"));
    }
}
