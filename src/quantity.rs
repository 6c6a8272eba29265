//! Extraction of a base watering quantity from free-form schedule text.
//!
//! Care schedules carry the volume as prose, e.g. `"0.2 L (200 ml)"` or
//! `"0.15–0.2 L (150–200 ml)"`. A millilitre figure wins when present;
//! otherwise a litre figure is converted. Patterns are compiled once.

use std::sync::LazyLock;

use regex::Regex;

/// Fallback base quantity when the schedule text carries no usable figure.
pub const DEFAULT_BASE_QUANTITY_ML: f64 = 500.0;

static MILLILITRES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(?(\d+)\s*ml\)?").expect("millilitre pattern"));

static LITRES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d*\.?\d+)\s*l").expect("litre pattern"));

/// Parse a quantity string into millilitres.
///
/// Tries a millilitre figure first, then a litre figure scaled by 1000.
/// Returns `None` when neither appears.
pub fn parse_base_quantity_ml(text: &str) -> Option<f64> {
    if let Some(caps) = MILLILITRES.captures(text) {
        return caps[1].parse::<f64>().ok();
    }
    if let Some(caps) = LITRES.captures(text) {
        return caps[1].parse::<f64>().ok().map(|litres| litres * 1000.0);
    }
    None
}

/// Like [`parse_base_quantity_ml`], substituting the documented
/// [`DEFAULT_BASE_QUANTITY_ML`] when parsing fails.
pub fn base_quantity_ml_or_default(text: &str) -> f64 {
    parse_base_quantity_ml(text).unwrap_or(DEFAULT_BASE_QUANTITY_ML)
}
