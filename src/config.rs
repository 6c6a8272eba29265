//! Reference configuration: the temperature and percentage-change variables,
//! the watering rule table and the documented defaults.
//!
//! Everything here is data. Swapping shapes, bands or rules reconfigures the
//! engine without touching the inference algorithm.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    AquaruleResult, LinguisticVariable, MembershipFunction, Rule, RuleBase, Universe,
};

/// Neutral fallback when no temperature reading is supplied: the peak of the
/// [`TempBand::Moderate`] band, where the rule base prescribes no change.
pub const DEFAULT_TEMPERATURE_C: f64 = 25.0;

/// Temperature bands over the input universe of roughly -10 °C to 40 °C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TempBand {
    Freezing,
    VeryCold,
    Cold,
    Moderate,
    Hot,
    VeryHot,
}

impl TempBand {
    pub const ALL: [TempBand; 6] = [
        TempBand::Freezing,
        TempBand::VeryCold,
        TempBand::Cold,
        TempBand::Moderate,
        TempBand::Hot,
        TempBand::VeryHot,
    ];

    /// Human-readable label for notifications.
    pub fn label(self) -> &'static str {
        match self {
            TempBand::Freezing => "Freezing",
            TempBand::VeryCold => "Very Cold",
            TempBand::Cold => "Cold",
            TempBand::Moderate => "Moderate",
            TempBand::Hot => "Hot",
            TempBand::VeryHot => "Very Hot",
        }
    }
}

impl fmt::Display for TempBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Percentage-change bands over the output universe of -30 % to +20 %.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjustBand {
    ExtremeDecrease,
    LargeDecrease,
    Decrease,
    NoChange,
    Increase,
    LargeIncrease,
}

impl AdjustBand {
    pub const ALL: [AdjustBand; 6] = [
        AdjustBand::ExtremeDecrease,
        AdjustBand::LargeDecrease,
        AdjustBand::Decrease,
        AdjustBand::NoChange,
        AdjustBand::Increase,
        AdjustBand::LargeIncrease,
    ];

    /// Human-readable label for notifications.
    pub fn label(self) -> &'static str {
        match self {
            AdjustBand::ExtremeDecrease => "Extreme Decrease",
            AdjustBand::LargeDecrease => "Large Decrease",
            AdjustBand::Decrease => "Decrease",
            AdjustBand::NoChange => "No Change",
            AdjustBand::Increase => "Increase",
            AdjustBand::LargeIncrease => "Large Increase",
        }
    }
}

impl fmt::Display for AdjustBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Temperature in °C: six overlapping bands over [-10, 40], step 1.
pub fn temperature_variable() -> AquaruleResult<LinguisticVariable<TempBand>> {
    let universe = Universe::new(-10.0, 40.0, 1.0)?;
    Ok(LinguisticVariable::new("temperature", universe)
        .with_term(
            TempBand::Freezing,
            MembershipFunction::trapezoidal(-10.0, -10.0, 0.0, 5.0)?,
        )
        .with_term(
            TempBand::VeryCold,
            MembershipFunction::triangular(0.0, 5.0, 12.0)?,
        )
        .with_term(
            TempBand::Cold,
            MembershipFunction::triangular(8.0, 15.0, 22.0)?,
        )
        .with_term(
            TempBand::Moderate,
            MembershipFunction::triangular(18.0, 25.0, 32.0)?,
        )
        .with_term(
            TempBand::Hot,
            MembershipFunction::triangular(28.0, 35.0, 40.0)?,
        )
        .with_term(
            TempBand::VeryHot,
            MembershipFunction::triangular(35.0, 40.0, 40.0)?,
        ))
}

/// Percentage change: six overlapping bands over [-30, 20], step 1.
///
/// The Extreme Decrease shape starts one unit below the universe; the grid
/// clips it, which leaves full membership on the -30 endpoint.
pub fn adjustment_variable() -> AquaruleResult<LinguisticVariable<AdjustBand>> {
    let universe = Universe::new(-30.0, 20.0, 1.0)?;
    Ok(LinguisticVariable::new("percent_change", universe)
        .with_term(
            AdjustBand::ExtremeDecrease,
            MembershipFunction::triangular(-31.0, -30.0, -28.0)?,
        )
        .with_term(
            AdjustBand::LargeDecrease,
            MembershipFunction::triangular(-25.0, -15.0, -10.0)?,
        )
        .with_term(
            AdjustBand::Decrease,
            MembershipFunction::triangular(-15.0, -8.0, 0.0)?,
        )
        .with_term(
            AdjustBand::NoChange,
            MembershipFunction::triangular(-5.0, 0.0, 5.0)?,
        )
        .with_term(
            AdjustBand::Increase,
            MembershipFunction::triangular(0.0, 8.0, 15.0)?,
        )
        .with_term(
            AdjustBand::LargeIncrease,
            MembershipFunction::triangular(10.0, 15.0, 20.0)?,
        ))
}

/// The watering rule table: one rule per temperature band in the reference
/// configuration, though the engine accepts any cardinality.
pub fn watering_rules() -> RuleBase<TempBand, AdjustBand> {
    RuleBase::new(vec![
        Rule::new(TempBand::Freezing, AdjustBand::ExtremeDecrease),
        Rule::new(TempBand::VeryCold, AdjustBand::LargeDecrease),
        Rule::new(TempBand::Cold, AdjustBand::Decrease),
        Rule::new(TempBand::Moderate, AdjustBand::NoChange),
        Rule::new(TempBand::Hot, AdjustBand::Increase),
        Rule::new(TempBand::VeryHot, AdjustBand::LargeIncrease),
    ])
}
