//! Mamdani inference over one input and one output linguistic variable.
//!
//! The pipeline is the standard one: fuzzify the crisp input against every
//! rule's antecedent, clip each consequent set at its rule's firing strength
//! (min-implication), aggregate the clipped sets pointwise (max), and take
//! the centroid of the aggregate over the output universe's sampling grid.

use std::fmt;

use ndarray::Array1;
use tracing::debug;

use crate::{AquaruleError, AquaruleResult, LinguisticVariable, RuleBase};

/// Aggregated membership below this total is treated as "no rule fired".
const AGGREGATE_EPSILON: f64 = 1e-10;

/// A rule with its categories resolved to term indices at build time, so the
/// hot path never looks a category up by value.
#[derive(Debug, Clone, Copy)]
struct CompiledRule {
    antecedent: usize,
    consequent: usize,
}

/// Immutable Mamdani inference engine.
///
/// Built once from an input variable, an output variable and a rule base;
/// every method takes `&self`, so a single engine can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct MamdaniEngine<A, C> {
    input: LinguisticVariable<A>,
    output: LinguisticVariable<C>,
    rules: RuleBase<A, C>,
    compiled: Vec<CompiledRule>,
}

impl<A, C> MamdaniEngine<A, C>
where
    A: Copy + PartialEq + fmt::Display,
    C: Copy + PartialEq + fmt::Display,
{
    /// Build the engine, resolving every rule's categories to term indices.
    ///
    /// Fails with `UnknownCategory` when a rule names a category its variable
    /// does not define; no partial engine is ever produced.
    pub fn new(
        input: LinguisticVariable<A>,
        output: LinguisticVariable<C>,
        rules: RuleBase<A, C>,
    ) -> AquaruleResult<Self> {
        let compiled = rules
            .iter()
            .map(|rule| {
                let antecedent = input.term_index(rule.antecedent).ok_or_else(|| {
                    AquaruleError::UnknownCategory {
                        variable: input.name().to_string(),
                        category: rule.antecedent.to_string(),
                    }
                })?;
                let consequent = output.term_index(rule.consequent).ok_or_else(|| {
                    AquaruleError::UnknownCategory {
                        variable: output.name().to_string(),
                        category: rule.consequent.to_string(),
                    }
                })?;
                Ok(CompiledRule {
                    antecedent,
                    consequent,
                })
            })
            .collect::<AquaruleResult<Vec<_>>>()?;

        Ok(Self {
            input,
            output,
            rules,
            compiled,
        })
    }

    pub fn input_variable(&self) -> &LinguisticVariable<A> {
        &self.input
    }

    pub fn output_variable(&self) -> &LinguisticVariable<C> {
        &self.output
    }

    pub fn rule_base(&self) -> &RuleBase<A, C> {
        &self.rules
    }

    /// Crisp output for a crisp input.
    ///
    /// Fails with `InvalidInput` on a non-finite `x` and with `NoRuleFired`
    /// when `x` lies outside every antecedent's support, leaving the
    /// aggregated set empty.
    pub fn infer(&self, x: f64) -> AquaruleResult<f64> {
        if !x.is_finite() {
            return Err(AquaruleError::InvalidInput { value: x });
        }

        let strengths: Vec<f64> = self
            .compiled
            .iter()
            .map(|rule| self.input.terms()[rule.antecedent].1.membership(x))
            .collect();
        debug!(input = x, ?strengths, "rule firing strengths");

        let aggregated = self.aggregate(&strengths);
        self.defuzzify(&aggregated)
    }

    /// Clip each consequent at its firing strength and fold the clipped sets
    /// together with pointwise max over the output grid.
    fn aggregate(&self, strengths: &[f64]) -> Array1<f64> {
        let universe = self.output.universe();
        let mut aggregated = Vec::with_capacity(universe.samples());
        for y in universe.points() {
            let mut degree: f64 = 0.0;
            for (rule, strength) in self.compiled.iter().zip(strengths) {
                let clipped = self.output.terms()[rule.consequent]
                    .1
                    .membership(y)
                    .min(*strength);
                degree = degree.max(clipped);
            }
            aggregated.push(degree);
        }
        Array1::from_vec(aggregated)
    }

    /// Centroid (centre of gravity) of the aggregated set over the grid.
    fn defuzzify(&self, aggregated: &Array1<f64>) -> AquaruleResult<f64> {
        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (y, degree) in self.output.universe().points().zip(aggregated.iter()) {
            numerator += y * degree;
            denominator += degree;
        }
        if denominator < AGGREGATE_EPSILON {
            return Err(AquaruleError::NoRuleFired);
        }
        Ok(numerator / denominator)
    }
}
