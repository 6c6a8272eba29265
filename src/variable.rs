//! Linguistic variables: a named scalar domain partitioned into overlapping
//! fuzzy categories.
//!
//! Categories are a closed enum per variable rather than runtime strings, so
//! term lookup is a value comparison and the set of categories is fixed at
//! compile time. Insertion order of terms is preserved and is the tie-break
//! for dominant-category classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AquaruleError, AquaruleResult, MembershipFunction};

/// Closed interval `[lo, hi]` with a fixed sampling step.
///
/// The grid is only used to discretise the output domain for centroid
/// defuzzification; membership evaluation itself is continuous. Both
/// endpoints are always on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    lo: f64,
    hi: f64,
    step: f64,
}

impl Universe {
    /// Validated universe. `lo < hi`, `step > 0`, and `(hi - lo)` must be a
    /// whole number of steps so the grid includes both endpoints.
    pub fn new(lo: f64, hi: f64, step: f64) -> AquaruleResult<Self> {
        if !(lo.is_finite() && hi.is_finite() && step.is_finite()) {
            return Err(AquaruleError::invalid_shape(format!(
                "universe bounds must be finite, got [{lo}, {hi}] step {step}"
            )));
        }
        if lo >= hi {
            return Err(AquaruleError::invalid_shape(format!(
                "universe lower bound must be below upper bound, got [{lo}, {hi}]"
            )));
        }
        if step <= 0.0 {
            return Err(AquaruleError::invalid_shape(format!(
                "universe step must be positive, got {step}"
            )));
        }
        let span = (hi - lo) / step;
        if (span - span.round()).abs() > 1e-9 {
            return Err(AquaruleError::invalid_shape(format!(
                "universe [{lo}, {hi}] is not a whole number of steps of {step}"
            )));
        }
        Ok(Self { lo, hi, step })
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of sample points on the grid, both endpoints included.
    pub fn samples(&self) -> usize {
        ((self.hi - self.lo) / self.step).round() as usize + 1
    }

    /// Sample points in ascending order.
    pub fn points(&self) -> impl Iterator<Item = f64> {
        let (lo, step) = (self.lo, self.step);
        (0..self.samples()).map(move |i| lo + step * i as f64)
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.lo && x <= self.hi
    }
}

/// A named universe holding an ordered set of fuzzy category terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinguisticVariable<C> {
    name: String,
    universe: Universe,
    terms: Vec<(C, MembershipFunction)>,
}

impl<C: Copy + PartialEq + fmt::Display> LinguisticVariable<C> {
    /// Create a variable with no terms yet.
    pub fn new(name: impl Into<String>, universe: Universe) -> Self {
        Self {
            name: name.into(),
            universe,
            terms: Vec::new(),
        }
    }

    /// Add a category term, preserving insertion order. Re-adding an existing
    /// category replaces its shape in place.
    pub fn with_term(mut self, category: C, shape: MembershipFunction) -> Self {
        if let Some(slot) = self.terms.iter_mut().find(|(c, _)| *c == category) {
            slot.1 = shape;
        } else {
            self.terms.push((category, shape));
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn universe(&self) -> Universe {
        self.universe
    }

    /// Terms in insertion order.
    pub fn terms(&self) -> &[(C, MembershipFunction)] {
        &self.terms
    }

    /// Insertion index of a category, if the variable defines it.
    pub fn term_index(&self, category: C) -> Option<usize> {
        self.terms.iter().position(|(c, _)| *c == category)
    }

    /// Membership degree of `x` in one category.
    pub fn membership_of(&self, category: C, x: f64) -> AquaruleResult<f64> {
        let index =
            self.term_index(category)
                .ok_or_else(|| AquaruleError::UnknownCategory {
                    variable: self.name.clone(),
                    category: category.to_string(),
                })?;
        Ok(self.terms[index].1.membership(x))
    }

    /// Membership degree of every category at `x`, in insertion order.
    pub fn memberships(&self, x: f64) -> AquaruleResult<Vec<(C, f64)>> {
        if !x.is_finite() {
            return Err(AquaruleError::InvalidInput { value: x });
        }
        Ok(self
            .terms
            .iter()
            .map(|(c, mf)| (*c, mf.membership(x)))
            .collect())
    }

    /// The category with the greatest membership degree at `x`.
    ///
    /// Overlapping shapes make exact ties possible at shared boundary points;
    /// the first-inserted of the tied categories wins, which keeps labelling
    /// deterministic. When every membership is zero the first term is
    /// returned.
    pub fn dominant_category(&self, x: f64) -> AquaruleResult<C> {
        if !x.is_finite() {
            return Err(AquaruleError::InvalidInput { value: x });
        }
        let mut best = None;
        let mut best_degree = f64::NEG_INFINITY;
        for (category, shape) in &self.terms {
            let degree = shape.membership(x);
            if degree > best_degree {
                best = Some(*category);
                best_degree = degree;
            }
        }
        best.ok_or_else(|| {
            AquaruleError::invalid_shape(format!("variable `{}` has no terms", self.name))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Size {
        Small,
        Medium,
        Large,
    }

    impl fmt::Display for Size {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let label = match self {
                Size::Small => "Small",
                Size::Medium => "Medium",
                Size::Large => "Large",
            };
            f.write_str(label)
        }
    }

    fn sizes() -> LinguisticVariable<Size> {
        let universe = Universe::new(0.0, 10.0, 1.0).unwrap();
        LinguisticVariable::new("size", universe)
            .with_term(
                Size::Small,
                MembershipFunction::triangular(0.0, 0.0, 5.0).unwrap(),
            )
            .with_term(
                Size::Medium,
                MembershipFunction::triangular(0.0, 5.0, 10.0).unwrap(),
            )
            .with_term(
                Size::Large,
                MembershipFunction::triangular(5.0, 10.0, 10.0).unwrap(),
            )
    }

    #[test]
    fn test_universe_grid() {
        let universe = Universe::new(-30.0, 20.0, 1.0).unwrap();
        assert_eq!(universe.samples(), 51);

        let points: Vec<f64> = universe.points().collect();
        assert_eq!(points.first(), Some(&-30.0));
        assert_eq!(points.last(), Some(&20.0));
        assert!(universe.contains(0.0));
        assert!(!universe.contains(20.5));
    }

    #[test]
    fn test_universe_validation() {
        assert!(Universe::new(10.0, 0.0, 1.0).is_err());
        assert!(Universe::new(0.0, 10.0, 0.0).is_err());
        assert!(Universe::new(0.0, 10.0, -1.0).is_err());
        assert!(Universe::new(0.0, 10.0, 3.0).is_err());
        assert!(Universe::new(f64::NEG_INFINITY, 10.0, 1.0).is_err());
    }

    #[test]
    fn test_membership_of() {
        let var = sizes();
        assert_eq!(var.membership_of(Size::Small, 0.0).unwrap(), 1.0);
        assert_eq!(var.membership_of(Size::Medium, 5.0).unwrap(), 1.0);
        assert_eq!(var.membership_of(Size::Large, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_dominant_category() {
        let var = sizes();
        assert_eq!(var.dominant_category(1.0).unwrap(), Size::Small);
        assert_eq!(var.dominant_category(5.0).unwrap(), Size::Medium);
        assert_eq!(var.dominant_category(9.0).unwrap(), Size::Large);
    }

    #[test]
    fn test_dominant_category_tie_breaks_to_first_inserted() {
        // Small and Medium cross at 2.5 with equal membership.
        let var = sizes();
        assert_eq!(
            var.membership_of(Size::Small, 2.5).unwrap(),
            var.membership_of(Size::Medium, 2.5).unwrap()
        );
        assert_eq!(var.dominant_category(2.5).unwrap(), Size::Small);
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let var = sizes();
        assert!(matches!(
            var.dominant_category(f64::NAN),
            Err(AquaruleError::InvalidInput { .. })
        ));
        assert!(matches!(
            var.memberships(f64::INFINITY),
            Err(AquaruleError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_replacing_a_term_keeps_insertion_order() {
        let var = sizes().with_term(
            Size::Small,
            MembershipFunction::triangular(0.0, 1.0, 2.0).unwrap(),
        );
        assert_eq!(var.terms().len(), 3);
        assert_eq!(var.term_index(Size::Small), Some(0));
        assert_eq!(var.membership_of(Size::Small, 1.0).unwrap(), 1.0);
    }

    #[test]
    fn test_memberships_reports_all_terms_in_order() {
        let var = sizes();
        let degrees = var.memberships(2.5).unwrap();
        assert_eq!(degrees.len(), 3);
        assert_eq!(degrees[0].0, Size::Small);
        assert_eq!(degrees[2].0, Size::Large);
    }
}
