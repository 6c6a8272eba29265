//! Single-antecedent, single-consequent fuzzy rules and the immutable rule
//! base that holds them.

use serde::{Deserialize, Serialize};

/// One Mamdani rule: IF the input is `antecedent` THEN the output is
/// `consequent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule<A, C> {
    pub antecedent: A,
    pub consequent: C,
}

impl<A, C> Rule<A, C> {
    pub fn new(antecedent: A, consequent: C) -> Self {
        Self {
            antecedent,
            consequent,
        }
    }
}

/// An ordered collection of rules, built once and never mutated.
///
/// Nothing here assumes one rule per antecedent category: a category may
/// drive zero rules or several.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleBase<A, C> {
    rules: Vec<Rule<A, C>>,
}

impl<A: Copy + PartialEq, C: Copy> RuleBase<A, C> {
    pub fn new(rules: Vec<Rule<A, C>>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in their configured order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule<A, C>> {
        self.rules.iter()
    }

    /// Every rule whose antecedent is `category`.
    pub fn rules_for(&self, category: A) -> impl Iterator<Item = &Rule<A, C>> {
        self.rules.iter().filter(move |r| r.antecedent == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_for_supports_any_cardinality() {
        let base = RuleBase::new(vec![
            Rule::new("cold", "decrease"),
            Rule::new("hot", "increase"),
            Rule::new("hot", "increase_more"),
        ]);

        assert_eq!(base.len(), 3);
        assert_eq!(base.rules_for("cold").count(), 1);
        assert_eq!(base.rules_for("hot").count(), 2);
        assert_eq!(base.rules_for("mild").count(), 0);
    }

    #[test]
    fn test_iteration_order_is_configuration_order() {
        let base = RuleBase::new(vec![Rule::new(1, 10), Rule::new(2, 20)]);
        let consequents: Vec<i32> = base.iter().map(|r| r.consequent).collect();
        assert_eq!(consequents, vec![10, 20]);
    }

    #[test]
    fn test_empty_rule_base() {
        let base: RuleBase<&str, &str> = RuleBase::new(Vec::new());
        assert!(base.is_empty());
        assert_eq!(base.iter().count(), 0);
    }
}
