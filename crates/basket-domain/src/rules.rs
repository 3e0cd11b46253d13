//! Association rule generation
//!
//! Every frequent itemset X with at least two items is split into each
//! non-empty proper subset A and its complement B = X \ A. A split yields the
//! rule `A -> B` when A is itself frequent and
//! `support(X) / support(A) >= min_confidence`.
//!
//! Rules are ranked by confidence descending, then support descending, then
//! antecedent and consequent in itemset order, so the output is fully
//! deterministic.

use crate::error::Result;
use crate::itemset::Itemset;
use crate::miner::FrequentItemsets;
use crate::threshold::validate_confidence;
use std::cmp::Ordering;
use std::fmt;
use tracing::info;

/// An implication `antecedent -> consequent` between disjoint itemsets
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Left-hand side (A)
    pub antecedent: Itemset,
    /// Right-hand side (B), disjoint from A
    pub consequent: Itemset,
    /// Support of A ∪ B
    pub support: f64,
    /// support(A ∪ B) / support(A)
    pub confidence: f64,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.antecedent, self.consequent)
    }
}

/// Derive every rule meeting `min_confidence` from a set of frequent itemsets
///
/// An empty `frequent` map yields an empty rule list. Subsets that are not
/// themselves frequent are skipped silently.
///
/// # Errors
/// [`crate::MiningError::InvalidConfidence`] if `min_confidence` is outside (0, 1]
pub fn generate_rules(frequent: &FrequentItemsets, min_confidence: f64) -> Result<Vec<Rule>> {
    let min_confidence = validate_confidence(min_confidence)?;

    let mut rules = Vec::new();
    for (itemset, itemset_support) in frequent.iter() {
        if itemset.len() < 2 {
            continue;
        }
        split_itemset(frequent, itemset, itemset_support, min_confidence, &mut rules);
    }

    rank_rules(&mut rules);
    info!(frequent = frequent.len(), min_confidence, rules = rules.len(), "Rule generation complete");

    Ok(rules)
}

fn split_itemset(
    frequent: &FrequentItemsets,
    itemset: &Itemset,
    itemset_support: f64,
    min_confidence: f64,
    rules: &mut Vec<Rule>,
) {
    for antecedent in itemset.proper_subsets() {
        let Some(antecedent_support) = frequent.get(&antecedent) else {
            continue;
        };
        if antecedent_support <= 0.0 {
            continue;
        }

        let confidence = itemset_support / antecedent_support;
        if confidence >= min_confidence {
            let consequent = itemset.difference(&antecedent);
            rules.push(Rule {
                antecedent,
                consequent,
                support: itemset_support,
                confidence,
            });
        }
    }
}

/// Sort rules into ranking order
pub fn rank_rules(rules: &mut [Rule]) {
    rules.sort_by(compare_rank);
}

fn compare_rank(a: &Rule, b: &Rule) -> Ordering {
    b.confidence
        .total_cmp(&a.confidence)
        .then_with(|| b.support.total_cmp(&a.support))
        .then_with(|| a.antecedent.cmp(&b.antecedent))
        .then_with(|| a.consequent.cmp(&b.consequent))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::itemset::Transaction;
    use crate::miner::mine_frequent_itemsets;
    use proptest::prelude::*;

    fn transactions_strategy() -> impl Strategy<Value = Vec<Transaction>> {
        prop::collection::vec(prop::collection::btree_set(0u8..5, 1..5), 1..10).prop_map(|baskets| {
            baskets
                .into_iter()
                .map(|basket| Transaction::new(basket.into_iter().map(|i| format!("i{}", i))))
                .collect()
        })
    }

    proptest! {
        /// Property: Every rule meets the threshold and its confidence can be recomputed
        #[test]
        fn test_confidence_boundary(
            transactions in transactions_strategy(),
            min_support in 0.1f64..=1.0,
            min_confidence in 0.05f64..=1.0,
        ) {
            let frequent = mine_frequent_itemsets(&transactions, min_support).unwrap();
            let rules = generate_rules(&frequent, min_confidence).unwrap();

            for rule in &rules {
                let whole = rule.antecedent.union(&rule.consequent);
                let whole_support = frequent.get(&whole);
                let antecedent_support = frequent.get(&rule.antecedent);
                prop_assert!(rule.antecedent.is_subset(&whole));
                prop_assert!(rule.consequent.is_subset(&whole));
                prop_assert!(!whole.is_subset(&rule.antecedent));
                prop_assert_eq!(whole_support, Some(rule.support));
                prop_assert!(antecedent_support.is_some());
                prop_assert_eq!(rule.confidence, rule.support / antecedent_support.unwrap_or(1.0));
                prop_assert!(rule.confidence >= min_confidence);
            }
        }

        /// Property: Antecedent and consequent are non-empty and disjoint
        #[test]
        fn test_no_self_rules(
            transactions in transactions_strategy(),
            min_support in 0.1f64..=1.0,
            min_confidence in 0.05f64..=1.0,
        ) {
            let frequent = mine_frequent_itemsets(&transactions, min_support).unwrap();
            for rule in generate_rules(&frequent, min_confidence).unwrap() {
                prop_assert!(!rule.antecedent.is_empty());
                prop_assert!(!rule.consequent.is_empty());
                prop_assert!(rule.antecedent.is_disjoint(&rule.consequent));
            }
        }

        /// Property: Output is sorted by confidence and reproducible
        #[test]
        fn test_sorted_and_deterministic(
            transactions in transactions_strategy(),
            min_support in 0.1f64..=1.0,
            min_confidence in 0.05f64..=1.0,
        ) {
            let frequent = mine_frequent_itemsets(&transactions, min_support).unwrap();
            let first = generate_rules(&frequent, min_confidence).unwrap();
            let second = generate_rules(&frequent, min_confidence).unwrap();

            prop_assert!(first.windows(2).all(|w| w[0].confidence >= w[1].confidence));
            prop_assert_eq!(first, second);
        }
    }
}
