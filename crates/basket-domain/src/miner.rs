//! Level-wise frequent itemset mining
//!
//! Implements an Apriori-style search:
//! 1. Count single items and keep those meeting the minimum support (L1)
//! 2. Join pairs of frequent k-itemsets whose union has k+1 items
//! 3. Scan the transactions for each candidate's exact support
//! 4. Repeat until a level comes back empty
//!
//! Candidates with an infrequent k-subset can never be frequent, so they are
//! optionally dropped before the scan. Output is the same either way.

use crate::error::{MiningError, Result};
use crate::itemset::{Itemset, Transaction};
use crate::support::support;
use crate::threshold::validate_support;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use tracing::{debug, info};

/// Frequent itemsets with their exact supports
///
/// Also records how many transactions the supports were computed over, so
/// absolute counts can be reported. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequentItemsets {
    supports: HashMap<Itemset, f64>,
    transaction_count: usize,
}

impl FrequentItemsets {
    /// Wrap an existing itemset → support mapping
    pub fn from_supports(supports: HashMap<Itemset, f64>, transaction_count: usize) -> Self {
        Self {
            supports,
            transaction_count,
        }
    }

    /// Support of an itemset, if it is frequent
    pub fn get(&self, itemset: &Itemset) -> Option<f64> {
        self.supports.get(itemset).copied()
    }

    /// Whether an itemset is frequent
    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.supports.contains_key(itemset)
    }

    /// Number of frequent itemsets across all sizes
    pub fn len(&self) -> usize {
        self.supports.len()
    }

    /// Whether nothing met the threshold
    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    /// Iterate in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, f64)> {
        self.supports.iter().map(|(itemset, &support)| (itemset, support))
    }

    /// All entries in listing order (size, then labels)
    pub fn sorted(&self) -> Vec<(&Itemset, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Entries grouped by itemset size, each group in listing order
    pub fn by_size(&self) -> BTreeMap<usize, Vec<(&Itemset, f64)>> {
        let mut groups: BTreeMap<usize, Vec<(&Itemset, f64)>> = BTreeMap::new();
        for (itemset, support) in self.sorted() {
            groups.entry(itemset.len()).or_default().push((itemset, support));
        }
        groups
    }

    /// Size of the largest frequent itemset (0 when empty)
    pub fn max_len(&self) -> usize {
        self.supports.keys().map(Itemset::len).max().unwrap_or(0)
    }

    /// Number of transactions the supports were computed over
    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    /// Absolute transaction count for a support value
    pub fn count_for(&self, support: f64) -> usize {
        (support * self.transaction_count as f64).round() as usize
    }
}

/// Trait for frequent itemset mining strategies
pub trait ItemsetMiner {
    /// Find every itemset whose support is at least `min_support`
    ///
    /// # Errors
    /// - [`MiningError::InvalidSupport`] if `min_support` is outside (0, 1]
    /// - [`MiningError::EmptyTransactions`] if `transactions` is empty
    fn mine(&self, transactions: &[Transaction], min_support: f64) -> Result<FrequentItemsets>;
}

/// Settings for [`LevelwiseMiner`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinerConfig {
    /// Drop candidates having an infrequent k-subset before counting
    pub prune_candidates: bool,
    /// Stop after this itemset size (None = run until a level is empty)
    pub max_len: Option<usize>,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            prune_candidates: true,
            max_len: None,
        }
    }
}

impl MinerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_len == Some(0) {
            return Err(MiningError::InvalidMaxLen);
        }
        Ok(())
    }
}

/// Apriori-style level-wise miner
#[derive(Debug, Clone, Default)]
pub struct LevelwiseMiner {
    config: MinerConfig,
}

impl LevelwiseMiner {
    /// Create a miner with the given configuration
    pub fn new(config: MinerConfig) -> Self {
        Self { config }
    }
}

impl ItemsetMiner for LevelwiseMiner {
    fn mine(&self, transactions: &[Transaction], min_support: f64) -> Result<FrequentItemsets> {
        let min_support = validate_support(min_support)?;
        self.config.validate()?;
        if transactions.is_empty() {
            return Err(MiningError::EmptyTransactions);
        }

        let mut supports = HashMap::new();
        let mut level: Vec<Itemset> = Vec::new();
        for (itemset, item_support) in frequent_singletons(transactions, min_support) {
            supports.insert(itemset.clone(), item_support);
            level.push(itemset);
        }
        debug!(level = 1, frequent = level.len(), "Counted single items");

        let mut k = 1;
        while !level.is_empty() {
            if self.config.max_len.is_some_and(|max| k >= max) {
                break;
            }

            let candidates = generate_candidates(&level, self.config.prune_candidates);
            let candidate_count = candidates.len();

            let mut next = Vec::new();
            for candidate in candidates {
                let candidate_support = support(&candidate, transactions);
                if candidate_support >= min_support {
                    supports.insert(candidate.clone(), candidate_support);
                    next.push(candidate);
                }
            }

            k += 1;
            debug!(level = k, candidates = candidate_count, frequent = next.len(), "Scanned level");
            level = next;
        }

        info!(
            transactions = transactions.len(),
            min_support,
            frequent = supports.len(),
            "Mining complete"
        );

        Ok(FrequentItemsets::from_supports(supports, transactions.len()))
    }
}

/// Mine with the default [`LevelwiseMiner`]
pub fn mine_frequent_itemsets(transactions: &[Transaction], min_support: f64) -> Result<FrequentItemsets> {
    LevelwiseMiner::default().mine(transactions, min_support)
}

/// Single items meeting `min_support`, in label order
fn frequent_singletons(transactions: &[Transaction], min_support: f64) -> Vec<(Itemset, f64)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for transaction in transactions {
        for item in transaction.iter() {
            *counts.entry(item).or_insert(0) += 1;
        }
    }

    let total = transactions.len() as f64;
    counts
        .into_iter()
        .map(|(item, count)| (Itemset::singleton(item), count as f64 / total))
        .filter(|(_, item_support)| *item_support >= min_support)
        .collect()
}

/// Join frequent k-itemsets into distinct (k+1)-candidates, in listing order
fn generate_candidates(level: &[Itemset], prune: bool) -> Vec<Itemset> {
    let Some(k) = level.first().map(Itemset::len) else {
        return Vec::new();
    };
    let frequent: HashSet<&Itemset> = level.iter().collect();
    let mut candidates = BTreeSet::new();

    for (i, left) in level.iter().enumerate() {
        for right in &level[i + 1..] {
            let joined = left.union(right);
            if joined.len() != k + 1 || candidates.contains(&joined) {
                continue;
            }
            if prune && has_infrequent_subset(&joined, &frequent) {
                continue;
            }
            candidates.insert(joined);
        }
    }

    candidates.into_iter().collect()
}

fn has_infrequent_subset(candidate: &Itemset, frequent: &HashSet<&Itemset>) -> bool {
    (0..candidate.len()).any(|index| !frequent.contains(&candidate.without(index)))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::support::support_count;
    use proptest::prelude::*;

    fn transactions_strategy() -> impl Strategy<Value = Vec<Transaction>> {
        prop::collection::vec(prop::collection::btree_set(0u8..6, 1..5), 1..12).prop_map(|baskets| {
            baskets
                .into_iter()
                .map(|basket| Transaction::new(basket.into_iter().map(|i| format!("i{}", i))))
                .collect()
        })
    }

    /// Every non-empty itemset over the labels that occur in `transactions`
    fn all_itemsets(transactions: &[Transaction]) -> Vec<Itemset> {
        let universe = Itemset::new(transactions.iter().flat_map(|t| t.iter().map(str::to_string)));
        let mut all: Vec<Itemset> = universe.proper_subsets().collect();
        all.push(universe);
        all
    }

    proptest! {
        /// Property: Mined supports are exact and nothing frequent is missed
        #[test]
        fn test_matches_exhaustive_oracle(
            transactions in transactions_strategy(),
            min_support in 0.05f64..=1.0,
        ) {
            let frequent = mine_frequent_itemsets(&transactions, min_support).unwrap();

            for itemset in all_itemsets(&transactions) {
                let expected = support(&itemset, &transactions);
                match frequent.get(&itemset) {
                    Some(found) => {
                        prop_assert_eq!(found, expected);
                        prop_assert!(found >= min_support);
                    }
                    None => prop_assert!(expected < min_support,
                        "{} has support {} but was not mined", itemset, expected),
                }
            }
        }

        /// Property: Support never increases when an itemset grows
        #[test]
        fn test_anti_monotonicity(
            transactions in transactions_strategy(),
            min_support in 0.05f64..=1.0,
        ) {
            let frequent = mine_frequent_itemsets(&transactions, min_support).unwrap();

            for (superset, sup_support) in frequent.iter() {
                for subset in superset.proper_subsets() {
                    let sub_support = frequent.get(&subset);
                    prop_assert!(sub_support.is_some(), "{} missing", subset);
                    prop_assert!(sub_support.unwrap_or(0.0) >= sup_support);
                }
            }
        }

        /// Property: Subset pruning does not change the result
        #[test]
        fn test_pruning_is_transparent(
            transactions in transactions_strategy(),
            min_support in 0.05f64..=1.0,
        ) {
            let pruned = LevelwiseMiner::new(MinerConfig { prune_candidates: true, max_len: None })
                .mine(&transactions, min_support)
                .unwrap();
            let unpruned = LevelwiseMiner::new(MinerConfig { prune_candidates: false, max_len: None })
                .mine(&transactions, min_support)
                .unwrap();
            prop_assert_eq!(pruned, unpruned);
        }

        /// Property: Mining is deterministic
        #[test]
        fn test_determinism(
            transactions in transactions_strategy(),
            min_support in 0.05f64..=1.0,
        ) {
            let first = mine_frequent_itemsets(&transactions, min_support).unwrap();
            let second = mine_frequent_itemsets(&transactions, min_support).unwrap();
            prop_assert_eq!(first.sorted(), second.sorted());
        }

        /// Property: Counts reported back agree with a direct scan
        #[test]
        fn test_count_for_matches_scan(
            transactions in transactions_strategy(),
            min_support in 0.05f64..=1.0,
        ) {
            let frequent = mine_frequent_itemsets(&transactions, min_support).unwrap();
            for (itemset, itemset_support) in frequent.iter() {
                prop_assert_eq!(frequent.count_for(itemset_support), support_count(itemset, &transactions));
            }
        }
    }
}
