//! Support computation

use crate::itemset::{Itemset, Transaction};

/// Number of transactions containing every item of `itemset`
pub fn support_count(itemset: &Itemset, transactions: &[Transaction]) -> usize {
    transactions
        .iter()
        .filter(|transaction| transaction.contains_all(itemset))
        .count()
}

/// Fraction of transactions containing `itemset`
///
/// Defined as 0 for an empty collection. The miner rejects empty input before
/// this is ever reached.
pub fn support(itemset: &Itemset, transactions: &[Transaction]) -> f64 {
    if transactions.is_empty() {
        return 0.0;
    }
    support_count(itemset, transactions) as f64 / transactions.len() as f64
}
