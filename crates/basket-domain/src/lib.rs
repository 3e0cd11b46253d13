//! Basket Domain Layer
//!
//! This crate contains the mining core of Basket: level-wise discovery of
//! frequent itemsets over a collection of transactions, and derivation of
//! confidence-ranked association rules from them. It performs no I/O and holds
//! no shared state; every operation is a pure function over immutable input.
//!
//! ## Key Concepts
//!
//! - **Transaction**: one observed basket, a set of distinct item labels
//! - **Itemset**: a non-empty set of labels, compared by content
//! - **Support**: fraction of transactions containing an itemset
//! - **Rule**: `A -> B` carrying `support(A ∪ B)` and `support(A ∪ B) / support(A)`
//!
//! ## Example
//!
//! ```
//! use basket_domain::{generate_rules, mine_frequent_itemsets, Itemset, Transaction};
//!
//! let transactions = vec![
//!     Transaction::new(["a", "b"]),
//!     Transaction::new(["a", "b", "c"]),
//!     Transaction::new(["a"]),
//!     Transaction::new(["b", "c"]),
//! ];
//!
//! let frequent = mine_frequent_itemsets(&transactions, 0.5).unwrap();
//! assert_eq!(frequent.get(&Itemset::new(["a", "b"])), Some(0.5));
//!
//! let rules = generate_rules(&frequent, 0.6).unwrap();
//! assert!(rules.iter().all(|rule| rule.confidence >= 0.6));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod itemset;
pub mod miner;
pub mod rules;
pub mod support;
pub mod threshold;

// Re-exports for convenience
pub use error::{MiningError, Result};
pub use itemset::{Itemset, Transaction};
pub use miner::{mine_frequent_itemsets, FrequentItemsets, ItemsetMiner, LevelwiseMiner, MinerConfig};
pub use rules::{generate_rules, rank_rules, Rule};
pub use support::{support, support_count};
pub use threshold::{validate_confidence, validate_support};
