//! Itemset and transaction value types
//!
//! An [`Itemset`] is stored as a sorted, deduplicated vector of labels, so two
//! itemsets built from the same labels in any order are equal and hash alike.
//! That makes them usable directly as map keys.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// One observed basket: the distinct item labels seen together
///
/// Duplicate labels collapse on construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transaction {
    items: BTreeSet<String>,
}

impl Transaction {
    /// Create a transaction from any collection of labels
    ///
    /// # Examples
    ///
    /// ```
    /// use basket_domain::Transaction;
    ///
    /// let t = Transaction::new(["milk", "bread", "milk"]);
    /// assert_eq!(t.len(), 2);
    /// ```
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of distinct items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the transaction holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a single label is present
    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    /// Iterate labels in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Exact subset test: every item of `itemset` occurs in this transaction
    pub fn contains_all(&self, itemset: &Itemset) -> bool {
        itemset.len() <= self.items.len() && itemset.iter().all(|item| self.items.contains(item))
    }
}

/// A set of distinct item labels compared by content
///
/// Ordering is size first, then lexicographic over the sorted labels. This is
/// the order used whenever itemsets are listed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Itemset {
    items: Vec<String>,
}

impl Itemset {
    /// Create an itemset from any collection of labels
    ///
    /// `items` must yield at least one label; an empty itemset is a caller
    /// error and trips a debug assertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use basket_domain::Itemset;
    ///
    /// assert_eq!(Itemset::new(["b", "a"]), Itemset::new(["a", "b", "a"]));
    /// ```
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items: Vec<String> = items.into_iter().map(Into::into).collect();
        debug_assert!(!items.is_empty(), "itemsets are non-empty");
        items.sort();
        items.dedup();
        Self { items }
    }

    /// Create a 1-itemset
    pub fn singleton(item: impl Into<String>) -> Self {
        Self {
            items: vec![item.into()],
        }
    }

    fn from_sorted(items: Vec<String>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self { items }
    }

    /// Number of items (the `k` of a k-itemset)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the itemset holds no items
    ///
    /// Itemsets produced by mining and rule generation are never empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sorted labels
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Iterate labels in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Whether a label is a member
    pub fn contains(&self, item: &str) -> bool {
        self.items.binary_search_by(|label| label.as_str().cmp(item)).is_ok()
    }

    /// Whether every item of `self` is in `other`
    pub fn is_subset(&self, other: &Itemset) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    /// Whether the two itemsets share no item
    pub fn is_disjoint(&self, other: &Itemset) -> bool {
        self.iter().all(|item| !other.contains(item))
    }

    /// Set union
    pub fn union(&self, other: &Itemset) -> Itemset {
        let (left, right) = (&self.items, &other.items);
        let mut merged = Vec::with_capacity(left.len() + right.len());
        let (mut i, mut j) = (0, 0);

        while i < left.len() && j < right.len() {
            match left[i].cmp(&right[j]) {
                Ordering::Less => {
                    merged.push(left[i].clone());
                    i += 1;
                }
                Ordering::Greater => {
                    merged.push(right[j].clone());
                    j += 1;
                }
                Ordering::Equal => {
                    merged.push(left[i].clone());
                    i += 1;
                    j += 1;
                }
            }
        }
        merged.extend_from_slice(&left[i..]);
        merged.extend_from_slice(&right[j..]);

        Itemset::from_sorted(merged)
    }

    /// Items of `self` not in `other`
    pub fn difference(&self, other: &Itemset) -> Itemset {
        Itemset::from_sorted(
            self.items
                .iter()
                .filter(|item| !other.contains(item))
                .cloned()
                .collect(),
        )
    }

    /// The itemset with the item at `index` removed
    ///
    /// # Panics
    /// Panics if `index` is out of bounds
    pub fn without(&self, index: usize) -> Itemset {
        let mut items = self.items.clone();
        items.remove(index);
        Itemset::from_sorted(items)
    }

    /// All subsets with exactly `k` items, in lexicographic order
    ///
    /// Yields nothing when `k` is zero or exceeds the itemset size.
    pub fn subsets_of_len(&self, k: usize) -> Combinations<'_> {
        Combinations::new(&self.items, k)
    }

    /// All non-empty proper subsets, smallest first
    pub fn proper_subsets(&self) -> impl Iterator<Item = Itemset> + '_ {
        (1..self.len()).flat_map(move |k| self.subsets_of_len(k))
    }
}

impl Ord for Itemset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.items.cmp(&other.items))
    }
}

impl PartialOrd for Itemset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.items.join(", "))
    }
}

/// Iterator over the k-combinations of an itemset
pub struct Combinations<'a> {
    items: &'a [String],
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Combinations<'a> {
    fn new(items: &'a [String], k: usize) -> Self {
        Self {
            items,
            indices: (0..k).collect(),
            done: k == 0 || k > items.len(),
        }
    }
}

impl Iterator for Combinations<'_> {
    type Item = Itemset;

    fn next(&mut self) -> Option<Itemset> {
        if self.done {
            return None;
        }

        let subset = Itemset::from_sorted(self.indices.iter().map(|&i| self.items[i].clone()).collect());

        // Advance to the next index tuple
        let n = self.items.len();
        let k = self.indices.len();
        let mut pos = k;
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            if self.indices[pos] != pos + n - k {
                self.indices[pos] += 1;
                for next in pos + 1..k {
                    self.indices[next] = self.indices[next - 1] + 1;
                }
                break;
            }
        }

        Some(subset)
    }
}
