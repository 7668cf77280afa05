//! Counting primitives: convention tallies and running means.

use crate::types::{Category, Convention};
use std::collections::BTreeMap;

/// Occurrence count per convention within one scope and category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    counts: BTreeMap<Convention, usize>,
}

/// Winning convention of a tally.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Majority {
    pub value: Convention,
    pub count: usize,
    pub total: usize,
}

impl Majority {
    /// Fraction of the tally held by the winner.
    pub fn share(&self) -> f64 {
        self.count as f64 / self.total as f64
    }
}

impl Tally {
    pub fn add(&mut self, value: Convention) {
        self.add_count(value, 1);
    }

    pub fn add_count(&mut self, value: Convention, count: usize) {
        if count > 0 {
            *self.counts.entry(value).or_default() += count;
        }
    }

    pub fn merge(&mut self, other: &Tally) {
        for (&value, &count) in &other.counts {
            self.add_count(value, count);
        }
    }

    pub fn count(&self, value: Convention) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Most frequent convention of `category`, or `None` for an empty tally.
    ///
    /// Candidates are sorted by count (descending), then by the category's
    /// preference rank, so ties never depend on insertion order.
    pub fn majority(&self, category: Category) -> Option<Majority> {
        let mut ranked: Vec<(usize, usize, Convention)> = category
            .conventions()
            .iter()
            .enumerate()
            .filter_map(|(rank, &value)| {
                let count = self.count(value);
                (count > 0).then_some((count, rank, value))
            })
            .collect();

        ranked.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        let total: usize = ranked.iter().map(|&(count, _, _)| count).sum();
        ranked.first().map(|&(count, _, value)| Majority {
            value,
            count,
            total,
        })
    }
}

impl FromIterator<Convention> for Tally {
    fn from_iter<I: IntoIterator<Item = Convention>>(iter: I) -> Self {
        let mut tally = Tally::default();
        for value in iter {
            tally.add(value);
        }
        tally
    }
}

/// Running arithmetic mean.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn merge(&mut self, other: &Mean) {
        self.sum += other.sum;
        self.count += other.count;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean of the added values, `None` before the first one.
    pub fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Convention::*;

    #[test]
    fn majority_picks_highest_count() {
        let tally: Tally = [Symbol, Symbol, Word].into_iter().collect();
        let majority = tally.majority(Category::CurrencyFormat).unwrap();

        assert_eq!(majority.value, Symbol);
        assert_eq!((majority.count, majority.total), (2, 3));
        assert!((majority.share() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn tie_goes_to_preferred_convention() {
        let forward: Tally = [Word, Word, Symbol, Symbol].into_iter().collect();
        let backward: Tally = [Symbol, Word, Symbol, Word].into_iter().collect();

        assert_eq!(forward.majority(Category::CurrencyFormat).unwrap().value, Symbol);
        assert_eq!(backward.majority(Category::CurrencyFormat).unwrap().value, Symbol);
    }

    #[test]
    fn detected_value_beats_tied_not_detected() {
        let tally: Tally = [NotDetected, LiteralDate].into_iter().collect();
        assert_eq!(tally.majority(Category::DateFormat).unwrap().value, LiteralDate);
    }

    #[test]
    fn not_detected_can_win() {
        let tally: Tally = [NotDetected, NotDetected, Short].into_iter().collect();
        assert_eq!(tally.majority(Category::UnitFormat).unwrap().value, NotDetected);
    }

    #[test]
    fn empty_tally_has_no_majority() {
        assert_eq!(Tally::default().majority(Category::DateFormat), None);
    }

    #[test]
    fn merge_adds_counts() {
        let mut a: Tally = [Dot, Dot].into_iter().collect();
        let b: Tally = [Dot, Comma].into_iter().collect();
        a.merge(&b);

        assert_eq!(a.count(Dot), 3);
        assert_eq!(a.count(Comma), 1);
        assert_eq!(a.total(), 4);
    }

    #[test]
    fn mean_of_nothing_is_none() {
        let mut mean = Mean::default();
        assert_eq!(mean.value(), None);

        mean.add(1.0);
        mean.add(0.0);
        assert_eq!(mean.value(), Some(0.5));
    }
}
