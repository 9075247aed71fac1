//! Entropy Evaluator
//!
//! Class probabilities and Shannon entropy of a feature over contiguous
//! slices of the target-sorted learning set, and the search for the split
//! index minimizing average entropy.
use crate::data::LearningSet;
use crate::errors::Id3Error;
use crate::utils::binary_entropy;

/// The best split found for one feature over one slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitInfo {
    /// Index of the feature in the learning set.
    pub split_feature: usize,
    /// Average entropy of the two sides.
    pub entropy: f64,
    /// Boundary between the left `[from, split_index)` and
    /// right `[split_index, to)` sides.
    pub split_index: usize,
}

/// Zero and one counts of a binary column slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub zeros: usize,
    pub ones: usize,
}

impl Counts {
    pub fn of(values: &[u8]) -> Self {
        let ones = values.iter().filter(|&&v| v == 1).count();
        Counts {
            zeros: values.len() - ones,
            ones,
        }
    }

    pub fn total(&self) -> usize {
        self.zeros + self.ones
    }

    pub fn entropy(&self) -> f64 {
        binary_entropy(self.zeros, self.ones)
    }
}

/// Mean entropy of two sides, or the entropy of the non-empty side alone.
#[inline]
fn average_entropy(left: Counts, right: Counts) -> f64 {
    match (left.total(), right.total()) {
        (0, _) => right.entropy(),
        (_, 0) => left.entropy(),
        _ => (left.entropy() + right.entropy()) / 2.0,
    }
}

/// Evaluates entropy over slices of a [`LearningSet`].
pub struct EntropyEvaluator<'a> {
    data: &'a LearningSet,
}

impl<'a> EntropyEvaluator<'a> {
    pub fn new(data: &'a LearningSet) -> Self {
        EntropyEvaluator { data }
    }

    pub fn data(&self) -> &'a LearningSet {
        self.data
    }

    /// Fractions of records in `[from, to)` whose `feature` is 0 and 1.
    /// Fails on an empty or out of range slice.
    pub fn class_probabilities(&self, feature: &str, from: usize, to: usize) -> Result<(f64, f64), Id3Error> {
        let col = self.resolve(feature)?;
        self.check_slice(from, to)?;
        let counts = Counts::of(self.data.get_col_slice(col, from, to));
        let total = counts.total() as f64;
        Ok((counts.zeros as f64 / total, counts.ones as f64 / total))
    }

    /// Shannon entropy (base 2) of `feature` over `[from, to)`.
    pub fn entropy(&self, feature: &str, from: usize, to: usize) -> Result<f64, Id3Error> {
        let col = self.resolve(feature)?;
        self.check_slice(from, to)?;
        Ok(Counts::of(self.data.get_col_slice(col, from, to)).entropy())
    }

    /// Mean of the entropies of `[from, split_index)` and `[split_index, to)`.
    /// When one side is empty, the entropy of the other side is returned as is.
    pub fn average_entropy_at_split(
        &self,
        feature: &str,
        from: usize,
        to: usize,
        split_index: usize,
    ) -> Result<f64, Id3Error> {
        let col = self.resolve(feature)?;
        self.check_slice(from, to)?;
        if split_index < from || split_index > to {
            return Err(Id3Error::InvalidSlice(from, split_index, self.data.len()));
        }
        let left = Counts::of(self.data.get_col_slice(col, from, split_index));
        let right = Counts::of(self.data.get_col_slice(col, split_index, to));
        Ok(average_entropy(left, right))
    }

    /// Lowest average entropy over the split indices strictly inside
    /// `(from, to)`, ties going to the lowest index. `None` when the slice
    /// has no interior index.
    pub fn best_split_for_feature(&self, feature: &str, from: usize, to: usize) -> Result<Option<SplitInfo>, Id3Error> {
        let col = self.resolve(feature)?;
        self.check_slice(from, to)?;
        Ok(self.best_split_at(col, from, to))
    }

    /// Best split over `features`, ties going to the earliest feature.
    pub(crate) fn best_split(&self, features: &[usize], from: usize, to: usize) -> Option<SplitInfo> {
        let mut best: Option<SplitInfo> = None;
        for &feature in features {
            if let Some(info) = self.best_split_at(feature, from, to) {
                if best.map_or(true, |b| info.entropy < b.entropy) {
                    best = Some(info);
                }
            }
        }
        best
    }

    /// Single pass over the slice, moving one record at a time from the
    /// right side to the left side.
    pub(crate) fn best_split_at(&self, feature: usize, from: usize, to: usize) -> Option<SplitInfo> {
        if to < from + 2 {
            return None;
        }
        let values = self.data.get_col_slice(feature, from, to);
        let mut left = Counts::default();
        let mut right = Counts::of(values);
        let mut best: Option<SplitInfo> = None;

        for (offset, &v) in values[..values.len() - 1].iter().enumerate() {
            if v == 1 {
                left.ones += 1;
                right.ones -= 1;
            } else {
                left.zeros += 1;
                right.zeros -= 1;
            }
            let entropy = average_entropy(left, right);
            if best.map_or(true, |b| entropy < b.entropy) {
                best = Some(SplitInfo {
                    split_feature: feature,
                    entropy,
                    split_index: from + offset + 1,
                });
            }
        }
        best
    }

    fn resolve(&self, feature: &str) -> Result<usize, Id3Error> {
        self.data
            .feature_index(feature)
            .ok_or_else(|| Id3Error::MissingFeature(feature.to_string()))
    }

    fn check_slice(&self, from: usize, to: usize) -> Result<(), Id3Error> {
        if from >= to || to > self.data.len() {
            Err(Id3Error::InvalidSlice(from, to, self.data.len()))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;
    use crate::utils::precision_round;

    // Sorted by target this gives a = [1, 1, 1, 1, 0] and b = [0, 0, 0, 1, 1].
    fn learning_set() -> LearningSet {
        let mut data = vec![Record::from([("a", 1), ("b", 0), ("result", 0)]); 3];
        data.push(Record::from([("a", 0), ("b", 1), ("result", 1)]));
        data.insert(2, Record::from([("a", 1), ("b", 1), ("result", 1)]));
        LearningSet::from_records(&data, "result").unwrap()
    }

    #[test]
    fn test_probability() {
        let ls = learning_set();
        let ev = EntropyEvaluator::new(&ls);
        assert_eq!(ev.class_probabilities("a", 0, 5).unwrap(), (0.2, 0.8));
        assert_eq!(ev.class_probabilities("b", 0, 3).unwrap(), (1.0, 0.0));
    }

    #[test]
    fn test_entropy() {
        let ls = learning_set();
        let ev = EntropyEvaluator::new(&ls);
        assert_eq!(precision_round(ev.entropy("a", 0, 5).unwrap(), 2), 0.72);
        // Pure slice.
        assert_eq!(ev.entropy("a", 0, 4).unwrap(), 0.0);
        // Balanced slice.
        assert_eq!(ev.entropy("b", 1, 5).unwrap(), 1.0);
    }

    #[test]
    fn test_average_entropy() {
        let ls = learning_set();
        let ev = EntropyEvaluator::new(&ls);
        let entp: Vec<f64> = (1..5)
            .map(|i| precision_round(ev.average_entropy_at_split("a", 0, 5, i).unwrap(), 6))
            .collect();
        assert_eq!(entp, vec![0.405639, 0.459148, 0.5, 0.0]);
    }

    #[test]
    fn test_average_entropy_one_side_empty() {
        let ls = learning_set();
        let ev = EntropyEvaluator::new(&ls);
        let whole = ev.entropy("a", 0, 5).unwrap();
        assert_eq!(ev.average_entropy_at_split("a", 0, 5, 0).unwrap(), whole);
        assert_eq!(ev.average_entropy_at_split("a", 0, 5, 5).unwrap(), whole);
        assert!(ev.average_entropy_at_split("a", 1, 5, 0).is_err());
    }

    #[test]
    fn test_best_split_for_feature() {
        let ls = learning_set();
        let ev = EntropyEvaluator::new(&ls);
        let b = ev.best_split_for_feature("b", 0, 5).unwrap().unwrap();
        assert_eq!(b.split_index, 3);
        assert_eq!(b.entropy, 0.0);
        let a = ev.best_split_for_feature("a", 0, 5).unwrap().unwrap();
        assert_eq!(a.split_index, 4);
        assert_eq!(a.entropy, 0.0);
        assert_eq!(ev.best_split_for_feature("a", 2, 3).unwrap(), None);
    }

    #[test]
    fn test_best_split_tie_lowest_index() {
        let ls = learning_set();
        let ev = EntropyEvaluator::new(&ls);
        // b over [1, 5) is [0, 0, 1, 1], indices 2 and 4 tie but 3 is pure on both sides.
        let b = ev.best_split_for_feature("b", 1, 5).unwrap().unwrap();
        assert_eq!(b.split_index, 3);
        let a = ev.best_split_for_feature("a", 0, 3).unwrap().unwrap();
        // Pure slice, every split scores 0 and the first one is kept.
        assert_eq!(a.split_index, 1);
        assert_eq!(a.entropy, 0.0);
    }

    #[test]
    fn test_best_split_over_features() {
        let ls = learning_set();
        let ev = EntropyEvaluator::new(&ls);
        // Both features reach 0, declaration order keeps `a`.
        let best = ev.best_split(&[0, 1], 0, 5).unwrap();
        assert_eq!(best.split_feature, 0);
        assert_eq!(best.split_index, 4);
        let best = ev.best_split(&[1], 0, 4).unwrap();
        assert_eq!(best.split_feature, 1);
        assert_eq!(best.split_index, 3);
        assert_eq!(ev.best_split(&[], 0, 5), None);
    }

    #[test]
    fn test_invalid_requests() {
        let ls = learning_set();
        let ev = EntropyEvaluator::new(&ls);
        assert_eq!(ev.entropy("a", 2, 2).unwrap_err(), Id3Error::InvalidSlice(2, 2, 5));
        assert_eq!(ev.class_probabilities("a", 0, 6).unwrap_err(), Id3Error::InvalidSlice(0, 6, 5));
        assert_eq!(ev.entropy("c", 0, 5).unwrap_err(), Id3Error::MissingFeature("c".to_string()));
        assert_eq!(ev.entropy("result", 0, 5).unwrap_err(), Id3Error::MissingFeature("result".to_string()));
    }
}
