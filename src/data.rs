//! Data
//!
//! Records as supplied by callers, and the validated, target-sorted
//! learning set the builder works on.
use crate::errors::Id3Error;
use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

/// A single observation: a mapping from feature name to a binary value.
/// The target feature is just another key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    values: HashMap<String, u8>,
}

impl Record {
    pub fn new() -> Self {
        Record { values: HashMap::new() }
    }

    /// Set `key` to `value`, returning the previous value if any.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: u8) -> Option<u8> {
        self.values.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<u8> {
        self.values.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<u8> {
        self.values.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.values.values().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn key_set(&self) -> HashSet<&str> {
        self.keys().collect()
    }
}

impl From<HashMap<String, u8>> for Record {
    fn from(values: HashMap<String, u8>) -> Self {
        Record { values }
    }
}

impl<K: Into<String>> FromIterator<(K, u8)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, u8)>>(iter: I) -> Self {
        Record {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, u8); N]> for Record {
    fn from(pairs: [(K, u8); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// The learning sequence: records validated as binary with a consistent
/// key set, sorted by target value ascending and stored column-major.
///
/// Because the target is sorted, every slice `[from, to)` holds its
/// class-0 records before its class-1 records.
#[derive(Debug, Clone)]
pub struct LearningSet {
    /// Feature names in declaration order (lexicographic), target excluded.
    features: Vec<String>,
    target_name: String,
    /// Feature values, one column after another.
    data: Vec<u8>,
    target: Vec<u8>,
    rows: usize,
}

impl LearningSet {
    /// Validate `records` and build the target-sorted learning set.
    ///
    /// * `records` - The raw records, all sharing one key set.
    /// * `target` - Name of the feature to predict.
    pub fn from_records(records: &[Record], target: &str) -> Result<Self, Id3Error> {
        let first = records.first().ok_or(Id3Error::EmptyData)?;
        let expected = first.key_set();
        for (i, record) in records.iter().enumerate().skip(1) {
            let keys = record.key_set();
            if keys != expected {
                return Err(Id3Error::InconsistentKeys(i, describe_mismatch(&expected, &keys)));
            }
        }
        if !expected.contains(target) {
            return Err(Id3Error::MissingTarget(target.to_string()));
        }

        let distinct: HashSet<u8> = records.iter().flat_map(|r| r.values()).collect();
        if distinct.len() != 2 || !distinct.contains(&0) || !distinct.contains(&1) {
            let mut seen: Vec<u8> = distinct.into_iter().collect();
            seen.sort_unstable();
            let seen: Vec<String> = seen.iter().map(|v| v.to_string()).collect();
            return Err(Id3Error::NonBinaryData(format!("{{{}}}", seen.join(", "))));
        }

        let mut features: Vec<String> = expected
            .iter()
            .filter(|k| **k != target)
            .map(|k| k.to_string())
            .collect();
        features.sort();

        // Stable, so equal targets keep their input order.
        let mut order: Vec<usize> = (0..records.len()).collect();
        order.sort_by_key(|&i| records[i].get(target));

        let rows = records.len();
        let mut data = Vec::with_capacity(rows * features.len());
        for feature in &features {
            data.extend(order.iter().map(|&i| records[i].get(feature).unwrap_or_default()));
        }
        let target_col = order
            .iter()
            .map(|&i| records[i].get(target).unwrap_or_default())
            .collect();

        Ok(LearningSet {
            features,
            target_name: target.to_string(),
            data,
            target: target_col,
            rows,
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// The sorted target column.
    pub fn target(&self) -> &[u8] {
        &self.target
    }

    pub fn feature_index(&self, name: &str) -> Option<usize> {
        self.features.iter().position(|f| f == name)
    }

    /// Get a feature column by name, in target-sorted row order.
    pub fn column(&self, name: &str) -> Option<&[u8]> {
        self.feature_index(name).map(|j| self.get_col(j))
    }

    /// Get an entire column.
    ///
    /// * `col` - The index of the feature column.
    pub fn get_col(&self, col: usize) -> &[u8] {
        self.get_col_slice(col, 0, self.rows)
    }

    /// Get a slice of a column.
    ///
    /// * `col` - The index of the feature column.
    /// * `start_row` - The index of the start of the slice.
    /// * `end_row` - The index of the end of the slice.
    pub fn get_col_slice(&self, col: usize, start_row: usize, end_row: usize) -> &[u8] {
        let offset = col * self.rows;
        &self.data[offset + start_row..offset + end_row]
    }

    /// Number of class-0 records in `[from, to)`.
    pub fn zeros_in_target(&self, from: usize, to: usize) -> usize {
        self.target[from..to].partition_point(|&v| v == 0)
    }
}

fn describe_mismatch(expected: &HashSet<&str>, found: &HashSet<&str>) -> String {
    let mut missing: Vec<&str> = expected.difference(found).copied().collect();
    let mut extra: Vec<&str> = found.difference(expected).copied().collect();
    missing.sort_unstable();
    extra.sort_unstable();
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("missing [{}]", missing.join(", ")));
    }
    if !extra.is_empty() {
        parts.push(format!("unexpected [{}]", extra.join(", ")));
    }
    parts.join(", ")
}
