//! Errors
//!
//! Custom error types used throughout the `id3tree` crate.
use thiserror::Error;

/// Errors that can occur while learning or consulting an ID3 tree.
#[derive(Debug, Error, PartialEq)]
pub enum Id3Error {
    /// No records were provided to learn from.
    #[error("Unable to build a tree from an empty set of records.")]
    EmptyData,
    /// Records do not share an identical key set.
    #[error("Record {0} has an inconsistent key set: {1}.")]
    InconsistentKeys(usize, String),
    /// The designated target key is not part of the records.
    #[error("Target feature `{0}` is not present in the records.")]
    MissingTarget(String),
    /// Pooled values across the dataset are not exactly `{0, 1}`.
    #[error("Data must be binary valued with exactly the values {{0, 1}}, found {0}.")]
    NonBinaryData(String),
    /// A record's value matches neither branch guard of a node.
    #[error("Value {1} of feature `{0}` matches neither branch guard ({2} or {3}).")]
    InvalidPredicate(String, u8, u8, u8),
    /// A record lacks a feature the tree needs to test.
    #[error("Feature `{0}` is missing from the record.")]
    MissingFeature(String),
    /// Slice bounds are empty or out of range.
    #[error("Invalid slice [{0}, {1}) over a learning set of {2} records.")]
    InvalidSlice(usize, usize, usize),
    /// Configuration could not be parsed.
    #[error("Unable to parse configuration: {0}")]
    InvalidConfig(String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
}
