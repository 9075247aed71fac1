//! A binary-feature ID3 decision tree learner.
//!
//! Records map feature names to `0`/`1`. Learning sorts them by the target
//! feature and recursively splits contiguous slices at the index minimizing
//! average Shannon entropy, producing an immutable [`Tree`] that decides
//! new records by following branch guards down to a leaf.

mod node;

// Modules
pub mod builder;
pub mod constants;
pub mod data;
pub mod errors;
pub mod metric;
pub mod splitter;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use builder::config::{BuilderConfig, FeatureConsumption};
pub use builder::{build, Id3Builder};
pub use data::{LearningSet, Record};
pub use errors::Id3Error;
pub use node::{InternalNode, LeafNode, Node};
pub use splitter::{EntropyEvaluator, SplitInfo};
pub use tree::Tree;
