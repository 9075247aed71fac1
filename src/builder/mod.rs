//! Tree Builder
//!
//! Recursive ID3 learning over slices of the target-sorted learning set.
//! At each node the remaining feature whose best split yields the lowest
//! average entropy is chosen, the slice is partitioned at that split index
//! and both sides are grown in turn.

// public modules
pub mod config;

// private modules
mod setters;

use crate::data::{LearningSet, Record};
use crate::errors::Id3Error;
use crate::node::{InternalNode, Node};
use crate::splitter::{Counts, EntropyEvaluator};
use crate::tree::Tree;
use crate::utils::{majority, purity};
use config::{BuilderConfig, FeatureConsumption};
use log::{debug, info};

/// Learns a [`Tree`] from binary records.
#[derive(Clone, Debug, Default)]
pub struct Id3Builder {
    cfg: BuilderConfig,
}

/// Build a tree with the default configuration.
///
/// * `records` - Binary valued records sharing one key set.
/// * `target` - The feature to predict.
pub fn build(records: &[Record], target: &str) -> Result<Tree, Id3Error> {
    Id3Builder::default().build(records, target)
}

impl Id3Builder {
    pub fn new() -> Self {
        Id3Builder::default()
    }

    pub fn from_config(cfg: BuilderConfig) -> Self {
        Id3Builder { cfg }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.cfg
    }

    /// Validate `records`, sort them by `target` and grow the tree.
    /// Validation failures are returned before any node is created.
    pub fn build(&self, records: &[Record], target: &str) -> Result<Tree, Id3Error> {
        let data = LearningSet::from_records(records, target)?;
        let evaluator = EntropyEvaluator::new(&data);
        let mut remaining: Vec<usize> = (0..data.features().len()).collect();

        let root = self.grow(&evaluator, 0, data.len(), &mut remaining);
        let tree = Tree::new(root, target.to_string(), data.features().to_vec());

        info!(
            "Built tree for `{}` from {} records and {} features: depth {}, {} leaves.",
            target,
            data.len(),
            data.features().len(),
            tree.depth(),
            tree.n_leaves()
        );
        Ok(tree)
    }

    /// Grow the subtree for `[from, to)`. Features chosen here are removed
    /// from `remaining` before recursing.
    fn grow(&self, evaluator: &EntropyEvaluator, from: usize, to: usize, remaining: &mut Vec<usize>) -> Node {
        let data = evaluator.data();
        if remaining.is_empty() || to - from <= self.cfg.min_leaf_size {
            return make_leaf(data, from, to);
        }
        let Some(best) = evaluator.best_split(remaining, from, to) else {
            return make_leaf(data, from, to);
        };

        let feature = best.split_feature;
        let split = best.split_index;
        let (left_value, right_value) = branch_guards(
            Counts::of(data.get_col_slice(feature, from, split)),
            Counts::of(data.get_col_slice(feature, split, to)),
        );
        let split_key = data.features()[feature].clone();
        debug!(
            "Split [{}, {}) on `{}` at {} with average entropy {:.4}, guards left={} right={}.",
            from, to, split_key, split, best.entropy, left_value, right_value
        );

        remaining.retain(|&f| f != feature);
        let (left, right) = match self.cfg.feature_consumption {
            FeatureConsumption::PerBranch => {
                let mut left_remaining = remaining.clone();
                let left = self.grow(evaluator, from, split, &mut left_remaining);
                let right = self.grow(evaluator, split, to, remaining);
                (left, right)
            }
            FeatureConsumption::Global => {
                let left = self.grow(evaluator, from, split, remaining);
                let right = self.grow(evaluator, split, to, remaining);
                (left, right)
            }
        };

        Node::Internal(InternalNode {
            split_key,
            left_value,
            right_value,
            left: Box::new(left),
            right: Box::new(right),
            entropy: best.entropy,
            n_records: to - from,
        })
    }
}

/// Leaf predicting the majority target of `[from, to)`.
fn make_leaf(data: &LearningSet, from: usize, to: usize) -> Node {
    let zeros = data.zeros_in_target(from, to);
    let ones = (to - from) - zeros;
    let prediction = majority(zeros, ones);
    debug!("Leaf [{}, {}) predicting {} ({} zeros, {} ones).", from, to, prediction, zeros, ones);
    Node::leaf(prediction, to - from)
}

/// Guard values of the two branches: each side's majority value of the
/// splitting feature. When both sides agree, the less pure side is flipped
/// (the right side on equal purity) so the guards stay distinct.
pub(crate) fn branch_guards(left: Counts, right: Counts) -> (u8, u8) {
    let left_value = majority(left.zeros, left.ones);
    let right_value = majority(right.zeros, right.ones);
    if left_value != right_value {
        return (left_value, right_value);
    }
    if purity(left.zeros, left.ones) < purity(right.zeros, right.ones) {
        (1 - left_value, right_value)
    } else {
        (left_value, 1 - right_value)
    }
}
