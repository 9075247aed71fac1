use crate::data::Record;
use crate::errors::Id3Error;
use crate::metric::accuracy;
use crate::node::Node;
use hashbrown::HashSet;
use rayon::prelude::*;
use std::fmt::{self, Display};

/// A learned binary decision tree. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    root: Node,
    target: String,
    features: Vec<String>,
}

impl Tree {
    pub(crate) fn new(root: Node, target: String, features: Vec<String>) -> Self {
        Tree { root, target, features }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Name of the predicted feature.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Features that were available for splitting, in declaration order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }

    pub fn n_nodes(&self) -> usize {
        self.root.n_leaves() + self.root.n_internal()
    }

    /// Every feature used as a split key somewhere in the tree.
    pub fn split_keys(&self) -> HashSet<&str> {
        let mut keys = HashSet::new();
        self.root.collect_split_keys(&mut keys);
        keys
    }

    /// Walk the tree from the root, following the branch whose guard equals
    /// the record's value, and return the prediction of the leaf reached.
    pub fn decide(&self, record: &Record) -> Result<u8, Id3Error> {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf(leaf) => return Ok(leaf.prediction),
                Node::Internal(n) => {
                    let value = record
                        .get(&n.split_key)
                        .ok_or_else(|| Id3Error::MissingFeature(n.split_key.clone()))?;
                    node = if value == n.left_value {
                        &n.left
                    } else if value == n.right_value {
                        &n.right
                    } else {
                        return Err(Id3Error::InvalidPredicate(
                            n.split_key.clone(),
                            value,
                            n.left_value,
                            n.right_value,
                        ));
                    };
                }
            }
        }
    }

    /// Decide a batch of records, the first error encountered is returned.
    ///
    /// * `records` - Records to classify.
    /// * `parallel` - Spread the records over the rayon thread pool.
    pub fn decide_all(&self, records: &[Record], parallel: bool) -> Result<Vec<u8>, Id3Error> {
        if parallel {
            records.par_iter().map(|r| self.decide(r)).collect()
        } else {
            records.iter().map(|r| self.decide(r)).collect()
        }
    }

    /// Fraction of `records` whose own target value the tree reproduces.
    pub fn accuracy(&self, records: &[Record]) -> Result<f64, Id3Error> {
        let targets = records
            .iter()
            .map(|r| r.get(&self.target).ok_or_else(|| Id3Error::MissingTarget(self.target.clone())))
            .collect::<Result<Vec<u8>, Id3Error>>()?;
        let predictions = self.decide_all(records, false)?;
        Ok(accuracy(&predictions, &targets))
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "target={}", self.target)?;
        write!(f, "{}", self.root)
    }
}
