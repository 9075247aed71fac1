use hashbrown::HashSet;
use std::fmt;

/// A node of a learned tree, either a split or a prediction.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Internal(InternalNode),
    Leaf(LeafNode),
}

/// A split on one binary feature. A record is routed left when its value
/// for `split_key` equals `left_value`, right when it equals `right_value`.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalNode {
    pub split_key: String,
    pub left_value: u8,
    pub right_value: u8,
    pub left: Box<Node>,
    pub right: Box<Node>,
    /// Average entropy of the winning split.
    pub entropy: f64,
    /// Number of learning records that reached this node.
    pub n_records: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    pub prediction: u8,
    pub n_records: usize,
}

impl Node {
    pub fn leaf(prediction: u8, n_records: usize) -> Self {
        Node::Leaf(LeafNode { prediction, n_records })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn split_key(&self) -> Option<&str> {
        match self {
            Node::Internal(n) => Some(&n.split_key),
            Node::Leaf(_) => None,
        }
    }

    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Internal(n) => Some(&n.left),
            Node::Leaf(_) => None,
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Internal(n) => Some(&n.right),
            Node::Leaf(_) => None,
        }
    }

    pub fn n_records(&self) -> usize {
        match self {
            Node::Internal(n) => n.n_records,
            Node::Leaf(n) => n.n_records,
        }
    }

    /// Number of edges on the longest path down to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Node::Internal(n) => 1 + n.left.depth().max(n.right.depth()),
            Node::Leaf(_) => 0,
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Internal(n) => n.left.n_leaves() + n.right.n_leaves(),
            Node::Leaf(_) => 1,
        }
    }

    pub fn n_internal(&self) -> usize {
        match self {
            Node::Internal(n) => 1 + n.left.n_internal() + n.right.n_internal(),
            Node::Leaf(_) => 0,
        }
    }

    /// Add every split key of this subtree to `keys`.
    pub fn collect_split_keys<'a>(&'a self, keys: &mut HashSet<&'a str>) {
        if let Node::Internal(n) = self {
            keys.insert(&n.split_key);
            n.left.collect_split_keys(keys);
            n.right.collect_split_keys(keys);
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        match self {
            Node::Internal(n) => {
                writeln!(
                    f,
                    "{}[{}] left={},right={},entropy={:.4},n={}",
                    pad, n.split_key, n.left_value, n.right_value, n.entropy, n.n_records
                )?;
                n.left.fmt_indented(f, indent + 1)?;
                n.right.fmt_indented(f, indent + 1)
            }
            Node::Leaf(n) => writeln!(f, "{}leaf={},n={}", pad, n.prediction, n.n_records),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
