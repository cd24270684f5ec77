//! Tree view over a flat bucket listing
//!
//! Given the keys of a bucket `test-bucket`:
//!
//! ```text
//! source/
//! source/year=2018/month=08/day=28/test1.txt
//! source/year=2018/month=08/day=28/test.txt
//! source/year=2019/month=01/day=01/test.txt
//! ```
//!
//! the tree rooted at the bucket name renders as:
//!
//! ```text
//! test-bucket/
//! └─ source/
//!    └─ year=2018/
//!       └─ month=08/
//!          └─ day=28/
//!             └─ test1.txt
//!             └─ test.txt
//!    └─ year=2019/
//!       └─ month=01/
//!          └─ day=01/
//!             └─ test.txt
//! ```

use crate::error::{Result, TreeError};
use crate::listing::keys_from_value;
use crate::segment::{is_fully_segmented, split_key};
use crate::tree::{BucketNode, NodeId, TraversalOrder, Tree, TreeTraversal, DELIMITER};
use log::{debug, trace, warn};
use serde_json::Value;
use std::fmt;

/// An immutable tree built once from a bucket's object keys
///
/// The root is a synthetic node named after the bucket. Every other node is
/// one segment of some key, and keys sharing a prefix share the nodes for it.
///
/// # Example
///
/// ```
/// use bucket_tree::prelude::*;
///
/// let tree = BucketTree::new("test-bucket", ["source/a.txt", "source/b.txt"]).unwrap();
/// let source = tree.node_from_key("source/").unwrap();
/// assert_eq!(tree.list_children(source), vec!["a.txt", "b.txt"]);
/// assert_eq!(tree.leaf_paths(None), vec!["test-bucket/source/a.txt", "test-bucket/source/b.txt"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketTree {
    bucket_name: String,
    /// Arena storage for nodes; index 0 is the root
    nodes: Vec<BucketNode>,
}

impl BucketTree {
    /// Build a tree from the keys of `bucket_name`, in listing order
    ///
    /// Key order only affects sibling order. Keys with no derivable segment
    /// (e.g. `""`) contribute nothing; duplicate keys are no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidArgument`] if the bucket name is empty or
    /// contains `/`.
    pub fn new<I, S>(bucket_name: &str, keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        validate_bucket_name(bucket_name)?;

        let mut tree = Self {
            bucket_name: bucket_name.to_string(),
            nodes: vec![BucketNode::root(bucket_name)],
        };

        let mut key_count = 0usize;
        let mut skipped = 0usize;
        for key in keys {
            let key = key.as_ref();
            key_count += 1;

            if !key.is_empty() && !is_fully_segmented(key) {
                warn!("Key '{}' is not fully segmented; its trailing remainder is ignored", key);
            }

            let segments = split_key(key);
            if segments.is_empty() {
                skipped += 1;
                continue;
            }
            tree.insert(&segments);
        }

        debug!(
            "Built tree for bucket '{}': {} keys, {} nodes, {} keys skipped",
            tree.bucket_name,
            key_count,
            tree.nodes.len(),
            skipped
        );
        Ok(tree)
    }

    /// Build a tree from an untyped listing response
    ///
    /// Accepts the shapes described in [`crate::listing`]. All entries are
    /// validated before the tree is built.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidArgument`] for an invalid bucket name or
    /// any listing entry that is not a string key.
    pub fn from_listing(bucket_name: &str, listing: &Value) -> Result<Self> {
        validate_bucket_name(bucket_name)?;
        let keys = keys_from_value(listing)?;
        Self::new(bucket_name, keys)
    }

    /// Walk `segments` from the root, creating nodes that do not exist yet
    fn insert(&mut self, segments: &[&str]) {
        let mut current = NodeId::ROOT;
        for &segment in segments {
            current = match self.child_named(current, segment) {
                Some(child) => child,
                None => self.add_child(current, segment),
            };
        }
    }

    fn add_child(&mut self, parent: NodeId, segment: &str) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        let node = BucketNode::child(segment, parent, &self.nodes[parent.get()]);
        trace!("Created {} for '{}'", id, node.path());

        self.nodes.push(node);
        self.nodes[parent.get()].add_child(segment, id);
        id
    }

    fn child_named(&self, parent: NodeId, segment: &str) -> Option<NodeId> {
        self.get(parent)?.find_child(segment)
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// Segments of the immediate children of `id`, in insertion order
    ///
    /// Empty for leaves and unknown IDs.
    pub fn list_children(&self, id: NodeId) -> Vec<&str> {
        self.children(id)
            .iter()
            .filter_map(|&child| self.segment(child))
            .collect()
    }

    /// Leaves below `start` (default: the root), depth-first
    pub fn leaves(&self, start: Option<NodeId>) -> Vec<NodeId> {
        self.leaves_from(start.unwrap_or(NodeId::ROOT))
    }

    /// Paths of [`leaves`](Self::leaves), in the same order
    pub fn leaf_paths(&self, start: Option<NodeId>) -> Vec<&str> {
        self.leaves(start)
            .into_iter()
            .filter_map(|id| self.get(id).map(BucketNode::path))
            .collect()
    }

    /// Object keys of [`leaves`](Self::leaves), in the same order
    ///
    /// Pairs index for index with [`leaf_paths`](Self::leaf_paths); the
    /// root has no key, so an empty tree yields `[None]`.
    pub fn leaf_keys(&self, start: Option<NodeId>) -> Vec<Option<&str>> {
        self.leaves(start)
            .into_iter()
            .filter_map(|id| self.get(id).map(BucketNode::key))
            .collect()
    }

    /// Resolve an object key (no bucket name) to its node
    ///
    /// Every segment of the key must match; a partially matching key does
    /// not resolve to the deepest match.
    pub fn node_from_key(&self, key: &str) -> Option<NodeId> {
        self.resolve(&split_key(key))
    }

    /// Resolve a path (bucket name first) to its node
    ///
    /// The leading bucket segment is dropped without being compared.
    pub fn node_from_path(&self, path: &str) -> Option<NodeId> {
        let segments = split_key(path);
        self.resolve(segments.get(1..)?)
    }

    /// Like [`node_from_key`](Self::node_from_key), failing with
    /// [`TreeError::NotFound`]
    pub fn require_key(&self, key: &str) -> Result<NodeId> {
        self.node_from_key(key).ok_or_else(|| TreeError::NotFound {
            key: key.to_string(),
        })
    }

    /// Like [`node_from_path`](Self::node_from_path), failing with
    /// [`TreeError::NotFound`]
    pub fn require_path(&self, path: &str) -> Result<NodeId> {
        self.node_from_path(path).ok_or_else(|| TreeError::NotFound {
            key: path.to_string(),
        })
    }

    fn resolve(&self, segments: &[&str]) -> Option<NodeId> {
        if segments.is_empty() {
            return None;
        }
        segments
            .iter()
            .try_fold(NodeId::ROOT, |current, segment| self.child_named(current, segment))
    }

    /// Lowest node covering every node in `nodes`
    ///
    /// A single node is its own common parent. Returns `None` for an empty
    /// slice or if any ID does not belong to this tree.
    pub fn common_parent(&self, nodes: &[NodeId]) -> Option<NodeId> {
        if nodes.iter().any(|&id| self.get(id).is_none()) {
            return None;
        }

        let (&first, rest) = nodes.split_first()?;
        rest.iter()
            .try_fold(first, |found, &next| self.lowest_common(found, next))
    }

    /// Lowest node covering both `a` and `b`
    ///
    /// Lifts the deeper node to the other's depth, then both together until
    /// they meet. A node that is an ancestor of the other is the answer.
    fn lowest_common(&self, mut a: NodeId, mut b: NodeId) -> Option<NodeId> {
        while self.depth(a) > self.depth(b) {
            a = self.parent(a)?;
        }
        while self.depth(b) > self.depth(a) {
            b = self.parent(b)?;
        }
        while a != b {
            a = self.parent(a)?;
            b = self.parent(b)?;
        }
        Some(a)
    }

    /// Multi-line diagram of the tree, as produced by `Display`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn validate_bucket_name(bucket_name: &str) -> Result<()> {
    if bucket_name.is_empty() {
        return Err(TreeError::InvalidArgument(
            "bucket name should not be empty".to_string(),
        ));
    }
    if bucket_name.contains(DELIMITER) {
        return Err(TreeError::InvalidArgument(format!(
            "bucket name '{bucket_name}' should not contain '{DELIMITER}'"
        )));
    }
    Ok(())
}

impl Tree for BucketTree {
    fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn get(&self, id: NodeId) -> Option<&BucketNode> {
        self.nodes.get(id.get())
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl fmt::Display for BucketTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}/ ", self.bucket_name)?;
        for node in self
            .walk(TraversalOrder::PreOrder)
            .skip(1)
            .filter_map(|id| self.get(id))
        {
            let indent = 3 * (node.depth() - 1);
            writeln!(f, "{:indent$}└─ {} ", "", node.segment, indent = indent)?;
        }
        Ok(())
    }
}
