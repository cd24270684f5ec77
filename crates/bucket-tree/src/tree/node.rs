//! Node types for the bucket tree

use derive_more::Display;
use std::collections::HashMap;
use std::fmt;

/// Delimiter that terminates a directory segment
pub const DELIMITER: char = '/';

/// Identifier for a node within a [`BucketTree`](crate::BucketTree)
///
/// Nodes are stored in an arena owned by the tree; the id is the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The bucket root always has ID 0
    pub const ROOT: NodeId = NodeId(0);

    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        NodeId(id)
    }
}

/// Whether a segment names a directory or a file
///
/// Object stores have no real directories; a segment ending in `/` is
/// treated as one by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NodeKind {
    #[display(fmt = "Directory")]
    Directory,
    #[display(fmt = "File")]
    File,
}

impl NodeKind {
    /// Classify a raw segment by its trailing delimiter
    pub fn of_segment(segment: &str) -> Self {
        if segment.ends_with(DELIMITER) {
            NodeKind::Directory
        } else {
            NodeKind::File
        }
    }

    pub const fn is_directory(self) -> bool {
        matches!(self, NodeKind::Directory)
    }

    pub const fn is_file(self) -> bool {
        matches!(self, NodeKind::File)
    }
}

/// Join two path fragments, inserting a delimiter only when `base` lacks one
pub(crate) fn join(base: &str, segment: &str) -> String {
    let mut joined = String::with_capacity(base.len() + segment.len() + 1);
    joined.push_str(base);
    if !base.is_empty() && !base.ends_with(DELIMITER) {
        joined.push(DELIMITER);
    }
    joined.push_str(segment);
    joined
}

/// One position in the bucket tree
///
/// `path` and `key` are derived from the parent chain when the node is
/// created and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketNode {
    /// Raw segment, e.g. `year=2018/` or `test.txt`; the bucket name for root
    pub segment: String,
    pub kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// segment -> child, alongside `children` which keeps insertion order
    child_index: HashMap<String, NodeId>,
    path: String,
    key: Option<String>,
    depth: usize,
}

impl BucketNode {
    /// Create the synthetic root node for a bucket
    pub(crate) fn root(bucket_name: &str) -> Self {
        Self {
            segment: bucket_name.to_string(),
            kind: NodeKind::Directory,
            parent: None,
            children: Vec::new(),
            child_index: HashMap::new(),
            path: bucket_name.to_string(),
            key: None,
            depth: 0,
        }
    }

    /// Create a node for `segment` below `parent`
    pub(crate) fn child(segment: &str, parent_id: NodeId, parent: &BucketNode) -> Self {
        let key = match parent.key.as_deref() {
            Some(parent_key) => join(parent_key, segment),
            None => segment.to_string(),
        };

        Self {
            segment: segment.to_string(),
            kind: NodeKind::of_segment(segment),
            parent: Some(parent_id),
            children: Vec::new(),
            child_index: HashMap::new(),
            path: join(&parent.path, segment),
            key: Some(key),
            depth: parent.depth + 1,
        }
    }

    /// Register `id` as the child for `segment`
    pub(crate) fn add_child(&mut self, segment: &str, id: NodeId) {
        self.children.push(id);
        self.child_index.insert(segment.to_string(), id);
    }

    /// The child whose segment is exactly `segment`
    pub fn find_child(&self, segment: &str) -> Option<NodeId> {
        self.child_index.get(segment).copied()
    }

    /// Full path including the bucket name
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Object-store key, i.e. the path without the bucket name
    ///
    /// Returns `None` for the root.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in the order they were first inserted
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Distance from the root (root = 0)
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }

    /// True if the node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Display for BucketNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        assert_eq!(NodeId::ROOT, NodeId(0));
        assert_eq!(NodeId::new(5).get(), 5);
        assert_eq!(NodeId::from(10), NodeId(10));
        assert_eq!(NodeId(3).to_string(), "NodeId(3)");
    }

    #[test]
    fn test_node_kind() {
        assert_eq!(NodeKind::of_segment("year=2018/"), NodeKind::Directory);
        assert_eq!(NodeKind::of_segment("test.txt"), NodeKind::File);
        assert!(NodeKind::Directory.is_directory());
        assert!(NodeKind::File.is_file());
        assert_eq!(NodeKind::File.to_string(), "File");
    }

    #[test]
    fn test_join() {
        assert_eq!(join("bucket", "source/"), "bucket/source/");
        assert_eq!(join("bucket/source/", "a.txt"), "bucket/source/a.txt");
        assert_eq!(join("", "a.txt"), "a.txt");
    }

    #[test]
    fn test_derived_path_and_key() {
        let root = BucketNode::root("test-bucket");
        assert_eq!(root.path(), "test-bucket");
        assert_eq!(root.key(), None);
        assert!(root.is_root());

        let source = BucketNode::child("source/", NodeId::ROOT, &root);
        assert_eq!(source.path(), "test-bucket/source/");
        assert_eq!(source.key(), Some("source/"));
        assert_eq!(source.depth(), 1);
        assert!(source.is_directory());

        let file = BucketNode::child("test.txt", NodeId(1), &source);
        assert_eq!(file.path(), "test-bucket/source/test.txt");
        assert_eq!(file.key(), Some("source/test.txt"));
        assert_eq!(file.depth(), 2);
        assert!(!file.is_directory());
        assert_eq!(file.to_string(), "test-bucket/source/test.txt");
    }

    #[test]
    fn test_add_child_keeps_order_and_index() {
        let mut root = BucketNode::root("b");
        root.add_child("z/", NodeId(1));
        root.add_child("a.txt", NodeId(2));

        assert_eq!(root.children(), &[NodeId(1), NodeId(2)]);
        assert_eq!(root.find_child("a.txt"), Some(NodeId(2)));
        assert_eq!(root.find_child("z/"), Some(NodeId(1)));
        assert_eq!(root.find_child("z"), None);
        assert!(!root.is_leaf());
    }
}
