//! Navigation traits shared by tree implementations

use crate::tree::{BucketNode, NodeId};
use std::collections::VecDeque;

/// Read-only navigation over an arena-backed tree
///
/// Implementors provide `root`, `get` and `node_count`; everything else is
/// derived from them.
pub trait Tree {
    /// Get the root node ID (always exists)
    fn root(&self) -> NodeId;

    /// Get a node by its ID
    ///
    /// Returns `None` if the ID does not belong to this tree.
    fn get(&self, id: NodeId) -> Option<&BucketNode>;

    /// Get the parent of a node; `None` for the root
    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent()
    }

    /// Children of a node in insertion order
    ///
    /// Empty for leaves and invalid IDs.
    fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(BucketNode::children).unwrap_or(&[])
    }

    /// Count total nodes in the tree
    fn node_count(&self) -> usize;

    fn segment(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.segment.as_str())
    }

    /// True if the node's segment ends with the delimiter
    ///
    /// Returns false for invalid IDs.
    fn is_directory(&self, id: NodeId) -> bool {
        self.get(id).map(BucketNode::is_directory).unwrap_or(false)
    }

    /// True if the node exists and has no children
    fn is_leaf(&self, id: NodeId) -> bool {
        self.get(id).map(BucketNode::is_leaf).unwrap_or(false)
    }

    fn child_count(&self, id: NodeId) -> usize {
        self.children(id).len()
    }

    /// Depth of a node (root = 0); 0 for invalid IDs
    fn depth(&self, id: NodeId) -> usize {
        self.get(id).map(BucketNode::depth).unwrap_or(0)
    }

    /// All ancestors of a node, from parent to root
    fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent_id) = current {
            ancestors.push(parent_id);
            current = self.parent(parent_id);
        }
        ancestors
    }

    /// Check if `ancestor` lies strictly above `descendant`
    fn is_ancestor_of(&self, ancestor: NodeId, descendant: NodeId) -> bool {
        self.ancestors(descendant).contains(&ancestor)
    }
}

/// Order in which [`TreeTraversal::walk`] visits nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Parent before children, children in insertion order
    PreOrder,
    /// Level by level
    BreadthFirst,
}

/// Traversal helpers, implemented for every [`Tree`]
pub trait TreeTraversal: Tree {
    fn walk(&self, order: TraversalOrder) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        TreeWalker::new(self, self.root(), order)
    }

    fn walk_from(&self, start: NodeId, order: TraversalOrder) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        TreeWalker::new(self, start, order)
    }

    /// Nodes without children below `start`, depth-first
    ///
    /// A childless `start` is its own only leaf.
    fn leaves_from(&self, start: NodeId) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.walk_from(start, TraversalOrder::PreOrder)
            .filter(|&id| self.is_leaf(id))
            .collect()
    }

    /// Nodes whose segment ends with the delimiter, excluding the root
    fn directories(&self) -> Vec<NodeId>
    where
        Self: Sized,
    {
        let root = self.root();
        self.walk(TraversalOrder::PreOrder)
            .filter(|&id| id != root && self.is_directory(id))
            .collect()
    }

    /// Nodes that name files
    fn files(&self) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .filter(|&id| self.get(id).is_some_and(|n| n.kind.is_file()))
            .collect()
    }
}

impl<T: Tree> TreeTraversal for T {}

/// Iterator over node IDs in a chosen [`TraversalOrder`]
pub struct TreeWalker<'a, T: Tree + ?Sized> {
    tree: &'a T,
    order: TraversalOrder,
    pending: VecDeque<NodeId>,
}

impl<'a, T: Tree + ?Sized> TreeWalker<'a, T> {
    pub fn new(tree: &'a T, start: NodeId, order: TraversalOrder) -> Self {
        let mut pending = VecDeque::new();
        if tree.get(start).is_some() {
            pending.push_back(start);
        }
        Self {
            tree,
            order,
            pending,
        }
    }
}

impl<'a, T: Tree + ?Sized> Iterator for TreeWalker<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            TraversalOrder::PreOrder => {
                let current = self.pending.pop_back()?;
                // Reverse so the first child is popped next
                for &child in self.tree.children(current).iter().rev() {
                    self.pending.push_back(child);
                }
                Some(current)
            }
            TraversalOrder::BreadthFirst => {
                let current = self.pending.pop_front()?;
                self.pending.extend(self.tree.children(current).iter().copied());
                Some(current)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BucketTree;

    fn sample() -> BucketTree {
        BucketTree::new("b", ["d1/f2.txt", "f1.txt", "d1/d2/f3.txt"]).unwrap()
    }

    fn segments(tree: &BucketTree, ids: impl IntoIterator<Item = NodeId>) -> Vec<&str> {
        ids.into_iter()
            .map(|id| tree.segment(id).unwrap())
            .collect()
    }

    #[test]
    fn test_walk_preorder() {
        let tree = sample();
        let order = segments(&tree, tree.walk(TraversalOrder::PreOrder));
        assert_eq!(order, vec!["b", "d1/", "f2.txt", "d2/", "f3.txt", "f1.txt"]);
    }

    #[test]
    fn test_walk_breadth_first() {
        let tree = sample();
        let order = segments(&tree, tree.walk(TraversalOrder::BreadthFirst));
        assert_eq!(order, vec!["b", "d1/", "f1.txt", "f2.txt", "d2/", "f3.txt"]);
    }

    #[test]
    fn test_walk_from_invalid_id_is_empty() {
        let tree = sample();
        assert_eq!(tree.walk_from(NodeId(999), TraversalOrder::PreOrder).count(), 0);
    }

    #[test]
    fn test_depth_and_ancestors() {
        let tree = sample();
        let f3 = tree.node_from_key("d1/d2/f3.txt").unwrap();
        let d1 = tree.node_from_key("d1/").unwrap();

        assert_eq!(tree.depth(tree.root()), 0);
        assert_eq!(tree.depth(f3), 3);
        assert_eq!(segments(&tree, tree.ancestors(f3)), vec!["d2/", "d1/", "b"]);
        assert!(tree.is_ancestor_of(d1, f3));
        assert!(!tree.is_ancestor_of(f3, d1));
        assert!(!tree.is_ancestor_of(f3, f3));
    }

    #[test]
    fn test_directories_and_files() {
        let tree = sample();
        assert_eq!(segments(&tree, tree.directories()), vec!["d1/", "d2/"]);
        assert_eq!(
            segments(&tree, tree.files()),
            vec!["f2.txt", "f3.txt", "f1.txt"]
        );
        assert_eq!(tree.child_count(tree.root()), 2);
    }

    /// A tree made of the bucket root alone
    struct RootOnly(BucketNode);

    impl Tree for RootOnly {
        fn root(&self) -> NodeId {
            NodeId::ROOT
        }

        fn get(&self, id: NodeId) -> Option<&BucketNode> {
            (id == NodeId::ROOT).then_some(&self.0)
        }

        fn node_count(&self) -> usize {
            1
        }
    }

    #[test]
    fn test_three_required_methods_are_enough() {
        let tree = RootOnly(BucketNode::root("b"));
        let root = tree.root();

        assert_eq!(tree.parent(root), None);
        assert!(tree.children(root).is_empty());
        assert!(tree.is_leaf(root));
        assert!(tree.is_directory(root));
        assert_eq!(tree.depth(root), 0);
        assert_eq!(tree.segment(root), Some("b"));
        assert_eq!(tree.leaves_from(root), vec![root]);
        assert!(tree.directories().is_empty());
        assert!(!tree.is_leaf(NodeId(1)));
    }
}
