//! Tree model for bucket listings
//!
//! Nodes are kept in an arena owned by the tree and addressed by [`NodeId`].
//! Parents are referenced by ID, so the tree owns every node exactly once.

mod bucket;
mod node;
mod traits;

pub use bucket::BucketTree;
pub use node::{BucketNode, NodeId, NodeKind, DELIMITER};
pub use traits::{TraversalOrder, Tree, TreeTraversal, TreeWalker};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{BucketNode, BucketTree, NodeId, NodeKind, TraversalOrder, Tree, TreeTraversal};
}
