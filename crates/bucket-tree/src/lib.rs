//! Bucket Tree
//!
//! Turns the flat key listing of an object-storage bucket into a tree, so a
//! bucket can be navigated like a filesystem even though the store only
//! knows slash-delimited key names.
//!
//! # Core Concepts
//!
//! - **Segment**: one component of a key; `year=2018/` is a directory,
//!   `test.txt` a file
//! - **Path**: a key prefixed with the bucket name, e.g. `my-bucket/source/`
//! - **BucketTree**: immutable tree rooted at the bucket name
//!
//! # Example
//!
//! ```
//! use bucket_tree::prelude::*;
//!
//! let keys = [
//!     "source/year=2018/month=08/day=28/test1.txt",
//!     "source/year=2018/month=08/day=28/test.txt",
//! ];
//! let tree = BucketTree::new("test-bucket", keys)?;
//!
//! let leaves = tree.leaves(None);
//! let day = tree.common_parent(&leaves).unwrap();
//! assert_eq!(tree.get(day).unwrap().path(), "test-bucket/source/year=2018/month=08/day=28/");
//! # Ok::<(), bucket_tree::TreeError>(())
//! ```

pub mod error;
pub mod listing;
pub mod segment;
pub mod tree;

pub use error::{Result, TreeError};
pub use tree::{BucketNode, BucketTree, NodeId, NodeKind};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::TreeError;
    pub use crate::tree::prelude::*;
}
