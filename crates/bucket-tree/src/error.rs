use thiserror::Error;

/// Errors raised while building or querying a [`BucketTree`](crate::BucketTree)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The bucket name or an element of the object listing was rejected
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A key or path did not resolve to a node
    #[error("no node for '{key}'")]
    NotFound { key: String },
}

pub type Result<T> = std::result::Result<T, TreeError>;
