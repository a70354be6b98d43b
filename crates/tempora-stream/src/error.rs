//! Error types for tempora-stream operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// A terminal operation was invoked on a pipeline that has already been
    /// driven once. A stream may be traversed only once, whether or not the
    /// first traversal ran to completion.
    #[error("Stream has already been consumed")]
    AlreadyConsumed,
}

pub type Result<T> = std::result::Result<T, StreamError>;
