//! # tempora-stream
//!
//! Lazy, single-consumption sequence pipelines.
//!
//! A pipeline is built from an ordered source and a chain of intermediate
//! operations (filter, map, limit, skip, distinct), none of which pulls an
//! element. Evaluation happens once, when a terminal operation drives the
//! chain pull-based and in source order, short-circuiting as soon as a
//! limit is satisfied. After that the pipeline is consumed: any further
//! terminal operation fails with [`StreamError::AlreadyConsumed`].
//!
//! ## Modules
//!
//! - [`stream`] — [`Stream`]: the pipeline builder and its operations
//! - [`error`] — error types
//!
//! ## Example
//!
//! ```
//! use tempora_stream::Stream;
//!
//! let mut names = Stream::of(vec![("pork", 800), ("beef", 700), ("rice", 350)])
//!     .filter(|&(_, calories)| calories > 300)
//!     .map(|(name, _)| name)
//!     .limit(2);
//! assert_eq!(names.collect_to_list()?, vec!["pork", "beef"]);
//! # Ok::<(), tempora_stream::StreamError>(())
//! ```

pub mod error;
pub mod stream;

mod distinct;

pub use error::{Result, StreamError};
pub use stream::Stream;
