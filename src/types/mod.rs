//! Error types and utilities.
//!
//! This module provides the trail error itself together with the values it
//! is built from.
//!
//! # Examples
//!
//! ```
//! use error_trail::{here, ErrorSource, TrailError};
//!
//! let mut err = TrailError::new(here!());
//! err.append("connection refused");
//! err.append_from(&ErrorSource::from("pool exhausted"), here!());
//!
//! assert_eq!(err.frame_count(), 3);
//! println!("{}", err);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error_source;
pub mod location;
pub mod trail_error;

pub use error_source::*;
pub use location::*;
pub use trail_error::*;

/// SmallVec-backed list of frame start offsets.
///
/// Uses inline storage for up to 4 frames before spilling onto the heap,
/// which covers most propagation paths.
pub type FrameVec = SmallVec<[usize; 4]>;

/// Result alias that fails with a [`TrailError`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type TrailResult<T> = Result<T, TrailError>;
