//! Core traits for trail propagation.
//!
//! - [`AsErrorSource`]: Views a value as something a trail can absorb
//! - [`TrailResultExt`]: Tags the error path of a `Result` with a call site
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::{AsErrorSource, TrailResultExt};
//! use error_trail::{here, TrailError};
//!
//! assert!(!"timeout".as_error_source().is_chained());
//!
//! let result: Result<(), &str> = Err("timeout");
//! let err: TrailError = result.trail(here!()).unwrap_err();
//! assert_eq!(err.frame_count(), 2);
//! ```

pub mod as_error_source;
pub mod result_ext;

pub use as_error_source::AsErrorSource;
pub use result_ext::TrailResultExt;
