//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`here!`], [`trail!`], [`trail_from!`], [`bail_trail!`], [`rethrow_trail!`]
//! - **Types**: [`TrailError`], [`Location`], [`ErrorSource`], [`TrailResult`]
//! - **Traits**: [`TrailResultExt`], [`AsErrorSource`]
//! - With `async`: [`FutureTrailExt`](crate::async_ext::FutureTrailExt)
//! - With `tracing`: [`ResultSpanExt`](crate::tracing_ext::ResultSpanExt),
//!   [`LogTrailExt`](crate::tracing_ext::LogTrailExt)
//!
//! # Examples
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn read_port(raw: &str) -> TrailResult<u16> {
//!     raw.parse::<u16>().trail(here!())
//! }
//!
//! fn connect(raw: &str) -> TrailResult<()> {
//!     let port = read_port(raw).trail_with(here!(), || "while connecting")?;
//!     if port == 0 {
//!         bail_trail!("port 0 is reserved");
//!     }
//!     Ok(())
//! }
//!
//! let err = connect("eighty").unwrap_err();
//! assert_eq!(err.frame_count(), 3);
//! ```

// Macros
pub use crate::{bail_trail, here, rethrow_trail, trail, trail_append, trail_append_from, trail_from};

// Core types
pub use crate::types::{ErrorSource, Location, TrailError, TrailResult};

// Traits
pub use crate::traits::{AsErrorSource, TrailResultExt};

#[cfg(feature = "async")]
pub use crate::async_ext::FutureTrailExt;

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::{LogTrailExt, ResultSpanExt};
