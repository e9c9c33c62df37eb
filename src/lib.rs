//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_trail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Originating a Trail
//!
//! ```
//! use error_trail::TrailError;
//!
//! let err = TrailError::at(42, "calc.src", "Divide") << "Error: I can't take the inverse of 0!";
//!
//! if error_trail::config::SOURCE_LOCATION {
//!     assert_eq!(
//!         err.message(),
//!         "\n( calc.src:42 , in Divide() )    ->  Error: I can't take the inverse of 0!"
//!     );
//! } else {
//!     assert_eq!(err.message(), "\nError: I can't take the inverse of 0!");
//! }
//! ```
//!
//! ## Propagating Through Frames
//!
//! ```
//! use error_trail::{bail_trail, rethrow_trail, TrailError};
//!
//! fn inverse(i: i32) -> Result<f64, TrailError> {
//!     if i == 0 {
//!         bail_trail!("Error: I can't take the inverse of 0!");
//!     }
//!     Ok(1.0 / f64::from(i))
//! }
//!
//! fn multiply_inverse(a: i32, b: i32) -> Result<f64, TrailError> {
//!     match (inverse(a), inverse(b)) {
//!         (Ok(x), Ok(y)) => Ok(x * y),
//!         (Err(err), _) | (_, Err(err)) => {
//!             rethrow_trail!(err, "Called from multiply_inverse: a = {} b = {}", a, b)
//!         },
//!     }
//! }
//!
//! let err = multiply_inverse(2, 0).unwrap_err();
//! assert_eq!(err.frame_count(), 2);
//! assert!(err.to_string().ends_with("a = 2 b = 0"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Build-time formatting switches
pub mod config;
/// Call-site capture and trail construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion and extension traits
pub mod traits;
/// TrailError, Location and ErrorSource
pub mod types;

/// Async extensions for trail propagation (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::*;
pub use types::{ErrorSource, Frames, Location, TrailError, TrailResult};
