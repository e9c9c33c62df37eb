//! Extension trait for tagging the error path of a `Result`.
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::TrailResultExt;
//! use error_trail::{here, TrailResult};
//!
//! fn parse_port(raw: &str) -> TrailResult<u16> {
//!     raw.parse::<u16>()
//!         .trail_with(here!(), || format!("parsing port {:?}", raw))
//! }
//!
//! let err = parse_port("http").unwrap_err();
//! assert!(err.to_string().ends_with("parsing port \"http\""));
//! ```

use core::fmt::Display;

use crate::traits::AsErrorSource;
use crate::types::{Location, TrailError};

/// Extension trait that converts a failing `Result` into a [`TrailError`].
///
/// The error is absorbed with [`TrailError::from_source`], so an existing
/// trail keeps its history and a foreign error contributes its message.
pub trait TrailResultExt<T> {
    /// Tags the error with `location`.
    ///
    /// ```
    /// use error_trail::traits::TrailResultExt;
    /// use error_trail::here;
    ///
    /// let result: Result<(), &str> = Err("denied");
    /// assert!(result.trail(here!()).unwrap_err().to_string().contains("denied"));
    /// ```
    fn trail(self, location: Location<'_>) -> Result<T, TrailError>;

    /// Tags the error with `location`, then annotates the new frame.
    ///
    /// The closure only runs on the error path.
    fn trail_with<F, D>(self, location: Location<'_>, f: F) -> Result<T, TrailError>
    where
        F: FnOnce() -> D,
        D: Display;
}

impl<T, E: AsErrorSource> TrailResultExt<T> for Result<T, E> {
    #[inline]
    fn trail(self, location: Location<'_>) -> Result<T, TrailError> {
        self.map_err(|err| TrailError::from_source(&err, location))
    }

    #[inline]
    fn trail_with<F, D>(self, location: Location<'_>, f: F) -> Result<T, TrailError>
    where
        F: FnOnce() -> D,
        D: Display,
    {
        self.map_err(|err| TrailError::from_source(&err, location) << f())
    }
}
