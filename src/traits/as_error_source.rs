//! Trait for viewing values as absorbable error sources.
//!
//! # Implementations
//!
//! The trait is implemented for:
//! - [`TrailError`] - Chained, keeps the full history
//! - `str`, `String` - Foreign messages
//! - `dyn Error` (optionally `+ Send + Sync`) - Resolved with [`ErrorSource::from_dyn`]
//! - Common standard library errors - Foreign, via their `Display` output
//! - `&T` and `Box<T>` for any implementor
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::AsErrorSource;
//! use error_trail::TrailError;
//!
//! let parse = "x".parse::<i32>().unwrap_err();
//! assert_eq!(parse.as_error_source().message(), "invalid digit found in string");
//!
//! let trail = TrailError::at(7, "main.rs", "main");
//! assert!(trail.as_error_source().is_chained());
//! ```
use core::error::Error;

use crate::types::alloc_type::{Box, Cow, String};
use crate::types::{ErrorSource, TrailError};

/// Views `self` as an [`ErrorSource`] for absorption into a trail.
///
/// # Implementing for Custom Types
///
/// 1. Use [`impl_foreign_error!`](crate::impl_foreign_error) for types implementing `Display`:
///    ```ignore
///    impl_foreign_error!(MyCustomError);
///    ```
///
/// 2. Implement the trait manually:
///    ```
///    use error_trail::{traits::AsErrorSource, ErrorSource};
///
///    struct Timeout { secs: u64 }
///
///    impl AsErrorSource for Timeout {
///        fn as_error_source(&self) -> ErrorSource<'_> {
///            ErrorSource::from(format!("timed out after {}s", self.secs))
///        }
///    }
///    ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be absorbed into a trail",
    label = "this type does not implement `AsErrorSource`",
    note = "implement `AsErrorSource` manually or use `impl_foreign_error!({Self})` macro"
)]
pub trait AsErrorSource {
    /// Returns the view of `self` used by [`TrailError::append_from`].
    fn as_error_source(&self) -> ErrorSource<'_>;
}

impl AsErrorSource for TrailError {
    #[inline]
    fn as_error_source(&self) -> ErrorSource<'_> {
        ErrorSource::Chained(self)
    }
}

impl AsErrorSource for ErrorSource<'_> {
    /// Reborrows without re-rendering a foreign message.
    #[inline]
    fn as_error_source(&self) -> ErrorSource<'_> {
        match self {
            ErrorSource::Chained(trail) => ErrorSource::Chained(*trail),
            ErrorSource::Foreign(message) => ErrorSource::Foreign(Cow::Borrowed(&**message)),
        }
    }
}

impl AsErrorSource for str {
    #[inline]
    fn as_error_source(&self) -> ErrorSource<'_> {
        ErrorSource::from(self)
    }
}

impl AsErrorSource for String {
    #[inline]
    fn as_error_source(&self) -> ErrorSource<'_> {
        ErrorSource::from(self)
    }
}

impl AsErrorSource for dyn Error + 'static {
    #[inline]
    fn as_error_source(&self) -> ErrorSource<'_> {
        ErrorSource::from_dyn(self)
    }
}

impl AsErrorSource for dyn Error + Send + Sync + 'static {
    #[inline]
    fn as_error_source(&self) -> ErrorSource<'_> {
        ErrorSource::from_dyn(self)
    }
}

impl<T: AsErrorSource + ?Sized> AsErrorSource for &T {
    #[inline]
    fn as_error_source(&self) -> ErrorSource<'_> {
        (**self).as_error_source()
    }
}

impl<T: AsErrorSource + ?Sized> AsErrorSource for Box<T> {
    #[inline]
    fn as_error_source(&self) -> ErrorSource<'_> {
        (**self).as_error_source()
    }
}

crate::impl_foreign_error!(
    core::fmt::Error,
    core::num::ParseIntError,
    core::num::ParseFloatError,
    core::str::ParseBoolError,
    core::str::Utf8Error,
    core::cell::BorrowError,
    core::cell::BorrowMutError,
);

#[cfg(feature = "std")]
crate::impl_foreign_error!(std::io::Error, std::string::FromUtf8Error);
