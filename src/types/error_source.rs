//! The closed set of errors a trail can absorb.

use core::fmt::Display;

use crate::types::alloc_type::{Cow, String, ToString};
use crate::types::TrailError;

/// An error about to be merged into a [`TrailError`].
///
/// Absorption dispatches on the variant: a chained source contributes its
/// whole history, a foreign one only its flat message.
///
/// # Examples
///
/// ```
/// use error_trail::{ErrorSource, TrailError};
///
/// let chained = TrailError::at(1, "a.rs", "f");
/// assert!(ErrorSource::from(&chained).is_chained());
///
/// let foreign = ErrorSource::from("disk full");
/// assert_eq!(foreign.message(), "disk full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorSource<'a> {
    /// Another trail; its buffer is copied verbatim.
    Chained(&'a TrailError),
    /// Any other error, reduced to its message.
    Foreign(Cow<'a, str>),
}

impl<'a> ErrorSource<'a> {
    /// Renders `message` once and wraps it as a foreign source.
    #[inline]
    pub fn foreign<D: Display + ?Sized>(message: &D) -> Self {
        Self::Foreign(Cow::Owned(message.to_string()))
    }

    /// Resolves a type-erased error.
    ///
    /// This is the one capability check for call sites that only hold a
    /// generic error: a [`TrailError`] behind the trait object stays chained,
    /// anything else collapses to its `Display` output.
    ///
    /// ```
    /// use core::error::Error;
    /// use error_trail::{ErrorSource, TrailError};
    ///
    /// let boxed: Box<dyn Error> = Box::new(TrailError::at(3, "io.rs", "read"));
    /// assert!(ErrorSource::from_dyn(boxed.as_ref()).is_chained());
    /// ```
    pub fn from_dyn(error: &'a (dyn core::error::Error + 'static)) -> Self {
        match error.downcast_ref::<TrailError>() {
            Some(trail) => Self::Chained(trail),
            None => Self::foreign(error),
        }
    }

    #[inline]
    pub fn is_chained(&self) -> bool {
        matches!(self, Self::Chained(_))
    }

    /// Text the source would contribute: the full buffer of a chained
    /// source, the message of a foreign one.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::Chained(trail) => trail.message(),
            Self::Foreign(message) => message,
        }
    }
}

impl<'a> From<&'a TrailError> for ErrorSource<'a> {
    #[inline]
    fn from(trail: &'a TrailError) -> Self {
        Self::Chained(trail)
    }
}

impl<'a> From<&'a str> for ErrorSource<'a> {
    #[inline]
    fn from(message: &'a str) -> Self {
        Self::Foreign(Cow::Borrowed(message))
    }
}

impl<'a> From<&'a String> for ErrorSource<'a> {
    #[inline]
    fn from(message: &'a String) -> Self {
        Self::Foreign(Cow::Borrowed(message.as_str()))
    }
}

impl From<String> for ErrorSource<'_> {
    #[inline]
    fn from(message: String) -> Self {
        Self::Foreign(Cow::Owned(message))
    }
}
