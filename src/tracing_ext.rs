//! Tracing integration for error-trail.
//!
//! Annotates trails with the active span and reports finished trails as
//! structured `tracing` events.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::traits::{AsErrorSource, TrailResultExt};
use crate::types::{Location, TrailError};

/// Target used by every event this module emits.
pub const TRACING_TARGET: &str = "error_trail";

impl TrailError {
    /// Annotates the current frame with the name of `span`.
    ///
    /// Disabled spans carry no metadata and are reported as `unknown`.
    ///
    /// ```
    /// use error_trail::here;
    /// use error_trail::TrailError;
    ///
    /// let mut err = TrailError::new(here!());
    /// err.append_span(&tracing::Span::current());
    /// assert!(err.to_string().contains("in span '"));
    /// ```
    pub fn append_span(&mut self, span: &Span) -> &mut Self {
        let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
        self.append(format_args!("in span '{}'", name))
    }

    /// Emits the trail as an `ERROR` event.
    pub fn log(&self) {
        tracing::error!(
            target: TRACING_TARGET,
            frames = self.frame_count(),
            backtrace = %self,
            "error trail"
        );
    }
}

/// Extension trait for `Result` types that brings span context and logging
/// into trail propagation.
pub trait ResultSpanExt<T> {
    /// Tags `location`, then annotates the frame with the current span.
    fn trail_in_current_span(self, location: Location<'_>) -> Result<T, TrailError>;

    /// Tags `location`, then annotates the frame with `span`.
    fn trail_in_span(self, location: Location<'_>, span: &Span) -> Result<T, TrailError>;
}

impl<T, E: AsErrorSource> ResultSpanExt<T> for Result<T, E> {
    fn trail_in_current_span(self, location: Location<'_>) -> Result<T, TrailError> {
        self.trail_in_span(location, &Span::current())
    }

    fn trail_in_span(self, location: Location<'_>, span: &Span) -> Result<T, TrailError> {
        self.trail(location).map_err(|mut err| {
            err.append_span(span);
            err
        })
    }
}

/// Extension trait that reports a failing trail before passing it on.
pub trait LogTrailExt {
    /// Logs the error, if any, with [`TrailError::log`].
    fn log_trail(self) -> Self;
}

impl<T> LogTrailExt for Result<T, TrailError> {
    #[inline]
    fn log_trail(self) -> Self {
        if let Err(err) = &self {
            err.log();
        }
        self
    }
}
