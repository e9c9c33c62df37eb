//! Error type that accumulates a backtrace-like trail as it propagates.
//!
//! This module provides [`TrailError`], a single growable text buffer that:
//! - Opens a new frame each time the error passes through a call site
//! - Absorbs other errors, keeping the full history of chained ones
//! - Collects free-form annotations onto the most recent frame

use core::fmt::{self, Display, Write};

use crate::traits::AsErrorSource;
use crate::types::alloc_type::String;
use crate::types::{ErrorSource, FrameVec, Location};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod frames;
mod traits;

pub use frames::Frames;

/// Error that records every frame it passed through as one formatted string.
///
/// The description is append-only. Each frame begins with a newline; when
/// the `source-location` feature is enabled the newline is followed by a
/// `( file:line , in function() )    ->  ` tag, and any text appended
/// afterwards lands after that tag.
///
/// # Examples
///
/// ```
/// use error_trail::{TrailError, Location};
///
/// let mut err = TrailError::at(42, "calc.src", "Divide") << "inverse of 0";
/// err.append_from(&err.clone(), Location::new(50, "calc.src", "MultiplyInverse"));
///
/// assert_eq!(err.frame_count(), 3);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawTrail"))]
#[derive(Debug, Clone)]
pub struct TrailError {
    pub(crate) description: String,
    pub(crate) frames: FrameVec,
}

/// Unchecked wire form of a [`TrailError`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawTrail {
    description: String,
    frames: FrameVec,
}

#[cfg(feature = "serde")]
impl From<RawTrail> for TrailError {
    fn from(raw: RawTrail) -> Self {
        let frames = valid_frames(&raw.description, &raw.frames);
        Self { description: raw.description, frames }
    }
}

/// Keeps the offsets that open a frame: strictly increasing, inside the
/// buffer and pointing at a frame newline.
#[cfg(feature = "serde")]
fn valid_frames(description: &str, starts: &[usize]) -> FrameVec {
    let mut frames = FrameVec::new();
    for &start in starts {
        let ordered = frames.last().map_or(true, |&prev| start > prev);
        let opens_frame =
            description.as_bytes().get(start) == Some(&(crate::config::FRAME_START as u8));
        if ordered && opens_frame {
            frames.push(start);
        }
    }
    frames
}

impl TrailError {
    /// Originates a trail at `location`.
    #[inline]
    pub fn new(location: Location<'_>) -> Self {
        let mut trail = Self::empty();
        trail.append_location(location);
        trail
    }

    /// Originates a trail from a bare line/file/function triple.
    #[inline]
    pub fn at(line: u32, file: &str, function: &str) -> Self {
        Self::new(Location::new(line, file, function))
    }

    /// Builds a trail from an existing error that passed through `location`.
    ///
    /// See [`append_from`](Self::append_from) for how the source is merged.
    pub fn from_source<S>(source: &S, location: Location<'_>) -> Self
    where
        S: AsErrorSource + ?Sized,
    {
        let mut trail = Self::empty();
        trail.append_from(source, location);
        trail
    }

    #[inline]
    fn empty() -> Self {
        Self { description: String::new(), frames: FrameVec::new() }
    }

    /// Opens a new frame at `location`.
    ///
    /// Writes a newline, followed by the location tag when
    /// [`SOURCE_LOCATION`](crate::config::SOURCE_LOCATION) is set.
    pub fn append_location(&mut self, location: Location<'_>) -> &mut Self {
        self.frames.push(self.description.len());
        // Writing into a String cannot fail.
        let _ = location.write_marker(&mut self.description);
        self
    }

    /// Merges `source` into this trail, then tags `location`.
    ///
    /// A chained source is copied verbatim. A foreign source gets a frame of
    /// its own at `location` holding its message. Either way a fresh frame
    /// for `location` follows, so absorbing a foreign error leaves two
    /// consecutive markers for the same call site.
    pub fn append_from<S>(&mut self, source: &S, location: Location<'_>) -> &mut Self
    where
        S: AsErrorSource + ?Sized,
    {
        match source.as_error_source() {
            ErrorSource::Chained(other) => {
                let base = self.description.len();
                self.description.push_str(&other.description);
                self.frames
                    .extend(other.frames.iter().filter_map(|start| start.checked_add(base)));
            },
            ErrorSource::Foreign(message) => {
                self.append_location(location);
                self.description.push_str(&message);
            },
        }
        self.append_location(location)
    }

    /// Appends the `Display` output of `value` to the current frame.
    ///
    /// No separator is inserted.
    #[inline]
    pub fn append<T: Display>(&mut self, value: T) -> &mut Self {
        let _ = write!(self, "{}", value);
        self
    }

    /// Returns the accumulated trail.
    #[inline]
    pub fn message(&self) -> &str {
        &self.description
    }

    /// Consumes the error, returning the accumulated trail.
    #[inline]
    pub fn into_message(self) -> String {
        self.description
    }

    /// Writes the trail verbatim to `sink`.
    #[inline]
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_str(&self.description)
    }

    /// Writes the trail verbatim to a byte sink.
    #[cfg(feature = "std")]
    #[inline]
    pub fn write_io<W: std::io::Write + ?Sized>(&self, sink: &mut W) -> std::io::Result<()> {
        sink.write_all(self.description.as_bytes())
    }

    /// Returns an iterator over the frame annotations, oldest first.
    #[inline]
    pub fn frames(&self) -> Frames<'_> {
        Frames::new(&self.description, &self.frames)
    }

    /// Number of frames recorded so far.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// The most recently opened frame, including its annotations.
    pub fn last_frame(&self) -> Option<&str> {
        let start = *self.frames.last()?;
        self.description.get(start..)
    }

    /// Length of the trail in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.description.len()
    }

    /// Only ever true for a deserialized empty trail.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.description.is_empty()
    }
}
