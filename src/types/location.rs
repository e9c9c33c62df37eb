//! Call-site location triple attached to every frame marker.

use core::fmt::{self, Display, Write};

use crate::config::{FRAME_START, MARKER_SEPARATOR, SOURCE_LOCATION};

/// Source line, file and function of one call site.
///
/// The values are opaque: nothing here validates or derives them. Use
/// [`here!`](crate::here) to capture the current call site.
///
/// # Examples
///
/// ```
/// use error_trail::Location;
///
/// let loc = Location::new(42, "calc.src", "Divide");
/// assert_eq!(loc.to_string(), "( calc.src:42 , in Divide() )    ->  ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location<'a> {
    /// Source line of the call site.
    pub line: u32,
    /// Source file path, typically from `file!()`.
    pub file: &'a str,
    /// Name of the enclosing function.
    pub function: &'a str,
}

impl<'a> Location<'a> {
    /// Creates a location from its three parts.
    #[inline]
    pub const fn new(line: u32, file: &'a str, function: &'a str) -> Self {
        Self { line, file, function }
    }

    /// Writes the frame marker for this location.
    ///
    /// Always writes the newline that opens a frame. The location tag follows
    /// only when [`SOURCE_LOCATION`] is enabled.
    pub fn write_marker<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        out.write_char(FRAME_START)?;
        if SOURCE_LOCATION {
            write!(out, "{}", self)?;
        }
        Ok(())
    }
}

impl Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "( {}:{} , in {}() ){}",
            self.file, self.line, self.function, MARKER_SEPARATOR
        )
    }
}
