//! Build-time formatting configuration.
//!
//! Whether frame markers carry `file:line , in function()` detail is decided
//! once, at compile time, by the `source-location` Cargo feature. Every
//! [`TrailError`](crate::TrailError) in the process formats identically.
//!
//! ```toml
//! [dependencies]
//! # markers degrade to bare newlines
//! error-trail = { version = "0.1", default-features = false }
//! ```

/// `true` when frame markers embed the source location.
pub const SOURCE_LOCATION: bool = cfg!(feature = "source-location");

/// Separator written between a location tag and the text annotated onto it.
pub const MARKER_SEPARATOR: &str = "    ->  ";

/// Character that opens every frame annotation.
pub const FRAME_START: char = '\n';
