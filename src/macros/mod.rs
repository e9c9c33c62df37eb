//! Ergonomic macros that capture the call site for a [`TrailError`](crate::TrailError).
//!
//! - [`macro@crate::function_name`] - Name of the enclosing function.
//! - [`macro@crate::here`] - The current line, file and function as a
//!   [`Location`](crate::Location).
//! - [`macro@crate::trail`] - Originates a trail at the call site.
//! - [`macro@crate::trail_from`] - Absorbs an existing error at the call site.
//! - [`macro@crate::trail_append`] / [`macro@crate::trail_append_from`] - Extend a
//!   trail that is still being built.
//! - [`macro@crate::bail_trail`] / [`macro@crate::rethrow_trail`] - Return early with
//!   a trail.
//!
//! Every macro that creates a frame accepts optional trailing `format!`
//! arguments, which are appended to the new frame.
//!
//! # Examples
//!
//! ```
//! use error_trail::{trail, trail_append, TrailError};
//!
//! fn parse(a: &str, b: &str) -> Result<(i32, i32), TrailError> {
//!     let mut err = trail!("Error parsing your numbers!");
//!     let mut failed = false;
//!
//!     let a = a.parse::<i32>().map_err(|e| {
//!         failed = true;
//!         trail_append!(err, "Error parsing integer 'a': {}", e);
//!     });
//!     let b = b.parse::<i32>().map_err(|e| {
//!         failed = true;
//!         trail_append!(err, "Error parsing integer 'b': {}", e);
//!     });
//!
//!     match (a, b) {
//!         (Ok(a), Ok(b)) if !failed => Ok((a, b)),
//!         _ => Err(err),
//!     }
//! }
//!
//! let err = parse("1", "x").unwrap_err();
//! assert_eq!(err.frame_count(), 2);
//! ```

/// Expands to the name of the enclosing function as a `&'static str`.
///
/// Closure and async-block wrappers are skipped, so the name is that of the
/// nearest named function.
///
/// ```
/// fn load_config() -> &'static str {
///     error_trail::function_name!()
/// }
///
/// assert_eq!(load_config(), "load_config");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        $crate::macros::trim_function_path($crate::macros::type_name_of(__here))
    }};
}

/// Captures the current call site as a [`Location`](crate::Location).
///
/// ```
/// use error_trail::here;
///
/// let loc = here!();
/// assert_eq!(loc.line, line!() - 1);
/// assert_eq!(loc.file, file!());
/// ```
#[macro_export]
macro_rules! here {
    () => {
        $crate::types::Location::new(line!(), file!(), $crate::function_name!())
    };
}

/// Originates a [`TrailError`](crate::TrailError) at the call site.
///
/// # Syntax
///
/// - `trail!()` - A single bare frame
/// - `trail!("format", args...)` - The frame annotated with formatted text
///
/// ```
/// use error_trail::trail;
///
/// let err = trail!("inverse of {}", 0);
/// assert!(err.to_string().ends_with("inverse of 0"));
/// ```
#[macro_export]
macro_rules! trail {
    () => {
        $crate::TrailError::new($crate::here!())
    };
    ($($arg:tt)+) => {{
        let mut __trail = $crate::TrailError::new($crate::here!());
        __trail.append(format_args!($($arg)+));
        __trail
    }};
}

/// Builds a [`TrailError`](crate::TrailError) from an existing error at the call site.
///
/// The error is taken by reference and must implement
/// [`AsErrorSource`](crate::traits::AsErrorSource).
///
/// ```
/// use error_trail::{trail, trail_from};
///
/// let inner = trail!("disk full");
/// let outer = trail_from!(inner, "while saving");
/// assert_eq!(outer.frame_count(), 2);
/// ```
#[macro_export]
macro_rules! trail_from {
    ($err:expr $(,)?) => {
        $crate::TrailError::from_source(&$err, $crate::here!())
    };
    ($err:expr, $($arg:tt)+) => {{
        let mut __trail = $crate::TrailError::from_source(&$err, $crate::here!());
        __trail.append(format_args!($($arg)+));
        __trail
    }};
}

/// Opens a new frame on an existing trail at the call site.
///
/// Evaluates to `&mut TrailError`, so `<<` can keep annotating.
#[macro_export]
macro_rules! trail_append {
    ($trail:expr $(,)?) => {
        $trail.append_location($crate::here!())
    };
    ($trail:expr, $($arg:tt)+) => {
        $trail.append_location($crate::here!()).append(format_args!($($arg)+))
    };
}

/// Merges another error into an existing trail at the call site.
///
/// Evaluates to `&mut TrailError`.
#[macro_export]
macro_rules! trail_append_from {
    ($trail:expr, $err:expr $(,)?) => {
        $trail.append_from(&$err, $crate::here!())
    };
    ($trail:expr, $err:expr, $($arg:tt)+) => {
        $trail.append_from(&$err, $crate::here!()).append(format_args!($($arg)+))
    };
}

/// Returns early with a trail originated at the call site.
///
/// The trail is converted with `Into`, so the enclosing function may return
/// any error type that `TrailError` converts into.
///
/// ```
/// use error_trail::{bail_trail, TrailResult};
///
/// fn inverse(i: i32) -> TrailResult<f64> {
///     if i == 0 {
///         bail_trail!("Error: I can't take the inverse of 0!");
///     }
///     Ok(1.0 / f64::from(i))
/// }
///
/// assert!(inverse(0).is_err());
/// ```
#[macro_export]
macro_rules! bail_trail {
    ($($arg:tt)*) => {
        return ::core::result::Result::Err(::core::convert::Into::into($crate::trail!($($arg)*)))
    };
}

/// Returns early with `err` absorbed into a trail at the call site.
#[macro_export]
macro_rules! rethrow_trail {
    ($($arg:tt)+) => {
        return ::core::result::Result::Err(::core::convert::Into::into($crate::trail_from!($($arg)+)))
    };
}

/// Implements [`AsErrorSource`](crate::traits::AsErrorSource) for custom types.
///
/// The types are absorbed as foreign errors through their `Display`
/// implementation.
///
/// # Examples
///
/// ```
/// use error_trail::{impl_foreign_error, trail_from};
/// use std::fmt;
///
/// struct MyError {
///     code: u32,
/// }
///
/// impl fmt::Display for MyError {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "Error code: {}", self.code)
///     }
/// }
///
/// impl_foreign_error!(MyError);
///
/// let err = trail_from!(MyError { code: 404 });
/// assert!(err.to_string().contains("Error code: 404"));
/// ```
#[macro_export]
macro_rules! impl_foreign_error {
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::traits::AsErrorSource for $type {
                fn as_error_source(&self) -> $crate::types::ErrorSource<'_> {
                    $crate::types::ErrorSource::foreign(self)
                }
            }
        )+
    };
}

#[doc(hidden)]
#[inline]
pub fn type_name_of<T>(_: T) -> &'static str {
    core::any::type_name::<T>()
}

/// Reduces the type path of the probe fn emitted by [`function_name!`] to
/// the name of the function it was declared in.
#[doc(hidden)]
pub fn trim_function_path(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::__here").unwrap_or(path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    match path.rfind("::") {
        Some(pos) => &path[pos + 2..],
        None => path,
    }
}
