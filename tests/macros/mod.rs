use crate::marker;
use error_trail::{
    bail_trail, function_name, here, impl_foreign_error, rethrow_trail, trail, trail_append,
    trail_append_from, trail_from, Location, TrailError,
};
use std::fmt;

#[test]
fn function_name_is_enclosing_fn() {
    assert_eq!(function_name!(), "function_name_is_enclosing_fn");
}

#[test]
fn function_name_skips_closures() {
    let name = (|| (|| function_name!())())();

    assert_eq!(name, "function_name_skips_closures");
}

#[test]
fn here_captures_file_line_and_function() {
    let expected_line = line!() + 1;
    let loc = here!();

    let normalized = loc.file.replace('\\', "/");
    assert!(normalized.ends_with("tests/macros/mod.rs"));
    assert_eq!(loc.line, expected_line);
    assert_eq!(loc.function, "here_captures_file_line_and_function");
}

#[test]
fn trail_macro_originates_at_call_site() {
    let line = line!() + 1;
    let err = trail!();

    assert_eq!(
        err.message(),
        marker(line, file!(), "trail_macro_originates_at_call_site")
    );
}

#[test]
fn trail_macro_formats_annotation() {
    let line = line!() + 1;
    let err = trail!("inverse of {} (b = {b})", 0, b = 7);

    assert_eq!(
        err.message(),
        format!(
            "{}inverse of 0 (b = 7)",
            marker(line, file!(), "trail_macro_formats_annotation")
        )
    );
}

#[test]
fn trail_from_absorbs_existing_trail() {
    let inner = TrailError::at(1, "inner.rs", "inner");
    let line = line!() + 1;
    let outer = trail_from!(inner, "called with {}", 5);

    assert_eq!(
        outer.message(),
        format!(
            "{}{}called with 5",
            inner.message(),
            marker(line, file!(), "trail_from_absorbs_existing_trail")
        )
    );
}

#[test]
fn trail_append_opens_frames_on_named_object() {
    let mut err = trail!("Error parsing your numbers!");
    trail_append!(err, "integer 'a': {}", "bad");
    let _ = trail_append!(err) << "integer 'b'";

    assert_eq!(err.frame_count(), 3);
    assert!(err.frames().nth(1).unwrap().ends_with("integer 'a': bad"));
    assert!(err.last_frame().unwrap().ends_with("integer 'b'"));
}

#[test]
fn trail_append_from_merges_into_named_object() {
    let mut err = trail!("collecting");
    let other = TrailError::at(3, "o.rs", "o") << "other";

    trail_append_from!(err, other, "merged");
    trail_append_from!(err, "plain");

    // trail, other, merge tag, then a doubled tag for the plain message
    assert_eq!(err.frame_count(), 5);
    assert!(err.message().contains("other"));
    assert!(err.frames().nth(2).unwrap().ends_with("merged"));
    assert!(err.frames().nth(3).unwrap().ends_with("plain"));
}

fn inverse(i: i32) -> Result<f64, TrailError> {
    if i == 0 {
        bail_trail!("Error: I can't take the inverse of 0!");
    }
    Ok(1.0 / f64::from(i))
}

#[derive(Debug)]
enum AppError {
    Trail(TrailError),
}

impl From<TrailError> for AppError {
    fn from(err: TrailError) -> Self {
        AppError::Trail(err)
    }
}

fn multiply_inverse(a: i32, b: i32) -> Result<f64, AppError> {
    let (x, y) = match (inverse(a), inverse(b)) {
        (Ok(x), Ok(y)) => (x, y),
        (Err(err), _) | (_, Err(err)) => {
            rethrow_trail!(err, "Called from multiply_inverse: a = {} b = {}", a, b)
        },
    };
    Ok(x * y)
}

#[test]
fn bail_trail_returns_early() {
    assert_eq!(inverse(4).unwrap(), 0.25);

    let err = inverse(0).unwrap_err();
    assert_eq!(err.frame_count(), 1);
    assert!(err.message().ends_with("Error: I can't take the inverse of 0!"));
    if error_trail::config::SOURCE_LOCATION {
        assert!(err.message().contains(", in inverse() )"));
    }
}

#[test]
fn rethrow_trail_converts_into_caller_error() {
    let AppError::Trail(err) = multiply_inverse(3, 0).unwrap_err();

    assert_eq!(err.frame_count(), 2);
    assert!(err.message().ends_with("a = 3 b = 0"));
    if error_trail::config::SOURCE_LOCATION {
        assert!(err.last_frame().unwrap().contains(", in multiply_inverse() )"));
    }
}

struct Timeout {
    secs: u64,
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timed out after {}s", self.secs)
    }
}

impl_foreign_error!(Timeout);

#[test]
fn impl_foreign_error_absorbs_display_output() {
    let err = TrailError::from_source(&Timeout { secs: 30 }, Location::new(1, "t.rs", "t"));

    assert_eq!(
        err.message(),
        format!("{}timed out after 30s{}", marker(1, "t.rs", "t"), marker(1, "t.rs", "t"))
    );
}
