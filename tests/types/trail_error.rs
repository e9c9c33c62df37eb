use core::fmt::Write;

use crate::marker;
use error_trail::{ErrorSource, Location, TrailError};

#[test]
fn origination_emits_one_marker() {
    let err = TrailError::at(10, "a.txt", "f");

    assert_eq!(err.message(), marker(10, "a.txt", "f"));
    assert_eq!(err.frame_count(), 1);
}

#[test]
fn new_and_at_agree() {
    let a = TrailError::new(Location::new(3, "lib.rs", "run"));
    let b = TrailError::at(3, "lib.rs", "run");

    assert_eq!(a, b);
}

#[test]
fn appended_values_follow_marker_in_order() {
    let base = TrailError::at(7, "io.rs", "read");
    let err = base.clone() << "attempt " << 3 << '/' << 5.5;

    assert_eq!(err.message(), format!("{}attempt 3/5.5", base.message()));
}

#[test]
fn appending_through_mutable_reference_chains() {
    let mut err = TrailError::at(7, "io.rs", "read");
    let _ = &mut err << "fd=" << 4;
    err.append(" closed");

    assert!(err.message().ends_with("fd=4 closed"));
}

#[test]
fn fmt_write_appends_to_current_frame() {
    let mut err = TrailError::at(1, "w.rs", "w");
    write!(err, "code {:03}", 7).unwrap();

    assert!(err.message().ends_with("code 007"));
    assert_eq!(err.frame_count(), 1);
}

#[test]
fn message_is_stable_between_reads() {
    let err = TrailError::at(5, "m.rs", "m") << "stable";

    assert_eq!(err.message(), err.message());
    assert_eq!(err.to_string(), err.message());
}

#[test]
fn reading_does_not_close_the_trail() {
    let mut err = TrailError::at(5, "m.rs", "m");
    let before = err.message().to_string();

    err.append("more");
    err.append_location(Location::new(6, "m.rs", "n"));

    assert_eq!(err.message(), format!("{}more{}", before, marker(6, "m.rs", "n")));
}

#[test]
fn same_kind_absorption_appends_exactly_one_marker() {
    let existing = TrailError::at(1, "inner.rs", "inner") << "root cause";
    let absorbed = TrailError::from_source(&existing, Location::new(2, "outer.rs", "outer"));

    assert_eq!(
        absorbed.message(),
        format!("{}{}", existing.message(), marker(2, "outer.rs", "outer"))
    );
}

#[test]
fn append_from_chained_keeps_own_history_first() {
    let other = TrailError::at(1, "b.rs", "b") << "other";
    let mut err = TrailError::at(9, "a.rs", "a") << "mine";

    err.append_from(&other, Location::new(10, "a.rs", "a"));

    assert_eq!(
        err.message(),
        format!(
            "{}mine{}other{}",
            marker(9, "a.rs", "a"),
            marker(1, "b.rs", "b"),
            marker(10, "a.rs", "a")
        )
    );
}

// Absorbing a foreign error tags the call site twice: once for the message
// and once for the frame itself.
#[test]
fn foreign_absorption_doubles_marker() {
    let err = TrailError::from_source("boom", Location::new(4, "f.rs", "g"));
    let m = marker(4, "f.rs", "g");

    assert_eq!(err.message(), format!("{}boom{}", m, m));
    assert_eq!(err.frame_count(), 2);
}

#[test]
fn foreign_absorption_via_error_source() {
    let source = ErrorSource::foreign(&"x".parse::<u8>().unwrap_err());
    let err = TrailError::from_source(&source, Location::new(4, "f.rs", "g"));

    assert!(err.message().contains("invalid digit found in string"));
}

#[test]
fn write_to_copies_buffer_verbatim() {
    let err = TrailError::at(2, "s.rs", "sink") << "payload";
    let mut out = String::from("prefix:");

    err.write_to(&mut out).unwrap();

    assert_eq!(out, format!("prefix:{}", err.message()));
    assert_eq!(format!("{}", err), err.message());
}

#[cfg(feature = "std")]
#[test]
fn write_io_copies_bytes_verbatim() {
    let err = TrailError::at(2, "s.rs", "sink") << "payload";
    let mut out: Vec<u8> = Vec::new();

    err.write_io(&mut out).unwrap();

    assert_eq!(out, err.message().as_bytes());
}

#[test]
fn into_message_returns_buffer() {
    let err = TrailError::at(8, "o.rs", "own") << "owned";
    let expected = err.message().to_string();

    assert_eq!(err.into_message(), expected);
}

#[test]
fn len_tracks_buffer() {
    let err = TrailError::at(8, "o.rs", "own") << "abc";

    assert_eq!(err.len(), marker(8, "o.rs", "own").len() + 3);
    assert!(!err.is_empty());
}

#[cfg(feature = "source-location")]
#[test]
fn divide_scenario_matches_exact_text() {
    let err = TrailError::at(42, "calc.src", "Divide") << "Error: I can't take the inverse of 0!";

    assert_eq!(
        err.message(),
        "\n( calc.src:42 , in Divide() )    ->  Error: I can't take the inverse of 0!"
    );

    let propagated =
        TrailError::from_source(&err, Location::new(50, "calc.src", "MultiplyInverse"));
    assert_eq!(
        propagated.message(),
        format!("{}\n( calc.src:50 , in MultiplyInverse() )    ->  ", err.message())
    );
}

#[cfg(not(feature = "source-location"))]
#[test]
fn markers_degrade_to_newlines_without_source_location() {
    assert_eq!(TrailError::at(10, "a.txt", "f").message(), "\n");

    let err = TrailError::from_source("boom", Location::new(10, "a.txt", "f")) << "tail";
    assert_eq!(err.message(), "\nboom\ntail");
}

#[test]
fn equal_messages_compare_equal() {
    let marked = TrailError::at(1, "a.rs", "a") << "x";
    let rebuilt = TrailError::at(1, "a.rs", "a") << "x";

    assert_eq!(marked, rebuilt);
    if error_trail::config::SOURCE_LOCATION {
        assert_ne!(marked, TrailError::at(2, "a.rs", "a") << "x");
    }
}
