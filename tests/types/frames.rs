use crate::marker;
use error_trail::{Location, TrailError};

#[test]
fn frames_split_at_each_marker() {
    let mut err = TrailError::at(1, "a.rs", "a") << "first";
    err.append_location(Location::new(2, "a.rs", "b")).append("second");

    let frames: Vec<&str> = err.frames().collect();
    assert_eq!(
        frames,
        vec![
            format!("{}first", marker(1, "a.rs", "a")).as_str(),
            format!("{}second", marker(2, "a.rs", "b")).as_str(),
        ]
    );
    assert_eq!(frames.concat(), err.message());
}

#[test]
fn chained_merge_preserves_frame_boundaries() {
    let other = (TrailError::at(1, "o.rs", "o") << "x")
        .append_location(Location::new(2, "o.rs", "p"))
        .clone();
    let mut err = TrailError::at(9, "m.rs", "m") << "mine";

    err.append_from(&other, Location::new(10, "m.rs", "m"));

    assert_eq!(err.frame_count(), 4);
    let frames: Vec<&str> = err.frames().collect();
    assert_eq!(frames[1], format!("{}x", marker(1, "o.rs", "o")));
    assert_eq!(frames[2], marker(2, "o.rs", "p"));
    assert_eq!(frames[3], marker(10, "m.rs", "m"));
}

#[test]
fn foreign_absorption_yields_two_frames() {
    let err = TrailError::from_source("boom", Location::new(4, "f.rs", "g")) << "annotated";

    let frames: Vec<&str> = err.frames().collect();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0], format!("{}boom", marker(4, "f.rs", "g")));
    assert_eq!(err.last_frame(), Some(format!("{}annotated", marker(4, "f.rs", "g")).as_str()));
}

#[test]
fn iterator_is_fused() {
    let err = TrailError::at(1, "a.rs", "a");
    let mut frames = err.frames();

    assert!(frames.next().is_some());
    assert_eq!(frames.next(), None);
    assert_eq!(frames.next(), None);
}
