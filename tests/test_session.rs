//! Tests for the session state store.
//!
//! The load-bearing invariant: the inference result is present if and only
//! if the analysis flag is true, and it always belongs to the current image.

mod common;

use common::*;

#[test]
fn new_session_is_empty() {
    let session = SessionState::new();
    assert!(session.image().is_none());
    assert!(session.result().is_none());
    assert!(!session.is_analyzed());
}

#[test]
fn set_image_stores_without_result() {
    let mut session = SessionState::new();
    session.set_image(make_upload("label.png"));

    assert_eq!(session.image().unwrap().file_name, "label.png");
    assert!(session.result().is_none());
    assert!(!session.is_analyzed());
}

#[test]
fn set_result_requires_an_image() {
    let mut session = SessionState::new();
    let err = session.set_result(make_result(&["stain"])).unwrap_err();

    assert_eq!(err, SessionError::NoImage);
    assert!(session.result().is_none());
    assert!(!session.is_analyzed());
}

#[test]
fn set_result_sets_the_flag() {
    let mut session = SessionState::new();
    session.set_image(make_upload("label.png"));
    session.set_result(make_result(&["stain", "tear"])).unwrap();

    assert!(session.is_analyzed());
    assert_eq!(session.result().unwrap().len(), 2);
}

#[test]
fn new_image_discards_the_previous_result() {
    let mut session = SessionState::new();
    session.set_image(make_upload("first.png"));
    session.set_result(make_result(&["stain"])).unwrap();

    // Second upload: both the old image and its result must be gone before
    // any new inference happens - results are never merged.
    session.set_image(make_upload("second.png"));

    assert_eq!(session.image().unwrap().file_name, "second.png");
    assert!(session.result().is_none());
    assert!(!session.is_analyzed());
}

#[test]
fn begin_new_session_clears_everything() {
    let mut session = SessionState::new();
    session.set_image(make_upload("label.png"));
    session.set_result(make_result(&["tear"])).unwrap();

    session.begin_new_session();

    assert!(session.image().is_none());
    assert!(session.result().is_none());
    assert!(!session.is_analyzed());
}

#[test]
fn flag_and_result_stay_in_lockstep_across_transitions() {
    let mut session = SessionState::new();
    assert_eq!(session.result().is_some(), session.is_analyzed());

    session.set_image(make_upload("a.png"));
    assert_eq!(session.result().is_some(), session.is_analyzed());

    session.set_result(make_result(&["stain"])).unwrap();
    assert_eq!(session.result().is_some(), session.is_analyzed());

    session.set_image(make_upload("b.png"));
    assert_eq!(session.result().is_some(), session.is_analyzed());

    session.begin_new_session();
    assert_eq!(session.result().is_some(), session.is_analyzed());
}
