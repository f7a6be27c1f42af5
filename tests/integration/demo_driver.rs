//! The demo script as a library caller sees it.

use super::common::EPSILON;
use settable::demo::{self, DemoOptions, Event, Status};
use settable::{Outcome, SetState, SubjectKind};

#[test]
fn test_every_subject_ends_unset() {
    let runs = demo::run(&DemoOptions::default()).unwrap();
    assert_eq!(runs.len(), 3);
    for run in &runs {
        let states: Vec<SetState> = run.states().collect();
        assert_eq!(
            states,
            [SetState::Unset, SetState::Set, SetState::Unset],
            "{}",
            run.subject
        );
        assert!(run
            .events
            .iter()
            .any(|e| *e == Event::Set { status: Status::Ok(Outcome::Done) }));
        assert!(run
            .events
            .iter()
            .any(|e| *e == Event::Unset { status: Status::Ok(Outcome::Done) }));
    }
}

#[test]
fn test_numbers_run_reports_total() {
    let run = demo::run_subject(SubjectKind::Numbers, &DemoOptions::default()).unwrap();
    let total = run
        .events
        .iter()
        .find_map(|e| match e {
            Event::Total { value } => Some(*value),
            _ => None,
        })
        .expect("numbers run records a total");
    assert!((total - 11.70).abs() < EPSILON);
}

#[test]
fn test_names_run_lookups_then_boundary() {
    let run = demo::run_subject(SubjectKind::Names, &DemoOptions::default()).unwrap();
    let lookups: Vec<(usize, &str)> = run
        .events
        .iter()
        .filter_map(|e| match e {
            Event::Lookup { index, name } => Some((*index, name.as_str())),
            _ => None,
        })
        .collect();
    assert_eq!(
        lookups,
        [(0, "Chris Tomson"), (1, "John Stanford"), (2, "Tina Angelia")]
    );

    let boundary = run.events.iter().position(|e| matches!(e, Event::Boundary { .. }));
    let last_lookup = run.events.iter().rposition(|e| matches!(e, Event::Lookup { .. }));
    assert_eq!(boundary, last_lookup.map(|i| i + 1));
}

#[test]
fn test_names_run_truncates_to_buffer() {
    let options = DemoOptions {
        max_len: 6,
        ..DemoOptions::default()
    };
    let run = demo::run_subject(SubjectKind::Names, &options).unwrap();
    assert!(run.events.contains(&Event::Lookup {
        index: 0,
        name: "Chris".to_string(),
    }));
}

#[test]
fn test_empty_name_list_hits_boundary_at_zero() {
    let run = demo::run_names(&[], 9, 99).unwrap();
    assert!(run
        .events
        .iter()
        .any(|e| matches!(e, Event::Boundary { index: 0, .. })));
}

#[test]
fn test_transcript_serializes() {
    let runs = demo::run(&DemoOptions {
        subjects: vec![SubjectKind::Toggle],
        ..DemoOptions::default()
    })
    .unwrap();
    let json = serde_json::to_value(&runs).unwrap();

    assert_eq!(json[0]["subject"], "toggle");
    assert_eq!(json[0]["events"][0]["event"], "state");
    assert_eq!(json[0]["events"][0]["state"], "unset");
    assert_eq!(json[0]["events"][1]["event"], "set");
    assert_eq!(json[0]["events"][1]["status"]["ok"], "done");
}
