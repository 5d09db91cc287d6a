//! Integration tests: run the built-in scenarios end to end.
//!
//! Each scenario goes through graph derivation, tracing, and report
//! assembly, and the serialized output is compared against expected
//! documents, down to exact step wording.

use chrono::{DateTime, TimeZone, Utc};
use gridlock_core::scenario;
use gridlock_core::{AnalysisReport, DetectionTrace, StepKind, WaitForGraph, find_cycle};
use serde_json::{Value, json};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 30, 17, 13, 5)
        .single()
        .expect("timestamp should be unambiguous")
}

fn assert_document(label: &str, actual: &Value, expected: &Value) {
    assert_eq!(
        actual,
        expected,
        "\n\nDocument: {label}\n\nGot:\n{}\n\nExpected:\n{}\n",
        serde_json::to_string_pretty(actual).expect("actual should pretty-print"),
        serde_json::to_string_pretty(expected).expect("expected should pretty-print"),
    );
}

#[test]
fn simple_deadlock_trace_matches_the_expected_step_sequence() {
    let model = scenario::simple_deadlock();
    let graph = WaitForGraph::derive(&model);
    let trace = DetectionTrace::record(&graph);

    let actual = serde_json::to_value(&trace).expect("trace should serialize");
    let expected = json!([
        {
            "index": 1,
            "kind": "start",
            "description": "Starting DFS from node P1.",
            "visited": [],
            "stack": []
        },
        {
            "index": 2,
            "kind": "visit",
            "description": "Visiting node P1. Added to visited set and stack.",
            "visited": ["P1"],
            "stack": ["P1"],
            "currentNode": "P1"
        },
        {
            "index": 3,
            "kind": "check",
            "description": "Checking neighbor P2 of P1.",
            "visited": ["P1"],
            "stack": ["P1"],
            "currentNode": "P1",
            "examinedNeighbor": "P2"
        },
        {
            "index": 4,
            "kind": "recurse",
            "description": "P2 not visited yet. Exploring P2 recursively.",
            "visited": ["P1"],
            "stack": ["P1"],
            "currentNode": "P1",
            "examinedNeighbor": "P2"
        },
        {
            "index": 5,
            "kind": "visit",
            "description": "Visiting node P2. Added to visited set and stack.",
            "visited": ["P1", "P2"],
            "stack": ["P1", "P2"],
            "currentNode": "P2"
        },
        {
            "index": 6,
            "kind": "check",
            "description": "Checking neighbor P1 of P2.",
            "visited": ["P1", "P2"],
            "stack": ["P1", "P2"],
            "currentNode": "P2",
            "examinedNeighbor": "P1"
        },
        {
            "index": 7,
            "kind": "cycle",
            "description": "Cycle detected! P1 is on the stack. Cycle: P1 -> P2 -> P1",
            "visited": ["P1", "P2"],
            "stack": ["P1", "P2"],
            "currentNode": "P2",
            "examinedNeighbor": "P1",
            "cycle": ["P1", "P2", "P1"]
        }
    ]);
    assert_document("simple-deadlock trace", &actual, &expected);
    assert!(trace.deadlock_detected());
}

#[test]
fn no_deadlock_trace_restarts_and_completes_clean() {
    let model = scenario::no_deadlock();
    let graph = WaitForGraph::derive(&model);
    let trace = DetectionTrace::record(&graph);

    let kinds: Vec<StepKind> = trace.steps().iter().map(|step| step.kind).collect();
    assert_eq!(
        kinds,
        vec![
            StepKind::Start,
            StepKind::Visit,
            StepKind::Backtrack,
            StepKind::Start,
            StepKind::Visit,
            StepKind::Check,
            StepKind::Skip,
            StepKind::Backtrack,
            StepKind::Complete,
        ]
    );

    // The second root starts with an empty stack but keeps the visited
    // history from the first component.
    let second_start = trace.step(4).expect("step 4 should exist");
    assert_eq!(second_start.kind, StepKind::Start);
    assert_eq!(second_start.visited, ["P1".to_string()]);
    assert!(second_start.stack.is_empty());

    let terminal = trace.terminal().expect("trace should not be empty");
    assert_eq!(terminal.kind, StepKind::Complete);
    assert_eq!(
        terminal.description,
        "No cycles found. System is deadlock-free."
    );
    assert_eq!(terminal.visited, ["P1".to_string(), "P2".to_string()]);
    assert!(terminal.stack.is_empty());
    assert!(trace.cycle().is_none());
}

#[test]
fn trace_cycle_agrees_with_plain_detection() {
    for name in scenario::names() {
        let model = scenario::by_name(name).expect("scenario should resolve");
        let graph = WaitForGraph::derive(&model);
        let trace = DetectionTrace::record(&graph);
        assert_eq!(
            trace.cycle().map(<[String]>::to_vec),
            find_cycle(&graph),
            "trace and plain detection disagree for {name}"
        );
    }
}

#[test]
fn simple_deadlock_report_matches_the_expected_document() {
    let report = AnalysisReport::build(&scenario::simple_deadlock(), fixed_now());
    let actual = serde_json::to_value(&report).expect("report should serialize");
    let expected = json!({
        "timestamp": "2025-11-30T17:13:05Z",
        "processes": ["P1", "P2"],
        "resources": ["R1", "R2"],
        "holds": [
            {"process": "P1", "resource": "R1"},
            {"process": "P2", "resource": "R2"}
        ],
        "waits": [
            {"process": "P1", "resource": "R2"},
            {"process": "P2", "resource": "R1"}
        ],
        "waitForGraph": {
            "P1": ["P2"],
            "P2": ["P1"]
        },
        "cycle": ["P1", "P2", "P1"],
        "deadlockDetected": true
    });
    assert_document("simple-deadlock report", &actual, &expected);
}

#[test]
fn no_deadlock_report_keeps_a_null_cycle_field() {
    let report = AnalysisReport::build(&scenario::no_deadlock(), fixed_now());
    let actual = serde_json::to_value(&report).expect("report should serialize");
    let expected = json!({
        "timestamp": "2025-11-30T17:13:05Z",
        "processes": ["P1", "P2"],
        "resources": ["R1", "R2"],
        "holds": [
            {"process": "P1", "resource": "R1"},
            {"process": "P2", "resource": "R2"}
        ],
        "waits": [
            {"process": "P2", "resource": "R1"}
        ],
        "waitForGraph": {
            "P1": [],
            "P2": ["P1"]
        },
        "cycle": null,
        "deadlockDetected": false
    });
    assert_document("no-deadlock report", &actual, &expected);
}

#[test]
fn trace_round_trips_through_its_serialized_form() {
    let model = scenario::simple_deadlock();
    let trace = DetectionTrace::record(&WaitForGraph::derive(&model));
    let text = serde_json::to_string(&trace).expect("trace should serialize");
    let restored: DetectionTrace = serde_json::from_str(&text).expect("trace should parse");
    assert_eq!(restored, trace);
}
