//! Analysis report assembly.
//!
//! A report captures the full model alongside the derived wait-for graph
//! and the detection verdict, in one self-describing document suitable
//! for export. Assembly is pure: the caller supplies the timestamp, so
//! two builds over the same model and instant are byte-identical.

use crate::detect::find_cycle;
use crate::graph::WaitForGraph;
use crate::model::{Allocation, AllocationModel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of a model, its wait-for graph, and the detection verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub timestamp: DateTime<Utc>,
    pub processes: Vec<String>,
    pub resources: Vec<String>,
    pub holds: Vec<Allocation>,
    pub waits: Vec<Allocation>,
    /// Adjacency keyed in sorted node order; edge lists keep creation order.
    pub wait_for_graph: BTreeMap<String, Vec<String>>,
    /// Always serialized, `null` when the system is deadlock-free.
    pub cycle: Option<Vec<String>>,
    pub deadlock_detected: bool,
}

impl AnalysisReport {
    /// Assemble a report for `model` as of `now`.
    pub fn build(model: &AllocationModel, now: DateTime<Utc>) -> Self {
        let graph = WaitForGraph::derive(model);
        let cycle = find_cycle(&graph);
        let deadlock_detected = cycle.is_some();
        AnalysisReport {
            timestamp: now,
            processes: model.processes().to_vec(),
            resources: model.resources().to_vec(),
            holds: model.holds().to_vec(),
            waits: model.waits().to_vec(),
            wait_for_graph: graph.to_sorted_map(),
            cycle,
            deadlock_detected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 30, 17, 13, 5)
            .single()
            .expect("timestamp should be unambiguous")
    }

    #[test]
    fn deadlocked_model_reports_the_cycle() {
        let mut model = AllocationModel::new();
        model.add_process("P1").expect("process should add");
        model.add_process("P2").expect("process should add");
        model.add_hold("P1", "R1").expect("hold should add");
        model.add_hold("P2", "R2").expect("hold should add");
        model.add_wait("P1", "R2").expect("wait should add");
        model.add_wait("P2", "R1").expect("wait should add");

        let report = AnalysisReport::build(&model, fixed_now());
        assert!(report.deadlock_detected);
        assert_eq!(
            report.cycle.as_deref(),
            Some(&["P1".to_string(), "P2".to_string(), "P1".to_string()][..])
        );
        assert_eq!(report.processes, ["P1", "P2"]);
    }

    #[test]
    fn free_model_reports_null_cycle_in_json() {
        let mut model = AllocationModel::new();
        model.add_process("P1").expect("process should add");

        let report = AnalysisReport::build(&model, fixed_now());
        let value = serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(value["deadlockDetected"], false);
        assert!(value["cycle"].is_null());
        assert_eq!(value["timestamp"], "2025-11-30T17:13:05Z");
    }

    #[test]
    fn graph_keys_are_sorted_for_stable_output() {
        let mut model = AllocationModel::new();
        for name in ["P3", "P1", "P2"] {
            model.add_process(name).expect("process should add");
        }
        let report = AnalysisReport::build(&model, fixed_now());
        let keys: Vec<&String> = report.wait_for_graph.keys().collect();
        assert_eq!(keys, ["P1", "P2", "P3"]);
    }

    #[test]
    fn same_model_and_instant_build_identical_reports() {
        let mut model = AllocationModel::new();
        model.add_process("P1").expect("process should add");
        model.add_process("P2").expect("process should add");
        model.add_hold("P2", "R1").expect("hold should add");
        model.add_wait("P1", "R1").expect("wait should add");

        let now = fixed_now();
        assert_eq!(
            AnalysisReport::build(&model, now),
            AnalysisReport::build(&model, now)
        );
    }
}
