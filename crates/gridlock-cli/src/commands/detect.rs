use crate::support;
use gridlock_core::{WaitForGraph, find_cycle};
use serde_json::json;

pub fn run(model_arg: String, json_output: bool) {
    let (model, path) = support::load_model_or_exit(&model_arg);
    support::require_processes_or_exit(&model);

    let graph = WaitForGraph::derive(&model);
    let cycle = find_cycle(&graph);
    let deadlock_detected = cycle.is_some();

    if json_output {
        let payload = json!({
            "action": "detect",
            "modelPath": path.display().to_string(),
            "cycle": cycle,
            "deadlockDetected": deadlock_detected
        });
        support::print_payload(&payload);
    } else if let Some(cycle) = cycle {
        println!(
            "gridlock detect\n  Deadlock detected: {}\n  Path: {}",
            cycle.join(" -> "),
            path.display()
        );
    } else {
        println!(
            "gridlock detect\n  No deadlock detected\n  Path: {}",
            path.display()
        );
    }
}
