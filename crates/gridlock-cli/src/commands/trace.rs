use crate::support;
use gridlock_core::{DetectionTrace, TraceStep, WaitForGraph};
use serde_json::json;

pub fn run(step: Option<usize>, model_arg: String, json_output: bool) {
    let (model, path) = support::load_model_or_exit(&model_arg);
    support::require_processes_or_exit(&model);

    let graph = WaitForGraph::derive(&model);
    let trace = DetectionTrace::record(&graph);

    match step {
        Some(index) => {
            let Some(step) = trace.step(index) else {
                eprintln!(
                    "error: step {index} out of range; valid range is 1..={}",
                    trace.len()
                );
                std::process::exit(1);
            };

            if json_output {
                let payload = json!({
                    "action": "trace",
                    "modelPath": path.display().to_string(),
                    "stepCount": trace.len(),
                    "step": step
                });
                support::print_payload(&payload);
            } else {
                println!("gridlock trace");
                print_step(step, trace.len());
            }
        }
        None => {
            if json_output {
                let payload = json!({
                    "action": "trace",
                    "modelPath": path.display().to_string(),
                    "stepCount": trace.len(),
                    "deadlockDetected": trace.deadlock_detected(),
                    "steps": trace.steps()
                });
                support::print_payload(&payload);
            } else {
                println!("gridlock trace");
                for step in trace.steps() {
                    print_step(step, trace.len());
                }
            }
        }
    }
}

fn print_step(step: &TraceStep, total: usize) {
    println!(
        "  [{}/{}] {:<9} {}",
        step.index,
        total,
        step.kind.as_str(),
        step.description
    );
    println!(
        "        stack: [{}]  visited: [{}]",
        step.stack.join(", "),
        step.visited.join(", ")
    );
}
