use crate::support;
use chrono::Utc;
use gridlock_core::AnalysisReport;

pub fn run(model_arg: String, json_output: bool) {
    let (model, path) = support::load_model_or_exit(&model_arg);
    if model.processes().is_empty() && model.resources().is_empty() {
        eprintln!("error: model is empty; no data to report");
        std::process::exit(1);
    }

    let report = AnalysisReport::build(&model, Utc::now());

    if json_output {
        // The report is its own document shape; it is printed bare rather
        // than wrapped in an action payload.
        let value = serde_json::to_value(&report).expect("json serialization");
        support::print_payload(&value);
        return;
    }

    println!("gridlock report");
    println!("  Timestamp: {}", report.timestamp);
    println!("  Processes: {}", report.processes.len());
    println!("  Resources: {}", report.resources.len());
    println!("  Holds: {}", report.holds.len());
    println!("  Waits: {}", report.waits.len());
    match &report.cycle {
        Some(cycle) => println!("  Deadlock detected: {}", cycle.join(" -> ")),
        None => println!("  No deadlock detected"),
    }
    println!("  Path: {}", path.display());
}
