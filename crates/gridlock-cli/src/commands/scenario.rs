use crate::cli::ScenarioCommands;
use crate::support;
use gridlock_core::scenario;
use serde_json::json;
use std::path::PathBuf;

pub fn run(command: ScenarioCommands) {
    match command {
        ScenarioCommands::List { json } => run_list(json),
        ScenarioCommands::Load { name, model, json } => run_load(name, model, json),
    }
}

fn run_list(json_output: bool) {
    let names = scenario::names();

    if json_output {
        let payload = json!({
            "action": "scenario.list",
            "scenarios": names
        });
        support::print_payload(&payload);
    } else {
        println!("gridlock scenario list");
        for name in names {
            println!("  - {name}");
        }
    }
}

fn run_load(name: String, model_arg: String, json_output: bool) {
    let Some(model) = scenario::by_name(&name) else {
        eprintln!(
            "error: unknown scenario: {name} (expected one of: {})",
            scenario::names().join(", ")
        );
        std::process::exit(1);
    };

    let path = PathBuf::from(&model_arg);
    support::save_model_or_exit(&path, &model);

    if json_output {
        let payload = json!({
            "action": "scenario.load",
            "modelPath": path.display().to_string(),
            "scenario": name,
            "processes": model.processes().len(),
            "resources": model.resources().len(),
            "holds": model.holds().len(),
            "waits": model.waits().len()
        });
        support::print_payload(&payload);
    } else {
        println!(
            "gridlock scenario load\n  Loaded: {name}\n  Processes: {}\n  Resources: {}\n  Holds: {}\n  Waits: {}\n  Path: {}",
            model.processes().len(),
            model.resources().len(),
            model.holds().len(),
            model.waits().len(),
            path.display()
        );
    }
}
