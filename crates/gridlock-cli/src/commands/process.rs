use crate::cli::ProcessCommands;
use crate::support;
use serde_json::json;

pub fn run(command: ProcessCommands) {
    match command {
        ProcessCommands::Add { name, model, json } => run_add(name, model, json),
        ProcessCommands::Remove { name, model, json } => run_remove(name, model, json),
    }
}

fn run_add(name: String, model_arg: String, json_output: bool) {
    let (mut model, path) = support::load_model_or_exit(&model_arg);
    let name = name.trim().to_string();

    model.add_process(&name).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    support::save_model_or_exit(&path, &model);

    if json_output {
        let payload = json!({
            "action": "process.add",
            "modelPath": path.display().to_string(),
            "process": name,
            "processCount": model.processes().len()
        });
        support::print_payload(&payload);
    } else {
        println!(
            "gridlock process add\n  Added: {}\n  Processes: {}\n  Path: {}",
            name,
            model.processes().len(),
            path.display()
        );
    }
}

fn run_remove(name: String, model_arg: String, json_output: bool) {
    let (mut model, path) = support::load_model_or_exit(&model_arg);
    let name = name.trim().to_string();

    let outcome = model.remove_process(&name);
    support::save_model_or_exit(&path, &model);

    if json_output {
        let payload = json!({
            "action": "process.remove",
            "modelPath": path.display().to_string(),
            "process": name,
            "removed": outcome.removed,
            "detachedHolds": outcome.detached_holds,
            "detachedWaits": outcome.detached_waits
        });
        support::print_payload(&payload);
    } else {
        println!(
            "gridlock process remove\n  Removed: {}\n  Detached holds: {}\n  Detached waits: {}\n  Path: {}",
            support::yes_no(outcome.removed),
            outcome.detached_holds,
            outcome.detached_waits,
            path.display()
        );
    }
}
