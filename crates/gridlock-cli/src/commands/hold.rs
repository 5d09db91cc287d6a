use crate::cli::HoldCommands;
use crate::support;
use serde_json::json;

pub fn run(command: HoldCommands) {
    match command {
        HoldCommands::Add {
            process,
            resource,
            model,
            json,
        } => run_add(process, resource, model, json),
        HoldCommands::Remove {
            process,
            resource,
            model,
            json,
        } => run_remove(process, resource, model, json),
        HoldCommands::Clear { model, json } => run_clear(model, json),
    }
}

fn run_add(process: String, resource: String, model_arg: String, json_output: bool) {
    let (mut model, path) = support::load_model_or_exit(&model_arg);
    let process = process.trim().to_string();
    let resource = resource.trim().to_string();

    model.add_hold(&process, &resource).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    support::warn_undeclared_endpoints(&model, &process, &resource);
    support::save_model_or_exit(&path, &model);

    if json_output {
        let payload = json!({
            "action": "hold.add",
            "modelPath": path.display().to_string(),
            "hold": {
                "process": process,
                "resource": resource
            },
            "holdCount": model.holds().len()
        });
        support::print_payload(&payload);
    } else {
        println!(
            "gridlock hold add\n  Added: {process} holds {resource}\n  Holds: {}\n  Path: {}",
            model.holds().len(),
            path.display()
        );
    }
}

fn run_remove(process: String, resource: String, model_arg: String, json_output: bool) {
    let (mut model, path) = support::load_model_or_exit(&model_arg);
    let process = process.trim().to_string();
    let resource = resource.trim().to_string();

    let removed = model.remove_hold(&process, &resource);
    support::save_model_or_exit(&path, &model);

    if json_output {
        let payload = json!({
            "action": "hold.remove",
            "modelPath": path.display().to_string(),
            "hold": {
                "process": process,
                "resource": resource
            },
            "removed": removed
        });
        support::print_payload(&payload);
    } else {
        println!(
            "gridlock hold remove\n  Removed: {}\n  Holds: {}\n  Path: {}",
            support::yes_no(removed),
            model.holds().len(),
            path.display()
        );
    }
}

fn run_clear(model_arg: String, json_output: bool) {
    let (mut model, path) = support::load_model_or_exit(&model_arg);
    let cleared = model.clear_holds();
    support::save_model_or_exit(&path, &model);

    if json_output {
        let payload = json!({
            "action": "hold.clear",
            "modelPath": path.display().to_string(),
            "cleared": cleared
        });
        support::print_payload(&payload);
    } else {
        println!(
            "gridlock hold clear\n  Cleared: {cleared} hold edge(s)\n  Path: {}",
            path.display()
        );
    }
}
