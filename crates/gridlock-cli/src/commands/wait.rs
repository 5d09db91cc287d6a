use crate::cli::WaitCommands;
use crate::support;
use serde_json::json;

pub fn run(command: WaitCommands) {
    match command {
        WaitCommands::Add {
            process,
            resource,
            model,
            json,
        } => run_add(process, resource, model, json),
        WaitCommands::Remove {
            process,
            resource,
            model,
            json,
        } => run_remove(process, resource, model, json),
        WaitCommands::Clear { model, json } => run_clear(model, json),
    }
}

fn run_add(process: String, resource: String, model_arg: String, json_output: bool) {
    let (mut model, path) = support::load_model_or_exit(&model_arg);
    let process = process.trim().to_string();
    let resource = resource.trim().to_string();

    model.add_wait(&process, &resource).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    support::warn_undeclared_endpoints(&model, &process, &resource);
    support::save_model_or_exit(&path, &model);

    if json_output {
        let payload = json!({
            "action": "wait.add",
            "modelPath": path.display().to_string(),
            "wait": {
                "process": process,
                "resource": resource
            },
            "waitCount": model.waits().len()
        });
        support::print_payload(&payload);
    } else {
        println!(
            "gridlock wait add\n  Added: {process} waits for {resource}\n  Waits: {}\n  Path: {}",
            model.waits().len(),
            path.display()
        );
    }
}

fn run_remove(process: String, resource: String, model_arg: String, json_output: bool) {
    let (mut model, path) = support::load_model_or_exit(&model_arg);
    let process = process.trim().to_string();
    let resource = resource.trim().to_string();

    let removed = model.remove_wait(&process, &resource);
    support::save_model_or_exit(&path, &model);

    if json_output {
        let payload = json!({
            "action": "wait.remove",
            "modelPath": path.display().to_string(),
            "wait": {
                "process": process,
                "resource": resource
            },
            "removed": removed
        });
        support::print_payload(&payload);
    } else {
        println!(
            "gridlock wait remove\n  Removed: {}\n  Waits: {}\n  Path: {}",
            support::yes_no(removed),
            model.waits().len(),
            path.display()
        );
    }
}

fn run_clear(model_arg: String, json_output: bool) {
    let (mut model, path) = support::load_model_or_exit(&model_arg);
    let cleared = model.clear_waits();
    support::save_model_or_exit(&path, &model);

    if json_output {
        let payload = json!({
            "action": "wait.clear",
            "modelPath": path.display().to_string(),
            "cleared": cleared
        });
        support::print_payload(&payload);
    } else {
        println!(
            "gridlock wait clear\n  Cleared: {cleared} wait edge(s)\n  Path: {}",
            path.display()
        );
    }
}
