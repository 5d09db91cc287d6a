use crate::cli::ResourceCommands;
use crate::support;
use serde_json::json;

pub fn run(command: ResourceCommands) {
    match command {
        ResourceCommands::Add { name, model, json } => run_add(name, model, json),
        ResourceCommands::Remove { name, model, json } => run_remove(name, model, json),
    }
}

fn run_add(name: String, model_arg: String, json_output: bool) {
    let (mut model, path) = support::load_model_or_exit(&model_arg);
    let name = name.trim().to_string();

    model.add_resource(&name).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    support::save_model_or_exit(&path, &model);

    if json_output {
        let payload = json!({
            "action": "resource.add",
            "modelPath": path.display().to_string(),
            "resource": name,
            "resourceCount": model.resources().len()
        });
        support::print_payload(&payload);
    } else {
        println!(
            "gridlock resource add\n  Added: {}\n  Resources: {}\n  Path: {}",
            name,
            model.resources().len(),
            path.display()
        );
    }
}

fn run_remove(name: String, model_arg: String, json_output: bool) {
    let (mut model, path) = support::load_model_or_exit(&model_arg);
    let name = name.trim().to_string();

    let outcome = model.remove_resource(&name);
    support::save_model_or_exit(&path, &model);

    if json_output {
        let payload = json!({
            "action": "resource.remove",
            "modelPath": path.display().to_string(),
            "resource": name,
            "removed": outcome.removed,
            "detachedHolds": outcome.detached_holds,
            "detachedWaits": outcome.detached_waits
        });
        support::print_payload(&payload);
    } else {
        println!(
            "gridlock resource remove\n  Removed: {}\n  Detached holds: {}\n  Detached waits: {}\n  Path: {}",
            support::yes_no(outcome.removed),
            outcome.detached_holds,
            outcome.detached_waits,
            path.display()
        );
    }
}
