use gridlock_core::{AllocationModel, load_model_or_default, save_model};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub fn load_model_or_exit(model_arg: &str) -> (AllocationModel, PathBuf) {
    let path = PathBuf::from(model_arg);
    let model = load_model_or_default(&path).unwrap_or_else(|e| {
        eprintln!("error: failed to load {}: {e}", path.display());
        std::process::exit(1);
    });
    (model, path)
}

pub fn save_model_or_exit(path: &Path, model: &AllocationModel) {
    save_model(path, model).unwrap_or_else(|e| {
        eprintln!("error: failed to save {}: {e}", path.display());
        std::process::exit(1);
    });
}

pub fn require_processes_or_exit(model: &AllocationModel) {
    model.require_processes().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
}

/// Stderr heads-up for edges naming undeclared endpoints. The add itself
/// still happens; the graph builder keeps such edges inert on the process
/// side until the name is declared.
pub fn warn_undeclared_endpoints(model: &AllocationModel, process: &str, resource: &str) {
    if !model.has_process(process) {
        eprintln!("warning: process {process} is not declared; the edge is ignored until it is");
    }
    if !model.has_resource(resource) {
        eprintln!("warning: resource {resource} is not declared");
    }
}

pub fn print_payload(payload: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}

pub fn yes_no(ok: bool) -> &'static str {
    if ok { "yes" } else { "no" }
}
