use crate::support;
use gridlock_core::WaitForGraph;
use serde_json::json;

pub fn run(model_arg: String, json_output: bool) {
    let (model, path) = support::load_model_or_exit(&model_arg);
    let graph = WaitForGraph::derive(&model);

    if json_output {
        let payload = json!({
            "action": "show",
            "modelPath": path.display().to_string(),
            "processes": model.processes(),
            "resources": model.resources(),
            "holds": model.holds(),
            "waits": model.waits(),
            "waitForGraph": graph.to_sorted_map()
        });
        support::print_payload(&payload);
        return;
    }

    println!("gridlock show");
    println!("  Path: {}", path.display());
    println!("  Processes ({}):", model.processes().len());
    for name in model.processes() {
        println!("    - {name}");
    }
    println!("  Resources ({}):", model.resources().len());
    for name in model.resources() {
        println!("    - {name}");
    }
    println!("  Holds ({}):", model.holds().len());
    for edge in model.holds() {
        println!("    - {} holds {}", edge.process, edge.resource);
    }
    println!("  Waits ({}):", model.waits().len());
    for edge in model.waits() {
        println!("    - {} waits for {}", edge.process, edge.resource);
    }
    println!("  Wait-for graph:");
    for node in graph.nodes() {
        let neighbors = graph.neighbors(node);
        if neighbors.is_empty() {
            println!("    {node} -> (none)");
        } else {
            println!("    {node} -> {}", neighbors.join(", "));
        }
    }
}
