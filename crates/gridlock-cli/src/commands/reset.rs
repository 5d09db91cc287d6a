use crate::support;
use serde_json::json;

pub fn run(model_arg: String, json_output: bool) {
    let (mut model, path) = support::load_model_or_exit(&model_arg);
    let processes = model.processes().len();
    let resources = model.resources().len();
    let holds = model.holds().len();
    let waits = model.waits().len();

    model.reset();
    support::save_model_or_exit(&path, &model);

    if json_output {
        let payload = json!({
            "action": "reset",
            "modelPath": path.display().to_string(),
            "cleared": {
                "processes": processes,
                "resources": resources,
                "holds": holds,
                "waits": waits
            }
        });
        support::print_payload(&payload);
    } else {
        println!(
            "gridlock reset\n  Cleared: {processes} process(es), {resources} resource(s), {holds} hold(s), {waits} wait(s)\n  Path: {}",
            path.display()
        );
    }
}
