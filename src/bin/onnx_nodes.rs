//! Dumps an ONNX model's computation-graph node list as JSON.
//!
//! Usage: onnx-nodes <model_path>

use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: onnx-nodes <model_path>");
        return ExitCode::from(2);
    };

    let model = match forge_nn::onnx::parse_file(&path) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("onnx-nodes: {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&model.summary()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("onnx-nodes: failed to serialize summary: {e}");
            ExitCode::FAILURE
        }
    }
}
