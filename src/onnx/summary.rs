use serde::Serialize;
use serde_json::{Map, Value};

use crate::onnx::model::OnnxModel;

/// JSON document printed by the `onnx-nodes` tool.
///
/// Field order matters for readability of the dump: name, type,
/// architecture, then the node list.
#[derive(Debug, Serialize)]
pub struct GraphSummary {
    /// The graph's declared name.
    pub name: String,
    /// Constant `"ONNX"`.
    #[serde(rename = "type")]
    pub model_type: &'static str,
    /// The model's declared domain.
    pub architecture: String,
    /// One record per computation-graph node, in file order.
    pub layers: Vec<LayerSummary>,
}

#[derive(Debug, Serialize)]
pub struct LayerSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub op_type: String,
    /// Attribute extraction is out of scope; always empty.
    pub parameters: Map<String, Value>,
    /// Weight extraction is out of scope; always null.
    pub weights: Option<Value>,
}

impl OnnxModel {
    /// Flattens the decoded model into the dump document.
    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            name: self.graph.name.clone(),
            model_type: "ONNX",
            architecture: self.domain.clone(),
            layers: self.graph.nodes.iter()
                .map(|node| LayerSummary {
                    name: node.name.clone(),
                    op_type: node.op_type.clone(),
                    parameters: Map::new(),
                    weights: None,
                })
                .collect(),
        }
    }
}
