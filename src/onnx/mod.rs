//! ONNX model inspection.
//!
//! A lightweight, protobuf-free reader for ONNX model files. Only the fields
//! needed to list a model's computation-graph nodes are decoded: the graph
//! name, the model domain, and each node's name and operator type. Attribute
//! values and weight tensors are deliberately not extracted.

pub mod error;
pub mod wire;
pub mod model;
pub mod summary;

pub use error::ParseError;
pub use model::{OnnxModel, OnnxGraph, OnnxNode, parse_bytes, parse_file};
pub use summary::{GraphSummary, LayerSummary};
