//! The decoded subset of an ONNX `ModelProto`.
//!
//! Field numbers follow the public `onnx.proto` schema:
//! - `ModelProto`: ir_version = 1, producer_name = 2, domain = 4, graph = 7
//! - `GraphProto`: node = 1, name = 2
//! - `NodeProto`:  name = 3, op_type = 4

use std::path::Path;

use crate::onnx::error::ParseError;
use crate::onnx::wire::{Reader, WireType};

/// One computation-graph node (name and operator type only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnnxNode {
    pub name: String,
    pub op_type: String,
}

/// The model's computation graph.
#[derive(Debug, Clone, Default)]
pub struct OnnxGraph {
    pub name: String,
    /// Nodes in file order (ONNX stores them topologically sorted).
    pub nodes: Vec<OnnxNode>,
}

/// The subset of `ModelProto` this crate decodes.
#[derive(Debug, Clone)]
pub struct OnnxModel {
    pub ir_version: i64,
    pub producer_name: String,
    pub domain: String,
    pub graph: OnnxGraph,
}

/// Reads and parses an ONNX model file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<OnnxModel, ParseError> {
    let bytes = std::fs::read(path)?;
    parse_bytes(&bytes)
}

/// Parses a serialized `ModelProto`. Fails with `MissingGraph` if the file
/// carries no graph field.
pub fn parse_bytes(bytes: &[u8]) -> Result<OnnxModel, ParseError> {
    let mut reader = Reader::new(bytes);

    let mut ir_version = 0i64;
    let mut producer_name = String::new();
    let mut domain = String::new();
    let mut graph = None;

    while !reader.is_at_end() {
        let (field, wire) = reader.field()?;
        match (field, wire) {
            (1, WireType::Varint) => ir_version = reader.varint()? as i64,
            (2, WireType::LengthDelimited) => producer_name = reader.string()?,
            (4, WireType::LengthDelimited) => domain = reader.string()?,
            (7, WireType::LengthDelimited) => graph = Some(parse_graph(reader.bytes()?)?),
            _ => reader.skip(wire)?,
        }
    }

    Ok(OnnxModel {
        ir_version,
        producer_name,
        domain,
        graph: graph.ok_or(ParseError::MissingGraph)?,
    })
}

fn parse_graph(bytes: &[u8]) -> Result<OnnxGraph, ParseError> {
    let mut reader = Reader::new(bytes);
    let mut graph = OnnxGraph::default();

    while !reader.is_at_end() {
        let (field, wire) = reader.field()?;
        match (field, wire) {
            (1, WireType::LengthDelimited) => graph.nodes.push(parse_node(reader.bytes()?)?),
            (2, WireType::LengthDelimited) => graph.name = reader.string()?,
            _ => reader.skip(wire)?,
        }
    }

    Ok(graph)
}

fn parse_node(bytes: &[u8]) -> Result<OnnxNode, ParseError> {
    let mut reader = Reader::new(bytes);
    let mut name = String::new();
    let mut op_type = String::new();

    while !reader.is_at_end() {
        let (field, wire) = reader.field()?;
        match (field, wire) {
            (3, WireType::LengthDelimited) => name = reader.string()?,
            (4, WireType::LengthDelimited) => op_type = reader.string()?,
            _ => reader.skip(wire)?,
        }
    }

    Ok(OnnxNode { name, op_type })
}
