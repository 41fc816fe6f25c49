use forge_nn::onnx::{parse_bytes, parse_file, ParseError};

// ---------------------------------------------------------------------------
// Wire-format encoding helpers (test-side mirror of the reader)
// ---------------------------------------------------------------------------

fn push_varint(out: &mut Vec<u8>, mut v: u64) {
    loop {
        let b = (v & 0x7f) as u8;
        v >>= 7;
        if v == 0 {
            out.push(b);
            break;
        }
        out.push(b | 0x80);
    }
}

fn push_varint_field(out: &mut Vec<u8>, field: u32, v: u64) {
    push_varint(out, u64::from(field) << 3);
    push_varint(out, v);
}

fn push_len_field(out: &mut Vec<u8>, field: u32, payload: &[u8]) {
    push_varint(out, (u64::from(field) << 3) | 2);
    push_varint(out, payload.len() as u64);
    out.extend_from_slice(payload);
}

fn encode_node(name: &str, op_type: &str) -> Vec<u8> {
    let mut node = Vec::new();
    push_len_field(&mut node, 3, name.as_bytes());
    push_len_field(&mut node, 4, op_type.as_bytes());
    node
}

/// A ModelProto with ir_version, producer_name, domain, and a graph holding
/// the given nodes.
fn encode_model(graph_name: &str, domain: &str, nodes: &[(&str, &str)]) -> Vec<u8> {
    let mut graph = Vec::new();
    for (name, op_type) in nodes {
        let node = encode_node(name, op_type);
        push_len_field(&mut graph, 1, &node);
    }
    push_len_field(&mut graph, 2, graph_name.as_bytes());

    let mut model = Vec::new();
    push_varint_field(&mut model, 1, 8); // ir_version
    push_len_field(&mut model, 2, b"forge-nn-test");
    push_len_field(&mut model, 4, domain.as_bytes());
    push_len_field(&mut model, 7, &graph);
    model
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn test_parse_minimal_model() {
    let bytes = encode_model(
        "demo_graph",
        "ai.forge.demo",
        &[("dense_1/MatMul", "MatMul"), ("dense_1/Relu", "Relu")],
    );

    let model = parse_bytes(&bytes).unwrap();
    assert_eq!(model.ir_version, 8);
    assert_eq!(model.producer_name, "forge-nn-test");
    assert_eq!(model.domain, "ai.forge.demo");
    assert_eq!(model.graph.name, "demo_graph");
    assert_eq!(model.graph.nodes.len(), 2);
    assert_eq!(model.graph.nodes[0].name, "dense_1/MatMul");
    assert_eq!(model.graph.nodes[0].op_type, "MatMul");
    assert_eq!(model.graph.nodes[1].op_type, "Relu");
}

#[test]
fn test_parse_skips_unknown_fields() {
    let mut bytes = encode_model("g", "", &[("n", "Add")]);
    // Trailing unknown varint field (number 63) must be ignored.
    push_varint_field(&mut bytes, 63, 12345);
    // Unknown length-delimited field too.
    push_len_field(&mut bytes, 14, b"metadata");

    let model = parse_bytes(&bytes).unwrap();
    assert_eq!(model.graph.nodes.len(), 1);
}

#[test]
fn test_parse_empty_graph() {
    let bytes = encode_model("empty", "", &[]);
    let model = parse_bytes(&bytes).unwrap();
    assert_eq!(model.graph.name, "empty");
    assert!(model.graph.nodes.is_empty());
}

#[test]
fn test_model_without_graph_fails() {
    let mut bytes = Vec::new();
    push_varint_field(&mut bytes, 1, 8);

    let err = parse_bytes(&bytes).unwrap_err();
    assert!(matches!(err, ParseError::MissingGraph));
}

#[test]
fn test_truncated_model_fails() {
    let bytes = encode_model("g", "", &[("n", "Add")]);
    let cut = &bytes[..bytes.len() - 3];
    assert!(parse_bytes(cut).is_err());
}

#[test]
fn test_parse_file_missing_path_is_io_error() {
    let err = parse_file("/nonexistent/model.onnx").unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}

// ---------------------------------------------------------------------------
// Summary JSON contract
// ---------------------------------------------------------------------------

#[test]
fn test_summary_json_shape() {
    let bytes = encode_model(
        "demo_graph",
        "ai.forge.demo",
        &[("dense_1/MatMul", "MatMul"), ("dense_1/Sigmoid", "Sigmoid")],
    );
    let model = parse_bytes(&bytes).unwrap();

    let json = serde_json::to_value(model.summary()).unwrap();
    assert_eq!(json["name"], "demo_graph");
    assert_eq!(json["type"], "ONNX");
    assert_eq!(json["architecture"], "ai.forge.demo");

    let layers = json["layers"].as_array().unwrap();
    assert_eq!(layers.len(), model.graph.nodes.len());
    assert_eq!(layers[0]["name"], "dense_1/MatMul");
    assert_eq!(layers[0]["type"], "MatMul");
    assert_eq!(layers[1]["type"], "Sigmoid");

    // Placeholders: parameters always {}, weights always null.
    for layer in layers {
        assert!(layer["parameters"].as_object().unwrap().is_empty());
        assert!(layer["weights"].is_null());
    }
}
