use thiserror::Error;

/// Failures while reading an ONNX model file.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("truncated message: needed {needed} more byte(s) at offset {offset}")]
    Truncated { offset: usize, needed: usize },

    #[error("varint at offset {offset} exceeds 10 bytes")]
    InvalidVarint { offset: usize },

    #[error("unsupported wire type {wire_type} at offset {offset}")]
    UnsupportedWireType { wire_type: u8, offset: usize },

    #[error("string field at offset {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },

    #[error("model has no graph")]
    MissingGraph,
}
