use serde::{Serialize, Deserialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::network::network::Network;

/// On-disk format identifier written into every manifest.
pub const MODEL_FORMAT: &str = "forge-nn/json";

/// Sidecar description written next to the weights when a model is saved as
/// a directory. Lets tooling recognize the artifact without deserializing
/// the full weight file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelManifest {
    /// Constant `"forge-nn/json"`.
    pub format: String,
    /// Human-readable model name (the directory's stem by convention).
    pub name: String,
    /// Neuron counts per layer, input to output.
    pub layer_sizes: Vec<usize>,
    /// Seconds since the Unix epoch at save time.
    pub created_unix: u64,
}

impl ModelManifest {
    pub fn describe(name: &str, network: &Network) -> ModelManifest {
        let created_unix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        ModelManifest {
            format: MODEL_FORMAT.to_string(),
            name: name.to_string(),
            layer_sizes: network.layers.iter().map(|l| l.size).collect(),
            created_unix,
        }
    }
}
