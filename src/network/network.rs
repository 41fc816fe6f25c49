use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::{activation::activation::ActivationFunction, layers::dense::Layer};
use crate::network::manifest::ModelManifest;

/// File names used by the directory save format.
const MODEL_FILE: &str = "model.json";
const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from (size, input_size, activation) tuples.
    pub fn new(layer_specs: Vec<(usize, usize, ActivationFunction)>) -> Network {
        let layers = layer_specs.into_iter()
            .map(|(size, input_size, activation)| Layer::new(size, input_size, activation))
            .collect();
        Network { layers }
    }

    /// Forward pass; stores activations in each layer for backprop.
    pub fn forward(&mut self, input: Vec<f64>) -> Vec<f64> {
        let mut current = input;
        for layer in &mut self.layers {
            current = layer.feed_from(current);
        }
        current
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Saves the model as a directory: `<dir>/model.json` holds the full
    /// network (weights included), `<dir>/manifest.json` a `ModelManifest`
    /// describing it. Creates the directory if needed.
    pub fn save_dir<P: AsRef<Path>>(&self, dir: P) -> std::io::Result<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "model".to_string());

        let manifest = ModelManifest::describe(&name, self);
        let manifest_file = std::fs::File::create(dir.join(MANIFEST_FILE))?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(manifest_file), &manifest)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        let model_path = dir.join(MODEL_FILE);
        self.save_json(&model_path.to_string_lossy())
    }

    /// Loads a model previously written by `save_dir`.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> std::io::Result<Network> {
        let model_path = dir.as_ref().join(MODEL_FILE);
        Network::load_json(&model_path.to_string_lossy())
    }

    /// Reads just the manifest of a saved model directory.
    pub fn read_manifest<P: AsRef<Path>>(dir: P) -> std::io::Result<ModelManifest> {
        let file = std::fs::File::open(dir.as_ref().join(MANIFEST_FILE))?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
