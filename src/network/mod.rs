pub mod manifest;
pub mod network;

pub use manifest::ModelManifest;
pub use network::Network;
