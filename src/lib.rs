pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod onnx;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::network::Network;
pub use network::manifest::ModelManifest;
pub use loss::{MseLoss, BceLoss};
pub use loss::loss_type::LossType;
pub use optim::{Optimizer, Sgd, Adam};
pub use train::{TrainConfig, EpochStats, train_loop, train_network};
pub use onnx::{OnnxModel, GraphSummary, ParseError};
