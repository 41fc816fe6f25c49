use serde::{Serialize, Deserialize};

/// Selects which loss function the training loop uses.
///
/// - `Mse`                — Mean-squared error; pair with Identity or Sigmoid output.
/// - `BinaryCrossEntropy` — Binary cross-entropy; pair with Sigmoid output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    Mse,
    BinaryCrossEntropy,
}
