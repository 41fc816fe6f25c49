use crate::loss::loss_type::LossType;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`     — total number of full passes over the training data
/// - `batch_size` — samples per mini-batch; use `1` for online gradient descent
/// - `loss_type`  — which loss function to use (`Mse` or `BinaryCrossEntropy`)
/// - `log_every`  — if `Some(n)`, print a one-line progress summary every n
///                  epochs (and for the final epoch); `None` trains silently
pub struct TrainConfig {
    pub epochs: usize,
    pub batch_size: usize,
    pub loss_type: LossType,
    pub log_every: Option<usize>,
}

impl TrainConfig {
    /// Creates a silent `TrainConfig`.
    pub fn new(epochs: usize, batch_size: usize, loss_type: LossType) -> Self {
        TrainConfig {
            epochs,
            batch_size,
            loss_type,
            log_every: None,
        }
    }
}
