use crate::{math::matrix::Matrix, layers::dense::Layer};

/// A weight-update rule applied per layer.
///
/// `layer_index` identifies the layer within its network so stateful
/// optimizers (Adam) can keep per-layer moment buffers; stateless ones
/// (plain SGD) ignore it.
pub trait Optimizer {
    fn step(&mut self, layer_index: usize, layer: &mut Layer, weights_grad: Matrix, biases_grad: Matrix);
}
