use crate::{math::matrix::Matrix, layers::dense::Layer};
use crate::optim::optimizer::Optimizer;

/// Moment buffers for one layer, allocated on first step.
struct Moments {
    /// Update count for this layer (drives bias correction).
    t: u64,
    m_weights: Matrix,
    m_biases: Matrix,
    v_weights: Matrix,
    v_biases: Matrix,
}

/// Adam (adaptive moment estimation).
///
/// Keeps exponentially decayed first and second moment estimates of the
/// gradients per layer and applies the bias-corrected update
///   lr_t = lr · sqrt(1 - β₂ᵗ) / (1 - β₁ᵗ).
pub struct Adam {
    pub learning_rate: f64,
    beta1: f64,
    beta2: f64,
    epsilon: f64,
    moments: Vec<Option<Moments>>,
}

impl Adam {
    pub fn new(learning_rate: f64, beta1: f64, beta2: f64, epsilon: f64) -> Adam {
        Adam {
            learning_rate,
            beta1,
            beta2,
            epsilon,
            moments: Vec::new(),
        }
    }

    /// Standard hyperparameters: β₁ = 0.9, β₂ = 0.999, ε = 1e-8.
    pub fn default_params(learning_rate: f64) -> Adam {
        Adam::new(learning_rate, 0.9, 0.999, 1e-8)
    }

    /// Updates one (moment1, moment2) pair in place and returns the scaled
    /// step to subtract from the parameters.
    fn update(&self, moment1: &mut Matrix, moment2: &mut Matrix, grad: &Matrix, lr_t: f64) -> Matrix {
        // m ← β₁m + (1-β₁)g ;  v ← β₂v + (1-β₂)g²
        let mut step = Matrix::zeros(grad.rows, grad.cols);
        for i in 0..grad.rows {
            for j in 0..grad.cols {
                let g = grad.get(i, j);
                let m = self.beta1 * moment1.get(i, j) + (1.0 - self.beta1) * g;
                let v = self.beta2 * moment2.get(i, j) + (1.0 - self.beta2) * g * g;
                moment1.set(i, j, m);
                moment2.set(i, j, v);
                step.set(i, j, lr_t * m / (v.sqrt() + self.epsilon));
            }
        }
        step
    }
}

impl Optimizer for Adam {
    fn step(&mut self, layer_index: usize, layer: &mut Layer, weights_grad: Matrix, biases_grad: Matrix) {
        while self.moments.len() <= layer_index {
            self.moments.push(None);
        }

        let mut slot = self.moments[layer_index].take().unwrap_or_else(|| Moments {
            t: 0,
            m_weights: Matrix::zeros(weights_grad.rows, weights_grad.cols),
            m_biases: Matrix::zeros(biases_grad.rows, biases_grad.cols),
            v_weights: Matrix::zeros(weights_grad.rows, weights_grad.cols),
            v_biases: Matrix::zeros(biases_grad.rows, biases_grad.cols),
        });

        slot.t += 1;

        // Bias-corrected learning rate for step t.
        let t = slot.t as i32;
        let lr_t = self.learning_rate
            * ((1.0 - self.beta2.powi(t)).sqrt() / (1.0 - self.beta1.powi(t)));

        let w_step = self.update(&mut slot.m_weights, &mut slot.v_weights, &weights_grad, lr_t);
        let b_step = self.update(&mut slot.m_biases, &mut slot.v_biases, &biases_grad, lr_t);

        self.moments[layer_index] = Some(slot);

        // apply_gradients scales by lr; the Adam step already carries lr_t.
        layer.apply_gradients(w_step, b_step, 1.0);
    }
}
