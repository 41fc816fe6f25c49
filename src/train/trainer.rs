use crate::{
    math::matrix::Matrix,
    network::network::Network,
    loss::mse::MseLoss,
    optim::optimizer::Optimizer,
};

/// One online (sample-at-a-time) pass over the data with MSE loss.
/// Returns the mean loss. Kept as the minimal training entry point;
/// `train_loop` is the configurable mini-batch version.
pub fn train_network(
    network: &mut Network,
    inputs: &[Vec<f64>],
    expected_outputs: &[Vec<f64>],
    optimizer: &mut dyn Optimizer,
) -> f64 {
    let mut total_loss = 0.0;

    for (input, expected) in inputs.iter().zip(expected_outputs.iter()) {
        // Forward pass
        let output = network.forward(input.clone());

        // Accumulate loss
        total_loss += MseLoss::loss(&output, expected);

        // Initial delta: ∂L/∂a_output (error in output activation space)
        let error = MseLoss::derivative(&output, expected);
        let mut delta = Matrix::row_vector(error);

        // Backward pass
        for i in (0..network.layers.len()).rev() {
            let input_for_layer = if i == 0 {
                Matrix::row_vector(input.clone())
            } else {
                network.layers[i - 1].neurons.clone()
            };

            // Borrow-checker ordering: compute gradients → compute next delta → apply step
            let (w_grad, b_grad) = network.layers[i].compute_gradients(delta.clone(), &input_for_layer);

            if i > 0 {
                delta = b_grad.clone() * network.layers[i].weights.transpose();
            }

            optimizer.step(i, &mut network.layers[i], w_grad, b_grad);
        }
    }

    total_loss / inputs.len() as f64
}
