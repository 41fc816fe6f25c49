//! Build, train, save, reload, infer.
//!
//! Builds a 5 -> 10 (ReLU) -> 1 (Sigmoid) network, trains it on random
//! synthetic data with Adam + binary cross-entropy, saves it as a model
//! directory, loads it back, and runs one forward pass.

use rand::prelude::*;

use forge_nn::{ActivationFunction, Adam, LossType, Network, TrainConfig, train_loop};

const INPUT_SIZE: usize = 5;
const HIDDEN_SIZE: usize = 10;
const SAMPLES: usize = 100;
const EPOCHS: usize = 5;
const MODEL_DIR: &str = "trained_model";

fn main() -> std::io::Result<()> {
    let mut network = Network::new(vec![
        (HIDDEN_SIZE, INPUT_SIZE, ActivationFunction::ReLU),
        (1, HIDDEN_SIZE, ActivationFunction::Sigmoid),
    ]);

    // Synthetic data: uniform inputs, random 0/1 labels.
    let mut rng = rand::thread_rng();
    let inputs: Vec<Vec<f64>> = (0..SAMPLES)
        .map(|_| (0..INPUT_SIZE).map(|_| rng.gen::<f64>()).collect())
        .collect();
    let labels: Vec<Vec<f64>> = (0..SAMPLES)
        .map(|_| vec![if rng.gen_bool(0.5) { 1.0 } else { 0.0 }])
        .collect();

    println!("Training the model...");
    let mut optimizer = Adam::default_params(0.001);
    let config = TrainConfig {
        epochs: EPOCHS,
        batch_size: 10,
        loss_type: LossType::BinaryCrossEntropy,
        log_every: Some(1),
    };
    train_loop(&mut network, &inputs, &labels, &mut optimizer, &config);
    println!("Model training complete.");

    println!("Saving the model to: ./{MODEL_DIR}");
    network.save_dir(MODEL_DIR)?;
    println!("Model saved successfully.");

    println!("Loading the model from: ./{MODEL_DIR}");
    let mut loaded = Network::load_dir(MODEL_DIR)?;
    println!("Model loaded successfully.");

    let probe: Vec<f64> = (0..INPUT_SIZE).map(|_| rng.gen::<f64>()).collect();
    println!("Input for prediction: {probe:?}");
    let prediction = loaded.forward(probe);
    println!("Prediction from loaded model: {:.6}", prediction[0]);

    Ok(())
}
