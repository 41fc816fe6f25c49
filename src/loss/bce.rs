/// Binary cross-entropy, for sigmoid outputs against 0/1 targets.
pub struct BceLoss;

/// Predictions are clamped into [CLAMP, 1 - CLAMP] before taking logs so a
/// saturated sigmoid cannot produce an infinite loss or gradient.
const CLAMP: f64 = 1e-12;

impl BceLoss {
    /// L = -(1/n) Σ (yᵢ·ln pᵢ + (1-yᵢ)·ln(1-pᵢ))
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let sum: f64 = predicted.iter().zip(expected)
            .map(|(p, y)| {
                let p = p.clamp(CLAMP, 1.0 - CLAMP);
                y * p.ln() + (1.0 - y) * (1.0 - p).ln()
            })
            .sum();
        -sum / predicted.len() as f64
    }

    /// ∂L/∂pᵢ = (pᵢ - yᵢ) / (pᵢ·(1-pᵢ)), with the same clamp applied.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected)
            .map(|(p, y)| {
                let p = p.clamp(CLAMP, 1.0 - CLAMP);
                (p - y) / (p * (1.0 - p))
            })
            .collect()
    }
}
