/// Mean squared error, for regression-style targets.
pub struct MseLoss;

impl MseLoss {
    /// L = (1/n) Σ (pᵢ - yᵢ)²
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let sum: f64 = predicted.iter().zip(expected)
            .map(|(p, y)| {
                let diff = p - y;
                diff * diff
            })
            .sum();
        sum / predicted.len() as f64
    }

    /// ∂L/∂pᵢ = pᵢ - yᵢ. The constant factor is folded into the learning
    /// rate, as is conventional.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected).map(|(p, y)| p - y).collect()
    }
}
