use forge_nn::{ActivationFunction, BceLoss, MseLoss};

#[test]
fn test_mse_values() {
    assert_eq!(MseLoss::loss(&[1.0, 2.0], &[1.0, 2.0]), 0.0);
    // mean((1-0)², (3-1)²) = (1 + 4) / 2
    assert_eq!(MseLoss::loss(&[1.0, 3.0], &[0.0, 1.0]), 2.5);
    assert_eq!(MseLoss::derivative(&[1.0, 3.0], &[0.0, 1.0]), vec![1.0, 2.0]);
}

#[test]
fn test_bce_at_half_is_ln2() {
    let loss = BceLoss::loss(&[0.5], &[1.0]);
    assert!((loss - std::f64::consts::LN_2).abs() < 1e-9);
}

#[test]
fn test_bce_confident_correct_is_near_zero() {
    let loss = BceLoss::loss(&[0.999999], &[1.0]);
    assert!(loss < 1e-5);
}

#[test]
fn test_bce_gradient_at_half() {
    // (0.5 - 1) / (0.5 · 0.5) = -2
    let grad = BceLoss::derivative(&[0.5], &[1.0]);
    assert!((grad[0] + 2.0).abs() < 1e-9);
}

#[test]
fn test_bce_is_finite_at_the_extremes() {
    // The epsilon clamp keeps log() finite even for saturated predictions.
    assert!(BceLoss::loss(&[0.0], &[1.0]).is_finite());
    assert!(BceLoss::loss(&[1.0], &[0.0]).is_finite());
    assert!(BceLoss::derivative(&[0.0], &[1.0])[0].is_finite());
}

#[test]
fn test_sigmoid_values() {
    let act = ActivationFunction::Sigmoid;
    assert!((act.function(0.0) - 0.5).abs() < 1e-12);
    assert!(act.function(10.0) > 0.999);
    assert!(act.function(-10.0) < 0.001);
    // σ'(0) = σ(0)(1 - σ(0)) = 0.25
    assert!((act.derivative(0.0) - 0.25).abs() < 1e-12);
}

#[test]
fn test_relu_values() {
    let act = ActivationFunction::ReLU;
    assert_eq!(act.function(-1.5), 0.0);
    assert_eq!(act.function(2.0), 2.0);
    assert_eq!(act.derivative(-1.5), 0.0);
    assert_eq!(act.derivative(2.0), 1.0);
}

#[test]
fn test_leaky_relu_slope() {
    let act = ActivationFunction::LeakyReLU { alpha: 0.1 };
    assert_eq!(act.function(-2.0), -0.2);
    assert_eq!(act.derivative(-2.0), 0.1);
    assert_eq!(act.derivative(3.0), 1.0);
}
