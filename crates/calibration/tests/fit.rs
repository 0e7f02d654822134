use approx::assert_relative_eq;
use checkdam_calibration::{CalibrationError, CalibrationPairs, PolynomialSpec};

fn reference_pairs() -> CalibrationPairs {
    CalibrationPairs::new(
        vec![2036.0, 2458.0, 3025.0, 4078.0, 5156.0, 5874.0, 6198.0],
        vec![10.0, 40.0, 100.0, 160.0, 225.0, 275.0, 300.0],
    )
    .unwrap()
}

#[test]
fn sensor_line_on_reference_pairs() {
    let model = PolynomialSpec::new(1).fit(&reference_pairs()).unwrap();
    assert_eq!(model.degree(), 1);
    assert_eq!(model.coefficients().len(), 2);
    assert!(model.r_squared() > 0.95);
    assert_relative_eq!(model.r_squared(), 0.99520, epsilon = 1e-4);
    assert_relative_eq!(model.coefficients()[0], 0.067825, epsilon = 1e-5);
    assert_relative_eq!(model.coefficients()[1], -120.721, epsilon = 1e-2);
}

#[test]
fn reference_domain() {
    let model = PolynomialSpec::new(1).fit(&reference_pairs()).unwrap();
    assert_eq!(model.domain().min(), 2036.0);
    assert_eq!(model.domain().max(), 6198.0);
    assert!(model.contains(4000.0));
    assert!(!model.contains(7000.0));
}

#[test]
fn exact_quadratic_is_recovered() {
    // area = 1200 z^2 + 350 z + 40 over a typical stage range
    let z: Vec<f64> = (0..12).map(|i| 0.25 * f64::from(i)).collect();
    let area: Vec<f64> = z.iter().map(|&z| 1200.0 * z * z + 350.0 * z + 40.0).collect();
    let pairs = CalibrationPairs::new(z, area).unwrap();

    let model = PolynomialSpec::new(2).fit(&pairs).unwrap();
    let c = model.coefficients();
    assert_relative_eq!(c[0], 1200.0, epsilon = 1e-6);
    assert_relative_eq!(c[1], 350.0, epsilon = 1e-6);
    assert_relative_eq!(c[2], 40.0, epsilon = 1e-6);
    assert_relative_eq!(model.r_squared(), 1.0, epsilon = 1e-12);
}

#[test]
fn higher_degree_never_lowers_r_squared() {
    let pairs = reference_pairs();
    let r1 = PolynomialSpec::new(1).fit(&pairs).unwrap().r_squared();
    let r2 = PolynomialSpec::new(2).fit(&pairs).unwrap().r_squared();
    assert!(r2 >= r1 - 1e-12);
}

#[test]
fn n_equal_to_degree_is_rejected() {
    let pairs = CalibrationPairs::new(vec![1.0, 2.0, 3.0], vec![1.0, 4.0, 9.0]).unwrap();
    let err = PolynomialSpec::new(3).fit(&pairs).unwrap_err();
    assert_eq!(err, CalibrationError::InsufficientPoints { n: 3, degree: 3 });
}

#[test]
fn refit_is_identical() {
    let pairs = reference_pairs();
    let a = PolynomialSpec::new(2).fit(&pairs).unwrap();
    let b = PolynomialSpec::new(2).fit(&pairs).unwrap();
    assert_eq!(a, b);
}
