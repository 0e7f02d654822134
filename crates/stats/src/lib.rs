//! Descriptive statistics helpers shared by the resampling and calibration crates.

/// Arithmetic mean of a slice. Returns `None` if empty.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let sum: f64 = data.iter().sum();
    Some(sum / data.len() as f64)
}

/// Sum of squared deviations from the mean (`SStot`).
/// Returns 0.0 if empty.
pub fn total_sum_of_squares(data: &[f64]) -> f64 {
    let Some(m) = mean(data) else {
        return 0.0;
    };
    data.iter().map(|&y| (y - m) * (y - m)).sum()
}

/// Sum of squared residuals between observations and predictions (`SSres`).
///
/// Pairs beyond the shorter slice are ignored.
pub fn residual_sum_of_squares(observed: &[f64], predicted: &[f64]) -> f64 {
    observed
        .iter()
        .zip(predicted)
        .map(|(&y, &yhat)| (y - yhat) * (y - yhat))
        .sum()
}

/// Coefficient of determination `R² = 1 - SSres / SStot`.
///
/// Descriptive only: scored against the same observations the predictions
/// were fitted to. Returns `None` when `SStot == 0` (constant observations),
/// where R² is undefined.
pub fn coefficient_of_determination(observed: &[f64], predicted: &[f64]) -> Option<f64> {
    let ss_tot = total_sum_of_squares(observed);
    if ss_tot == 0.0 {
        return None;
    }
    Some(1.0 - residual_sum_of_squares(observed, predicted) / ss_tot)
}
