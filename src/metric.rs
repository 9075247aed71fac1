/// Fraction of positions where `predictions` and `targets` agree.
/// NaN when there is nothing to compare.
pub fn accuracy(predictions: &[u8], targets: &[u8]) -> f64 {
    if predictions.is_empty() || predictions.len() != targets.len() {
        return f64::NAN;
    }
    let correct = predictions.iter().zip(targets).filter(|(p, t)| p == t).count();
    correct as f64 / predictions.len() as f64
}
