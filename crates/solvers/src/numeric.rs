/// Returns the dot product of two vectors.
pub(crate) fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Returns the point `base + alpha * direction`.
pub(crate) fn along<const N: usize>(base: &[f64; N], direction: &[f64; N], alpha: f64) -> [f64; N] {
    std::array::from_fn(|i| base[i] + alpha * direction[i])
}

/// Returns true if every component is finite.
pub(crate) fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}
