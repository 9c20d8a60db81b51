//! Distance metrics.

/// Squared difference of two scalars. Building block for per-feature
/// accumulation over plane-major weight storage.
#[inline]
pub fn sq_distance(a: f64, b: f64) -> f64 {
    (a - b).powi(2)
}

/// Squared-Euclidean distance between two vectors.
pub fn sq_euclidean(from: &[f64], to: &[f64]) -> f64 {
    assert_eq!(from.len(), to.len());

    let mut sum = 0.0;
    for (a, b) in from.iter().zip(to) {
        sum += sq_distance(*a, *b);
    }
    sum
}

#[cfg(test)]
mod test {
    use crate::calc::metric;

    #[test]
    fn sq_distance() {
        assert!((metric::sq_distance(1.0, 3.0) - 4.0).abs() < std::f64::EPSILON);
        assert!((metric::sq_distance(3.0, 1.0) - 4.0).abs() < std::f64::EPSILON);
    }

    #[test]
    fn distance() {
        let a = [0.0, 0.0, 0.0];
        let b = [2.0, 2.0, 2.0];
        let dist = metric::sq_euclidean(&a, &b);
        assert!((dist - 12.0).abs() < std::f64::EPSILON);
    }
}
