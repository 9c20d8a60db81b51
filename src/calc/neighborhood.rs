//! Gaussian neighborhood field centered on the best matching unit.

use crate::data::Matrix;

/// Computes the separable 2-D Gaussian learning field for a BMU at
/// `(bmu_x, bmu_y)` on the lattice spanned by `neigx` and `neigy`.
///
/// With `d = 2 * pi * sigma^2`, the field is the outer product of
/// `ax[i] = exp(-(neigx[i] - bmu_x)^2 / d)` and the analogous `ay`,
/// scaled by the (decayed) learning rate. Units far from the BMU
/// receive a near-zero update magnitude.
pub fn gaussian_field(
    neigx: &[f64],
    neigy: &[f64],
    bmu_x: usize,
    bmu_y: usize,
    sigma: f64,
    learning_rate: f64,
) -> Matrix<f64> {
    let d = 2.0 * std::f64::consts::PI * sigma * sigma;

    let ax: Vec<f64> = neigx
        .iter()
        .map(|v| (-(v - bmu_x as f64).powi(2) / d).exp())
        .collect();
    let ay: Vec<f64> = neigy
        .iter()
        .map(|v| (-(v - bmu_y as f64).powi(2) / d).exp())
        .collect();

    let mut field = Matrix::filled(neigx.len(), neigy.len(), 0.0);
    for (i, vx) in ax.iter().enumerate() {
        for (j, vy) in ay.iter().enumerate() {
            field.set(i, j, vx * vy * learning_rate);
        }
    }
    field
}

#[cfg(test)]
mod test {
    use crate::calc::neighborhood::gaussian_field;

    fn lattice(len: usize) -> Vec<f64> {
        (0..len).map(|v| v as f64).collect()
    }

    #[test]
    fn field_shape() {
        let field = gaussian_field(&lattice(4), &lattice(3), 1, 1, 1.0, 1.0);
        assert_eq!(field.dims(), (4, 3));
    }

    #[test]
    fn peak_at_bmu() {
        let rate = 0.5;
        let field = gaussian_field(&lattice(5), &lattice(5), 2, 3, 1.0, rate);

        assert!((field.get(2, 3) - rate).abs() < std::f64::EPSILON);
        for i in 0..5 {
            for j in 0..5 {
                if (i, j) != (2, 3) {
                    assert!(field.get(i, j) < field.get(2, 3));
                }
            }
        }
    }

    #[test]
    fn decays_with_lattice_distance() {
        let field = gaussian_field(&lattice(10), &lattice(10), 0, 0, 1.0, 1.0);
        assert!(field.get(9, 9) < &1e-6);
        assert!(field.get(1, 0) > field.get(2, 0));
    }
}
