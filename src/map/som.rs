//! SOM core type: map state, BMU search, weight updates, training and assignment.

use crate::calc::decay::decay;
use crate::calc::metric;
use crate::calc::neighborhood::gaussian_field;
use crate::data::Matrix;
use crate::{ParseEnumError, SomError};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Instant;

/// Creates a deterministic random-number generator from a 64-bit seed.
///
/// The generator is handed to [`Som::new`](struct.Som.html#method.new) by the
/// caller; there is no process-global random state anywhere in the crate.
pub fn seeded_rng(seed: u64) -> StdRng {
    let mut bytes = [0_u8; 32];
    bytes[..8].copy_from_slice(&seed.to_le_bytes());
    StdRng::from_seed(bytes)
}

/// Weight initialization scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightInit {
    /// Every weight starts at `0.0`.
    Zero,
    /// Every weight drawn independently from `[0, 1)`.
    Uniform,
}

impl FromStr for WeightInit {
    type Err = ParseEnumError;
    /// Parse a string to a `WeightInit`.
    ///
    /// Accepts `"zero" | "uniform"`.
    fn from_str(str: &str) -> Result<Self, Self::Err> {
        match str {
            "zero" => Ok(WeightInit::Zero),
            "uniform" => Ok(WeightInit::Uniform),
            _ => Err(ParseEnumError(format!(
                "Not an initialization scheme: {}. Must be one of (zero|uniform)",
                str
            ))),
        }
    }
}

/// SOM core type.
///
/// Holds the grid dimensions, one `x by y` weight plane per feature
/// (plane-major storage), the fixed initial decay-schedule parameters,
/// and the precomputed lattice coordinate vectors.
pub struct Som {
    x: usize,
    y: usize,
    n: usize,
    weights: Vec<Matrix<f64>>,
    sigma: f64,
    learning_rate: f64,
    neigx: Vec<f64>,
    neigy: Vec<f64>,
}

impl Som {
    /// Creates a new SOM with an `x by y` grid of `n`-dimensional prototypes.
    ///
    /// Weights are filled according to `init`, drawing from the supplied
    /// random-number generator. The generator is owned by the caller so
    /// repeated runs in one process stay isolated and reproducible.
    pub fn new(
        x: usize,
        y: usize,
        n: usize,
        init: WeightInit,
        rng: &mut impl Rng,
    ) -> Result<Self, SomError> {
        if x == 0 || y == 0 || n == 0 {
            return Err(SomError(format!(
                "Invalid map configuration: x, y and n must be positive (got {}x{}, n = {})",
                x, y, n
            )));
        }

        let weights = (0..n)
            .map(|_| {
                let mut plane = Matrix::filled(x, y, 0.0);
                if init == WeightInit::Uniform {
                    for row in plane.iter_rows_mut() {
                        for v in row.iter_mut() {
                            *v = rng.gen_range(0.0, 1.0);
                        }
                    }
                }
                plane
            })
            .collect();

        Ok(Som {
            x,
            y,
            n,
            weights,
            sigma: 1.0,
            learning_rate: 1.0,
            neigx: (0..x).map(|v| v as f64).collect(),
            neigy: (0..y).map(|v| v as f64).collect(),
        })
    }

    /// Grid width.
    pub fn x(&self) -> usize {
        self.x
    }
    /// Grid height.
    pub fn y(&self) -> usize {
        self.y
    }
    /// Feature dimensionality.
    pub fn n(&self) -> usize {
        self.n
    }
    /// The per-feature weight planes, each of shape `x by y`.
    pub fn weights(&self) -> &[Matrix<f64>] {
        &self.weights
    }

    /// Finds the best matching unit for a data row: the grid coordinate
    /// whose prototype has the smallest squared-Euclidean distance to the row.
    ///
    /// Scans the full lattice, `i` outer and `j` inner; on ties, the first
    /// unit in scan order wins. `O(x * y * n)`.
    pub fn best_matching_unit(&self, row: &[f64]) -> (usize, usize) {
        assert_eq!(row.len(), self.n);

        let mut best = std::f64::INFINITY;
        let (mut bmu_x, mut bmu_y) = (0, 0);
        for i in 0..self.x {
            for j in 0..self.y {
                let mut dist = 0.0;
                for k in 0..self.n {
                    dist += metric::sq_distance(*self.weights[k].get(i, j), row[k]);
                }
                if dist < best {
                    best = dist;
                    bmu_x = i;
                    bmu_y = j;
                }
            }
        }
        (bmu_x, bmu_y)
    }

    /// Applies a single training step for one data row.
    ///
    /// Finds the BMU, decays `sigma` and the learning rate for step `t`
    /// (always from the initial values, never compounding), computes the
    /// Gaussian neighborhood field and pulls every prototype toward the row
    /// proportionally to the field. Only the weight planes mutate.
    pub fn update_step(&mut self, row: &[f64], t: u32, max_iter: u32) {
        let (bmu_x, bmu_y) = self.best_matching_unit(row);
        let sig = decay(self.sigma, t, max_iter);
        let rate = decay(self.learning_rate, t, max_iter);
        let field = gaussian_field(&self.neigx, &self.neigy, bmu_x, bmu_y, sig, rate);

        for i in 0..self.x {
            for j in 0..self.y {
                let f = *field.get(i, j);
                for k in 0..self.n {
                    let w = *self.weights[k].get(i, j);
                    self.weights[k].set(i, j, w + (row[k] - w) * f);
                }
            }
        }
    }

    /// Trains the SOM for exactly `max_iter` steps, cycling through the
    /// input rows in order. There is no convergence check; the iteration
    /// count is the sole termination condition.
    pub fn train(
        &mut self,
        data: &Matrix<f64>,
        max_iter: u32,
        verbose: bool,
    ) -> Result<(), SomError> {
        if max_iter == 0 {
            return Err(SomError("max_iter must be positive".to_string()));
        }
        if data.nrows() == 0 {
            return Err(SomError("Training data has no rows".to_string()));
        }
        if data.ncols() != self.n {
            return Err(SomError(format!(
                "Dimension mismatch: map expects {} features, data has {} columns",
                self.n,
                data.ncols()
            )));
        }

        let start = Instant::now();
        let chunk = max_iter / 10;
        for t in 0..max_iter {
            // for small max_iter the chunk degenerates to 0; report only at t = 0
            let report = if chunk == 0 { t == 0 } else { t % chunk == 0 };
            if verbose && report {
                let secs = start.elapsed().as_secs_f64();
                let rate = if secs > 0.0 { t as f64 / secs } else { 0.0 };
                println!(
                    "iteration {} / {} - {} iterations / sec",
                    t,
                    max_iter,
                    rate.round()
                );
            }

            let index = (t as usize) % data.nrows();
            self.update_step(data.get_row(index), t, max_iter);
        }
        if verbose {
            println!("training took {} seconds", start.elapsed().as_secs_f64());
        }
        Ok(())
    }

    /// Maps every input row to the linear index of its BMU on the trained
    /// grid, `bmu_x + bmu_y * x`. All labels lie in `[0, x * y)`.
    pub fn assign(&self, data: &Matrix<f64>) -> Vec<usize> {
        data.iter_rows()
            .map(|row| {
                let (bmu_x, bmu_y) = self.best_matching_unit(row);
                bmu_x + bmu_y * self.x
            })
            .collect()
    }
}
