//! Decay schedule for learning parameters.

/// Exponential decay of a learning parameter over the course of training.
///
/// Evaluates `initial * exp(-0.05 * (t / max_iter) * 100)`, reaching
/// `initial * exp(-5)` at `t == max_iter`. The schedule is a pure function
/// of `t`, always applied to the initial value rather than compounding
/// step over step.
pub fn decay(initial: f64, t: u32, max_iter: u32) -> f64 {
    initial * (-0.05 * (t as f64 / max_iter as f64) * 100.0).exp()
}
