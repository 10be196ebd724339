//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root finding with a bounded loop.
///
/// Iterates `x_{n+1} = x_n - f(x_n) / f'(x_n)` and stops as soon as
/// `|x_{n+1} - x_n| < tolerance`. After `max_iterations` steps without
/// meeting the tolerance it fails with [`MathError::ConvergenceFailed`].
///
/// The loop holds no state besides the current iterate, so identical inputs
/// always produce the identical root.
///
/// # Errors
///
/// - [`MathError::InvalidInput`] for a non-positive tolerance or a zero cap
/// - [`MathError::DivisionByZero`] when the derivative vanishes
/// - [`MathError::NonFinite`] when an iterate becomes NaN or infinite
/// - [`MathError::ConvergenceFailed`] when the cap is reached
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    if config.tolerance.is_nan() || config.tolerance <= 0.0 || config.max_iterations == 0 {
        return Err(MathError::invalid_input(format!(
            "tolerance {} and max_iterations {} must both be positive",
            config.tolerance, config.max_iterations
        )));
    }

    let mut x = initial_guess;

    for iteration in 1..=config.max_iterations {
        let fx = f(x);
        let dfx = df(x);

        if dfx == 0.0 {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        let next = x - fx / dfx;
        if !next.is_finite() {
            return Err(MathError::NonFinite {
                iteration,
                value: next,
            });
        }

        if (next - x).abs() < config.tolerance {
            log::debug!("newton converged in {iteration} iterations, root {next}");
            return Ok(SolverResult {
                root: next,
                iterations: iteration,
                residual: f(next),
            });
        }

        x = next;
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}
