//! Brent's method for a root of a continuous function on a bracket.
//!
//! Combines bisection, the secant step and inverse quadratic interpolation.
//! Interpolated steps are only accepted while they shrink the bracket fast
//! enough; otherwise the search falls back to bisection, so convergence is
//! guaranteed once the bracket holds a sign change.
//!
//! # References
//! - Brent, R. P. (1973). Algorithms for Minimization without Derivatives,
//!   chapter 4.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stopping rule: the bracket half-width drops below
/// `(x_tolerance + relative_tolerance·|x|) / 2`, or f(x) is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tolerance {
    pub x_tolerance: f64,
    pub relative_tolerance: f64,
    pub max_iterations: usize,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            x_tolerance: 2e-12,
            relative_tolerance: 4.0 * f64::EPSILON,
            max_iterations: 100,
        }
    }
}

/// A converged root.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Root {
    pub root: f64,
    pub iterations: usize,
    pub function_calls: usize,
    /// f(root)
    pub residual: f64,
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RootFindError {
    #[error("f({lower}) = {f_lower:e} and f({upper}) = {f_upper:e} have the same sign")]
    NoSignChange {
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },

    #[error("no convergence after {iterations} iterations (last estimate {estimate}, f = {residual:e})")]
    MaxIterations {
        iterations: usize,
        estimate: f64,
        residual: f64,
    },
}

/// Finds a root of `f` between `lower` and `upper`.
///
/// `f(lower)` and `f(upper)` must differ in sign unless one of them is zero.
///
/// # Examples
/// ```
/// use standoff::{Tolerance, brent};
///
/// let root = brent(|x| x * x - 2.0, 0.0, 2.0, &Tolerance::default()).unwrap();
/// assert!((root.root - 2f64.sqrt()).abs() < 1e-11);
/// ```
pub fn brent<F>(mut f: F, lower: f64, upper: f64, tolerance: &Tolerance) -> Result<Root, RootFindError>
where
    F: FnMut(f64) -> f64,
{
    let mut x_pre = lower;
    let mut x_cur = upper;
    let mut f_pre = f(x_pre);
    let mut f_cur = f(x_cur);
    let mut function_calls = 2;

    if f_pre == 0.0 {
        return Ok(Root { root: x_pre, iterations: 0, function_calls, residual: f_pre });
    }
    if f_cur == 0.0 {
        return Ok(Root { root: x_cur, iterations: 0, function_calls, residual: f_cur });
    }
    if f_pre.signum() == f_cur.signum() || f_pre.is_nan() || f_cur.is_nan() {
        return Err(RootFindError::NoSignChange {
            lower,
            upper,
            f_lower: f_pre,
            f_upper: f_cur,
        });
    }

    // x_blk is the contrapoint: f(x_blk) and f(x_cur) always differ in sign
    let mut x_blk = 0.0;
    let mut f_blk = 0.0;
    let mut s_pre = 0.0;
    let mut s_cur = 0.0;

    for iteration in 1..=tolerance.max_iterations {
        if f_pre != 0.0 && f_cur != 0.0 && f_pre.signum() != f_cur.signum() {
            x_blk = x_pre;
            f_blk = f_pre;
            s_pre = x_cur - x_pre;
            s_cur = s_pre;
        }
        if f_blk.abs() < f_cur.abs() {
            x_pre = x_cur;
            x_cur = x_blk;
            x_blk = x_pre;

            f_pre = f_cur;
            f_cur = f_blk;
            f_blk = f_pre;
        }

        let delta = (tolerance.x_tolerance + tolerance.relative_tolerance * x_cur.abs()) / 2.0;
        let s_bis = (x_blk - x_cur) / 2.0;
        log::trace!("brent iteration {}: x = {}, f = {:e}, half-width = {:e}", iteration, x_cur, f_cur, s_bis.abs());

        if f_cur == 0.0 || s_bis.abs() < delta {
            return Ok(Root {
                root: x_cur,
                iterations: iteration,
                function_calls,
                residual: f_cur,
            });
        }

        if s_pre.abs() > delta && f_cur.abs() < f_pre.abs() {
            let s_try = if x_pre == x_blk {
                // secant
                -f_cur * (x_cur - x_pre) / (f_cur - f_pre)
            } else {
                // inverse quadratic interpolation
                let d_pre = (f_pre - f_cur) / (x_pre - x_cur);
                let d_blk = (f_blk - f_cur) / (x_blk - x_cur);
                -f_cur * (f_blk * d_blk - f_pre * d_pre) / (d_blk * d_pre * (f_blk - f_pre))
            };
            if 2.0 * s_try.abs() < s_pre.abs().min(3.0 * s_bis.abs() - delta) {
                s_pre = s_cur;
                s_cur = s_try;
            } else {
                s_pre = s_bis;
                s_cur = s_bis;
            }
        } else {
            s_pre = s_bis;
            s_cur = s_bis;
        }

        x_pre = x_cur;
        f_pre = f_cur;
        if s_cur.abs() > delta {
            x_cur += s_cur;
        } else {
            x_cur += if s_bis > 0.0 { delta } else { -delta };
        }
        f_cur = f(x_cur);
        function_calls += 1;
    }

    Err(RootFindError::MaxIterations {
        iterations: tolerance.max_iterations,
        estimate: x_cur,
        residual: f_cur,
    })
}
