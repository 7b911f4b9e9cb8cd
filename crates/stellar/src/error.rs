use thiserror::Error;

pub type Result<T> = std::result::Result<T, StellarError>;

/// Errors raised when a stellar quantity is requested outside the range
/// the fits are defined on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StellarError {
    /// A caller-supplied input is outside its physical domain
    #[error("{quantity} = {value} is outside the valid domain ({requirement})")]
    Domain {
        quantity: &'static str,
        value: f64,
        requirement: &'static str,
    },

    /// A fit produced a non-real value for this mass and metallicity
    #[error("{quantity} is not real-valued for M = {mass} M☉, Z = {metallicity}")]
    OutsideFit {
        quantity: &'static str,
        mass: f64,
        metallicity: f64,
    },
}

pub(crate) fn require_positive(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(StellarError::Domain {
            quantity,
            value,
            requirement: "must be finite and > 0",
        })
    }
}

pub(crate) fn require_non_negative(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(StellarError::Domain {
            quantity,
            value,
            requirement: "must be finite and >= 0",
        })
    }
}
