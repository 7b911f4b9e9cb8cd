use stellar::StellarError;
use supernova::RemnantError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EquilibriumError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquilibriumError {
    #[error("stellar model error: {0}")]
    Stellar(#[from] StellarError),

    #[error("remnant model error: {0}")]
    Remnant(#[from] RemnantError),

    /// Bounds are not finite, not positive, or not increasing
    #[error("invalid bracket [{lower}, {upper}] AU: need finite 0 < lower < upper")]
    InvalidBracket { lower: f64, upper: f64 },

    /// Wind pressure minus remnant pressure has the same sign at both ends
    #[error(
        "no pressure balance in [{lower}, {upper}] AU: wind {wind_lower:e} Pa to {wind_upper:e} Pa, remnant {remnant:e} Pa"
    )]
    RootBracket {
        lower: f64,
        upper: f64,
        wind_lower: f64,
        wind_upper: f64,
        remnant: f64,
    },

    #[error(
        "no convergence after {iterations} iterations in [{lower}, {upper}] AU (residual {residual:e} Pa)"
    )]
    Convergence {
        iterations: usize,
        lower: f64,
        upper: f64,
        residual: f64,
    },
}
