use thiserror::Error;

pub type Result<T> = std::result::Result<T, RemnantError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RemnantError {
    #[error("{quantity} = {value} is outside the valid domain ({requirement})")]
    Domain {
        quantity: &'static str,
        value: f64,
        requirement: &'static str,
    },
}

pub(crate) fn require_positive(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RemnantError::Domain {
            quantity,
            value,
            requirement: "must be finite and > 0",
        })
    }
}
