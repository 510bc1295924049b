use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CrnError {
    CoefficientMismatch(&'static str, usize, usize), // side, coefs given, species given
    InvalidRate(&'static str, f64),                  // parameter name and offending value
}

impl fmt::Display for CrnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrnError::CoefficientMismatch(side, coefs, species) => {
                write!(f, "{} coefficients ({}) do not match {} species ({})",
                    side, coefs, side, species)
            }
            CrnError::InvalidRate(param, value) => {
                write!(f, "Rate constant {} must be finite and non-negative, got {}",
                    param, value)
            }
        }
    }
}

impl std::error::Error for CrnError {}
