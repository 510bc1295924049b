use std::fmt;

use tx_crn::CrnError;

#[derive(Debug, Clone, PartialEq)]
pub enum MechanismError {
    /// The enzyme argument has a shape this role does not accept.
    InvalidEnzyme(&'static str, &'static str),  // enzyme role, expected shapes
    /// A resolvable enzyme reference produced no species.
    UnresolvedEnzyme(&'static str),             // enzyme role
    /// Copy-mode catalysis with no explicit and no derivable product.
    MissingProduct(String),                     // mechanism name
    /// A multi-valued rate parameter with the wrong number of values.
    RateArity(&'static str, usize, usize),      // parameter name, expected, got
    /// A rate constant outside [0, inf).
    InvalidRate(&'static str, f64),             // parameter name, offending value
    Crn(CrnError),
}

impl fmt::Display for MechanismError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MechanismError::InvalidEnzyme(role, expected) => {
                write!(f, "'{}' parameter must be {}", role, expected)
            }
            MechanismError::UnresolvedEnzyme(role) => {
                write!(f, "'{}' reference did not resolve to a species", role)
            }
            MechanismError::MissingProduct(name) => {
                write!(f, "Mechanism '{}' regenerates its substrate and \
                    requires a product species", name)
            }
            MechanismError::RateArity(param, expected, got) => {
                write!(f, "{} must contain {} value(s), got {}", param, expected, got)
            }
            MechanismError::InvalidRate(param, value) => {
                write!(f, "Rate constant {} must be finite and non-negative, got {}",
                    param, value)
            }
            MechanismError::Crn(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for MechanismError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MechanismError::Crn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CrnError> for MechanismError {
    fn from(e: CrnError) -> Self {
        MechanismError::Crn(e)
    }
}

pub(crate) fn check_rate(param: &'static str, value: f64) -> Result<(), MechanismError> {
    if !value.is_finite() || value < 0. {
        return Err(MechanismError::InvalidRate(param, value));
    }
    Ok(())
}
