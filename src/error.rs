use std::fmt;

use crate::state::Symbol;

/// Errors that can occur when constructing or combining expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum AlgebraError {
    /// A value that is not a (finite) number was supplied where one is required.
    Construction(String),
    /// Two expressions over different variables were combined.
    DomainMismatch { left: Symbol, right: Symbol },
    /// A power that is not a real number was supplied.
    InvalidPower(f64),
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgebraError::Construction(msg) => {
                write!(f, "Invalid construction: {}", msg)
            }
            AlgebraError::DomainMismatch { left, right } => {
                write!(
                    f,
                    "Cannot combine expressions over different variables: {} and {}",
                    left, right
                )
            }
            AlgebraError::InvalidPower(p) => {
                write!(f, "The power {} is not a real number", p)
            }
        }
    }
}

impl std::error::Error for AlgebraError {}
