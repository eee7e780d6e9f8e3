use crate::constant::{approx_eq, Constant};
use crate::error::AlgebraError;
use crate::factor::Unit;
use crate::state::Symbol;

/// A single variable raised to a real power, `variable^power`.
///
/// A power of 1 reduces conceptually to a bare [`Factor`](crate::factor::Factor);
/// a power of 0 is the constant 1. Negative and fractional powers are allowed.
#[derive(Debug, Clone)]
pub struct Polynomial {
    variable: Symbol,
    power: f64,
}

impl Default for Polynomial {
    /// The polynomial `x^1`.
    fn default() -> Self {
        Polynomial {
            variable: Symbol::new("x"),
            power: 1.,
        }
    }
}

/// The result of differentiating a [`Polynomial`]: either a bare constant
/// (for powers 0 and 1) or a constant-scaled polynomial of one lower power.
#[derive(Debug, Clone, PartialEq)]
pub enum Derivative {
    Constant(Constant),
    Power(Constant, Polynomial),
}

impl Polynomial {
    /// Construct `variable^power`. Fails with [`AlgebraError::InvalidPower`]
    /// if the power is not a finite real number.
    pub fn new(power: f64, variable: Symbol) -> Result<Polynomial, AlgebraError> {
        if !power.is_finite() {
            return Err(AlgebraError::InvalidPower(power));
        }

        Ok(Polynomial { variable, power })
    }

    pub fn variable(&self) -> Symbol {
        self.variable
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    /// Multiply by another polynomial over the same variable, adding the
    /// exponents: `x^a * x^b = x^(a+b)`. Multiplying across different
    /// variables is undefined and fails with [`AlgebraError::DomainMismatch`];
    /// a power sum that overflows the finite range fails with
    /// [`AlgebraError::InvalidPower`].
    pub fn multiply(&self, other: &Polynomial) -> Result<Polynomial, AlgebraError> {
        if self.variable != other.variable {
            return Err(AlgebraError::DomainMismatch {
                left: self.variable,
                right: other.variable,
            });
        }

        Polynomial::new(self.power + other.power, self.variable)
    }

    /// Take the derivative with respect to the polynomial's own variable,
    /// applying the power rule `d/dx[x^n] = n*x^(n-1)`.
    ///
    /// The two base cases return bare constants: a power of 0 differentiates
    /// to the additive identity 0, and a power of 1 to the coefficient 1.
    pub fn differentiate(&self) -> Derivative {
        if approx_eq(self.power, 0.) {
            Derivative::Constant(Constant::zero())
        } else if approx_eq(self.power, 1.) {
            Derivative::Constant(Constant::one())
        } else {
            Derivative::Power(
                Constant::from(self.power),
                Polynomial {
                    variable: self.variable,
                    power: self.power - 1.,
                },
            )
        }
    }
}

/// Polynomials compare by variable and power, the latter within
/// [`TOLERANCE`](crate::constant::TOLERANCE).
impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.variable == other.variable && approx_eq(self.power, other.power)
    }
}

impl Unit for Polynomial {
    fn variable(&self) -> Symbol {
        self.variable
    }

    fn power(&self) -> f64 {
        self.power
    }
}
