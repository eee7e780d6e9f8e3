use smallvec::SmallVec;

use crate::error::AlgebraError;

/// The tolerance used for floating-point comparisons of collapsed values
/// and exponents.
pub const TOLERANCE: f64 = 1e-12;

/// Compare two floats within [`TOLERANCE`].
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// An immutable scalar: the product of zero or more numeric coefficients,
/// collapsed into a single float on demand. No coefficients means the
/// multiplicative identity 1.
#[derive(Debug, Clone)]
pub struct Constant {
    values: SmallVec<[f64; 4]>,
}

impl Default for Constant {
    /// The multiplicative identity.
    fn default() -> Self {
        Constant::new([])
    }
}

impl Constant {
    /// Create a constant from any number of numeric coefficients. Construction
    /// never fails; non-finite coefficients are only rejected at evaluation
    /// time, by [`Constant::try_compute_float`].
    pub fn new(values: impl IntoIterator<Item = f64>) -> Constant {
        Constant {
            values: values.into_iter().collect(),
        }
    }

    /// The multiplicative identity, collapsing to 1.
    pub fn one() -> Constant {
        Constant::default()
    }

    /// The additive identity, collapsing to 0.
    pub fn zero() -> Constant {
        Constant::new([0.])
    }

    /// Collapse the stored coefficients into their product, with 1 as the
    /// empty product.
    pub fn compute_float(&self) -> f64 {
        self.values.iter().product()
    }

    /// Collapse the stored coefficients, rejecting any that is not a finite
    /// number.
    pub fn try_compute_float(&self) -> Result<f64, AlgebraError> {
        for v in &self.values {
            if !v.is_finite() {
                return Err(AlgebraError::Construction(format!(
                    "{} is not a finite number",
                    v
                )));
            }
        }

        Ok(self.compute_float())
    }

    pub fn is_zero(&self) -> bool {
        approx_eq(self.compute_float(), 0.)
    }

    pub fn is_one(&self) -> bool {
        approx_eq(self.compute_float(), 1.)
    }
}

impl From<f64> for Constant {
    fn from(value: f64) -> Self {
        Constant::new([value])
    }
}

/// Constants compare by collapsed value, within [`TOLERANCE`].
impl PartialEq for Constant {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.compute_float(), other.compute_float())
    }
}
