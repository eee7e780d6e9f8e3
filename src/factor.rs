use crate::constant::Constant;
use crate::state::Symbol;

/// The interface shared by everything that contributes a single
/// `variable^power` entry to a term. [`Factor`](crate::factor::Factor) has an
/// implicit power of 1 and carries a scaling constant;
/// [`Polynomial`](crate::polynomial::Polynomial) has an explicit power and no
/// constant of its own.
pub trait Unit {
    /// The variable this unit ranges over.
    fn variable(&self) -> Symbol;

    /// The exponent this unit contributes.
    fn power(&self) -> f64;

    /// The scaling constant carried by this unit, if any.
    fn scale(&self) -> Option<&Constant> {
        None
    }
}

/// A single `constant * variable` unit: a variable scaled by a constant,
/// with an implicit power of 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Factor {
    variable: Symbol,
    constant: Constant,
}

impl Default for Factor {
    /// The unit factor `1 * x`. Every call constructs fresh values.
    fn default() -> Self {
        Factor::new(Symbol::new("x"), Constant::default())
    }
}

impl Factor {
    pub fn new(variable: Symbol, constant: Constant) -> Factor {
        Factor { variable, constant }
    }

    /// A factor with the identity constant, `1 * variable`.
    pub fn from_variable(variable: Symbol) -> Factor {
        Factor::new(variable, Constant::default())
    }

    pub fn variable(&self) -> Symbol {
        self.variable
    }

    pub fn constant(&self) -> &Constant {
        &self.constant
    }
}

impl Unit for Factor {
    fn variable(&self) -> Symbol {
        self.variable
    }

    fn power(&self) -> f64 {
        1.
    }

    fn scale(&self) -> Option<&Constant> {
        Some(&self.constant)
    }
}

#[cfg(test)]
mod test {
    use crate::constant::Constant;
    use crate::state::Symbol;

    use super::{Factor, Unit};

    #[test]
    fn defaults_are_fresh() {
        let a = Factor::default();
        let b = Factor::default();
        assert_eq!(a, b);
        assert_eq!(a.variable().name(), "x");
        assert!(a.constant().is_one());
    }

    #[test]
    fn unit_view() {
        let f = Factor::new(Symbol::new("y"), Constant::from(3.));
        assert_eq!(Unit::variable(&f), Symbol::new("y"));
        assert_eq!(f.power(), 1.);
        assert_eq!(f.scale().unwrap().compute_float(), 3.);
    }
}
