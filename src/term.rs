use ahash::{HashMap, HashMapExt};
use smallvec::SmallVec;

use crate::constant::{approx_eq, Constant};
use crate::factor::{Factor, Unit};
use crate::polynomial::Polynomial;
use crate::state::Symbol;

/// A monomial: a coefficient times a product of variable powers, possibly
/// over several variables.
///
/// The factors are stored as a map from variable to accumulated exponent, so
/// a variable can never appear twice: merging a factor for an existing
/// variable adds the exponents. Exponents that cancel to 0 drop out of the
/// map entirely.
#[derive(Debug, Clone)]
pub struct Term {
    constants: SmallVec<[Constant; 2]>,
    factors: HashMap<Symbol, f64>,
}

impl Default for Term {
    /// The unit term, `1`.
    fn default() -> Self {
        Term::from_constant(Constant::default())
    }
}

impl Term {
    /// Build a term holding only a constant.
    pub fn from_constant(constant: Constant) -> Term {
        Term {
            constants: SmallVec::from_iter([constant]),
            factors: HashMap::new(),
        }
    }

    /// Build a term from a constant and any number of factors, either
    /// [`Factor`]s or [`Polynomial`](crate::polynomial::Polynomial)s. Factors
    /// over the same variable are combined at construction, adding their
    /// exponents.
    pub fn new<U: Unit>(constant: Constant, factors: impl IntoIterator<Item = U>) -> Term {
        let mut term = Term::from_constant(constant);

        for f in factors {
            term.merge_unit(&f);
        }

        term
    }

    /// Return a new term with `unit` merged in, leaving `self` untouched.
    /// If the term already holds a factor for the unit's variable, the
    /// exponents are added; otherwise the factor is appended. A
    /// [`Factor`]'s scaling constant joins the term's constant list.
    pub fn add_factor<U: Unit>(&self, unit: &U) -> Term {
        let mut new_term = self.clone();
        new_term.merge_unit(unit);
        new_term
    }

    fn merge_unit<U: Unit>(&mut self, unit: &U) {
        if let Some(c) = unit.scale() {
            self.constants.push(c.clone());
        }

        let power = self.factors.entry(unit.variable()).or_insert(0.);
        *power += unit.power();

        if approx_eq(*power, 0.) {
            self.factors.remove(&unit.variable());
        }
    }

    /// The collapsed product of all constants attached to this term.
    pub fn coefficient(&self) -> f64 {
        self.constants.iter().map(|c| c.compute_float()).product()
    }

    /// The accumulated exponent for `variable`, if present.
    pub fn power_of(&self, variable: Symbol) -> Option<f64> {
        self.factors.get(&variable).copied()
    }

    /// The number of distinct variables in the factor product.
    pub fn num_factors(&self) -> usize {
        self.factors.len()
    }

    /// Iterate over the variable powers in an arbitrary order.
    pub fn factors(&self) -> impl Iterator<Item = (Symbol, f64)> + '_ {
        self.factors.iter().map(|(s, p)| (*s, *p))
    }

    /// The variable powers sorted by variable name, for deterministic
    /// rendering and comparison.
    pub fn sorted_factors(&self) -> SmallVec<[(Symbol, f64); 4]> {
        let mut factors: SmallVec<[(Symbol, f64); 4]> = self.factors().collect();
        factors.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        factors
    }
}

/// Terms compare by collapsed coefficient and merged factor multiset, both
/// within [`TOLERANCE`](crate::constant::TOLERANCE).
impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        if !approx_eq(self.coefficient(), other.coefficient())
            || self.factors.len() != other.factors.len()
        {
            return false;
        }

        self.factors
            .iter()
            .all(|(v, p)| other.factors.get(v).map_or(false, |q| approx_eq(*p, *q)))
    }
}

impl From<Polynomial> for Term {
    fn from(p: Polynomial) -> Self {
        Term::new(Constant::default(), [p])
    }
}

impl From<Factor> for Term {
    fn from(f: Factor) -> Self {
        Term::new(Constant::default(), [f])
    }
}
