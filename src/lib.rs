//! Polyform is a minimal symbolic algebra core for polynomial terms.
//!
//! It models scalar constants, variable-power factors and multi-factor
//! monomial terms, and supports two symbolic operations: multiplication
//! (adding exponents over the same variable) and differentiation (the power
//! rule). All values are immutable; every operation returns a new value.
//!
//! For example:
//!
//! ```
//! use polyform::{constant::Constant, polynomial::Polynomial, state::Symbol, term::Term};
//!
//! let x = Symbol::new("x");
//! let y = Symbol::new("y");
//!
//! let t = Term::new(Constant::from(4.), [Polynomial::new(2., x).unwrap()]);
//! let t = t.add_factor(&Polynomial::new(1., y).unwrap());
//! assert_eq!(t.to_string(), "4*x^2*y");
//!
//! let d = Polynomial::new(2., x).unwrap().differentiate();
//! assert_eq!(d.to_string(), "2*x");
//! ```

pub mod constant;
pub mod error;
pub mod factor;
pub mod polynomial;
pub mod printer;
pub mod state;
pub mod term;
