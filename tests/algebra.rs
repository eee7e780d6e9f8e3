use polyform::{
    constant::Constant,
    error::AlgebraError,
    factor::Factor,
    polynomial::{Derivative, Polynomial},
    state::{State, Symbol},
    term::Term,
};

#[test]
fn polynomial_lifts_into_a_term() {
    let x = Symbol::new("x");
    let t = Term::from(Polynomial::new(2., x).unwrap());
    assert_eq!(t.coefficient(), 1.);
    assert_eq!(t.to_string(), "x^2");
    assert!(State::symbol_iter().any(|n| n == "x"));
}

#[test]
fn monomial_composition() {
    let x = Symbol::new("x");
    let y = Symbol::new("y");

    // 4*x^2, extended with y
    let t = Term::new(Constant::from(4.), [Polynomial::new(2., x).unwrap()]);
    let t = t.add_factor(&Polynomial::new(1., y).unwrap());

    assert_eq!(t.coefficient(), 4.);
    assert_eq!(t.power_of(x), Some(2.));
    assert_eq!(t.power_of(y), Some(1.));
    assert_eq!(t.to_string(), "4*x^2*y");
}

#[test]
fn repeated_differentiation() {
    let x = Symbol::new("x");
    let mut p = Polynomial::new(4., x).unwrap();
    let mut coefficients = vec![];

    loop {
        match p.differentiate() {
            Derivative::Power(c, q) => {
                coefficients.push(c.compute_float());
                p = q;
            }
            Derivative::Constant(c) => {
                coefficients.push(c.compute_float());
                break;
            }
        }
    }

    // 4, 3, 2, then the linear base case
    assert_eq!(coefficients, vec![4., 3., 2., 1.]);
}

#[test]
fn derivative_of_constant_is_zero() {
    let x = Symbol::new("x");
    let d = Polynomial::new(0., x).unwrap().differentiate();
    assert_eq!(d, Derivative::Constant(Constant::zero()));
    assert_eq!(d.to_string(), "0");
}

#[test]
fn multiplication_is_additive_and_closed() {
    let x = Symbol::new("x");

    for (a, b) in [(2., 3.), (-1.5, 0.5), (0., 7.), (2.25, -2.25)] {
        let p = Polynomial::new(a, x).unwrap();
        let q = Polynomial::new(b, x).unwrap();
        let r = p.multiply(&q).unwrap();
        assert_eq!(r, Polynomial::new(a + b, x).unwrap());

        // multiplication commutes
        assert_eq!(q.multiply(&p).unwrap(), r);
    }
}

#[test]
fn mismatched_variables_are_rejected() {
    let p = Polynomial::new(2., Symbol::new("x")).unwrap();
    let q = Polynomial::new(3., Symbol::new("y")).unwrap();

    match p.multiply(&q) {
        Err(AlgebraError::DomainMismatch { left, right }) => {
            assert_eq!(left.name(), "x");
            assert_eq!(right.name(), "y");
        }
        r => panic!("expected a domain mismatch, got {:?}", r),
    }
}

#[test]
fn scaled_factors_accumulate() {
    let x = Symbol::new("x");

    // (3*x) * (7*x) as a term: constants multiply, exponents add
    let t = Term::from(Factor::new(x, Constant::from(3.)))
        .add_factor(&Factor::new(x, Constant::from(7.)));

    assert_eq!(t.coefficient(), 21.);
    assert_eq!(t.power_of(x), Some(2.));
    assert_eq!(t.to_string(), "21*x^2");
}

#[test]
fn shared_values_stay_valid() {
    let x = Symbol::new("x");
    let p = Polynomial::new(3., x).unwrap();

    // deriving and multiplying never mutate the input
    let _ = p.differentiate();
    let _ = p.multiply(&p).unwrap();
    assert_eq!(p, Polynomial::new(3., x).unwrap());
}
