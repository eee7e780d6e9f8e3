use std::fmt::{self, Write};

use crate::constant::{approx_eq, Constant};
use crate::factor::Factor;
use crate::polynomial::{Derivative, Polynomial};
use crate::term::Term;

/// Options for rendering a term.
#[derive(Debug, Copy, Clone)]
pub struct PrintOptions {
    /// The separator between the coefficient and the factors, `*` by default.
    pub mul_symbol: &'static str,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions { mul_symbol: "*" }
    }
}

/// A term paired with print options.
pub struct TermPrinter<'a> {
    pub term: &'a Term,
    pub opts: PrintOptions,
}

impl<'a> TermPrinter<'a> {
    pub fn new(term: &'a Term, opts: PrintOptions) -> TermPrinter<'a> {
        TermPrinter { term, opts }
    }
}

/// Round to the number of significant digits that
/// [`TOLERANCE`](crate::constant::TOLERANCE) distinguishes, so that values
/// comparing equal render identically.
fn canonicalize(value: f64) -> f64 {
    if value == 0. || !value.is_finite() {
        return value;
    }

    let digits = 11 - value.abs().log10().floor() as i32;
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// Write a float rounded to the comparison tolerance, without a trailing
/// fractional part when it is integral, so `4.0` renders as `4`.
fn fmt_float(f: &mut fmt::Formatter, value: f64) -> fmt::Result {
    let value = canonicalize(value);
    if value.fract() == 0. && value.abs() < 1e15 {
        f.write_fmt(format_args!("{}", value as i64))
    } else {
        f.write_fmt(format_args!("{}", value))
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_float(f, self.compute_float())
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.constant().is_one() {
            f.write_fmt(format_args!("{}", self.constant()))?;
            f.write_char('*')?;
        }
        f.write_str(self.variable().name())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if approx_eq(self.power(), 0.) {
            return f.write_char('1');
        }

        f.write_str(self.variable().name())?;

        if !approx_eq(self.power(), 1.) {
            f.write_char('^')?;
            fmt_float(f, self.power())?;
        }

        Ok(())
    }
}

impl fmt::Display for Derivative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Derivative::Constant(c) => f.write_fmt(format_args!("{}", c)),
            Derivative::Power(c, p) => f.write_fmt(format_args!("{}*{}", c, p)),
        }
    }
}

impl<'a> fmt::Display for TermPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coeff = self.term.coefficient();
        let factors = self.term.sorted_factors();

        if factors.is_empty() {
            return fmt_float(f, coeff);
        }

        let mut first = true;
        if !approx_eq(coeff, 1.) {
            fmt_float(f, coeff)?;
            first = false;
        }

        for (variable, power) in factors {
            if !first {
                f.write_str(self.opts.mul_symbol)?;
            }
            first = false;

            f.write_str(variable.name())?;
            if !approx_eq(power, 1.) {
                f.write_char('^')?;
                fmt_float(f, power)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "{}",
            TermPrinter::new(self, PrintOptions::default())
        ))
    }
}
