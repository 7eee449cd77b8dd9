//! # Rendering
//!
//! `print()` and `tex()` walk the ordered term list followed by the constant.
//!
//! - a coefficient of magnitude 1 is omitted (`x`, `-x`), any other coefficient is written
//!   directly before the variables (`5x`, `1/3x`)
//! - variables of a term are concatenated alphabetically, `name^exponent` for exponents above 1
//! - the first component carries its own `-`, later ones are joined with ` + ` or ` - `
//! - a zero constant is omitted unless there are no terms at all
//!
//! `tex()` additionally replaces Greek letter names by their control sequence
//! (`lambda` renders as `\lambda`).
#![allow(non_camel_case_types)]

use crate::algebra::expression::Expression;
use crate::algebra::term::Term;
use itertools::Itertools;
use num::{One, Zero};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Variable names that have a LaTeX control sequence of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum GreekLetter {
    alpha,
    beta,
    gamma,
    Gamma,
    delta,
    Delta,
    epsilon,
    varepsilon,
    zeta,
    eta,
    theta,
    vartheta,
    Theta,
    iota,
    kappa,
    lambda,
    Lambda,
    mu,
    nu,
    xi,
    Xi,
    pi,
    Pi,
    rho,
    varrho,
    sigma,
    Sigma,
    tau,
    upsilon,
    Upsilon,
    phi,
    varphi,
    Phi,
    chi,
    psi,
    Psi,
    omega,
    Omega,
}

impl GreekLetter {
    pub fn tex(&self) -> String {
        format!("\\{}", self)
    }
}

fn plain_name(variable: &str) -> String {
    variable.to_string()
}

fn tex_name(variable: &str) -> String {
    match GreekLetter::from_str(variable) {
        Ok(letter) => letter.tex(),
        Err(_) => variable.to_string(),
    }
}

/// Coefficient magnitude followed by the variable part, without any sign.
fn term_magnitude(term: &Term, name_of: fn(&str) -> String) -> String {
    let magnitude = term.coefficient.abs();
    let coefficient = if magnitude.is_one() {
        String::new()
    } else {
        magnitude.to_string()
    };
    let variables = term
        .signature
        .iter()
        .map(|(variable, exponent)| {
            if *exponent > 1 {
                format!("{}^{}", name_of(variable), exponent)
            } else {
                name_of(variable)
            }
        })
        .join("");
    format!("{}{}", coefficient, variables)
}

impl Expression {
    /// Plain string form, e.g. `x^2 + xy - 1/3`.
    pub fn print(&self) -> String {
        self.render(plain_name)
    }

    /// LaTeX form; identical to `print()` apart from Greek letter names.
    pub fn tex(&self) -> String {
        self.render(tex_name)
    }

    fn render(&self, name_of: fn(&str) -> String) -> String {
        let mut components: Vec<(bool, String)> = self
            .terms
            .iter()
            .map(|term| (term.coefficient.is_negative(), term_magnitude(term, name_of)))
            .collect();
        if !self.constant.is_zero() || self.terms.is_empty() {
            components.push((self.constant.is_negative(), self.constant.abs().to_string()));
        }

        let mut rendered = String::new();
        for (position, (negative, magnitude)) in components.into_iter().enumerate() {
            let sign = match (position, negative) {
                (0, true) => "-",
                (0, false) => "",
                (_, true) => " - ",
                (_, false) => " + ",
            };
            rendered.push_str(sign);
            rendered.push_str(&magnitude);
        }
        rendered
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.print())
    }
}

/// A single term with its own sign, e.g. `-2x^2y`.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.coefficient.is_negative() { "-" } else { "" };
        write!(f, "{}{}", sign, term_magnitude(self, plain_name))
    }
}
