//! Substitution of exact values for variables.
use crate::algebra::errors::Result;
use crate::algebra::expression::{Expression, collect_like_terms};
use crate::algebra::fraction::Fraction;
use crate::algebra::operand::IntoOperand;
use crate::algebra::term::{Signature, Term};
use log::trace;
use std::collections::HashMap;
use std::fmt;

/// Outcome of [`Expression::evaluate_at`].
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluation {
    /// Every term was resolved.
    Value(Fraction),
    /// At least one term still mentions an unsubstituted variable.
    Partial(Expression),
}

impl Evaluation {
    pub fn print(&self) -> String {
        match self {
            Evaluation::Value(value) => value.to_string(),
            Evaluation::Partial(expr) => expr.print(),
        }
    }

    pub fn tex(&self) -> String {
        match self {
            Evaluation::Value(value) => value.to_string(),
            Evaluation::Partial(expr) => expr.tex(),
        }
    }

    pub fn value(&self) -> Option<&Fraction> {
        match self {
            Evaluation::Value(value) => Some(value),
            Evaluation::Partial(_) => None,
        }
    }

    pub fn expression(&self) -> Option<&Expression> {
        match self {
            Evaluation::Value(_) => None,
            Evaluation::Partial(expr) => Some(expr),
        }
    }

    /// The result as an Expression; a resolved value becomes a degree-0 expression.
    pub fn into_expression(self) -> Expression {
        match self {
            Evaluation::Value(value) => Expression::constant_of(value),
            Evaluation::Partial(expr) => expr,
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.print())
    }
}

impl Expression {
    /// Substitutes values for variables.
    ///
    /// Every substituted variable of a term is folded into its coefficient; a term left
    /// without variables moves into the constant. Reduced terms that became like terms are
    /// merged. Keys may come in any order and keys not used by any term are ignored.
    /// Values must be integers or Fractions.
    ///
    /// # Examples
    /// ```
    /// use exact_algebra::algebra::expression::Expression;
    /// use exact_algebra::algebra::fraction::Fraction;
    /// use exact_algebra::algebra::operand::Operand;
    /// let x = Expression::variable("x");
    /// let y = Expression::variable("y");
    /// let f = x.add(&y).unwrap();
    /// assert_eq!(f.evaluate_at([("x", 3)]).unwrap().print(), "y + 3");
    /// let half = Fraction::new(1, 2).unwrap();
    /// let full = f.evaluate_at([("y", Operand::from(half)), ("x", Operand::from(3))]).unwrap();
    /// assert_eq!(full.print(), "7/2");
    /// ```
    pub fn evaluate_at<I, K, V>(&self, substitution: I) -> Result<Evaluation>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoOperand,
    {
        let mut values: HashMap<String, Fraction> = HashMap::new();
        for (name, value) in substitution {
            let name = name.as_ref();
            let value = value
                .into_operand()?
                .require_scalar(&format!("substitution for {}", name))?;
            values.insert(name.to_string(), value);
        }

        let mut constant = self.constant.clone();
        let mut reduced = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            let mut coefficient = term.coefficient.clone();
            let mut signature = Signature::new();
            for (variable, exponent) in &term.signature {
                match values.get(variable) {
                    Some(value) => coefficient = coefficient.multiply(&value.pow(*exponent)),
                    None => {
                        signature.insert(variable.clone(), *exponent);
                    }
                }
            }
            if signature.is_empty() {
                constant = constant.add(&coefficient);
            } else {
                reduced.push(Term {
                    coefficient,
                    signature,
                });
            }
        }
        // reduced terms may share a signature now (xy + 2y at x = 1)
        let unresolved = collect_like_terms(reduced);
        trace!(
            "{} of {} terms left after substitution",
            unresolved.len(),
            self.terms.len()
        );

        if unresolved.is_empty() {
            Ok(Evaluation::Value(constant))
        } else {
            Ok(Evaluation::Partial(Expression {
                constant,
                terms: unresolved,
            }))
        }
    }
}
