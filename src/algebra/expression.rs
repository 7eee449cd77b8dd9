//! # Polynomial expressions
//!
//! An [`Expression`] is a constant [`Fraction`] plus an ordered list of [`Term`]s with
//! pairwise distinct signatures. Expressions are immutable values: every operation reads its
//! operands and returns a new Expression, so a base expression such as `x` can be reused in
//! any number of derived expressions.
//!
//! ## Term order
//! Terms are kept in one canonical order: descending highest single-variable exponent, then
//! descending total degree, then ascending signature (variable names compared alphabetically).
//! Equal polynomials therefore always render identically, e.g. `(x + y)(y + x)` renders as
//! `x^2 + y^2 + 2xy` no matter how it was built.
//!
//! ## Examples
//! ```
//! use exact_algebra::algebra::expression::Expression;
//! let x = Expression::variable("x");
//! let y = Expression::variable("y");
//! let product = x.add(3).unwrap().multiply(y.add(&x).unwrap().add(7).unwrap()).unwrap();
//! assert_eq!(product.print(), "x^2 + xy + 10x + 3y + 21");
//! ```
use crate::algebra::errors::{AlgebraError, Result};
use crate::algebra::fraction::Fraction;
use crate::algebra::operand::{IntoOperand, Operand};
use crate::algebra::term::{Signature, Term};
use log::{debug, trace};
use num::{One, Zero};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Expression {
    pub(crate) constant: Fraction,
    pub(crate) terms: Vec<Term>,
}

impl Expression {
    /// The zero expression: no terms, constant 0.
    pub fn new() -> Expression {
        Expression::default()
    }

    /// Single linear term with coefficient 1 and constant 0.
    ///
    /// A blank name gives the zero expression, the same way `symbols` skips blank entries.
    pub fn variable(name: &str) -> Expression {
        if name.trim().is_empty() {
            return Expression::new();
        }
        Expression {
            constant: Fraction::zero(),
            terms: vec![Term::variable(name)],
        }
    }

    /// Degree-0 expression holding `value` as its constant.
    pub fn constant_of(value: impl Into<Fraction>) -> Expression {
        Expression {
            constant: value.into(),
            terms: Vec::new(),
        }
    }

    /// Creates one variable expression per comma-separated name; blank names are skipped.
    ///
    /// ```
    /// use exact_algebra::algebra::expression::Expression;
    /// let vars = Expression::symbols("x, y, z");
    /// assert_eq!(vars.len(), 3);
    /// ```
    pub fn symbols(names: &str) -> Vec<Expression> {
        names
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(Expression::variable)
            .collect()
    }

    pub fn constant(&self) -> &Fraction {
        &self.constant
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Sorted names of every variable occurring in some term.
    pub fn variables(&self) -> Vec<String> {
        let names: BTreeSet<&String> = self
            .terms
            .iter()
            .flat_map(|term| term.signature.keys())
            .collect();
        names.into_iter().cloned().collect()
    }

    /// Highest total degree among the terms, 0 for a constant expression.
    pub fn degree(&self) -> u32 {
        self.terms.iter().map(Term::degree).max().unwrap_or(0)
    }

    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty() && self.constant.is_zero()
    }

    //___________________________________ARITHMETIC____________________________________

    /// Sum of two operands with like terms merged and cancelled terms dropped.
    pub fn add<O: IntoOperand>(&self, other: O) -> Result<Expression> {
        let other = other.into_operand()?.into_expression();
        Ok(self.plus(&other))
    }

    /// `self + (-1) * other`.
    pub fn subtract<O: IntoOperand>(&self, other: O) -> Result<Expression> {
        let other = other.into_operand()?.into_expression();
        Ok(self.plus(&other.negate()))
    }

    /// Scales by a scalar operand or fully distributes against an Expression operand.
    pub fn multiply<O: IntoOperand>(&self, other: O) -> Result<Expression> {
        Ok(self.times(other.into_operand()?))
    }

    /// Division by a nonzero integer or Fraction. Dividing by an Expression is
    /// `InvalidArgument`, dividing by zero is `DivideByZero`.
    pub fn divide<O: IntoOperand>(&self, other: O) -> Result<Expression> {
        let divisor = other.into_operand()?.require_scalar("division")?;
        if divisor.is_zero() {
            return Err(AlgebraError::DivideByZero);
        }
        Ok(self.scale(&divisor.reciprocal()?))
    }

    pub fn negate(&self) -> Expression {
        self.scale(&Fraction::from(-1))
    }

    /// Repeated multiplication; `pow(0)` is the constant 1.
    pub fn pow(&self, exponent: u32) -> Expression {
        (0..exponent).fold(Expression::constant_of(Fraction::one()), |acc, _| {
            acc.multiply_expression(self)
        })
    }

    pub(crate) fn plus(&self, other: &Expression) -> Expression {
        Expression {
            constant: self.constant.add(&other.constant),
            terms: collect_like_terms(self.terms.iter().chain(other.terms.iter()).cloned()),
        }
    }

    pub(crate) fn times(&self, other: Operand) -> Expression {
        match other.as_scalar() {
            Some(scalar) => self.scale(&scalar),
            None => self.multiply_expression(&other.into_expression()),
        }
    }

    /// Multiplies every coefficient and the constant; signatures are untouched.
    fn scale(&self, factor: &Fraction) -> Expression {
        if factor.is_zero() {
            return Expression::new();
        }
        Expression {
            constant: self.constant.multiply(factor),
            terms: self.terms.iter().map(|term| term.scaled(factor)).collect(),
        }
    }

    /// Distributes {terms, constant} of `self` against {terms, constant} of `other`.
    fn multiply_expression(&self, other: &Expression) -> Expression {
        let mut provisional = Vec::with_capacity((self.terms.len() + 1) * (other.terms.len() + 1));
        for term in &self.terms {
            for rhs in &other.terms {
                provisional.push(term.product(rhs));
            }
            if !other.constant.is_zero() {
                provisional.push(term.scaled(&other.constant));
            }
        }
        if !self.constant.is_zero() {
            for rhs in &other.terms {
                provisional.push(rhs.scaled(&self.constant));
            }
        }
        trace!("distributed product into {} provisional terms", provisional.len());
        Expression {
            constant: self.constant.multiply(&other.constant),
            terms: collect_like_terms(provisional),
        }
    }
}

/// Canonical term order, see the module documentation.
pub(crate) fn term_order(a: &Term, b: &Term) -> Ordering {
    b.max_exponent()
        .cmp(&a.max_exponent())
        .then_with(|| b.degree().cmp(&a.degree()))
        .then_with(|| a.signature.cmp(&b.signature))
}

/// Merges terms by signature, drops zero coefficients and sorts into canonical order.
pub(crate) fn collect_like_terms<I: IntoIterator<Item = Term>>(terms: I) -> Vec<Term> {
    let mut slots: HashMap<Signature, usize> = HashMap::new();
    let mut collected: Vec<Term> = Vec::new();
    for term in terms {
        match slots.get(&term.signature) {
            Some(&slot) => {
                let merged = collected[slot].coefficient.add(&term.coefficient);
                collected[slot].coefficient = merged;
            }
            None => {
                slots.insert(term.signature.clone(), collected.len());
                collected.push(term);
            }
        }
    }
    let merged_len = collected.len();
    collected.retain(|term| !term.coefficient.is_zero());
    if collected.len() < merged_len {
        debug!("{} terms cancelled out", merged_len - collected.len());
    }
    collected.sort_by(term_order);
    collected
}

//___________________________________OPERATORS____________________________________

macro_rules! expression_binop {
    ($trait:ident, $method:ident, $body:expr, $($rhs:ty),*) => {
        $(
            impl std::ops::$trait<$rhs> for &Expression {
                type Output = Expression;

                fn $method(self, rhs: $rhs) -> Expression {
                    let apply: fn(&Expression, Operand) -> Expression = $body;
                    apply(self, Operand::from(rhs))
                }
            }
        )*
    };
}

expression_binop!(
    Add,
    add,
    |lhs, rhs| lhs.plus(&rhs.into_expression()),
    &Expression,
    &Fraction,
    i64
);
expression_binop!(
    Sub,
    sub,
    |lhs, rhs| lhs.plus(&rhs.into_expression().negate()),
    &Expression,
    &Fraction,
    i64
);
expression_binop!(Mul, mul, |lhs, rhs| lhs.times(rhs), &Expression, &Fraction, i64);

impl std::ops::Neg for &Expression {
    type Output = Expression;

    fn neg(self) -> Expression {
        self.negate()
    }
}

impl std::ops::Neg for Expression {
    type Output = Expression;

    fn neg(self) -> Expression {
        self.negate()
    }
}

//___________________________________MACROS____________________________________

/// Creates variable expressions named after the identifiers.
/// Usage: `let (x, y) = variables!(x, y);`
#[macro_export]
macro_rules! variables {
    ($($var:ident),+ $(,)?) => {
        ($($crate::algebra::expression::Expression::variable(stringify!($var))),+)
    };
}
