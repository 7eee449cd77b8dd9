//! Operand kinds accepted by the arithmetic and substitution methods.
//!
//! Every binary operation of an Expression takes an integer, a Fraction or another
//! Expression. Values of any other kind are rejected at the boundary with
//! `AlgebraError::InvalidArgument`; nothing is silently rounded.
use crate::algebra::errors::{AlgebraError, Result};
use crate::algebra::expression::Expression;
use crate::algebra::fraction::Fraction;
use num::{BigInt, FromPrimitive};

#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Integer(BigInt),
    Fraction(Fraction),
    Expression(Expression),
}

impl Operand {
    /// The exact scalar value, or `None` for the Expression case.
    pub fn as_scalar(&self) -> Option<Fraction> {
        match self {
            Operand::Integer(value) => Some(Fraction::from_integer(value.clone())),
            Operand::Fraction(value) => Some(value.clone()),
            Operand::Expression(_) => None,
        }
    }

    /// Lifts any operand to an Expression; scalars become degree-0 expressions.
    pub fn into_expression(self) -> Expression {
        match self {
            Operand::Expression(expr) => expr,
            Operand::Integer(value) => Expression::constant_of(Fraction::from_integer(value)),
            Operand::Fraction(value) => Expression::constant_of(value),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Operand::Integer(_) => "integer",
            Operand::Fraction(_) => "fraction",
            Operand::Expression(_) => "expression",
        }
    }

    /// Scalar value required by `divide` and `evaluate_at`.
    pub(crate) fn require_scalar(self, context: &str) -> Result<Fraction> {
        self.as_scalar().ok_or_else(|| {
            AlgebraError::InvalidArgument(format!(
                "{} requires an integer or a fraction, got an {}",
                context,
                self.kind()
            ))
        })
    }
}

/// Fallible conversion into an [`Operand`].
///
/// Implemented for the exact kinds and for floating-point numbers, so that an inexact value
/// reaching the API is reported as `InvalidArgument` instead of being rounded.
pub trait IntoOperand {
    fn into_operand(self) -> Result<Operand>;
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Integer(BigInt::from(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for Operand {
    fn from(value: BigInt) -> Self {
        Operand::Integer(value)
    }
}

impl From<Fraction> for Operand {
    fn from(value: Fraction) -> Self {
        Operand::Fraction(value)
    }
}

impl From<&Fraction> for Operand {
    fn from(value: &Fraction) -> Self {
        Operand::Fraction(value.clone())
    }
}

impl From<Expression> for Operand {
    fn from(value: Expression) -> Self {
        Operand::Expression(value)
    }
}

impl From<&Expression> for Operand {
    fn from(value: &Expression) -> Self {
        Operand::Expression(value.clone())
    }
}

/// Only finite floats with an integral value are exact; `3.0` is accepted as `3`, `0.25` is not.
impl TryFrom<f64> for Operand {
    type Error = AlgebraError;

    fn try_from(value: f64) -> Result<Self> {
        if value.is_finite() && value.fract() == 0.0 {
            if let Some(integer) = BigInt::from_f64(value) {
                return Ok(Operand::Integer(integer));
            }
        }
        Err(AlgebraError::InvalidArgument(format!(
            "{} is not an integer, a fraction or an expression",
            value
        )))
    }
}

macro_rules! into_operand_via_from {
    ($($ty:ty),*) => {
        $(
            impl IntoOperand for $ty {
                fn into_operand(self) -> Result<Operand> {
                    Ok(Operand::from(self))
                }
            }
        )*
    };
}

into_operand_via_from!(i32, i64, BigInt, Fraction, &Fraction, Expression, &Expression);

macro_rules! into_operand_via_clone {
    ($($ty:ty),*) => {
        $(
            impl IntoOperand for &$ty {
                fn into_operand(self) -> Result<Operand> {
                    Ok(Operand::from(self.clone()))
                }
            }
        )*
    };
}

into_operand_via_clone!(i32, i64, BigInt);

impl IntoOperand for Operand {
    fn into_operand(self) -> Result<Operand> {
        Ok(self)
    }
}

impl IntoOperand for &Operand {
    fn into_operand(self) -> Result<Operand> {
        Ok(self.clone())
    }
}

impl IntoOperand for f64 {
    fn into_operand(self) -> Result<Operand> {
        Operand::try_from(self)
    }
}

impl IntoOperand for f32 {
    fn into_operand(self) -> Result<Operand> {
        Operand::try_from(self as f64)
    }
}
