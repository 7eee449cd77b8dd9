//! # Exact rational numbers
//!
//! `Fraction` is the leaf value type of the algebra module: every coefficient and every
//! constant of an [`Expression`](crate::algebra::expression::Expression) is a Fraction.
//!
//! The value wraps `num::BigRational`, so it is always kept in lowest terms with a positive
//! denominator, zero is stored as `0/1`, and no arithmetic operation can overflow.
//!
//! ## Main Methods
//! - `Fraction::new(numerator, denominator)` - fails with `DivideByZero` for a zero denominator
//! - `add`, `subtract`, `multiply` - infallible, return a freshly reduced value
//! - `divide` - fails with `DivideByZero` when the divisor is zero
//!
//! The `+`, `-`, `*` and unary `-` operators are available for owned and borrowed values.
use crate::algebra::errors::{AlgebraError, Result};
use num::{BigInt, BigRational, One, Signed, ToPrimitive, Zero};
use std::fmt;

/// Immutable exact rational number.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fraction(BigRational);

impl Fraction {
    /// Creates a reduced fraction from a numerator and denominator.
    ///
    /// # Examples
    /// ```
    /// use exact_algebra::algebra::fraction::Fraction;
    /// let half = Fraction::new(2, -4).unwrap();
    /// assert_eq!(half.to_string(), "-1/2");
    /// ```
    pub fn new(numerator: i64, denominator: i64) -> Result<Fraction> {
        Fraction::from_bigints(BigInt::from(numerator), BigInt::from(denominator))
    }

    /// Same as `new` for arbitrary precision parts.
    pub fn from_bigints(numerator: BigInt, denominator: BigInt) -> Result<Fraction> {
        if denominator.is_zero() {
            return Err(AlgebraError::DivideByZero);
        }
        // BigRational::new reduces and moves the sign into the numerator
        Ok(Fraction(BigRational::new(numerator, denominator)))
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Fraction {
        Fraction(BigRational::from_integer(value.into()))
    }

    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn add(&self, other: &Fraction) -> Fraction {
        Fraction(&self.0 + &other.0)
    }

    pub fn subtract(&self, other: &Fraction) -> Fraction {
        Fraction(&self.0 - &other.0)
    }

    pub fn multiply(&self, other: &Fraction) -> Fraction {
        Fraction(&self.0 * &other.0)
    }

    /// `self * reciprocal(other)`, failing with `DivideByZero` when `other` is zero.
    pub fn divide(&self, other: &Fraction) -> Result<Fraction> {
        let reciprocal = other.reciprocal()?;
        Ok(self.multiply(&reciprocal))
    }

    pub fn reciprocal(&self) -> Result<Fraction> {
        if self.is_zero() {
            return Err(AlgebraError::DivideByZero);
        }
        Ok(Fraction(self.0.recip()))
    }

    pub fn negate(&self) -> Fraction {
        Fraction(-&self.0)
    }

    pub fn abs(&self) -> Fraction {
        Fraction(self.0.abs())
    }

    /// Raises the value to a non-negative integer power; `pow(0)` is 1 even for zero.
    pub fn pow(&self, exponent: u32) -> Fraction {
        Fraction(num_traits::pow::pow(self.0.clone(), exponent as usize))
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Lossy conversion, only meant for display or plotting.
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Fraction(BigRational::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Self {
        Fraction(BigRational::one())
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::zero()
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction::from_integer(value)
    }
}

impl From<i32> for Fraction {
    fn from(value: i32) -> Self {
        Fraction::from_integer(value)
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Fraction::from_integer(value)
    }
}

/// Integer-valued fractions render as the bare integer, others as `numerator/denominator`.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator(), self.denominator())
    }
}

macro_rules! fraction_binop {
    ($trait:ident, $method:ident, $inner:ident) => {
        impl std::ops::$trait for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Fraction {
                Fraction::$inner(&self, &rhs)
            }
        }

        impl std::ops::$trait<&Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Fraction {
                Fraction::$inner(self, rhs)
            }
        }

        impl std::ops::$trait<&Fraction> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Fraction {
                Fraction::$inner(&self, rhs)
            }
        }
    };
}

fraction_binop!(Add, add, add);
fraction_binop!(Sub, sub, subtract);
fraction_binop!(Mul, mul, multiply);

impl std::ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction(-self.0)
    }
}

impl std::ops::Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        self.negate()
    }
}
