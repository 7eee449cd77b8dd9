//! Error kinds raised by the algebra value types.
//!
//! Both kinds are raised synchronously at the offending call and are never
//! recovered internally.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// An operand was not an integer, Fraction or Expression, or the operation
    /// does not support the operand kind it received (e.g. dividing by an Expression).
    InvalidArgument(String),
    /// A Fraction with a zero denominator or a division by a zero scalar.
    DivideByZero,
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlgebraError::InvalidArgument(reason) => write!(f, "InvalidArgument: {}", reason),
            AlgebraError::DivideByZero => write!(f, "DivideByZero"),
        }
    }
}

impl std::error::Error for AlgebraError {}

pub type Result<T> = std::result::Result<T, AlgebraError>;
