//! # Exact polynomial algebra
//!
//! Value types for multivariate polynomials with exact rational coefficients.
//!
//! ```
//! use exact_algebra::algebra::expression::Expression;
//! use exact_algebra::algebra::fraction::Fraction;
//! let x = Expression::variable("x");
//! // x^2 + x + 3 at x = 1/5
//! let f = x.multiply(&x).unwrap().add(&x).unwrap().add(3).unwrap();
//! let value = f.evaluate_at([("x", Fraction::new(1, 5).unwrap())]).unwrap();
//! assert_eq!(value.print(), "81/25");
//!
//! let lambda = Expression::variable("lambda").add(3).unwrap().multiply(5).unwrap();
//! assert_eq!(lambda.tex(), "5\\lambda + 15");
//! assert_eq!(lambda.print(), "5lambda + 15");
//! ```
/// error kinds: InvalidArgument and DivideByZero
pub mod errors;
/// exact rational numbers
pub mod fraction;
/// the integer / Fraction / Expression operand union
pub mod operand;
/// monomials and signatures
pub mod term;
///________________________________________________________________________________________________
/// polynomial expressions: construction, like-term collection, add/subtract/multiply/divide
pub mod expression;
/// full and partial substitution
pub mod evaluate;
/// print() and tex()
pub mod render;
mod proptests;
