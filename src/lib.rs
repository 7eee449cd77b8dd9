// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! Exact symbolic algebra: polynomial expressions over the rationals.
//!
//! The [`algebra`] module holds the value types (`Fraction`, `Expression`), the
//! [`Utils`] module the logger set-up used by the demo binary.
#![allow(non_snake_case)]
pub mod Examples;
pub mod Utils;
pub mod algebra;

pub use algebra::errors::AlgebraError;
pub use algebra::evaluate::Evaluation;
pub use algebra::expression::Expression;
pub use algebra::fraction::Fraction;
pub use algebra::operand::{IntoOperand, Operand};
