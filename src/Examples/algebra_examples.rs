// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
use crate::algebra::errors::Result;
use crate::algebra::expression::Expression;
use crate::algebra::fraction::Fraction;
use crate::algebra::operand::Operand;
use crate::variables;
use log::{info, warn};

/// Number of examples `run_example` knows about.
pub const EXAMPLES_COUNT: usize = 6;

pub fn run_example(example: usize) -> Result<()> {
    match example {
        0 => {
            // BUILDING EXPRESSIONS
            let (x, y, z) = variables!(x, y, z);
            let sum = x.add(&y)?.subtract(&z)?.add(5)?;
            info!("x + y - z + 5 = {}", sum);
            let cancelled = x.add(3)?.subtract(3)?;
            info!("x + 3 - 3 = {}", cancelled);
            let third = x.multiply(Fraction::new(1, 3)?)?;
            info!("x * 1/3 = {}", third);
        }
        1 => {
            // MULTIPLICATION AND LIKE TERMS
            let (x, y) = variables!(x, y);
            let lhs = x.add(3)?;
            let rhs = y.add(4)?.add(&lhs)?;
            let product = lhs.multiply(&rhs)?;
            info!("({}) * ({}) = {}", lhs, rhs, product);
            let difference_of_squares = x.add(&y)?.multiply(x.subtract(&y)?)?;
            info!("(x + y)(x - y) = {}", difference_of_squares);
            info!("(x + y)^3 = {}", x.add(&y)?.pow(3));
        }
        2 => {
            // DIVISION
            let x = Expression::variable("x");
            info!("x / 5 = {}", x.divide(5)?);
            info!("x / (1/3) = {}", x.divide(Fraction::new(1, 3)?)?);
            match x.divide(0) {
                Ok(_) => warn!("division by zero unexpectedly succeeded"),
                Err(e) => info!("x / 0 fails with {}", e),
            }
        }
        3 => {
            // FULL AND PARTIAL SUBSTITUTION
            let (x, y) = variables!(x, y);
            let f = x.multiply(&x)?.multiply(&y)?.add(&x)?;
            info!("f = {}", f);
            info!("f(x = 3) = {}", f.evaluate_at([("x", 3)])?);
            let full = f.evaluate_at([
                ("y", Operand::from(Fraction::new(1, 2)?)),
                ("x", Operand::from(3)),
            ])?;
            info!("f(x = 3, y = 1/2) = {}", full);
        }
        4 => {
            // LATEX
            let lambda = Expression::variable("lambda");
            let expr = lambda.add(3)?.multiply(5)?;
            info!("print: {}  tex: {}", expr.print(), expr.tex());
            let mixed = Expression::variable("theta").multiply(Expression::variable("r"))?;
            info!("tex of r*theta: {}", mixed.pow(2).tex());
        }
        5 => {
            // INEXACT OPERANDS ARE REJECTED
            let x = Expression::variable("x");
            match x.add(0.25) {
                Ok(expr) => warn!("float accepted: {}", expr),
                Err(e) => info!("x + 0.25 fails with {}", e),
            }
            info!("x + 2.0 = {}", x.add(2.0)?);
        }
        _ => {
            warn!("no example with number {}", example);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_examples_run() {
        for example in 0..EXAMPLES_COUNT {
            assert!(run_example(example).is_ok(), "example {} failed", example);
        }
        assert!(run_example(EXAMPLES_COUNT).is_ok());
    }
}
