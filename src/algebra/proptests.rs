//! Property-based tests for the algebraic laws of Fraction and Expression.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algebra::evaluate::Evaluation;
    use crate::algebra::expression::Expression;
    use crate::algebra::fraction::Fraction;
    use crate::algebra::operand::Operand;
    use num::{BigInt, Integer, One, Zero};
    use std::collections::HashMap;

    fn small_int() -> impl Strategy<Value = i64> {
        -50i64..50i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-50i64..=-1i64), (1i64..=50i64)]
    }

    fn fraction() -> impl Strategy<Value = Fraction> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    fn non_zero_fraction() -> impl Strategy<Value = Fraction> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    // Polynomial in x and y with exponents up to 2 and up to four monomials
    fn expression() -> impl Strategy<Value = Expression> {
        (
            fraction(),
            prop::collection::vec((fraction(), 0u32..3, 0u32..3), 0..4),
        )
            .prop_map(|(constant, monomials)| {
                let x = Expression::variable("x");
                let y = Expression::variable("y");
                monomials
                    .into_iter()
                    .fold(Expression::constant_of(constant), |acc, (c, ex, ey)| {
                        let monomial = x.pow(ex).multiply(&y.pow(ey)).unwrap();
                        let monomial = monomial.multiply(c).unwrap();
                        acc.add(&monomial).unwrap()
                    })
            })
    }

    fn evaluate_fully(expr: &Expression, x: &Fraction, y: &Fraction) -> Fraction {
        match expr.evaluate_at([("x", x), ("y", y)]).unwrap() {
            Evaluation::Value(value) => value,
            Evaluation::Partial(rest) => panic!("unresolved terms left: {}", rest),
        }
    }

    proptest! {
        #[test]
        fn fraction_add_then_subtract(a in fraction(), b in fraction()) {
            prop_assert_eq!(a.add(&b).subtract(&b), a);
        }

        #[test]
        fn fraction_multiply_then_divide(a in fraction(), b in non_zero_fraction()) {
            prop_assert_eq!(a.multiply(&b).divide(&b).unwrap(), a);
        }

        #[test]
        fn fraction_is_reduced(n in small_int(), d in non_zero_int()) {
            let f = Fraction::new(n, d).unwrap();
            prop_assert!(f.denominator() > &BigInt::zero());
            prop_assert_eq!(f.numerator().gcd(f.denominator()), BigInt::one());
        }

        #[test]
        fn expression_add_then_subtract_renders_identically(e in expression(), f in expression()) {
            let round_trip = e.add(&f).unwrap().subtract(&f).unwrap();
            prop_assert_eq!(round_trip.print(), e.print());
        }

        #[test]
        fn expression_add_then_subtract_scalar(
            e in expression(), c in fraction(), n in small_int()
        ) {
            prop_assert_eq!(e.add(&c).unwrap().subtract(&c).unwrap().print(), e.print());
            prop_assert_eq!(e.add(n).unwrap().subtract(n).unwrap().print(), e.print());
        }

        #[test]
        fn multiplication_distributes(a in expression(), b in expression(), c in expression()) {
            let lhs = a.add(&b).unwrap().multiply(&c).unwrap();
            let rhs = a.multiply(&c).unwrap().add(b.multiply(&c).unwrap()).unwrap();
            prop_assert_eq!(lhs.print(), rhs.print());
        }

        #[test]
        fn terms_are_distinct_and_nonzero(a in expression(), b in expression()) {
            let product = a.multiply(&b).unwrap();
            for (i, term) in product.terms().iter().enumerate() {
                prop_assert!(!term.coefficient().is_zero());
                for other in &product.terms()[i + 1..] {
                    prop_assert!(!term.is_like(other));
                }
            }
        }

        #[test]
        fn full_evaluation_matches_direct_arithmetic(
            e in expression(), f in expression(), x in fraction(), y in fraction()
        ) {
            let product = e.multiply(&f).unwrap();
            let direct = evaluate_fully(&e, &x, &y).multiply(&evaluate_fully(&f, &x, &y));
            prop_assert_eq!(evaluate_fully(&product, &x, &y), direct);
        }

        #[test]
        fn staged_evaluation_matches_one_shot(e in expression(), x in fraction(), y in fraction()) {
            let one_shot = e
                .evaluate_at([("y", Operand::from(&y)), ("x", Operand::from(&x))])
                .unwrap();
            let staged = e
                .evaluate_at([("x", &x)])
                .unwrap()
                .into_expression()
                .evaluate_at([("y", &y)])
                .unwrap();
            prop_assert_eq!(one_shot, staged);
        }

        #[test]
        fn staged_evaluation_with_integer_map(
            e in expression(), x in small_int(), y in small_int()
        ) {
            let mut first: HashMap<&str, i64> = HashMap::new();
            first.insert("x", x);
            let mut both = first.clone();
            both.insert("y", y);
            let staged = e
                .evaluate_at(&first)
                .unwrap()
                .into_expression()
                .evaluate_at([("y", y)])
                .unwrap();
            prop_assert_eq!(e.evaluate_at(&both).unwrap(), staged);
        }

        #[test]
        fn divide_inverts_multiply(e in expression(), c in non_zero_fraction()) {
            let scaled = e.multiply(&c).unwrap();
            prop_assert_eq!(scaled.divide(&c).unwrap(), e);
        }

        #[test]
        fn non_integral_floats_are_rejected(
            e in expression(), whole in -100i32..100, eighths in 1u8..8
        ) {
            let value = whole as f64 + eighths as f64 / 8.0;
            prop_assert!(e.add(value).is_err());
            prop_assert!(e.subtract(value).is_err());
            prop_assert!(e.multiply(value).is_err());
            prop_assert!(e.evaluate_at([("x", value)]).is_err());
        }
    }
}
