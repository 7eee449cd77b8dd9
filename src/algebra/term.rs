//! Monomials and their signatures.
use crate::algebra::fraction::Fraction;
use std::collections::BTreeMap;

/// Variable name to positive exponent. Variables with exponent 0 are never stored.
///
/// Two terms are like terms iff their signatures are equal. The map is ordered, so the
/// variables of a term are always visited alphabetically.
pub type Signature = BTreeMap<String, u32>;

/// A monomial: a nonzero coefficient times a product of variable powers.
#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    pub(crate) coefficient: Fraction,
    pub(crate) signature: Signature,
}

impl Term {
    /// Linear term `1 * name`.
    pub fn variable(name: &str) -> Term {
        let mut signature = Signature::new();
        signature.insert(name.to_string(), 1);
        Term {
            coefficient: Fraction::from(1),
            signature,
        }
    }

    pub fn coefficient(&self) -> &Fraction {
        &self.coefficient
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Total degree: sum of all exponents.
    pub fn degree(&self) -> u32 {
        self.signature.values().sum()
    }

    /// Highest single-variable exponent, the primary key of the term order.
    pub fn max_exponent(&self) -> u32 {
        self.signature.values().copied().max().unwrap_or(0)
    }

    pub fn is_like(&self, other: &Term) -> bool {
        self.signature == other.signature
    }

    pub(crate) fn scaled(&self, factor: &Fraction) -> Term {
        Term {
            coefficient: self.coefficient.multiply(factor),
            signature: self.signature.clone(),
        }
    }

    /// Product of two monomials: coefficients multiply, exponents of shared variables add.
    pub(crate) fn product(&self, other: &Term) -> Term {
        let mut signature = self.signature.clone();
        for (variable, exponent) in &other.signature {
            *signature.entry(variable.clone()).or_insert(0) += exponent;
        }
        Term {
            coefficient: self.coefficient.multiply(&other.coefficient),
            signature,
        }
    }
}
