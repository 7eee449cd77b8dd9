//! examples of usage of exact_algebra
/// Polynomial arithmetic, substitution and rendering examples
pub mod algebra_examples;
