//! Syntax tree consumed by the evaluator.
//!
//! Every composite node owns its children, so a tree is dropped recursively
//! together with its root. Nodes carry no source locations.

pub mod expression;
pub mod statement;

pub mod prelude {
    pub use super::{
        expression::*,
        statement::*
    };
}

#[cfg(test)]
mod tests;
