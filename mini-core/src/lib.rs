//! Tree-walking interpreter for a small imperative integer language.
//!
//! [`ast`], [`environment`] and [`eval`] form the core: the syntax tree, the
//! flat variable namespace and the recursive evaluator. [`lexer`] and
//! [`parser`] produce trees from source text, and [`session`] ties the two
//! halves together for callers that start from text.

pub mod ast;
pub mod environment;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod session;
pub mod utils;
