pub mod error;
pub mod parser;
mod grammar;

pub mod prelude {
    pub use super::{
        error::*,
        parser::*
    };
}
