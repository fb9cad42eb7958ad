// Module declarations
pub mod combinatorics;
pub mod error;
pub mod factorial;
pub mod fibonacci;
pub mod parser;
pub mod pascal;
pub mod permute;
pub mod powerset;
pub mod selftest;

pub use error::{MathError, Result};
