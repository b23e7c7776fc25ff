//! Integer roots of arbitrary-precision natural numbers.
//!
//! [`root`] is the core operation; the [`table`] module checks it against
//! tables of known roots.

mod root;
pub use root::*;

pub mod lexer;
pub mod parser;
pub mod table;
