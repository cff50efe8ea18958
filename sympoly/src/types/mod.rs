mod indet;
mod term;
mod poly;

pub use indet::Indeterminate;
pub use term::Term;
pub use poly::{Polynomial, Operand};
