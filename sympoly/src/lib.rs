mod num;
mod error;
mod types;
mod export;
mod detail;

pub use num::*;
pub use error::*;
pub use types::*;
pub use export::*;
pub use detail::*;

pub mod tex;
pub mod util;

#[cfg(test)]
mod proptests;
