pub mod show;
pub mod calc;
