#![cfg(feature = "tex")]

// Markup rendering: subscripts and exponents as inline-math `$_{i}^{d}$`,
// factors juxtaposed.
pub trait TeX {
    fn tex_string(&self) -> String;
}
