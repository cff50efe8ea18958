use std::fmt::{Display, Debug};
use num_traits::Zero;

use crate::Num;
use crate::error::{Error, ensure};
use crate::util::format;

// `Indeterminate` : a single factor x_i^d, where `x` is the name, `i` an
// optional subscript and `d` a (possibly fractional or negative) degree.
//
// Degree zero always collapses to `CONSTANT`, the multiplicative identity.
// An empty subscript is stored as absent.

#[derive(Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Indeterminate {
    name: String,
    subscript: Option<String>,
    degree: Num,
}

impl Indeterminate {
    pub const CONSTANT: Indeterminate = Indeterminate {
        name: String::new(),
        subscript: None,
        degree: Num::ZERO,
    };

    pub fn new<D>(name: &str, subscript: Option<&str>, degree: D) -> Self
    where D: Into<Num> {
        let degree = degree.into();
        if degree.is_zero() {
            Self::CONSTANT
        } else {
            let name = name.to_string();
            let subscript = subscript.filter(|s| !s.is_empty()).map(str::to_string);
            Self { name, subscript, degree }
        }
    }

    pub fn var(name: &str) -> Self {
        Self::new(name, None, 1)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subscript(&self) -> Option<&str> {
        self.subscript.as_deref()
    }

    pub fn degree(&self) -> Num {
        self.degree
    }

    pub fn is_const(&self) -> bool {
        self.degree.is_zero()
    }

    pub fn has_same_base(&self, other: &Self) -> bool {
        self.name == other.name && self.subscript == other.subscript
    }

    pub fn is_multiplicative(&self, other: &Self) -> bool {
        self.is_const() || other.is_const() || self.has_same_base(other)
    }

    pub fn multiply(&self, other: &Self) -> Result<Self, Error> {
        ensure!(
            self.is_multiplicative(other),
            InvalidOperation,
            "'{self}' and '{other}' are not multiplicative"
        );
        Ok(self.mul_unchecked(other))
    }

    pub fn divide(&self, other: &Self) -> Result<Self, Error> {
        self.multiply(&other.inv())
    }

    // x_i^d -> x_i^{-d}
    pub fn inv(&self) -> Self {
        Self::new(&self.name, self.subscript(), -self.degree)
    }

    // Callers must check `is_multiplicative` first.
    pub(crate) fn mul_unchecked(&self, other: &Self) -> Self {
        debug_assert!(self.is_multiplicative(other));
        if self.is_const() {
            other.clone()
        } else if other.is_const() {
            self.clone()
        } else {
            Self::new(&self.name, self.subscript(), self.degree + other.degree)
        }
    }

    // Factors are ordered by name, then by subscript (absent = "").
    pub(crate) fn sort_key(&self) -> (&str, &str) {
        (&self.name, self.subscript().unwrap_or(""))
    }

    pub(crate) fn fmt_impl(&self, tex: bool) -> String {
        format::mono(&self.name, self.subscript(), &self.degree, tex)
    }
}

impl Display for Indeterminate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.fmt_impl(false))
    }
}

impl Debug for Indeterminate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "tex")] {
        use crate::tex::TeX;

        impl TeX for Indeterminate {
            fn tex_string(&self) -> String {
                self.fmt_impl(true)
            }
        }
    }
}
