use std::fmt::{Display, Debug};
use std::ops::{Mul, MulAssign, Neg};
use auto_impl_ops::auto_ops;
use log::trace;
use num_traits::Zero;

use crate::Num;
use crate::error::{Error, ensure};
use crate::util::format;
use super::Indeterminate;

// `Term` : c * x_1^{d_1} * ... * x_n^{d_n}.
//
// Factors are kept sorted by (name, subscript) with equal bases merged, so
// the factor list is never empty: a pure scalar holds `[CONSTANT]`.
// A zero coefficient forces the zero form `0 * [CONSTANT]`.

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Term {
    indets: Vec<Indeterminate>,
    coeff: Num,
    degree: Num,
}

impl Term {
    pub fn new<I, C>(indets: I, coeff: C) -> Self
    where I: IntoIterator<Item = Indeterminate>, C: Into<Num> {
        let indets = Self::reduce(indets.into_iter().collect());
        Self::new_reduced(indets, coeff.into())
    }

    // `indets` must already be reduced.
    fn new_reduced(indets: Vec<Indeterminate>, coeff: Num) -> Self {
        if coeff.is_zero() {
            return Self::zero()
        }
        let degree = Num::new(indets.iter().map(|x| x.degree().value()).sum());
        Self { indets, coeff, degree }
    }

    fn reduce(mut indets: Vec<Indeterminate>) -> Vec<Indeterminate> {
        let n = indets.len();

        indets.sort_by(|x, y| x.sort_key().cmp(&y.sort_key()));

        // sorting makes mergeable factors adjacent, so a single scan suffices.
        let mut i = 0;
        while i + 1 < indets.len() {
            let (x, y) = (&indets[i], &indets[i + 1]);
            if x.is_multiplicative(y) {
                let xy = x.mul_unchecked(y);
                if xy.is_const() {
                    indets.drain(i..i + 2);
                } else {
                    indets[i] = xy;
                    indets.remove(i + 1);
                }
            } else {
                i += 1;
            }
        }

        if indets.is_empty() {
            indets.push(Indeterminate::CONSTANT);
        }

        trace!("reduce factors: {n} -> {}", indets.len());

        indets
    }

    pub fn zero() -> Self {
        Self {
            indets: vec![Indeterminate::CONSTANT],
            coeff: Num::ZERO,
            degree: Num::ZERO
        }
    }

    pub fn constant<C>(coeff: C) -> Self
    where C: Into<Num> {
        Self::new([], coeff)
    }

    pub fn indets(&self) -> &[Indeterminate] {
        &self.indets
    }

    pub fn nindets(&self) -> usize {
        self.indets.len()
    }

    pub fn coeff(&self) -> Num {
        self.coeff
    }

    pub fn degree(&self) -> Num {
        self.degree
    }

    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    pub fn is_const(&self) -> bool {
        self.indets.iter().all(|x| x.is_const())
    }

    // Two terms are increasable (like terms) if either is zero, or their
    // factor lists agree position by position.
    pub fn is_increasable(&self, other: &Self) -> bool {
        self.is_zero() || other.is_zero() || (
            self.degree == other.degree &&
            self.indets == other.indets
        )
    }

    pub fn add(&self, other: &Self) -> Result<Self, Error> {
        ensure!(
            self.is_increasable(other),
            InvalidOperation,
            "'{self}' and '{other}' are not like terms"
        );
        Ok(self.add_unchecked(other))
    }

    pub fn subtract(&self, other: &Self) -> Result<Self, Error> {
        (-other).add(self)
    }

    pub fn divide(&self, other: &Self) -> Result<Self, Error> {
        let c = other.coeff.recip()?;
        let inv = Self::new(other.indets.iter().map(|x| x.inv()), c);
        Ok(self * inv)
    }

    // Callers must check `is_increasable` first.
    pub(crate) fn add_unchecked(&self, other: &Self) -> Self {
        debug_assert!(self.is_increasable(other));
        if self.is_zero() {
            other.clone()
        } else {
            Self::new_reduced(self.indets.clone(), self.coeff + other.coeff)
        }
    }

    // The rendering of the term with its coefficient replaced by 1.
    pub(crate) fn mono_string(&self) -> String {
        if self.degree.is_zero() {
            "1".to_string()
        } else {
            self.fmt_indets(false).join("*")
        }
    }

    fn fmt_indets(&self, tex: bool) -> Vec<String> {
        self.indets.iter().map(|x| x.fmt_impl(tex)).collect()
    }

    pub(crate) fn fmt_impl(&self, tex: bool) -> String {
        if self.degree.is_zero() {
            self.coeff.to_string()
        } else {
            let sep = if tex { "" } else { "*" };
            format::prod(&self.coeff, self.fmt_indets(tex), sep)
        }
    }
}

impl Default for Term {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Indeterminate> for Term {
    fn from(x: Indeterminate) -> Self {
        Self::new([x], 1)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.fmt_impl(false))
    }
}

impl Debug for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Neg for Term {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new_reduced(self.indets, -self.coeff)
    }
}

impl Neg for &Term {
    type Output = Term;
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

#[auto_ops]
impl MulAssign<&Term> for Term {
    fn mul_assign(&mut self, rhs: &Term) {
        let indets = std::mem::take(&mut self.indets);
        let indets = indets.into_iter().chain(rhs.indets.iter().cloned());
        *self = Term::new(indets, self.coeff * rhs.coeff)
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "tex")] {
        use crate::tex::TeX;

        impl TeX for Term {
            fn tex_string(&self) -> String {
                self.fmt_impl(true)
            }
        }
    }
}
