use std::cmp::Reverse;
use std::fmt::{Display, Debug};
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg};
use auto_impl_ops::auto_ops;
use delegate::delegate;
use itertools::Itertools;
use log::{debug, trace};
use num_traits::{Zero, One, Pow};

use crate::Num;
use crate::error::{Error, err, ensure};
use crate::util::format;
use super::{Indeterminate, Term};

// A polynomial is a sum of terms, kept in canonical order:
//
//   1. degree, descending,
//   2. number of factors, ascending,
//   3. rendering of the term with unit coefficient, ascending,
//   4. factor structure, ascending.
//
// Like terms are then adjacent and merged. The term list is never empty;
// the zero polynomial holds `[ZERO_TERM]`.

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Polynomial {
    terms: Vec<Term>,
    degree: Num,
}

impl Polynomial {
    pub fn new<I>(terms: I) -> Self
    where I: IntoIterator<Item = Term> {
        let terms = Self::reduce(terms.into_iter().collect());
        let degree = terms.first().map(Term::degree).unwrap_or_default();
        Self { terms, degree }
    }

    fn reduce(mut terms: Vec<Term>) -> Vec<Term> {
        let n = terms.len();

        terms.retain(|t| !t.is_zero());

        // stable sorts: the later sort dominates, earlier ones break ties.
        terms.sort_by(|s, t| s.indets().cmp(t.indets()));
        terms.sort_by_cached_key(|t|
            (Reverse(t.degree()), t.nindets(), t.mono_string())
        );

        let mut i = 0;
        while i + 1 < terms.len() {
            let (s, t) = (&terms[i], &terms[i + 1]);
            if s.is_increasable(t) {
                let st = s.add_unchecked(t);
                if st.is_zero() {
                    terms.drain(i..i + 2);
                } else {
                    terms[i] = st;
                    terms.remove(i + 1);
                }
            } else {
                i += 1;
            }
        }

        if terms.is_empty() {
            terms.push(Term::zero());
        }

        trace!("reduce terms: {n} -> {}", terms.len());

        terms
    }

    pub fn from_const<C>(c: C) -> Self
    where C: Into<Num> {
        Self::from(Term::constant(c))
    }

    pub fn variable(name: &str) -> Self {
        Self::from(Indeterminate::var(name))
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    delegate! {
        to self.terms {
            #[call(len)]
            pub fn nterms(&self) -> usize;
            pub fn iter(&self) -> std::slice::Iter<'_, Term>;
        }
    }

    pub fn degree(&self) -> Num {
        self.degree
    }

    pub fn lead_term(&self) -> &Term {
        &self.terms[0]
    }

    pub fn is_const(&self) -> bool {
        self.terms.iter().all(Term::is_const)
    }

    pub fn const_term(&self) -> Num {
        self.terms.iter()
            .find(|t| t.is_const())
            .map(Term::coeff)
            .unwrap_or_default()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add<T>(&self, rhs: T) -> Self
    where T: Into<Operand> {
        self + rhs.into().into_poly()
    }

    pub fn subtract<T>(&self, rhs: T) -> Self
    where T: Into<Operand> {
        self - rhs.into().into_poly()
    }

    pub fn multiply<T>(&self, rhs: T) -> Self
    where T: Into<Operand> {
        self * rhs.into().into_poly()
    }

    // `c - self`.
    pub fn reverse_subtract<C>(&self, c: C) -> Self
    where C: Into<Num> {
        -self + Self::from_const(c)
    }

    // Only division by a scalar is supported.
    pub fn divide<T>(&self, rhs: T) -> Result<Self, Error>
    where T: Into<Operand> {
        match rhs.into() {
            Operand::Poly(p) => err!(
                UnsupportedOperation,
                "cannot divide '{self}' by polynomial '{p}'"
            ),
            Operand::Const(c) => {
                let r = c.recip()?;
                Ok(self * Self::from_const(r))
            }
        }
    }

    pub fn power(&self, n: i64) -> Result<Self, Error> {
        ensure!(n >= 0, InvalidArgument, "power must be a nonnegative integer, got {n}");
        Ok(self.pow(n as u64))
    }

    pub(crate) fn fmt_impl(&self, tex: bool) -> String {
        format::sum(self.terms.iter().map(|t| t.fmt_impl(tex)))
    }
}

// A bare constant or a polynomial, accepted where both may appear.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Poly(Polynomial),
    Const(Num),
}

impl Operand {
    pub fn into_poly(self) -> Polynomial {
        match self {
            Operand::Poly(p) => p,
            Operand::Const(c) => Polynomial::from_const(c)
        }
    }
}

impl From<Polynomial> for Operand {
    fn from(p: Polynomial) -> Self {
        Operand::Poly(p)
    }
}

impl From<&Polynomial> for Operand {
    fn from(p: &Polynomial) -> Self {
        Operand::Poly(p.clone())
    }
}

impl From<Indeterminate> for Polynomial {
    fn from(x: Indeterminate) -> Self {
        Self::from(Term::from(x))
    }
}

impl From<Term> for Polynomial {
    fn from(t: Term) -> Self {
        Self::new([t])
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<T: IntoIterator<Item = Term>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for Polynomial {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.fmt_impl(false))
    }
}

impl Debug for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Self::new([])
    }

    fn is_zero(&self) -> bool {
        self.terms.iter().all(Term::is_zero)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Self::from_const(1)
    }

    fn is_one(&self) -> bool {
        self.is_const() && self.const_term().is_one()
    }
}

impl Neg for Polynomial {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(self.terms.into_iter().map(|t| -t))
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Self::Output {
        Polynomial::new(self.terms.iter().map(|t| -t))
    }
}

#[auto_ops]
impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        let terms = std::mem::take(&mut self.terms);
        *self = Polynomial::new(terms.into_iter().chain(rhs.terms.iter().cloned()))
    }
}

// p - q = (-q) + p
#[auto_ops]
impl SubAssign<&Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: &Polynomial) {
        let terms = std::mem::take(&mut self.terms);
        *self = Polynomial::new((-rhs).terms.into_iter().chain(terms))
    }
}

#[auto_ops]
impl MulAssign<&Polynomial> for Polynomial {
    fn mul_assign(&mut self, rhs: &Polynomial) {
        let terms = rhs.terms.iter().flat_map(|t|
            self.terms.iter().map(move |s| s * t)
        ).collect_vec();
        *self = Polynomial::new(terms)
    }
}

macro_rules! impl_const_ops {
    ($t:ty) => {
        impl From<$t> for Operand {
            fn from(c: $t) -> Self {
                Operand::Const(Num::from(c))
            }
        }

        impl From<$t> for Polynomial {
            fn from(c: $t) -> Self {
                Polynomial::from_const(c)
            }
        }

        impl Add<$t> for Polynomial {
            type Output = Polynomial;
            fn add(self, c: $t) -> Polynomial {
                self + Polynomial::from_const(c)
            }
        }

        impl Add<$t> for &Polynomial {
            type Output = Polynomial;
            fn add(self, c: $t) -> Polynomial {
                self + Polynomial::from_const(c)
            }
        }

        impl Add<Polynomial> for $t {
            type Output = Polynomial;
            fn add(self, p: Polynomial) -> Polynomial {
                p + self
            }
        }

        impl Add<&Polynomial> for $t {
            type Output = Polynomial;
            fn add(self, p: &Polynomial) -> Polynomial {
                p + self
            }
        }

        impl Sub<$t> for Polynomial {
            type Output = Polynomial;
            fn sub(self, c: $t) -> Polynomial {
                self - Polynomial::from_const(c)
            }
        }

        impl Sub<$t> for &Polynomial {
            type Output = Polynomial;
            fn sub(self, c: $t) -> Polynomial {
                self - Polynomial::from_const(c)
            }
        }

        impl Sub<Polynomial> for $t {
            type Output = Polynomial;
            fn sub(self, p: Polynomial) -> Polynomial {
                p.reverse_subtract(self)
            }
        }

        impl Sub<&Polynomial> for $t {
            type Output = Polynomial;
            fn sub(self, p: &Polynomial) -> Polynomial {
                p.reverse_subtract(self)
            }
        }

        impl Mul<$t> for Polynomial {
            type Output = Polynomial;
            fn mul(self, c: $t) -> Polynomial {
                self * Polynomial::from_const(c)
            }
        }

        impl Mul<$t> for &Polynomial {
            type Output = Polynomial;
            fn mul(self, c: $t) -> Polynomial {
                self * Polynomial::from_const(c)
            }
        }

        impl Mul<Polynomial> for $t {
            type Output = Polynomial;
            fn mul(self, p: Polynomial) -> Polynomial {
                p * self
            }
        }

        impl Mul<&Polynomial> for $t {
            type Output = Polynomial;
            fn mul(self, p: &Polynomial) -> Polynomial {
                p * self
            }
        }
    };
}

impl_const_ops!(Num);
impl_const_ops!(i32);
impl_const_ops!(f64);

// Repeated multiplication, starting from one.
macro_rules! impl_pow_unsigned {
    ($t:ty) => {
        impl Pow<$t> for &Polynomial {
            type Output = Polynomial;
            fn pow(self, n: $t) -> Self::Output {
                debug!("power: ({self})^{n}");
                let mut res = Polynomial::one();
                for _ in 0..n {
                    res *= self
                }
                res
            }
        }
    };
}

impl_pow_unsigned!(u32);
impl_pow_unsigned!(u64);
impl_pow_unsigned!(usize);

cfg_if::cfg_if! {
    if #[cfg(feature = "tex")] {
        use crate::tex::TeX;

        impl TeX for Polynomial {
            fn tex_string(&self) -> String {
                self.fmt_impl(true)
            }
        }
    }
}
