use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg};
use std::str::FromStr;
use auto_impl_ops::auto_ops;
use num_traits::{Zero, One};

use crate::error::{Error, NumError};

// Number of decimal digits kept by `normalize`.
pub const DIGITS: i32 = 10;

// 2^53: beyond this the scaled value has no fractional bits left to round.
const EXACT_LIMIT: f64 = 9_007_199_254_740_992.0;

// Rounds `x` to `DIGITS` decimal digits, absorbing binary noise such as
// `0.1 + 0.2`. Whole values stay integral, `-0` becomes `0`.
pub fn normalize(x: f64) -> f64 {
    let scale = 10f64.powi(DIGITS);
    let scaled = x * scale;
    let r = if scaled.is_finite() && scaled.abs() < EXACT_LIMIT {
        scaled.round() / scale
    } else {
        x
    };
    if r == 0.0 { 0.0 } else { r }
}

pub fn parse_normalize(s: &str) -> Result<Num, Error> {
    match s.trim().parse::<f64>() {
        Ok(x) => Ok(Num::new(x)),
        Err(_) => Err(NumError::Parse(s.to_string()).into())
    }
}

/// A normalized real number, used for degrees and coefficients.
///
/// Every constructor goes through [`normalize`], so two values that differ
/// only by floating-point noise compare equal.
#[derive(Clone, Copy, Default)]
pub struct Num(f64);

impl Num {
    pub const ZERO: Num = Num(0.0);
    pub const ONE: Num = Num(1.0);

    pub fn new(x: f64) -> Self {
        Self(normalize(x))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_finite() && self.0.fract() == 0.0
    }

    pub fn as_integer(&self) -> Option<i64> {
        if self.is_integer() && self.0.abs() < 9.2e18 {
            Some(self.0 as i64)
        } else {
            None
        }
    }

    pub fn checked_div(&self, rhs: &Num) -> Result<Num, Error> {
        if rhs.is_zero() {
            Err(NumError::DivisionByZero.into())
        } else {
            Ok(Num::new(self.0 / rhs.0))
        }
    }

    pub fn recip(&self) -> Result<Num, Error> {
        Num::ONE.checked_div(self)
    }
}

macro_rules! impl_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Num {
                fn from(x: $t) -> Self {
                    Self::new(x as f64)
                }
            }
        )*
    };
}

impl_from!(i32, i64, isize, u32, u64, usize, f32, f64);

impl FromStr for Num {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_normalize(s)
    }
}

impl PartialEq for Num {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0).is_eq()
    }
}

impl Eq for Num {}

impl Hash for Num {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state)
    }
}

impl PartialOrd for Num {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Num {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Display for Num {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Debug for Num {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Zero for Num {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl One for Num {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        self.0 == 1.0
    }
}

impl Neg for Num {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Num::new(-self.0)
    }
}

impl Neg for &Num {
    type Output = Num;
    fn neg(self) -> Self::Output {
        -*self
    }
}

macro_rules! impl_assop {
    ($trait:ident, $method:ident, $op:tt) => {
        #[auto_ops]
        impl $trait<&Num> for Num {
            fn $method(&mut self, rhs: &Num) {
                *self = Num::new(self.0 $op rhs.0)
            }
        }
    };
}

impl_assop!(AddAssign, add_assign, +);
impl_assop!(SubAssign, sub_assign, -);
impl_assop!(MulAssign, mul_assign, *);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_noise() {
        assert_eq!(normalize(0.1 + 0.2), 0.3);
        assert_eq!(normalize(1.0000000000001), 1.0);
        assert_eq!(normalize(2.00000000001), 2.0);
        assert_eq!(normalize(0.12345678901), 0.123456789);
    }

    #[test]
    fn normalize_keeps_digits() {
        assert_eq!(normalize(0.5), 0.5);
        assert_eq!(normalize(-2.25), -2.25);
        assert_eq!(normalize(1e20), 1e20);
    }

    #[test]
    fn normalize_neg_zero() {
        let z = normalize(-0.0);
        assert!(z.is_sign_positive());

        let z = normalize(-1e-12);
        assert!(z.is_sign_positive());
        assert_eq!(z, 0.0);
    }

    #[test]
    fn parse() {
        assert_eq!(parse_normalize("1.0000000000001"), Ok(Num::from(1)));
        assert_eq!(parse_normalize(" 2.5 "), Ok(Num::from(2.5)));
        assert_eq!(Num::from_str("-3"), Ok(Num::from(-3)));
        assert_eq!(
            parse_normalize("abc"),
            Err(Error::Numeric(NumError::Parse("abc".to_string())))
        );
    }

    #[test]
    fn display() {
        assert_eq!(Num::from(5.0).to_string(), "5");
        assert_eq!(Num::from(-1).to_string(), "-1");
        assert_eq!(Num::from(2.5).to_string(), "2.5");
        assert_eq!(Num::from(1.0 / 3.0).to_string(), "0.3333333333");
        assert_eq!(Num::from(-0.0).to_string(), "0");
    }

    #[test]
    fn integer() {
        assert_eq!(Num::from(4.0).as_integer(), Some(4));
        assert_eq!(Num::from(-4).as_integer(), Some(-4));
        assert_eq!(Num::from(0.5).as_integer(), None);
        assert!(Num::from(3).is_integer());
        assert!(!Num::from(f64::INFINITY).is_integer());
    }

    #[test]
    fn eq_and_hash() {
        use std::collections::HashSet;

        let a = Num::from(0.1) + Num::from(0.2);
        let b = Num::from(0.3);
        assert_eq!(a, b);

        let set: HashSet<Num> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn ops() {
        let a = Num::from(3);
        let b = Num::from(0.5);
        assert_eq!(a + b, Num::from(3.5));
        assert_eq!(a - b, Num::from(2.5));
        assert_eq!(&a * &b, Num::from(1.5));
        assert_eq!(-a, Num::from(-3));
        assert!((a - a).is_zero());
        assert!((a - a).value().is_sign_positive());
    }

    #[test]
    fn div() {
        let a = Num::from(3);
        assert_eq!(a.checked_div(&Num::from(2)), Ok(Num::from(1.5)));
        assert_eq!(
            a.checked_div(&Num::zero()),
            Err(Error::Numeric(NumError::DivisionByZero))
        );
        assert_eq!(Num::from(4).recip(), Ok(Num::from(0.25)));
        assert!(Num::zero().recip().is_err());
    }

    #[test]
    fn ord() {
        assert!(Num::from(-1) < Num::zero());
        assert!(Num::from(2.5) > Num::from(2));
    }
}
