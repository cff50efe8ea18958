//! Property-based tests for canonical forms and polynomial arithmetic.

use num_traits::{Zero, One};
use proptest::prelude::*;
use proptest::collection::vec;

use crate::{Indeterminate, Term, Polynomial, ListForm};

// Degrees are halves so that sums stay exact; zero yields `CONSTANT`.
fn indet() -> impl Strategy<Value = Indeterminate> {
    (
        prop::sample::select(vec!["x", "y", "z"]),
        prop::sample::select(vec![None, Some("1"), Some("2")]),
        prop::sample::select(vec![-2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0]),
    ).prop_map(|(x, i, d)| Indeterminate::new(x, i, d))
}

fn term() -> impl Strategy<Value = Term> {
    (vec(indet(), 0..4), -5i32..=5).prop_map(|(xs, c)| Term::new(xs, c))
}

// Powers of two, whose reciprocals are exact.
fn divisor() -> impl Strategy<Value = i32> {
    prop::sample::select(vec![-4, -2, -1, 1, 2, 4])
}

fn divisor_term() -> impl Strategy<Value = Term> {
    (vec(indet(), 0..4), divisor()).prop_map(|(xs, c)| Term::new(xs, c))
}

fn poly() -> impl Strategy<Value = Polynomial> {
    vec(term(), 0..5).prop_map(Polynomial::new)
}

// A term list together with a permutation of it.
fn shuffled_terms() -> impl Strategy<Value = (Vec<Term>, Vec<Term>)> {
    vec(term(), 0..6).prop_flat_map(|ts| (Just(ts.clone()), Just(ts).prop_shuffle()))
}

// Terms mixed with negations of some of them and a zero term, together with
// a permutation of the whole list.
fn cancelling_terms() -> impl Strategy<Value = (Vec<Term>, Vec<Term>)> {
    vec((term(), any::<bool>()), 0..5)
        .prop_map(|v| {
            let mut ts = vec![Term::zero()];
            for (t, neg) in v {
                if neg {
                    ts.push(-&t);
                }
                ts.push(t);
            }
            ts
        })
        .prop_flat_map(|ts| (Just(ts.clone()), Just(ts).prop_shuffle()))
}

proptest! {
    #[test]
    fn term_factor_order_irrelevant(
        (xs, ys) in vec(indet(), 0..5).prop_flat_map(|xs| (Just(xs.clone()), Just(xs).prop_shuffle())),
        c in -5i32..=5
    ) {
        prop_assert_eq!(Term::new(xs, c), Term::new(ys, c));
    }

    #[test]
    fn poly_term_order_irrelevant((ts, us) in shuffled_terms()) {
        let p = Polynomial::new(ts);
        let q = Polynomial::new(us);
        prop_assert_eq!(p.to_string(), q.to_string());
        prop_assert_eq!(p, q);
    }

    #[test]
    fn poly_canonical_is_fixed_point(p in poly()) {
        let q = Polynomial::new(p.terms().to_vec());
        prop_assert_eq!(p, q);
    }

    #[test]
    fn poly_never_empty(p in poly()) {
        prop_assert!(p.nterms() > 0);
        prop_assert!(p.nterms() == 1 || p.iter().all(|t| !t.is_zero()));
    }

    #[test]
    fn poly_add_zero(p in poly()) {
        prop_assert_eq!(&p + Polynomial::zero(), p);
    }

    #[test]
    fn poly_sub_self(p in poly()) {
        prop_assert!((&p - &p).is_zero());
    }

    #[test]
    fn poly_mul_one(p in poly()) {
        prop_assert_eq!(&p * Polynomial::one(), p.clone());
        prop_assert_eq!(Polynomial::one() * &p, p);
    }

    #[test]
    fn poly_pow_zero(p in poly()) {
        prop_assert_eq!(p.power(0).unwrap(), Polynomial::one());
    }

    #[test]
    fn poly_add_commutative(p in poly(), q in poly()) {
        prop_assert_eq!(&p + &q, &q + &p);
    }

    #[test]
    fn poly_add_associative(p in poly(), q in poly(), r in poly()) {
        prop_assert_eq!((&p + &q) + &r, &p + (&q + &r));
    }

    #[test]
    fn poly_mul_commutative(p in poly(), q in poly()) {
        prop_assert_eq!(&p * &q, &q * &p);
    }

    #[test]
    fn poly_mul_associative(p in poly(), q in poly(), r in poly()) {
        prop_assert_eq!((&p * &q) * &r, &p * (&q * &r));
    }

    #[test]
    fn poly_distributive(p in poly(), q in poly(), r in poly()) {
        prop_assert_eq!(&p * (&q + &r), &p * &q + &p * &r);
    }

    #[test]
    fn poly_sub_is_add_neg(p in poly(), q in poly()) {
        prop_assert_eq!(&p - &q, &p + (-&q));
    }

    #[test]
    fn poly_list_round_trip(p in poly()) {
        prop_assert_eq!(Polynomial::from_list(&p.to_list()).unwrap(), p);
    }

    #[test]
    fn term_list_round_trip(t in term()) {
        prop_assert_eq!(Term::from_list(&t.to_list()).unwrap(), t);
    }

    #[test]
    fn poly_cancellation_order_irrelevant((ts, us) in cancelling_terms()) {
        let p = Polynomial::new(ts);
        let q = Polynomial::new(us);
        prop_assert!(p.nterms() == 1 || p.iter().all(|t| !t.is_zero()));
        prop_assert_eq!(p.to_string(), q.to_string());
        prop_assert_eq!(p, q);
    }

    #[test]
    fn term_divide_then_multiply(t in term(), s in divisor_term()) {
        let q = t.divide(&s).unwrap();
        prop_assert_eq!(q * &s, t);
    }

    #[test]
    fn term_divide_self(s in divisor_term()) {
        prop_assert_eq!(s.divide(&s).unwrap(), Term::constant(1));
    }

    #[test]
    fn poly_divide_then_multiply(p in poly(), c in divisor()) {
        let q = p.divide(c).unwrap();
        prop_assert_eq!(q * c, p);
    }

    #[test]
    fn poly_divide_by_zero(p in poly()) {
        prop_assert!(p.divide(0).is_err());
    }
}
