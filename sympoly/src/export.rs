use serde_json::{Number, Value};

use crate::{Num, Indeterminate, Term, Polynomial};
use crate::error::{Error, err};

// Nested plain-list projection:
//
//   Indeterminate : [name, subscript, degree]
//   Term          : [[indeterminate...], coefficient, degree]
//   Polynomial    : [[term...], degree]
//
// Absent subscripts are `null`. Stored degrees are checked to be numbers but
// recomputed on reconstruction.

pub trait ListForm: Sized {
    fn to_list(&self) -> Value;
    fn from_list(v: &Value) -> Result<Self, Error>;
}

impl ListForm for Indeterminate {
    fn to_list(&self) -> Value {
        let sub = match self.subscript() {
            Some(s) => Value::from(s),
            None => Value::Null
        };
        Value::Array(vec![
            Value::from(self.name()),
            sub,
            num_to_value(self.degree())
        ])
    }

    fn from_list(v: &Value) -> Result<Self, Error> {
        let [name, sub, deg] = array::<3>(v, "indeterminate")?;
        let Value::String(name) = name else {
            return err!(InvalidArgument, "name must be a string, got {name}")
        };
        let sub = match sub {
            Value::Null => None,
            Value::String(s) => Some(s.as_str()),
            _ => return err!(InvalidArgument, "subscript must be a string or null, got {sub}")
        };
        let deg = value_to_num(deg, "degree")?;
        Ok(Indeterminate::new(name, sub, deg))
    }
}

impl ListForm for Term {
    fn to_list(&self) -> Value {
        Value::Array(vec![
            Value::Array(self.indets().iter().map(|x| x.to_list()).collect()),
            num_to_value(self.coeff()),
            num_to_value(self.degree())
        ])
    }

    fn from_list(v: &Value) -> Result<Self, Error> {
        let [indets, coeff, deg] = array::<3>(v, "term")?;
        let Value::Array(indets) = indets else {
            return err!(InvalidArgument, "indeterminates must be a list, got {indets}")
        };
        let indets = indets.iter().map(Indeterminate::from_list).collect::<Result<Vec<_>, _>>()?;
        let coeff = value_to_num(coeff, "coefficient")?;
        value_to_num(deg, "degree")?;
        Ok(Term::new(indets, coeff))
    }
}

impl ListForm for Polynomial {
    fn to_list(&self) -> Value {
        Value::Array(vec![
            Value::Array(self.iter().map(|t| t.to_list()).collect()),
            num_to_value(self.degree())
        ])
    }

    fn from_list(v: &Value) -> Result<Self, Error> {
        let [terms, deg] = array::<2>(v, "polynomial")?;
        let Value::Array(terms) = terms else {
            return err!(InvalidArgument, "terms must be a list, got {terms}")
        };
        let terms = terms.iter().map(Term::from_list).collect::<Result<Vec<_>, _>>()?;
        value_to_num(deg, "degree")?;
        Ok(Polynomial::new(terms))
    }
}

fn array<'a, const N: usize>(v: &'a Value, what: &str) -> Result<&'a [Value; N], Error> {
    match v {
        Value::Array(a) => match <&[Value; N]>::try_from(a.as_slice()) {
            Ok(a) => Ok(a),
            Err(_) => err!(InvalidArgument, "{what} must be a list of length {N}, got {v}")
        },
        _ => err!(InvalidArgument, "{what} must be a list, got {v}")
    }
}

// Integral values export as JSON integers, non-finite ones as `null`.
fn num_to_value(n: Num) -> Value {
    if let Some(i) = n.as_integer() {
        Value::from(i)
    } else {
        Number::from_f64(n.value()).map(Value::Number).unwrap_or(Value::Null)
    }
}

fn value_to_num(v: &Value, what: &str) -> Result<Num, Error> {
    match v.as_f64() {
        Some(x) => Ok(Num::new(x)),
        _ => err!(InvalidArgument, "{what} must be a number, got {v}")
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;

    macro_rules! impl_serde {
        ($t:ty) => {
            impl serde::Serialize for $t {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where S: serde::Serializer {
                    serde::Serialize::serialize(&self.to_list(), serializer)
                }
            }

            impl<'de> serde::Deserialize<'de> for $t {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where D: serde::Deserializer<'de> {
                    let v = <Value as serde::Deserialize>::deserialize(deserializer)?;
                    <$t>::from_list(&v).map_err(serde::de::Error::custom)
                }
            }
        };
    }

    impl_serde!(Indeterminate);
    impl_serde!(Term);
    impl_serde!(Polynomial);
}
