use itertools::Itertools;
use num_traits::One;
use crate::Num;

// Renders a single factor `x`, `x_i`, `x^d` or `x_i^d`. In TeX mode the
// subscript / exponent are wrapped as `x$_{i}^{d}$`.
pub fn mono(x: &str, sub: Option<&str>, deg: &Num, tex: bool) -> String {
    if x.is_empty() {
        return "1".to_string()
    }

    let sub = sub.filter(|s| !s.is_empty());

    match (sub, deg.is_one(), tex) {
        (None,    true,  _)     => x.to_string(),
        (Some(i), true,  false) => format!("{x}_{i}"),
        (Some(i), true,  true)  => format!("{x}$_{{{i}}}$"),
        (None,    false, false) => format!("{x}^{deg}"),
        (None,    false, true)  => format!("{x}$^{{{deg}}}$"),
        (Some(i), false, false) => format!("{x}_{i}^{deg}"),
        (Some(i), false, true)  => format!("{x}$_{{{i}}}^{{{deg}}}$"),
    }
}

// Renders `c * x_1 * ... * x_n`. A unit coefficient is omitted and `-1`
// becomes a bare sign.
pub fn prod<I>(coeff: &Num, factors: I, sep: &str) -> String
where I: IntoIterator<Item = String> {
    let c = if coeff.is_one() {
        String::new()
    } else if *coeff == -Num::ONE {
        "-".to_string()
    } else {
        coeff.to_string()
    };
    let x = factors.into_iter().join(sep);
    format!("{c}{x}")
}

// Joins terms with `+`, folding `+-` into `-`.
pub fn sum<I>(terms: I) -> String
where I: IntoIterator<Item = String> {
    let s = terms.into_iter().join("+").replace("+-", "-");
    match s.strip_prefix('+') {
        Some(s) => s.to_string(),
        None => s
    }
}

pub fn indent(spaces: usize) -> String {
    " ".repeat(spaces)
}
