use itertools::Itertools;

use crate::{Indeterminate, Term, Polynomial};
use crate::util::format::indent;

const CHILD_INDENT: usize = 5;

/// Indented structural dump, recursing into children.
pub trait Detail {
    fn fmt_detail(&self, spaces: usize) -> String;

    fn show_detail(&self) {
        println!("{}", self.fmt_detail(0))
    }
}

impl Detail for Indeterminate {
    fn fmt_detail(&self, spaces: usize) -> String {
        let s = indent(spaces);
        let sub = self.subscript().unwrap_or("-");
        [
            format!("{s}name     :\t    {}", self.name()),
            format!("{s}subscript:\t    {sub}"),
            format!("{s}degree   :\t    {}", self.degree()),
        ].join("\n")
    }
}

impl Detail for Term {
    fn fmt_detail(&self, spaces: usize) -> String {
        let s = indent(spaces);
        let head = [
            format!("{s}number of indeterminates:\t    {}", self.nindets()),
            format!("{s}coefficient             :\t    {}", self.coeff()),
            format!("{s}degree                  :\t    {}", self.degree()),
        ];
        let children = self.indets().iter().enumerate().map(|(i, x)|
            format!("{s}Indeterminate #{:02}:\n{}", i + 1, x.fmt_detail(spaces + CHILD_INDENT))
        );
        head.into_iter().chain(children).join("\n")
    }
}

impl Detail for Polynomial {
    fn fmt_detail(&self, spaces: usize) -> String {
        let s = indent(spaces);
        let head = [
            format!("{s}number of terms:\t    {}", self.nterms()),
            format!("{s}degree         :\t    {}", self.degree()),
        ];
        let children = self.iter().enumerate().map(|(i, t)|
            format!("{s}Term #{:02}:\n{}", i + 1, t.fmt_detail(spaces + CHILD_INDENT))
        );
        head.into_iter().chain(children).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indet() {
        let x = Indeterminate::new("x", Some("1"), 2);
        assert_eq!(x.fmt_detail(2), [
            "  name     :\t    x",
            "  subscript:\t    1",
            "  degree   :\t    2",
        ].join("\n"));

        let x = Indeterminate::var("y");
        assert!(x.fmt_detail(0).contains("subscript:\t    -"));
    }

    #[test]
    fn term() {
        let t = Term::new([Indeterminate::var("x")], -3);
        assert_eq!(t.fmt_detail(0), [
            "number of indeterminates:\t    1",
            "coefficient             :\t    -3",
            "degree                  :\t    1",
            "Indeterminate #01:",
            "     name     :\t    x",
            "     subscript:\t    -",
            "     degree   :\t    1",
        ].join("\n"));
    }

    #[test]
    fn poly() {
        let p = Polynomial::variable("x") + 1;
        let d = p.fmt_detail(0);
        let lines = d.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "number of terms:\t    2");
        assert_eq!(lines[1], "degree         :\t    1");
        assert_eq!(lines[2], "Term #01:");
        assert_eq!(lines[3], "     number of indeterminates:\t    1");
        assert_eq!(lines[6], "     Indeterminate #01:");
        assert_eq!(lines[7], "          name     :\t    x");
        assert!(lines.contains(&"Term #02:"));
        assert_eq!(lines.len(), 2 + 2 * (1 + 3 + 1 + 3));
    }
}
