use clap::ValueEnum;
use derive_more::Display;
use sympoly::{Polynomial, ListForm, Detail};
use sympoly::tex::TeX;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="lower")]
pub enum Format {
    #[default] Text,
    TeX,
    Json,
    Detail,
}

impl Format {
    pub fn render(&self, p: &Polynomial) -> String {
        match self {
            Format::Text   => p.to_string(),
            Format::TeX    => p.tex_string(),
            Format::Json   => p.to_list().to_string(),
            Format::Detail => p.fmt_detail(0),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="lower")]
pub enum Operation {
    #[default] Add,
    Sub,
    Mul,
    Div,
    Pow,
}
