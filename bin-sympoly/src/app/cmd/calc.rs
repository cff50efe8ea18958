use log::info;
use sympoly::Operand;
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let lhs = load_poly(&args.lhs)?;
    let rhs = load_operand(&args.rhs)?;

    info!("{}: ({lhs}), {:?}", args.op, rhs);

    let res = match args.op {
        Operation::Add => lhs + rhs.into_poly(),
        Operation::Sub => lhs - rhs.into_poly(),
        Operation::Mul => lhs * rhs.into_poly(),
        Operation::Div => lhs.divide(rhs)?,
        Operation::Pow => lhs.power(exponent(&rhs)?)?,
    };

    Ok(args.format.render(&res))
}

fn exponent(rhs: &Operand) -> Result<i64, Box<dyn std::error::Error>> {
    let n = match rhs {
        Operand::Const(c) => c.as_integer(),
        Operand::Poly(p) if p.is_const() => p.const_term().as_integer(),
        Operand::Poly(_) => None
    };
    match n {
        Some(n) => Ok(n),
        None => err!("exponent must be an integer, got '{}'", rhs.clone().into_poly())
    }
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    pub op: Operation,

    #[arg(allow_hyphen_values = true)]
    pub lhs: String,

    #[arg(allow_hyphen_values = true)]
    pub rhs: String,

    #[arg(short, long, default_value = "text")]
    pub format: Format,

    #[arg(long, default_value = "0")]
    pub log: u8,
}
