use std::path::Path;
use log::debug;
use sympoly::{Num, Polynomial, Operand, ListForm};
use crate::app::err::*;

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration)
where F: FnOnce() -> Res {
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn guard_panic<F, R>(f: F) -> Result<R, Box<dyn std::error::Error>>
where F: FnOnce() -> Result<R, Box<dyn std::error::Error>> + std::panic::UnwindSafe {
    std::panic::catch_unwind(|| {
        f()
    }).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "Unknown Source of Error".to_owned()
            }
        };
        err!("panic: {info}")
    })
}

// Accepts a number, a list-form JSON, or a path to a file holding one.
pub fn load_poly(input: &str) -> Result<Polynomial, Box<dyn std::error::Error>> {
    match load_operand(input)? {
        Operand::Const(c) => Ok(Polynomial::from_const(c)),
        Operand::Poly(p) => Ok(p)
    }
}

pub fn load_operand(input: &str) -> Result<Operand, Box<dyn std::error::Error>> {
    if let Ok(c) = input.parse::<Num>() {
        debug!("operand: number {c}");
        return Ok(Operand::Const(c))
    }

    if let Ok(v) = serde_json::from_str::<serde_json::Value>(input) {
        debug!("operand: list form");
        let p = Polynomial::from_list(&v)?;
        return Ok(Operand::Poly(p))
    }

    let path = Path::new(input);
    if path.is_file() {
        debug!("operand: file {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let v = serde_json::from_str::<serde_json::Value>(&content)?;
        let p = Polynomial::from_list(&v)?;
        return Ok(Operand::Poly(p))
    }

    err!("invalid input polynomial: '{input}'")
}
