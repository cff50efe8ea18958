use derive_more::Display;

#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum NumError {
    #[display("division by zero")]
    DivisionByZero,
    #[display("cannot parse '{_0}' as a number")]
    Parse(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum Error {
    #[display("invalid argument: {_0}")]
    InvalidArgument(String),
    #[display("invalid operation: {_0}")]
    InvalidOperation(String),
    #[display("unsupported operation: {_0}")]
    UnsupportedOperation(String),
    #[display("{_0}")]
    Numeric(NumError),
}

impl std::error::Error for NumError {}
impl std::error::Error for Error {}

impl From<NumError> for Error {
    fn from(e: NumError) -> Self {
        Error::Numeric(e)
    }
}

impl Error {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Error::InvalidOperation(_))
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::UnsupportedOperation(_))
    }
}

macro_rules! err {
    ($kind:ident, $($arg:tt)*) => {{
        let msg = format!($($arg)*);
        Err( $crate::error::Error::$kind(msg) )
    }}
}

macro_rules! ensure {
    ($cond:expr, $kind:ident, $($arg:tt)*) => {{
        if !$cond {
            return $crate::error::err!($kind, $($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};
