use std::fmt::{Debug, Display};

/// What stage of the work failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ErrorKind {
    /// The target folder could not be listed. Stops the whole run.
    ListDirectory,
    /// The directory iterator failed to yield an entry.
    ReadEntry,
    Decode,
    Resize,
    Encode,
    Write,
}

pub struct ScaleError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ScaleError {
    pub fn new(kind: ErrorKind, message: impl ToString) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }
}

impl Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Debug for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScaleError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for ScaleError {}

#[macro_export]
macro_rules! si_err {
    ($kind:expr, $msg:expr) => {
        $crate::error::ScaleError::new(
            $kind,
            format!("scale_icon: {} @ {}:{}:{}", $msg, file!(), line!(), column!()),
        )
    };
    ($kind:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::si_err!($kind, format!($fmt, $($arg)+))
    };
}

#[macro_export]
macro_rules! si_try {
    ($kind:expr, $expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::si_err!($kind, err));
            }
        }
    };
}
