use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("wrong number of arguments: expected 1, got {0}")]
    Usage(usize),

    #[error("Invalid {label}: {value}")]
    InvalidArgument { label: &'static str, value: String },

    #[error("Invalid {label}: {value} (maximum is {max})")]
    OutOfDomain {
        label: &'static str,
        value: String,
        max: u64,
    },

    #[error("Result overflowed")]
    Overflow,

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(String),
}

impl Error {
    pub fn invalid(label: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            label,
            value: value.into(),
        }
    }

    pub fn out_of_domain(label: &'static str, value: impl Into<String>, max: u64) -> Self {
        Self::OutOfDomain {
            label,
            value: value.into(),
            max,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
