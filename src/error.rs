#![warn(missing_docs)]
//! coordgen specific error structures
use std::{error::Error, fmt::Display};

/// coordgen application specific Result type
pub type CgResult<T> = std::result::Result<T, CoordGenError>;

/// Errors that can be returned by various coordgen functions.
#[derive(Debug, PartialEq, Eq)]
pub enum CoordGenError {
    /// invalid user input or configuration: non-numeric values, unknown modes, inverted bounds, ...
    InvalidConfiguration(String),
    /// a point collection does not have the expected dimensionality
    ShapeMismatch(String),
    /// a file could not be read or written
    IoFailure(String),
    /// errors console io
    Console(String),
    /// errors of the drawing backend
    Plot(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for CoordGenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(m) => {
                write!(f, "InvalidConfiguration:{m}")
            }
            Self::ShapeMismatch(m) => {
                write!(f, "ShapeMismatch:{m}")
            }
            Self::IoFailure(m) => {
                write!(f, "IoFailure:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Plot(m) => {
                write!(f, "Plot:{m}")
            }
            Self::Other(m) => write!(f, "coordgen Error:Other:{m}"),
        }
    }
}
impl Error for CoordGenError {}

impl std::convert::From<String> for CoordGenError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
impl std::convert::From<std::io::Error> for CoordGenError {
    fn from(err: std::io::Error) -> Self {
        Self::IoFailure(err.to_string())
    }
}
impl std::convert::From<csv::Error> for CoordGenError {
    fn from(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Io(_) => Self::IoFailure(err.to_string()),
            csv::ErrorKind::Utf8 { .. } => Self::InvalidConfiguration(err.to_string()),
            _ => Self::ShapeMismatch(err.to_string()),
        }
    }
}
impl std::convert::From<serde_yaml::Error> for CoordGenError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::InvalidConfiguration(format!("parsing of config failed: {err}"))
    }
}
