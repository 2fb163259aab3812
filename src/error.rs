//! Error types for the bitmap editor

use std::convert::Infallible;
use std::fmt;

use thiserror::Error;

/// Result type alias for bitmap and editor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Grid axis named by a coordinate error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Errors that can occur while building, painting or driving a bitmap
#[derive(Error, Debug)]
pub enum Error {
    /// Bitmap dimensions outside of `1..=250`
    #[error("Invalid bitmap size {width}x{height}: both dimensions must be between 1 and 250")]
    InvalidSize { width: i64, height: i64 },

    /// Coordinate outside of the current grid
    #[error("Coordinate {axis}={value} is out of range: expected 1..={max}")]
    CoordinateOutOfRange { axis: Axis, value: i64, max: usize },

    /// Colour is not a single uppercase letter
    #[error("Invalid colour {0:?}: expected a single letter A-Z")]
    InvalidColour(String),

    /// Command letter not understood by the dispatcher
    #[error("Unrecognised command: {0}")]
    UnknownCommand(String),

    /// Wrong number of arguments for a command
    #[error("Invalid arguments. Usage: {usage}")]
    InvalidArguments { usage: &'static str },

    /// Argument that should have been an integer
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// A drawing command was issued before any `I` command
    #[error("There is no image")]
    NoImage,

    /// Snapshot could not be serialized
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading commands or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Lets `Colour` itself be passed wherever a fallible colour conversion is accepted.
impl From<Infallible> for Error {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = Error::CoordinateOutOfRange {
            axis: Axis::Y,
            value: 26,
            max: 25,
        };
        assert_eq!(err.to_string(), "Coordinate y=26 is out of range: expected 1..=25");

        let err = Error::InvalidSize { width: 0, height: 3 };
        assert!(err.to_string().contains("0x3"));

        let err = Error::InvalidColour("k".into());
        assert!(err.to_string().contains("\"k\""));
    }
}
