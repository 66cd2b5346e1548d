//! Error type shared by every fallible operation of this crate.

use std::io;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while reading samples,
/// growing a tree, or classifying examples.
#[derive(Debug, Error)]
pub enum Id3Error {
    /// An example was asked for an attribute it does not hold.
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A decision node was asked for a branch it never registered.
    #[error("No branch `{value}` under the node testing `{attribute}`")]
    NoSuchBranch {
        /// Attribute tested by the node.
        attribute: String,
        /// The requested branch value.
        value: String,
    },

    /// A tree cannot be grown from zero examples.
    #[error("Cannot grow a tree from an empty training set")]
    EmptyTrainingSet,

    /// Accuracy over zero examples is undefined.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A candidate attribute is absent from the domain catalogue.
    #[error("Attribute `{0}` is not in the domain catalogue")]
    MalformedCatalogue(String),

    /// A training or evaluation example carries no target label.
    #[error("Example #{0} has no target label")]
    MissingTarget(usize),

    /// An example was constructed from sequences of different lengths.
    #[error("Malformed example: {0}")]
    MalformedExample(String),

    /// A value does not belong to the declared domain of its attribute.
    #[error("Line {line}: value `{value}` is not declared for `{attribute}`")]
    UnknownValue {
        /// 1-indexed line number in the source file.
        line: usize,
        /// Attribute the value was read for.
        attribute: String,
        /// The offending value.
        value: String,
    },

    /// The input file does not follow the expected format.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-indexed line number in the source file.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error raised by `polars` while reading a CSV file.
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    /// Error raised while (de)serializing a tree.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Id3Error {
    /// Shorthand for [`Id3Error::Parse`].
    pub(crate) fn parse<S: ToString>(line: usize, message: S) -> Self {
        Self::Parse { line, message: message.to_string() }
    }
}

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Id3Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Id3Error::UnknownAttribute("Humid".to_string());
        assert!(format!("{err}").contains("Humid"));

        let err = Id3Error::NoSuchBranch {
            attribute: "Weather".to_string(),
            value: "Snowy".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("Weather"));
        assert!(msg.contains("Snowy"));

        let err = Id3Error::EmptyInput("accuracy".to_string());
        assert!(format!("{err}").contains("accuracy"));

        let err = Id3Error::parse(7, "missing `@data` section");
        assert!(format!("{err}").contains("line 7"));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err: Id3Error = io_err.into();
        assert!(matches!(err, Id3Error::Io(_)));
    }
}
