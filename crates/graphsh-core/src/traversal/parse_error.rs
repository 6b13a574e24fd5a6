use thiserror::Error;

/// A malformed traversal expression. The query path is left unchanged.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Path segment must not be empty")]
    EmptySegment,

    #[error("Traversal `{input}` must start with `.`")]
    MissingLeadingDot {
        input: String,
    },

    #[error("Invalid traversal segment `{segment}`")]
    InvalidSegment {
        segment: String,
    },

    #[error("Invalid argument name `{name}` in traversal segment `{segment}`")]
    InvalidArgumentName {
        segment: String,
        name: String,
    },

    #[error("Argument `{pair}` in traversal segment `{segment}` has no value (expected `name: value`)")]
    MissingArgumentValue {
        segment: String,
        pair: String,
    },

    #[error("Invalid value `{value}` for argument `{name}`: {message}")]
    InvalidArgumentValue {
        name: String,
        value: String,
        message: String,
    },

    #[error("Invalid up-traversal `{input}` (expected `..` or `../..`)")]
    InvalidAscend {
        input: String,
    },
}
