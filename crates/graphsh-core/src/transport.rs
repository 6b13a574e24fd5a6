use thiserror::Error;

/// Sends a query document to a GraphQL service and hands back the raw
/// response body.
///
/// Implementations are opaque bytes-in/bytes-out: decoding the response is
/// the caller's job.
pub trait Querier {
    fn query(&self, text: &str) -> Result<Vec<u8>, TransportError>;
}

impl<T: Querier + ?Sized> Querier for &T {
    fn query(&self, text: &str) -> Result<Vec<u8>, TransportError> {
        (**self).query(text)
    }
}

impl<T: Querier + ?Sized> Querier for Box<T> {
    fn query(&self, text: &str) -> Result<Vec<u8>, TransportError> {
        (**self).query(text)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TransportError {
    #[error("Invalid request header `{header}`: expected `Name: value`")]
    InvalidHeader {
        header: String,
    },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("{0}")]
    Other(String),
}
