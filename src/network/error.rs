//! Common error types for network operations

/// Errors produced while resolving a URL or running an HTTP exchange.
///
/// Every variant is terminal for the exchange that produced it: nothing is
/// retried and no partial response is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The URL could not be parsed, or carried an invalid port.
    #[error("malformed url: {0}")]
    MalformedUrl(String),
    /// DNS resolution or the TCP connect failed.
    #[error("connection failed: {0}")]
    Connection(String),
    /// The request could not be delivered in full.
    #[error("transmission failed: {0}")]
    Transmission(String),
    /// Reading the response failed before the peer closed the stream.
    #[error("receive failed: {0}")]
    Receive(String),
    /// The response bytes could not be parsed as an HTTP response.
    #[error("malformed response: {0}")]
    MalformedResponse(&'static str),
    /// A request would carry more headers than it has room for.
    #[error("too many request headers (max {0})")]
    HeaderOverflow(usize),
    /// The method name is neither GET nor POST.
    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::MalformedUrl(m) => defmt::write!(f, "MalformedUrl({=str})", m.as_str()),
            Error::Connection(m) => defmt::write!(f, "Connection({=str})", m.as_str()),
            Error::Transmission(m) => defmt::write!(f, "Transmission({=str})", m.as_str()),
            Error::Receive(m) => defmt::write!(f, "Receive({=str})", m.as_str()),
            Error::MalformedResponse(m) => defmt::write!(f, "MalformedResponse({=str})", *m),
            Error::HeaderOverflow(max) => defmt::write!(f, "HeaderOverflow({=usize})", *max),
            Error::UnsupportedMethod(m) => {
                defmt::write!(f, "UnsupportedMethod({=str})", m.as_str())
            }
        }
    }
}
