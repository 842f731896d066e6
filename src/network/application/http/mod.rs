//! HTTP/1.1 over raw stream sockets.
//!
//! This module frames HTTP/1.1 requests by hand, sends them over a
//! [`Connection`](crate::network::Connection) and parses the response back out
//! of the byte stream. It does not use any HTTP library.
//!
//! # Features
//!
//! - GET and POST, with `application/x-www-form-urlencoded` form bodies
//! - One request per connection, always sent with `Connection: Close`
//! - Response read until end of stream, with no size limit
//! - Status code, headers and body parsed from the raw bytes
//!
//! # Non-features
//!
//! No TLS, redirects, chunked transfer-encoding, keep-alive or timeouts. The
//! response body is whatever follows the first blank line; `Content-Length`
//! is not used to frame it.
//!
//! # Usage
//!
//! The main entry point is [`Client`], which works with any connector
//! implementing [`Connect`](crate::network::Connect). [`execute`] is a
//! shorthand for a client over [`TcpConnector`](crate::network::tcp::TcpConnector).
//!
//! ```rust,no_run
//! use rawhttp::network::application::http::{Client, Method};
//! use rawhttp::network::tcp::TcpConnector;
//!
//! let mut client = Client::new(TcpConnector);
//! let response = client.execute(Method::Post, "http://localhost:8080/form", Some(&[("a", "1")][..]))?;
//! println!("{}", response.status_code);
//! # Ok::<(), rawhttp::network::error::Error>(())
//! ```

/// The exchange engine: connect, send, receive, close, parse.
pub mod client;

/// Request methods, headers and wire framing.
pub mod request;

/// Response parsing.
pub mod response;

/// URL to host/port/path resolution.
pub mod target;

pub use client::{Client, Options, execute};
pub use request::{Header, Method, Request, encode_form};
pub use response::Response;
pub use target::{Target, resolve};
