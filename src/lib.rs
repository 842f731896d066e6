//! # rawhttp - HTTP/1.1 over raw sockets
//!
//! A minimal HTTP/1.1 client that talks to servers over plain TCP stream
//! sockets without any HTTP library in between. Requests are framed byte by
//! byte, responses are read until the peer closes the connection and then
//! parsed back into a status code, headers and a body.
//!
//! ## Features
//!
//! ### URL Resolution
//! - Decomposes `scheme://host[:port]/path` into a connection [`Target`](network::application::http::Target)
//! - Port defaults to 80, path defaults to `/`
//!
//! ### Exchange Engine
//! - GET and POST, with `application/x-www-form-urlencoded` form bodies
//! - Exactly one request per connection, always sent with `Connection: Close`
//! - Read-until-EOF receive with no upper bound on response size
//!
//! ### Transport Abstraction
//! - Engine is generic over the [`network::Connect`] trait
//! - [`network::tcp::TcpConnector`] for real sockets, mocks for tests
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rawhttp = "0.1.0"
//! ```
//!
//! ### Basic GET
//!
//! ```rust,no_run
//! use rawhttp::network::application::http::{execute, Method};
//!
//! let response = execute(Method::Get, "http://example.com/", None::<&[(&str, &str)]>)?;
//! println!("{} ({} bytes)", response.status_code, response.body.len());
//! # Ok::<(), rawhttp::network::error::Error>(())
//! ```
//!
//! ### POST with form fields
//!
//! ```rust,no_run
//! use rawhttp::network::application::http::Client;
//! use rawhttp::network::tcp::TcpConnector;
//!
//! let mut client = Client::new(TcpConnector);
//! let response = client.post("http://httpbin.org/post", &[("a", "1"), ("b", "x y")])?;
//! assert_eq!(response.status_code, 200);
//! # Ok::<(), rawhttp::network::error::Error>(())
//! ```
//!
//! ## Optional Features
//!
//! - `defmt`: Enable defmt formatting support for the error type

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Network abstraction layer: transport traits, the TCP transport, error
/// types and the HTTP client built on top of them.
pub mod network;
