//! # Application Layer Network Protocols
//!
//! Protocol clients written against the core network traits. Each client is
//! generic over a [`Connect`](crate::network::Connect) implementation, so the
//! same code runs over [`TcpConnector`](crate::network::tcp::TcpConnector) or
//! an in-memory mock.
//!
//! ## Available Protocols
//!
//! - **[`http`]**: HTTP/1.1 client framing requests directly on a stream socket

/// HTTP client implementation.
///
/// Provides a minimal HTTP/1.1 client supporting GET and POST with
/// urlencoded form bodies.
pub mod http;
