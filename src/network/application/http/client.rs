//! The HTTP exchange engine.
//!
//! One call to [`Client::execute`] is one exchange:
//!
//! ```text
//! IDLE -> RESOLVED -> CONNECTED -> SENT -> RECEIVING -> PARSED -> CLOSED
//! ```
//!
//! The target is resolved from the URL, a fresh connection is opened through
//! the client's connector, the framed request is written in full, the
//! response is read until the peer closes the stream, and the bytes are
//! parsed. The connection is closed before parsing, and also on any send or
//! receive failure, so it never outlives the call.
//!
//! There is no timeout: a peer that neither sends nor closes blocks the
//! caller indefinitely.

use super::request::{Method, Request};
use super::response::Response;
use super::target::{self, Target};
use crate::network::error::{Error, Result};
use crate::network::tcp::TcpConnector;
use crate::network::{Close, Connect, Connection};
use log::{debug, trace, warn};

/// Default size of each read from the socket.
pub const DEFAULT_READ_CHUNK_SIZE: usize = 1024;

/// Tuning knobs for a [`Client`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Bytes requested per read call while receiving. Zero is treated as one.
    pub read_chunk_size: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

/// Runs exchanges through a connector. Holds no connection between calls.
#[derive(Debug, Clone)]
pub struct Client<N: Connect> {
    connector: N,
    options: Options,
}

impl<N: Connect> Client<N> {
    /// Creates a client with default [`Options`].
    pub fn new(connector: N) -> Self {
        Self::with_options(connector, Options::default())
    }

    /// Creates a client with explicit [`Options`].
    pub fn with_options(connector: N, options: Options) -> Self {
        Self { connector, options }
    }

    /// The options this client was built with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Performs one exchange and returns the parsed response.
    ///
    /// `form` is only used for POST, where it becomes the urlencoded body.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedUrl`] if `url` cannot be resolved
    /// - [`Error::Connection`] if the connection cannot be opened
    /// - [`Error::Transmission`] if the request is not delivered in full
    /// - [`Error::Receive`] if a read fails before end of stream
    /// - [`Error::MalformedResponse`] if the response cannot be parsed
    pub fn execute<K, V>(
        &mut self,
        method: Method,
        url: &str,
        form: Option<&[(K, V)]>,
    ) -> Result<Response>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let target = target::resolve(url)?;
        debug!("{method} {url}: resolved to {target}");

        let request = Request::new(method, target, form)?;
        let raw = self.exchange(&request)?;

        let response = Response::parse(&raw)?;
        debug!("{method} {url}: status {}", response.status_code);
        for header in &response.headers {
            trace!("{}: {}", header.name, header.value);
        }
        Ok(response)
    }

    /// `GET url`.
    pub fn get(&mut self, url: &str) -> Result<Response> {
        self.execute::<&str, &str>(Method::Get, url, None)
    }

    /// `POST url` with `form` as the urlencoded body.
    pub fn post<K, V>(&mut self, url: &str, form: &[(K, V)]) -> Result<Response>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.execute(Method::Post, url, Some(form))
    }

    /// Connects, sends `request`, reads until end of stream and closes.
    /// Returns the raw response bytes.
    fn exchange(&mut self, request: &Request) -> Result<Vec<u8>> {
        let Target { host, port, .. } = &request.target;
        let mut connection = self
            .connector
            .connect(host, *port)
            .map_err(|e| Error::Connection(format!("{host}:{port}: {e:?}")))?;
        debug!("connected to {host}:{port}");

        let result = send(&mut connection, &request.to_bytes())
            .and_then(|sent| {
                debug!("sent {sent} bytes");
                receive(&mut connection, self.options.read_chunk_size)
            });

        if let Err(e) = connection.close() {
            warn!("closing connection to {host}:{port} failed: {e:?}");
        }

        let raw = result?;
        debug!("received {} bytes", raw.len());
        Ok(raw)
    }
}

impl Client<TcpConnector> {
    /// A client over plain TCP sockets.
    pub fn tcp() -> Self {
        Self::new(TcpConnector)
    }
}

/// Performs one exchange over a fresh TCP connection.
///
/// See [`Client::execute`].
pub fn execute<K, V>(method: Method, url: &str, form: Option<&[(K, V)]>) -> Result<Response>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    Client::tcp().execute(method, url, form)
}

/// Writes all of `data`, looping over partial writes, then flushes.
fn send<C: Connection>(connection: &mut C, data: &[u8]) -> Result<usize> {
    let mut written = 0;
    while written < data.len() {
        match connection.write(&data[written..]) {
            Ok(0) => {
                return Err(Error::Transmission(format!(
                    "connection accepted no bytes after {written} of {}",
                    data.len()
                )));
            }
            Ok(n) => written += n,
            Err(e) => return Err(Error::Transmission(format!("{e:?}"))),
        }
    }
    connection
        .flush()
        .map_err(|e| Error::Transmission(format!("{e:?}")))?;
    Ok(written)
}

/// Reads until the peer closes the stream.
fn receive<C: Connection>(connection: &mut C, chunk_size: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut chunk = vec![0u8; chunk_size.max(1)];
    loop {
        match connection.read(&mut chunk) {
            Ok(0) => return Ok(buffer), // Connection closed
            Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            Err(e) => return Err(Error::Receive(format!("{e:?}"))),
        }
    }
}
