//! TCP transport over `std::net::TcpStream`.
//!
//! [`TcpConnector`] resolves the host name and connects on every call to
//! [`Connect::connect`]; the returned [`TcpConnection`] is owned by exactly one
//! exchange and shut down when that exchange closes it.

use super::{Close, Connect, Connection, Read, Write};
use std::io::{self, Read as StdRead, Write as StdWrite};
use std::net::{Shutdown, TcpStream};

/// Opens plain TCP connections.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

/// A single TCP stream owned by one exchange.
#[derive(Debug)]
pub struct TcpConnection {
    stream: TcpStream,
}

impl TcpConnection {
    /// Wraps an already connected stream.
    pub fn new(stream: TcpStream) -> Self {
        Self { stream }
    }
}

impl Connect for TcpConnector {
    type Connection = TcpConnection;
    type Error = io::Error;

    fn connect(&mut self, host: &str, port: u16) -> Result<Self::Connection, Self::Error> {
        // `(&str, u16)` goes through `ToSocketAddrs`, so this also does the DNS lookup.
        let stream = TcpStream::connect((host, port))?;
        Ok(TcpConnection::new(stream))
    }
}

impl Read for TcpConnection {
    type Error = io::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            match self.stream.read(buf) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                other => return other,
            }
        }
    }
}

impl Write for TcpConnection {
    type Error = io::Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        loop {
            match self.stream.write(buf) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                other => return other,
            }
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.stream.flush()
    }
}

impl Close for TcpConnection {
    type Error = io::Error;

    fn close(self) -> Result<(), Self::Error> {
        match self.stream.shutdown(Shutdown::Both) {
            // The peer closing first is the normal end of an exchange.
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            other => other,
        }
    }
}

impl Connection for TcpConnection {}
