//! Mock connector and connection for exercising the exchange engine

use rawhttp::network::{Close, Connect, Connection, Read, Write};
use std::cell::RefCell;
use std::rc::Rc;

/// What the engine did to the connection, kept after the connection is
/// consumed by `close`.
#[derive(Debug, Default)]
pub struct Wire {
    pub written: Vec<u8>,
    pub write_calls: usize,
    pub read_calls: usize,
    pub flushed: bool,
    pub closed: bool,
    pub connects: Vec<(String, u16)>,
}

/// How a mock connection misbehaves.
#[derive(Debug, Clone, Copy, Default)]
pub enum Fault {
    #[default]
    None,
    /// `connect` fails.
    Refuse,
    /// `write` returns an error.
    WriteError,
    /// `write` accepts nothing.
    WriteZero,
    /// `read` returns an error after the first chunk.
    ReadError,
}

#[derive(Debug)]
pub struct MockConnection {
    wire: Rc<RefCell<Wire>>,
    response: Vec<u8>,
    read_pos: usize,
    max_write: usize,
    max_read: usize,
    fault: Fault,
}

impl Read for MockConnection {
    type Error = &'static str;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut wire = self.wire.borrow_mut();
        wire.read_calls += 1;
        if matches!(self.fault, Fault::ReadError) && self.read_pos > 0 {
            return Err("connection reset by peer");
        }
        let remaining = self.response.len() - self.read_pos;
        let len = buf.len().min(remaining).min(self.max_read);
        buf[..len].copy_from_slice(&self.response[self.read_pos..self.read_pos + len]);
        self.read_pos += len;
        Ok(len)
    }
}

impl Write for MockConnection {
    type Error = &'static str;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let mut wire = self.wire.borrow_mut();
        wire.write_calls += 1;
        match self.fault {
            Fault::WriteError => Err("broken pipe"),
            Fault::WriteZero => Ok(0),
            _ => {
                let len = buf.len().min(self.max_write);
                wire.written.extend_from_slice(&buf[..len]);
                Ok(len)
            }
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.wire.borrow_mut().flushed = true;
        Ok(())
    }
}

impl Close for MockConnection {
    type Error = &'static str;

    fn close(self) -> Result<(), Self::Error> {
        let mut wire = self.wire.borrow_mut();
        if wire.closed {
            return Err("closed twice");
        }
        wire.closed = true;
        Ok(())
    }
}

impl Connection for MockConnection {}

/// Hands out one [`MockConnection`] per `connect`, all replaying `response`.
#[derive(Debug, Clone)]
pub struct MockNetwork {
    pub wire: Rc<RefCell<Wire>>,
    response: Vec<u8>,
    max_write: usize,
    max_read: usize,
    fault: Fault,
}

impl MockNetwork {
    pub fn new(response: &[u8]) -> Self {
        Self {
            wire: Rc::default(),
            response: response.to_vec(),
            max_write: usize::MAX,
            max_read: usize::MAX,
            fault: Fault::None,
        }
    }

    /// Accept at most `n` bytes per write call.
    pub fn max_write(mut self, n: usize) -> Self {
        self.max_write = n;
        self
    }

    /// Return at most `n` bytes per read call.
    pub fn max_read(mut self, n: usize) -> Self {
        self.max_read = n;
        self
    }

    pub fn fault(mut self, fault: Fault) -> Self {
        self.fault = fault;
        self
    }

    pub fn written(&self) -> Vec<u8> {
        self.wire.borrow().written.clone()
    }

    pub fn written_str(&self) -> String {
        String::from_utf8(self.written()).unwrap()
    }

    pub fn closed(&self) -> bool {
        self.wire.borrow().closed
    }
}

impl Connect for MockNetwork {
    type Connection = MockConnection;
    type Error = &'static str;

    fn connect(&mut self, host: &str, port: u16) -> Result<Self::Connection, Self::Error> {
        self.wire.borrow_mut().connects.push((host.to_string(), port));
        if matches!(self.fault, Fault::Refuse) {
            return Err("connection refused");
        }
        Ok(MockConnection {
            wire: self.wire.clone(),
            response: self.response.clone(),
            read_pos: 0,
            max_write: self.max_write,
            max_read: self.max_read,
            fault: self.fault,
        })
    }
}

#[test]
fn test_mock_replays_response_in_chunks() {
    let mut network = MockNetwork::new(b"abcdef").max_read(4);
    let mut conn = network.connect("mock", 1).unwrap();
    let mut buf = [0u8; 16];
    assert_eq!(conn.read(&mut buf).unwrap(), 4);
    assert_eq!(conn.read(&mut buf).unwrap(), 2);
    assert_eq!(&buf[..2], b"ef");
    assert_eq!(conn.read(&mut buf).unwrap(), 0);
    conn.close().unwrap();
    assert!(network.closed());
}

#[test]
fn test_mock_partial_writes() {
    let mut network = MockNetwork::new(b"").max_write(2);
    let mut conn = network.connect("mock", 1).unwrap();
    assert_eq!(conn.write(b"hello").unwrap(), 2);
    assert_eq!(network.written(), b"he");
}
