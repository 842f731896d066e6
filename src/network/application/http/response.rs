//! Response parsing.
//!
//! The whole byte stream read off the socket is decoded as ISO-8859-1, so
//! decoding itself can never fail, and then split at the first blank line.

use super::request::Header;
use crate::network::error::{Error, Result};
use core::fmt;
use log::warn;

/// Blank line that ends the header section.
pub const SEPARATOR: &str = "\r\n\r\n";

/// A fully parsed response. Only ever produced when parsing succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Three-digit status code from the status line.
    pub status_code: u16,
    /// Header lines after the status line, in order.
    pub headers: Vec<Header>,
    /// Everything after the first blank line.
    pub body: String,
}

impl Response {
    /// Parses a raw response.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedResponse`] if there is no `\r\n\r\n`, or if the status
    /// line has fewer than two space-separated tokens or a status that is not
    /// three digits. Header lines without a `:` are skipped, not fatal.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let text = decode(raw);
        let (head, body) = text
            .split_once(SEPARATOR)
            .ok_or(Error::MalformedResponse("missing header/body separator"))?;

        let mut lines = head.split("\r\n");
        let status_line = lines
            .next()
            .ok_or(Error::MalformedResponse("missing status line"))?;
        let status_code = parse_status_line(status_line)?;

        let headers = lines
            .filter(|line| !line.is_empty())
            .filter_map(parse_header)
            .collect();

        Ok(Self {
            status_code,
            headers,
            body: body.to_string(),
        })
    }

    /// Value of the first header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.status_code)?;
        for header in &self.headers {
            writeln!(f, "{}: {}", header.name, header.value)?;
        }
        writeln!(f)?;
        f.write_str(&self.body)
    }
}

/// ISO-8859-1 decode: each byte becomes the char with the same code point.
pub fn decode(raw: &[u8]) -> String {
    raw.iter().map(|&b| b as char).collect()
}

/// `{version} {status} {reason}`; version and reason are not checked.
fn parse_status_line(line: &str) -> Result<u16> {
    let mut parts = line.splitn(3, ' ');
    parts.next(); // Skip HTTP version
    let status = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or(Error::MalformedResponse("status line has no status code"))?;

    if status.len() != 3 || !status.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::MalformedResponse("status code is not three digits"));
    }
    status
        .parse::<u16>()
        .map_err(|_| Error::MalformedResponse("status code is not three digits"))
}

fn parse_header(line: &str) -> Option<Header> {
    match line.split_once(':') {
        Some((name, value)) => Some(Header::new(name.trim(), value.trim())),
        None => {
            warn!("skipping header line without ':': {line:?}");
            None
        }
    }
}
