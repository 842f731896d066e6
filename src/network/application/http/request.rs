//! Request construction and wire framing.

use super::target::Target;
use crate::network::error::{Error, Result};
use core::fmt;
use core::str::FromStr;
use heapless::Vec;
use url::form_urlencoded;

/// Upper bound on headers carried by a [`Request`]. The client emits at most
/// four (`Host`, `Content-Type`, `Content-Length`, `Connection`).
pub const MAX_HEADERS: usize = 8;

/// Content type used for encoded form bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The request methods this client can frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `GET`: no body, form fields are ignored.
    Get,
    /// `POST`: form fields become an urlencoded body.
    Post,
}

impl Method {
    /// The method token as it appears on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Parses a method name case-insensitively. Anything other than GET or
    /// POST is rejected instead of falling back to GET.
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("GET") {
            Ok(Method::Get)
        } else if s.eq_ignore_ascii_case("POST") {
            Ok(Method::Post)
        } else {
            Err(Error::UnsupportedMethod(s.to_string()))
        }
    }
}

/// A single `Name: value` header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Header name.
    pub name: String,
    /// Header value.
    pub value: String,
}

impl Header {
    /// Creates a header from anything string-like.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One fully built request, framed once and then dropped.
#[derive(Debug, Clone)]
pub struct Request {
    /// Request method.
    pub method: Method,
    /// Where the request goes.
    pub target: Target,
    /// Headers in the order they are written.
    pub headers: Vec<Header, MAX_HEADERS>,
    /// Body bytes, empty for GET.
    pub body: std::vec::Vec<u8>,
}

impl Request {
    /// Builds the request for `method` against `target`.
    ///
    /// GET never carries a body, so `form` is ignored for it. POST always
    /// carries `Content-Length`, and `Content-Type` only when `form` is given.
    pub fn new<K, V>(method: Method, target: Target, form: Option<&[(K, V)]>) -> Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let body = match method {
            Method::Get => std::vec::Vec::new(),
            Method::Post => form.map(encode_form).unwrap_or_default().into_bytes(),
        };
        let host = target.host.clone();
        let mut request = Self {
            method,
            target,
            headers: Vec::new(),
            body,
        };

        request.push_header(Header::new("Host", host))?;
        if method == Method::Post {
            if form.is_some() {
                request.push_header(Header::new("Content-Type", FORM_CONTENT_TYPE))?;
            }
            let length = request.body.len().to_string();
            request.push_header(Header::new("Content-Length", length))?;
        }
        request.push_header(Header::new("Connection", "Close"))?;

        Ok(request)
    }

    /// Appends a header after the ones already present.
    ///
    /// # Errors
    ///
    /// [`Error::HeaderOverflow`] once [`MAX_HEADERS`] headers are present.
    pub fn push_header(&mut self, header: Header) -> Result<()> {
        self.headers
            .push(header)
            .map_err(|_| Error::HeaderOverflow(MAX_HEADERS))
    }

    /// Frames the request as it goes on the wire: request line, headers,
    /// blank line, body, with every line ending in `\r\n`.
    pub fn to_bytes(&self) -> std::vec::Vec<u8> {
        let mut buf = std::vec::Vec::with_capacity(128 + self.body.len());

        // Request line
        buf.extend_from_slice(self.method.as_str().as_bytes());
        buf.push(b' ');
        buf.extend_from_slice(self.target.path.as_bytes());
        buf.extend_from_slice(b" HTTP/1.1\r\n");

        // Headers
        for header in &self.headers {
            buf.extend_from_slice(header.name.as_bytes());
            buf.extend_from_slice(b": ");
            buf.extend_from_slice(header.value.as_bytes());
            buf.extend_from_slice(b"\r\n");
        }
        buf.extend_from_slice(b"\r\n");

        // Body
        buf.extend_from_slice(&self.body);
        buf
    }
}

/// Encodes form fields as `application/x-www-form-urlencoded`: pairs joined
/// with `&`, spaces as `+`, other reserved bytes as `%XX`.
pub fn encode_form<K, V>(fields: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
        .finish()
}
