//! URL resolution into a connection target.
//!
//! Resolution is string decomposition only. Nothing here touches the network,
//! and the host is not checked for reachability.

use crate::network::error::{Error, Result};
use core::fmt;
use url::Url;

/// Port used when the URL does not name one.
pub const DEFAULT_PORT: u16 = 80;

/// Path used when the URL has none.
pub const DEFAULT_PATH: &str = "/";

/// Where a single request is sent: the host and port to connect to and the
/// path placed on the request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Host name or address, without the port.
    pub host: String,
    /// TCP port, 1-65535.
    pub port: u16,
    /// Request path, always beginning with `/`.
    pub path: String,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}{}", self.host, self.port, self.path)
    }
}

/// Decomposes `url` into a [`Target`].
///
/// The URL is parsed as `scheme://host[:port]/path?query#fragment`. Scheme,
/// query and fragment are accepted but play no part in the target.
///
/// When the parsed URL has no authority at all (e.g. `localhost:8000`, which
/// parses as scheme `localhost`), the whole input string is taken as the host
/// and goes through the same `host:port` split as a normal authority would,
/// with the path left at `/`.
///
/// An explicitly written port is always used, including one equal to the
/// scheme's default (`https://host:443/` gives 443). Without one the port is
/// 80 whatever the scheme.
///
/// The host and path come out normalised by standard URL parsing: the host is
/// lowercased and the path percent-encoded (`http://EXAMPLE.com/A b` gives
/// host `example.com` and path `/A%20b`).
///
/// # Errors
///
/// [`Error::MalformedUrl`] if `url` does not parse as a URL, or if the part
/// after the `:` in the host is not a port in 1-65535.
pub fn resolve(url: &str) -> Result<Target> {
    let parsed = Url::parse(url).map_err(|e| Error::MalformedUrl(format!("{url:?}: {e}")))?;

    let authority = authority(&parsed, url);
    // Without an authority the input is all host, so its tail is not a path either.
    let (host_port, path) = if authority.is_empty() {
        (url.to_string(), DEFAULT_PATH)
    } else {
        let path = match parsed.path() {
            "" => DEFAULT_PATH,
            path => path,
        };
        (authority, path)
    };

    let (host, port) = match host_port.split_once(':') {
        Some((host, port)) => (host.to_string(), parse_port(port)?),
        None => (host_port, DEFAULT_PORT),
    };
    let path = path.to_string();

    Ok(Target { host, port, path })
}

/// `host[:port]` as written in the URL, or empty when there is no host.
fn authority(url: &Url, input: &str) -> String {
    let host = url.host_str().unwrap_or_default();
    if host.is_empty() {
        return String::new();
    }
    match url.port().or_else(|| written_port(input)) {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

/// The port as written after the host. `Url::port` hides it when it equals
/// the scheme's default.
fn written_port(input: &str) -> Option<u16> {
    let (_, rest) = input.trim().split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let (_, port) = host_port.rsplit_once(':')?;
    port.parse().ok()
}

fn parse_port(port: &str) -> Result<u16> {
    match port.parse::<u16>() {
        Ok(0) | Err(_) => Err(Error::MalformedUrl(format!("invalid port {port:?}"))),
        Ok(port) => Ok(port),
    }
}
