//! `rawhttp [METHOD] URL`
//!
//! Sends one request and prints the status code, headers and body. With a
//! single argument the method is GET. Set `RUST_LOG=debug` to follow the
//! exchange step by step.

use rawhttp::network::application::http::{Client, Method};
use std::process::ExitCode;

const USAGE: &str = "rawhttp [GET/POST] [URL]";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (method, url) = match args.as_slice() {
        [] => {
            println!("{USAGE}\n");
            return ExitCode::from(1);
        }
        [url] => (Method::Get, url),
        [method, url, ..] => match method.to_uppercase().parse::<Method>() {
            Ok(method) => (method, url),
            Err(e) => {
                log::error!("{e}");
                eprintln!("{USAGE}");
                return ExitCode::from(2);
            }
        },
    };

    match Client::tcp().execute::<&str, &str>(method, url, None) {
        Ok(response) => {
            println!("{response}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{method} {url} failed: {e}");
            ExitCode::from(1)
        }
    }
}
