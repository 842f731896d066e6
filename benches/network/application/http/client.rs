use criterion::{BatchSize, Criterion, Throughput};
use rawhttp::network::application::http::{Client, Method, Request, Response, resolve};
use rawhttp::network::{Close, Connect, Connection, Read, Write};
use std::hint::black_box;

/// Replays a canned response and discards whatever is written.
struct LoopbackConnection {
    response: &'static [u8],
    read_pos: usize,
}

impl Read for LoopbackConnection {
    type Error = ();
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let len = buf.len().min(self.response.len() - self.read_pos);
        buf[..len].copy_from_slice(&self.response[self.read_pos..self.read_pos + len]);
        self.read_pos += len;
        Ok(len)
    }
}

impl Write for LoopbackConnection {
    type Error = ();
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for LoopbackConnection {
    type Error = ();
    fn close(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Connection for LoopbackConnection {}

struct Loopback(&'static [u8]);

impl Connect for Loopback {
    type Connection = LoopbackConnection;
    type Error = ();

    fn connect(&mut self, _host: &str, _port: u16) -> Result<Self::Connection, Self::Error> {
        Ok(LoopbackConnection {
            response: self.0,
            read_pos: 0,
        })
    }
}

const FORM: &[(&str, &str)] = &[
    ("name", "sensor 01"),
    ("reading", "23.5"),
    ("note", "a&b=c / d"),
];

fn large_response() -> &'static [u8] {
    let mut raw = b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nServer: bench\r\n\r\n".to_vec();
    raw.extend(std::iter::repeat_n(b'x', 64 * 1024));
    raw.leak()
}

pub fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve", |b| {
        b.iter(|| resolve(black_box("http://example.com:8080/api/v1/readings?since=0")))
    });
}

pub fn bench_frame_post(c: &mut Criterion) {
    let target = resolve("http://example.com/submit").expect("valid url");
    c.bench_function("frame_post", |b| {
        b.iter_batched(
            || target.clone(),
            |target| {
                Request::new(Method::Post, target, Some(black_box(FORM)))
                    .expect("four headers fit")
                    .to_bytes()
            },
            BatchSize::SmallInput,
        )
    });
}

pub fn bench_parse_response(c: &mut Criterion) {
    let raw = large_response();
    let mut group = c.benchmark_group("parse_response");
    group.throughput(Throughput::Bytes(raw.len() as u64));
    group.bench_function("64k_body", |b| b.iter(|| Response::parse(black_box(raw))));
    group.finish();
}

pub fn bench_exchange_in_memory(c: &mut Criterion) {
    let raw = large_response();
    let mut group = c.benchmark_group("exchange_in_memory");
    group.throughput(Throughput::Bytes(raw.len() as u64));
    group.bench_function("get_64k", |b| {
        let mut client = Client::new(Loopback(raw));
        b.iter(|| {
            client
                .get("http://example.com/data")
                .expect("exchange succeeds")
        })
    });
    group.finish();
}
