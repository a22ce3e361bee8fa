//! Log setup: `<time> - <target> - <LEVEL> - <message>` lines on stderr,
//! also appended to a log file.

use anyhow::Context;
use env_logger::{Env, Target};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Writes everything to both sinks
pub struct Tee<A, B> {
    first: A,
    second: B,
}

impl<A: Write, B: Write> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.first.write_all(buf)?;
        self.second.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.first.flush()?;
        self.second.flush()
    }
}

/// Install the global logger. `RUST_LOG` overrides the default `info` level.
///
/// If the log file cannot be opened the logger still goes to stderr and the
/// open error is returned.
pub fn init(log_file: &Path) -> anyhow::Result<()> {
    let (target, opened) = match open_log_file(log_file) {
        Ok(file) => (Target::Pipe(Box::new(Tee::new(io::stderr(), file))), Ok(())),
        Err(e) => (Target::Stderr, Err(e)),
    };

    builder()
        .target(target)
        .try_init()
        .context("logger already initialized")?;
    opened
}

fn open_log_file(log_file: &Path) -> anyhow::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("cannot open log file {}", log_file.display()))
}

fn builder() -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} - {} - {} - {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            record.target(),
            record.level(),
            record.args()
        )
    });
    builder
}
