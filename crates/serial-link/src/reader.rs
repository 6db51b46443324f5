//! Line input from the device.

use std::io::{BufRead, ErrorKind, Read};
use std::time::Duration;

use serialpoint_common::error::{SerialpointError, SerialpointResult};

/// Longest accepted line, terminator excluded. Longer input is dropped.
pub const MAX_LINE_BYTES: usize = 4096;

/// Trait for sources of command lines.
pub trait LineSource {
    /// Read the next line, trimmed.
    ///
    /// `Ok(None)` means nothing usable arrived this time (timeout, empty
    /// read, blank line); callers simply try again.
    fn read_line(&mut self) -> SerialpointResult<Option<String>>;

    /// Whether the source has ended for good. Serial ports never end.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Splits a byte stream with read timeouts into lines.
///
/// Bytes of an unfinished line survive timeouts and are completed by later
/// reads.
pub struct SerialLineReader<R> {
    inner: R,
    pending: Vec<u8>,
}

impl SerialLineReader<Box<dyn serialport::SerialPort>> {
    /// Open `path` at `baud_rate` with a blocking read `timeout`.
    pub fn open(path: &str, baud_rate: u32, timeout: Duration) -> SerialpointResult<Self> {
        let port = serialport::new(path, baud_rate)
            .timeout(timeout)
            .open()
            .map_err(|e| SerialpointError::serial(format!("Failed to open {path}: {e}")))?;
        tracing::info!(port = %path, baud_rate, "Serial port opened");
        Ok(Self::new(port))
    }
}

impl<R: Read> SerialLineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: Vec::new(),
        }
    }

    /// Split off the next complete line. Lines over [`MAX_LINE_BYTES`] come
    /// back empty.
    fn take_line(&mut self) -> Option<String> {
        let end = self.pending.iter().position(|&b| b == b'\n')?;
        let raw: Vec<u8> = self.pending.drain(..=end).collect();
        if end > MAX_LINE_BYTES {
            tracing::warn!(bytes = end, "Discarding oversized line");
            return Some(String::new());
        }
        Some(decode_line(&raw))
    }
}

impl<R: Read> LineSource for SerialLineReader<R> {
    fn read_line(&mut self) -> SerialpointResult<Option<String>> {
        loop {
            if let Some(line) = self.take_line() {
                return Ok(non_empty(line));
            }

            let mut chunk = [0u8; 256];
            match self.inner.read(&mut chunk) {
                Ok(0) => return Ok(None),
                Ok(n) => {
                    self.pending.extend_from_slice(&chunk[..n]);
                    if self.pending.len() > MAX_LINE_BYTES && !self.pending.contains(&b'\n') {
                        tracing::warn!(
                            bytes = self.pending.len(),
                            "Discarding oversized line without terminator"
                        );
                        self.pending.clear();
                    }
                }
                Err(e)
                    if matches!(
                        e.kind(),
                        ErrorKind::TimedOut | ErrorKind::WouldBlock | ErrorKind::Interrupted
                    ) =>
                {
                    return Ok(None);
                }
                Err(e) => {
                    return Err(SerialpointError::serial(format!("Serial read failed: {e}")));
                }
            }
        }
    }
}

/// Reads lines from a finite text stream (files, stdin, fixtures).
pub struct TextLineSource<B> {
    inner: B,
    exhausted: bool,
}

impl<B: BufRead> TextLineSource<B> {
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            exhausted: false,
        }
    }
}

impl<B: BufRead> LineSource for TextLineSource<B> {
    fn read_line(&mut self) -> SerialpointResult<Option<String>> {
        if self.exhausted {
            return Ok(None);
        }

        let mut raw = Vec::new();
        if self.inner.read_until(b'\n', &mut raw)? == 0 {
            self.exhausted = true;
            return Ok(None);
        }
        Ok(non_empty(decode_line(&raw)))
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Decode bytes as UTF-8, dropping invalid sequences, and trim.
fn decode_line(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .replace(char::REPLACEMENT_CHARACTER, "")
        .trim()
        .to_string()
}

fn non_empty(line: String) -> Option<String> {
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}
