//! Splits a chunked byte stream into text lines.
//!
//! Chunks may end in the middle of a line or in the middle of a UTF-8
//! sequence, so bytes are buffered until a `\n` arrives and only then decoded.

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Incremental line splitter for SSE bodies.
#[derive(Debug, Default)]
pub struct LineDecoder {
    buffer: Vec<u8>,
    /// Bytes at the front of `buffer` already known to hold no `\n`.
    scanned: usize,
    /// Set once the start of the body has been checked for a byte-order mark.
    started: bool,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and return every line it completed, without terminators.
    ///
    /// Both `\n` and `\r\n` end a line. Invalid UTF-8 is replaced rather than
    /// rejected. A UTF-8 byte-order mark at the very start of the body is
    /// dropped.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        if !self.started {
            if self.buffer.len() < BOM.len() && BOM.starts_with(&self.buffer) {
                return Vec::new();
            }
            if self.buffer.starts_with(BOM) {
                self.buffer.drain(..BOM.len());
            }
            self.started = true;
        }

        let mut lines = Vec::new();
        let mut start = 0;
        let mut from = self.scanned;
        while let Some(offset) = self.buffer[from..].iter().position(|&b| b == b'\n') {
            let end = from + offset;
            let mut line = &self.buffer[start..end];
            if let Some(stripped) = line.strip_suffix(b"\r") {
                line = stripped;
            }
            lines.push(String::from_utf8_lossy(line).into_owned());
            start = end + 1;
            from = start;
        }
        self.buffer.drain(..start);
        self.scanned = self.buffer.len();
        lines
    }

    /// Whether bytes of an unfinished line are buffered.
    pub fn has_partial(&self) -> bool {
        !self.buffer.is_empty()
    }
}
