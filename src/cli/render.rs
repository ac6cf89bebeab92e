//! Incremental transcript printing for the terminal front end.

use std::io::{self, Write};

use crate::models::Message;

/// Prints only what changed in the log since the previous call.
///
/// Messages only grow at the end and only the trailing message grows, so a
/// message count and a byte offset into the trailing message are enough to
/// know what is new.
#[derive(Debug, Default)]
pub struct Renderer {
    started: usize,
    written: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget what was printed, e.g. after the conversation was cleared.
    pub fn reset(&mut self) {
        self.started = 0;
        self.written = 0;
    }

    pub fn render<W: Write>(&mut self, messages: &[Message], out: &mut W) -> io::Result<()> {
        if messages.len() < self.started {
            self.reset();
        }

        let resume_from = self.started.saturating_sub(1);
        for (index, message) in messages.iter().enumerate().skip(resume_from) {
            if index >= self.started {
                if index > 0 {
                    writeln!(out)?;
                }
                write!(out, "{}: ", message.role().label())?;
                self.started = index + 1;
                self.written = 0;
            }

            let content = message.content();
            if let Some(new) = content.get(self.written..) {
                out.write_all(new.as_bytes())?;
                self.written = content.len();
            }
        }

        out.flush()
    }

    /// End the current line once a reply is over.
    pub fn finish<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.started > 0 {
            writeln!(out)?;
        }
        out.flush()
    }
}
