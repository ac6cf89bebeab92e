use std::fmt;

use tokio::task::JoinHandle;

/// Identifier of one opened stream. Increases with every `open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StreamId(u64);

impl StreamId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owner of a live stream's reader task.
///
/// Closing (or dropping) the handle aborts the task, which drops the HTTP
/// body and with it the connection. Aborting a task that already finished
/// is a no-op.
#[derive(Debug)]
pub struct StreamHandle {
    id: StreamId,
    task: JoinHandle<()>,
}

impl StreamHandle {
    pub fn new(id: StreamId, task: JoinHandle<()>) -> Self {
        Self { id, task }
    }

    pub fn id(&self) -> StreamId {
        self.id
    }

    pub fn close(self) {
        tracing::debug!(stream_id = %self.id, "closing stream");
    }
}

impl Drop for StreamHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
