/// Whether a stream is currently live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamState {
    #[default]
    Idle,
    Streaming,
}

impl StreamState {
    pub fn is_streaming(self) -> bool {
        self == StreamState::Streaming
    }
}
