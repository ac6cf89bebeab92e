//! SSE stream parsing logic
//!
//! Contains the stateful SseParser for accumulating lines and emitting events,
//! and the line classifier it is built on.

use crate::sse::events::{SseLine, SseMessage, DEFAULT_EVENT_TYPE};

/// Parse a single SSE line (without its line terminator) into its component type.
///
/// Field values keep all whitespace except a single space directly after the
/// colon. A line with no colon is a field with an empty value.
pub fn parse_sse_line(line: &str) -> SseLine {
    if line.is_empty() {
        return SseLine::Empty;
    }

    if let Some(comment) = line.strip_prefix(':') {
        return SseLine::Comment(comment.trim().to_string());
    }

    let (name, value) = match line.split_once(':') {
        Some((name, value)) => (name, value.strip_prefix(' ').unwrap_or(value)),
        None => (line, ""),
    };

    match name {
        "event" => SseLine::Event(value.to_string()),
        "data" => SseLine::Data(value.to_string()),
        "id" => SseLine::Id(value.to_string()),
        "retry" => SseLine::Retry(value.to_string()),
        _ => SseLine::Unknown(line.to_string()),
    }
}

/// Stateful SSE parser that accumulates lines and emits complete events
#[derive(Debug, Default)]
pub struct SseParser {
    /// Current event type being accumulated
    current_event_type: Option<String>,
    /// Accumulated data lines (SSE allows multiple data: lines)
    data_buffer: Vec<String>,
}

impl SseParser {
    /// Create a new SSE parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a line to the parser, potentially returning a complete event
    ///
    /// Returns `Some(message)` when a blank line ends an event that carried at
    /// least one data line. Events with no data line are dropped.
    pub fn feed_line(&mut self, line: &str) -> Option<SseMessage> {
        match parse_sse_line(line) {
            SseLine::Event(event_type) => {
                self.current_event_type = Some(event_type);
                None
            }
            SseLine::Data(data) => {
                self.data_buffer.push(data);
                None
            }
            SseLine::Empty => self.try_emit_event(),
            SseLine::Id(_) | SseLine::Retry(_) | SseLine::Comment(_) | SseLine::Unknown(_) => None,
        }
    }

    /// Try to emit a complete event from accumulated state
    fn try_emit_event(&mut self) -> Option<SseMessage> {
        let event_type = self.current_event_type.take();

        if self.data_buffer.is_empty() {
            return None;
        }

        let data = self.data_buffer.join("\n");
        self.data_buffer.clear();

        let event_type = match event_type {
            Some(t) if !t.is_empty() => t,
            _ => DEFAULT_EVENT_TYPE.to_string(),
        };

        Some(SseMessage { event_type, data })
    }

    /// Whether a partially accumulated event is pending
    pub fn has_pending(&self) -> bool {
        self.current_event_type.is_some() || !self.data_buffer.is_empty()
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.current_event_type = None;
        self.data_buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(parser: &mut SseParser, lines: &[&str]) -> Vec<SseMessage> {
        lines.iter().filter_map(|l| parser.feed_line(l)).collect()
    }

    // Tests for parse_sse_line

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(parse_sse_line(""), SseLine::Empty);
    }

    #[test]
    fn test_parse_comment_line() {
        assert_eq!(
            parse_sse_line(": keep-alive"),
            SseLine::Comment("keep-alive".to_string())
        );
    }

    #[test]
    fn test_parse_data_strips_exactly_one_space() {
        assert_eq!(parse_sse_line("data: Hel"), SseLine::Data("Hel".to_string()));
        assert_eq!(parse_sse_line("data:Hel"), SseLine::Data("Hel".to_string()));
        assert_eq!(
            parse_sse_line("data:  there"),
            SseLine::Data(" there".to_string())
        );
        assert_eq!(
            parse_sse_line("data: trailing  "),
            SseLine::Data("trailing  ".to_string())
        );
    }

    #[test]
    fn test_parse_data_keeps_inner_colons() {
        assert_eq!(
            parse_sse_line("data: time: 12:30"),
            SseLine::Data("time: 12:30".to_string())
        );
    }

    #[test]
    fn test_parse_field_without_colon() {
        assert_eq!(parse_sse_line("data"), SseLine::Data(String::new()));
    }

    #[test]
    fn test_parse_other_fields() {
        assert_eq!(parse_sse_line("event: ping"), SseLine::Event("ping".to_string()));
        assert_eq!(parse_sse_line("id: 42"), SseLine::Id("42".to_string()));
        assert_eq!(parse_sse_line("retry: 3000"), SseLine::Retry("3000".to_string()));
        assert_eq!(
            parse_sse_line("unknown: something"),
            SseLine::Unknown("unknown: something".to_string())
        );
    }

    // Tests for SseParser

    #[test]
    fn test_single_data_event() {
        let mut parser = SseParser::new();
        let events = feed_all(&mut parser, &["data: Hello", ""]);
        assert_eq!(events, vec![SseMessage::new("message", "Hello")]);
    }

    #[test]
    fn test_multiline_data_joined_with_newline() {
        let mut parser = SseParser::new();
        let events = feed_all(&mut parser, &["data: first", "data: second", ""]);
        assert_eq!(events, vec![SseMessage::new("message", "first\nsecond")]);
    }

    #[test]
    fn test_empty_data_is_still_an_event() {
        let mut parser = SseParser::new();
        let events = feed_all(&mut parser, &["data:", ""]);
        assert_eq!(events, vec![SseMessage::new("message", "")]);
    }

    #[test]
    fn test_whitespace_only_data_is_preserved() {
        let mut parser = SseParser::new();
        let events = feed_all(&mut parser, &["data:  ", ""]);
        assert_eq!(events, vec![SseMessage::new("message", " ")]);
    }

    #[test]
    fn test_event_without_data_is_dropped() {
        let mut parser = SseParser::new();
        let events = feed_all(&mut parser, &["event: ping", "", "data: next", ""]);
        assert_eq!(events, vec![SseMessage::new("message", "next")]);
    }

    #[test]
    fn test_named_event_type_is_kept() {
        let mut parser = SseParser::new();
        let events = feed_all(&mut parser, &["event: status", "data: busy", ""]);
        assert_eq!(events, vec![SseMessage::new("status", "busy")]);
        assert!(!events[0].is_default_type());
    }

    #[test]
    fn test_comments_and_ids_do_not_interrupt() {
        let mut parser = SseParser::new();
        let events = feed_all(
            &mut parser,
            &[": ping", "id: 7", "data: a", "retry: 100", "data: b", ""],
        );
        assert_eq!(events, vec![SseMessage::new("message", "a\nb")]);
    }

    #[test]
    fn test_consecutive_blank_lines_emit_nothing_extra() {
        let mut parser = SseParser::new();
        let events = feed_all(&mut parser, &["data: x", "", "", ""]);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_done_sentinel_is_plain_data_here() {
        let mut parser = SseParser::new();
        let events = feed_all(&mut parser, &["data: [DONE]", ""]);
        assert_eq!(events, vec![SseMessage::new("message", "[DONE]")]);
    }

    #[test]
    fn test_reset_discards_pending() {
        let mut parser = SseParser::new();
        parser.feed_line("event: status");
        parser.feed_line("data: partial");
        assert!(parser.has_pending());

        parser.reset();
        assert!(!parser.has_pending());
        assert!(parser.feed_line("").is_none());
    }
}
