use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    /// Label used when rendering the message.
    pub fn label(&self) -> &'static str {
        match self {
            MessageRole::User => "You",
            MessageRole::Assistant => "Assistant",
        }
    }
}

/// One entry in the conversation log.
///
/// Messages are values: nothing mutates a message in place. Growing the
/// trailing assistant reply produces a new message via [`Message::appended`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    role: MessageRole,
    content: String,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_assistant(&self) -> bool {
        self.role == MessageRole::Assistant
    }

    /// A copy of this message with `fragment` appended verbatim.
    pub fn appended(&self, fragment: &str) -> Self {
        let mut content = String::with_capacity(self.content.len() + fragment.len());
        content.push_str(&self.content);
        content.push_str(fragment);
        Self {
            role: self.role,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appended_leaves_original_untouched() {
        let original = Message::assistant("Hel");
        let grown = original.appended("lo");

        assert_eq!(original.content(), "Hel");
        assert_eq!(grown.content(), "Hello");
        assert_eq!(grown.role(), MessageRole::Assistant);
    }

    #[test]
    fn test_appended_preserves_whitespace() {
        let msg = Message::assistant("line one").appended("\n  ").appended(" two ");
        assert_eq!(msg.content(), "line one\n   two ");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::user("Hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"Hi"}"#);

        let parsed: Message =
            serde_json::from_str(r#"{"role":"assistant","content":"Hello"}"#).unwrap();
        assert_eq!(parsed, Message::assistant("Hello"));
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(MessageRole::User.label(), "You");
        assert_eq!(MessageRole::Assistant.label(), "Assistant");
    }
}
