use crate::schema::{Fragment, RawNodeRecord};
use std::fmt;

/// Author role tag. An open set: exports grow new roles without notice, so
/// unrecognized tags are carried through verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    System,
    Tool,
    Unknown,
    Other(String),
}

impl Role {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            "system" => Role::System,
            "tool" => Role::Tool,
            "unknown" => Role::Unknown,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
            Role::Tool => "tool",
            Role::Unknown => "unknown",
            Role::Other(tag) => tag,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One conversation turn: identity, parent pointer, ordered child pointers
/// and an optional message payload.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub parent: Option<String>,
    pub children: Vec<String>,
    pub message: Option<Message>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub role: Role,
    pub fragments: Vec<Fragment>,
}

impl Node {
    pub fn from_record(id: String, record: RawNodeRecord) -> Self {
        let message = record.message.map(|message| Message {
            role: message
                .author
                .and_then(|author| author.role)
                .map(|tag| Role::from_tag(&tag))
                .unwrap_or(Role::Unknown),
            fragments: message
                .content
                .map(|content| content.parts)
                .unwrap_or_default(),
        });

        Node {
            id,
            parent: record.parent,
            children: record.children,
            message,
        }
    }

    /// Author role, `Role::Unknown` when the node carries no message.
    pub fn role(&self) -> Role {
        self.message
            .as_ref()
            .map(|message| message.role.clone())
            .unwrap_or(Role::Unknown)
    }

    /// Flattened text content: in-order concatenation of the string
    /// fragments, trimmed of surrounding whitespace. Non-text fragments
    /// contribute nothing; an absent payload yields the empty string.
    pub fn text(&self) -> String {
        let Some(message) = &self.message else {
            return String::new();
        };

        let mut text = String::new();
        for fragment in &message.fragments {
            if let Some(part) = fragment.as_text() {
                text.push_str(part);
            }
        }
        text.trim().to_string()
    }
}
