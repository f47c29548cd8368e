// Data structures (Message, requests, responses)

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Reply sent for every accepted prompt
pub const ASSISTANT_REPLY: &str = "Got it. I’ll start with a floating, glassy layout — hero, primary CTA, and a clean design system. Then I’ll scaffold screens and routes. Want me to generate the initial components now?";

/// Collection that holds chat messages
pub const MESSAGE_COLLECTION: &str = "message";

/// Maximum number of messages returned by the history endpoint
pub const HISTORY_LIMIT: i64 = 50;

// Message roles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single chat message as stored and as returned by the history endpoint.
///
/// `role` stays a plain string: stored documents are not checked against
/// [`Role`] when they are read back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub session_id: String,
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(session_id: impl Into<String>, role: Role, content: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            role: role.as_str().to_string(),
            content: content.into(),
        }
    }

    pub fn user(session_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(session_id, Role::User, content)
    }

    pub fn assistant(session_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(session_id, Role::Assistant, content)
    }

    /// Map a stored document into a message.
    ///
    /// Missing or non-string fields fall back to `""` for `session_id` and
    /// `content`, and to `"assistant"` for `role`.
    pub fn from_document(document: &Value) -> Self {
        let field = |name: &str| document.get(name).and_then(Value::as_str);

        Self {
            session_id: field("session_id").unwrap_or_default().to_string(),
            role: field("role").unwrap_or(Role::Assistant.as_str()).to_string(),
            content: field("content").unwrap_or_default().to_string(),
        }
    }

    /// Convert into the document written to the store
    pub fn to_document(&self) -> Value {
        serde_json::json!({
            "session_id": self.session_id,
            "role": self.role,
            "content": self.content,
        })
    }
}

// Request Types
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,
}

impl ChatRequest {
    /// The prompt with surrounding whitespace removed, rejected when nothing is left
    pub fn validated_prompt(&self) -> Result<&str, ValidationError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }
        Ok(prompt)
    }
}

// Response Types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GreetingResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Body of the `/test` diagnostics endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
