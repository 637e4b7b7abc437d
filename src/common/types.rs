use chrono::Utc;
use uuid::Uuid;

/// A single post on the board. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: String,
    nickname: String,
    content: String,
    posted_at: i64,
}

impl Message {
    pub fn new(nickname: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            nickname: nickname.into(),
            content: content.into(),
            posted_at: Utc::now().timestamp(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Unix seconds (UTC) at which the message was created.
    pub fn posted_at(&self) -> i64 {
        self.posted_at
    }
}
