use crate::domain::value_objects::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub content: String,
    pub author: UserId,
    pub likes: u32,
    pub comments: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(content: String, author: UserId) -> Self {
        Self {
            content,
            author,
            likes: 0,
            comments: Vec::new(),
            created_at: chrono::Utc::now(),
        }
    }

    pub fn add_like(&mut self) {
        self.likes += 1;
    }

    /// コメントを末尾に追加する（空文字列もそのまま受け付ける）
    pub fn add_comment(&mut self, comment: String) {
        self.comments.push(comment);
    }
}
