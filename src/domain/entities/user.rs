use crate::domain::value_objects::{PostId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub name: String,
    pub age: u32,
    pub friends: Vec<UserId>,
    pub posts: Vec<PostId>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, age: u32) -> Self {
        Self {
            name,
            age,
            friends: Vec::new(),
            posts: Vec::new(),
            created_at: chrono::Utc::now(),
        }
    }

    /// フレンドリストへ追加（挿入順を保持。重複・自己追加も許容）
    pub fn add_friend(&mut self, friend: UserId) {
        self.friends.push(friend);
    }

    /// 投稿リストへ追加（挿入順を保持）
    pub fn add_post(&mut self, post: PostId) {
        self.posts.push(post);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_friends_or_posts() {
        let user = User::new("Alice".to_string(), 25);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.age, 25);
        assert!(user.friends.is_empty());
        assert!(user.posts.is_empty());
    }

    #[test]
    fn test_add_friend_keeps_insertion_order_and_duplicates() {
        let mut user = User::new("Alice".to_string(), 25);
        let bob = UserId::new(1);
        let carol = UserId::new(2);

        user.add_friend(bob);
        user.add_friend(carol);
        user.add_friend(bob); // 重複もそのまま積む

        assert_eq!(user.friends, vec![bob, carol, bob]);
    }

    #[test]
    fn test_add_friend_allows_self() {
        let mut user = User::new("Alice".to_string(), 25);
        let me = UserId::new(0);

        user.add_friend(me);

        assert_eq!(user.friends, vec![me]);
    }

    #[test]
    fn test_add_post_keeps_insertion_order() {
        let mut user = User::new("Alice".to_string(), 25);
        let first = PostId::new(0);
        let second = PostId::new(1);

        user.add_post(first);
        user.add_post(second);

        assert_eq!(user.posts, vec![first, second]);
    }
}
