use crate::domain::entities::{Post, User};
use crate::domain::value_objects::{PostId, UserId};
use crate::infrastructure::cache::{FeedCache, FeedSnapshot};
use crate::shared::{AppConfig, AppError, Result};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use tracing::{debug, info};

/// ソーシャルグラフ本体
///
/// ユーザー・投稿のアリーナと名前レジストリを所有し、ニュースフィードを
/// リードスルーキャッシュ経由で提供する。アリーナは追記専用なので、
/// 発行したハンドルはプロセス寿命の間ずっと有効。
pub struct SocialGraph {
    users: Vec<User>,
    posts: Vec<Post>,
    by_name: HashMap<String, UserId>,
    feed_cache: FeedCache,
}

impl SocialGraph {
    pub fn new() -> Self {
        // 既定構成は常にvalidateを通る
        Self::with_config(&AppConfig::default()).expect("default config is valid")
    }

    pub fn with_config(config: &AppConfig) -> Result<Self> {
        config.validate().map_err(AppError::Config)?;
        let capacity = NonZeroUsize::new(config.cache.max_feed_entries)
            .ok_or_else(|| AppError::Config("max_feed_entries must be greater than 0".to_string()))?;

        Ok(Self {
            users: Vec::new(),
            posts: Vec::new(),
            by_name: HashMap::new(),
            feed_cache: FeedCache::new(capacity),
        })
    }

    /// ユーザーを登録する。同名は後勝ちで名前を付け替える
    pub fn add_user(&mut self, name: &str, age: u32) -> UserId {
        let id = UserId::new(self.users.len());
        self.users.push(User::new(name.to_string(), age));

        if let Some(previous) = self.by_name.insert(name.to_string(), id) {
            debug!("user name remapped: {name} ({previous} -> {id})");
        }
        info!("user registered: {name} ({id})");
        id
    }

    /// 名前でユーザーを検索する。未登録ならNone
    pub fn get_user(&self, name: &str) -> Option<&User> {
        self.by_name.get(name).map(|id| &self.users[id.index()])
    }

    pub fn get_user_id(&self, name: &str) -> Option<UserId> {
        self.by_name.get(name).copied()
    }

    /// ハンドルをユーザー実体に解決する
    pub fn user(&self, id: UserId) -> Result<&User> {
        self.users
            .get(id.index())
            .ok_or_else(|| AppError::UserNotFound(id.to_string()))
    }

    fn user_mut(&mut self, id: UserId) -> Result<&mut User> {
        self.users
            .get_mut(id.index())
            .ok_or_else(|| AppError::UserNotFound(id.to_string()))
    }

    /// ハンドルを投稿実体に解決する
    pub fn post(&self, id: PostId) -> Result<&Post> {
        self.posts
            .get(id.index())
            .ok_or_else(|| AppError::PostNotFound(id.to_string()))
    }

    fn post_mut(&mut self, id: PostId) -> Result<&mut Post> {
        self.posts
            .get_mut(id.index())
            .ok_or_else(|| AppError::PostNotFound(id.to_string()))
    }

    /// 友達を追加する（単方向。相互にするには両方向で呼ぶ）
    pub fn add_friend(&mut self, user: UserId, friend: UserId) -> Result<()> {
        self.user(friend)?;
        self.user_mut(user)?.add_friend(friend);
        Ok(())
    }

    /// 投稿を作成して作者の投稿リストに紐付ける
    pub fn add_post(&mut self, author: UserId, content: &str) -> Result<PostId> {
        self.user(author)?;

        let id = PostId::new(self.posts.len());
        self.posts.push(Post::new(content.to_string(), author));
        self.user_mut(author)?.add_post(id);

        debug!("post created: {id} by {author}");
        Ok(id)
    }

    pub fn like_post(&mut self, post: PostId) -> Result<()> {
        self.post_mut(post)?.add_like();
        Ok(())
    }

    pub fn comment_on_post(&mut self, post: PostId, comment: &str) -> Result<()> {
        self.post_mut(post)?.add_comment(comment.to_string());
        Ok(())
    }

    /// ニュースフィードを取得する（リードスルー）
    ///
    /// キャッシュヒット時は保存済みスナップショットをそのまま返す。
    /// 友達や投稿がその後変わっていても再検証はしない（staleは仕様）。
    /// ミス時は計算してキャッシュに保存する。満杯ならLRUエントリを
    /// 追い出す。
    pub fn get_news_feed(&mut self, user: UserId) -> Result<FeedSnapshot> {
        if let Some(snapshot) = self.feed_cache.get(user) {
            return Ok(snapshot);
        }

        let feed = self.compute_news_feed(self.user(user)?)?;
        Ok(self.feed_cache.put(user, feed))
    }

    /// スナップショット中のハンドルを投稿実体に解決する
    pub fn resolve_feed(&self, feed: &[PostId]) -> Vec<&Post> {
        feed.iter().filter_map(|id| self.post(*id).ok()).collect()
    }

    // 友達リスト順に、各友達の投稿を挿入順のまま連結する
    fn compute_news_feed(&self, user: &User) -> Result<Vec<PostId>> {
        let mut feed = Vec::new();
        for friend in &user.friends {
            let friend = self.user(*friend)?;
            feed.extend_from_slice(&friend.posts);
        }
        Ok(feed)
    }
}

impl Default for SocialGraph {
    fn default() -> Self {
        Self::new()
    }
}
