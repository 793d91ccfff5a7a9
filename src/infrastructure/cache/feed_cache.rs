use crate::domain::value_objects::{PostId, UserId};
use crate::infrastructure::cache::memory_cache::MemoryCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::debug;

/// ニュースフィードの計算結果スナップショット
///
/// Arcの同一性がスナップショットの同一性。キャッシュヒットは
/// 同じ割り当てへのクローンを返す。
pub type FeedSnapshot = Arc<Vec<PostId>>;

/// ユーザー単位のニュースフィードキャッシュ
pub struct FeedCache {
    cache: MemoryCache<UserId, FeedSnapshot>,
}

impl FeedCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            cache: MemoryCache::new(capacity),
        }
    }

    /// キャッシュ済みスナップショットを取得（ヒットでLRU順を更新）
    pub fn get(&mut self, user: UserId) -> Option<FeedSnapshot> {
        match self.cache.get(&user) {
            Some(snapshot) => {
                debug!("feed cache hit: {user}");
                Some(Arc::clone(snapshot))
            }
            None => {
                debug!("feed cache miss: {user}");
                None
            }
        }
    }

    /// 計算済みフィードを保存してスナップショットを返す
    pub fn put(&mut self, user: UserId, feed: Vec<PostId>) -> FeedSnapshot {
        let snapshot: FeedSnapshot = Arc::new(feed);
        if let Some((evicted, _)) = self.cache.put(user, Arc::clone(&snapshot)) {
            if evicted != user {
                debug!("feed cache evicted: {evicted}");
            }
        }
        snapshot
    }

    pub fn contains(&self, user: UserId) -> bool {
        self.cache.contains(&user)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
