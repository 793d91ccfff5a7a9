use lru::LruCache;
use std::hash::Hash;
use std::num::NonZeroUsize;

/// 容量制限付きメモリキャッシュ
///
/// 満杯時はLRU方式で既存エントリを追い出す。
pub struct MemoryCache<K: Hash + Eq, V> {
    entries: LruCache<K, V>,
}

impl<K: Hash + Eq, V> MemoryCache<K, V> {
    /// 指定した最大エントリ数でキャッシュを作成
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// キャッシュからデータを取得（LRU順を更新する）
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// LRU順を更新せずに参照する
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.peek(key)
    }

    /// キャッシュにデータを保存
    ///
    /// 容量超過で追い出されたエントリ（またはキー衝突で置き換えられた
    /// 旧エントリ）を返す。
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        self.entries.push(key, value)
    }

    /// キャッシュから削除
    pub fn delete(&mut self, key: &K) -> Option<V> {
        self.entries.pop(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains(key)
    }

    /// キャッシュサイズを取得
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// キャッシュをクリア
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_of(capacity: usize) -> MemoryCache<String, u32> {
        MemoryCache::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn test_set_and_get() {
        let mut cache = cache_of(10);
        assert!(cache.put("a".to_string(), 1).is_none());
        assert_eq!(cache.get(&"a".to_string()), Some(&1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_put_at_capacity_evicts_least_recently_used() {
        let mut cache = cache_of(2);
        cache.put("a".to_string(), 1);
        cache.put("b".to_string(), 2);

        let evicted = cache.put("c".to_string(), 3);
        assert_eq!(evicted, Some(("a".to_string(), 1)));
        assert!(!cache.contains(&"a".to_string()));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_get_refreshes_recency() {
        let mut cache = cache_of(2);
        cache.put("a".to_string(), 1);
        cache.put("b".to_string(), 2);

        // aに触れておくと、次の追い出し対象はbになる
        cache.get(&"a".to_string());
        let evicted = cache.put("c".to_string(), 3);
        assert_eq!(evicted, Some(("b".to_string(), 2)));
        assert!(cache.contains(&"a".to_string()));
    }

    #[test]
    fn test_peek_does_not_refresh_recency() {
        let mut cache = cache_of(2);
        cache.put("a".to_string(), 1);
        cache.put("b".to_string(), 2);

        cache.peek(&"a".to_string());
        let evicted = cache.put("c".to_string(), 3);
        assert_eq!(evicted, Some(("a".to_string(), 1)));
    }

    #[test]
    fn test_put_same_key_replaces_value() {
        let mut cache = cache_of(2);
        cache.put("a".to_string(), 1);
        let replaced = cache.put("a".to_string(), 9);
        assert_eq!(replaced, Some(("a".to_string(), 1)));
        assert_eq!(cache.get(&"a".to_string()), Some(&9));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_delete_and_clear() {
        let mut cache = cache_of(2);
        cache.put("a".to_string(), 1);
        cache.put("b".to_string(), 2);

        assert_eq!(cache.delete(&"a".to_string()), Some(1));
        assert!(!cache.contains(&"a".to_string()));

        cache.clear();
        assert!(cache.is_empty());
    }
}
