use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// ニュースフィードキャッシュの最大エントリ数
    pub max_feed_entries: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_feed_entries: 1000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        // 既定値
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("KIZUNA_FEED_CACHE_CAPACITY") {
            if let Some(value) = parse_usize(&v) {
                cfg.cache.max_feed_entries = value;
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cache.max_feed_entries == 0 {
            return Err("Cache max_feed_entries must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn parse_usize(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok()
}
