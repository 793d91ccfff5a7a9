pub mod feed_cache;
pub mod memory_cache;

pub use feed_cache::{FeedCache, FeedSnapshot};
pub use memory_cache::MemoryCache;
