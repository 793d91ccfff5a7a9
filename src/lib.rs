pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::SocialGraph;
pub use domain::{Post, PostId, User, UserId};
pub use infrastructure::cache::FeedSnapshot;
pub use shared::{AppConfig, AppError, CacheConfig, Result};
