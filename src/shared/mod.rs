#![allow(unused_imports)]

pub mod config;
pub mod error;

pub use config::{AppConfig, CacheConfig};
pub use error::{AppError, Result};
