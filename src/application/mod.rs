pub mod services;

pub use services::SocialGraph;
