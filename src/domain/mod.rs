#![allow(unused_imports)]

pub mod entities;
pub mod value_objects;

pub use entities::{Post, User};
pub use value_objects::{PostId, UserId};
