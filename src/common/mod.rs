pub mod commands;
pub mod types;

pub use commands::{NewPost, PostForm};
pub use types::Message;
