pub mod message_store;

pub use message_store::{MessageStore, Snapshot};
