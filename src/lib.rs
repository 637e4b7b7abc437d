//! A minimal concurrent message board served over HTTP.
//!
//! Posts live in a [`storage::MessageStore`], an in-memory copy-on-write list
//! that readers access without locking. The [`network`] module exposes it
//! through `GET /board` and `POST /board`, and [`ui`] renders the page.

pub mod common;
pub mod config;
pub mod network;
pub mod storage;
pub mod ui;
