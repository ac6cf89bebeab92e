//! Streamchat - a streaming chat client for server-sent-event backends
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod conversation;
pub mod error;
pub mod models;
pub mod sse;
pub mod stream;
pub mod traits;
