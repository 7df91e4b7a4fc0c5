//! Client for the GraphQL engine's administration APIs.
//!
//! Start with [`engine::Client`]: it hands out one handle per API generation,
//! each exposing exactly the operations that generation serves. Requests go
//! out through a [`transport::Transport`]; responses come back as undecoded
//! [`transport::ResponseBody`] streams.

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod transport;
pub mod ui;

pub use engine::Client;
pub use error::{EngineError, Result};
