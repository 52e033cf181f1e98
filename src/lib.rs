//! Source filter - Elm-style editor for a three-level source hierarchy
//!
//! This crate provides the core types and logic for a source selector
//! dropdown and an editable source outline sharing one in-memory forest.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod input;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod tree;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::{Cmd, SourceListener};
pub use config::AppConfig;
pub use messages::Msg;
pub use model::{AppModel, Forest, SourceConfig, SourceId, SourceNode};
pub use tree::TreeError;
