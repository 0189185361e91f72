//! Core domain + command dispatch for the Discord prefix-command bot.
//!
//! This crate is intentionally framework-agnostic. Discord lives behind the
//! messaging port implemented in the `dcb-discord` adapter crate.

pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod messaging;

pub use errors::{Error, Result};
