//! # aurora
//!
//! Command-line driver for the [`aurora_page`] renderer: loads optional
//! `aurora.toml` settings, renders the homepage and writes it out.

pub mod cli;
pub mod config;

pub use cli::{run, Cli, Command};
pub use config::{AuroraConfig, ConfigError};
