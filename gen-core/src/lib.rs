//! Core types and helpers shared by the gentools crates.
//!
//! - [`BuilderConfig`] - TOML-backed settings for text builders
//! - [`LineEnding`] - The fixed line terminator emitted by builders
//! - [`NullableStack`] - `try_pop`/`try_peek` over stacks of optional values

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod stack;

pub use config::{
    BuilderConfig, DEFAULT_CONFIG_FILENAME, DEFAULT_INDENT_WIDTH, LineEnding, MAX_INDENT_WIDTH,
};
pub use error::{Error, Result};
pub use stack::NullableStack;
