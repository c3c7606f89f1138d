//! Indentation-aware text building for source generators.
//!
//! # Module Organization
//!
//! - [`builder`] - [`TextBuilder`] and its indentation primitives
//! - C# conveniences (`using` directives, comments, namespaces) are
//!   inherent methods on [`TextBuilder`]

pub mod builder;
mod csharp;

pub use builder::{BodyLines, Indent, IndentGuard, TextBuilder, body_lines};
pub use gentools_core::{BuilderConfig, LineEnding};
