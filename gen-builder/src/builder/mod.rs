//! Text building blocks.
//!
//! - [`TextBuilder`] - Fluent API for building indented text
//! - [`IndentGuard`] - Scoped indentation restored on drop
//! - [`Indent`] - Indentation width configuration
//! - [`body_lines`] - Splits multi-line bodies on `\n`, `\r` and `\r\n`

mod guard;
mod indent;
mod lines;
mod text_builder;

pub use guard::IndentGuard;
pub use indent::Indent;
pub use lines::{BodyLines, body_lines};
pub use text_builder::TextBuilder;
