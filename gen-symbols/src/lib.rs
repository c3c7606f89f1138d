//! Symbol helpers for source generators.
//!
//! The host toolchain supplies the type graph and the semantic model through
//! the [`NamedTypeSymbol`] and [`SemanticModel`] traits.

mod hierarchy;
mod resolver;

pub use hierarchy::{BaseTypes, NamedTypeSymbol};
pub use resolver::{SemanticModel, SymbolResolver};
