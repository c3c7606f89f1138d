//! Scoped indentation.

use std::ops::{Deref, DerefMut};

use super::TextBuilder;

/// Temporarily changes the indent depth of a [`TextBuilder`].
///
/// The depth in effect when the guard was created is restored on drop, so it
/// comes back on every exit path: normal return, `?`, or unwinding.
///
/// # Example
///
/// ```
/// use gentools_builder::TextBuilder;
///
/// let mut builder = TextBuilder::new();
/// builder.append_line("class Foo {");
/// {
///     let mut body = builder.indented();
///     body.append_line("int x;");
/// }
/// builder.append_line("}");
///
/// assert_eq!(builder.to_text(), "class Foo {\n    int x;\n}\n");
/// ```
#[derive(Debug)]
pub struct IndentGuard<'a> {
    builder: &'a mut TextBuilder,
    saved_depth: usize,
}

impl<'a> IndentGuard<'a> {
    pub(super) fn enter(builder: &'a mut TextBuilder, depth: usize) -> Self {
        let saved_depth = builder.indent_depth();
        builder.set_depth(depth);
        Self {
            builder,
            saved_depth,
        }
    }
}

impl Deref for IndentGuard<'_> {
    type Target = TextBuilder;

    fn deref(&self) -> &Self::Target {
        &*self.builder
    }
}

impl DerefMut for IndentGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.builder
    }
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        self.builder.set_depth(self.saved_depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_on_drop() {
        let mut builder = TextBuilder::new();
        {
            let guard = builder.indented();
            assert_eq!(guard.indent_depth(), 1);
        }
        assert_eq!(builder.indent_depth(), 0);
    }

    #[test]
    fn test_guard_restores_after_unbalanced_indent() {
        let mut builder = TextBuilder::new();
        {
            let mut guard = builder.indented();
            guard.indent().indent();
        }
        assert_eq!(builder.indent_depth(), 0);
    }

    #[test]
    fn test_unindented_guard_at_floor() {
        let mut builder = TextBuilder::new();
        {
            let guard = builder.unindented();
            assert_eq!(guard.indent_depth(), 0);
        }
        assert_eq!(builder.indent_depth(), 0);
    }
}
