//! Indentation-aware text builder for generated source files.

use std::fmt;

use gentools_core::{BuilderConfig, LineEnding};

use super::{Indent, IndentGuard, body_lines};

/// Fluent API for building indented text.
///
/// Every mutating method returns `&mut Self`, so calls chain on a binding or
/// on a temporary. No operation fails: over-unindenting clamps at zero and a
/// zero indent width falls back to 4 spaces.
///
/// Raw appends ([`append`](Self::append), [`append_char`](Self::append_char))
/// write text verbatim, prefixed by the current indentation only when the
/// buffer sits at the start of a line. Line-oriented appends always write the
/// prefix.
///
/// # Example
///
/// ```
/// use gentools_builder::TextBuilder;
///
/// let mut builder = TextBuilder::new();
/// builder
///     .append_line("public class Foo {")
///     .indent_with(|b| {
///         b.append_line("public int Bar { get; set; }");
///     })
///     .append_line("}");
///
/// assert_eq!(
///     builder.to_text(),
///     "public class Foo {\n    public int Bar { get; set; }\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextBuilder {
    buffer: String,
    depth: usize,
    indent: Indent,
    line_ending: LineEnding,
}

impl TextBuilder {
    /// Create an empty builder with 4-space indentation and `\n` line endings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with `width` spaces per level (0 means 4).
    pub fn with_width(width: usize) -> Self {
        Self::with_indent(Indent::spaces(width))
    }

    /// Create an empty builder with the given indentation.
    pub fn with_indent(indent: Indent) -> Self {
        Self {
            indent,
            ..Self::default()
        }
    }

    /// Create an empty builder from a loaded configuration.
    pub fn from_config(config: &BuilderConfig) -> Self {
        if config.uses_fallback_width() {
            log::warn!(
                "indent width {} is not positive, using {} spaces",
                config.indent_width,
                config.effective_indent_width()
            );
        } else if config.is_width_clamped() {
            log::warn!(
                "indent width {} is too large, using {} spaces",
                config.indent_width,
                config.effective_indent_width()
            );
        }
        Self::with_width(config.effective_indent_width()).with_line_ending(config.line_ending)
    }

    /// Use `line_ending` for every line terminator written from now on.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    // =========================================================================
    // Raw appends
    // =========================================================================

    /// Append text verbatim.
    ///
    /// At the start of a line the current indent prefix is written first.
    /// Embedded line breaks are not re-indented.
    pub fn append(&mut self, text: &str) -> &mut Self {
        if let Some(first) = text.chars().next() {
            self.write_indent_before(first);
            self.buffer.push_str(text);
        }
        self
    }

    /// Append a single character, following the same rule as [`append`](Self::append).
    pub fn append_char(&mut self, c: char) -> &mut Self {
        self.write_indent_before(c);
        self.buffer.push(c);
        self
    }

    // =========================================================================
    // Line-oriented appends
    // =========================================================================

    /// Append a bare line terminator, without indentation.
    pub fn append_blank_line(&mut self) -> &mut Self {
        self.buffer.push_str(self.line_ending.as_str());
        self
    }

    /// Append the indent prefix, `text` and a line terminator.
    ///
    /// `text` is not split: embedded line breaks pass through unindented.
    /// Use [`append_body`](Self::append_body) for multi-line text.
    pub fn append_line(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(text);
        self.buffer.push_str(self.line_ending.as_str());
        self
    }

    /// Append every physical line of `text` with its own indent prefix.
    ///
    /// Lines break on `\n`, `\r` and `\r\n`. Empty lines are kept, including
    /// the one after a trailing break and the single line of an empty input.
    pub fn append_body(&mut self, text: &str) -> &mut Self {
        for line in body_lines(text) {
            self.append_line(line);
        }
        self
    }

    // =========================================================================
    // Indentation
    // =========================================================================

    /// Increase the indent depth by one.
    pub fn indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Decrease the indent depth by one, stopping at zero.
    pub fn unindent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Indent one level until the returned guard is dropped.
    pub fn indented(&mut self) -> IndentGuard<'_> {
        let depth = self.depth + 1;
        IndentGuard::enter(self, depth)
    }

    /// Unindent one level (clamped at zero) until the returned guard is dropped.
    pub fn unindented(&mut self) -> IndentGuard<'_> {
        let depth = self.depth.saturating_sub(1);
        IndentGuard::enter(self, depth)
    }

    /// Run `f` one level deeper.
    ///
    /// The depth is restored afterwards, even if `f` leaves it unbalanced or panics.
    pub fn indent_with<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut TextBuilder),
    {
        {
            let mut guard = self.indented();
            f(&mut *guard);
        }
        self
    }

    /// Fallible variant of [`indent_with`](Self::indent_with).
    ///
    /// The depth is restored before the error is returned.
    pub fn try_indent_with<F, E>(&mut self, f: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&mut TextBuilder) -> Result<(), E>,
    {
        {
            let mut guard = self.indented();
            f(&mut *guard)?;
        }
        Ok(self)
    }

    /// Run `f` one level shallower (clamped at zero), then restore the depth.
    pub fn unindent_with<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut TextBuilder),
    {
        {
            let mut guard = self.unindented();
            f(&mut *guard);
        }
        self
    }

    /// Append a line one level deeper than the current depth.
    pub fn append_line_indented(&mut self, text: &str) -> &mut Self {
        self.indent_with(|b| {
            b.append_line(text);
        })
    }

    /// Append a body one level deeper than the current depth.
    pub fn append_body_indented(&mut self, text: &str) -> &mut Self {
        self.indent_with(|b| {
            b.append_body(text);
        })
    }

    /// Append a line one level shallower than the current depth.
    pub fn unindent_line(&mut self, text: &str) -> &mut Self {
        self.unindent_with(|b| {
            b.append_line(text);
        })
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Call `f` for each item, in iteration order.
    pub fn for_each<I, F>(&mut self, items: I, mut f: F) -> &mut Self
    where
        I: IntoIterator,
        F: FnMut(&mut TextBuilder, I::Item),
    {
        for item in items {
            f(&mut *self, item);
        }
        self
    }

    /// Append each item as a line.
    pub fn for_each_append_line<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.for_each(items, |b, item| {
            b.append_line(item.as_ref());
        })
    }

    /// Append each formatted item as a line.
    pub fn for_each_append_line_with<I, F, S>(&mut self, items: I, mut formatter: F) -> &mut Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> S,
        S: AsRef<str>,
    {
        self.for_each(items, |b, item| {
            b.append_line(formatter(item).as_ref());
        })
    }

    /// Append each item as a line one level deeper.
    pub fn for_each_append_line_indented<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.for_each(items, |b, item| {
            b.append_line_indented(item.as_ref());
        })
    }

    /// Append each formatted item as a line one level deeper.
    pub fn for_each_append_line_indented_with<I, F, S>(
        &mut self,
        items: I,
        mut formatter: F,
    ) -> &mut Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> S,
        S: AsRef<str>,
    {
        self.for_each(items, |b, item| {
            b.append_line_indented(formatter(item).as_ref());
        })
    }

    /// Append each item as a body.
    pub fn for_each_append_body<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.for_each(items, |b, item| {
            b.append_body(item.as_ref());
        })
    }

    /// Append each formatted item as a body.
    pub fn for_each_append_body_with<I, F, S>(&mut self, items: I, mut formatter: F) -> &mut Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> S,
        S: AsRef<str>,
    {
        self.for_each(items, |b, item| {
            b.append_body(formatter(item).as_ref());
        })
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Snapshot of the text built so far.
    pub fn to_text(&self) -> String {
        self.buffer.clone()
    }

    /// Take the text built so far and [`clear`](Self::clear) the builder.
    pub fn to_text_and_clear(&mut self) -> String {
        let text = std::mem::take(&mut self.buffer);
        self.clear();
        text
    }

    /// Empty the buffer and reset the depth to zero. The indent width is kept.
    pub fn clear(&mut self) -> &mut Self {
        self.buffer.clear();
        self.depth = 0;
        self
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Whether nothing has been written since construction or the last clear.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Get the current indentation level.
    pub fn indent_depth(&self) -> usize {
        self.depth
    }

    /// Spaces per indentation level.
    pub fn indent_width(&self) -> usize {
        self.indent.width()
    }

    /// Line terminator written by line-oriented appends.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub(super) fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Write the indent prefix if `next` starts a new line.
    ///
    /// A `\n` right after a `\r` completes a `\r\n` terminator, so it is not
    /// a line start.
    fn write_indent_before(&mut self, next: char) {
        let at_line_start = match self.buffer.chars().next_back() {
            None | Some('\n') => true,
            Some('\r') => next != '\n',
            Some(_) => false,
        };
        if at_line_start {
            self.write_indent();
        }
    }

    fn write_indent(&mut self) {
        self.indent.write_prefix(self.depth, &mut self.buffer);
    }
}

impl fmt::Write for TextBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.append_char(c);
        Ok(())
    }
}

impl fmt::Display for TextBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
