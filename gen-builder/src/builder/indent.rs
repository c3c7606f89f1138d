//! Indentation configuration for generated text.

use gentools_core::DEFAULT_INDENT_WIDTH;

/// Space-based indentation with a fixed width per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: usize,
}

impl Indent {
    /// 4-space indentation (C#, Rust).
    pub const CSHARP: Self = Self {
        width: DEFAULT_INDENT_WIDTH,
    };

    /// Indentation of `width` spaces per level.
    ///
    /// A width of zero falls back to 4 spaces.
    pub fn spaces(width: usize) -> Self {
        if width == 0 {
            Self::CSHARP
        } else {
            Self { width }
        }
    }

    /// Number of spaces per level.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of spaces for `depth` levels, saturating at `usize::MAX`.
    pub fn columns(&self, depth: usize) -> usize {
        self.width.saturating_mul(depth)
    }

    pub(crate) fn write_prefix(&self, depth: usize, buffer: &mut String) {
        buffer.extend(std::iter::repeat_n(' ', self.columns(depth)));
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces() {
        assert_eq!(Indent::spaces(2).width(), 2);
        assert_eq!(Indent::spaces(8).width(), 8);
    }

    #[test]
    fn test_zero_width_falls_back() {
        assert_eq!(Indent::spaces(0), Indent::CSHARP);
        assert_eq!(Indent::spaces(0).width(), 4);
    }

    #[test]
    fn test_columns() {
        assert_eq!(Indent::spaces(2).columns(0), 0);
        assert_eq!(Indent::spaces(2).columns(3), 6);
        assert_eq!(Indent::CSHARP.columns(1), 4);
    }

    #[test]
    fn test_columns_saturate() {
        assert_eq!(Indent::spaces(usize::MAX).columns(3), usize::MAX);
    }

    #[test]
    fn test_write_prefix_appends() {
        let mut buffer = String::from("x");
        Indent::spaces(2).write_prefix(2, &mut buffer);
        assert_eq!(buffer, "x    ");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::CSHARP);
    }
}
