//! Line splitting for multi-line bodies.

/// Split `text` into physical lines.
///
/// Breaks on `\n`, on `\r`, and on `\r\n` as a single break. Every segment is
/// yielded, including empty ones: `""` yields one empty line and a trailing
/// break yields a trailing empty line.
pub fn body_lines(text: &str) -> BodyLines<'_> {
    BodyLines { rest: Some(text) }
}

/// Iterator returned by [`body_lines`].
#[derive(Debug, Clone)]
pub struct BodyLines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for BodyLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match rest.find(['\r', '\n']) {
            Some(i) => {
                let width = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = Some(&rest[i + width..]);
                Some(&rest[..i])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

impl std::iter::FusedIterator for BodyLines<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        body_lines(text).collect()
    }

    #[test]
    fn test_single_line() {
        assert_eq!(lines("Hello"), ["Hello"]);
    }

    #[test]
    fn test_empty_input_is_one_line() {
        assert_eq!(lines(""), [""]);
    }

    #[test]
    fn test_mixed_line_endings() {
        assert_eq!(lines("a\r\nb\nc\rd"), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_crlf_is_one_break() {
        assert_eq!(lines("a\r\n\r\nb"), ["a", "", "b"]);
    }

    #[test]
    fn test_lf_cr_is_two_breaks() {
        assert_eq!(lines("a\n\rb"), ["a", "", "b"]);
    }

    #[test]
    fn test_trailing_break_keeps_empty_line() {
        assert_eq!(lines("a\n"), ["a", ""]);
        assert_eq!(lines("a\r\n"), ["a", ""]);
        assert_eq!(lines("\n"), ["", ""]);
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(lines("héllo\r\nwörld"), ["héllo", "wörld"]);
    }
}
