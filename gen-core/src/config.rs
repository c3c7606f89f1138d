//! Builder configuration loaded from TOML.

use std::{fmt, path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Error, Result};

/// Width used whenever a configured indent width is not positive.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Largest indent width used by builders; wider configured widths are clamped.
pub const MAX_INDENT_WIDTH: usize = 64;

/// Filename reported in diagnostics when parsing from a string.
pub const DEFAULT_CONFIG_FILENAME: &str = "gentools.toml";

/// Line terminator written by line-oriented builder operations.
///
/// The terminator is chosen explicitly and never follows the host platform,
/// so generated output is byte-identical everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The terminator as written to the buffer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lf => write!(f, "lf"),
            Self::CrLf => write!(f, "crlf"),
        }
    }
}

/// Settings for a text builder.
///
/// ```toml
/// [builder]
/// indent_width = 2
/// line_ending = "crlf"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderConfig {
    /// Spaces per indentation level. Values `<= 0` fall back to 4.
    pub indent_width: i64,
    pub line_ending: LineEnding,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH as i64,
            line_ending: LineEnding::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    builder: BuilderConfig,
}

impl BuilderConfig {
    /// Create a configuration with the given width and `\n` line endings.
    pub fn new(indent_width: i64) -> Self {
        Self {
            indent_width,
            ..Self::default()
        }
    }

    /// Set the line terminator.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// The indent width actually used by builders.
    ///
    /// Non-positive widths fall back to 4, widths above [`MAX_INDENT_WIDTH`] are clamped.
    pub fn effective_indent_width(&self) -> usize {
        if self.indent_width > 0 {
            usize::try_from(self.indent_width)
                .map_or(MAX_INDENT_WIDTH, |width| width.min(MAX_INDENT_WIDTH))
        } else {
            DEFAULT_INDENT_WIDTH
        }
    }

    /// Whether the configured width is above [`MAX_INDENT_WIDTH`].
    pub fn is_width_clamped(&self) -> bool {
        self.indent_width > MAX_INDENT_WIDTH as i64
    }

    /// Whether the configured width had to be replaced by the default.
    pub fn uses_fallback_width(&self) -> bool {
        self.indent_width <= 0
    }

    /// Parse a configuration file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a configuration from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        log::debug!(
            "loaded builder config from {filename}: indent_width={}, line_ending={}",
            file.builder.indent_width,
            file.builder.line_ending
        );
        Ok(file.builder)
    }
}

impl FromStr for BuilderConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_CONFIG_FILENAME)
    }
}
