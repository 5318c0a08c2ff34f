//! Delimiter enum identifying the supported field separators.

use crate::SniffError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// A field separator recognised in edge-list files.
///
/// Variants are declared in detection priority order: when a line contains
/// several candidates, the earliest variant wins.
///
/// # Example
///
/// ```rust
/// use edgelist_sniff::Delimiter;
///
/// for delimiter in Delimiter::all() {
///     println!("{}: {:?}", delimiter.display_name(), delimiter.as_char());
/// }
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// `,`
    Comma,
    /// `\t`
    Tab,
    /// A single space.
    Space,
}

impl Delimiter {
    /// The separator character.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edgelist_sniff::Delimiter;
    ///
    /// assert_eq!(Delimiter::Comma.as_char(), ',');
    /// assert_eq!(Delimiter::Tab.as_char(), '\t');
    /// ```
    pub fn as_char(&self) -> char {
        match self {
            Self::Comma => ',',
            Self::Tab => '\t',
            Self::Space => ' ',
        }
    }

    /// The separator as a single byte, ready for `csv::ReaderBuilder::delimiter`.
    pub fn as_byte(&self) -> u8 {
        match self {
            Self::Comma => b',',
            Self::Tab => b'\t',
            Self::Space => b' ',
        }
    }

    /// Human-readable name, also used as the serialized form.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Comma => "comma",
            Self::Tab => "tab",
            Self::Space => "space",
        }
    }

    /// Map a character back to its delimiter, if it is one.
    pub fn from_char(c: char) -> Option<Self> {
        Self::all().find(|d| d.as_char() == c)
    }

    /// Iterator over all delimiters in priority order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edgelist_sniff::Delimiter;
    ///
    /// let all: Vec<_> = Delimiter::all().collect();
    /// assert_eq!(all, vec![Delimiter::Comma, Delimiter::Tab, Delimiter::Space]);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }

    /// The highest-priority delimiter that occurs anywhere in `line`.
    pub(crate) fn find_in(line: &str) -> Option<Self> {
        Self::all().find(|d| line.contains(d.as_char()))
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Parses the command-line spellings `\t`, `\s` and `comma`, the display
/// names, and the literal separator characters.
impl FromStr for Delimiter {
    type Err = SniffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "\\t" | "\t" | "tab" => Ok(Self::Tab),
            "\\s" | " " | "space" => Ok(Self::Space),
            "comma" | "," => Ok(Self::Comma),
            other => Err(SniffError::UnknownDelimiter(other.to_string())),
        }
    }
}
