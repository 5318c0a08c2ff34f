//! Header inspection and table format checks.
//!
//! Edge-list tooling passes around three kinds of table: edge lists,
//! node lists and cluster lists. Each one is expected to start with a
//! header naming a fixed set of columns. This module reads the first
//! record of a file and reports whether those columns are present.

use crate::{Delimiter, Result, SniffError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::debug;

/// The kind of table a file is expected to hold.
///
/// # Example
///
/// ```rust
/// use edgelist_sniff::TableFormat;
///
/// assert_eq!(TableFormat::EdgeList.required_columns(), &["source", "target"]);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum TableFormat {
    /// One edge per row.
    EdgeList,
    /// One node per row.
    NodeList,
    /// Node to cluster assignments.
    ClusterList,
}

impl TableFormat {
    /// Columns a header must contain for this format. Order is not enforced.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            Self::EdgeList => &["source", "target"],
            Self::NodeList => &["node_id"],
            Self::ClusterList => &["node_id", "cluster_id"],
        }
    }

    /// Name used on the command line and in serialized output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EdgeList => "edgelist",
            Self::NodeList => "nodelist",
            Self::ClusterList => "cluster_list",
        }
    }

    /// Human-readable label used in check results.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::EdgeList => "edgelist",
            Self::NodeList => "nodelist",
            Self::ClusterList => "cluster list",
        }
    }

    /// Iterator over all formats.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::all()
            .find(|format| format.name() == s)
            .ok_or_else(|| format!("unknown format '{}'", s))
    }
}

/// The first record of a file and whether it looks like a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderInfo {
    /// `true` when at least one cell of the first row is not a number.
    pub has_header: bool,

    /// Cells of the first record, empty for an empty file.
    pub first_row: Vec<String>,
}

/// Outcome of [`check_format`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatReport {
    /// Format that was checked.
    pub format: TableFormat,

    /// Whether the file starts with a header row.
    pub has_header: bool,

    /// Required columns absent from the header. Without a header this is
    /// every required column.
    pub missing: Vec<String>,
}

impl FormatReport {
    /// A file is valid when it has a header holding every required column.
    pub fn is_valid(&self) -> bool {
        self.has_header && self.missing.is_empty()
    }
}

/// Open `path` as a delimited table, skipping `#` comments and blank lines.
///
/// No row is treated as a header by the reader itself; callers decide.
pub(crate) fn open_table(path: &Path, delimiter: Delimiter) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|source| SniffError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(file))
}

/// Decide whether a row is a header: any cell that is not a plain run of
/// ASCII digits marks it as one.
pub(crate) fn looks_like_header<I, S>(row: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    row.into_iter().any(|cell| {
        let cell = cell.as_ref();
        cell.is_empty() || !cell.bytes().all(|b| b.is_ascii_digit())
    })
}

/// Read the first record of `path` and decide whether it is a header.
///
/// # Example
///
/// ```rust,no_run
/// use edgelist_sniff::{check_header, detect_delimiter};
///
/// let delimiter = detect_delimiter("edges.csv")?;
/// let info = check_header("edges.csv", delimiter)?;
/// if info.has_header {
///     println!("columns: {:?}", info.first_row);
/// }
/// # Ok::<(), edgelist_sniff::SniffError>(())
/// ```
pub fn check_header(path: impl AsRef<Path>, delimiter: Delimiter) -> Result<HeaderInfo> {
    let path = path.as_ref();
    let mut reader = open_table(path, delimiter)?;

    let first_row: Vec<String> = match reader.records().next() {
        Some(record) => record
            .map_err(|source| SniffError::Csv {
                path: path.to_path_buf(),
                source,
            })?
            .iter()
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    };

    let has_header = looks_like_header(&first_row);
    debug!(path = %path.display(), has_header, columns = first_row.len(), "inspected first row");

    Ok(HeaderInfo {
        has_header,
        first_row,
    })
}

/// Check that `path` carries the header columns `format` requires.
///
/// # Example
///
/// ```rust,no_run
/// use edgelist_sniff::{check_format, Delimiter, TableFormat};
///
/// let report = check_format("edges.csv", Delimiter::Comma, TableFormat::EdgeList)?;
/// if !report.is_valid() {
///     println!("missing columns: {:?}", report.missing);
/// }
/// # Ok::<(), edgelist_sniff::SniffError>(())
/// ```
pub fn check_format(
    path: impl AsRef<Path>,
    delimiter: Delimiter,
    format: TableFormat,
) -> Result<FormatReport> {
    let info = check_header(path, delimiter)?;

    let missing = format
        .required_columns()
        .iter()
        .filter(|column| !info.has_header || !info.first_row.iter().any(|c| c == *column))
        .map(|column| column.to_string())
        .collect();

    Ok(FormatReport {
        format,
        has_header: info.has_header,
        missing,
    })
}
