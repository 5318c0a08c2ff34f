//! Delimiter detection functions.

use crate::{Delimiter, Result, SniffError};
use futures::future::join_all;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Detect the delimiter used by a delimited text file.
///
/// The file is read line by line, in order, until a line settles the
/// question. Blank lines and comment lines (first character `#`) are
/// skipped. Any other line is checked for a comma, then a tab, then a
/// space; the first match wins and no further lines are read. A line with
/// none of the three is ignored.
///
/// # Errors
///
/// - [`SniffError::Open`] if the file cannot be opened
/// - [`SniffError::Read`] if a line cannot be read (including invalid UTF-8)
/// - [`SniffError::DelimiterNotDetected`] if the whole file was scanned
///   without a decision, e.g. an empty file or one holding only comments
///
/// # Example
///
/// ```rust,no_run
/// use edgelist_sniff::{detect_delimiter, Delimiter};
///
/// let delimiter = detect_delimiter("network.tsv")?;
/// if delimiter == Delimiter::Tab {
///     println!("tab separated");
/// }
/// # Ok::<(), edgelist_sniff::SniffError>(())
/// ```
pub fn detect_delimiter(path: impl AsRef<Path>) -> Result<Delimiter> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SniffError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    detect_delimiter_from_reader(BufReader::new(file), path)
}

/// Detect the delimiter from an already open reader.
///
/// Same scan as [`detect_delimiter`]. `source` only names the input in
/// errors and log output.
///
/// # Example
///
/// ```rust
/// use edgelist_sniff::{detect_delimiter_from_reader, Delimiter};
/// use std::io::Cursor;
/// use std::path::Path;
///
/// let input = Cursor::new("# header\n\n1\t2\t3\n");
/// let delimiter = detect_delimiter_from_reader(input, Path::new("<memory>")).unwrap();
/// assert_eq!(delimiter, Delimiter::Tab);
/// ```
pub fn detect_delimiter_from_reader<R: BufRead>(reader: R, source: &Path) -> Result<Delimiter> {
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source_err| SniffError::Read {
            path: source.to_path_buf(),
            source: source_err,
        })?;

        if is_skipped(&line) {
            trace!(path = %source.display(), line = index + 1, "skipping blank or comment line");
            continue;
        }

        if let Some(delimiter) = Delimiter::find_in(&line) {
            debug!(
                path = %source.display(),
                line = index + 1,
                %delimiter,
                "detected delimiter"
            );
            return Ok(delimiter);
        }
    }

    debug!(path = %source.display(), "no delimiter found before end of input");
    Err(SniffError::DelimiterNotDetected {
        path: source.to_path_buf(),
    })
}

/// Lines that never take part in detection.
pub(crate) fn is_skipped(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}

/// Detect the delimiters of many files concurrently.
///
/// Each file is sniffed on tokio's blocking pool with
/// [`detect_delimiter`], and the scans are joined with
/// `futures::future::join_all`, so the total time is roughly that of the
/// slowest file. A failure for one path never affects the others.
/// Repeated paths collapse to a single entry.
///
/// Must be called from within a tokio runtime.
///
/// # Example
///
/// ```rust,no_run
/// use edgelist_sniff::detect_all;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let results = detect_all(["edges.csv", "nodes.tsv"]).await;
///     for (path, result) in &results {
///         match result {
///             Ok(delimiter) => println!("{}: {}", path.display(), delimiter),
///             Err(e) => println!("{}: {}", path.display(), e),
///         }
///     }
/// }
/// ```
pub async fn detect_all<I, P>(paths: I) -> HashMap<PathBuf, Result<Delimiter>>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let futures: Vec<_> = paths
        .into_iter()
        .map(Into::into)
        .map(|path: PathBuf| async move {
            let task_path = path.clone();
            let result = tokio::task::spawn_blocking(move || detect_delimiter(&task_path))
                .await
                .unwrap_or_else(|join_err| {
                    Err(SniffError::Read {
                        path: path.clone(),
                        source: io::Error::other(join_err.to_string()),
                    })
                });
            (path, result)
        })
        .collect();

    join_all(futures).await.into_iter().collect()
}
