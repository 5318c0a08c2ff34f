//! Delimiter conversion.
//!
//! [`convert`] rewrites a delimited file with another delimiter and,
//! optionally, a different header. The whole input is loaded first and the
//! output is written to a temporary file next to the target, then renamed
//! over it, so converting a file onto itself never leaves a partial file.

use crate::format::{looks_like_header, open_table};
use crate::{detect_delimiter, ConvertOptions, Delimiter, HeaderMode, Result, SniffError};
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// What [`convert`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertSummary {
    /// Delimiter detected in the input.
    pub source_delimiter: Delimiter,

    /// Delimiter used for the output.
    pub target_delimiter: Delimiter,

    /// Rows written, header included.
    pub rows_written: usize,

    /// Whether the output starts with a header row.
    pub header_written: bool,
}

/// Convert `input` into `output` according to `options`.
///
/// # Process
///
/// 1. Detect the input's delimiter with [`detect_delimiter`]
/// 2. Load every record, dropping `#` comments and blank lines
/// 3. Apply the [`HeaderMode`]
/// 4. Create the output's parent directories and write the rows
///
/// `input` and `output` may be the same path.
///
/// # Errors
///
/// Any detection error from step 1, [`SniffError::DuplicateHeader`] or
/// [`SniffError::HeaderMismatch`] for a bad replacement header, and I/O or
/// csv errors while reading or writing.
///
/// # Example
///
/// ```rust,no_run
/// use edgelist_sniff::{convert, ConvertOptions, Delimiter};
///
/// let summary = convert(
///     "edges.csv",
///     "out/edges.tsv",
///     &ConvertOptions {
///         delimiter: Some(Delimiter::Tab),
///         ..Default::default()
///     },
/// )?;
/// println!("wrote {} rows", summary.rows_written);
/// # Ok::<(), edgelist_sniff::SniffError>(())
/// ```
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<ConvertSummary> {
    let input = input.as_ref();
    let output = output.as_ref();

    let source_delimiter = detect_delimiter(input)?;
    let target_delimiter = options.delimiter.unwrap_or(source_delimiter);
    if target_delimiter == source_delimiter {
        info!("No need to change delimiter");
    }
    info!(
        input = %input.display(),
        output = %output.display(),
        from = %source_delimiter,
        to = %target_delimiter,
        "converting"
    );

    let mut rows = read_rows(input, source_delimiter)?;
    let has_header = rows.first().is_some_and(looks_like_header);
    let header_written = apply_header(&mut rows, has_header, &options.header)?;

    write_rows(output, target_delimiter, &rows)?;
    info!(rows = rows.len(), "conversion completed");

    Ok(ConvertSummary {
        source_delimiter,
        target_delimiter,
        rows_written: rows.len(),
        header_written,
    })
}

fn read_rows(path: &Path, delimiter: Delimiter) -> Result<Vec<StringRecord>> {
    let mut reader = open_table(path, delimiter)?;
    reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|source| SniffError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

/// Rewrite the header row in place. Returns whether a header remains.
fn apply_header(rows: &mut Vec<StringRecord>, has_header: bool, mode: &HeaderMode) -> Result<bool> {
    match mode {
        HeaderMode::Keep => Ok(has_header),
        HeaderMode::Remove => {
            if has_header {
                rows.remove(0);
            } else {
                debug!("input has no header, nothing to remove");
            }
            Ok(false)
        }
        HeaderMode::Replace(names) => {
            mode.validate(rows.first().map(StringRecord::len))?;
            let header = StringRecord::from(names.clone());
            if has_header {
                rows[0] = header;
            } else {
                rows.insert(0, header);
            }
            Ok(true)
        }
    }
}

/// Write `rows` to a temporary file in the target's directory and rename
/// it over `path` once everything is flushed.
fn write_rows(path: &Path, delimiter: Delimiter, rows: &[StringRecord]) -> Result<()> {
    let write_err = |source: std::io::Error| SniffError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(write_err)?;
            parent
        }
        None => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(parent).map_err(write_err)?;
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter.as_byte())
            .flexible(true)
            .from_writer(staged.as_file_mut());

        for row in rows {
            writer.write_record(row).map_err(|source| SniffError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
        }

        writer.flush().map_err(write_err)?;
    }

    debug!(staged = %staged.path().display(), target = %path.display(), "replacing output");
    staged.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
