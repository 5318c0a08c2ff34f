//! # edgelist-sniff
//!
//! Delimiter detection for edge-list files, plus the small toolkit built on
//! top of it.
//!
//! Graph tooling accepts edge lists, node lists and cluster lists written
//! with a comma, a tab or a single space between fields. This crate works
//! out which one a file uses so the caller can configure its own parser.
//!
//! ## Features
//!
//! - `detect_delimiter()` scans a file's lines, skipping blanks and `#`
//!   comments, and returns the first delimiter it finds
//! - `detect_all()` async function for sniffing many files in parallel
//! - `check_header()` / `check_format()` for validating table headers
//! - `convert()` for rewriting a file with another delimiter or header
//!
//! ## Example
//!
//! ```rust,no_run
//! use edgelist_sniff::{check_format, detect_delimiter, TableFormat};
//!
//! fn main() -> Result<(), edgelist_sniff::SniffError> {
//!     let delimiter = detect_delimiter("network.tsv")?;
//!     println!("fields separated by {:?}", delimiter.as_char());
//!
//!     let report = check_format("network.tsv", delimiter, TableFormat::EdgeList)?;
//!     if !report.is_valid() {
//!         println!("missing columns: {:?}", report.missing);
//!     }
//!     Ok(())
//! }
//! ```

mod convert;
mod delimiter;
mod detect;
mod error;
mod format;
mod options;

pub use convert::{convert, ConvertSummary};
pub use delimiter::Delimiter;
pub use detect::{detect_all, detect_delimiter, detect_delimiter_from_reader};
pub use error::{ErrorKind, Result, SniffError};
pub use format::{check_format, check_header, FormatReport, HeaderInfo, TableFormat};
pub use options::{ConvertOptions, HeaderMode};
