//! CSV output writer
//!
//! Writes one entry per row in a single column, without a header. Fields are
//! quoted only when needed and rows end with CRLF.

use crate::state::EntrySet;
use crate::DiscoverError;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;
use std::path::Path;

/// Writes entries to a CSV file, replacing any existing content
///
/// # Arguments
///
/// * `path` - Output path; created if missing, truncated otherwise
/// * `entries` - Entries to write, one per row, in set order
///
/// # Returns
///
/// * `Ok(())` - All rows written and flushed
/// * `Err(DiscoverError)` - The file could not be created or written
pub fn write_entries(path: &Path, entries: &EntrySet) -> Result<(), DiscoverError> {
    let to_error = |source: csv::Error| DiscoverError::Output {
        path: path.display().to_string(),
        source,
    };

    let writer = builder().from_path(path).map_err(to_error)?;
    write_all(writer, entries).map_err(to_error)?;

    tracing::debug!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}

/// Writes entries as CSV rows to any writer
pub fn write_entries_to<W: Write>(sink: W, entries: &EntrySet) -> Result<(), csv::Error> {
    write_all(builder().from_writer(sink), entries)
}

fn builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF);
    builder
}

fn write_all<W: Write>(mut writer: csv::Writer<W>, entries: &EntrySet) -> Result<(), csv::Error> {
    for entry in entries.iter() {
        writer.write_record([entry])?;
    }
    writer.flush()?;
    Ok(())
}
