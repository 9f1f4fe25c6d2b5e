//! Domain list reader
//!
//! Reads the comma-delimited input file and collects the first field of each
//! row as a domain. Rows may have any number of fields; rows with none are
//! skipped. Field values are kept exactly as written.

use crate::state::EntrySet;
use crate::DiscoverError;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

/// Reads the unique domains listed in a CSV file
///
/// # Arguments
///
/// * `path` - Path to the CSV file; only the first column is used
///
/// # Returns
///
/// * `Ok(EntrySet)` - Unique domains in first-seen order
/// * `Err(DiscoverError)` - The file is missing, unreadable, or not valid UTF-8
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use sitemap_discover::input::read_domains;
///
/// let domains = read_domains(Path::new("domain_source.csv")).unwrap();
/// println!("{} domains to probe", domains.len());
/// ```
pub fn read_domains(path: &Path) -> Result<EntrySet, DiscoverError> {
    let to_error = |source: csv::Error| DiscoverError::Input {
        path: path.display().to_string(),
        source,
    };

    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(to_error)?;

    let domains = collect_domains(reader).map_err(to_error)?;
    tracing::debug!("Read {} unique domains from {}", domains.len(), path.display());
    Ok(domains)
}

/// Reads unique domains from any CSV source
pub fn parse_domains<R: Read>(source: R) -> Result<EntrySet, csv::Error> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);
    collect_domains(reader)
}

fn collect_domains<R: Read>(mut reader: csv::Reader<R>) -> Result<EntrySet, csv::Error> {
    let mut domains = EntrySet::new();
    for record in reader.records() {
        let record = record?;
        if let Some(domain) = record.get(0) {
            domains.insert(domain);
        }
    }
    Ok(domains)
}
