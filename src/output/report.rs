//! Console listing of discovery results

use crate::state::EntrySet;

/// Formats the two result sections printed at the end of a run
///
/// Valid entries come first under `Domains with sitemaps:`, then a blank
/// line and the failed entries under `Domains without sitemaps:`.
pub fn format_results(valid: &EntrySet, failed: &EntrySet) -> String {
    let mut out = String::from("Domains with sitemaps:\n");
    for entry in valid.iter() {
        out.push_str(entry);
        out.push('\n');
    }

    out.push_str("\nDomains without sitemaps:\n");
    for entry in failed.iter() {
        out.push_str(entry);
        out.push('\n');
    }

    out
}

/// Formats the line printed when a domain hits a network-level error
pub fn format_error_line(domain: &str, message: &str) -> String {
    format!("Error processing domain {}: {}", domain, message)
}

/// Prints both result sections to stdout
pub fn print_results(valid: &EntrySet, failed: &EntrySet) {
    print!("{}", format_results(valid, failed));
}
