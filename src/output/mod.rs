//! Output module for discovery results
//!
//! This module handles:
//! - Writing the valid and failed entry sets to CSV files
//! - Printing both result lists to stdout
//! - Tallying run statistics

mod csv_output;
mod report;
pub mod stats;

pub use csv_output::{write_entries, write_entries_to};
pub use report::{format_error_line, format_results, print_results};
pub use stats::{format_statistics, DiscoveryStatistics};
