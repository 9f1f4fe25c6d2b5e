//! State module for tracking discovery results
//!
//! # Components
//!
//! - `ProbeOutcome`: How a single domain was classified (sitemap found, missing, dropped, error)
//! - `EntrySet`: Deduplicating, insertion-ordered set used for the valid and failed outputs

mod entry_set;
mod probe_outcome;

// Re-export main types
pub use entry_set::EntrySet;
pub use probe_outcome::ProbeOutcome;
