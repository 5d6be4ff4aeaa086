//! tracesum - total runtime summarizer for workflow execution traces
//!
//! Reads the tab-delimited trace table a workflow engine writes (one row per
//! executed task), parses the human-readable `duration` column ("42.9s",
//! "500ms", "1h 21m 27s"), and accumulates the total elapsed time across the
//! run.

pub mod cli;
pub mod duration;
pub mod report;
pub mod summary;
