//! Terminal and report output
//!
//! Plain-text reports for files plus colored console summaries.

pub mod display;
pub mod formatters;
pub mod report;

pub use display::{print_benchmark_result, print_score_result};
pub use report::{format_average_time, format_report, write_report};
