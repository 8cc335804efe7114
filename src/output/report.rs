//! Plain-text score report
//!
//! One section per game in input order:
//!
//! ```text
//! Game 1
//! CAT 27 3 0 0 3
//! Total Game Points = 3
//! Games Totals Points = 3
//! ```
//!
//! Match lines are `word rank score x y direction`.

use crate::scoring::{BoardResult, ScoreSummary};
use std::fmt::{self, Write as _};
use std::io;
use std::time::Duration;

/// Write one board's section to `out`
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn format_board<W: fmt::Write + ?Sized>(out: &mut W, board: &BoardResult) -> fmt::Result {
    writeln!(out, "Game {}", board.game)?;
    for m in &board.matches {
        writeln!(
            out,
            "{} {} {} {} {} {}",
            m.word,
            m.rank,
            m.score,
            m.x,
            m.y,
            m.direction.id()
        )?;
    }
    writeln!(out, "Total Game Points = {}", board.total)
}

/// Render the full report
///
/// # Errors
///
/// Returns `fmt::Error` if formatting fails.
pub fn format_report(summary: &ScoreSummary) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for board in &summary.boards {
        format_board(&mut out, board)?;
    }
    writeln!(out, "Games Totals Points = {}", summary.total)?;
    Ok(out)
}

/// Timing footer written after a benchmark
#[must_use]
pub fn format_average_time(average: Duration) -> String {
    format!("Total Average Time = {:.6} sec\n", average.as_secs_f64())
}

/// Write the report to any sink
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_report<W: io::Write>(writer: &mut W, summary: &ScoreSummary) -> io::Result<()> {
    let report = format_report(summary).map_err(io::Error::other)?;
    writer.write_all(report.as_bytes())?;
    writer.flush()
}
