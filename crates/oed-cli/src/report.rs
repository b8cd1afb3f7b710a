//! Line-oriented failure reports: `<source>:<row>:<column>: <error>: <message>`.

use oed_model::RowError;
use oed_validate::{FileReport, HeaderResult};

/// Column printed for a missing required column.
pub const MISSING_COLUMN_POS: i64 = -1;

pub fn report_line(source: &str, column_pos: Option<usize>, exception: &RowError) -> String {
    let column = column_pos.map_or(MISSING_COLUMN_POS, |pos| pos as i64);
    format!(
        "{source}:{}:{column}: {}: {}",
        exception.row,
        exception.error.name(),
        exception.error.message
    )
}

/// One line per exception of every failing header, in result order.
pub fn header_report_lines<'a, I>(source: &str, results: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a HeaderResult>,
{
    results
        .into_iter()
        .filter(|r| !r.pass)
        .flat_map(|r| {
            r.exceptions
                .iter()
                .map(move |e| report_line(source, r.column_pos, e))
        })
        .collect()
}

/// One line per exception of every failing column. In-memory rows have an
/// empty source.
pub fn file_report_lines(report: &FileReport) -> Vec<String> {
    let source = report
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    report
        .failures()
        .flat_map(|r| {
            r.exceptions
                .iter()
                .map(|e| report_line(&source, r.column_pos, e))
        })
        .collect()
}
