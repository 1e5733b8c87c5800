//! CSV projection for list exports
//!
//! Exports are built in two steps: a caller-supplied column projection maps
//! each record to an ordered list of cells, then [`CsvDoc::to_csv`] renders
//! the text payload. Every field is wrapped in double quotes with interior
//! quotes doubled (minimal RFC-4180), rows joined with `\n`. Generation is
//! synchronous and infallible; writing the file is the caller's problem.

use chrono::NaiveDate;

/// One export column: a header plus a cell projection.
///
/// Projections return owned strings and are expected to default missing or
/// optional data to an empty string or zero rather than fail.
pub struct Column<R> {
    pub header: &'static str,
    pub value: fn(&R) -> String,
}

/// A projected export document: header row plus one row per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDoc {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl CsvDoc {
    pub fn project<R>(rows: &[&R], columns: &[Column<R>]) -> Self {
        Self {
            headers: columns.iter().map(|c| c.header).collect(),
            rows: rows
                .iter()
                .map(|r| columns.iter().map(|c| (c.value)(r)).collect())
                .collect(),
        }
    }

    pub fn headers(&self) -> &[&'static str] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render the payload: quoted header row, then quoted record rows.
    pub fn to_csv(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(
            self.headers
                .iter()
                .map(|h| quote(h))
                .collect::<Vec<_>>()
                .join(","),
        );
        for row in &self.rows {
            lines.push(row.iter().map(|v| quote(v)).collect::<Vec<_>>().join(","));
        }
        lines.join("\n")
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// `{prefix}_{YYYY-MM-DD}.csv`, stamped with the local date at export time.
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}
