//! Row cursor over delimited response tables.
//!
//! Wraps a [`csv::Reader`] and exposes values by column name, the shape every
//! provider parser needs. Header names are matched case-insensitively after
//! trimming. Dropping the cursor drops the underlying stream.

use std::collections::HashMap;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Time};

use crate::TabularError;

/// Named textual layout for date or time columns.
#[derive(Debug, Clone, Copy)]
pub struct ColumnFormat {
    label: &'static str,
    items: &'static [BorrowedFormatItem<'static>],
}

impl ColumnFormat {
    pub const fn new(label: &'static str, items: &'static [BorrowedFormatItem<'static>]) -> Self {
        Self { label, items }
    }

    pub const fn label(self) -> &'static str {
        self.label
    }

    pub const fn items(self) -> &'static [BorrowedFormatItem<'static>] {
        self.items
    }
}

/// `01-02-2020` for January 2nd.
pub const US_DASHED_DATE: ColumnFormat =
    ColumnFormat::new("MM-DD-YYYY", format_description!("[month]-[day]-[year]"));

/// `13:05:00`.
pub const CLOCK_TIME: ColumnFormat =
    ColumnFormat::new("HH:MM:SS", format_description!("[hour]:[minute]:[second]"));

pub struct TabularReader<R: Read> {
    inner: csv::Reader<R>,
    columns: HashMap<String, usize>,
    record: StringRecord,
    row: u64,
    positioned: bool,
}

impl<R: Read> TabularReader<R> {
    /// Open a comma-separated table. Without a header, columns are named by
    /// their zero-based position (`"0"`, `"1"`, ...).
    pub fn open(reader: R, has_header: bool) -> Result<Self, TabularError> {
        let mut inner = ReaderBuilder::new()
            .has_headers(has_header)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let columns = if has_header {
            inner
                .headers()?
                .iter()
                .enumerate()
                .map(|(index, name)| (normalize_column(name), index))
                .collect()
        } else {
            HashMap::new()
        };

        Ok(Self {
            inner,
            columns,
            record: StringRecord::new(),
            row: 0,
            positioned: false,
        })
    }

    /// Advance to the next data row. Returns `false` at end of stream.
    pub fn next(&mut self) -> Result<bool, TabularError> {
        let has_row = self.inner.read_record(&mut self.record)?;
        self.positioned = has_row;
        if has_row {
            self.row += 1;
        }
        Ok(has_row)
    }

    /// 1-based index of the current data row.
    pub const fn row(&self) -> u64 {
        self.row
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_index(column).is_some()
    }

    /// `false` for a zero-byte body or a headerless table.
    pub fn has_header_row(&self) -> bool {
        !self.columns.is_empty()
    }

    /// Fail fast when any of `columns` is absent from the header.
    pub fn require_columns(&self, columns: &[&str]) -> Result<(), TabularError> {
        match columns.iter().find(|column| !self.has_column(column)) {
            Some(missing) => Err(TabularError::MissingColumn {
                column: (*missing).to_owned(),
            }),
            None => Ok(()),
        }
    }

    pub fn get_str(&self, column: &str) -> Result<&str, TabularError> {
        if !self.positioned {
            return Err(TabularError::NoCurrentRow);
        }
        let index = self
            .column_index(column)
            .ok_or_else(|| TabularError::MissingColumn {
                column: column.to_owned(),
            })?;
        // Short rows read as empty cells and then fail typed conversion.
        Ok(self.record.get(index).unwrap_or(""))
    }

    pub fn get_f64(&self, column: &str) -> Result<f64, TabularError> {
        let raw = self.get_str(column)?;
        raw.parse::<f64>().map_err(|_| TabularError::InvalidNumber {
            row: self.row,
            column: column.to_owned(),
            value: raw.to_owned(),
        })
    }

    pub fn get_date(&self, column: &str, format: ColumnFormat) -> Result<Date, TabularError> {
        let raw = self.get_str(column)?;
        Date::parse(raw, format.items()).map_err(|_| self.invalid_date(column, raw, format))
    }

    pub fn get_time(&self, column: &str, format: ColumnFormat) -> Result<Time, TabularError> {
        let raw = self.get_str(column)?;
        Time::parse(raw, format.items()).map_err(|_| self.invalid_date(column, raw, format))
    }

    fn invalid_date(&self, column: &str, raw: &str, format: ColumnFormat) -> TabularError {
        TabularError::InvalidDate {
            row: self.row,
            column: column.to_owned(),
            value: raw.to_owned(),
            format: format.label(),
        }
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        if self.columns.is_empty() {
            return column.parse().ok();
        }
        self.columns.get(&normalize_column(column)).copied()
    }
}

fn normalize_column(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
