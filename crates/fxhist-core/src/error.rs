use thiserror::Error;

/// Validation errors for caller-supplied values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("instrument cannot be empty")]
    EmptyInstrument,
    #[error("instrument '{value}' must be BASE/QUOTE or a six-letter pair")]
    InvalidInstrumentShape { value: String },
    #[error("currency '{value}' must be a 3-letter ASCII code")]
    InvalidCurrency { value: String },

    #[error("invalid source '{value}', expected one of oanda, dukascopy")]
    InvalidSource { value: String },
    #[error(
        "invalid field '{value}', expected one of open, high, low, close, adjusted_close, volume"
    )]
    InvalidField { value: String },

    #[error("date must be YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
}

/// Errors raised while reading a delimited response table.
///
/// Row numbers count data rows from 1 and exclude the header.
#[derive(Debug, Error)]
pub enum TabularError {
    #[error("column '{column}' is missing from the header")]
    MissingColumn { column: String },

    #[error("row {row}: column '{column}' is not a number: '{value}'")]
    InvalidNumber {
        row: u64,
        column: String,
        value: String,
    },

    #[error("row {row}: column '{column}' does not match '{format}': '{value}'")]
    InvalidDate {
        row: u64,
        column: String,
        value: String,
        format: &'static str,
    },

    #[error("no current row; call next() first")]
    NoCurrentRow,

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
