use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::ValidationError;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Inclusive calendar date bounds passed through to a provider.
///
/// `from <= to` is not checked; providers reject bad ranges themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Date,
    pub to: Date,
}

impl DateRange {
    pub const fn new(from: Date, to: Date) -> Self {
        Self { from, to }
    }

    /// Parse two `YYYY-MM-DD` bounds.
    pub fn parse(from: &str, to: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(parse_iso_date(from)?, parse_iso_date(to)?))
    }
}

pub fn parse_iso_date(input: &str) -> Result<Date, ValidationError> {
    Date::parse(input.trim(), ISO_DATE).map_err(|_| ValidationError::InvalidDate {
        value: input.to_owned(),
    })
}
