use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Provider-reported date-time with no offset attached.
///
/// Providers emit wall-clock values only, so no timezone is inferred here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(PrimitiveDateTime);

impl Timestamp {
    pub const fn new(date: Date, time: Time) -> Self {
        Self(PrimitiveDateTime::new(date, time))
    }

    /// Midnight of `date`, used by providers that only report a day.
    pub const fn from_date(date: Date) -> Self {
        Self::new(date, Time::MIDNIGHT)
    }

    pub const fn date(self) -> Date {
        self.0.date()
    }

    pub const fn time(self) -> Time {
        self.0.time()
    }

    pub fn parse(input: &str) -> Result<Self, time::error::Parse> {
        PrimitiveDateTime::parse(input, TIMESTAMP_FORMAT).map(Self)
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(TIMESTAMP_FORMAT)
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
