use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const CURRENCY_LEN: usize = 3;

/// Currency pair or commodity cross, e.g. `EUR/USD` or `XAU/USD`.
///
/// Both legs are stored uppercase; the identity does not depend on how any
/// provider encodes the pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Instrument {
    base: String,
    quote: String,
}

impl Instrument {
    /// Parse `BASE/QUOTE` or the concatenated six-letter form.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyInstrument);
        }

        let (base, quote) = match trimmed.split_once('/') {
            Some((base, quote)) => (base.trim(), quote.trim()),
            None if trimmed.len() == CURRENCY_LEN * 2 && trimmed.is_ascii() => {
                trimmed.split_at(CURRENCY_LEN)
            }
            None => {
                return Err(ValidationError::InvalidInstrumentShape {
                    value: trimmed.to_owned(),
                })
            }
        };

        Self::new(base, quote)
    }

    pub fn new(base: &str, quote: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            base: normalize_currency(base)?,
            quote: normalize_currency(quote)?,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// `BASEQUOTE`, the key used by providers that drop the separator.
    pub fn concatenated(&self) -> String {
        format!("{}{}", self.base, self.quote)
    }
}

fn normalize_currency(value: &str) -> Result<String, ValidationError> {
    let normalized = value.trim().to_ascii_uppercase();
    let valid =
        normalized.len() == CURRENCY_LEN && normalized.chars().all(|ch| ch.is_ascii_uppercase());
    if !valid {
        return Err(ValidationError::InvalidCurrency {
            value: value.to_owned(),
        });
    }
    Ok(normalized)
}

impl Display for Instrument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for Instrument {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Instrument {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Instrument> for String {
    fn from(value: Instrument) -> Self {
        value.to_string()
    }
}
