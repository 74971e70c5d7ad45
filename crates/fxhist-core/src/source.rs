use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Canonical provider identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Oanda,
    Dukascopy,
}

impl ProviderId {
    pub const ALL: [Self; 2] = [Self::Oanda, Self::Dukascopy];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Oanda => "oanda",
            Self::Dukascopy => "dukascopy",
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "oanda" => Ok(Self::Oanda),
            "dukascopy" => Ok(Self::Dukascopy),
            other => Err(ValidationError::InvalidSource {
                value: other.to_owned(),
            }),
        }
    }
}
