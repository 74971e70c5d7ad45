use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{FieldKind, Instrument, Timestamp};

/// One normalized observation for an instrument.
///
/// `values` is sparse: a provider that never reports a field leaves it out
/// rather than storing zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRecord {
    ts: Timestamp,
    instrument: Instrument,
    values: BTreeMap<FieldKind, f64>,
}

impl MarketRecord {
    pub fn new(
        ts: Timestamp,
        instrument: Instrument,
        values: impl IntoIterator<Item = (FieldKind, f64)>,
    ) -> Self {
        Self {
            ts,
            instrument,
            values: values.into_iter().collect(),
        }
    }

    pub const fn ts(&self) -> Timestamp {
        self.ts
    }

    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    pub fn get(&self, field: FieldKind) -> Option<f64> {
        self.values.get(&field).copied()
    }

    pub fn contains(&self, field: FieldKind) -> bool {
        self.values.contains_key(&field)
    }

    pub fn values(&self) -> &BTreeMap<FieldKind, f64> {
        &self.values
    }
}
