//! # Domain Models
//!
//! Provider-neutral types shared by every loader.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Instrument`] | Currency pair or metal cross (`EUR/USD`, `XAU/USD`) |
//! | [`FieldKind`] | Closed set of normalized price/volume fields |
//! | [`Timestamp`] | Offset-free provider date-time |
//! | [`DateRange`] | Inclusive calendar bounds for a load |
//! | [`MarketRecord`] | Timestamp + instrument + sparse field values |

mod field;
mod instrument;
mod range;
mod record;
mod timestamp;

pub use field::FieldKind;
pub use instrument::Instrument;
pub use range::{parse_iso_date, DateRange};
pub use record::MarketRecord;
pub use timestamp::Timestamp;
