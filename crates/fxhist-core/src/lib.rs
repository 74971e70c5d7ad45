//! # fxhist Core
//!
//! Historical FX and precious-metal price loaders with a provider-neutral
//! record format.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider loaders (Oanda, Dukascopy) |
//! | [`config`] | Endpoint and timeout configuration |
//! | [`domain`] | Instrument, field, timestamp and record types |
//! | [`error`] | Validation and table errors |
//! | [`http_client`] | Transport seam and reqwest implementation |
//! | [`loader`] | `MarketLoader` trait, requests and load errors |
//! | [`locator`] | Request URL builder |
//! | [`source`] | Provider identifiers |
//! | [`tabular`] | Named-column cursor over CSV responses |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  LoadRequest    │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ MarketLoader    │────▶│ HttpClient       │
//! │ (Oanda/Dukasc.) │     │ (reqwest/noop)   │
//! └────────┬────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TabularReader   │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MarketRecord    │
//! └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use fxhist_core::LoadError;
//!
//! fn describe(error: &LoadError) -> &'static str {
//!     match error {
//!         LoadError::UnresolvedInstrument { .. } => "provider does not list this pair",
//!         LoadError::Transport { .. } => "request failed",
//!         LoadError::Parse { .. } => "response table was malformed",
//!     }
//! }
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod loader;
pub mod locator;
pub mod source;
pub mod tabular;

pub use adapters::{loader_for, DukascopyLoader, OandaLoader};
pub use config::LoaderConfig;
pub use domain::{parse_iso_date, DateRange, FieldKind, Instrument, MarketRecord, Timestamp};
pub use error::{TabularError, ValidationError};
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
    ResponseBody,
};
pub use loader::{LoadError, LoadFuture, LoadRequest, MarketLoader};
pub use locator::{query_pairs, Locator};
pub use source::ProviderId;
pub use tabular::TabularReader;
