//! Market loader contract and request/error types.
//!
//! A loader turns a [`LoadRequest`] into one provider request and parses
//! the whole response into [`MarketRecord`]s:
//!
//! ```text
//! LoadRequest ──▶ build_locator ──▶ HttpClient::execute ──▶ parse_response ──▶ Vec<MarketRecord>
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::error::Error;
//!
//! use fxhist_core::{DateRange, DukascopyLoader, FieldKind, Instrument, LoadRequest, MarketLoader};
//!
//! async fn daily_closes(loader: &DukascopyLoader) -> Result<(), Box<dyn Error>> {
//!     let request = LoadRequest::new(
//!         Instrument::parse("EUR/USD")?,
//!         vec![FieldKind::Close],
//!         DateRange::parse("2020-01-01", "2020-03-31")?,
//!     );
//!     for record in loader.load(request).await? {
//!         println!("{} {:?}", record.ts(), record.get(FieldKind::Close));
//!     }
//!     Ok(())
//! }
//! ```

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;
use tracing::{debug, warn};

use crate::http_client::{HttpClient, HttpError, HttpRequest, ResponseBody};
use crate::locator::Locator;
use crate::{DateRange, FieldKind, Instrument, MarketRecord, ProviderId, TabularError};

/// Parameters of a single load.
///
/// `fields` is advisory; providers return their fixed field set regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub instrument: Instrument,
    pub fields: Vec<FieldKind>,
    pub range: DateRange,
}

impl LoadRequest {
    pub fn new(instrument: Instrument, fields: Vec<FieldKind>, range: DateRange) -> Self {
        Self {
            instrument,
            fields,
            range,
        }
    }
}

/// Failure of a load. Nothing here is retried by the loaders.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{provider} has no instrument code for {instrument}")]
    UnresolvedInstrument {
        provider: ProviderId,
        instrument: Instrument,
    },

    #[error("{provider} transport error: {source}")]
    Transport {
        provider: ProviderId,
        source: HttpError,
    },

    #[error("{provider} response could not be parsed: {source}")]
    Parse {
        provider: ProviderId,
        source: TabularError,
    },
}

impl LoadError {
    pub fn parse(provider: ProviderId) -> impl FnOnce(TabularError) -> Self {
        move |source| Self::Parse { provider, source }
    }

    pub const fn provider(&self) -> ProviderId {
        match self {
            Self::UnresolvedInstrument { provider, .. }
            | Self::Transport { provider, .. }
            | Self::Parse { provider, .. } => *provider,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnresolvedInstrument { .. } => "load.unresolved_instrument",
            Self::Transport { .. } => "load.transport",
            Self::Parse { .. } => "load.parse",
        }
    }
}

/// Boxed future returned by [`MarketLoader::load`].
pub type LoadFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<MarketRecord>, LoadError>> + Send + 'a>>;

/// Provider loader contract.
///
/// Implementations hold only immutable configuration and a shared transport,
/// so one instance may serve concurrent loads.
pub trait MarketLoader: Send + Sync {
    fn id(&self) -> ProviderId;

    /// Fields every record from this provider carries.
    fn fields(&self) -> &'static [FieldKind];

    /// Encode `instrument` and `range` into the provider's request locator.
    ///
    /// # Errors
    ///
    /// [`LoadError::UnresolvedInstrument`] when the provider has no encoding
    /// for `instrument`.
    fn build_locator(
        &self,
        instrument: &Instrument,
        range: DateRange,
    ) -> Result<Locator, LoadError>;

    /// Parse a complete response table. Any bad row fails the whole call.
    fn parse_response(
        &self,
        instrument: &Instrument,
        body: ResponseBody,
    ) -> Result<Vec<MarketRecord>, LoadError>;

    /// Build, fetch and parse in one request/response cycle.
    fn load<'a>(&'a self, request: LoadRequest) -> LoadFuture<'a>;
}

/// Shared body of every `load` implementation.
pub(crate) async fn fetch_records<L>(
    loader: &L,
    http_client: &dyn HttpClient,
    timeout_ms: u64,
    request: LoadRequest,
) -> Result<Vec<MarketRecord>, LoadError>
where
    L: MarketLoader + ?Sized,
{
    let provider = loader.id();
    let supplied = loader.fields();
    let unsupplied: Vec<FieldKind> = request
        .fields
        .iter()
        .copied()
        .filter(|field| !supplied.contains(field))
        .collect();
    if !unsupplied.is_empty() {
        debug!(%provider, ?unsupplied, "requested fields are not supplied by provider");
    }

    let locator = loader.build_locator(&request.instrument, request.range)?;
    let url = locator.to_url();
    debug!(%provider, instrument = %request.instrument, %url, "issuing load request");

    let response = http_client
        .execute(HttpRequest::get(url).with_timeout_ms(timeout_ms))
        .await
        .map_err(|source| {
            warn!(%provider, error = %source, "transport failed");
            LoadError::Transport { provider, source }
        })?;

    if !response.is_success() {
        warn!(%provider, status = response.status, "upstream returned non-success status");
        return Err(LoadError::Transport {
            provider,
            source: HttpError::from_status(response.status),
        });
    }

    let records = loader.parse_response(&request.instrument, response.body)?;
    debug!(%provider, rows = records.len(), "parsed response");
    Ok(records)
}
