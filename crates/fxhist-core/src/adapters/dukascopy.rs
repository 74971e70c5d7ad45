//! Dukascopy "freeApplets" export loader.
//!
//! Instruments are addressed by an opaque integer code. The export returns
//! daily candles with `DATE`/`TIME` columns and labels its extremes `MIN`
//! and `MAX`; those labels are inverted relative to the values they carry,
//! so `MIN` is read as the high and `MAX` as the low.

use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::config::LoaderConfig;
use crate::http_client::{HttpClient, NoopHttpClient, ResponseBody};
use crate::loader::{fetch_records, LoadError, LoadFuture, LoadRequest, MarketLoader};
use crate::locator::Locator;
use crate::tabular::{TabularReader, CLOCK_TIME, US_DASHED_DATE};
use crate::{DateRange, FieldKind, Instrument, MarketRecord, ProviderId, TabularError, Timestamp};

/// Symbol → export code. XPD/XPT codes are as published by the export form
/// and have not been cross-checked against live data.
pub const INSTRUMENT_CODES: &[(&str, u32)] = &[
    ("AUDJPY", 60),
    ("AUDUSD", 10),
    ("CADJPY", 767),
    ("CHFJPY", 521),
    ("EURCHF", 511),
    ("EURGBP", 510),
    ("EURJPY", 509),
    ("EURUSD", 1),
    ("GBPCHF", 518),
    ("GBPEUR", 516),
    ("GBPJPY", 517),
    ("GBPUSD", 2),
    ("JPYCHF", 515),
    ("NZDUSD", 11),
    ("XPDUSD", 336),
    ("XPTUSD", 335),
    ("USDCAD", 9),
    ("USDCHF", 3),
    ("USDJPY", 4),
    ("XAGUSD", 334),
    ("XAUUSD", 333),
];

lazy_static! {
    static ref CODE_TABLE: HashMap<&'static str, u32> = INSTRUMENT_CODES.iter().copied().collect();
}

/// Row ceiling requested from the export.
pub const ROW_LIMIT: u32 = 2_000;

const FROM_DATE: &[BorrowedFormatItem<'static>] = format_description!("[month].[day].[year]");

const COL_DATE: &str = "DATE";
const COL_TIME: &str = "TIME";
const COL_OPEN: &str = "OPEN";
const COL_HIGH: &str = "MIN";
const COL_LOW: &str = "MAX";
const COL_CLOSE: &str = "CLOSE";
const COL_VOLUME: &str = "VOLUME";

const FIELDS: &[FieldKind] = &[
    FieldKind::Open,
    FieldKind::High,
    FieldKind::Low,
    FieldKind::Close,
    FieldKind::Volume,
];

/// Export code for `instrument`, if the export knows it.
pub fn instrument_code(instrument: &Instrument) -> Option<u32> {
    CODE_TABLE.get(instrument.concatenated().as_str()).copied()
}

#[derive(Clone)]
pub struct DukascopyLoader {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl Default for DukascopyLoader {
    fn default() -> Self {
        Self::with_http_client(Arc::new(NoopHttpClient), &LoaderConfig::default())
    }
}

impl DukascopyLoader {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: &LoaderConfig) -> Self {
        Self {
            http_client,
            base_url: config.dukascopy_base_url.clone(),
            timeout_ms: config.timeout_ms,
        }
    }
}

impl MarketLoader for DukascopyLoader {
    fn id(&self) -> ProviderId {
        ProviderId::Dukascopy
    }

    fn fields(&self) -> &'static [FieldKind] {
        FIELDS
    }

    fn build_locator(
        &self,
        instrument: &Instrument,
        range: DateRange,
    ) -> Result<Locator, LoadError> {
        let code = instrument_code(instrument).ok_or_else(|| LoadError::UnresolvedInstrument {
            provider: self.id(),
            instrument: instrument.clone(),
        })?;

        // The export has no end-date parameter; ROW_LIMIT bounds the result.
        Ok(Locator::new(self.base_url.as_str())
            .param("Stock", code.to_string())
            .param("fromD", format_from_date(range.from))
            .param("np", ROW_LIMIT.to_string())
            .param("interval", "1D")
            .param("DF", "m-d-Y")
            .param("endSym", "win")
            .param("split", "coma"))
    }

    fn parse_response(
        &self,
        instrument: &Instrument,
        body: ResponseBody,
    ) -> Result<Vec<MarketRecord>, LoadError> {
        let as_parse_error = LoadError::parse(self.id());
        parse_table(instrument, body).map_err(as_parse_error)
    }

    fn load<'a>(&'a self, request: LoadRequest) -> LoadFuture<'a> {
        Box::pin(fetch_records(
            self,
            self.http_client.as_ref(),
            self.timeout_ms,
            request,
        ))
    }
}

fn format_from_date(date: Date) -> String {
    date.format(FROM_DATE).unwrap_or_else(|_| date.to_string())
}

fn parse_table(
    instrument: &Instrument,
    body: ResponseBody,
) -> Result<Vec<MarketRecord>, TabularError> {
    let mut table = TabularReader::open(body, true)?;
    if table.has_header_row() {
        table.require_columns(&[
            COL_DATE, COL_TIME, COL_OPEN, COL_HIGH, COL_LOW, COL_CLOSE, COL_VOLUME,
        ])?;
    }

    let mut records = Vec::new();
    while table.next()? {
        let date = table.get_date(COL_DATE, US_DASHED_DATE)?;
        let time = table.get_time(COL_TIME, CLOCK_TIME)?;

        records.push(MarketRecord::new(
            Timestamp::new(date, time),
            instrument.clone(),
            [
                (FieldKind::Open, table.get_f64(COL_OPEN)?),
                (FieldKind::High, table.get_f64(COL_HIGH)?),
                (FieldKind::Low, table.get_f64(COL_LOW)?),
                (FieldKind::Close, table.get_f64(COL_CLOSE)?),
                (FieldKind::Volume, table.get_f64(COL_VOLUME)?),
            ],
        ));
    }

    Ok(records)
}
