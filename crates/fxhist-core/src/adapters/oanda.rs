//! Oanda fxhistory table loader.
//!
//! The live endpoint wraps its CSV payload in an HTML page. Extracting the
//! table from that page happens before [`OandaLoader::parse_response`]; this
//! loader expects the bare table.

use std::sync::Arc;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::config::LoaderConfig;
use crate::http_client::{HttpClient, NoopHttpClient, ResponseBody};
use crate::loader::{fetch_records, LoadError, LoadFuture, LoadRequest, MarketLoader};
use crate::locator::Locator;
use crate::tabular::{TabularReader, US_DASHED_DATE};
use crate::{DateRange, FieldKind, Instrument, MarketRecord, ProviderId, TabularError, Timestamp};

const QUERY_DATE: &[BorrowedFormatItem<'static>] = format_description!("[month]-[day]-[year]");

const COLUMNS: [(&str, FieldKind); 6] = [
    ("open", FieldKind::Open),
    ("high", FieldKind::High),
    ("low", FieldKind::Low),
    ("close", FieldKind::Close),
    ("adj close", FieldKind::AdjustedClose),
    ("volume", FieldKind::Volume),
];
const COL_DATE: &str = "date";

#[derive(Clone)]
pub struct OandaLoader {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl Default for OandaLoader {
    fn default() -> Self {
        Self::with_http_client(Arc::new(NoopHttpClient), &LoaderConfig::default())
    }
}

impl OandaLoader {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: &LoaderConfig) -> Self {
        Self {
            http_client,
            base_url: config.oanda_base_url.clone(),
            timeout_ms: config.timeout_ms,
        }
    }
}

impl MarketLoader for OandaLoader {
    fn id(&self) -> ProviderId {
        ProviderId::Oanda
    }

    fn fields(&self) -> &'static [FieldKind] {
        &FieldKind::ALL
    }

    fn build_locator(
        &self,
        instrument: &Instrument,
        range: DateRange,
    ) -> Result<Locator, LoadError> {
        Ok(Locator::new(self.base_url.as_str())
            .param("exch", instrument.base())
            .param("expr2", instrument.quote())
            .param("date1", format_query_date(range.from))
            .param("date2", format_query_date(range.to))
            .param("date_fmt", "us")
            .param("lang", "en")
            .param("margin_fixed", "0")
            .param("SUBMIT", "Get Table")
            .param("format", "CSV")
            .param("redirected", "1"))
    }

    fn parse_response(
        &self,
        instrument: &Instrument,
        body: ResponseBody,
    ) -> Result<Vec<MarketRecord>, LoadError> {
        parse_table(instrument, body).map_err(LoadError::parse(self.id()))
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

fn format_query_date(date: Date) -> String {
    date.format(QUERY_DATE).unwrap_or_else(|_| date.to_string())
}

fn parse_table(
    instrument: &Instrument,
    body: ResponseBody,
) -> Result<Vec<MarketRecord>, TabularError> {
    let mut table = TabularReader::open(body, true)?;
    if table.has_header_row() {
        table.require_columns(&[COL_DATE])?;
        table.require_columns(&COLUMNS.map(|(column, _)| column))?;
    }

    let mut records = Vec::new();
    while table.next()? {
        let date = table.get_date(COL_DATE, US_DASHED_DATE)?;
        let values = COLUMNS
            .iter()
            .map(|(column, field)| table.get_f64(column).map(|value| (*field, value)))
            .collect::<Result<Vec<_>, _>>()?;

        records.push(MarketRecord::new(
            Timestamp::from_date(date),
            instrument.clone(),
            values,
        ));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::test_support::{block_on, RecordingHttpClient};
    use crate::http_client::HttpError;
    use crate::locator::query_pairs;
    use time::macros::date;

    const SAMPLE: &str = "date,open,high,low,close,adj close,volume\n\
                          01-02-2020,1.10,1.12,1.09,1.11,1.11,1000\n";

    fn eurusd() -> Instrument {
        Instrument::parse("eur/usd").expect("valid instrument")
    }

    fn request() -> LoadRequest {
        LoadRequest::new(
            eurusd(),
            FieldKind::ALL.to_vec(),
            DateRange::new(date!(2020 - 01 - 02), date!(2020 - 01 - 31)),
        )
    }

    #[test]
    fn locator_encodes_pair_dates_and_constants() {
        let locator = OandaLoader::default()
            .build_locator(&eurusd(), request().range)
            .expect("oanda encodes any pair");
        let pairs = query_pairs(&locator.to_url());
        let expected: Vec<(String, String)> = [
            ("exch", "EUR"),
            ("expr2", "USD"),
            ("date1", "01-02-2020"),
            ("date2", "01-31-2020"),
            ("date_fmt", "us"),
            ("lang", "en"),
            ("margin_fixed", "0"),
            ("SUBMIT", "Get Table"),
            ("format", "CSV"),
            ("redirected", "1"),
        ]
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn sample_row_populates_all_six_fields() {
        let client = Arc::new(RecordingHttpClient::ok(SAMPLE));
        let loader = OandaLoader::with_http_client(client.clone(), &LoaderConfig::default());

        let records = block_on(loader.load(request())).expect("sample should load");
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.ts(), Timestamp::from_date(date!(2020 - 01 - 02)));
        assert_eq!(record.instrument(), &eurusd());
        assert_eq!(record.get(FieldKind::Open), Some(1.10));
        assert_eq!(record.get(FieldKind::High), Some(1.12));
        assert_eq!(record.get(FieldKind::Low), Some(1.09));
        assert_eq!(record.get(FieldKind::Close), Some(1.11));
        assert_eq!(record.get(FieldKind::AdjustedClose), Some(1.11));
        assert_eq!(record.get(FieldKind::Volume), Some(1000.0));

        let requests = client.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].url.contains("exch=EUR"));
        assert_eq!(requests[0].timeout_ms, LoaderConfig::default().timeout_ms);
    }

    #[test]
    fn missing_adjusted_close_column_fails() {
        let body = "date,open,high,low,close,volume\n01-02-2020,1,1,1,1,1\n";
        let error = OandaLoader::default()
            .parse_response(&eurusd(), ResponseBody::from_bytes(body))
            .expect_err("adj close is required");
        assert!(matches!(
            error,
            LoadError::Parse {
                source: TabularError::MissingColumn { ref column },
                ..
            } if column == "adj close"
        ));
    }

    #[test]
    fn empty_table_yields_no_records() {
        let records = OandaLoader::default()
            .parse_response(&eurusd(), ResponseBody::from_bytes(""))
            .expect("no rows is not an error");
        assert!(records.is_empty());
    }

    #[test]
    fn non_success_status_is_transport_error() {
        let client = Arc::new(RecordingHttpClient::with_status(503, "busy"));
        let loader = OandaLoader::with_http_client(client, &LoaderConfig::default());

        let error = block_on(loader.load(request())).expect_err("503 must fail");
        assert!(matches!(
            error,
            LoadError::Transport { ref source, .. } if source.status() == Some(503)
        ));
    }

    #[test]
    fn transport_fault_is_propagated() {
        let client = Arc::new(RecordingHttpClient::failing(HttpError::new("connection reset")));
        let loader = OandaLoader::with_http_client(client, &LoaderConfig::default());

        let error = block_on(loader.load(request())).expect_err("fault must fail");
        assert_eq!(error.code(), "load.transport");
        assert!(error.to_string().contains("connection reset"));
    }

    #[test]
    fn header_only_body_with_wrong_columns_is_a_parse_error() {
        let error = OandaLoader::default()
            .parse_response(&eurusd(), ResponseBody::from_bytes("date,rate\n"))
            .expect_err("rate-only header lacks the price columns");
        assert!(matches!(
            error,
            LoadError::Parse {
                source: TabularError::MissingColumn { ref column },
                ..
            } if column == "open"
        ));
    }
}
