use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fxhist_core::{
    loader_for, query_pairs, DateRange, FieldKind, HttpClient, HttpError, HttpRequest,
    HttpResponse, Instrument, LoadRequest, LoaderConfig, MarketLoader, ProviderId,
};
use time::macros::date;

/// Replays a provider-shaped fixture and counts transport calls.
struct FixtureHttpClient {
    body: &'static str,
    calls: AtomicUsize,
}

impl FixtureHttpClient {
    fn new(body: &'static str) -> Self {
        Self {
            body,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HttpClient for FixtureHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let _ = request;
        self.calls.fetch_add(1, Ordering::SeqCst);
        let body = self.body;
        Box::pin(async move { Ok(HttpResponse::ok_text(body)) })
    }
}

struct LoaderCase {
    id: ProviderId,
    fixture: &'static str,
    fields: &'static [FieldKind],
}

const OANDA_FIXTURE: &str = "date,open,high,low,close,adj close,volume\n\
    01-03-2020,1.20,1.22,1.19,1.21,1.21,1500\n\
    01-02-2020,1.10,1.12,1.09,1.11,1.11,1000\n\
    01-06-2020,1.30,1.32,1.29,1.31,1.31,2000\n";

const DUKASCOPY_FIXTURE: &str = "DATE,TIME,OPEN,MIN,MAX,CLOSE,VOLUME\r\n\
    01-03-2020,00:00:00,1.20,1.22,1.19,1.21,150\r\n\
    01-02-2020,00:00:00,1.10,1.12,1.09,1.11,100\r\n\
    01-06-2020,00:00:00,1.30,1.32,1.29,1.31,200\r\n";

fn loader_cases() -> Vec<LoaderCase> {
    vec![
        LoaderCase {
            id: ProviderId::Oanda,
            fixture: OANDA_FIXTURE,
            fields: &FieldKind::ALL,
        },
        LoaderCase {
            id: ProviderId::Dukascopy,
            fixture: DUKASCOPY_FIXTURE,
            fields: &[
                FieldKind::Open,
                FieldKind::High,
                FieldKind::Low,
                FieldKind::Close,
                FieldKind::Volume,
            ],
        },
    ]
}

fn loader(case: &LoaderCase, client: Arc<FixtureHttpClient>) -> Arc<dyn MarketLoader> {
    loader_for(case.id, client, &LoaderConfig::default())
}

fn request() -> LoadRequest {
    LoadRequest::new(
        Instrument::parse("EUR/USD").expect("valid instrument"),
        vec![FieldKind::Close],
        DateRange::new(date!(2020 - 01 - 01), date!(2020 - 01 - 31)),
    )
}

#[tokio::test]
async fn every_loader_issues_exactly_one_request() {
    for case in loader_cases() {
        let client = Arc::new(FixtureHttpClient::new(case.fixture));
        let loader = loader(&case, client.clone());

        loader
            .load(request())
            .await
            .unwrap_or_else(|error| panic!("provider '{}' load failed: {error}", case.id));
        assert_eq!(client.calls(), 1, "provider '{}': request count", case.id);
    }
}

#[tokio::test]
async fn every_loader_preserves_input_row_order() {
    for case in loader_cases() {
        let client = Arc::new(FixtureHttpClient::new(case.fixture));
        let records = loader(&case, client)
            .load(request())
            .await
            .unwrap_or_else(|error| panic!("provider '{}' load failed: {error}", case.id));

        let days: Vec<u8> = records.iter().map(|record| record.ts().date().day()).collect();
        assert_eq!(days, vec![3, 2, 6], "provider '{}': row order", case.id);
    }
}

#[tokio::test]
async fn every_record_carries_exactly_the_provider_field_set() {
    for case in loader_cases() {
        let client = Arc::new(FixtureHttpClient::new(case.fixture));
        let loader = loader(&case, client);
        assert_eq!(loader.fields(), case.fields, "provider '{}': fields()", case.id);

        let records = loader.load(request()).await.expect("fixture should load");
        for record in &records {
            let present: Vec<FieldKind> = record.values().keys().copied().collect();
            assert_eq!(present, case.fields, "provider '{}': record fields", case.id);
            assert_eq!(record.instrument().to_string(), "EUR/USD");
        }
    }
}

#[test]
fn every_locator_targets_its_configured_base_url() {
    let config = LoaderConfig {
        oanda_base_url: String::from("http://oanda.test/fx"),
        dukascopy_base_url: String::from("http://dukascopy.test/exp.php"),
        ..LoaderConfig::default()
    };
    let range = DateRange::new(date!(2020 - 01 - 01), date!(2020 - 01 - 31));
    let instrument = Instrument::parse("USD/JPY").expect("valid instrument");

    for case in loader_cases() {
        let loader = loader_for(case.id, Arc::new(FixtureHttpClient::new("")), &config);
        let url = loader
            .build_locator(&instrument, range)
            .unwrap_or_else(|error| panic!("provider '{}' locator failed: {error}", case.id))
            .to_url();
        let expected_host = format!("http://{}.test/", case.id);
        assert!(url.starts_with(&expected_host), "provider '{}': {url}", case.id);
        assert!(!query_pairs(&url).is_empty(), "provider '{}': query", case.id);
    }
}
