mod instruments;
mod load;
mod locate;

use std::sync::Arc;

use fxhist_core::{
    DateRange, HttpClient, Instrument, LoaderConfig, MarketRecord, ProviderId, ReqwestHttpClient,
};
use serde::Serialize;

use crate::cli::{Cli, Command, RangeArgs};
use crate::error::CliError;

/// What a command hands to the renderer.
#[derive(Debug)]
pub enum CommandOutput {
    Records(Vec<MarketRecord>),
    Locator(LocatorRow),
    Instruments(Vec<InstrumentRow>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocatorRow {
    pub provider: ProviderId,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstrumentRow {
    pub symbol: &'static str,
    pub code: u32,
}

pub async fn run(cli: &Cli) -> Result<CommandOutput, CliError> {
    let config = loader_config(cli);

    match &cli.command {
        Command::Load(args) => {
            let http_client: Arc<dyn HttpClient> =
                Arc::new(ReqwestHttpClient::new(&config.user_agent));
            load::run(args, http_client, &config).await
        }
        Command::Locate(args) => locate::run(args, &config),
        Command::Instruments => Ok(instruments::run()),
    }
}

fn loader_config(cli: &Cli) -> LoaderConfig {
    let config = LoaderConfig::from_env();
    match cli.timeout_ms {
        Some(timeout_ms) => config.with_timeout_ms(timeout_ms),
        None => config,
    }
}

/// Validated provider, instrument and range from raw arguments.
pub(crate) fn parse_range_args(
    args: &RangeArgs,
) -> Result<(ProviderId, Instrument, DateRange), CliError> {
    let provider = args.provider.parse::<ProviderId>()?;
    let instrument = Instrument::parse(&args.instrument)?;
    let range = DateRange::parse(&args.from, &args.to)?;
    Ok((provider, instrument, range))
}
