use std::sync::Arc;

use fxhist_core::{loader_for, LoaderConfig, NoopHttpClient};

use crate::cli::RangeArgs;
use crate::error::CliError;

use super::{parse_range_args, CommandOutput, LocatorRow};

pub fn run(args: &RangeArgs, config: &LoaderConfig) -> Result<CommandOutput, CliError> {
    let (provider, instrument, range) = parse_range_args(args)?;
    let loader = loader_for(provider, Arc::new(NoopHttpClient), config);
    let url = loader.build_locator(&instrument, range)?.to_url();

    Ok(CommandOutput::Locator(LocatorRow { provider, url }))
}
