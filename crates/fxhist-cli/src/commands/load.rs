use std::sync::Arc;

use fxhist_core::{loader_for, FieldKind, HttpClient, LoadRequest, LoaderConfig};
use tracing::info;

use crate::cli::LoadArgs;
use crate::error::CliError;

use super::{parse_range_args, CommandOutput};

pub async fn run(
    args: &LoadArgs,
    http_client: Arc<dyn HttpClient>,
    config: &LoaderConfig,
) -> Result<CommandOutput, CliError> {
    let (provider, instrument, range) = parse_range_args(&args.range)?;
    let fields = args
        .fields
        .iter()
        .map(|raw| raw.parse::<FieldKind>())
        .collect::<Result<Vec<_>, _>>()?;

    let loader = loader_for(provider, http_client, config);
    let records = loader
        .load(LoadRequest::new(instrument.clone(), fields, range))
        .await?;
    info!(
        provider = %provider,
        instrument = %instrument,
        rows = records.len(),
        "load complete"
    );

    Ok(CommandOutput::Records(records))
}
