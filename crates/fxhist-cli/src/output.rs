use std::io::Write;

use fxhist_core::{FieldKind, MarketRecord};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::CommandOutput;
use crate::error::CliError;

pub fn render<W: Write>(
    writer: &mut W,
    output: &CommandOutput,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match output {
        CommandOutput::Records(records) => match format {
            OutputFormat::Csv => render_records_csv(writer, records),
            _ => render_json(writer, records, format, pretty),
        },
        CommandOutput::Locator(row) => match format {
            OutputFormat::Csv => render_rows_csv(writer, std::slice::from_ref(row)),
            _ => render_json(writer, std::slice::from_ref(row), format, pretty),
        },
        CommandOutput::Instruments(rows) => match format {
            OutputFormat::Csv => render_rows_csv(writer, rows),
            _ => render_json(writer, rows, format, pretty),
        },
    }
}

fn render_json<W: Write, T: Serialize>(
    writer: &mut W,
    items: &[T],
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    if format == OutputFormat::Ndjson {
        for item in items {
            serde_json::to_writer(&mut *writer, item)?;
            writeln!(writer)?;
        }
        return Ok(());
    }

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, items)?;
    } else {
        serde_json::to_writer(&mut *writer, items)?;
    }
    writeln!(writer)?;
    Ok(())
}

fn render_rows_csv<W: Write, T: Serialize>(writer: &mut W, rows: &[T]) -> Result<(), CliError> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// One column per field; fields a provider does not report stay empty.
fn render_records_csv<W: Write>(writer: &mut W, records: &[MarketRecord]) -> Result<(), CliError> {
    let mut csv = csv::Writer::from_writer(writer);

    let mut header = vec!["ts", "instrument"];
    header.extend(FieldKind::ALL.iter().map(|field| field.as_str()));
    csv.write_record(&header)?;

    for record in records {
        let mut row = vec![record.ts().format_iso(), record.instrument().to_string()];
        row.extend(FieldKind::ALL.iter().map(|field| {
            record
                .get(*field)
                .map(|value| value.to_string())
                .unwrap_or_default()
        }));
        csv.write_record(&row)?;
    }

    csv.flush()?;
    Ok(())
}
