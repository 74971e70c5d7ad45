use fxhist_core::adapters::dukascopy::INSTRUMENT_CODES;

use super::{CommandOutput, InstrumentRow};

pub fn run() -> CommandOutput {
    let mut rows: Vec<InstrumentRow> = INSTRUMENT_CODES
        .iter()
        .map(|&(symbol, code)| InstrumentRow { symbol, code })
        .collect();
    rows.sort_by(|left, right| left.symbol.cmp(right.symbol));
    CommandOutput::Instruments(rows)
}
