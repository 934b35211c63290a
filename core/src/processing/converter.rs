use crate::catalog::{parse_line, split_lines, LineOutcome, SignalRecord};
use crate::output::json::write_json;
use crate::prelude::{ConvertError, ConvertOptions, ConvertResult, MalformedPolicy};
use crate::processing::sort::sort_by_bandwidth;
use crate::telemetry::stats::ConversionStats;
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Turns a `*`-delimited signal catalog into the visualizer's JSON array.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Filters a whole catalog held in memory.
    ///
    /// Zero-range records are reported on `diagnostics` as `Skipping: <record>`.
    /// The returned records are in catalog order; sorting is left to the caller.
    pub fn parse_catalog<W: Write>(
        &self,
        text: &str,
        diagnostics: &mut W,
    ) -> ConvertResult<(Vec<SignalRecord>, ConversionStats)> {
        let mut stats = ConversionStats::new();
        let mut records = Vec::new();

        for (idx, line) in split_lines(text).enumerate() {
            stats.record_line();
            let line_no = idx + 1;
            let outcome = match parse_line(line_no, line) {
                Ok(outcome) => outcome,
                Err(err @ ConvertError::MalformedFrequencyField { .. })
                    if self.options.on_malformed == MalformedPolicy::Skip =>
                {
                    warn!("skipping malformed catalog line: {}", err);
                    stats.record_malformed();
                    continue;
                }
                Err(err) => return Err(err),
            };

            match outcome {
                LineOutcome::Short { fields } => {
                    debug!("line {} has {} fields, ignoring", line_no, fields);
                    stats.record_short();
                }
                LineOutcome::Record(record) if record.is_zero_range() => {
                    let rendered = serde_json::to_string(&record)?;
                    writeln!(diagnostics, "Skipping: {}", rendered)
                        .map_err(ConvertError::Diagnostics)?;
                    stats.record_zero_range();
                }
                LineOutcome::Record(record) => records.push(record),
            }
        }

        Ok((records, stats))
    }

    /// Full conversion with diagnostics written to `diagnostics`.
    pub fn convert_with<W: Write>(
        &self,
        input: &Path,
        output: &Path,
        diagnostics: &mut W,
    ) -> ConvertResult<ConversionStats> {
        info!("converting {} -> {}", input.display(), output.display());
        let text =
            fs::read_to_string(input).map_err(|source| ConvertError::MissingInputFile {
                path: input.to_path_buf(),
                source,
            })?;

        let (mut records, mut stats) = self.parse_catalog(&text, diagnostics)?;
        sort_by_bandwidth(&mut records);
        write_json(output, &records)?;

        stats.records_written = records.len();
        info!(
            "wrote {} records, skipped {} of {} lines",
            stats.records_written,
            stats.skipped(),
            stats.lines_read
        );
        Ok(stats)
    }

    /// Full conversion with diagnostics on standard output.
    pub fn convert(&self, input: &Path, output: &Path) -> ConvertResult<ConversionStats> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.convert_with(input, output, &mut handle)
    }
}
