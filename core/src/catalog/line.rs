use crate::catalog::record::SignalRecord;
use crate::prelude::{ConvertError, ConvertResult};

pub const FIELD_SEPARATOR: char = '*';
pub const MIN_FIELDS: usize = 8;

const DESCRIPTION: usize = 0;
const FREQ_START: usize = 1;
const FREQ_STOP: usize = 2;
const URL: usize = 7;

/// Result of classifying a single catalog line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Fewer than [`MIN_FIELDS`] fields; not a catalog entry.
    Short { fields: usize },
    Record(SignalRecord),
}

/// Iterates catalog lines, ending each at `\n`, `\r\n` or a lone `\r`.
///
/// Terminators are not part of the yielded lines; a trailing terminator does
/// not produce an extra empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(pos) => {
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                let line = &rest[..pos];
                rest = &rest[pos + terminator..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}

/// Splits one line (without its terminator) and builds a record from it.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_line(line_no: usize, line: &str) -> ConvertResult<LineOutcome> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < MIN_FIELDS {
        return Ok(LineOutcome::Short {
            fields: fields.len(),
        });
    }

    let freq_start = parse_frequency(line_no, "freqStart", fields[FREQ_START])?;
    let freq_stop = parse_frequency(line_no, "freqStop", fields[FREQ_STOP])?;

    Ok(LineOutcome::Record(SignalRecord::new(
        fields[DESCRIPTION],
        freq_start,
        freq_stop,
        fields[URL],
    )))
}

fn parse_frequency(line: usize, field: &'static str, raw: &str) -> ConvertResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|source| ConvertError::MalformedFrequencyField {
            line,
            field,
            value: raw.to_string(),
            source,
        })
}
