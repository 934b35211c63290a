pub mod line;
pub mod record;

pub use line::{parse_line, split_lines, LineOutcome, FIELD_SEPARATOR, MIN_FIELDS};
pub use record::SignalRecord;
