use crate::catalog::SignalRecord;
use crate::prelude::{ConvertError, ConvertResult};
use std::fs;
use std::path::Path;

/// Renders records as a compact JSON array.
pub fn to_json(records: &[SignalRecord]) -> ConvertResult<Vec<u8>> {
    Ok(serde_json::to_vec(records)?)
}

/// Writes the whole array in a single call, replacing any existing file.
pub fn write_json<P: AsRef<Path>>(path: P, records: &[SignalRecord]) -> ConvertResult<()> {
    let path_ref = path.as_ref();
    let bytes = to_json(records)?;
    fs::write(path_ref, bytes).map_err(|source| ConvertError::OutputWriteFailure {
        path: path_ref.to_path_buf(),
        source,
    })
}
