use serde::{Deserialize, Serialize};
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

/// How to treat a line whose frequency fields are not integers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    #[default]
    Fatal,
    Skip,
}

/// Options shared by every conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub on_malformed: MalformedPolicy,
}

/// Common error type for catalog conversion.
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("cannot read input catalog {}: {source}", path.display())]
    MissingInputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {field} is not an integer: {value:?}")]
    MalformedFrequencyField {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("cannot write output {}: {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("serialization failure: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("diagnostic output failed: {0}")]
    Diagnostics(#[source] io::Error),
}

pub type ConvertResult<T> = Result<T, ConvertError>;
