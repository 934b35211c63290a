use anyhow::Context;
use serde::{Deserialize, Serialize};
use sigidcore::prelude::{ConvertOptions, MalformedPolicy};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "db.csv";
pub const DEFAULT_OUTPUT: &str = "frequencies.json";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub on_malformed: MalformedPolicy,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            on_malformed: MalformedPolicy::Fatal,
        }
    }
}

impl ConvertConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading convert config {}", path_ref.display()))?;
        let config: ConvertConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing convert config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(input: PathBuf, output: PathBuf, skip_malformed: bool) -> Self {
        Self {
            input,
            output,
            on_malformed: if skip_malformed {
                MalformedPolicy::Skip
            } else {
                MalformedPolicy::Fatal
            },
        }
    }

    pub fn to_options(&self) -> ConvertOptions {
        ConvertOptions {
            on_malformed: self.on_malformed,
        }
    }
}
