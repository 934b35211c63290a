use crate::workflow::config::ConvertConfig;
use anyhow::Context;
use sigidcore::processing::Converter;
use sigidcore::telemetry::ConversionStats;
use std::io::Write;

#[derive(Clone)]
pub struct Runner {
    config: ConvertConfig,
}

impl Runner {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Runs the conversion with `Skipping:` diagnostics on standard output.
    pub fn execute(&self) -> anyhow::Result<ConversionStats> {
        Converter::new(self.config.to_options())
            .convert(&self.config.input, &self.config.output)
            .with_context(|| format!("converting {}", self.config.input.display()))
    }

    pub fn execute_with<W: Write>(&self, diagnostics: &mut W) -> anyhow::Result<ConversionStats> {
        let converter = Converter::new(self.config.to_options());
        converter
            .convert_with(&self.config.input, &self.config.output, diagnostics)
            .with_context(|| format!("converting {}", self.config.input.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigidcore::prelude::ConvertError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn runner_converts_catalog() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("db.csv");
        let output = dir.path().join("frequencies.json");
        fs::write(
            &input,
            "FM Radio*88000000*108000000*Broadcast*x*x*x*http://example.com/fm\n\
             Invalid*0*0*x*x*x*x*http://example.com/invalid\n\
             a*b*c*d*e\n",
        )
        .unwrap();

        let runner = Runner::new(ConvertConfig::from_args(input, output.clone(), false));
        let mut diag = Vec::new();
        let stats = runner.execute_with(&mut diag).unwrap();
        assert_eq!(stats.records_written, 1);
        assert_eq!(stats.zero_range_skipped, 1);
        assert_eq!(String::from_utf8(diag).unwrap().lines().count(), 1);

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            r#"[{"description":"FM Radio","freqStart":88000000,"freqStop":108000000,"url":"http://example.com/fm"}]"#
        );
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
    }

    #[test]
    fn runner_execute_writes_output_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("db.csv");
        let output = dir.path().join("frequencies.json");
        fs::write(
            &input,
            "Wide*0*100*a*b*c*d*w\nNarrow*10*20*a*b*c*d*n\n",
        )
        .unwrap();

        let runner = Runner::new(ConvertConfig::from_args(input, output.clone(), false));
        let stats = runner.execute().unwrap();
        assert_eq!(stats.records_written, 2);

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(parsed[0]["description"], "Wide");
        assert_eq!(parsed[1]["description"], "Narrow");
    }

    #[test]
    fn runner_keeps_core_error_in_chain() {
        let dir = tempdir().unwrap();
        let runner = Runner::new(ConvertConfig::from_args(
            dir.path().join("absent.csv"),
            dir.path().join("out.json"),
            false,
        ));
        let err = runner.execute_with(&mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("absent.csv"));
        assert!(matches!(
            err.downcast_ref::<ConvertError>(),
            Some(ConvertError::MissingInputFile { .. })
        ));
    }
}
