use clap::Parser;
use log::info;
use std::path::PathBuf;
use workflow::config::{ConvertConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Export the signal identification catalog as visualizer JSON")]
struct Args {
    /// `*`-delimited catalog to read
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// JSON file to write, replaced if present
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Load all settings from a YAML file instead of the flags above
    #[arg(long)]
    config: Option<PathBuf>,
    /// Drop lines with non-numeric frequencies instead of aborting
    #[arg(long, default_value_t = false)]
    skip_malformed: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        ConvertConfig::load(path)?
    } else {
        ConvertConfig::from_args(args.input, args.output, args.skip_malformed)
    };
    info!("using config {:?}", config);

    let runner = Runner::new(config);
    let stats = runner.execute()?;

    info!(
        "converted -> records {}, zero-range skipped {}, malformed skipped {}, output {}",
        stats.records_written,
        stats.zero_range_skipped,
        stats.malformed_skipped,
        runner.config().output.display()
    );

    Ok(())
}
