//! bgp-features entrypoint: read a pipe-delimited BGP update log, compute windowed features,
//! write them as CSV and print a JSON run report on stdout.

use bgp_features::{
    config::{require_input, ConfigOverrides, FeatureConfig},
    features::{BoundaryPolicy, Feature, FeatureExtractor},
    logging::StructuredLogger,
    records::{normalize_all, sort_by_timestamp},
    report::RunReport,
    table::{read_rows, write_windows},
    FeatureError,
};
use clap::Parser;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "bgp-features",
    version,
    about = "Windowed time-series features from BGP update logs"
)]
struct Cli {
    /// Pipe-delimited update log
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Output CSV path
    #[arg(short = 'o', long = "output")]
    output: PathBuf,

    /// Feature to extract (repeatable; default: all)
    #[arg(short = 'f', long = "feature", value_enum)]
    features: Vec<Feature>,

    /// Window size in seconds
    #[arg(long = "window")]
    window: Option<i64>,

    /// First window start: epoch seconds or 'YYYY-MM-DD HH:MM:SS' (UTC)
    #[arg(long = "start-time")]
    start_time: Option<String>,

    /// Number of input rows to process
    #[arg(long = "head")]
    head: Option<usize>,

    /// Boundary policy for every feature instead of each feature's default
    #[arg(long = "policy", value_enum)]
    policy: Option<BoundaryPolicy>,

    /// JSON config file (defaults to $BGP_FEATURES_CONFIG, then built-in defaults)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    #[arg(long = "log-level")]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long = "log-json")]
    log_json: bool,
}

impl Cli {
    fn into_config(self) -> Result<(FeatureConfig, PathBuf, PathBuf), FeatureError> {
        let config_path = self
            .config
            .or_else(|| std::env::var("BGP_FEATURES_CONFIG").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("bgp-features.json"));
        let mut config = FeatureConfig::load(&config_path)?;
        config.apply_overrides(ConfigOverrides {
            window_secs: self.window,
            start_time: self.start_time,
            row_limit: self.head,
            policy: self.policy,
            features: self.features,
            log_level: self.log_level,
            log_json: self.log_json,
        })?;
        Ok((config, self.input, self.output))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (config, input, output) = Cli::parse().into_config()?;
    StructuredLogger::init(config.log.json, &config.log.level);

    require_input(&input)?;
    // Configuration errors must surface before any output exists.
    let extractor = FeatureExtractor::new(config)?;
    let config = extractor.config();
    info!(
        input = %input.display(),
        window_secs = config.window_secs,
        start_time = ?config.start_time,
        row_limit = ?config.row_limit,
        "bgp-features starting"
    );

    let rows = read_rows(BufReader::new(File::open(&input)?), config.row_limit)?;
    let (mut records, stats) = normalize_all(&rows);
    info!(
        rows = stats.rows_read,
        normalized = stats.normalized,
        skipped = stats.skipped(),
        "records normalized"
    );
    sort_by_timestamp(&mut records);

    let windows = extractor.run_all(&records)?;
    write_windows(BufWriter::new(File::create(&output)?), &windows)?;

    let report = RunReport::new(&stats, &windows);
    info!(output = %output.display(), windows = report.windows_emitted, "feature extraction complete");
    StructuredLogger::emit_json(&report, &mut std::io::stdout().lock())?;
    Ok(())
}
