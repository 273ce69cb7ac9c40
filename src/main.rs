use clap::Parser;
use inflection_finder::{AnalyzerConfig, LogLevel, ReportFormat, RunConfig, run, version};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "inflection-finder",
    version,
    about = "Finds candidate inflectional endings and paradigm families in clustered word forms",
    after_help = "The delimiter is meant for non-alphabetic transcriptions, such as the hyphen \
                  separating syllables in alphasyllabaries."
)]
struct Cli {
    /// CSV file with one cluster of related word forms per line.
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Log verbosity.
    #[arg(short = 'l', long = "loglevel", value_enum, ignore_case = true, default_value_t = LogLevel::Error)]
    log_level: LogLevel,

    /// Morpheme boundary marker stripped from the edges of a shared root.
    #[arg(short = 'd', long = "delimiter")]
    delimiter: Option<String>,

    /// Worker threads for cluster analysis. Defaults to the CPU count.
    #[arg(short = 't', long = "threads")]
    threads: Option<usize>,

    /// Record store path. Defaults to <input name>_candidate_inflections.json beside the input.
    #[arg(short = 's', long = "store")]
    store: Option<PathBuf>,

    /// Ignore records stored by earlier runs.
    #[arg(long)]
    fresh: bool,

    /// Report format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.into())
        .parse_default_env()
        .init();

    info!("Inflection finder v{}", version());

    let mut analyzer = AnalyzerConfig::new();
    if let Some(delimiter) = &cli.delimiter {
        analyzer = analyzer.with_delimiter(delimiter.as_str());
    }

    let mut config = RunConfig::new(&cli.file)
        .with_analyzer(analyzer)
        .with_fresh(cli.fresh);
    if let Some(threads) = cli.threads {
        config = config.with_threads(threads);
    }
    if let Some(store) = &cli.store {
        config = config.with_store_path(store);
    }

    let start_time = Instant::now();
    let report = match run(&config) {
        Ok(report) => report,
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.format {
        ReportFormat::Text => print!("{}", report.to_text()),
        ReportFormat::Json => match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        },
    }

    info!("Completed in {:.2?}", start_time.elapsed());
    info!("Records stored at {:?}", config.store_path);
    ExitCode::SUCCESS
}
