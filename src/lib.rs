pub mod aggregation;
pub mod config;
pub mod error;
pub mod indexing;
pub mod morphology;
pub mod report;
pub mod utils;

pub use config::{AnalyzerConfig, LogLevel, ReportFormat, RunConfig};
pub use error::{InflectError, Result};
pub use report::Report;

use indexing::ClusterAnalyzer;
use log::{debug, info};
use morphology::{Cluster, InflectionRecord};
use utils::RecordStore;

/// Phase one: root and inflections for every cluster, in input order.
pub fn process_clusters(
    clusters: &[Cluster],
    analyzer_config: &AnalyzerConfig,
    num_threads: usize,
) -> Result<Vec<InflectionRecord>> {
    let analyzer = ClusterAnalyzer::new(analyzer_config.clone());
    indexing::process_clusters_parallel(clusters, &analyzer, num_threads)
}

/// Phase two: candidates and ranked families over the complete record set.
pub fn aggregate_records<'a, I>(records: I) -> Report
where
    I: IntoIterator<Item = &'a InflectionRecord>,
{
    let index = aggregation::build_inflection_index(records);
    let candidates = aggregation::filter_singletons(&index);
    let families = aggregation::discover_families(&candidates);
    let ranked = aggregation::rank_families(families);
    Report::new(&candidates, ranked)
}

pub fn run(config: &RunConfig) -> Result<Report> {
    config.validate()?;
    info!("Starting inflection search over {:?}", config.input);
    debug!(
        "Store: {:?}, delimiter: {:?}, threads: {}, fresh: {}",
        config.store_path, config.analyzer.delimiter, config.threads, config.fresh
    );

    let clusters = indexing::read_cluster_file(&config.input)?;
    let records = process_clusters(&clusters, &config.analyzer, config.threads)?;

    let mut store = if config.fresh {
        RecordStore::fresh(&config.store_path)
    } else {
        RecordStore::open(&config.store_path)?
    };
    store.extend(records);
    store.save()?;

    info!("Aggregating {} stored records", store.len());
    let report = aggregate_records(store.records());
    info!(
        "Found {} inflection candidates and {} families",
        report.candidates.len(),
        report.families.len()
    );

    Ok(report)
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
