use crate::error::Result;
use crate::indexing::analyzer::ClusterAnalyzer;
use crate::morphology::{Cluster, InflectionRecord};
use log::{debug, info, warn};
use rayon::prelude::*;

pub fn process_clusters_parallel(
    clusters: &[Cluster],
    analyzer: &ClusterAnalyzer,
    num_threads: usize,
) -> Result<Vec<InflectionRecord>> {
    info!(
        "Analyzing {} clusters with {} threads",
        clusters.len(),
        num_threads
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()?;

    let records = pool.install(|| {
        clusters
            .par_iter()
            .map(|cluster| analyzer.extract_root_and_inflections(cluster))
            .collect::<Result<Vec<_>>>()
    })?;

    let degenerate = records.iter().filter(|r| r.is_degenerate()).count();
    if degenerate > 0 {
        warn!(
            "{} of {} clusters share no common substring",
            degenerate,
            records.len()
        );
    }
    for record in &records {
        debug!("Root {:?} from {} members", record.root, record.members.len());
    }

    info!("Cluster analysis complete");
    Ok(records)
}
