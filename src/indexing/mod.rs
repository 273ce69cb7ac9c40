pub mod analyzer;
pub mod processor;
pub mod reader;

pub use analyzer::{ClusterAnalyzer, longest_common_substring, strip_delimiter};
pub use processor::process_clusters_parallel;
pub use reader::{read_cluster_file, read_clusters};
