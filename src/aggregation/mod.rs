pub mod discovery;
pub mod index;
pub mod ranking;

pub use discovery::{discover_families, discover_pairwise_families};
pub use index::{InflectionIndex, build_inflection_index, filter_singletons};
pub use ranking::rank_families;
