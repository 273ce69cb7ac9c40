mod family;
mod record;

pub use family::{FamilyStrength, InflectionFamily, RankedFamily};
pub use record::{Inflection, InflectionRecord};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Surface forms from one input line, hypothesised to share a root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub line: u64,
    pub members: Vec<String>,
}

impl Cluster {
    pub fn new(line: u64, members: Vec<String>) -> Self {
        Cluster { line, members }
    }

    /// Stable identifier derived from the members, so the same cluster read
    /// in a later session lands on the same store key.
    pub fn id(&self) -> Uuid {
        let joined = self.members.join("\u{1f}");
        Uuid::new_v5(&Uuid::NAMESPACE_OID, joined.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
