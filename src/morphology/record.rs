use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const ROOT_SENTINEL_SUFFIX: &str = "-root";

/// What is left of a cluster member once the root is cut out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inflection {
    /// A non-empty residue, the candidate affix.
    Ending(String),
    /// The member is the root itself. Holds the root so the marker stays
    /// distinct from a zero-length ending.
    WholeRoot(String),
}

impl Inflection {
    /// The string used as the key in the inflection index.
    pub fn label(&self) -> String {
        match self {
            Inflection::Ending(ending) => ending.clone(),
            Inflection::WholeRoot(root) => format!("{root}{ROOT_SENTINEL_SUFFIX}"),
        }
    }

    pub fn is_whole_root(&self) -> bool {
        matches!(self, Inflection::WholeRoot(_))
    }
}

impl fmt::Display for Inflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectionRecord {
    pub cluster_id: Uuid,
    pub root: String,
    pub members: Vec<String>,
    pub inflections: Vec<Inflection>,
}

impl InflectionRecord {
    pub fn new(
        cluster_id: Uuid,
        root: String,
        members: Vec<String>,
        inflections: Vec<Inflection>,
    ) -> Self {
        debug_assert_eq!(members.len(), inflections.len());
        InflectionRecord {
            cluster_id,
            root,
            members,
            inflections,
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.inflections.iter().map(Inflection::label)
    }

    /// True when no substring is shared by every member.
    pub fn is_degenerate(&self) -> bool {
        self.root.is_empty()
    }
}
