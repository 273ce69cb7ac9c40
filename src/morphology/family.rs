use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FamilyStrength {
    Weak,
    Strong,
}

impl FamilyStrength {
    /// Two supporting roots is weak evidence, more than two is strong.
    /// Anything less is not a family at all.
    pub fn from_evidence(root_count: usize) -> Option<Self> {
        match root_count {
            0 | 1 => None,
            2 => Some(FamilyStrength::Weak),
            _ => Some(FamilyStrength::Strong),
        }
    }
}

impl fmt::Display for FamilyStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FamilyStrength::Weak => f.write_str("WEAK"),
            FamilyStrength::Strong => f.write_str("STRONG"),
        }
    }
}

/// Inflection labels that pattern together, plus the roots attesting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectionFamily {
    pub members: BTreeSet<String>,
    pub evidence: BTreeSet<String>,
}

impl InflectionFamily {
    pub fn new(members: BTreeSet<String>, evidence: BTreeSet<String>) -> Self {
        InflectionFamily { members, evidence }
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn evidence_count(&self) -> usize {
        self.evidence.len()
    }

    pub fn strength(&self) -> Option<FamilyStrength> {
        FamilyStrength::from_evidence(self.evidence_count())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedFamily {
    #[serde(flatten)]
    pub family: InflectionFamily,
    pub strength: FamilyStrength,
}
