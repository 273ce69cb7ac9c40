// Rendering of the aggregation results.

use crate::aggregation::InflectionIndex;
use crate::morphology::RankedFamily;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateEntry {
    pub inflection: String,
    pub roots: BTreeSet<String>,
}

/// Everything the aggregation phase has to say about one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub candidates: Vec<CandidateEntry>,
    pub families: Vec<RankedFamily>,
}

impl Report {
    pub fn new(candidates: &InflectionIndex, families: Vec<RankedFamily>) -> Self {
        let candidates = candidates
            .iter()
            .map(|(inflection, roots)| CandidateEntry {
                inflection: inflection.clone(),
                roots: roots.clone(),
            })
            .collect();
        Report {
            candidates,
            families,
        }
    }

    /// Format:
    ///   `-jo is an inflection candidate with members: ko-no-s, pa-i-t`
    ///   `[-ja, -jo] is a WEAK candidate inflection family via a, b [2 family member(s)]`
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str("Inflection Candidates\n");
        if self.candidates.is_empty() {
            out.push_str("\n(none)\n");
        }
        for candidate in &self.candidates {
            let _ = writeln!(
                out,
                "\n{} is an inflection candidate with members: {}",
                candidate.inflection,
                join(&candidate.roots)
            );
        }

        out.push_str("\n\nInflection Family Candidates\n\n");
        if self.families.is_empty() {
            out.push_str("(none)\n");
        }
        for ranked in &self.families {
            let _ = writeln!(
                out,
                "[{}] is a {} candidate inflection family via {} [{} family member(s)]",
                join(&ranked.family.members),
                ranked.strength,
                join(&ranked.family.evidence),
                ranked.family.evidence_count()
            );
        }

        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn join(items: &BTreeSet<String>) -> String {
    items
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::{FamilyStrength, InflectionFamily};

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|i| i.to_string()).collect()
    }

    fn report() -> Report {
        let index: InflectionIndex = [("-jo".to_string(), set(&["ko-no-s", "pa-i-t"]))]
            .into_iter()
            .collect();
        let families = vec![RankedFamily {
            family: InflectionFamily::new(set(&["-ja", "-jo"]), set(&["a", "b", "c"])),
            strength: FamilyStrength::Strong,
        }];
        Report::new(&index, families)
    }

    #[test]
    fn text_lists_candidates_and_families() {
        let text = report().to_text();
        assert!(text.contains("-jo is an inflection candidate with members: ko-no-s, pa-i-t"));
        assert!(text.contains(
            "[-ja, -jo] is a STRONG candidate inflection family via a, b, c [3 family member(s)]"
        ));
    }

    #[test]
    fn empty_report_says_none() {
        let text = Report::new(&InflectionIndex::new(), Vec::new()).to_text();
        assert_eq!(text.matches("(none)").count(), 2);
    }

    #[test]
    fn json_flattens_family() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        assert_eq!(json["candidates"][0]["inflection"], "-jo");
        assert_eq!(json["families"][0]["members"][1], "-jo");
        assert_eq!(json["families"][0]["strength"], "STRONG");
        assert_eq!(json["families"][0]["evidence"].as_array().unwrap().len(), 3);
    }
}
