use crate::config::AnalyzerConfig;
use crate::error::{InflectError, Result};
use crate::morphology::{Cluster, Inflection, InflectionRecord};
use log::{debug, trace};

/// Splits each cluster into its shared root and per-member endings.
#[derive(Debug, Clone, Default)]
pub struct ClusterAnalyzer {
    config: AnalyzerConfig,
}

impl ClusterAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        ClusterAnalyzer { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn extract_root_and_inflections(&self, cluster: &Cluster) -> Result<InflectionRecord> {
        if cluster.is_empty() {
            return Err(InflectError::EmptyCluster { line: cluster.line });
        }

        let common = longest_common_substring(&cluster.members);
        let root = match self.config.delimiter.as_deref() {
            Some(delimiter) => strip_delimiter(&common, delimiter).to_string(),
            None => common,
        };

        let inflections: Vec<Inflection> = cluster
            .members
            .iter()
            .map(|member| inflection_of(member, &root))
            .collect();

        debug!(
            "Line {}: root {:?}, inflections {:?}",
            cluster.line,
            root,
            inflections.iter().map(Inflection::label).collect::<Vec<_>>()
        );

        Ok(InflectionRecord::new(
            cluster.id(),
            root,
            cluster.members.clone(),
            inflections,
        ))
    }
}

/// Longest substring of the first member that occurs in every member.
///
/// Candidates are scanned by start position, then by increasing end position,
/// and only a strictly longer match replaces the current best, so ties go to
/// the leftmost, first-found candidate. Works on `char`s, never byte offsets.
pub fn longest_common_substring(members: &[String]) -> String {
    let Some(first) = members.first() else {
        return String::new();
    };
    let chars: Vec<char> = first.chars().collect();
    let mut best: &[char] = &[];

    for start in 0..chars.len() {
        // Nothing from here on can beat the current best.
        if chars.len() - start <= best.len() {
            break;
        }
        for end in (start + best.len() + 1)..=chars.len() {
            let candidate: String = chars[start..end].iter().collect();
            trace!("Trying candidate {:?}", candidate);
            if !occurs_in_all(&candidate, members) {
                // Extending a substring that is missing somewhere cannot help.
                break;
            }
            best = &chars[start..end];
        }
    }

    best.iter().collect()
}

fn occurs_in_all(candidate: &str, members: &[String]) -> bool {
    members.iter().all(|member| member.contains(candidate))
}

/// Drops at most one leading and one trailing delimiter; inner ones stay.
pub fn strip_delimiter<'a>(root: &'a str, delimiter: &str) -> &'a str {
    if delimiter.is_empty() {
        return root;
    }
    let root = root.strip_suffix(delimiter).unwrap_or(root);
    root.strip_prefix(delimiter).unwrap_or(root)
}

fn inflection_of(member: &str, root: &str) -> Inflection {
    let residue = member.replacen(root, "", 1);
    if residue.is_empty() {
        Inflection::WholeRoot(root.to_string())
    } else {
        Inflection::Ending(residue)
    }
}
