use crate::morphology::InflectionRecord;
use log::{debug, info};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Inflection label to the set of roots it was observed with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InflectionIndex {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl InflectionIndex {
    pub fn new() -> Self {
        InflectionIndex {
            entries: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, inflection: String, root: String) {
        self.entries.entry(inflection).or_default().insert(root);
    }

    pub fn get(&self, inflection: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(inflection)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, BTreeSet<String>)> for InflectionIndex {
    fn from_iter<I: IntoIterator<Item = (String, BTreeSet<String>)>>(iter: I) -> Self {
        InflectionIndex {
            entries: iter.into_iter().collect(),
        }
    }
}

pub fn build_inflection_index<'a, I>(records: I) -> InflectionIndex
where
    I: IntoIterator<Item = &'a InflectionRecord>,
{
    let mut index = InflectionIndex::new();
    let mut record_count = 0;
    for record in records {
        record_count += 1;
        for label in record.labels() {
            index.insert(label, record.root.clone());
        }
    }
    info!(
        "Built inflection index with {} candidates from {} records",
        index.len(),
        record_count
    );
    index
}

/// Drops inflections seen under a single root; one sighting is noise until
/// another cluster corroborates it.
pub fn filter_singletons(index: &InflectionIndex) -> InflectionIndex {
    let filtered: InflectionIndex = index
        .iter()
        .filter(|(inflection, roots)| {
            if roots.len() < 2 {
                debug!("Dropping {:?}, only seen with {:?}", inflection, roots);
                false
            } else {
                true
            }
        })
        .map(|(inflection, roots)| (inflection.clone(), roots.clone()))
        .collect();
    info!(
        "{} of {} inflection candidates have corroborating roots",
        filtered.len(),
        index.len()
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::Inflection;
    use uuid::Uuid;

    fn record(root: &str, endings: &[&str]) -> InflectionRecord {
        InflectionRecord::new(
            Uuid::nil(),
            root.to_string(),
            endings.iter().map(|e| format!("{root}{e}")).collect(),
            endings
                .iter()
                .map(|e| Inflection::Ending(e.to_string()))
                .collect(),
        )
    }

    fn roots(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn inverts_records() {
        let records = vec![
            record("a", &["x", "y"]),
            record("b", &["x", "z"]),
            record("c", &["y", "z"]),
        ];
        let index = build_inflection_index(&records);
        assert_eq!(index.len(), 3);
        assert_eq!(index.get("x"), Some(&roots(&["a", "b"])));
        assert_eq!(index.get("y"), Some(&roots(&["a", "c"])));
        assert_eq!(index.get("z"), Some(&roots(&["b", "c"])));
    }

    #[test]
    fn duplicate_roots_count_once() {
        let records = vec![record("a", &["x"]), record("a", &["x", "y"])];
        let index = build_inflection_index(&records);
        assert_eq!(index.get("x"), Some(&roots(&["a"])));
    }

    #[test]
    fn filter_drops_single_root_entries() {
        let records = vec![record("a", &["x", "y", "w"]), record("b", &["x", "y", "z"])];
        let filtered = filter_singletons(&build_inflection_index(&records));
        let keys: Vec<_> = filtered.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["x", "y"]);
    }

    #[test]
    fn empty_records_give_empty_index() {
        let records: Vec<InflectionRecord> = Vec::new();
        let index = build_inflection_index(&records);
        assert!(index.is_empty());
        assert!(filter_singletons(&index).is_empty());
    }

    #[test]
    fn root_sentinels_index_under_their_label() {
        let whole = InflectionRecord::new(
            Uuid::nil(),
            "pa".to_string(),
            vec!["pa".to_string()],
            vec![Inflection::WholeRoot("pa".to_string())],
        );
        let index = build_inflection_index([&whole]);
        assert_eq!(index.get("pa-root"), Some(&roots(&["pa"])));
    }
}
