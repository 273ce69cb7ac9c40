use crate::aggregation::index::InflectionIndex;
use crate::morphology::InflectionFamily;
use log::{debug, info, trace};
use std::collections::{BTreeMap, BTreeSet};

type FamilyMap = BTreeMap<BTreeSet<String>, BTreeSet<String>>;

/// Groups inflections whose root sets overlap.
///
/// A pairwise pass is run over the index, then once more over its own
/// output so that overlapping pairs merge into larger families. The second
/// pass overrides the first where both produce the same member set. There
/// is no third pass. Families supported by fewer than two roots are dropped.
pub fn discover_families(index: &InflectionIndex) -> Vec<InflectionFamily> {
    let first = pair_pass(&seed(index));
    let second = pair_pass(&first);
    debug!(
        "Family passes produced {} and {} candidates",
        first.len(),
        second.len()
    );

    let mut merged = first;
    merged.extend(second);
    corroborated(merged)
}

/// Single pairwise pass, without the merging second pass.
pub fn discover_pairwise_families(index: &InflectionIndex) -> Vec<InflectionFamily> {
    corroborated(pair_pass(&seed(index)))
}

fn seed(index: &InflectionIndex) -> FamilyMap {
    index
        .iter()
        .map(|(inflection, roots)| (BTreeSet::from([inflection.clone()]), roots.clone()))
        .collect()
}

/// Compares every unordered pair once, in key order.
fn pair_pass(candidates: &FamilyMap) -> FamilyMap {
    let entries: Vec<_> = candidates.iter().collect();
    let mut families = FamilyMap::new();

    for (i, (x_members, x_roots)) in entries.iter().enumerate() {
        for (y_members, y_roots) in &entries[i + 1..] {
            let shared: BTreeSet<String> = x_roots.intersection(y_roots).cloned().collect();
            if shared.is_empty() {
                continue;
            }
            let key: BTreeSet<String> = x_members.union(y_members).cloned().collect();
            trace!("{:?} and {:?} share {:?}", x_members, y_members, shared);
            families.entry(key).or_default().extend(shared);
        }
    }

    families
}

fn corroborated(families: FamilyMap) -> Vec<InflectionFamily> {
    let total = families.len();
    let kept: Vec<InflectionFamily> = families
        .into_iter()
        .filter(|(members, evidence)| {
            if evidence.len() < 2 {
                debug!("Dropping family {:?}, only seen with {:?}", members, evidence);
                false
            } else {
                true
            }
        })
        .map(|(members, evidence)| InflectionFamily::new(members, evidence))
        .collect();
    info!("{} of {} candidate families are corroborated", kept.len(), total);
    kept
}
