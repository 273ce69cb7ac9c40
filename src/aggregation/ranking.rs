use crate::morphology::{InflectionFamily, RankedFamily};
use log::info;
use std::cmp::Reverse;

/// Largest families first; equal sizes keep their incoming order.
pub fn rank_families(families: Vec<InflectionFamily>) -> Vec<RankedFamily> {
    let mut ranked: Vec<RankedFamily> = families
        .into_iter()
        .filter_map(|family| {
            family
                .strength()
                .map(|strength| RankedFamily { family, strength })
        })
        .collect();
    ranked.sort_by_key(|r| Reverse(r.family.member_count()));

    info!("Ranked {} inflection families", ranked.len());
    ranked
}
