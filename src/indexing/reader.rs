use crate::error::{InflectError, Result};
use crate::morphology::Cluster;
use log::{debug, info, trace};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn read_cluster_file(path: &Path) -> Result<Vec<Cluster>> {
    info!("Reading clusters from {:?}", path);
    let file = File::open(path)?;
    let clusters = read_clusters(file)?;
    info!("Read {} clusters from {:?}", clusters.len(), path);
    Ok(clusters)
}

/// One cluster per line, one member per comma-separated field.
/// Blank lines are skipped; anything else that is not a clean list of
/// non-empty members aborts the read.
pub fn read_clusters<R: Read>(source: R) -> Result<Vec<Cluster>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut clusters = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|source| {
            let line = source
                .position()
                .map(|pos| pos.line())
                .unwrap_or(index as u64 + 1);
            InflectError::Csv { line, source }
        })?;
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(index as u64 + 1);

        if record.len() == 1 && record[0].is_empty() {
            debug!("Skipping blank line {}", line);
            continue;
        }

        let mut members = Vec::with_capacity(record.len());
        for (field, value) in record.iter().enumerate() {
            if value.is_empty() {
                return Err(InflectError::EmptyMember {
                    line,
                    field: field + 1,
                });
            }
            trace!("Line {} field {}: {}", line, field + 1, value);
            members.push(value.to_string());
        }

        clusters.push(Cluster::new(line, members));
    }

    Ok(clusters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_one_cluster_per_line() {
        let input = "ko-no-so, ko-no-si-jo,ko-no-si-ja\nwalk,walked,walking\n";
        let clusters = read_clusters(input.as_bytes()).unwrap();
        assert_eq!(clusters.len(), 2);
        assert_eq!(
            clusters[0].members,
            vec!["ko-no-so", "ko-no-si-jo", "ko-no-si-ja"]
        );
        assert_eq!(clusters[0].line, 1);
        assert_eq!(clusters[1].members, vec!["walk", "walked", "walking"]);
        assert_eq!(clusters[1].line, 2);
    }

    #[test]
    fn skips_blank_lines() {
        let input = "a,ab\n\n   \nb,bc\n";
        let clusters = read_clusters(input.as_bytes()).unwrap();
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[1].members, vec!["b", "bc"]);
    }

    #[test]
    fn keeps_multibyte_members_intact() {
        let input = "𐀒𐀜𐀰,𐀒𐀜𐀯𐀍\n";
        let clusters = read_clusters(input.as_bytes()).unwrap();
        assert_eq!(clusters[0].members, vec!["𐀒𐀜𐀰", "𐀒𐀜𐀯𐀍"]);
    }

    #[test]
    fn quoted_fields_may_contain_commas() {
        let input = "\"a,b\",\"a,c\"\n";
        let clusters = read_clusters(input.as_bytes()).unwrap();
        assert_eq!(clusters[0].members, vec!["a,b", "a,c"]);
    }

    #[test]
    fn empty_field_fails_the_read() {
        let input = "walk,walked\nrun,,running\n";
        let err = read_clusters(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            InflectError::EmptyMember { line: 2, field: 2 }
        ));
    }

    #[test]
    fn invalid_utf8_fails_the_read() {
        let input: &[u8] = b"walk,walked\n\xff\xfe,abc\n";
        let err = read_clusters(input).unwrap_err();
        assert!(matches!(err, InflectError::Csv { .. }));
    }
}
