use crate::error::{InflectError, Result};
use crate::morphology::InflectionRecord;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    records: BTreeMap<Uuid, InflectionRecord>,
}

/// Durable cluster-id to record mapping, kept as JSON between runs.
///
/// Keys are per-cluster, so two clusters that happen to share a root are
/// both kept; writing the same cluster again replaces its earlier record.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: BTreeMap<Uuid, InflectionRecord>,
}

impl RecordStore {
    /// Loads `path` if it exists, otherwise starts empty.
    pub fn open(path: &Path) -> Result<Self> {
        let records = match fs::read_to_string(path) {
            Ok(json) => {
                let file: StoreFile =
                    serde_json::from_str(&json).map_err(|source| InflectError::Store {
                        path: path.to_path_buf(),
                        source,
                    })?;
                info!(
                    "Loaded {} stored records from {:?}",
                    file.records.len(),
                    path
                );
                file.records
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No record store at {:?}, starting empty", path);
                BTreeMap::new()
            }
            Err(e) => {
                error!("Failed to read record store {:?}: {}", path, e);
                return Err(e.into());
            }
        };

        Ok(RecordStore {
            path: path.to_path_buf(),
            records,
        })
    }

    /// An empty store that will overwrite `path` on save.
    pub fn fresh(path: &Path) -> Self {
        RecordStore {
            path: path.to_path_buf(),
            records: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, record: InflectionRecord) -> Option<InflectionRecord> {
        let previous = self.records.insert(record.cluster_id, record);
        if let Some(previous) = &previous {
            debug!(
                "Replaced stored record {} (root {:?})",
                previous.cluster_id, previous.root
            );
        }
        previous
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = InflectionRecord>) {
        for record in records {
            self.insert(record);
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &InflectionRecord> {
        self.records.values()
    }

    pub fn get(&self, cluster_id: &Uuid) -> Option<&InflectionRecord> {
        self.records.get(cluster_id)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn save(&self) -> Result<()> {
        info!(
            "Saving {} records to {:?}",
            self.records.len(),
            self.path
        );

        let file = StoreFile {
            records: self.records.clone(),
        };
        let json = match serde_json::to_string_pretty(&file) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize record store: {}", e);
                return Err(InflectError::Store {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        match fs::write(&self.path, &json) {
            Ok(_) => {
                info!("Wrote {} bytes to {:?}", json.len(), self.path);
                Ok(())
            }
            Err(e) => {
                error!("Failed to write record store {:?}: {}", self.path, e);
                Err(e.into())
            }
        }
    }
}
