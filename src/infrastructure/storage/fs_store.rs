use crate::domain::storage::ObservationStore;
use crate::domain::{Observation, ObservationDraft};
use crate::error::Result;
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Append-only observation log on disk, one JSON record per line.
///
/// Inserts only ever append, which keeps concurrent multi-platform writes
/// commutative; queries re-read the full log and filter.
#[derive(Clone)]
pub struct FileSystemStore {
    data_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn log_path(&self) -> PathBuf {
        self.data_dir.join("observations.jsonl")
    }

    fn read_log(&self) -> Result<Vec<Observation>> {
        let path = self.log_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| Ok(serde_json::from_str(line)?))
            .collect()
    }
}

impl ObservationStore for FileSystemStore {
    fn insert_batch(&self, drafts: Vec<ObservationDraft>) -> Result<Vec<Observation>> {
        for draft in &drafts {
            draft.validate()?;
        }

        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_path())?;

        let observed_at = Utc::now();
        let mut stored = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let obs = draft.into_observation(observed_at);
            let line = serde_json::to_string(&obs)?;
            writeln!(file, "{line}")?;
            stored.push(obs);
        }

        Ok(stored)
    }

    fn observations_for_hotel(&self, hotel_id: &str) -> Result<Vec<Observation>> {
        Ok(self
            .read_log()?
            .into_iter()
            .filter(|o| o.hotel_id == hotel_id)
            .collect())
    }

    fn observations_for_hotels(&self, hotel_ids: &[&str]) -> Result<Vec<Observation>> {
        Ok(self
            .read_log()?
            .into_iter()
            .filter(|o| hotel_ids.contains(&o.hotel_id.as_str()))
            .collect())
    }
}
