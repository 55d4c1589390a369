use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use log::*;
use thiserror::Error;
use crate::doc::SnapshotDoc;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("snapshot store unreachable: {0}")]
    Io(#[from] io::Error),
    #[error("malformed snapshot document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot store is empty; run `run` to start a game first")]
    Empty,
}

//the persistence seam the engine writes through: one snapshot per turn,
//keyed by turn number, so the history is append-only
pub trait SnapshotStore {
    //drops any previous game history
    fn reset(&mut self) -> Result<(), StoreError>;
    fn append(&mut self, doc: &SnapshotDoc) -> Result<(), StoreError>;
    //the snapshot with the highest turn number, if any
    fn load_latest(&self) -> Result<Option<SnapshotDoc>, StoreError>;
}

//directory of JSON documents; the polling visualizer reads the same files.
//no retries anywhere: failures surface to the caller as-is
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {

    //an uncreatable directory here is the unreachable-database case
    pub fn open(dir: &Path) -> Result<FileStore, StoreError> {
        fs::create_dir_all(dir)?;
        Ok(FileStore {dir: dir.to_path_buf()})
    }

    fn doc_path(&self, turn: u32) -> PathBuf {
        self.dir.join(format!("turn-{:08}.json", turn))
    }

    fn doc_files(&self) -> Result<Vec<PathBuf>, StoreError> {
        let mut files = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .map_or(false, |n| n.starts_with("turn-") && n.ends_with(".json"))
            })
            .collect::<Vec<_>>();
        files.sort();
        Ok(files)
    }
}

impl SnapshotStore for FileStore {

    fn reset(&mut self) -> Result<(), StoreError> {
        let stale = self.doc_files()?;
        if !stale.is_empty() {
            info!("Dropping {} snapshot(s) from {}", stale.len(), self.dir.display());
        }
        for path in stale {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn append(&mut self, doc: &SnapshotDoc) -> Result<(), StoreError> {
        let path = self.doc_path(doc.turn);
        fs::write(&path, serde_json::to_vec_pretty(doc)?)?;
        debug!("Wrote snapshot for turn {} to {}", doc.turn, path.display());
        Ok(())
    }

    fn load_latest(&self) -> Result<Option<SnapshotDoc>, StoreError> {
        //zero-padded turn numbers make lexicographic max the latest turn
        match self.doc_files()?.last() {
            None => Ok(None),
            Some(path) => {
                let doc = serde_json::from_slice(&fs::read(path)?)?;
                Ok(Some(doc))
            }
        }
    }
}

//test double holding the history in memory
#[cfg(test)]
pub struct MemStore {
    pub docs: Vec<SnapshotDoc>,
}

#[cfg(test)]
impl MemStore {
    pub fn new() -> MemStore {
        MemStore {docs: Vec::new()}
    }
}

#[cfg(test)]
impl SnapshotStore for MemStore {
    fn reset(&mut self) -> Result<(), StoreError> {
        self.docs.clear();
        Ok(())
    }

    fn append(&mut self, doc: &SnapshotDoc) -> Result<(), StoreError> {
        self.docs.push(doc.clone());
        Ok(())
    }

    fn load_latest(&self) -> Result<Option<SnapshotDoc>, StoreError> {
        Ok(self.docs.iter().max_by_key(|d| d.turn).cloned())
    }
}
