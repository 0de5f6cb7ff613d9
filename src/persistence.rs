// File: src/persistence.rs
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::NamedTempFile;

/// Where scores live between sessions. The contract is "load once at
/// startup, write through on every update, default to empty on a miss";
/// the medium is the backend's business.
pub trait StorageBackend {
    fn load(&self) -> Result<HashMap<String, i32>, Error>;
    fn save(&self, scores: &HashMap<String, i32>) -> Result<(), Error>;
}

/// JSON score file, replaced atomically on every save so a crash mid-write
/// never corrupts the previous state.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageBackend for FileBackend {
    fn load(&self) -> Result<HashMap<String, i32>, Error> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| Error::new(ErrorKind::InvalidData, e))
    }

    fn save(&self, scores: &HashMap<String, i32>) -> Result<(), Error> {
        let parent_dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        let writer = BufWriter::new(&temp_file);
        serde_json::to_writer(writer, scores)
            .map_err(|e| Error::new(ErrorKind::Other, e))?;
        temp_file.persist(&self.path)?;
        Ok(())
    }
}

/// Session-only storage. Cloning shares the underlying map, which lets a
/// test hold a handle and observe what the store wrote through.
#[derive(Default, Clone)]
pub struct MemoryBackend {
    scores: Rc<RefCell<HashMap<String, i32>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> HashMap<String, i32> {
        self.scores.borrow().clone()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Result<HashMap<String, i32>, Error> {
        Ok(self.scores.borrow().clone())
    }

    fn save(&self, scores: &HashMap<String, i32>) -> Result<(), Error> {
        *self.scores.borrow_mut() = scores.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_backend_round_trips_scores() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("scores.json"));

        let mut scores = HashMap::new();
        scores.insert("ni3hao3".to_string(), 7);
        scores.insert("shu4xue2".to_string(), -3);
        backend.save(&scores).unwrap();

        assert_eq!(backend.load().unwrap(), scores);
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("nope").join("scores.json"));
        assert!(backend.load().unwrap().is_empty());
    }

    #[test]
    fn memory_backend_shares_state_across_clones() {
        let backend = MemoryBackend::new();
        let handle = backend.clone();

        let mut scores = HashMap::new();
        scores.insert("de5".to_string(), 2);
        backend.save(&scores).unwrap();

        assert_eq!(handle.snapshot().get("de5"), Some(&2));
    }
}
