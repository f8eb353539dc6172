//! Storage for the recorded input log.
//!
//! A save is the raw log text and nothing else: loading it means replaying it
//! from a fresh session. `FileStore` overwrites atomically through a sibling
//! temp file so an interrupted save never leaves a half-written log behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to read save file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write save file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub trait SaveStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<String>, SaveError>;
    fn save(&mut self, log: &str) -> Result<(), SaveError>;
}

#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomic(&self, log: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("txt.tmp");
        fs::write(&tmp_path, log)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl SaveStore for FileStore {
    fn load(&self) -> Result<Option<String>, SaveError> {
        match fs::read_to_string(&self.path) {
            Ok(log) => Ok(Some(log)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SaveError::Read { path: self.path.clone(), source }),
        }
    }

    fn save(&mut self, log: &str) -> Result<(), SaveError> {
        self.write_atomic(log)
            .map_err(|source| SaveError::Write { path: self.path.clone(), source })
    }
}

/// In-process store for tests and scripted tools.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    contents: Option<String>,
}

impl MemoryStore {
    pub fn with_contents(log: impl Into<String>) -> Self {
        Self { contents: Some(log.into()) }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl SaveStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, SaveError> {
        Ok(self.contents.clone())
    }

    fn save(&mut self, log: &str) -> Result<(), SaveError> {
        self.contents = Some(log.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests;
