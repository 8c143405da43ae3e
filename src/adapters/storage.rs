use crate::domain::model::Position;
use crate::domain::ports::PositionStore;
use crate::utils::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Keeps the position for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPositionStore {
    slot: Option<Position>,
}

impl InMemoryPositionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(position: Position) -> Self {
        Self {
            slot: Some(position),
        }
    }
}

impl PositionStore for InMemoryPositionStore {
    fn get(&self) -> Result<Option<Position>> {
        Ok(self.slot)
    }

    fn set(&mut self, position: Position) -> Result<bool> {
        self.slot = Some(position);
        Ok(true)
    }
}

/// Keeps the position as a single JSON document on disk.
///
/// A missing file reads as an unplaced robot. Every write replaces the file.
#[derive(Debug, Clone)]
pub struct JsonFilePositionStore {
    path: PathBuf,
}

impl JsonFilePositionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PositionStore for JsonFilePositionStore {
    fn get(&self) -> Result<Option<Position>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let position = serde_json::from_slice(&data)?;
        Ok(Some(position))
    }

    fn set(&mut self, position: Position) -> Result<bool> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_vec(&position)?;
        fs::write(&self.path, data)?;
        tracing::debug!("wrote {} to {}", position, self.path.display());
        Ok(true)
    }
}
