use crate::catalog;
use mindpoint_kernel::{Level, LevelError, LevelSource};
use serde::Serialize;
use std::path::Path;

/// Errors from loading or reading a level pack.
#[derive(Debug, thiserror::Error)]
pub enum LevelSourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("level #{index} is invalid: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: LevelError,
    },
    #[error("level index {index} out of range (pack has {len})")]
    OutOfRange { index: usize, len: usize },
}

/// An ordered, validated list of levels. On disk: a JSON array of level records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LevelPack {
    levels: Vec<Level>,
}

impl LevelPack {
    /// Validate every level, reporting the first invalid index.
    pub fn from_levels(levels: Vec<Level>) -> Result<Self, LevelSourceError> {
        for (index, level) in levels.iter().enumerate() {
            level
                .validate()
                .map_err(|source| LevelSourceError::Invalid { index, source })?;
        }
        Ok(Self { levels })
    }

    /// The built-in campaign.
    pub fn builtin() -> Self {
        Self {
            levels: catalog::builtin(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LevelSourceError> {
        let levels: Vec<Level> = serde_json::from_str(json)?;
        Self::from_levels(levels)
    }

    pub fn to_json(&self) -> Result<String, LevelSourceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a pack from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelSourceError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let levels: Vec<Level> = serde_json::from_reader(std::io::BufReader::new(file))?;
        let pack = Self::from_levels(levels)?;
        tracing::info!(path = %path.display(), levels = pack.levels.len(), "level pack loaded");
        Ok(pack)
    }

    /// Save the pack as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LevelSourceError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// The level at `index`, or an error naming the pack size.
    pub fn level(&self, index: usize) -> Result<&Level, LevelSourceError> {
        self.levels.get(index).ok_or(LevelSourceError::OutOfRange {
            index,
            len: self.levels.len(),
        })
    }

    /// Position of the level with the given id.
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.levels.iter().position(|l| l.id == id)
    }

    pub fn into_levels(self) -> Vec<Level> {
        self.levels
    }
}

impl LevelSource for LevelPack {
    fn len(&self) -> usize {
        self.levels.len()
    }

    fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }
}
