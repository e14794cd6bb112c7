//! TOML level file loader.
//!
//! Rows are whitespace-separated integers, one string per grid row:
//!
//! ```toml
//! [[level]]
//! number = 1
//! rows = [
//!   "-1 1 2",
//!   " 0 3 4",
//!   "-1 0 5",
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::core::{Level, LevelCatalog};
use crate::error::LevelLoadError;
use crate::types::ANCHOR;

pub type LoadResult<T> = Result<T, LevelLoadError>;

#[derive(Debug, Deserialize)]
struct LevelFile {
    #[serde(rename = "level", default)]
    levels: Vec<LevelRecord>,
}

#[derive(Debug, Deserialize)]
struct LevelRecord {
    number: i32,
    rows: Vec<String>,
}

/// Loader for level catalogs from TOML files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level catalog from a TOML file.
    pub fn load(path: &Path) -> LoadResult<LevelCatalog> {
        let content = fs::read_to_string(path).map_err(|source| LevelLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&content)?;
        info!(path = %path.display(), levels = catalog.len(), "loaded level file");
        Ok(catalog)
    }

    /// Parse a level catalog from TOML text. Levels keep file order.
    pub fn parse(content: &str) -> LoadResult<LevelCatalog> {
        let file: LevelFile = toml::from_str(content)?;
        if file.levels.is_empty() {
            return Err(LevelLoadError::NoLevels);
        }

        let levels = file
            .levels
            .into_iter()
            .map(build_level)
            .collect::<LoadResult<Vec<_>>>()?;

        Ok(LevelCatalog::new(levels))
    }
}

fn build_level(record: LevelRecord) -> LoadResult<Level> {
    if record.rows.is_empty() {
        return Err(LevelLoadError::EmptyLevel(record.number));
    }

    let rows = record
        .rows
        .iter()
        .enumerate()
        .map(|(row, line)| parse_row(record.number, row, line))
        .collect::<LoadResult<Vec<_>>>()?;

    let level = Level::new(record.number, rows);
    if level.anchor_count() == 0 {
        warn!(level = record.number, "level has no anchors and cannot be played");
    }
    Ok(level)
}

/// Split one row on whitespace into cell values
pub fn parse_row(level: i32, row: usize, line: &str) -> LoadResult<Vec<i32>> {
    line.split_whitespace()
        .map(|token| {
            let value: i32 = token.parse().map_err(|_| LevelLoadError::InvalidCell {
                level,
                row,
                token: token.to_string(),
            })?;
            if value < ANCHOR {
                return Err(LevelLoadError::ValueOutOfRange { level, row, value });
            }
            Ok(value)
        })
        .collect()
}
