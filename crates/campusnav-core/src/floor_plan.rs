//! Floor-plan upload validation.
//!
//! Clients may upload a hand-tuned plan (custom textures, decorations) for
//! a floor. Before it is stored opaquely on the `Floor`, the payload's
//! declared grid size must match what `calculate_floor_map` emits for the
//! owning building, and texture paths must look like real image files.

use campusnav_domain::Floor;
use serde::Deserialize;
use thiserror::Error;

const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif"];

#[derive(Debug, Error)]
pub enum FloorPlanError {
    #[error("floor plan is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("maze size {actual_width}x{actual_length} does not match the building grid {expected_width}x{expected_length}")]
    SizeMismatch {
        expected_width: i32,
        expected_length: i32,
        actual_width: i32,
        actual_length: i32,
    },

    #[error("texture path {0:?} is empty or not an image file")]
    BadTexturePath(String),
}

/// Declared grid size of the uploaded plan.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MazeSize {
    pub width: i32,
    pub length: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Maze {
    pub size: MazeSize,
    /// Optional pre-rendered grid; the server regenerates it anyway.
    #[serde(default)]
    pub map: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Textures {
    pub ground: String,
    pub wall: String,
    #[serde(default)]
    pub door: Option<String>,
    #[serde(default)]
    pub elevator: Option<String>,
}

/// The uploaded payload, as far as the core cares. Unknown fields pass
/// through untouched — the blob is stored verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct FloorPlanPayload {
    pub maze: Maze,
    pub textures: Textures,
}

/// Validates uploads against the owning floor's building.
pub struct FloorPlanValidator;

impl FloorPlanValidator {
    /// Parse and check `raw_json` for `floor`. Returns the parsed payload
    /// so callers can inspect it; the raw string is what gets stored.
    pub fn validate(raw_json: &str, floor: &Floor) -> Result<FloorPlanPayload, FloorPlanError> {
        let payload: FloorPlanPayload = serde_json::from_str(raw_json)?;

        let dims = floor.building().dimensions();
        let expected_width = dims.width() + 1;
        let expected_length = dims.length() + 1;
        if payload.maze.size.width != expected_width
            || payload.maze.size.length != expected_length
        {
            return Err(FloorPlanError::SizeMismatch {
                expected_width,
                expected_length,
                actual_width: payload.maze.size.width,
                actual_length: payload.maze.size.length,
            });
        }

        check_texture(&payload.textures.ground)?;
        check_texture(&payload.textures.wall)?;
        for optional in [&payload.textures.door, &payload.textures.elevator] {
            if let Some(path) = optional {
                check_texture(path)?;
            }
        }

        Ok(payload)
    }
}

fn check_texture(path: &str) -> Result<(), FloorPlanError> {
    let lower = path.to_ascii_lowercase();
    if path.trim().is_empty() || !IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        return Err(FloorPlanError::BadTexturePath(path.to_string()));
    }
    Ok(())
}
