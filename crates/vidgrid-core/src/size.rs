// ABOUTME: Viewport dimensions and orientation.
// ABOUTME: The measured box of the container that tiles are laid out into.

use serde::{Deserialize, Serialize};

/// Screen orientation, derived from the viewport aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Measured size of the container that hosts the tile grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// A square viewport counts as landscape
    pub fn orientation(&self) -> Orientation {
        if self.height > self.width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
