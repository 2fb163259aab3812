//! Serializable dump of a bitmap, used for JSON output and golden tests

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::Bitmap;

/// A point-in-time copy of a bitmap's contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    /// Rows top to bottom, one character per column
    pub rows: Vec<String>,
    /// Lowercase hex SHA-256 of the rendered text
    pub sha256: String,
}

impl Snapshot {
    /// Rebuild the newline-terminated text form from `rows`.
    pub fn text(&self) -> String {
        self.rows.iter().map(|r| format!("{}\n", r)).collect()
    }
}

/// Hex digest of a rendered bitmap
pub fn digest(rendered: &str) -> String {
    hex::encode(Sha256::digest(rendered.as_bytes()))
}

impl Bitmap {
    pub fn snapshot(&self) -> Snapshot {
        let (width, height) = self.size();
        Snapshot {
            width,
            height,
            rows: self.rows().collect(),
            sha256: digest(&self.render()),
        }
    }
}
