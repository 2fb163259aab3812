//! Bitmap Editor
//!
//! An in-memory raster editor: a fixed-size grid of single-letter colours
//! that can be painted pixel by pixel, painted along horizontal and vertical
//! segments, cleared, bucket-filled and rendered to text.
//!
//! # Features
//!
//! - **Bitmap core**: every operation validates its arguments before writing,
//!   so a rejected call never leaves a half-painted grid
//! - **Flood fill**: strictly 4-connected, iterative, each cell visited once
//! - **Command dispatcher**: a thin line-oriented interpreter over the core
//!
//! # Example
//!
//! ```
//! use bitmap_editor::Bitmap;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut bitmap = Bitmap::new(5, 5)?;
//! bitmap.set_colour(3, 2, 'A')?;
//! bitmap.set_colour(2, 3, 'A')?;
//! bitmap.set_colour(4, 3, 'A')?;
//! bitmap.set_colour(3, 4, 'A')?;
//! bitmap.fill_bucket(3, 3, 'K')?;
//! assert_eq!(bitmap.render(), "OOOOO\nOOAOO\nOAKAO\nOOAOO\nOOOOO\n");
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod bitmap;
pub mod colour;
pub mod editor;
pub mod fill;
pub mod snapshot;

pub use bitmap::Bitmap;
pub use colour::Colour;
pub use editor::{Command, Editor, RunSummary};
pub use snapshot::Snapshot;

/// How the `S` command prints the bitmap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Newline-terminated rows of colour letters
    #[default]
    Text,
    /// One JSON [`Snapshot`] per line
    Json,
}

/// Configuration for the command dispatcher
///
/// The defaults match the classic behaviour of the tool: every command line
/// is echoed before its output and a bad line does not stop the run.
///
/// Fields missing from a JSON config file keep their default values.
///
/// # Examples
///
/// ```
/// let cfg = bitmap_editor::EditorConfig::default();
/// assert!(cfg.echo_commands);
/// assert!(!cfg.stop_on_error);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Print each command line before running it
    pub echo_commands: bool,
    /// Abort the run on the first rejected line
    pub stop_on_error: bool,
    /// Output format of the `S` command
    pub output: OutputFormat,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            echo_commands: true,
            stop_on_error: false,
            output: OutputFormat::Text,
        }
    }
}

impl EditorConfig {
    /// Read a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
