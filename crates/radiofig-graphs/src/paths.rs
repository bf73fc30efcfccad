//! Output-path resolution under the images root.

use radiofig_common::{Category, FigureError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default images root, relative to the working directory.
pub const IMAGES_DIR: &str = "images";

/// Maps categories to directories below a fixed images root.
///
/// Every resolution ensures the directory exists; resolving the same
/// category twice yields the same path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    /// Creates a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The images root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns `<root>/<category>`, creating it and any missing parents.
    pub fn output_dir(&self, category: &Category) -> Result<PathBuf> {
        let dir = self.root.join(category);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Returns `<root>/<category>/<filename>`, creating the directory.
    pub fn image_path(&self, category: &Category, filename: &str) -> Result<PathBuf> {
        if filename.is_empty() {
            return Err(FigureError::validation_field(
                "filename must not be empty",
                "filename",
            ));
        }
        Ok(self.output_dir(category)?.join(filename))
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(IMAGES_DIR)
    }
}
