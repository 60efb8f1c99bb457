//! Input and output folders.
//!
//! Images to annotate are picked from the input folder; exports go to the
//! output folder under the first free `{prefix}{n}.png` name. Both folders
//! are created when missing.

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{RgbImage, RgbaImage};
use tracing::{debug, info};

use crate::config::EditorConfig;
use crate::export;
use crate::render::Style;
use crate::skeleton::Skeleton;

const IMAGE_EXTENSIONS: [&str; 2] = ["png", "jpg"];

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Clone, Debug)]
pub struct Workspace {
    input_dir: PathBuf,
    output_dir: PathBuf,
    output_prefix: String,
    canvas_size: u32,
}

impl Workspace {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            input_dir: config.input_dir.clone(),
            output_dir: config.output_dir.clone(),
            output_prefix: config.output_prefix.clone(),
            canvas_size: config.canvas_size,
        }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File names of the png/jpg images in the input folder, sorted.
    pub fn list_images(&self) -> Result<Vec<String>, WorkspaceError> {
        fs::create_dir_all(&self.input_dir)?;
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.input_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            if is_image(&path) {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_owned());
                }
            }
        }
        names.sort();
        debug!(dir = %self.input_dir.display(), count = names.len(), "listed images");
        Ok(names)
    }

    pub fn input_path(&self, name: &str) -> PathBuf {
        self.input_dir.join(name)
    }

    /// Opens an image and resizes it to the canvas.
    pub fn load_image(&self, path: &Path) -> Result<RgbaImage, WorkspaceError> {
        let img = image::open(path)?;
        let resized = img
            .resize_exact(self.canvas_size, self.canvas_size, FilterType::Lanczos3)
            .to_rgba8();
        info!(path = %path.display(), "loaded image");
        Ok(resized)
    }

    /// First `{prefix}{n}.png` in the output folder that does not exist yet,
    /// counting from zero.
    pub fn next_output_path(&self) -> Result<PathBuf, WorkspaceError> {
        fs::create_dir_all(&self.output_dir)?;
        let mut n = 0usize;
        loop {
            let path = self
                .output_dir
                .join(format!("{}{n}.png", self.output_prefix));
            if !path.exists() {
                return Ok(path);
            }
            n += 1;
        }
    }

    /// Flattens `skeleton` and saves it. Without a loaded `background` there
    /// is nothing to annotate, so nothing is written and `Ok(None)` comes back.
    pub fn save_flattened(
        &self,
        background: Option<&RgbaImage>,
        skeleton: &Skeleton,
        style: &Style,
    ) -> Result<Option<PathBuf>, WorkspaceError> {
        if background.is_none() {
            debug!("no image loaded; nothing to save");
            return Ok(None);
        }
        let flat = export::flatten(skeleton, style, self.canvas_size);
        self.save_export(&flat).map(Some)
    }

    pub fn save_export(&self, img: &RgbImage) -> Result<PathBuf, WorkspaceError> {
        let path = self.next_output_path()?;
        img.save(&path)?;
        info!(path = %path.display(), "exported skeleton");
        Ok(path)
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

#[cfg(test)]
#[path = "workspace_test.rs"]
mod tests;
