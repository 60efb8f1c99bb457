//! Editor defaults: canvas size, folder names, slider ranges and the
//! starting style, plus the optional image argument.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::render::Style;

#[derive(Clone, Debug)]
pub struct EditorConfig {
    /// Side of the square canvas, in pixels. Loaded images are resized to it
    /// and exports are rendered at it.
    pub canvas_size: u32,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Exports are named `{output_prefix}{n}.png`.
    pub output_prefix: String,
    pub thickness_range: RangeInclusive<u32>,
    pub radius_range: RangeInclusive<u32>,
    pub style: Style,
    /// Image opened at start-up, if any.
    pub initial_image: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_size: 480,
            input_dir: PathBuf::from("sample"),
            output_dir: PathBuf::from("result"),
            output_prefix: "skeleton_".to_owned(),
            thickness_range: 1..=10,
            radius_range: 1..=10,
            style: Style::default(),
            initial_image: None,
        }
    }
}

impl EditorConfig {
    /// `skeleton-draw [IMAGE]`; extra arguments are ignored.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            initial_image: args.into_iter().nth(1).map(PathBuf::from),
            ..Self::default()
        }
    }
}
