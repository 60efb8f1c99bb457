//! Skeleton annotation editor core: a keypoint/bone graph over a fixed-size
//! canvas, the pointer state machine that edits it, and flattened export.

pub mod config;
pub mod export;
pub mod history;
pub mod pointer;
pub mod presets;
pub mod render;
pub mod session;
pub mod skeleton;
pub mod workspace;

pub use config::EditorConfig;
pub use render::{DrawCommand, Style};
pub use session::{EditorSession, Mode};
pub use skeleton::{Color, Edge, Point, Skeleton};
pub use workspace::{Workspace, WorkspaceError};
