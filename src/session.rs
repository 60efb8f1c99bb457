//! Editing session: the skeleton plus everything the pointer handlers need.
//!
//! The front end feeds canvas-local pointer positions into [`EditorSession::press`],
//! [`EditorSession::drag`] and [`EditorSession::release`] and draws whatever
//! [`EditorSession::scene`] returns afterwards.

use tracing::{debug, warn};

use crate::history::History;
use crate::presets;
use crate::render::{self, DrawCommand, Overlay, Style};
use crate::skeleton::{Point, Skeleton};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Drag keypoints around.
    #[default]
    Normal,
    /// Press and release to connect (or create) two keypoints.
    ManualLine,
    /// Press on a keypoint to remove it.
    Delete,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Gesture {
    #[default]
    Idle,
    Dragging {
        index: usize,
    },
    Linking {
        start: usize,
        cursor: Point,
    },
}

#[derive(Clone, Debug, Default)]
pub struct EditorSession {
    skeleton: Skeleton,
    pub style: Style,
    mode: Mode,
    gesture: Gesture,
    history: History,
}

impl EditorSession {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn with_skeleton(skeleton: Skeleton, style: Style) -> Self {
        Self {
            skeleton,
            style,
            ..Self::default()
        }
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!(from = ?self.mode, to = ?mode, "mode changed");
            self.mode = mode;
            self.gesture = Gesture::Idle;
        }
    }

    /// Switches manual-line mode on, or back to normal if it is already on.
    pub fn toggle_manual_line(&mut self) {
        self.toggle(Mode::ManualLine);
    }

    /// Switches delete mode on, or back to normal if it is already on.
    pub fn toggle_delete(&mut self) {
        self.toggle(Mode::Delete);
    }

    fn toggle(&mut self, mode: Mode) {
        let next = if self.mode == mode { Mode::Normal } else { mode };
        self.set_mode(next);
    }

    /// Keypoint currently being dragged in normal mode.
    pub fn dragged(&self) -> Option<usize> {
        match self.gesture {
            Gesture::Dragging { index } => Some(index),
            _ => None,
        }
    }

    /// Keypoint a manual line is being drawn from.
    pub fn line_start(&self) -> Option<usize> {
        match self.gesture {
            Gesture::Linking { start, .. } => Some(start),
            _ => None,
        }
    }

    /// Uncommitted line from the start keypoint to the pointer.
    pub fn preview_line(&self) -> Option<(Point, Point)> {
        match self.gesture {
            Gesture::Linking { start, cursor } => self
                .skeleton
                .keypoints()
                .get(start)
                .map(|&from| (from, cursor)),
            _ => None,
        }
    }

    fn hit(&self, p: Point) -> Option<usize> {
        self.skeleton.find_closest(p, self.style.radius())
    }

    fn hit_or_add(&mut self, p: Point) -> usize {
        match self.hit(p) {
            Some(index) => index,
            None => self.skeleton.add_keypoint(p),
        }
    }

    // ── Pointer events ──────────────────────────────────────────────────────

    pub fn press(&mut self, p: Point) {
        match self.mode {
            Mode::Delete => {
                if let Some(index) = self.hit(p) {
                    self.skeleton.delete_keypoint(index);
                }
            }
            Mode::ManualLine => {
                let start = self.hit_or_add(p);
                self.gesture = Gesture::Linking { start, cursor: p };
            }
            Mode::Normal => {
                if let Some(index) = self.hit(p) {
                    self.history
                        .record_move(index, self.skeleton.keypoints()[index]);
                    self.gesture = Gesture::Dragging { index };
                }
            }
        }
    }

    pub fn drag(&mut self, p: Point) {
        match &mut self.gesture {
            Gesture::Idle => {}
            Gesture::Dragging { index } if *index < self.skeleton.keypoints().len() => {
                self.skeleton.move_keypoint(*index, p);
            }
            Gesture::Dragging { .. } => {}
            Gesture::Linking { cursor, .. } => *cursor = p,
        }
    }

    pub fn release(&mut self, p: Point) {
        if let Gesture::Linking { start, .. } = self.gesture {
            if start >= self.skeleton.keypoints().len() {
                self.gesture = Gesture::Idle;
                return;
            }
            let end = self.hit_or_add(p);
            if start != end {
                self.skeleton.add_edge(start, end);
            } else {
                debug!(index = start, "line released on its own start");
            }
        }
        self.gesture = Gesture::Idle;
    }

    // ── Commands ────────────────────────────────────────────────────────────

    pub fn undo(&mut self) -> Option<usize> {
        self.history.undo(&mut self.skeleton)
    }

    pub fn reset(&mut self) {
        self.skeleton.reset();
        self.gesture = Gesture::Idle;
    }

    /// Replaces the current skeleton with the built-in body.
    pub fn load_default_skeleton(&mut self) {
        self.skeleton = presets::default_body();
        self.gesture = Gesture::Idle;
    }

    /// Appends both hands, wired to the wrist keypoints, and recolors every
    /// edge. Does nothing if the wrists are missing.
    pub fn add_fingers(&mut self) -> bool {
        let len = self.skeleton.keypoints().len();
        if len <= presets::RIGHT_WRIST.max(presets::LEFT_WRIST) {
            warn!(keypoints = len, "cannot add fingers without both wrist keypoints");
            return false;
        }
        let (keypoints, edges) = presets::hands(len);
        self.skeleton.extend(&keypoints, &edges);
        self.skeleton.randomize_colors();
        debug!(added = keypoints.len(), "added fingers");
        true
    }

    /// Gives every edge a new random color.
    pub fn randomize_colors(&mut self) {
        self.skeleton.randomize_colors();
    }

    /// Render instructions for the interactive canvas.
    pub fn scene(&self) -> Vec<DrawCommand> {
        render::scene(&self.skeleton, &self.style, Overlay::canvas(self.preview_line()))
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
