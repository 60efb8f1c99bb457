//! Skeleton graph: keypoints, the edges ("bones") between them and one
//! color per edge.
//!
//! Keypoints have no identity beyond their position in the list. Deleting a
//! keypoint shifts every later index down by one and the edge list is
//! renumbered to match.

use std::fmt;

use rand::Rng;
use tracing::debug;

// ── Geometry ────────────────────────────────────────────────────────────────

/// A position on the canvas, in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

// ── Color ───────────────────────────────────────────────────────────────────

/// 24-bit RGB color, displayed as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniformly random over the whole RGB cube.
    pub fn random() -> Self {
        let value: u32 = rand::rng().random_range(0..=0x00FF_FFFF);
        Self::from_u32(value)
    }

    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ── Edge ────────────────────────────────────────────────────────────────────

/// A bone between two keypoints. Direction only affects draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
}

impl Edge {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn touches(self, index: usize) -> bool {
        self.start == index || self.end == index
    }

    /// Endpoints renumbered for the removal of keypoint `removed`.
    fn shifted_past(self, removed: usize) -> Self {
        let shift = |i: usize| if i > removed { i - 1 } else { i };
        Self {
            start: shift(self.start),
            end: shift(self.end),
        }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

// ── Graph Store ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct Skeleton {
    keypoints: Vec<Point>,
    edges: Vec<Edge>,
    colors: Vec<Color>,
}

impl Skeleton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a skeleton and gives every edge a random color.
    ///
    /// # Panics
    ///
    /// If an edge refers to a keypoint that is not in `keypoints`.
    pub fn from_parts(keypoints: Vec<Point>, edges: Vec<Edge>) -> Self {
        for edge in &edges {
            assert!(
                edge.start < keypoints.len() && edge.end < keypoints.len(),
                "edge {edge:?} out of range for {} keypoints",
                keypoints.len()
            );
        }
        let mut skeleton = Self {
            keypoints,
            edges,
            colors: Vec::new(),
        };
        skeleton.randomize_colors();
        skeleton
    }

    pub fn keypoints(&self) -> &[Point] {
        &self.keypoints
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty() && self.edges.is_empty()
    }

    /// Appends a keypoint and returns its index.
    pub fn add_keypoint(&mut self, pos: Point) -> usize {
        let index = self.keypoints.len();
        self.keypoints.push(pos);
        debug!(index, x = pos.x, y = pos.y, "added keypoint");
        index
    }

    /// # Panics
    ///
    /// If `index` is out of range.
    pub fn move_keypoint(&mut self, index: usize, pos: Point) {
        self.keypoints[index] = pos;
    }

    /// Removes a keypoint together with every edge touching it, then
    /// renumbers the surviving edges.
    ///
    /// # Panics
    ///
    /// If `index` is out of range.
    pub fn delete_keypoint(&mut self, index: usize) -> Point {
        let removed = self.keypoints.remove(index);

        let mut kept_edges = Vec::with_capacity(self.edges.len());
        let mut kept_colors = Vec::with_capacity(self.colors.len());
        for (i, edge) in self.edges.iter().enumerate() {
            if edge.touches(index) {
                continue;
            }
            kept_edges.push(edge.shifted_past(index));
            if let Some(color) = self.colors.get(i) {
                kept_colors.push(*color);
            }
        }
        let dropped = self.edges.len() - kept_edges.len();
        self.edges = kept_edges;
        self.colors = kept_colors;

        debug!(index, dropped_edges = dropped, "deleted keypoint");
        removed
    }

    /// Appends an edge with a fresh random color. Duplicates and self-loops
    /// are not rejected here.
    ///
    /// # Panics
    ///
    /// If either endpoint is out of range.
    pub fn add_edge(&mut self, start: usize, end: usize) {
        assert!(
            start < self.keypoints.len() && end < self.keypoints.len(),
            "edge ({start}, {end}) out of range for {} keypoints",
            self.keypoints.len()
        );
        let color = Color::random();
        self.edges.push(Edge::new(start, end));
        self.colors.push(color);
        debug!(start, end, %color, "added edge");
    }

    pub fn reset(&mut self) {
        self.keypoints.clear();
        self.edges.clear();
        self.colors.clear();
    }

    /// One new random color per edge; previous colors are discarded.
    pub fn randomize_colors(&mut self) {
        self.colors = self.edges.iter().map(|_| Color::random()).collect();
    }

    /// Stored color of edge `index`, or a random one when none is stored.
    pub fn color_for(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or_else(Color::random)
    }

    /// Appends keypoints and already-numbered edges. Colors are not touched;
    /// callers follow up with [`Skeleton::randomize_colors`].
    pub(crate) fn extend(&mut self, keypoints: &[Point], edges: &[Edge]) {
        self.keypoints.extend_from_slice(keypoints);
        debug_assert!(edges
            .iter()
            .all(|e| e.start < self.keypoints.len() && e.end < self.keypoints.len()));
        self.edges.extend_from_slice(edges);
    }

    // ── Hit testing ─────────────────────────────────────────────────────────

    /// Nearest keypoint strictly closer than `2 * radius` to `pointer`.
    /// The first one wins on exact ties.
    pub fn find_closest(&self, pointer: Point, radius: f32) -> Option<usize> {
        let threshold = radius * 2.0;
        let mut best: Option<(usize, f32)> = None;
        for (i, kp) in self.keypoints.iter().enumerate() {
            let dist = kp.distance_to(pointer);
            if dist >= threshold {
                continue;
            }
            if best.map_or(true, |(_, min)| dist < min) {
                best = Some((i, dist));
            }
        }
        best.map(|(i, _)| i)
    }
}

#[cfg(test)]
#[path = "skeleton_test.rs"]
mod tests;
