//! Render instruction list shared by the canvas view and the export.

use crate::skeleton::{Color, Point, Skeleton};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub line_thickness: u32,
    pub keypoint_radius: u32,
}

impl Style {
    pub fn radius(&self) -> f32 {
        self.keypoint_radius as f32
    }

    pub fn thickness(&self) -> f32 {
        self.line_thickness as f32
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            line_thickness: 2,
            keypoint_radius: 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f32,
    },
    Disc {
        center: Point,
        radius: f32,
        color: Color,
    },
    Label {
        pos: Point,
        text: String,
        color: Color,
    },
}

/// What goes on top of the bare skeleton.
#[derive(Clone, Copy, Debug, Default)]
pub struct Overlay {
    pub labels: bool,
    /// Draw edges over the keypoints instead of under them.
    pub bones_on_top: bool,
    pub preview: Option<(Point, Point)>,
}

impl Overlay {
    /// Flattened output: no labels, no in-progress line.
    pub const EXPORT: Overlay = Overlay {
        labels: false,
        bones_on_top: false,
        preview: None,
    };

    /// Canvas view: numbered keypoints with the bones drawn over them.
    pub fn canvas(preview: Option<(Point, Point)>) -> Self {
        Self {
            labels: true,
            bones_on_top: true,
            preview,
        }
    }
}

/// Edges and keypoints (with their index above them when labels are on) in
/// the order the overlay asks for, then the preview line.
pub fn scene(skeleton: &Skeleton, style: &Style, overlay: Overlay) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(
        skeleton.edges().len()
            + skeleton.keypoints().len() * if overlay.labels { 2 } else { 1 }
            + 1,
    );

    if overlay.bones_on_top {
        push_keypoints(&mut commands, skeleton, style, overlay.labels);
        push_edges(&mut commands, skeleton, style);
    } else {
        push_edges(&mut commands, skeleton, style);
        push_keypoints(&mut commands, skeleton, style, overlay.labels);
    }

    if let Some((from, to)) = overlay.preview {
        commands.push(DrawCommand::Line {
            from,
            to,
            color: Color::WHITE,
            width: style.thickness(),
        });
    }

    commands
}

fn push_edges(commands: &mut Vec<DrawCommand>, skeleton: &Skeleton, style: &Style) {
    let keypoints = skeleton.keypoints();
    for (i, edge) in skeleton.edges().iter().enumerate() {
        commands.push(DrawCommand::Line {
            from: keypoints[edge.start],
            to: keypoints[edge.end],
            color: skeleton.color_for(i),
            width: style.thickness(),
        });
    }
}

fn push_keypoints(
    commands: &mut Vec<DrawCommand>,
    skeleton: &Skeleton,
    style: &Style,
    labels: bool,
) {
    let radius = style.radius();
    for (i, &center) in skeleton.keypoints().iter().enumerate() {
        commands.push(DrawCommand::Disc {
            center,
            radius,
            color: Color::WHITE,
        });
        if labels {
            commands.push(DrawCommand::Label {
                pos: Point::new(center.x, center.y - radius - 5.0),
                text: i.to_string(),
                color: Color::WHITE,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::Edge;

    fn two_points() -> Skeleton {
        Skeleton::from_parts(
            vec![Point::new(10.0, 10.0), Point::new(50.0, 10.0)],
            vec![Edge::new(0, 1)],
        )
    }

    #[test]
    fn export_scene_has_no_labels() {
        let commands = scene(&two_points(), &Style::default(), Overlay::EXPORT);
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], DrawCommand::Line { .. }));
        assert!(commands[1..]
            .iter()
            .all(|c| matches!(c, DrawCommand::Disc { .. })));
    }

    #[test]
    fn labels_sit_above_keypoints() {
        let commands = scene(&two_points(), &Style::default(), Overlay::canvas(None));
        let labels: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Label { pos, text, .. } => Some((*pos, text.as_str())),
                _ => None,
            })
            .collect();
        assert_eq!(
            labels,
            vec![(Point::new(10.0, 0.0), "0"), (Point::new(50.0, 0.0), "1")]
        );
    }

    #[test]
    fn preview_line_is_drawn_last() {
        let overlay = Overlay {
            preview: Some((Point::new(10.0, 10.0), Point::new(80.0, 80.0))),
            ..Overlay::EXPORT
        };
        let commands = scene(&two_points(), &Style::default(), overlay);
        assert_eq!(
            commands.last(),
            Some(&DrawCommand::Line {
                from: Point::new(10.0, 10.0),
                to: Point::new(80.0, 80.0),
                color: Color::WHITE,
                width: 2.0,
            })
        );
    }

    #[test]
    fn edge_lines_use_stored_colors() {
        let skeleton = two_points();
        let commands = scene(&skeleton, &Style::default(), Overlay::EXPORT);
        let DrawCommand::Line { color, width, .. } = &commands[0] else {
            panic!("expected a line first");
        };
        assert_eq!(*color, skeleton.colors()[0]);
        assert_eq!(*width, 2.0);
    }

    #[test]
    fn canvas_scene_draws_bones_over_keypoints() {
        let commands = scene(&two_points(), &Style::default(), Overlay::canvas(None));
        let kinds: Vec<&str> = commands
            .iter()
            .map(|c| match c {
                DrawCommand::Line { .. } => "line",
                DrawCommand::Disc { .. } => "disc",
                DrawCommand::Label { .. } => "label",
            })
            .collect();
        assert_eq!(kinds, vec!["disc", "label", "disc", "label", "line"]);
    }

    #[test]
    fn empty_skeleton_has_empty_scene() {
        assert!(scene(&Skeleton::new(), &Style::default(), Overlay::EXPORT).is_empty());
    }
}
