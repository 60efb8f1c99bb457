//! Turns per-frame button and position state into press / drag / release
//! calls on an [`EditorSession`].

use crate::session::EditorSession;
use crate::skeleton::Point;

/// Primary-button state for one frame, positions in canvas coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerFrame {
    pub pressed: bool,
    pub released: bool,
    pub moving: bool,
    pub pos: Option<Point>,
    pub over_canvas: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PointerRouter {
    // button went down on the canvas and has not come up yet
    captured: bool,
    last: Option<Point>,
}

impl PointerRouter {
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Feeds one frame into `session`. Returns whether anything was sent,
    /// i.e. whether the canvas needs a redraw.
    pub fn route(&mut self, session: &mut EditorSession, frame: PointerFrame) -> bool {
        let mut routed = false;
        if let Some(p) = frame.pos {
            self.last = Some(p);
            if frame.pressed && frame.over_canvas {
                self.captured = true;
                session.press(p);
                routed = true;
            } else if self.captured && frame.moving && !frame.released {
                session.drag(p);
                routed = true;
            }
        }

        // a release can come without a position once the pointer leaves
        if frame.released && self.captured {
            self.captured = false;
            if let Some(p) = self.last {
                session.release(p);
            }
            routed = true;
        }
        routed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use crate::render::Style;

    fn at(x: f32, y: f32) -> Option<Point> {
        Some(Point::new(x, y))
    }

    fn body_session() -> EditorSession {
        EditorSession::with_skeleton(presets::default_body(), Style::default())
    }

    #[test]
    fn press_move_release_drags_keypoint() {
        let mut session = body_session();
        let mut router = PointerRouter::default();

        assert!(router.route(
            &mut session,
            PointerFrame {
                pressed: true,
                pos: at(240.0, 50.0),
                over_canvas: true,
                ..PointerFrame::default()
            },
        ));
        assert!(router.route(
            &mut session,
            PointerFrame {
                moving: true,
                pos: at(100.0, 100.0),
                ..PointerFrame::default()
            },
        ));
        assert_eq!(session.skeleton().keypoints()[0], Point::new(100.0, 100.0));

        router.route(
            &mut session,
            PointerFrame {
                released: true,
                pos: at(100.0, 100.0),
                ..PointerFrame::default()
            },
        );
        assert!(!router.is_captured());
        assert_eq!(session.dragged(), None);
    }

    #[test]
    fn release_without_position_still_ends_drag() {
        let mut session = body_session();
        let mut router = PointerRouter::default();
        router.route(
            &mut session,
            PointerFrame {
                pressed: true,
                pos: at(240.0, 50.0),
                over_canvas: true,
                ..PointerFrame::default()
            },
        );
        router.route(
            &mut session,
            PointerFrame {
                moving: true,
                pos: at(60.0, 60.0),
                ..PointerFrame::default()
            },
        );

        assert!(router.route(
            &mut session,
            PointerFrame {
                released: true,
                pos: None,
                ..PointerFrame::default()
            },
        ));
        assert!(!router.is_captured());
        assert_eq!(session.dragged(), None);

        // later hover movement no longer moves the keypoint
        assert!(!router.route(
            &mut session,
            PointerFrame {
                moving: true,
                pos: at(300.0, 300.0),
                ..PointerFrame::default()
            },
        ));
        assert_eq!(session.skeleton().keypoints()[0], Point::new(60.0, 60.0));
    }

    #[test]
    fn press_outside_canvas_is_ignored() {
        let mut session = body_session();
        let mut router = PointerRouter::default();
        assert!(!router.route(
            &mut session,
            PointerFrame {
                pressed: true,
                pos: at(240.0, 50.0),
                over_canvas: false,
                ..PointerFrame::default()
            },
        ));
        assert!(!router.is_captured());
        assert_eq!(session.dragged(), None);
    }
}
