//! Built-in topologies: an 18-point body and a pair of five-finger hands.

use crate::skeleton::{Edge, Point, Skeleton};

pub const RIGHT_WRIST: usize = 4;
pub const LEFT_WRIST: usize = 7;

const BODY_KEYPOINTS: [(f32, f32); 18] = [
    (240.0, 50.0),  // nose
    (240.0, 100.0), // neck
    (200.0, 100.0), // right shoulder
    (160.0, 180.0), // right elbow
    (120.0, 260.0), // right wrist
    (280.0, 100.0), // left shoulder
    (320.0, 180.0), // left elbow
    (360.0, 260.0), // left wrist
    (220.0, 220.0), // right hip
    (200.0, 340.0), // right knee
    (180.0, 460.0), // right ankle
    (260.0, 220.0), // left hip
    (280.0, 340.0), // left knee
    (300.0, 460.0), // left ankle
    (220.0, 30.0),  // right eye
    (260.0, 30.0),  // left eye
    (200.0, 40.0),  // right ear
    (280.0, 40.0),  // left ear
];

const BODY_EDGES: [(usize, usize); 17] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (1, 5),
    (5, 6),
    (6, 7),
    (1, 8),
    (8, 9),
    (9, 10),
    (1, 11),
    (11, 12),
    (12, 13),
    (0, 14),
    (0, 15),
    (14, 16),
    (15, 17),
];

const JOINTS_PER_FINGER: usize = 3;

/// Thumb, index, middle, ring, pinky; each from the wrist outwards.
const RIGHT_HAND: [[(f32, f32); JOINTS_PER_FINGER]; 5] = [
    [(110.0, 270.0), (100.0, 280.0), (90.0, 290.0)],
    [(130.0, 280.0), (140.0, 300.0), (150.0, 320.0)],
    [(140.0, 280.0), (150.0, 300.0), (160.0, 320.0)],
    [(150.0, 280.0), (160.0, 300.0), (170.0, 320.0)],
    [(160.0, 280.0), (170.0, 300.0), (180.0, 320.0)],
];

const LEFT_HAND: [[(f32, f32); JOINTS_PER_FINGER]; 5] = [
    [(370.0, 270.0), (380.0, 280.0), (390.0, 290.0)],
    [(350.0, 280.0), (340.0, 300.0), (330.0, 320.0)],
    [(340.0, 280.0), (330.0, 300.0), (320.0, 320.0)],
    [(330.0, 280.0), (320.0, 300.0), (310.0, 320.0)],
    [(320.0, 280.0), (310.0, 300.0), (300.0, 320.0)],
];

pub fn default_body() -> Skeleton {
    Skeleton::from_parts(
        BODY_KEYPOINTS.iter().copied().map(Point::from).collect(),
        BODY_EDGES.iter().copied().map(Edge::from).collect(),
    )
}

/// Keypoints and edges for both hands, numbered as if appended after
/// `base` existing keypoints. Every finger is a chain starting at its wrist.
pub fn hands(base: usize) -> (Vec<Point>, Vec<Edge>) {
    let mut keypoints = Vec::with_capacity(2 * 5 * JOINTS_PER_FINGER);
    let mut edges = Vec::with_capacity(keypoints.capacity());

    for (wrist, hand) in [(RIGHT_WRIST, &RIGHT_HAND), (LEFT_WRIST, &LEFT_HAND)] {
        for finger in hand {
            let mut previous = wrist;
            for &joint in finger {
                let index = base + keypoints.len();
                keypoints.push(Point::from(joint));
                edges.push(Edge::new(previous, index));
                previous = index;
            }
        }
    }
    (keypoints, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_has_eighteen_points_and_seventeen_bones() {
        let body = default_body();
        assert_eq!(body.keypoints().len(), 18);
        assert_eq!(body.edges().len(), 17);
        assert_eq!(body.colors().len(), 17);
        assert_eq!(body.keypoints()[RIGHT_WRIST], Point::new(120.0, 260.0));
        assert_eq!(body.keypoints()[LEFT_WRIST], Point::new(360.0, 260.0));
    }

    #[test]
    fn hands_are_wired_to_wrists() {
        let (keypoints, edges) = hands(18);
        assert_eq!(keypoints.len(), 30);
        assert_eq!(edges.len(), 30);

        assert_eq!(edges[0], Edge::new(RIGHT_WRIST, 18));
        assert_eq!(edges[1], Edge::new(18, 19));
        assert_eq!(edges[2], Edge::new(19, 20));
        assert_eq!(edges[3], Edge::new(RIGHT_WRIST, 21));
        assert_eq!(edges[15], Edge::new(LEFT_WRIST, 33));
        assert_eq!(edges[29], Edge::new(46, 47));

        let from_right = edges.iter().filter(|e| e.start == RIGHT_WRIST).count();
        let from_left = edges.iter().filter(|e| e.start == LEFT_WRIST).count();
        assert_eq!((from_right, from_left), (5, 5));
    }
}
