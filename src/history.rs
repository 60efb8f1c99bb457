//! Undo for keypoint moves.

use tracing::debug;

use crate::skeleton::{Point, Skeleton};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveRecord {
    pub index: usize,
    pub previous: Point,
}

/// Stack of pre-drag positions. Entries keep the index they were recorded
/// with; structural edits do not rewrite them.
#[derive(Clone, Debug, Default)]
pub struct History {
    moves: Vec<MoveRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_move(&mut self, index: usize, previous: Point) {
        self.moves.push(MoveRecord { index, previous });
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Restores the most recently recorded position. Returns the restored
    /// index, or `None` if there was nothing to undo. A record whose index no
    /// longer exists is discarded without touching the skeleton.
    pub fn undo(&mut self, skeleton: &mut Skeleton) -> Option<usize> {
        let record = self.moves.pop()?;
        if record.index >= skeleton.keypoints().len() {
            debug!(index = record.index, "dropping stale undo record");
            return None;
        }
        skeleton.move_keypoint(record.index, record.previous);
        debug!(index = record.index, remaining = self.moves.len(), "undid move");
        Some(record.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_restores_pre_move_position() {
        let mut skeleton = Skeleton::new();
        let i = skeleton.add_keypoint(Point::new(10.0, 10.0));
        let mut history = History::new();

        history.record_move(i, skeleton.keypoints()[i]);
        skeleton.move_keypoint(i, Point::new(99.0, 42.0));

        assert_eq!(history.undo(&mut skeleton), Some(i));
        assert_eq!(skeleton.keypoints()[i], Point::new(10.0, 10.0));
        assert!(history.is_empty());
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut skeleton = Skeleton::new();
        skeleton.add_keypoint(Point::new(1.0, 2.0));
        let mut history = History::new();
        assert_eq!(history.undo(&mut skeleton), None);
        assert_eq!(skeleton.keypoints(), &[Point::new(1.0, 2.0)]);
    }

    #[test]
    fn undo_is_last_in_first_out() {
        let mut skeleton = Skeleton::new();
        skeleton.add_keypoint(Point::new(0.0, 0.0));
        let mut history = History::new();
        history.record_move(0, Point::new(0.0, 0.0));
        skeleton.move_keypoint(0, Point::new(5.0, 5.0));
        history.record_move(0, Point::new(5.0, 5.0));
        skeleton.move_keypoint(0, Point::new(9.0, 9.0));

        history.undo(&mut skeleton);
        assert_eq!(skeleton.keypoints()[0], Point::new(5.0, 5.0));
        history.undo(&mut skeleton);
        assert_eq!(skeleton.keypoints()[0], Point::new(0.0, 0.0));
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn stale_record_is_dropped_without_panicking() {
        let mut skeleton = Skeleton::new();
        skeleton.add_keypoint(Point::new(0.0, 0.0));
        skeleton.add_keypoint(Point::new(1.0, 1.0));
        let mut history = History::new();
        history.record_move(1, Point::new(1.0, 1.0));
        skeleton.delete_keypoint(1);

        assert_eq!(history.undo(&mut skeleton), None);
        assert!(history.is_empty());
        assert_eq!(skeleton.keypoints(), &[Point::new(0.0, 0.0)]);
    }
}
