use glam::Vec2;
use std::collections::VecDeque;

/// Bounded position history, newest point first.
///
/// Pushing past `capacity` evicts from the back, so the oldest point is
/// always the one dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, point: Vec2) {
        self.points.push_front(point);
        while self.points.len() > self.capacity {
            self.points.pop_back();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn newest(&self) -> Option<Vec2> {
        self.points.front().copied()
    }

    pub fn oldest(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    /// Points from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    /// Consecutive `(index, newer, older)` pairs; index 0 is the segment
    /// touching the newest point.
    pub fn segments(&self) -> impl Iterator<Item = (usize, Vec2, Vec2)> + '_ {
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .enumerate()
            .map(|(k, (a, b))| (k, *a, *b))
    }
}
