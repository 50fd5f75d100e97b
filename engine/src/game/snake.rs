use std::collections::{HashSet, VecDeque};

use super::types::{wrapping_dec, wrapping_inc, Direction, Point, StepOutcome};

/// The snake body, ordered tail to head: oldest segment at the front of the
/// deque, head at the back. `body_set` mirrors the deque for O(1)
/// membership checks during collision and food-exclusion queries.
#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub body_set: HashSet<Point>,
}

impl Snake {
    /// Three segments along the top row, head at the column-3 end (wrapped
    /// on grids too narrow to hold it).
    pub fn new(size: usize) -> Self {
        let body: VecDeque<Point> = (1..=3).map(|col| Point::new(0, col % size)).collect();
        let body_set = body.iter().copied().collect();
        Self { body, body_set }
    }

    #[cfg(test)]
    pub(crate) fn from_body(coords: &[Point]) -> Self {
        Self {
            body: coords.iter().copied().collect(),
            body_set: coords.iter().copied().collect(),
        }
    }

    pub fn head(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// One movement step: advance the head one cell in `direction` with
    /// toroidal wrap, drop the oldest tail segment, then report whether the
    /// new head landed on the remaining body. Moving onto the cell the tail
    /// just vacated is legal.
    pub fn step(&mut self, direction: Direction, size: usize) -> StepOutcome {
        let head = self.head();
        let new_head = match direction {
            Direction::Up => Point::new(wrapping_dec(head.row, size), head.col),
            Direction::Down => Point::new(wrapping_inc(head.row, size), head.col),
            Direction::Left => Point::new(head.row, wrapping_dec(head.col, size)),
            Direction::Right => Point::new(head.row, wrapping_inc(head.col, size)),
        };

        let tail = self
            .body
            .pop_front()
            .expect("Snake body should never be empty");
        self.body_set.remove(&tail);

        let collided = self.body_set.contains(&new_head);
        self.body.push_back(new_head);
        self.body_set.insert(new_head);

        if collided {
            StepOutcome::SelfCollision
        } else {
            StepOutcome::Moved
        }
    }

    /// Inserts one segment at the tail end, extending the path the tail was
    /// vacating: the direction is extrapolated from the two oldest segments
    /// and the new coordinate is wrap-normalized.
    ///
    /// When those two segments straddle a wrap boundary the extrapolated
    /// direction points the wrong way and the new segment lands on the
    /// neighbor instead of past the edge. Known quirk, kept as-is.
    pub fn grow(&mut self, size: usize) {
        let a = self.body[0];
        let b = self.body[1];

        let mut tail = a;
        if a.row < b.row {
            tail.row = wrapping_dec(a.row, size);
        } else if a.col < b.col {
            tail.col = wrapping_dec(a.col, size);
        } else if a.row > b.row {
            tail.row = wrapping_inc(a.row, size);
        } else if a.col > b.col {
            tail.col = wrapping_inc(a.col, size);
        }

        self.body.push_front(tail);
        self.body_set.insert(tail);
    }

    /// True iff the head does not duplicate any other body coordinate.
    pub fn is_alive(&self) -> bool {
        let head = self.head();
        self.body
            .iter()
            .take(self.body.len() - 1)
            .all(|point| *point != head)
    }
}
