use super::types::Direction;

pub const DEFAULT_LOW_THRESHOLD: u16 = 10_000;
pub const DEFAULT_HIGH_THRESHOLD: u16 = 56_000;

/// Maps raw 16-bit joystick samples to discrete directions. A sample at or
/// below `low` deflects one way on its axis, at or above `high` the other
/// way; the band in between leaves the direction alone.
#[derive(Clone, Copy, Debug)]
pub struct JoystickMapper {
    pub low: u16,
    pub high: u16,
}

impl Default for JoystickMapper {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW_THRESHOLD,
            high: DEFAULT_HIGH_THRESHOLD,
        }
    }
}

impl JoystickMapper {
    pub fn new(low: u16, high: u16) -> Self {
        Self { low, high }
    }

    /// Resolves one pair of axis samples against the direction the tick
    /// entered with. Candidates are evaluated x before y, last applied
    /// wins. Every candidate is checked against the entry direction, so the
    /// result is never the exact reverse of `current`, even when both axes
    /// deflect in the same tick.
    pub fn resolve(&self, x: u16, y: u16, current: Direction) -> Direction {
        let mut direction = current;

        if x <= self.low && !Direction::Right.is_opposite(&current) {
            direction = Direction::Right;
        }
        if x >= self.high && !Direction::Left.is_opposite(&current) {
            direction = Direction::Left;
        }
        if y <= self.low && !Direction::Down.is_opposite(&current) {
            direction = Direction::Down;
        }
        if y >= self.high && !Direction::Up.is_opposite(&current) {
            direction = Direction::Up;
        }

        direction
    }
}
