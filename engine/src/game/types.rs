#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

/// The four logical states a grid cell can be in. Mapping these to
/// colors is the renderer's job, not the engine's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Body,
    Head,
    Food,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    SelfCollision,
    /// The body occupies every cell, so no food can be placed. Counts as a win.
    GridFull,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    GameOver(EndReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    SelfCollision,
}

pub fn wrapping_inc(value: usize, max: usize) -> usize {
    if value + 1 >= max { 0 } else { value + 1 }
}

pub fn wrapping_dec(value: usize, max: usize) -> usize {
    if value == 0 { max - 1 } else { value - 1 }
}
