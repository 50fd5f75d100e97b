use crate::config::Validate;
use crate::log;
use super::grid::Grid;
use super::joystick::JoystickMapper;
use super::session_rng::SessionRng;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{CellState, Direction, EndReason, Point, StepOutcome, TickOutcome};

/// One game of snake: grid, body, joystick mapping and score, advanced one
/// fixed tick at a time. A session that has reported `GameOver` is
/// finished for good; play again by constructing a fresh one.
pub struct GameSession {
    grid: Grid,
    snake: Snake,
    joystick: JoystickMapper,
    direction: Direction,
    rng: SessionRng,
    score: u32,
    end_reason: Option<EndReason>,
}

impl GameSession {
    pub fn new(settings: &GameSettings, mut rng: SessionRng) -> Result<Self, String> {
        settings.validate()?;

        let mut grid = Grid::new(settings.grid_size)?;
        let snake = Snake::new(settings.grid_size);
        grid.place_food(&snake.body_set, &mut rng)
            .map_err(|_| "No free cell left for the initial food".to_string())?;

        let mut session = Self {
            grid,
            snake,
            joystick: JoystickMapper::new(settings.joystick_low, settings.joystick_high),
            direction: Direction::Up,
            rng,
            score: 0,
            end_reason: None,
        };
        session.restamp();
        Ok(session)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(grid: Grid, snake: Snake, rng: SessionRng) -> Self {
        let mut session = Self {
            grid,
            snake,
            joystick: JoystickMapper::default(),
            direction: Direction::Up,
            rng,
            score: 0,
            end_reason: None,
        };
        session.restamp();
        session
    }

    /// Advances the game by one tick: resolve the joystick samples into a
    /// direction, move the snake, handle food, restamp the grid. Callable
    /// exactly once per scheduler period; once a terminal outcome has been
    /// returned, further calls return it unchanged without mutating state.
    pub fn tick(&mut self, x: u16, y: u16) -> TickOutcome {
        if let Some(reason) = self.end_reason {
            return TickOutcome::GameOver(reason);
        }

        self.direction = self.joystick.resolve(x, y, self.direction);

        if self.snake.step(self.direction, self.grid.size()) == StepOutcome::SelfCollision {
            let head = self.snake.head();
            log!(
                "Snake collided with itself at ({}, {}). Score: {}",
                head.row,
                head.col,
                self.score
            );
            return self.finish(EndReason::SelfCollision);
        }

        if self.grid.food_position() == Some(self.snake.head()) {
            self.grid.clear_food();
            self.snake.grow(self.grid.size());
            self.score += 1;

            let head = self.snake.head();
            log!(
                "Snake ate food at ({}, {}). Score: {}",
                head.row,
                head.col,
                self.score
            );

            if let Err(reason) = self.grid.place_food(&self.snake.body_set, &mut self.rng) {
                log!("Grid is full, nothing left to eat");
                return self.finish(reason);
            }
        }

        self.restamp();
        TickOutcome::Continue
    }

    fn finish(&mut self, reason: EndReason) -> TickOutcome {
        self.end_reason = Some(reason);
        self.restamp();
        TickOutcome::GameOver(reason)
    }

    fn restamp(&mut self) {
        self.grid.clear_transient_marks();
        self.grid.mark_body(&self.snake.body);
    }

    /// Row-major cell states for all N*N cells, for the renderer.
    pub fn cells(&self) -> &[CellState] {
        self.grid.cells()
    }

    pub fn grid_size(&self) -> usize {
        self.grid.size()
    }

    pub fn food_position(&self) -> Option<Point> {
        self.grid.food_position()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn is_finished(&self) -> bool {
        self.end_reason.is_some()
    }
}
