use std::sync::{Arc, Mutex};

use engine::game::{
    wrapping_dec, wrapping_inc, Direction, GameSession, InputSource, Point, SessionRng,
};

const CENTER: u16 = 32_768;

const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Synthetic joystick: peeks at the shared session between ticks, picks a
/// direction greedily toward the food, and emits the raw axis samples a
/// human would produce by deflecting the stick that way.
pub struct Autopilot {
    session: Arc<Mutex<GameSession>>,
    rng: SessionRng,
}

impl Autopilot {
    pub fn new(session: Arc<Mutex<GameSession>>, rng: SessionRng) -> Self {
        Self { session, rng }
    }

    fn choose_direction(&mut self, session: &GameSession) -> Direction {
        let current = session.direction();
        let head = session.snake().head();
        let size = session.grid_size();

        let safe: Vec<Direction> = ALL_DIRECTIONS
            .into_iter()
            .filter(|d| !d.is_opposite(&current))
            .filter(|d| {
                let next = next_position(head, *d, size);
                next == session.snake().tail() || !session.snake().body_set.contains(&next)
            })
            .collect();

        if let Some(food) = session.food_position() {
            let mut best = None;
            let mut best_distance = usize::MAX;
            for direction in &safe {
                let next = next_position(head, *direction, size);
                let distance = toroidal_distance(next, food, size);
                if distance < best_distance {
                    best_distance = distance;
                    best = Some(*direction);
                }
            }
            if let Some(direction) = best {
                return direction;
            }
        }

        if safe.is_empty() {
            current
        } else {
            safe[self.rng.random_range(0..safe.len())]
        }
    }

    /// Full deflection on one axis, the other centered. Extremes satisfy
    /// any threshold configuration.
    fn deflect(direction: Direction) -> (u16, u16) {
        match direction {
            Direction::Right => (0, CENTER),
            Direction::Left => (u16::MAX, CENTER),
            Direction::Down => (CENTER, 0),
            Direction::Up => (CENTER, u16::MAX),
        }
    }
}

impl InputSource for Autopilot {
    fn read_axes(&mut self) -> (u16, u16) {
        let session = Arc::clone(&self.session);
        let session = session.lock().unwrap();
        if session.is_finished() {
            return (CENTER, CENTER);
        }

        let desired = self.choose_direction(&session);
        Self::deflect(desired)
    }
}

fn next_position(from: Point, direction: Direction, size: usize) -> Point {
    match direction {
        Direction::Up => Point::new(wrapping_dec(from.row, size), from.col),
        Direction::Down => Point::new(wrapping_inc(from.row, size), from.col),
        Direction::Left => Point::new(from.row, wrapping_dec(from.col, size)),
        Direction::Right => Point::new(from.row, wrapping_inc(from.col, size)),
    }
}

/// Manhattan distance on the torus: each axis may go the short way around.
fn toroidal_distance(a: Point, b: Point, size: usize) -> usize {
    let d_row = a.row.abs_diff(b.row);
    let d_col = a.col.abs_diff(b.col);
    d_row.min(size - d_row) + d_col.min(size - d_col)
}

#[cfg(test)]
mod tests {
    use engine::game::{GameSettings, TickOutcome};

    use super::*;

    #[test]
    fn test_toroidal_distance_takes_the_short_way() {
        assert_eq!(toroidal_distance(Point::new(0, 0), Point::new(7, 0), 8), 1);
        assert_eq!(toroidal_distance(Point::new(0, 0), Point::new(4, 4), 8), 8);
        assert_eq!(toroidal_distance(Point::new(1, 1), Point::new(1, 1), 8), 0);
    }

    #[test]
    fn test_deflection_extremes_cross_any_thresholds() {
        assert_eq!(Autopilot::deflect(Direction::Right), (0, CENTER));
        assert_eq!(Autopilot::deflect(Direction::Left), (u16::MAX, CENTER));
        assert_eq!(Autopilot::deflect(Direction::Down), (CENTER, 0));
        assert_eq!(Autopilot::deflect(Direction::Up), (CENTER, u16::MAX));
    }

    #[test]
    fn test_autopilot_reaches_the_food() {
        let settings = GameSettings::default();
        let session = Arc::new(Mutex::new(
            GameSession::new(&settings, SessionRng::new(21)).unwrap(),
        ));
        let mut autopilot = Autopilot::new(Arc::clone(&session), SessionRng::new(22));

        for _ in 0..500 {
            let (x, y) = autopilot.read_axes();
            let mut locked = session.lock().unwrap();
            let outcome = locked.tick(x, y);
            if locked.score() >= 3 || outcome != TickOutcome::Continue {
                break;
            }
        }

        let locked = session.lock().unwrap();
        assert!(
            locked.score() >= 1,
            "autopilot never ate; final length {}",
            locked.snake().len()
        );
    }

    #[test]
    fn test_autopilot_never_requests_a_reversal() {
        let settings = GameSettings::default();
        let session = Arc::new(Mutex::new(
            GameSession::new(&settings, SessionRng::new(33)).unwrap(),
        ));
        let mut autopilot = Autopilot::new(Arc::clone(&session), SessionRng::new(34));

        for _ in 0..200 {
            let before = session.lock().unwrap().direction();
            let (x, y) = autopilot.read_axes();
            let mut locked = session.lock().unwrap();
            let outcome = locked.tick(x, y);
            assert!(!locked.direction().is_opposite(&before));
            if outcome != TickOutcome::Continue {
                break;
            }
        }
    }
}
