use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::interval;

use crate::log;
use super::session::GameSession;
use super::types::{CellState, EndReason, TickOutcome};

/// Supplies two raw 16-bit axis samples per tick. On hardware this is a
/// pair of ADC reads; anything that produces numbers in that range works.
pub trait InputSource {
    fn read_axes(&mut self) -> (u16, u16);
}

/// Receives one flat row-major frame per tick: a set_pixel call for every
/// cell, then a single present.
pub trait Renderer {
    fn set_pixel(&mut self, index: usize, cell: CellState);
    fn present(&mut self);
}

/// Drives the session at a fixed tick period until it reports a terminal
/// outcome: read the axes, advance the game, push the frame. The session
/// is shared so an input source may inspect the game state between ticks.
pub async fn run_game_loop<I, R>(
    session: Arc<Mutex<GameSession>>,
    mut input: I,
    mut renderer: R,
    tick_interval: Duration,
) -> EndReason
where
    I: InputSource,
    R: Renderer,
{
    let mut timer = interval(tick_interval);

    loop {
        timer.tick().await;

        let (x, y) = input.read_axes();

        let mut session = session.lock().unwrap();
        let outcome = session.tick(x, y);

        for (index, cell) in session.cells().iter().enumerate() {
            renderer.set_pixel(index, *cell);
        }
        renderer.present();

        if let TickOutcome::GameOver(reason) = outcome {
            log!("Game over: {:?}. Final score: {}", reason, session.score());
            return reason;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use super::super::grid::Grid;
    use super::super::session_rng::SessionRng;
    use super::super::snake::Snake;
    use super::super::types::Point;

    struct CenteredStick;

    impl InputSource for CenteredStick {
        fn read_axes(&mut self) -> (u16, u16) {
            (32_768, 32_768)
        }
    }

    #[derive(Clone, Default)]
    struct CountingRenderer {
        pixels_written: Arc<Mutex<usize>>,
        frames_presented: Arc<Mutex<usize>>,
    }

    impl Renderer for CountingRenderer {
        fn set_pixel(&mut self, _index: usize, _cell: CellState) {
            *self.pixels_written.lock().unwrap() += 1;
        }

        fn present(&mut self) {
            *self.frames_presented.lock().unwrap() += 1;
        }
    }

    /// A session one food away from filling its 3x3 grid, so the loop
    /// terminates after a single tick.
    fn nearly_won_session() -> GameSession {
        let mut grid = Grid::new(3).unwrap();
        let snake = Snake::from_body(&[
            Point::new(2, 0),
            Point::new(2, 1),
            Point::new(2, 2),
            Point::new(1, 2),
            Point::new(0, 2),
            Point::new(0, 1),
            Point::new(1, 1),
            Point::new(1, 0),
        ]);
        let mut rng = SessionRng::new(5);

        let mut occupied: HashSet<Point> = (0..3)
            .flat_map(|row| (0..3).map(move |col| Point::new(row, col)))
            .collect();
        occupied.remove(&Point::new(0, 0));
        grid.place_food(&occupied, &mut rng).unwrap();

        GameSession::from_parts(grid, snake, rng)
    }

    #[tokio::test]
    async fn test_loop_renders_full_frames_and_returns_end_reason() {
        let session = Arc::new(Mutex::new(nearly_won_session()));
        let renderer = CountingRenderer::default();

        let reason = run_game_loop(
            session.clone(),
            CenteredStick,
            renderer.clone(),
            Duration::from_millis(1),
        )
        .await;

        assert_eq!(reason, EndReason::GridFull);
        assert_eq!(session.lock().unwrap().score(), 1);

        // One full 3x3 frame per tick, final frame included.
        let frames = *renderer.frames_presented.lock().unwrap();
        assert_eq!(frames, 1);
        assert_eq!(*renderer.pixels_written.lock().unwrap(), frames * 9);
    }
}
