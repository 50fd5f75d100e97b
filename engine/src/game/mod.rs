mod grid;
mod io;
mod joystick;
mod session;
mod session_rng;
mod settings;
mod snake;
mod types;

pub use grid::Grid;
pub use io::{run_game_loop, InputSource, Renderer};
pub use joystick::JoystickMapper;
pub use session::GameSession;
pub use session_rng::SessionRng;
pub use settings::GameSettings;
pub use snake::Snake;
pub use types::{
    wrapping_dec, wrapping_inc, CellState, Direction, EndReason, Point, StepOutcome, TickOutcome,
};
