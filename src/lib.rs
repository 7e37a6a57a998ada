//! Dino Dash - a turn-alternating dinosaur runner environment
//!
//! Core modules:
//! - `sim`: Deterministic simulation (turn engine, physics, obstacle scheduling)
//! - `render`: Fixed-grid ASCII projection of a state
//! - `highscores`: Local best-score tracking for the terminal driver
//!
//! The simulation is a two-party MDP: the player submits a posture or jump
//! action, then the environment submits a spawn-or-pass action, in strict
//! alternation. External drivers (a trainer, the bundled terminal loop)
//! consume only the public surface: construct a state, apply actions, `step`,
//! and read the observers.

pub mod highscores;
pub mod render;
pub mod sim;

pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// Horizontal offset at which new obstacles enter the world; an obstacle
    /// takes this many ticks to reach the dino's column
    pub const SPAWN_DISTANCE: i32 = 40;
    /// Dino hitbox height while standing
    pub const STAND_HEIGHT: i32 = 2;
    /// Dino hitbox height while crouching
    pub const CROUCH_HEIGHT: i32 = 1;
    /// Wall-clock duration of one tick in milliseconds (driver pacing only,
    /// never consulted by the simulation itself)
    pub const TICK_MILLIS: u64 = 100;
}
