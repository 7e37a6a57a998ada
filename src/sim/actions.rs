//! Action-space catalog
//!
//! Both parties act through small tagged enums; the flat `i32` code space
//! (player `0..3`, environment `3..12`) exists only at the external boundary
//! via [`Action::from_code`] and the `code()` methods.

use serde::{Deserialize, Serialize};

use super::state::ActionError;

/// Number of player action codes (`0..3`)
pub const NUM_PLAYER_ACTIONS: i32 = 3;
/// Number of environment action codes: pass plus one per archetype (`3..12`)
pub const NUM_ENV_ACTIONS: i32 = 1 + OBSTACLE_ARCHETYPES.len() as i32;
/// Size of the combined code space
pub const ACTION_SPACE: i32 = NUM_PLAYER_ACTIONS + NUM_ENV_ACTIONS;
/// Code of the environment's no-spawn action
pub const PASS_CODE: i32 = 3;

/// Vertical offsets of an in-progress jump, tick by tick. The length of this
/// curve is the jump duration.
pub const JUMP_CURVE: [i32; 6] = [0, 1, 2, 3, 2, 1];

/// One fixed `(altitude, width, height)` obstacle template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleArchetype {
    /// Vertical baseline: 0 = ground hazard, >0 = airborne
    pub y: i32,
    /// Width in columns
    pub w: i32,
    /// Height in rows
    pub h: i32,
}

/// The eight spawnable obstacle templates, indexed by spawn-code offset
pub const OBSTACLE_ARCHETYPES: [ObstacleArchetype; 8] = [
    ObstacleArchetype { y: 0, w: 1, h: 2 }, // big cactus
    ObstacleArchetype { y: 0, w: 1, h: 1 }, // small cactus
    ObstacleArchetype { y: 0, w: 2, h: 2 }, // two big cacti
    ObstacleArchetype { y: 0, w: 2, h: 1 }, // two small cacti
    ObstacleArchetype { y: 0, w: 3, h: 2 }, // three big cacti
    ObstacleArchetype { y: 0, w: 3, h: 1 }, // three small cacti
    ObstacleArchetype { y: 1, w: 1, h: 1 }, // low bird
    ObstacleArchetype { y: 2, w: 1, h: 1 }, // high bird
];

/// Posture/jump action submitted on the player's turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Stand upright (also the no-op while mid-jump)
    Stand,
    /// Duck to half height for this tick
    Crouch,
    /// Start a jump; inert if one is already in progress
    Jump,
}

impl PlayerAction {
    pub fn code(self) -> i32 {
        match self {
            PlayerAction::Stand => 0,
            PlayerAction::Crouch => 1,
            PlayerAction::Jump => 2,
        }
    }
}

/// Spawn-or-pass action submitted on the environment's turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvAction {
    /// No spawn this tick
    Pass,
    /// Spawn the archetype at this index of [`OBSTACLE_ARCHETYPES`]
    Spawn(usize),
}

impl EnvAction {
    pub fn code(self) -> i32 {
        match self {
            EnvAction::Pass => PASS_CODE,
            EnvAction::Spawn(kind) => PASS_CODE + 1 + kind as i32,
        }
    }
}

/// Any action, tagged by the party it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Player(PlayerAction),
    Env(EnvAction),
}

impl Action {
    /// Decode an external action code. Fails with [`ActionError::OutOfRange`]
    /// for anything outside `0..12`.
    pub fn from_code(code: i32) -> Result<Self, ActionError> {
        match code {
            0 => Ok(Action::Player(PlayerAction::Stand)),
            1 => Ok(Action::Player(PlayerAction::Crouch)),
            2 => Ok(Action::Player(PlayerAction::Jump)),
            3 => Ok(Action::Env(EnvAction::Pass)),
            4..=11 => Ok(Action::Env(EnvAction::Spawn((code - 4) as usize))),
            _ => Err(ActionError::OutOfRange(code)),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Action::Player(a) => a.code(),
            Action::Env(a) => a.code(),
        }
    }
}
