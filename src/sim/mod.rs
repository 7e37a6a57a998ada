//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Strict Player/Environment turn alternation
//! - Seeded RNG only (owned by the state, injected at construction)
//! - Stable obstacle order (append at tail, head = nearest)
//! - No rendering or terminal dependencies

pub mod actions;
pub mod collision;
pub mod scheduler;
pub mod state;
pub mod tick;

pub use actions::{
    Action, EnvAction, JUMP_CURVE, OBSTACLE_ARCHETYPES, ObstacleArchetype, PlayerAction,
};
pub use collision::{hits_dino, straddles_dino_column};
pub use scheduler::{DifficultyTier, sample_env_action, spawn_gap, tier_for_score};
pub use state::{ActionError, GameState, Obstacle, Turn};
pub use tick::{advance_jump, advance_world};
