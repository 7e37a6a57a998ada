//! Turn engine and game state
//!
//! [`GameState`] owns all mutable game data, enforces strict turn
//! alternation, and dispatches actions to the physics tick and the
//! difficulty scheduler. All failures here are contract violations of the
//! caller, not recoverable runtime conditions.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::actions::{Action, EnvAction, JUMP_CURVE, OBSTACLE_ARCHETYPES, PlayerAction};
use super::scheduler::sample_env_action;
use super::tick::{advance_jump, advance_world};
use crate::consts::{CROUCH_HEIGHT, SPAWN_DISTANCE, STAND_HEIGHT, TICK_MILLIS};

/// Which party submits the next action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Player,
    Environment,
}

/// One hazard moving toward the dino's fixed column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Horizontal offset from the dino's column; decreases by 1 per tick
    pub distance: i32,
    /// Vertical baseline: 0 = ground hazard, >0 = airborne at that altitude
    pub y: i32,
    /// Width in columns
    pub w: i32,
    /// Height in rows
    pub h: i32,
}

impl Obstacle {
    /// New obstacle of the given archetype, entering offstage at the spawn
    /// boundary.
    pub fn from_archetype(kind: usize) -> Self {
        let archetype = &OBSTACLE_ARCHETYPES[kind];
        Self {
            distance: SPAWN_DISTANCE,
            y: archetype.y,
            w: archetype.w,
            h: archetype.h,
        }
    }

    /// True once the trailing edge has fully cleared one column past the
    /// dino's position; such obstacles are dropped from the active set.
    pub fn has_passed(&self) -> bool {
        self.distance + self.w + 1 <= 0
    }
}

/// Contract violations raised by the turn engine
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    /// The episode already ended; the state is inert.
    #[error("episode is over; no further actions are accepted")]
    EpisodeOver,
    /// Negative code or one beyond the combined action space.
    #[error("action code {0} is outside the action space")]
    OutOfRange(i32),
    /// A party acted while the other is at move.
    #[error("{actor:?} acted out of turn ({turn:?} is at move)")]
    WrongTurn { actor: Turn, turn: Turn },
}

/// Complete environment state (deterministic, value semantics)
///
/// `clone` produces a fully independent deep copy, including the RNG, so
/// speculative lookahead via [`GameState::step`] never touches the original
/// and replays exactly the draws the live state would make.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Dino vertical offset; nonzero only while a jump is in progress
    pub y: i32,
    /// Dino hitbox height: 2 standing, 1 crouched
    pub h: i32,
    /// Index into [`JUMP_CURVE`] while airborne, `None` when grounded
    pub jump_phase: Option<usize>,
    /// Active obstacles in spawn order; the head is the nearest one
    pub obstacles: Vec<Obstacle>,
    /// Tick duration in milliseconds (constant, driver pacing only)
    pub speed_ms: u64,
    /// Party at move, strictly alternating starting with the player
    pub turn: Turn,
    /// Completed non-terminal ticks
    pub score: u64,
    /// Absorbing collision flag; once set the state accepts no more actions
    pub terminal: bool,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh state: player at move, score 0, one seeded obstacle
    /// (archetype 0 or 1) at the spawn boundary.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let kind = rng.random_range(0..=1);
        Self {
            y: 0,
            h: STAND_HEIGHT,
            jump_phase: None,
            obstacles: vec![Obstacle::from_archetype(kind)],
            speed_ms: TICK_MILLIS,
            turn: Turn::Player,
            score: 0,
            terminal: false,
            seed,
            rng,
        }
    }

    /// Fresh state with a seed drawn from the process RNG.
    pub fn new_random() -> Self {
        Self::new(rand::rng().random())
    }

    /// Apply one externally-coded action for whichever party is at move.
    ///
    /// Exactly one action is consumed per turn; the turn passes to the other
    /// party afterward even when the action had no effect.
    pub fn apply_action(&mut self, code: i32) -> Result<(), ActionError> {
        if self.terminal {
            return Err(ActionError::EpisodeOver);
        }
        match Action::from_code(code)? {
            Action::Player(action) => self.apply_player(action),
            Action::Env(action) => self.apply_env(action),
        }
    }

    fn apply_player(&mut self, action: PlayerAction) -> Result<(), ActionError> {
        if self.turn != Turn::Player {
            return Err(ActionError::WrongTurn {
                actor: Turn::Player,
                turn: self.turn,
            });
        }
        // A jump, once started, cannot be altered or cancelled: the action
        // is accepted but has no effect until the dino lands.
        if self.jump_phase.is_none() {
            self.h = STAND_HEIGHT;
            match action {
                PlayerAction::Stand => {}
                PlayerAction::Crouch => self.h = CROUCH_HEIGHT,
                PlayerAction::Jump => {
                    self.jump_phase = Some(0);
                    self.y = JUMP_CURVE[0];
                }
            }
        }
        self.turn = Turn::Environment;
        Ok(())
    }

    fn apply_env(&mut self, action: EnvAction) -> Result<(), ActionError> {
        if self.turn != Turn::Environment {
            return Err(ActionError::WrongTurn {
                actor: Turn::Environment,
                turn: self.turn,
            });
        }
        if let EnvAction::Spawn(kind) = action {
            self.obstacles.push(Obstacle::from_archetype(kind));
        }
        // Spawn or not, the world always advances by one tick.
        if self.jump_phase.is_some() {
            advance_jump(self);
        }
        advance_world(self);
        self.turn = Turn::Player;
        Ok(())
    }

    /// Sample the environment's next action code from the difficulty
    /// schedule. Callable only on the environment's turn; exposed so
    /// external drivers can auto-play the environment side.
    pub fn choose_random_env_action(&mut self) -> Result<i32, ActionError> {
        if self.turn != Turn::Environment {
            return Err(ActionError::WrongTurn {
                actor: Turn::Environment,
                turn: self.turn,
            });
        }
        let action = sample_env_action(self.score, self.obstacles.last(), &mut self.rng);
        Ok(action.code())
    }

    /// Combined transition: apply `player_action` and, unless that already
    /// ended the episode, one scheduled environment action, all on a clone.
    ///
    /// Returns `(next_state, reward, terminal)`. Reward is `-1.0` on a
    /// terminal transition and `0.1` otherwise, except that a Jump action
    /// always yields `0.0` - even a fatal one.
    pub fn step(&self, player_action: i32) -> Result<(GameState, f32, bool), ActionError> {
        let mut next = self.clone();
        next.apply_action(player_action)?;
        if !next.terminal {
            let env_code = next.choose_random_env_action()?;
            next.apply_action(env_code)?;
        }
        let reward = if player_action == PlayerAction::Jump.code() {
            0.0
        } else if next.terminal {
            -1.0
        } else {
            0.1
        };
        let terminal = next.terminal;
        Ok((next, reward, terminal))
    }
}
