//! Score-driven obstacle spawn policy
//!
//! A pure function of the current score and the most recently spawned
//! obstacle. Four score tiers widen the archetype pool and tighten the
//! spacing window; within the window the spawn probability rises as the gap
//! since the last spawn approaches the tier's maximum.

use rand::Rng;

use super::actions::EnvAction;
use super::state::Obstacle;
use crate::consts::SPAWN_DISTANCE;

/// Spawn-policy parameters for one score tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyTier {
    /// Highest archetype index this tier may spawn (inclusive)
    pub max_type: usize,
    /// Gaps below this never spawn
    pub min_dist: i32,
    /// Gaps at or above this always spawn
    pub max_dist: i32,
}

/// Difficulty tier for a score.
pub fn tier_for_score(score: u64) -> DifficultyTier {
    if score < 200 {
        DifficultyTier {
            max_type: 1,
            min_dist: 15,
            max_dist: 25,
        }
    } else if score < 300 {
        DifficultyTier {
            max_type: 3,
            min_dist: 10,
            max_dist: 15,
        }
    } else if score < 400 {
        DifficultyTier {
            max_type: 5,
            min_dist: 5,
            max_dist: 15,
        }
    } else {
        DifficultyTier {
            max_type: 7,
            min_dist: 10,
            max_dist: 20,
        }
    }
}

/// Ticks elapsed since this obstacle's trailing edge sat at the spawn
/// boundary.
pub fn spawn_gap(last: &Obstacle) -> i32 {
    SPAWN_DISTANCE - (last.distance + last.w - 1)
}

/// Sample the environment's next action.
///
/// `last` is the most recently appended obstacle; with an empty field the
/// scheduler spawns unconditionally, treating the gap as unbounded.
pub fn sample_env_action<R: Rng>(score: u64, last: Option<&Obstacle>, rng: &mut R) -> EnvAction {
    let tier = tier_for_score(score);
    let Some(last) = last else {
        return EnvAction::Spawn(rng.random_range(0..=tier.max_type));
    };
    let gap = spawn_gap(last);
    if gap >= tier.max_dist {
        EnvAction::Spawn(rng.random_range(0..=tier.max_type))
    } else if gap >= tier.min_dist {
        // Spawn with probability 1/(max_dist - gap + 1), rising to certainty
        // as the gap closes on max_dist.
        if rng.random_range(0..=(tier.max_dist - gap)) == 0 {
            EnvAction::Spawn(rng.random_range(0..=tier.max_type))
        } else {
            EnvAction::Pass
        }
    } else {
        EnvAction::Pass
    }
}
