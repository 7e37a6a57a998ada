//! Environment tick
//!
//! Advances jump progression and obstacle motion by one tick, runs the
//! collision sweep, culls passed obstacles and scores the tick. Called only
//! from the environment-turn handler; the player's turn never moves the
//! world.

use super::actions::JUMP_CURVE;
use super::collision::{hits_dino, straddles_dino_column};
use super::state::GameState;

/// Advance an in-progress jump by one phase.
///
/// This is the only mechanism that changes `y` or clears `jump_phase`: when
/// the phase index runs off the end of [`JUMP_CURVE`] the dino lands
/// (`jump_phase = None`, `y = 0`).
pub fn advance_jump(state: &mut GameState) {
    let Some(phase) = state.jump_phase else {
        return;
    };
    let next = phase + 1;
    if next == JUMP_CURVE.len() {
        state.jump_phase = None;
        state.y = 0;
    } else {
        state.jump_phase = Some(next);
        state.y = JUMP_CURVE[next];
    }
}

/// Move every obstacle one column closer, detect collision against the
/// dino's fixed column, drop obstacles whose trailing edge has fully
/// passed, and score the tick if it was not fatal.
pub fn advance_world(state: &mut GameState) {
    for obstacle in &mut state.obstacles {
        obstacle.distance -= 1;
        if straddles_dino_column(obstacle) && hits_dino(obstacle, state.y, state.h) {
            // Idempotent across obstacles in the same tick.
            state.terminal = true;
        }
    }
    state.obstacles.retain(|o| !o.has_passed());
    if !state.terminal {
        state.score += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SPAWN_DISTANCE;
    use crate::sim::actions::{PASS_CODE, PlayerAction};
    use crate::sim::state::{Obstacle, Turn};

    fn state_with(obstacles: Vec<Obstacle>) -> GameState {
        let mut state = GameState::new(0);
        state.obstacles = obstacles;
        state
    }

    /// One Stand + one Pass, i.e. one completed tick with no spawn.
    fn idle_tick(state: &mut GameState) {
        state.apply_action(PlayerAction::Stand.code()).unwrap();
        state.apply_action(PASS_CODE).unwrap();
    }

    #[test]
    fn test_jump_lasts_exactly_curve_length() {
        let mut state = state_with(vec![]);
        state.apply_action(PlayerAction::Jump.code()).unwrap();
        state.apply_action(PASS_CODE).unwrap();
        for expected in &JUMP_CURVE[1..] {
            assert_eq!(state.y, *expected);
            assert!(state.jump_phase.is_some());
            idle_tick(&mut state);
        }
        assert_eq!(state.jump_phase, None);
        assert_eq!(state.y, 0);
    }

    #[test]
    fn test_forty_idle_ticks_without_spawns() {
        let mut state = state_with(vec![]);
        for _ in 0..40 {
            idle_tick(&mut state);
        }
        assert!(!state.terminal);
        assert_eq!(state.score, 40);
        assert_eq!(state.turn, Turn::Player);
    }

    #[test]
    fn test_ground_obstacle_hits_standing_dino_at_zero() {
        let mut state = state_with(vec![]);
        state.obstacles.push(Obstacle {
            distance: SPAWN_DISTANCE,
            y: 0,
            w: 1,
            h: 2,
        });
        // 39 ticks bring it to distance 1 without incident.
        for _ in 0..39 {
            idle_tick(&mut state);
            assert!(!state.terminal);
        }
        assert_eq!(state.obstacles[0].distance, 1);
        assert_eq!(state.score, 39);
        // The 40th tick reaches distance 0: collision, score frozen.
        idle_tick(&mut state);
        assert!(state.terminal);
        assert_eq!(state.score, 39);
    }

    #[test]
    fn test_obstacle_removed_exactly_when_passed() {
        // Width 2: survives through distance -2, dropped at -3.
        let mut state = state_with(vec![Obstacle {
            distance: 1,
            y: 2,
            w: 2,
            h: 1,
        }]);
        for expected_distance in [0, -1, -2] {
            idle_tick(&mut state);
            assert_eq!(state.obstacles.len(), 1, "still active at {expected_distance}");
            assert_eq!(state.obstacles[0].distance, expected_distance);
        }
        idle_tick(&mut state);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_jump_clears_small_cactus() {
        // Jump with the cactus 5 columns out: the dino is at y=1 when the
        // obstacle straddles the column, above its single-row span.
        let mut state = state_with(vec![Obstacle {
            distance: 5,
            y: 0,
            w: 1,
            h: 1,
        }]);
        state.apply_action(PlayerAction::Jump.code()).unwrap();
        state.apply_action(PASS_CODE).unwrap();
        while state.jump_phase.is_some() {
            idle_tick(&mut state);
        }
        assert!(!state.terminal);
        assert!(state.obstacles.is_empty() || state.obstacles[0].distance < 0);
    }

    #[test]
    fn test_jump_too_early_lands_on_cactus() {
        // One column further out the dino lands exactly as the cactus
        // arrives at its column.
        let mut state = state_with(vec![Obstacle {
            distance: 6,
            y: 0,
            w: 1,
            h: 1,
        }]);
        state.apply_action(PlayerAction::Jump.code()).unwrap();
        state.apply_action(PASS_CODE).unwrap();
        for _ in 0..5 {
            idle_tick(&mut state);
        }
        assert!(state.terminal);
    }

    #[test]
    fn test_crouch_ducks_under_low_bird() {
        let mut state = state_with(vec![Obstacle {
            distance: 1,
            y: 1,
            w: 1,
            h: 1,
        }]);
        state.apply_action(PlayerAction::Crouch.code()).unwrap();
        state.apply_action(PASS_CODE).unwrap();
        assert!(!state.terminal);

        // Standing, the same bird is fatal.
        let mut state = state_with(vec![Obstacle {
            distance: 1,
            y: 1,
            w: 1,
            h: 1,
        }]);
        idle_tick(&mut state);
        assert!(state.terminal);
    }

    #[test]
    fn test_spawned_obstacle_ticks_immediately() {
        // A spawn and the physics tick share the environment turn, so the
        // new obstacle is already one column closer afterward.
        let mut state = state_with(vec![]);
        state.apply_action(PlayerAction::Stand.code()).unwrap();
        state.apply_action(4).unwrap();
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].distance, SPAWN_DISTANCE - 1);
    }

    #[test]
    fn test_obstacles_keep_spawn_order() {
        let mut state = state_with(vec![]);
        state.apply_action(PlayerAction::Stand.code()).unwrap();
        state.apply_action(4).unwrap();
        idle_tick(&mut state);
        state.apply_action(PlayerAction::Stand.code()).unwrap();
        state.apply_action(10).unwrap();
        // Head is the older (nearer) obstacle.
        assert_eq!(state.obstacles.len(), 2);
        assert!(state.obstacles[0].distance < state.obstacles[1].distance);
        assert_eq!(state.obstacles[1].y, 1);
    }
}
