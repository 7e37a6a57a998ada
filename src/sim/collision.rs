//! Collision predicates for the dino's fixed column
//!
//! Horizontal coincidence and the vertical span test are separate
//! predicates so the tick can short-circuit on the cheap horizontal check.

use super::state::Obstacle;

/// True when the obstacle's horizontal span straddles the dino's column
/// (column 0 in obstacle-relative coordinates).
pub fn straddles_dino_column(obstacle: &Obstacle) -> bool {
    obstacle.distance <= 0 && obstacle.distance + obstacle.w - 1 >= 0
}

/// Vertical hit test between a horizontally coincident obstacle and the
/// dino's hitbox.
///
/// One-sided on purpose: only the obstacle's span endpoints are tested
/// against the dino's span, never the reverse. A dino span lying strictly
/// inside a taller obstacle's span therefore does not register.
pub fn hits_dino(obstacle: &Obstacle, dino_y: i32, dino_h: i32) -> bool {
    let bottom = obstacle.y;
    let top = obstacle.y + obstacle.h - 1;
    let dino_span = dino_y..=(dino_y + dino_h - 1);
    dino_span.contains(&bottom) || dino_span.contains(&top)
}
