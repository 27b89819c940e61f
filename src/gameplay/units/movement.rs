//! Unit steering: walking units advance along the lane, fighting units hold.

use bevy::prelude::*;

use super::{Movement, Unit, UnitState};
use crate::gameplay::body::Velocity;

/// Writes each unit's `Velocity` from its state. `apply_velocity` integrates it
/// right after. Towns have zero speed and never move regardless of state.
///
/// Runs in `GameSet::Movement`.
pub(super) fn steer_units(mut units: Query<(&UnitState, &Movement, &mut Velocity), With<Unit>>) {
    for (state, movement, mut velocity) in &mut units {
        velocity.0 = match state {
            UnitState::Walk => Vec2::new(movement.speed, 0.0),
            UnitState::Fight => Vec2::ZERO,
        };
    }
}
