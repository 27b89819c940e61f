//! Keeps unit sprites in step with the simulation.

use bevy::prelude::*;

use super::screen_to_world;
use crate::GameSet;
use crate::gameplay::body::Body;
use crate::gameplay::units::{Team, Unit, UnitKind, UnitState};
use crate::screens::GameState;
use crate::theme::palette;

/// Copies the body center into the sprite's world translation. Z is left to
/// whoever spawned the entity.
fn sync_transforms(mut bodies: Query<(&Body, &mut Transform), (With<Unit>, Changed<Body>)>) {
    for (body, mut transform) in &mut bodies {
        let world = screen_to_world(body.center);
        transform.translation.x = world.x;
        transform.translation.y = world.y;
    }
}

/// Fighting units light up, walking units go back to their base color.
fn tint_by_state(
    mut units: Query<(&UnitKind, &Team, &UnitState, &mut Sprite), Changed<UnitState>>,
) {
    for (&kind, &team, &state, mut sprite) in &mut units {
        sprite.color = palette::unit_color(kind, team, state);
    }
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (sync_transforms, tint_by_state)
            .in_set(GameSet::Ui)
            .run_if(in_state(GameState::InGame)),
    );
}
