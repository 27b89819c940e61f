//! Death: removes fallen units between frames.

use bevy::prelude::*;

use crate::gameplay::units::{CurrentTarget, Health, Unit};

/// Despawns every unit whose life is at or below zero, and in the same pass
/// clears every target handle that pointed at one of them.
///
/// Runs in `GameSet::Death`, ahead of the per-unit update, so nothing is
/// removed while another pass is walking the units.
pub fn remove_dead_units(
    mut commands: Commands,
    units: Query<(Entity, &Health), With<Unit>>,
    mut targets: Query<&mut CurrentTarget>,
) {
    let fallen: Vec<Entity> = units
        .iter()
        .filter(|(_, health)| health.is_dead())
        .map(|(entity, _)| entity)
        .collect();
    if fallen.is_empty() {
        return;
    }

    for mut target in &mut targets {
        if target.0.is_some_and(|entity| fallen.contains(&entity)) {
            target.0 = None;
        }
    }

    for &entity in &fallen {
        debug!("removing fallen unit {entity:?}");
        commands.entity(entity).try_despawn();
    }
}
