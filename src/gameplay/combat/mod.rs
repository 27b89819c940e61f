//! Combat systems: target acquisition, per-frame damage, death, and health bars.
//!
//! Frame order (all in `FixedUpdate`): `acquire_targets` in `GameSet::Targeting`,
//! `remove_dead_units` in `GameSet::Death`, `resolve_attacks` in `GameSet::Combat`.
//! Each ordered pass walks units by `SpawnOrder`, so the first enemy an attacker
//! overlaps in spawn order is the one it locks on to.

mod death;
pub mod health_bar;

use bevy::prelude::*;

use crate::GameSet;
use crate::gameplay::body::{Body, Side, boxes_overlap};
use crate::gameplay::units::{
    CombatStats, CurrentTarget, Health, SpawnOrder, Team, Unit, UnitState,
};

pub use death::remove_dead_units;

// === Systems ===

/// Pairwise attack-box vs hit-box scan. Quadratic in the number of units.
///
/// For every attacker and every enemy in spawn order: on overlap the attacker
/// switches to `Fight`, and if it has no target yet, locks on to that enemy.
/// An existing target is never replaced while it lives, even if a closer enemy
/// comes into reach.
///
/// Runs in `GameSet::Targeting`.
pub fn acquire_targets(
    mut units: Query<
        (
            Entity,
            &SpawnOrder,
            &Team,
            &Side,
            &Body,
            &CombatStats,
            &mut UnitState,
            &mut CurrentTarget,
        ),
        With<Unit>,
    >,
) {
    let mut roster: Vec<(SpawnOrder, Entity, Team, Rect, Rect)> = units
        .iter()
        .map(|(entity, order, team, side, body, stats, _, _)| {
            (
                *order,
                entity,
                *team,
                body.attack_box(*side, stats.range),
                body.hit_box(),
            )
        })
        .collect();
    roster.sort_by_key(|(order, ..)| *order);

    for &(_, issuer, issuer_team, attack_box, _) in &roster {
        let Ok((.., mut state, mut target)) = units.get_mut(issuer) else {
            continue;
        };
        for &(_, consumer, consumer_team, _, hit_box) in &roster {
            if consumer == issuer || consumer_team == issuer_team {
                continue;
            }
            if !boxes_overlap(attack_box, hit_box) {
                continue;
            }
            *state = UnitState::Fight;
            if target.0.is_none() {
                target.0 = Some(consumer);
            }
        }
    }
}

/// Each unit, in spawn order, drains its target by `damage`. The drain does not
/// depend on the boxes still overlapping: once acquired, a target is hit every
/// frame until it dies. A target that died (or no longer exists) is dropped and
/// the unit goes back to walking.
///
/// Runs in `GameSet::Combat`.
pub fn resolve_attacks(
    mut units: Query<
        (
            Entity,
            &SpawnOrder,
            &CombatStats,
            &mut CurrentTarget,
            &mut UnitState,
            &mut Health,
        ),
        With<Unit>,
    >,
) {
    let mut order: Vec<(SpawnOrder, Entity)> = units
        .iter()
        .map(|(entity, spawn_order, ..)| (*spawn_order, entity))
        .collect();
    order.sort_by_key(|(spawn_order, _)| *spawn_order);

    for (_, attacker) in order {
        let Ok((_, _, stats, target, ..)) = units.get(attacker) else {
            continue;
        };
        let (damage, victim) = (stats.damage, target.0);

        let still_alive = victim.and_then(|victim| {
            let Ok((.., mut health)) = units.get_mut(victim) else {
                debug!("{attacker:?} dropped target {victim:?}: no longer on the field");
                return None;
            };
            health.current -= damage;
            (!health.is_dead()).then_some(victim)
        });

        let Ok((.., mut target, mut state, _)) = units.get_mut(attacker) else {
            continue;
        };
        target.0 = still_alive;
        if target.0.is_none() {
            *state = UnitState::Walk;
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    health_bar::plugin(app);

    app.add_systems(
        FixedUpdate,
        (
            acquire_targets.in_set(GameSet::Targeting),
            remove_dead_units.in_set(GameSet::Death),
            resolve_attacks.in_set(GameSet::Combat),
        ),
    );
}
