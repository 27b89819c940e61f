//! Throttled paired spawning.
//!
//! A successful request puts the requested unit on the field for its team and
//! always sends the counterpart archetype (Warrior against Ranger and back)
//! for the enemy, whichever team asked. Each request is gated by the requested
//! type's cooldown.

use bevy::prelude::*;

use super::{SpawnSequence, Team, UnitKind, spawn_unit};
use crate::GameSet;
use crate::gameplay::cooldown::{CooldownSlot, Cooldowns};
use crate::gameplay::endgame::Verdict;
use crate::screens::GameState;

// === Types ===

/// Ask for one unit of `kind` on `team`. Triggered by HUD buttons and hotkeys.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRequested {
    pub kind: UnitKind,
    pub team: Team,
}

/// The two units a successful request produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedPair {
    pub unit: Entity,
    pub counter: Entity,
}

/// Why a request was turned down. Never fatal: the request is simply dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnRejected {
    /// The type is still recharging.
    CoolingDown { slot: CooldownSlot, remaining: u32 },
    /// The kind cannot be requested (towns).
    NotSpawnable(UnitKind),
}

/// The cooldown slot that gates a kind, if it can be requested at all.
#[must_use]
pub const fn cooldown_slot(kind: UnitKind) -> Option<CooldownSlot> {
    match kind {
        UnitKind::Warrior => Some(CooldownSlot::Warrior),
        UnitKind::Ranger => Some(CooldownSlot::Ranger),
        UnitKind::Town => None,
    }
}

/// Spawns `kind` for `team` plus an enemy of the counterpart kind, if the
/// type's cooldown allows it. On success the type recharges and the global
/// cooldown is applied.
pub fn try_spawn_pair(
    commands: &mut Commands,
    cooldowns: &mut Cooldowns,
    sequence: &mut SpawnSequence,
    kind: UnitKind,
    team: Team,
) -> Result<SpawnedPair, SpawnRejected> {
    let (Some(slot), Some(counter_kind)) = (cooldown_slot(kind), kind.counterpart()) else {
        return Err(SpawnRejected::NotSpawnable(kind));
    };
    let remaining = cooldowns.remaining(slot);
    if remaining > 0 {
        return Err(SpawnRejected::CoolingDown { slot, remaining });
    }

    let unit = spawn_unit(commands, sequence, kind, team);
    let counter = spawn_unit(commands, sequence, counter_kind, Team::Enemy);
    cooldowns.trigger(slot);

    Ok(SpawnedPair { unit, counter })
}

// === Systems ===

/// Handles `SpawnRequested` while a match is running and undecided. Paused
/// matches still accept requests; the new units simply wait for resume.
fn handle_spawn_request(
    request: On<SpawnRequested>,
    game_state: Res<State<GameState>>,
    verdict: Res<Verdict>,
    mut cooldowns: ResMut<Cooldowns>,
    mut sequence: ResMut<SpawnSequence>,
    mut commands: Commands,
) {
    if *game_state.get() != GameState::InGame || *verdict != Verdict::Pending {
        return;
    }
    match try_spawn_pair(
        &mut commands,
        &mut cooldowns,
        &mut sequence,
        request.kind,
        request.team,
    ) {
        Ok(pair) => debug!(
            "spawned {:?} {} ({:?}) against {:?}",
            request.team,
            request.kind.display_name(),
            pair.unit,
            pair.counter
        ),
        Err(rejected) => debug!("spawn request ignored: {rejected:?}"),
    }
}

/// `W` and `R` request a Warrior or a Ranger for the ally team.
fn spawn_hotkeys(keyboard: Res<ButtonInput<KeyCode>>, mut commands: Commands) {
    let hotkeys = [
        (KeyCode::KeyW, UnitKind::Warrior),
        (KeyCode::KeyR, UnitKind::Ranger),
    ];
    for (key, kind) in hotkeys {
        if keyboard.just_pressed(key) {
            commands.trigger(SpawnRequested {
                kind,
                team: Team::Ally,
            });
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.add_observer(handle_spawn_request);

    app.add_systems(
        Update,
        spawn_hotkeys
            .in_set(GameSet::Input)
            .run_if(in_state(GameState::InGame)),
    );
}
