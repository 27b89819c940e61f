//! Spawn cooldowns: one recharge counter per unit type plus a shared
//! "global cooldown" that throttles every near-ready type after any spawn.

use bevy::prelude::*;

use crate::GameSet;
use crate::screens::GameState;

// === Constants ===

/// Frames a type stays locked after it spawns (3 seconds at 30 Hz).
pub const RECHARGE_FRAMES: u32 = 90;

/// After any spawn, types with fewer frames left than this get bumped.
pub const GLOBAL_COOLDOWN_THRESHOLD: u32 = 30;

/// What a bumped type is raised to.
pub const GLOBAL_COOLDOWN_FRAMES: u32 = 60;

// === Types ===

/// Cooldown slots. `Tank` has no archetype yet but takes part in the global
/// cooldown like the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum CooldownSlot {
    Warrior,
    Ranger,
    Tank,
}

impl CooldownSlot {
    const fn index(self) -> usize {
        match self {
            Self::Warrior => 0,
            Self::Ranger => 1,
            Self::Tank => 2,
        }
    }
}

/// Remaining frames per slot. Never negative by construction.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct Cooldowns {
    remaining: [u32; 3],
}

impl Cooldowns {
    #[must_use]
    pub const fn remaining(&self, slot: CooldownSlot) -> u32 {
        self.remaining[slot.index()]
    }

    #[must_use]
    pub const fn is_ready(&self, slot: CooldownSlot) -> bool {
        self.remaining(slot) == 0
    }

    /// Overrides one slot. Used by match setup and tests.
    pub const fn set(&mut self, slot: CooldownSlot, frames: u32) {
        self.remaining[slot.index()] = frames;
    }

    /// Locks `slot` for a full recharge, then applies the global cooldown.
    pub fn trigger(&mut self, slot: CooldownSlot) {
        self.set(slot, RECHARGE_FRAMES);
        self.apply_global_cooldown();
    }

    /// Raises every slot below the threshold to the global cooldown.
    pub fn apply_global_cooldown(&mut self) {
        for frames in &mut self.remaining {
            if *frames < GLOBAL_COOLDOWN_THRESHOLD {
                *frames = GLOBAL_COOLDOWN_FRAMES;
            }
        }
    }

    /// One frame passes. Saturates at zero.
    pub fn tick(&mut self) {
        for frames in &mut self.remaining {
            *frames = frames.saturating_sub(1);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// === Systems ===

/// Runs in `GameSet::Cooldown`, so it stops whenever the game is paused.
fn tick_cooldowns(mut cooldowns: ResMut<Cooldowns>) {
    cooldowns.tick();
}

fn reset_cooldowns(mut cooldowns: ResMut<Cooldowns>) {
    cooldowns.reset();
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Cooldowns>().init_resource::<Cooldowns>();

    app.add_systems(OnEnter(GameState::InGame), reset_cooldowns);
    app.add_systems(FixedUpdate, tick_cooldowns.in_set(GameSet::Cooldown));
}
