//! Gameplay domain plugins: bodies, units, combat, cooldowns, battlefield,
//! endgame and the HUD.

pub mod battlefield;
pub mod body;
pub mod combat;
pub mod cooldown;
pub mod endgame;
pub mod hud;
pub mod units;

use bevy::prelude::*;

use crate::GameSet;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        body::plugin,
        units::plugin,
        combat::plugin,
        cooldown::plugin,
        battlefield::plugin,
        endgame::plugin,
        hud::plugin,
    ));

    app.add_systems(
        FixedUpdate,
        body::apply_velocity.in_set(GameSet::Movement),
    );
}
