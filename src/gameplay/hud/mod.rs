//! In-game HUD: spawn buttons with cooldowns and the pause button.

pub mod top_bar;

use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(top_bar::plugin);
}
