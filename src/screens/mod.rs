//! Top-level screens. Overlays on top of them live in `crate::menus`.

mod in_game;
mod main_menu;

use bevy::prelude::*;

/// Which screen is up. Entities tagged `DespawnOnExit(state)` go with it.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[states(scoped_entities)]
pub enum GameState {
    /// Title screen with the main menu overlay.
    #[default]
    MainMenu,
    /// A match is running (possibly paused or decided).
    InGame,
}

pub(super) fn plugin(app: &mut App) {
    app.init_state::<GameState>();
    app.add_plugins((main_menu::plugin, in_game::plugin));
}
