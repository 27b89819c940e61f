//! Menu overlays that can appear on top of any screen.
//!
//! The `Menu` state is orthogonal to `GameState`: menus are overlays,
//! not screens. `Menu::Pause` appears while `GameState::InGame` is active,
//! and `Menu::Main` appears while `GameState::MainMenu` is active.

mod endgame;
mod main_menu;
mod pause;

use bevy::prelude::*;

use crate::screens::GameState;

/// Menu overlay states. Orthogonal to `GameState`.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[states(scoped_entities)]
pub enum Menu {
    /// No overlay: the battle is live.
    #[default]
    None,
    /// Main menu (shown on the title screen).
    Main,
    /// Pause menu (shown in-game).
    Pause,
    /// Victory panel (enemy town destroyed).
    Victory,
    /// Defeat panel (ally town destroyed).
    Defeat,
}

/// Flip between playing and paused. Has no effect outside a match or while
/// the victory/defeat panel is up.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct TogglePause;

/// The overlay a pause toggle leads to from `menu`, if any.
#[must_use]
pub const fn toggled(menu: Menu) -> Option<Menu> {
    match menu {
        Menu::None => Some(Menu::Pause),
        Menu::Pause => Some(Menu::None),
        Menu::Main | Menu::Victory | Menu::Defeat => None,
    }
}

pub(crate) fn toggle_pause(
    _: On<TogglePause>,
    game: Res<State<GameState>>,
    menu: Res<State<Menu>>,
    mut next_menu: ResMut<NextState<Menu>>,
) {
    if *game.get() != GameState::InGame {
        return;
    }
    if let Some(next) = toggled(*menu.get()) {
        debug!("pause toggled: {:?} -> {next:?}", menu.get());
        next_menu.set(next);
    }
}

pub fn plugin(app: &mut App) {
    app.init_state::<Menu>();
    app.add_plugins((main_menu::plugin, pause::plugin, endgame::plugin));
    app.add_observer(toggle_pause);

    // Freeze virtual time (and with it the fixed battle step) under any overlay.
    app.add_systems(OnExit(Menu::None), pause_virtual_time);
    app.add_systems(OnEnter(Menu::None), unpause_virtual_time);
}

fn pause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

fn unpause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}
