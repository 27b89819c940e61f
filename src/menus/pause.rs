//! Pause menu UI: dimmed overlay with Main Menu and Resume.

use bevy::prelude::*;

use super::{Menu, TogglePause};
use crate::screens::GameState;
use crate::theme::{palette, widget};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Menu::Pause), spawn_pause_menu);
}

fn spawn_pause_menu(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Pause Menu"),
        BackgroundColor(palette::OVERLAY_BACKGROUND),
        GlobalZIndex(1),
        DespawnOnExit(Menu::Pause),
        children![
            widget::header("PAUSED"),
            widget::button(
                "Main Menu",
                |_: On<Pointer<Click>>, mut next_game: ResMut<NextState<GameState>>| {
                    next_game.set(GameState::MainMenu);
                },
            ),
            widget::button(
                "Resume",
                |_: On<Pointer<Click>>, mut commands: Commands| {
                    commands.trigger(TogglePause);
                },
            ),
            widget::label("ESC to resume"),
        ],
    ));
}
