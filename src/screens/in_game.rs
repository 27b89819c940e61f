//! In-game screen: keyboard shortcuts that work across overlays.

use bevy::prelude::*;

use super::GameState;
use crate::GameSet;
use crate::menus::TogglePause;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        pause_hotkey
            .in_set(GameSet::Input)
            .run_if(in_state(GameState::InGame)),
    );
}

/// `Escape` pauses and resumes. Ignored under the victory and defeat panels.
fn pause_hotkey(keyboard: Res<ButtonInput<KeyCode>>, mut commands: Commands) {
    if keyboard.just_pressed(KeyCode::Escape) {
        commands.trigger(TogglePause);
    }
}
