//! Main menu UI: bordered panel with title, Start and Exit.

use bevy::prelude::*;

use super::Menu;
use crate::screens::GameState;
use crate::theme::{palette, widget};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Menu::Main), spawn_main_menu);
}

fn spawn_main_menu(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Main Menu Screen"),
        BackgroundColor(palette::OVERLAY_BACKGROUND),
        DespawnOnExit(Menu::Main),
        children![(
            Name::new("Main Menu Panel"),
            Node {
                width: Val::Px(500.0),
                min_height: Val::Px(400.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::all(Val::Px(40.0)),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(palette::PANEL_BACKGROUND),
            BorderColor::all(palette::PANEL_BORDER),
            children![
                (
                    Text::new("Lane Battle"),
                    TextFont::from_font_size(palette::FONT_SIZE_TITLE),
                    TextColor(palette::HEADER_TEXT),
                ),
                widget::button(
                    "Start",
                    |_: On<Pointer<Click>>, mut next_game: ResMut<NextState<GameState>>| {
                        next_game.set(GameState::InGame);
                    },
                ),
                widget::button(
                    "Exit",
                    |_: On<Pointer<Click>>, mut exit: MessageWriter<AppExit>| {
                        exit.write(AppExit::Success);
                    },
                ),
            ],
        )],
    ));
}
