//! Result panel shown once a town falls: the verdict, which town fell, and a
//! way back to the title screen.

use bevy::prelude::*;

use super::Menu;
use crate::gameplay::endgame::Verdict;
use crate::screens::GameState;
use crate::theme::{palette, widget};

/// What the panel says for a decided match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerdictBanner {
    pub title: &'static str,
    pub cause: &'static str,
    pub accent: Color,
}

/// The banner for `verdict`, or `None` while the match is still on.
#[must_use]
pub const fn verdict_banner(verdict: Verdict) -> Option<VerdictBanner> {
    match verdict {
        Verdict::Pending => None,
        Verdict::Won => Some(VerdictBanner {
            title: "VICTORY!",
            cause: "The enemy town has been destroyed.",
            accent: palette::HEALTH_BAR_FILL,
        }),
        Verdict::Lost => Some(VerdictBanner {
            title: "DEFEAT!",
            cause: "Your town has been destroyed.",
            accent: palette::ENEMY_TOWN,
        }),
    }
}

fn spawn_verdict_screen(verdict: Res<Verdict>, menu: Res<State<Menu>>, mut commands: Commands) {
    let Some(banner) = verdict_banner(*verdict) else {
        warn!("result panel requested for an undecided match");
        return;
    };

    commands.spawn((
        widget::ui_root("Verdict Screen"),
        BackgroundColor(palette::OVERLAY_BACKGROUND),
        GlobalZIndex(1),
        DespawnOnExit(*menu.get()),
        children![(
            Name::new("Verdict Panel"),
            Node {
                width: Val::Px(640.0),
                row_gap: Val::Px(24.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::axes(Val::Px(40.0), Val::Px(32.0)),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(palette::PANEL_BACKGROUND),
            BorderColor::all(banner.accent),
            children![
                (
                    Text::new(banner.title),
                    TextFont::from_font_size(palette::FONT_SIZE_TITLE),
                    TextColor(banner.accent),
                ),
                widget::label(banner.cause),
                widget::button(
                    "Main Menu",
                    |_: On<Pointer<Click>>, mut next_game: ResMut<NextState<GameState>>| {
                        next_game.set(GameState::MainMenu);
                    },
                ),
            ],
        )],
    ));
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Menu::Victory), spawn_verdict_screen);
    app.add_systems(OnEnter(Menu::Defeat), spawn_verdict_screen);
}
