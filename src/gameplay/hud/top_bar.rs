//! Top bar layout: spawn buttons with cooldown readouts (left) | pause (right).

use bevy::ecs::hierarchy::ChildSpawner;
use bevy::ecs::spawn::SpawnWith;
use bevy::prelude::*;

use crate::gameplay::cooldown::{CooldownSlot, Cooldowns};
use crate::gameplay::units::spawn::{SpawnRequested, cooldown_slot};
use crate::gameplay::units::{Team, UnitKind};
use crate::menus::TogglePause;
use crate::screens::GameState;
use crate::theme::interaction::ButtonDisabled;
use crate::theme::{palette, widget};
use crate::{FRAME_RATE_HZ, GameSet};

// === Layout Constants ===

const BAR_PADDING: f32 = 10.0;
const BUTTON_GAP: f32 = 10.0;

/// Unit kinds offered on the bar, left to right, with their hotkey letter.
const SPAWN_BUTTONS: [(UnitKind, &str); 2] = [(UnitKind::Warrior, "W"), (UnitKind::Ranger, "R")];

// === Components ===

/// Tags the inner button that requests this kind for the ally team.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct SpawnButton(pub UnitKind);

/// Tags the inner pause button.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PauseButton;

/// Text under a spawn button showing its cooldown.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct CooldownReadout(pub CooldownSlot);

/// Readout text: `ready`, or the seconds left with one decimal.
#[must_use]
pub fn cooldown_text(frames: u32) -> String {
    if frames == 0 {
        "ready".to_string()
    } else {
        format!("{:.1}s", f64::from(frames) / FRAME_RATE_HZ)
    }
}

// === Systems ===

fn spawn_top_bar(mut commands: Commands) {
    commands.spawn((
        Name::new("Top Bar"),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(0.0),
            left: Val::Px(0.0),
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::FlexStart,
            padding: UiRect::all(Val::Px(BAR_PADDING)),
            ..default()
        },
        DespawnOnExit(GameState::InGame),
        children![
            spawn_section(),
            (
                Name::new("Bar Right"),
                Node::default(),
                children![widget::hud_button(
                    "II",
                    PauseButton,
                    |_: On<Pointer<Click>>, mut commands: Commands| {
                        commands.trigger(TogglePause);
                    },
                )],
            ),
        ],
    ));
}

fn spawn_section() -> impl Bundle {
    (
        Name::new("Bar Left"),
        Node {
            flex_direction: FlexDirection::Row,
            column_gap: Val::Px(BUTTON_GAP),
            ..default()
        },
        Children::spawn(SpawnWith(|parent: &mut ChildSpawner| {
            for (kind, letter) in SPAWN_BUTTONS {
                let Some(slot) = cooldown_slot(kind) else {
                    continue;
                };
                parent.spawn((
                    Name::new(format!("{} Slot", kind.display_name())),
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(4.0),
                        ..default()
                    },
                    children![
                        widget::hud_button(
                            letter,
                            SpawnButton(kind),
                            move |_: On<Pointer<Click>>, mut commands: Commands| {
                                commands.trigger(SpawnRequested {
                                    kind,
                                    team: Team::Ally,
                                });
                            },
                        ),
                        (
                            Name::new(format!("{} Cooldown", kind.display_name())),
                            CooldownReadout(slot),
                            Text::new(cooldown_text(0)),
                            TextFont::from_font_size(palette::FONT_SIZE_SMALL),
                            TextColor(palette::HEADER_TEXT),
                        ),
                    ],
                ));
            }
        })),
    )
}

/// Refreshes readouts and greys out buttons whose type is recharging.
fn update_cooldown_display(
    cooldowns: Res<Cooldowns>,
    mut readouts: Query<(&CooldownReadout, &mut Text)>,
    buttons: Query<(Entity, &SpawnButton, Has<ButtonDisabled>)>,
    mut commands: Commands,
) {
    if !cooldowns.is_changed() {
        return;
    }
    for (readout, mut text) in &mut readouts {
        text.0 = cooldown_text(cooldowns.remaining(readout.0));
    }
    for (entity, button, disabled) in &buttons {
        let ready = cooldown_slot(button.0).is_some_and(|slot| cooldowns.is_ready(slot));
        if ready && disabled {
            commands.entity(entity).remove::<ButtonDisabled>();
        } else if !ready && !disabled {
            commands.entity(entity).insert(ButtonDisabled);
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<SpawnButton>()
        .register_type::<PauseButton>()
        .register_type::<CooldownReadout>();

    app.add_systems(OnEnter(GameState::InGame), spawn_top_bar);
    app.add_systems(
        Update,
        update_cooldown_display
            .in_set(GameSet::Ui)
            .run_if(in_state(GameState::InGame)),
    );
}
