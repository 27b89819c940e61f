//! Development tools, only compiled with the `dev` feature.
//!
//! `F1` toggles hit box (green) and attack box (red) outlines.
//! `E` drops an enemy Warrior on the lane, ignoring cooldowns.

use bevy::prelude::*;

use crate::GameSet;
use crate::gameplay::battlefield::screen_to_world;
use crate::gameplay::body::{Body, Side};
use crate::gameplay::units::{CombatStats, SpawnSequence, Team, Unit, UnitKind, spawn_unit};
use crate::menus::Menu;
use crate::screens::GameState;
use crate::theme::palette;

/// Whether box outlines are drawn. Off at startup.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct DebugBoxes(pub bool);

fn toggle_debug_boxes(keyboard: Res<ButtonInput<KeyCode>>, mut boxes: ResMut<DebugBoxes>) {
    if keyboard.just_pressed(KeyCode::F1) {
        boxes.0 = !boxes.0;
        info!("debug boxes {}", if boxes.0 { "on" } else { "off" });
    }
}

/// Outline in world space for a screen-space rect.
fn outline(gizmos: &mut Gizmos, rect: Rect, color: Color) {
    let center = screen_to_world(rect.center());
    gizmos.rect_2d(Isometry2d::from_translation(center), rect.size(), color);
}

fn draw_debug_boxes(mut gizmos: Gizmos, units: Query<(&Body, &Side, &CombatStats), With<Unit>>) {
    for (body, &side, stats) in &units {
        outline(&mut gizmos, body.attack_box(side, stats.range), palette::ATTACK_BOX);
        outline(&mut gizmos, body.hit_box(), palette::HIT_BOX);
    }
}

fn debug_spawn_enemy(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sequence: ResMut<SpawnSequence>,
    mut commands: Commands,
) {
    if keyboard.just_pressed(KeyCode::KeyE) {
        let entity = spawn_unit(&mut commands, &mut sequence, UnitKind::Warrior, Team::Enemy);
        debug!("debug enemy {entity:?}");
    }
}

fn debug_boxes_enabled(boxes: Res<DebugBoxes>) -> bool {
    boxes.0
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<DebugBoxes>()
        .init_resource::<DebugBoxes>();

    app.add_systems(
        Update,
        (
            toggle_debug_boxes.in_set(GameSet::Input),
            debug_spawn_enemy
                .in_set(GameSet::Input)
                .run_if(in_state(GameState::InGame).and(in_state(Menu::None))),
            draw_debug_boxes
                .in_set(GameSet::Ui)
                .run_if(in_state(GameState::InGame).and(debug_boxes_enabled)),
        ),
    );
}
