//! Battlefield layout, the two towns, and match setup.
//!
//! Bodies live in screen pixels (origin top-left, y down) on a fixed
//! 1280×720 field. [`screen_to_world`] maps them onto the 2D camera.

mod camera;
mod renderer;

use bevy::prelude::*;

use crate::gameplay::units::{SpawnSequence, Team, Unit, UnitKind, spawn_unit};
use crate::menus::Menu;
use crate::screens::GameState;
use crate::theme::palette;
use crate::{Z_BACKGROUND, Z_GROUND};

// === Layout Constants ===

/// Field width in pixels.
pub const FIELD_WIDTH: f32 = 1280.0;

/// Field height in pixels.
pub const FIELD_HEIGHT: f32 = 720.0;

/// Top edge of the ground strip. Bodies stand on it.
pub const GROUND_TOP: f32 = 665.0;

// === Markers ===

/// The sky behind everything.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Backdrop;

/// The ground strip under the lane.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Ground;

// === Resources ===

/// The two towns of the running match. Both are `None` outside a match and
/// after the outcome has been decided.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct Towns {
    pub ally: Option<Entity>,
    pub enemy: Option<Entity>,
}

impl Towns {
    /// Both references, only while both are set.
    #[must_use]
    pub const fn both(&self) -> Option<(Entity, Entity)> {
        match (self.ally, self.enemy) {
            (Some(ally), Some(enemy)) => Some((ally, enemy)),
            _ => None,
        }
    }

    pub const fn clear(&mut self) {
        self.ally = None;
        self.enemy = None;
    }
}

// === Helper Functions ===

/// Screen pixel (y down, origin top-left) to world space (y up, origin center).
#[must_use]
pub fn screen_to_world(screen: Vec2) -> Vec2 {
    Vec2::new(screen.x - FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0 - screen.y)
}

// === Systems ===

/// Anything left over from a previous match goes before the new one starts.
fn clear_leftover_units(units: Query<Entity, With<Unit>>, mut commands: Commands) {
    for entity in &units {
        commands.entity(entity).despawn();
    }
}

/// Lays out the field and spawns both towns. The towns take the first two
/// places in the spawn sequence.
fn spawn_battlefield(
    mut commands: Commands,
    mut sequence: ResMut<SpawnSequence>,
    mut towns: ResMut<Towns>,
) {
    *sequence = SpawnSequence::default();

    commands.spawn((
        Name::new("Backdrop"),
        Backdrop,
        Sprite::from_color(palette::SKY, Vec2::new(FIELD_WIDTH, FIELD_HEIGHT)),
        Transform::from_xyz(0.0, 0.0, Z_BACKGROUND),
        DespawnOnExit(GameState::InGame),
    ));

    let ground_height = FIELD_HEIGHT - GROUND_TOP;
    let ground_center = screen_to_world(Vec2::new(
        FIELD_WIDTH / 2.0,
        GROUND_TOP + ground_height / 2.0,
    ));
    commands.spawn((
        Name::new("Ground"),
        Ground,
        Sprite::from_color(palette::GROUND, Vec2::new(FIELD_WIDTH, ground_height)),
        Transform::from_translation(ground_center.extend(Z_GROUND)),
        DespawnOnExit(GameState::InGame),
    ));

    *towns = Towns {
        ally: Some(spawn_unit(
            &mut commands,
            &mut sequence,
            UnitKind::Town,
            Team::Ally,
        )),
        enemy: Some(spawn_unit(
            &mut commands,
            &mut sequence,
            UnitKind::Town,
            Team::Enemy,
        )),
    };
    info!("match started");
}

fn open_battle(mut next_menu: ResMut<NextState<Menu>>) {
    next_menu.set(Menu::None);
}

fn forget_towns(mut towns: ResMut<Towns>) {
    towns.clear();
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Backdrop>()
        .register_type::<Ground>()
        .register_type::<Towns>()
        .init_resource::<Towns>();

    app.add_systems(Startup, camera::spawn_camera);
    app.add_systems(
        OnEnter(GameState::InGame),
        (clear_leftover_units, spawn_battlefield, open_battle).chain(),
    );
    app.add_systems(OnExit(GameState::InGame), forget_towns);

    renderer::plugin(app);
}
