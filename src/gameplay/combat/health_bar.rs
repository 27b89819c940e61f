//! Health display: a bar and an `HP:` readout riding above every unit.

use bevy::prelude::*;

use crate::gameplay::units::Health;
use crate::theme::palette;
use crate::{GameSet, screens::GameState};

// === Constants ===

/// Bar thickness (pixels).
pub const HEALTH_BAR_HEIGHT: f32 = 6.0;

/// Gap between the top of the body and the bar (pixels).
pub const HEALTH_BAR_GAP: f32 = 12.0;

/// Extra lift of the text readout above the bar (pixels).
const LIFE_LABEL_LIFT: f32 = 16.0;

// === Components ===

/// Marker: red background bar (full width, shows "missing" HP).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct HealthBarBackground;

/// Marker: green foreground bar (scales with current/max HP).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct HealthBarFill;

/// Marker: `HP: 87.3` text above the bar.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct LifeLabel;

/// Configuration for health bar sizing. Required on all entities with `Health`.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct HealthBarConfig {
    pub width: f32,
    pub height: f32,
    pub y_offset: f32,
}

impl HealthBarConfig {
    /// A bar as wide as the body, floating just above it.
    #[must_use]
    pub fn for_body(size: Vec2) -> Self {
        Self {
            width: size.x,
            height: HEALTH_BAR_HEIGHT,
            y_offset: size.y / 2.0 + HEALTH_BAR_GAP,
        }
    }
}

/// Readout text with one decimal, e.g. `HP: 99.7`. Negative life reads as zero.
#[must_use]
pub fn life_text(life: f32) -> String {
    format!("HP: {:.1}", life.max(0.0))
}

// === Systems ===

/// Spawns health bar children when `Health` is added to an entity with `HealthBarConfig`.
fn spawn_health_bars(
    add: On<Add, Health>,
    configs: Query<(&HealthBarConfig, &Health)>,
    mut commands: Commands,
) {
    let Ok((config, health)) = configs.get(add.entity) else {
        return;
    };
    commands.entity(add.entity).with_children(|parent| {
        parent.spawn((
            Name::new("Health Bar BG"),
            Sprite::from_color(
                palette::HEALTH_BAR_BG,
                Vec2::new(config.width, config.height),
            ),
            Transform::from_xyz(0.0, config.y_offset, 1.0),
            HealthBarBackground,
        ));
        parent.spawn((
            Name::new("Health Bar Fill"),
            Sprite::from_color(
                palette::HEALTH_BAR_FILL,
                Vec2::new(config.width, config.height),
            ),
            Transform::from_xyz(0.0, config.y_offset, 1.1),
            HealthBarFill,
        ));
        parent.spawn((
            Name::new("Life Label"),
            Text2d::new(life_text(health.current)),
            TextFont::from_font_size(palette::FONT_SIZE_SMALL),
            TextColor(palette::LIFE_TEXT),
            Transform::from_xyz(0.0, config.y_offset + LIFE_LABEL_LIFT, 1.2),
            LifeLabel,
        ));
    });
}

/// Updates bar width and readout from current/max HP.
/// Runs in `GameSet::Ui`.
fn update_health_bars(
    health_query: Query<(&Health, &Children, &HealthBarConfig), Changed<Health>>,
    mut bar_query: Query<&mut Transform, With<HealthBarFill>>,
    mut label_query: Query<&mut Text2d, With<LifeLabel>>,
) {
    for (health, children, config) in &health_query {
        let ratio = (health.current / health.max).clamp(0.0, 1.0);
        for child in children.iter() {
            if let Ok(mut transform) = bar_query.get_mut(child) {
                transform.scale.x = ratio;
                // Shift left to keep bar left-aligned as it shrinks
                transform.translation.x = config.width.mul_add(-(1.0 - ratio), 0.0) / 2.0;
            }
            if let Ok(mut label) = label_query.get_mut(child) {
                label.0 = life_text(health.current);
            }
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<HealthBarBackground>()
        .register_type::<HealthBarFill>()
        .register_type::<LifeLabel>()
        .register_type::<HealthBarConfig>();

    // Observer: spawn health bars immediately when Health is added
    app.add_observer(spawn_health_bars);

    // Rendering follows life even while paused so overlays show the frozen state.
    app.add_systems(
        Update,
        update_health_bars
            .in_set(GameSet::Ui)
            .run_if(in_state(GameState::InGame)),
    );
}


#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::testing::assert_entity_count;
    use pretty_assertions::assert_eq;

    fn create_health_bar_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_observer(spawn_health_bars);
        app.add_systems(Update, update_health_bars);
        app
    }

    fn unit_health_bar_config() -> HealthBarConfig {
        HealthBarConfig::for_body(Vec2::new(100.0, 150.0))
    }

    #[test]
    fn health_bar_spawned_on_entity_with_health() {
        let mut app = create_health_bar_test_app();

        app.world_mut()
            .spawn((unit_health_bar_config(), Health::new(100.0)));
        app.update();
        app.update();

        assert_entity_count::<With<HealthBarBackground>>(&mut app, 1);
        assert_entity_count::<With<HealthBarFill>>(&mut app, 1);
        assert_entity_count::<With<LifeLabel>>(&mut app, 1);
    }

    #[test]
    fn health_bar_fill_scales_with_damage() {
        let mut app = create_health_bar_test_app();

        let entity = app
            .world_mut()
            .spawn((unit_health_bar_config(), Health::new(100.0)))
            .id();
        app.update();
        app.update();

        app.world_mut().get_mut::<Health>(entity).unwrap().current = 50.0;
        app.update();

        let mut bar_query = app
            .world_mut()
            .query_filtered::<&Transform, With<HealthBarFill>>();
        let bar_transform = bar_query.single(app.world()).unwrap();
        assert!(
            (bar_transform.scale.x - 0.5).abs() < f32::EPSILON,
            "Health bar fill should be 0.5, got {}",
            bar_transform.scale.x
        );
        // Left-alignment offset: width * -(1 - ratio) / 2 = 100 * -0.5 / 2 = -25
        assert!((bar_transform.translation.x + 25.0).abs() < f32::EPSILON);
    }

    #[test]
    fn life_label_follows_health() {
        let mut app = create_health_bar_test_app();

        let entity = app
            .world_mut()
            .spawn((unit_health_bar_config(), Health::new(70.0)))
            .id();
        app.update();
        app.update();

        app.world_mut().get_mut::<Health>(entity).unwrap().current = 42.3;
        app.update();

        let mut label_query = app
            .world_mut()
            .query_filtered::<&Text2d, With<LifeLabel>>();
        let label = label_query.single(app.world()).unwrap();
        assert_eq!(label.0, "HP: 42.3");
    }

    #[test]
    fn health_bar_despawned_with_parent() {
        let mut app = create_health_bar_test_app();

        let entity = app
            .world_mut()
            .spawn((unit_health_bar_config(), Health::new(100.0)))
            .id();
        app.update();
        app.update();

        assert_entity_count::<With<HealthBarBackground>>(&mut app, 1);

        app.world_mut().despawn(entity);

        assert_entity_count::<With<HealthBarBackground>>(&mut app, 0);
        assert_entity_count::<With<HealthBarFill>>(&mut app, 0);
        assert_entity_count::<With<LifeLabel>>(&mut app, 0);
    }
}
