//! Unit components, the archetype table, and the single unit spawner.

mod movement;
pub mod spawn;

use bevy::prelude::*;

use crate::gameplay::body::{Body, Side, Velocity};
use crate::gameplay::combat::health_bar::HealthBarConfig;
use crate::screens::GameState;
use crate::theme::palette;
use crate::{GameSet, Z_TOWN, Z_UNIT};

// === Constants ===

/// Body size of foot units (Warrior, Ranger).
pub const FOOT_UNIT_SIZE: Vec2 = Vec2::new(100.0, 150.0);

/// Body size of a town.
pub const TOWN_SIZE: Vec2 = Vec2::new(200.0, 250.0);

/// Vertical center of every body on the lane.
pub const LANE_Y: f32 = 590.0;

/// Where ally units enter the lane.
pub const ALLY_SPAWN_X: f32 = 100.0;

/// Where enemy units enter the lane.
pub const ENEMY_SPAWN_X: f32 = 1180.0;

/// Ally town center.
pub const ALLY_TOWN_X: f32 = 50.0;

/// Enemy town center.
pub const ENEMY_TOWN_X: f32 = 1230.0;

// === Components ===

/// Marker for everything that fights: foot units and towns.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Unit;

/// Which side a unit fights for.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component)]
pub enum Team {
    Ally,
    Enemy,
}

impl Team {
    /// Allies hold the left end of the lane, enemies the right.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::Ally => Side::Left,
            Self::Enemy => Side::Right,
        }
    }

    /// Sign applied to move speed: allies walk right, enemies walk left.
    #[must_use]
    pub const fn heading(self) -> f32 {
        match self {
            Self::Ally => 1.0,
            Self::Enemy => -1.0,
        }
    }
}

/// Remaining life. Dead at or below zero.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    #[must_use]
    pub const fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// The enemy currently being drained. A handle, not ownership: a despawned
/// target simply stops resolving.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct CurrentTarget(pub Option<Entity>);

/// Damage per frame and reach beyond the hit box.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CombatStats {
    pub damage: f32,
    pub range: f32,
}

/// Signed horizontal speed in pixels per frame.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Movement {
    pub speed: f32,
}

/// What the unit is doing this frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component)]
pub enum UnitState {
    #[default]
    Walk,
    Fight,
}

/// Position in the spawn sequence. Ordered passes iterate units by this.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Reflect)]
#[reflect(Component)]
pub struct SpawnOrder(pub u64);

// === Unit Type System ===

/// The closed set of unit archetypes.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component)]
pub enum UnitKind {
    Warrior,
    Ranger,
    Town,
}

impl UnitKind {
    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Ranger => "Ranger",
            Self::Town => "Town",
        }
    }

    /// The archetype sent against a spawn of this kind.
    #[must_use]
    pub const fn counterpart(self) -> Option<Self> {
        match self {
            Self::Warrior => Some(Self::Ranger),
            Self::Ranger => Some(Self::Warrior),
            Self::Town => None,
        }
    }
}

/// Fixed parameters of an archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitStats {
    pub hp: f32,
    pub damage: f32,
    /// Unsigned; the team decides the direction.
    pub move_speed: f32,
    pub attack_range: f32,
    pub size: Vec2,
}

/// Look up stats for a unit kind. Rangers are frailer on the ally side.
#[must_use]
pub const fn unit_stats(kind: UnitKind, team: Team) -> UnitStats {
    match kind {
        UnitKind::Warrior => UnitStats {
            hp: 100.0,
            damage: 1.0,
            move_speed: 1.0,
            attack_range: 10.0,
            size: FOOT_UNIT_SIZE,
        },
        UnitKind::Ranger => UnitStats {
            hp: match team {
                Team::Ally => 70.0,
                Team::Enemy => 100.0,
            },
            damage: 0.3,
            move_speed: 1.0,
            attack_range: 300.0,
            size: FOOT_UNIT_SIZE,
        },
        UnitKind::Town => UnitStats {
            hp: 100.0,
            damage: 0.0,
            move_speed: 0.0,
            attack_range: 0.0,
            size: TOWN_SIZE,
        },
    }
}

/// Body center a freshly spawned unit starts at.
#[must_use]
pub const fn spawn_anchor(kind: UnitKind, team: Team) -> Vec2 {
    let x = match (kind, team) {
        (UnitKind::Town, Team::Ally) => ALLY_TOWN_X,
        (UnitKind::Town, Team::Enemy) => ENEMY_TOWN_X,
        (_, Team::Ally) => ALLY_SPAWN_X,
        (_, Team::Enemy) => ENEMY_SPAWN_X,
    };
    Vec2::new(x, LANE_Y)
}

// === Resources ===

/// Hands out `SpawnOrder` values. Reset when a match starts.
#[derive(Resource, Debug, Default, Reflect)]
#[reflect(Resource)]
pub struct SpawnSequence(u64);

impl SpawnSequence {
    pub fn next(&mut self) -> SpawnOrder {
        let order = SpawnOrder(self.0);
        self.0 += 1;
        order
    }
}

/// Spawn a unit entity with all required components.
/// Single source of truth for the unit archetype.
pub fn spawn_unit(
    commands: &mut Commands,
    sequence: &mut SpawnSequence,
    kind: UnitKind,
    team: Team,
) -> Entity {
    let stats = unit_stats(kind, team);
    let z = if kind == UnitKind::Town { Z_TOWN } else { Z_UNIT };

    commands
        .spawn((
            Name::new(format!("{team:?} {}", kind.display_name())),
            HealthBarConfig::for_body(stats.size),
            Unit,
            kind,
            team,
            team.side(),
            UnitState::Walk,
            CurrentTarget(None),
            Health::new(stats.hp),
            CombatStats {
                damage: stats.damage,
                range: stats.attack_range,
            },
            Movement {
                speed: stats.move_speed * team.heading(),
            },
            Body::new(spawn_anchor(kind, team), stats.size),
            Velocity::default(),
            sequence.next(),
        ))
        .insert((
            Sprite::from_color(
                palette::unit_color(kind, team, UnitState::Walk),
                stats.size,
            ),
            Transform::from_xyz(0.0, 0.0, z),
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Unit>()
        .register_type::<UnitKind>()
        .register_type::<Team>()
        .register_type::<Health>()
        .register_type::<CurrentTarget>()
        .register_type::<CombatStats>()
        .register_type::<Movement>()
        .register_type::<UnitState>()
        .register_type::<SpawnOrder>()
        .register_type::<SpawnSequence>()
        .init_resource::<SpawnSequence>();

    spawn::plugin(app);

    app.add_systems(
        FixedUpdate,
        movement::steer_units
            .in_set(GameSet::Movement)
            .before(crate::gameplay::body::apply_velocity),
    );
}
