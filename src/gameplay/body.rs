//! Movable rectangular bodies: position, size, velocity, and the box geometry
//! the combat scan works on.
//!
//! Coordinates are battlefield pixels with the origin at the top-left corner
//! and `y` growing downward. The renderer maps them into world space.

use bevy::prelude::*;

/// Axis-aligned body of anything that lives on the battlefield.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Body {
    pub center: Vec2,
    pub size: Vec2,
}

impl Body {
    #[must_use]
    pub const fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// The vulnerable area: exactly the body bounds.
    #[must_use]
    pub fn hit_box(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }

    /// The hit box widened by `range` toward the side the body faces.
    #[must_use]
    pub fn attack_box(&self, side: Side, range: f32) -> Rect {
        let mut reach = self.hit_box();
        match side {
            Side::Left => reach.max.x += range,
            Side::Right => reach.min.x -= range,
        }
        reach
    }
}

/// Which end of the lane a body belongs to. A body on the left reaches to the
/// right and vice versa.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component)]
pub enum Side {
    Left,
    Right,
}

/// Per-frame displacement in battlefield pixels.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Velocity(pub Vec2);

/// Strict rectangle overlap: boxes that merely share an edge do not collide,
/// and an empty box never collides.
#[must_use]
pub fn boxes_overlap(a: Rect, b: Rect) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}

/// Moves every body by its velocity. Runs in `GameSet::Movement`.
pub(super) fn apply_velocity(mut bodies: Query<(&mut Body, &Velocity)>) {
    for (mut body, velocity) in &mut bodies {
        if velocity.0 == Vec2::ZERO {
            continue;
        }
        body.center += velocity.0;
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Body>()
        .register_type::<Side>()
        .register_type::<Velocity>();
}
