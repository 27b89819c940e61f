//! The single 2D camera. It never moves: the whole field is always in view.

use bevy::camera::ScalingMode;
use bevy::prelude::*;

use super::{FIELD_HEIGHT, FIELD_WIDTH};

pub(super) fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Camera"),
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            // Letterbox rather than crop when the window aspect differs.
            scaling_mode: ScalingMode::AutoMin {
                min_width: FIELD_WIDTH,
                min_height: FIELD_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_entity_count;

    #[test]
    fn camera_frames_whole_field() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_systems(Startup, spawn_camera);
        app.update();

        assert_entity_count::<With<Camera2d>>(&mut app, 1);
        let mut query = app.world_mut().query::<&Projection>();
        let projection = query.single(app.world()).unwrap();
        let Projection::Orthographic(ortho) = projection else {
            panic!("expected an orthographic projection");
        };
        assert!(matches!(
            ortho.scaling_mode,
            ScalingMode::AutoMin { min_width, min_height }
                if min_width == FIELD_WIDTH && min_height == FIELD_HEIGHT
        ));
    }
}
