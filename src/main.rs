//! Lane battle entry point.

use bevy::log::LogPlugin;
use bevy::prelude::*;
use lane_battle::gameplay::battlefield::{FIELD_HEIGHT, FIELD_WIDTH};

fn main() -> AppExit {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Lane Battle".to_string(),
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    resolution: (FIELD_WIDTH as u32, FIELD_HEIGHT as u32).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: "info,lane_battle=debug,wgpu=error".to_string(),
                ..default()
            }),
    );

    #[cfg(feature = "dev")]
    app.add_plugins((
        bevy_inspector_egui::bevy_egui::EguiPlugin::default(),
        bevy_inspector_egui::quick::WorldInspectorPlugin::new(),
    ));

    app.add_plugins(lane_battle::plugin);
    app.run()
}
