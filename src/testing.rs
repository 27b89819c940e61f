//! Shared helpers for headless tests.

#![cfg(test)]

use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::menus::Menu;
use crate::screens::GameState;

/// `MinimalPlugins` + states + keyboard/mouse input resources. Starts in
/// `GameState::MainMenu` with no overlay.
pub fn create_base_test_app() -> App {
    let mut app = create_base_test_app_no_input();
    init_input_resources(&mut app);
    app
}

/// Same as [`create_base_test_app`] but without input resources, for systems
/// that never read the keyboard.
pub fn create_base_test_app_no_input() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.init_state::<GameState>();
    app.init_state::<Menu>();
    app
}

pub fn init_input_resources(app: &mut App) {
    app.init_resource::<ButtonInput<KeyCode>>();
    app.init_resource::<ButtonInput<MouseButton>>();
}

/// Moves to `GameState::InGame` and runs one frame so `OnEnter` systems fire.
pub fn transition_to_ingame(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
}

/// Runs `count` battle frames directly, independent of wall-clock time.
pub fn tick_battle(app: &mut App, count: usize) {
    for _ in 0..count {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

/// Presses `key` for exactly one update.
pub fn tap_key(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    input.release(key);
    input.clear();
}

#[track_caller]
pub fn assert_entity_count<F: QueryFilter>(app: &mut App, expected: usize) {
    let mut query = app.world_mut().query_filtered::<(), F>();
    let actual = query.iter(app.world()).count();
    assert_eq!(
        actual, expected,
        "expected {expected} entities matching filter, found {actual}"
    );
}
