//! Lane battle: two armies march along a single lane toward each other's town.
//!
//! The battle advances in fixed 30 Hz steps. Each step runs, in order:
//! target acquisition, cooldown tick, outcome check, removal of the fallen,
//! attack resolution and movement. See [`GameSet`].

#[cfg(feature = "dev")]
mod dev_tools;
pub mod gameplay;
pub mod menus;
pub mod screens;
#[cfg(test)]
pub mod testing;
pub mod theme;

use bevy::prelude::*;

pub use gameplay::endgame::Verdict;
pub use gameplay::units::spawn::SpawnRequested;
pub use gameplay::units::{Team, UnitKind};
pub use menus::{Menu, TogglePause};
pub use screens::GameState;

/// Simulation frames per second. One `FixedUpdate` step is one frame.
pub const FRAME_RATE_HZ: f64 = 30.0;

// === Render Layers ===

pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_GROUND: f32 = 1.0;
pub const Z_TOWN: f32 = 2.0;
pub const Z_UNIT: f32 = 3.0;

/// Ordering of gameplay work.
///
/// `Input` and `Ui` run in `Update`. The remaining sets make up one battle
/// frame in `FixedUpdate` and run in declaration order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Targeting,
    Cooldown,
    Outcome,
    Death,
    Combat,
    Movement,
    Ui,
}

/// Run condition: a match is on screen and no overlay covers it.
pub fn gameplay_running(game: Res<State<GameState>>, menu: Res<State<Menu>>) -> bool {
    *game.get() == GameState::InGame && *menu.get() == Menu::None
}

/// Everything except the window, renderer and input backends, which
/// `main.rs` (or a test harness) provides.
pub fn plugin(app: &mut App) {
    app.insert_resource(Time::<Fixed>::from_hz(FRAME_RATE_HZ));

    app.configure_sets(Update, (GameSet::Input, GameSet::Ui).chain());
    // A decided match freezes at once, before the overlay state applies.
    let frame_live = || gameplay_running.and(gameplay::endgame::battle_undecided);
    app.configure_sets(
        FixedUpdate,
        (
            GameSet::Targeting.run_if(frame_live()),
            GameSet::Cooldown.run_if(frame_live()),
            GameSet::Outcome.run_if(gameplay_running),
            GameSet::Death.run_if(frame_live()),
            GameSet::Combat.run_if(frame_live()),
            GameSet::Movement.run_if(frame_live()),
        )
            .chain(),
    );

    app.add_plugins((
        screens::plugin,
        menus::plugin,
        theme::plugin,
        gameplay::plugin,
    ));

    #[cfg(feature = "dev")]
    app.add_plugins(dev_tools::plugin);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{create_base_test_app, transition_to_ingame};
    use pretty_assertions::assert_eq;

    #[test]
    fn fixed_step_matches_frame_rate() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(Time::<Fixed>::from_hz(FRAME_RATE_HZ));
        let fixed = app.world().resource::<Time<Fixed>>();
        assert!((fixed.timestep().as_secs_f64() - 1.0 / FRAME_RATE_HZ).abs() < 1e-6);
    }

    #[test]
    fn render_layers_stack_upward() {
        assert!(Z_BACKGROUND < Z_GROUND);
        assert!(Z_GROUND < Z_TOWN);
        assert!(Z_TOWN < Z_UNIT);
    }

    #[test]
    fn gameplay_stops_outside_matches_and_under_overlays() {
        let mut app = create_base_test_app();
        let running = |app: &mut App| app.world_mut().run_system_cached(gameplay_running).unwrap();

        assert!(!running(&mut app));

        transition_to_ingame(&mut app);
        assert!(running(&mut app));

        app.world_mut()
            .resource_mut::<NextState<Menu>>()
            .set(Menu::Pause);
        app.update();
        assert!(!running(&mut app));
    }

    #[test]
    fn battle_frames_only_advance_during_play() {
        use crate::gameplay::cooldown::{CooldownSlot, Cooldowns};
        use crate::testing::tick_battle;

        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            bevy::state::app::StatesPlugin,
            bevy::input::InputPlugin,
        ));
        app.add_plugins(plugin);
        app.update();

        // Main menu: nothing ticks.
        app.world_mut()
            .resource_mut::<Cooldowns>()
            .set(CooldownSlot::Warrior, 10);
        tick_battle(&mut app, 3);
        assert_eq!(
            app.world()
                .resource::<Cooldowns>()
                .remaining(CooldownSlot::Warrior),
            10
        );

        // In a match the counter runs down one per frame.
        transition_to_ingame(&mut app);
        app.update();
        app.world_mut()
            .resource_mut::<Cooldowns>()
            .set(CooldownSlot::Warrior, 10);
        tick_battle(&mut app, 3);
        assert_eq!(
            app.world()
                .resource::<Cooldowns>()
                .remaining(CooldownSlot::Warrior),
            7
        );
    }
}
