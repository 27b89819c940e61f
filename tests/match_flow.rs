//! Whole-match tests through the public plugin.

use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use lane_battle::gameplay::battlefield::Towns;
use lane_battle::gameplay::body::Body;
use lane_battle::gameplay::cooldown::{CooldownSlot, Cooldowns};
use lane_battle::gameplay::units::{Health, Unit};
use lane_battle::{GameState, Menu, SpawnRequested, Team, TogglePause, UnitKind, Verdict};
use pretty_assertions::assert_eq;

fn create_game_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.add_plugins(InputPlugin);
    app.add_plugins(lane_battle::plugin);
    // Enter the main menu, then open its overlay.
    app.update();
    app.update();
    app
}

fn start_match(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
    app.update();
}

fn tick_battle(app: &mut App, count: usize) {
    for _ in 0..count {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

fn unit_count(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<(), With<Unit>>();
    query.iter(app.world()).count()
}

fn current_menu(app: &App) -> Menu {
    *app.world().resource::<State<Menu>>().get()
}

fn body_xs(app: &mut App) -> Vec<f32> {
    let mut query = app.world_mut().query_filtered::<&Body, With<Unit>>();
    let mut xs: Vec<f32> = query.iter(app.world()).map(|body| body.center.x).collect();
    xs.sort_by(f32::total_cmp);
    xs
}

fn request(app: &mut App, kind: UnitKind) {
    app.world_mut().trigger(SpawnRequested {
        kind,
        team: Team::Ally,
    });
    // `World::trigger` leaves observer commands queued; apply them.
    app.world_mut().flush();
}

#[test]
fn game_opens_on_main_menu() {
    let app = create_game_app();
    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::MainMenu
    );
    assert_eq!(current_menu(&app), Menu::Main);
}

#[test]
fn starting_a_match_places_both_towns() {
    let mut app = create_game_app();
    start_match(&mut app);

    assert_eq!(current_menu(&app), Menu::None);
    assert_eq!(unit_count(&mut app), 2);
    assert!(app.world().resource::<Towns>().both().is_some());
    assert_eq!(*app.world().resource::<Verdict>(), Verdict::Pending);
}

#[test]
fn spawn_request_adds_a_pair_and_starts_cooldowns() {
    let mut app = create_game_app();
    start_match(&mut app);

    request(&mut app, UnitKind::Warrior);
    assert_eq!(unit_count(&mut app), 4);

    // Rejected while recharging.
    request(&mut app, UnitKind::Warrior);
    request(&mut app, UnitKind::Ranger);
    assert_eq!(unit_count(&mut app), 4);

    tick_battle(&mut app, 1);
    let cooldowns = app.world().resource::<Cooldowns>();
    assert_eq!(cooldowns.remaining(CooldownSlot::Warrior), 89);
    assert_eq!(cooldowns.remaining(CooldownSlot::Ranger), 59);
}

#[test]
fn requests_work_again_after_cooldown() {
    let mut app = create_game_app();
    start_match(&mut app);

    request(&mut app, UnitKind::Ranger);
    tick_battle(&mut app, 60);
    request(&mut app, UnitKind::Warrior);

    assert_eq!(unit_count(&mut app), 6);
}

#[test]
fn units_march_toward_each_other() {
    let mut app = create_game_app();
    start_match(&mut app);
    request(&mut app, UnitKind::Warrior);

    tick_battle(&mut app, 10);

    // Towns stay put, the warrior moved right, the ranger moved left.
    assert_eq!(body_xs(&mut app), vec![50.0, 110.0, 1170.0, 1230.0]);
}

#[test]
fn paused_battle_stands_still_and_toggle_is_reversible() {
    let mut app = create_game_app();
    start_match(&mut app);
    request(&mut app, UnitKind::Warrior);

    app.world_mut().trigger(TogglePause);
    app.update();
    assert_eq!(current_menu(&app), Menu::Pause);

    let before = body_xs(&mut app);
    tick_battle(&mut app, 30);
    assert_eq!(body_xs(&mut app), before);
    assert_eq!(
        app.world()
            .resource::<Cooldowns>()
            .remaining(CooldownSlot::Warrior),
        90
    );

    app.world_mut().trigger(TogglePause);
    app.update();
    assert_eq!(current_menu(&app), Menu::None);

    tick_battle(&mut app, 1);
    assert_ne!(body_xs(&mut app), before);
}

#[test]
fn spawning_still_works_while_paused() {
    let mut app = create_game_app();
    start_match(&mut app);
    app.world_mut().trigger(TogglePause);
    app.update();

    request(&mut app, UnitKind::Ranger);

    assert_eq!(unit_count(&mut app), 4);
}

#[test]
fn destroyed_enemy_town_wins_and_freezes_the_frame() {
    let mut app = create_game_app();
    start_match(&mut app);
    request(&mut app, UnitKind::Warrior);

    let enemy_town = app.world().resource::<Towns>().enemy.unwrap();
    app.world_mut().get_mut::<Health>(enemy_town).unwrap().current = 0.0;
    let before = body_xs(&mut app);

    tick_battle(&mut app, 1);

    assert_eq!(*app.world().resource::<Verdict>(), Verdict::Won);
    assert_eq!(*app.world().resource::<Towns>(), Towns::default());
    // The deciding frame skips the unit pass: nothing moved, nothing removed.
    assert_eq!(body_xs(&mut app), before);

    app.update();
    assert_eq!(current_menu(&app), Menu::Victory);

    // Spawning is closed once the match is decided.
    tick_battle(&mut app, 90);
    request(&mut app, UnitKind::Warrior);
    assert_eq!(unit_count(&mut app), 4);
}

#[test]
fn decided_match_stops_cooldowns_before_the_overlay_opens() {
    let mut app = create_game_app();
    start_match(&mut app);
    let enemy_town = app.world().resource::<Towns>().enemy.unwrap();
    app.world_mut().get_mut::<Health>(enemy_town).unwrap().current = 0.0;
    request(&mut app, UnitKind::Warrior);

    // Several fixed steps can run before the next state transition.
    tick_battle(&mut app, 3);

    assert_eq!(current_menu(&app), Menu::None);
    assert_eq!(*app.world().resource::<Verdict>(), Verdict::Won);
    let cooldowns = app.world().resource::<Cooldowns>();
    assert_eq!(cooldowns.remaining(CooldownSlot::Warrior), 89);
    assert_eq!(cooldowns.remaining(CooldownSlot::Ranger), 59);
}

#[test]
fn returning_to_menu_clears_the_match() {
    let mut app = create_game_app();
    start_match(&mut app);
    request(&mut app, UnitKind::Warrior);

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::MainMenu);
    app.update();
    app.update();

    assert_eq!(unit_count(&mut app), 0);
    assert_eq!(*app.world().resource::<Towns>(), Towns::default());
    assert_eq!(current_menu(&app), Menu::Main);

    // A fresh match starts clean.
    start_match(&mut app);
    assert_eq!(unit_count(&mut app), 2);
    assert_eq!(*app.world().resource::<Cooldowns>(), Cooldowns::default());
}

#[test]
fn lone_warrior_loses_to_ranger_and_the_ally_town_falls() {
    let mut app = create_game_app();
    start_match(&mut app);
    request(&mut app, UnitKind::Warrior);

    let mut frames = 0;
    while *app.world().resource::<Verdict>() == Verdict::Pending && frames < 3000 {
        tick_battle(&mut app, 1);
        frames += 1;
    }

    assert_eq!(*app.world().resource::<Verdict>(), Verdict::Lost);
    app.update();
    assert_eq!(current_menu(&app), Menu::Defeat);
}
