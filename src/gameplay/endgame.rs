//! Endgame detection: watches both towns and decides the match.

use bevy::prelude::*;

use crate::GameSet;
use crate::gameplay::battlefield::Towns;
use crate::gameplay::units::Health;
use crate::menus::Menu;
use crate::screens::GameState;

/// How the running match stands. Once decided, the rest of the frame's
/// battle step is skipped and no more units can be requested.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub enum Verdict {
    #[default]
    Pending,
    Won,
    Lost,
}

/// Run condition: the match has not been decided yet.
pub fn battle_undecided(verdict: Res<Verdict>) -> bool {
    *verdict == Verdict::Pending
}

/// Checks the enemy town first, then the ally town. A fallen town decides the
/// match, opens the matching overlay and clears both town references, so this
/// fires at most once per match.
fn detect_outcome(
    mut towns: ResMut<Towns>,
    health: Query<&Health>,
    mut verdict: ResMut<Verdict>,
    mut next_menu: ResMut<NextState<Menu>>,
) {
    let Some((ally, enemy)) = towns.both() else {
        return;
    };
    // A town that no longer resolves counts as fallen.
    let fallen = |town: Entity| health.get(town).map_or(true, Health::is_dead);

    let (decided, menu) = if fallen(enemy) {
        (Verdict::Won, Menu::Victory)
    } else if fallen(ally) {
        (Verdict::Lost, Menu::Defeat)
    } else {
        return;
    };

    info!("match decided: {decided:?}");
    *verdict = decided;
    towns.clear();
    next_menu.set(menu);
}

fn reset_verdict(mut verdict: ResMut<Verdict>) {
    *verdict = Verdict::Pending;
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Verdict>().init_resource::<Verdict>();

    app.add_systems(OnEnter(GameState::InGame), reset_verdict);
    app.add_systems(FixedUpdate, detect_outcome.in_set(GameSet::Outcome));
}
