//! Shared look: colors (UI and units), button feedback, widget constructors.

pub mod interaction;
pub mod palette;
pub mod widget;

use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.add_plugins(interaction::plugin);
}
