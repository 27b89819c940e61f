//! Button hover/press feedback, plus a greyed-out look for disabled buttons.

use bevy::picking::hover::Hovered;
use bevy::prelude::*;
use bevy::ui::Pressed;

use super::palette;

/// Colors for the none/hovered/pressed button states.
/// Add alongside `Button` and `BackgroundColor` on clickable UI elements.
#[derive(Component, Debug, Reflect)]
#[reflect(Component)]
#[require(Hovered)]
pub struct InteractionPalette {
    pub none: Color,
    pub hovered: Color,
    pub pressed: Color,
}

/// A button that is visible but currently refuses clicks (spawn buttons while
/// their type recharges). Clicks still reach observers; they decide.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ButtonDisabled;

fn background_for(
    palette: &InteractionPalette,
    pressed: bool,
    hovered: bool,
    disabled: bool,
) -> Color {
    match (disabled, pressed, hovered) {
        (true, _, _) => palette::BUTTON_COOLING_DOWN,
        (false, true, _) => palette.pressed,
        (false, false, true) => palette.hovered,
        (false, false, false) => palette.none,
    }
}

fn apply_interaction_palette(
    mut palette_query: Query<(
        Has<Pressed>,
        &Hovered,
        Has<ButtonDisabled>,
        &InteractionPalette,
        &mut BackgroundColor,
    )>,
) {
    for (pressed, Hovered(hovered), disabled, palette, mut background) in &mut palette_query {
        let color = background_for(palette, pressed, *hovered, disabled);
        if background.0 != color {
            background.0 = color;
        }
    }
}

pub fn plugin(app: &mut App) {
    app.register_type::<InteractionPalette>()
        .register_type::<ButtonDisabled>();
    app.add_systems(Update, apply_interaction_palette);
}
