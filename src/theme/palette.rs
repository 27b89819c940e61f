//! Color constants and font size tokens for consistent UI theming.

use bevy::prelude::*;

use crate::gameplay::units::{Team, UnitKind, UnitState};

// === Text Colors ===

/// Header/title text color (white).
pub const HEADER_TEXT: Color = Color::WHITE;

/// Body/subtitle text color (light gray).
pub const BODY_TEXT: Color = Color::srgb(0.7, 0.7, 0.7);

/// Button label text color.
pub const BUTTON_TEXT: Color = Color::WHITE;

/// `HP:` readout above units.
pub const LIFE_TEXT: Color = Color::BLACK;

// === UI Backgrounds ===

/// Semi-transparent dark overlay for pause/modal screens.
pub const OVERLAY_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);

/// Panel background (dark blue-gray, nearly opaque).
pub const PANEL_BACKGROUND: Color = Color::srgba(0.1, 0.1, 0.15, 0.95);

/// Panel border (light blue-gray, semi-transparent).
pub const PANEL_BORDER: Color = Color::srgba(0.5, 0.5, 0.6, 0.8);

// === Button Colors ===

pub const BUTTON_BACKGROUND: Color = Color::srgb(0.0, 0.0, 1.0);
pub const BUTTON_HOVERED_BACKGROUND: Color = Color::srgb(0.0, 1.0, 0.0);
pub const BUTTON_PRESSED_BACKGROUND: Color = Color::srgb(1.0, 0.0, 0.0);

/// Spawn button while its type is recharging.
pub const BUTTON_COOLING_DOWN: Color = Color::srgb(0.3, 0.3, 0.35);

// === Battlefield Colors ===

pub const SKY: Color = Color::srgb(0.55, 0.75, 0.92);
pub const GROUND: Color = Color::srgb(0.35, 0.55, 0.25);

pub const ALLY_TOWN: Color = Color::srgb(0.2, 0.3, 0.8);
pub const ENEMY_TOWN: Color = Color::srgb(0.8, 0.2, 0.2);

// === Debug Boxes ===

pub const ATTACK_BOX: Color = Color::srgb(1.0, 0.0, 0.0);
pub const HIT_BOX: Color = Color::srgb(0.0, 1.0, 0.0);

// === Health Bar Colors ===

pub const HEALTH_BAR_BG: Color = Color::srgb(0.8, 0.1, 0.1);
pub const HEALTH_BAR_FILL: Color = Color::srgb(0.1, 0.9, 0.1);

// === Font Size Tokens ===

pub const FONT_SIZE_TITLE: f32 = 72.0;
pub const FONT_SIZE_HEADER: f32 = 64.0;
pub const FONT_SIZE_LABEL: f32 = 32.0;
pub const FONT_SIZE_HUD: f32 = 28.0;
pub const FONT_SIZE_SMALL: f32 = 14.0;

/// Sprite color of a unit. Fighting units are drawn a shade lighter.
#[must_use]
pub const fn unit_color(kind: UnitKind, team: Team, state: UnitState) -> Color {
    match (kind, team, state) {
        (UnitKind::Town, Team::Ally, _) => ALLY_TOWN,
        (UnitKind::Town, Team::Enemy, _) => ENEMY_TOWN,
        (UnitKind::Warrior, Team::Ally, UnitState::Walk) => Color::srgb(0.2, 0.45, 0.85),
        (UnitKind::Warrior, Team::Ally, UnitState::Fight) => Color::srgb(0.4, 0.6, 1.0),
        (UnitKind::Ranger, Team::Ally, UnitState::Walk) => Color::srgb(0.15, 0.7, 0.7),
        (UnitKind::Ranger, Team::Ally, UnitState::Fight) => Color::srgb(0.35, 0.9, 0.9),
        (UnitKind::Warrior, Team::Enemy, UnitState::Walk) => Color::srgb(0.75, 0.25, 0.2),
        (UnitKind::Warrior, Team::Enemy, UnitState::Fight) => Color::srgb(0.95, 0.4, 0.35),
        (UnitKind::Ranger, Team::Enemy, UnitState::Walk) => Color::srgb(0.75, 0.5, 0.15),
        (UnitKind::Ranger, Team::Enemy, UnitState::Fight) => Color::srgb(0.95, 0.7, 0.3),
    }
}
