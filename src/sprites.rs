//! Sprite extents and shapes, the stand-in for an image provider.
//!
//! Bounding boxes everywhere in the simulation derive from these numbers,
//! so they live in one place.  Enemy sizes are the unscaled base extents;
//! multiply by the enemy's scale for the on-screen box.

use crossterm::style::Color;

use crate::entities::{EnemyKind, Position, Rect};

pub const NEON_GREEN: Color = Color::Rgb { r: 0x39, g: 0xff, b: 0x14 };

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 16.0;

// ── Bullets ───────────────────────────────────────────────────────────────────

pub const PLAYER_BULLET_HEIGHT: f32 = 12.0;
pub const ENEMY_BULLET_HEIGHT: f32 = 12.0;

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Unscaled sprite size per kind.
pub fn enemy_base_size(kind: EnemyKind) -> (f32, f32) {
    match kind {
        EnemyKind::Squid => (32.0, 24.0),
        EnemyKind::Crab => (36.0, 28.0),
        EnemyKind::Octopus => (40.0, 32.0),
    }
}

/// Scaled bounding-box size of one enemy.
pub fn enemy_extent(kind: EnemyKind, scale: f32) -> (f32, f32) {
    let (w, h) = enemy_base_size(kind);
    (w * scale, h * scale)
}

// ── Bunkers ───────────────────────────────────────────────────────────────────

/// Erosion unit: every hit removes one brick from a segment.
pub const BUNKER_BRICK: f32 = 8.0;

/// Total width of one bunker (five 8 px columns).
pub const BUNKER_WIDTH: f32 = 40.0;

/// One bunker at the origin: a five-column arch with lowered shoulders and
/// a notch under the center column.  Callers translate copies into place.
pub fn bunker_rectangles() -> Vec<Rect> {
    let col = |x: f32, y: f32, height: f32| Rect {
        position: Position { x, y },
        width: BUNKER_BRICK,
        height,
        color: NEON_GREEN,
    };
    vec![
        col(0.0, 8.0, 24.0),
        col(8.0, 0.0, 32.0),
        col(16.0, 0.0, 24.0),
        col(24.0, 0.0, 32.0),
        col(32.0, 8.0, 24.0),
    ]
}
