//! Axis-aligned collision tests.
//!
//! Bullets are treated as points at their leading edge: a downward bullet
//! hits with its bottom end (`y + height`), an upward bullet with its top.

use crate::entities::{Bullet, Rect};

/// The y coordinate a bullet collides with.
pub fn leading_edge(bullet: &Bullet) -> f32 {
    if bullet.direction > 0 {
        bullet.position.y + bullet.height
    } else {
        bullet.position.y
    }
}

/// Leading-edge point test against an explicit box.  Edges are inclusive.
pub fn bullet_hits_box(bullet: &Bullet, left: f32, right: f32, top: f32, bottom: f32) -> bool {
    let y = leading_edge(bullet);
    bullet.position.x >= left && bullet.position.x <= right && y >= top && y <= bottom
}

pub fn bullet_hits_rect(bullet: &Bullet, rect: &Rect) -> bool {
    bullet_hits_box(
        bullet,
        rect.position.x,
        rect.position.x + rect.width,
        rect.position.y,
        rect.position.y + rect.height,
    )
}

/// Proximity test between the player's upward bullet and an enemy bullet:
/// horizontal distance within 4 px and the player bullet's top edge inside
/// the enemy bullet's vertical span.
pub fn bullets_collide(player_bullet: &Bullet, enemy_bullet: &Bullet) -> bool {
    let top = player_bullet.position.y;
    (player_bullet.position.x - enemy_bullet.position.x).abs() <= 4.0
        && top >= enemy_bullet.position.y
        && top <= enemy_bullet.position.y + enemy_bullet.height
}
