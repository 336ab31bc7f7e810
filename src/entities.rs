//! All game entity types, pure data, no logic.

use crossterm::style::Color;

// ── Enums ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EnemyKind {
    /// Top row, smallest sprite.
    Squid,
    /// Middle rows.
    Crab,
    /// Bottom rows, widest sprite.
    Octopus,
}

/// Lifecycle of a formation member.  `Dying` is a brief renderer-only flash;
/// the simulation transitions hit enemies straight to `Dead`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntityState {
    Alive,
    Dying,
    Dead,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tier {
    Easy,
    Medium,
    Deathzone,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Exactly one screen is active per tick; transitions happen only on
/// explicit trigger (confirm input, win or loss condition).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Screen {
    Menu,
    Play,
    GameOver(Outcome),
}

// ── Geometry primitives ───────────────────────────────────────────────────────

/// Screen-space coordinates, origin top-left, logical window 640x480.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// A colored axis-aligned rectangle; bunkers are arrays of these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub position: Position,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A point-like projectile.  `height` is the visual sprite height and feeds
/// the leading-edge calculation: a downward bullet collides with its bottom
/// end, an upward bullet with its top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bullet {
    pub position: Position,
    /// -1 moves up, +1 moves down.
    pub direction: i32,
    /// Pixels travelled per tick.
    pub speed: f32,
    pub is_active: bool,
    pub height: f32,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub position: Position,
    pub lives: u32,
    /// Pixels per movement step.
    pub speed: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enemy {
    pub position: Position,
    pub kind: EnemyKind,
    /// Sprite scale; bounding boxes are base size times this.
    pub scale: f32,
    pub state: EntityState,
}

// ── Fleet aggregate ───────────────────────────────────────────────────────────

/// Shared state of the enemy formation: sweep direction and speed, the fire
/// chance, and the pooled enemy bullets.
///
/// Pool invariant: `bullet_count <= bullets.len()`, and after each frame's
/// compaction every entry with index `< bullet_count` is active.  Capacity
/// grows lazily; slots past `bullet_count` are reused before pushing.
#[derive(Clone, Debug, PartialEq)]
pub struct Fleet {
    pub alive_count: usize,
    /// -1 sweeps left, +1 sweeps right; shared by every member.
    pub direction: i32,
    pub speed: f32,
    /// Chance out of 100 that the fleet fires this tick.
    pub fire_rate: u32,
    pub bullets: Vec<Bullet>,
    pub bullet_count: usize,
    /// Timestamp (ms) of the last vertical formation drop.
    pub last_drop_ms: u64,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game session.  Cloneable so pure update functions can return a
/// new copy without mutating the original; everything here is rebuilt on
/// replay.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub screen: Screen,
    pub tier: Tier,
    pub player: Player,
    /// The player's single owned bullet slot; re-fire only when inactive.
    pub player_bullet: Bullet,
    pub enemies: Vec<Enemy>,
    pub fleet: Fleet,
    /// Destructible bunker segments, all four bunkers flattened.
    pub bunkers: Vec<Rect>,
    pub score: u32,
    /// Timestamp (ms) when the current play session started.
    pub started_ms: u64,
    /// Timestamp (ms) of the player's last shot, for the fire cooldown.
    pub last_shot_ms: u64,
    pub width: f32,
    pub height: f32,
}
