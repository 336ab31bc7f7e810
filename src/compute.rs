//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle and a monotonic millisecond
//! timestamp) and returns a brand-new `GameState`.  Side effects are limited
//! to the injected RNG.

use rand::Rng;

use crate::difficulty;
use crate::entities::{
    Bullet, Enemy, EnemyKind, EntityState, Fleet, GameState, Outcome, Player, Position, Rect,
    Screen, Tier,
};
use crate::geometry;
use crate::sprites;

// ── Playfield constants ──────────────────────────────────────────────────────

pub const WINDOW_WIDTH: f32 = 640.0;
pub const WINDOW_HEIGHT: f32 = 480.0;

/// Horizontal walls the player and the formation bounce against.
pub const LEFT_BOUNDARY: f32 = 50.0;
pub const RIGHT_BOUNDARY: f32 = WINDOW_WIDTH - 80.0;

/// Enemy bullets die once they pass this line.
pub const BOTTOM_LIMIT: f32 = WINDOW_HEIGHT - 20.0;

/// A player bullet this high up has missed.
const TOP_MISS_Y: f32 = 5.0;

const PLAYER_SPEED: f32 = 4.0;
const PLAYER_BULLET_SPEED: f32 = 8.0;
const ENEMY_BULLET_SPEED: f32 = 3.0;

const ENEMY_POINTS: u32 = 5;
const INTERCEPT_POINTS: u32 = 3;

/// Min milliseconds between player shots, on top of the single-bullet rule.
pub const SHOT_COOLDOWN_MS: u64 = 400;

const ENEMY_COLS: usize = 10;
const FORMATION_TOP: f32 = 60.0;
const BUNKER_Y: f32 = WINDOW_HEIGHT - 100.0;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Initial state at program start: the menu, with a session already laid out
/// behind it so the tier selection has something to replace.
pub fn init_state(tier: Tier) -> GameState {
    GameState {
        screen: Screen::Menu,
        ..start_session(tier, 0)
    }
}

/// Build a fresh play session: full formation, intact bunkers, parked
/// player bullet, empty enemy-bullet pool, score 0.
pub fn start_session(tier: Tier, now_ms: u64) -> GameState {
    let (enemies, alive_count) = formation();
    GameState {
        screen: Screen::Play,
        tier,
        player: Player {
            position: Position {
                x: WINDOW_WIDTH / 2.0,
                y: WINDOW_HEIGHT - 40.0,
            },
            lives: 3,
            speed: PLAYER_SPEED,
        },
        player_bullet: idle_player_bullet(),
        enemies,
        fleet: Fleet {
            alive_count,
            direction: 1,
            speed: difficulty::horizontal_speed(tier, 0),
            fire_rate: difficulty::fire_rate(tier, 0),
            bullets: Vec::new(),
            bullet_count: 0,
            last_drop_ms: now_ms,
        },
        bunkers: bunkers(),
        score: 0,
        started_ms: now_ms,
        // Backdated so the first shot of a session is never blocked.
        last_shot_ms: now_ms.saturating_sub(SHOT_COOLDOWN_MS),
        width: WINDOW_WIDTH,
        height: WINDOW_HEIGHT,
    }
}

fn idle_player_bullet() -> Bullet {
    Bullet {
        position: Position { x: -1.0, y: -1.0 },
        direction: -1,
        speed: PLAYER_BULLET_SPEED,
        is_active: false,
        height: sprites::PLAYER_BULLET_HEIGHT,
    }
}

/// The classic grid: 10 columns, one row of Squids over two rows of Crabs
/// over two rows of Octopuses.  Each band centers itself on its own sprite
/// width; gaps are sprite size plus 10 px both ways.
fn formation() -> (Vec<Enemy>, usize) {
    let bands: [(usize, EnemyKind, f32); 3] = [
        (1, EnemyKind::Squid, 0.5),
        (2, EnemyKind::Crab, 0.6),
        (2, EnemyKind::Octopus, 0.6),
    ];
    let mut enemies = Vec::new();
    let mut y = FORMATION_TOP;
    for (rows, kind, scale) in bands {
        let (w, h) = sprites::enemy_extent(kind, scale);
        let x_start = WINDOW_WIDTH / 2.0 - w / 2.0 - 40.0 - w * 5.0;
        for _ in 0..rows {
            for col in 0..ENEMY_COLS {
                enemies.push(Enemy {
                    position: Position {
                        x: x_start + col as f32 * (w + 10.0),
                        y,
                    },
                    kind,
                    scale,
                    state: EntityState::Alive,
                });
            }
            y += h + 10.0;
        }
    }
    let count = enemies.len();
    (enemies, count)
}

/// Four bunkers spread across the fifths of the window, just above the
/// player row.
fn bunkers() -> Vec<Rect> {
    let mut segments = Vec::new();
    for i in 1..=4 {
        let x0 = i as f32 * WINDOW_WIDTH / 5.0 - sprites::BUNKER_WIDTH / 2.0;
        for mut segment in sprites::bunker_rectangles() {
            segment.position.x += x0;
            segment.position.y += BUNKER_Y;
            segments.push(segment);
        }
    }
    segments
}

// ── Menu & screen transitions ────────────────────────────────────────────────

fn next_tier(tier: Tier) -> Tier {
    match tier {
        Tier::Easy => Tier::Medium,
        Tier::Medium => Tier::Deathzone,
        Tier::Deathzone => Tier::Easy,
    }
}

fn prev_tier(tier: Tier) -> Tier {
    match tier {
        Tier::Easy => Tier::Deathzone,
        Tier::Medium => Tier::Easy,
        Tier::Deathzone => Tier::Medium,
    }
}

/// Cycle the difficulty selection upward (wrapping).  Menu only.
pub fn menu_tier_up(state: &GameState) -> GameState {
    if state.screen != Screen::Menu {
        return state.clone();
    }
    GameState {
        tier: next_tier(state.tier),
        ..state.clone()
    }
}

/// Cycle the difficulty selection downward (wrapping).  Menu only.
pub fn menu_tier_down(state: &GameState) -> GameState {
    if state.screen != Screen::Menu {
        return state.clone();
    }
    GameState {
        tier: prev_tier(state.tier),
        ..state.clone()
    }
}

/// Confirm input: starts a fresh session from the menu or replays straight
/// from the game-over screen.  A no-op while playing.
pub fn confirm(state: &GameState, now_ms: u64) -> GameState {
    match state.screen {
        Screen::Menu | Screen::GameOver(_) => start_session(state.tier, now_ms),
        Screen::Play => state.clone(),
    }
}

/// Leave the game-over screen for the menu, reinitializing the session.
pub fn to_menu(state: &GameState) -> GameState {
    match state.screen {
        Screen::GameOver(_) => init_state(state.tier),
        _ => state.clone(),
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    let new_x = (state.player.position.x - state.player.speed).max(LEFT_BOUNDARY);
    GameState {
        player: Player {
            position: Position {
                x: new_x,
                ..state.player.position
            },
            ..state.player
        },
        ..state.clone()
    }
}

pub fn move_player_right(state: &GameState) -> GameState {
    let new_x = (state.player.position.x + state.player.speed).min(RIGHT_BOUNDARY);
    GameState {
        player: Player {
            position: Position {
                x: new_x,
                ..state.player.position
            },
            ..state.player
        },
        ..state.clone()
    }
}

/// Fire the player's single bullet from the ship's nose.  Blocked while the
/// bullet is in flight or the cooldown has not elapsed.
pub fn player_fire(state: &GameState, now_ms: u64) -> GameState {
    if state.screen != Screen::Play
        || state.player_bullet.is_active
        || now_ms < state.last_shot_ms + SHOT_COOLDOWN_MS
    {
        return state.clone();
    }
    GameState {
        player_bullet: Bullet {
            position: Position {
                x: state.player.position.x + sprites::PLAYER_WIDTH / 2.0,
                y: state.player.position.y,
            },
            is_active: true,
            ..idle_player_bullet()
        },
        last_shot_ms: now_ms,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  Outside the Play screen this is a
/// no-op; all randomness comes through `rng` so callers control determinism.
pub fn tick(state: &GameState, now_ms: u64, rng: &mut impl Rng) -> GameState {
    if state.screen != Screen::Play {
        return state.clone();
    }
    let mut next = state.clone();
    let elapsed_ms = now_ms.saturating_sub(next.started_ms);

    next.fleet.speed = difficulty::horizontal_speed(next.tier, elapsed_ms);
    next.fleet.fire_rate = difficulty::fire_rate(next.tier, elapsed_ms);

    sweep_formation(&mut next);
    drop_formation(&mut next, now_ms);
    move_bullets(&mut next);
    enemy_fire(&mut next, rng);

    resolve_frame(&next)
}

/// Sideways sweep: bounce the shared direction off the walls, judged by the
/// leftmost and rightmost alive member, then move every alive enemy.
fn sweep_formation(next: &mut GameState) {
    let mut leftmost = next.width;
    let mut rightmost = 0.0f32;
    let mut any_alive = false;
    for enemy in &next.enemies {
        if enemy.state == EntityState::Alive {
            any_alive = true;
            leftmost = leftmost.min(enemy.position.x);
            rightmost = rightmost.max(enemy.position.x);
        }
    }
    // Nothing alive: the min/max defaults are meaningless, leave direction be.
    if !any_alive {
        return;
    }
    if leftmost < LEFT_BOUNDARY {
        next.fleet.direction = 1;
    } else if rightmost >= RIGHT_BOUNDARY {
        next.fleet.direction = -1;
    }
    let dx = next.fleet.speed * next.fleet.direction as f32;
    for enemy in next.enemies.iter_mut() {
        if enemy.state == EntityState::Alive {
            enemy.position.x += dx;
        }
    }
}

/// Vertical descent, once per difficulty-scaled interval.  Edge-triggered
/// off an explicit last-drop timestamp so a drop fires exactly once no
/// matter the tick rate.
fn drop_formation(next: &mut GameState, now_ms: u64) {
    let interval = difficulty::drop_interval_ms(next.tier);
    if now_ms < next.fleet.last_drop_ms + interval {
        return;
    }
    next.fleet.last_drop_ms = now_ms;
    let dy = difficulty::drop_step(next.tier);
    for enemy in next.enemies.iter_mut() {
        if enemy.state == EntityState::Alive {
            enemy.position.y += dy;
        }
    }
}

fn move_bullets(next: &mut GameState) {
    if next.player_bullet.is_active {
        next.player_bullet.position.y +=
            next.player_bullet.speed * next.player_bullet.direction as f32;
    }
    let live = next.fleet.bullet_count;
    for bullet in next.fleet.bullets[..live].iter_mut() {
        bullet.position.y += bullet.speed * bullet.direction as f32;
    }
}

/// One roll per tick against the fleet's fire chance; on success a randomly
/// indexed formation slot shoots from its center.  A dead pick skips the
/// shot, keeping the roll count per tick constant.
fn enemy_fire(next: &mut GameState, rng: &mut impl Rng) {
    if next.enemies.is_empty() {
        return;
    }
    if rng.gen_range(0u32..100) >= next.fleet.fire_rate {
        return;
    }
    let index = rng.gen_range(0..next.enemies.len());
    let enemy = next.enemies[index];
    if enemy.state != EntityState::Alive {
        return;
    }
    let (w, h) = sprites::enemy_extent(enemy.kind, enemy.scale);
    spawn_enemy_bullet(
        &mut next.fleet,
        Position {
            x: enemy.position.x + w / 2.0,
            y: enemy.position.y + h / 2.0,
        },
    );
}

// ── Enemy-bullet pool ────────────────────────────────────────────────────────

/// Add a live bullet to the pool, reusing a compacted slot when one exists.
pub fn spawn_enemy_bullet(fleet: &mut Fleet, position: Position) {
    let bullet = Bullet {
        position,
        direction: 1,
        speed: ENEMY_BULLET_SPEED,
        is_active: true,
        height: sprites::ENEMY_BULLET_HEIGHT,
    };
    if fleet.bullet_count < fleet.bullets.len() {
        fleet.bullets[fleet.bullet_count] = bullet;
    } else {
        fleet.bullets.push(bullet);
    }
    fleet.bullet_count += 1;
}

/// Swap-remove compaction: afterwards every index below `bullet_count` is
/// active.  Surviving order is unspecified.
fn compact_pool(fleet: &mut Fleet) {
    let mut i = 0;
    while i < fleet.bullet_count {
        if fleet.bullets[i].is_active {
            i += 1;
        } else {
            fleet.bullet_count -= 1;
            fleet.bullets.swap(i, fleet.bullet_count);
        }
    }
}

// ── Collision resolution ─────────────────────────────────────────────────────

/// Resolve one frame's collisions.  Check order is fixed and scoring depends
/// on it: the player bullet tests bunkers before enemies and is dead for the
/// rest of the frame after its first hit; the bullet-vs-bullet intercept only
/// runs if the player bullet survived the earlier checks.
pub fn resolve_frame(state: &GameState) -> GameState {
    let mut next = state.clone();

    // 1. Player bullet vs bunker segments: one brick off the bottom.
    if next.player_bullet.is_active {
        for segment in next.bunkers.iter_mut() {
            if segment.height <= 0.0 {
                continue;
            }
            if geometry::bullet_hits_rect(&next.player_bullet, segment) {
                segment.height = (segment.height - sprites::BUNKER_BRICK).max(0.0);
                next.player_bullet.is_active = false;
                break;
            }
        }
    }

    // 2. Player bullet vs alive enemies.
    if next.player_bullet.is_active {
        let mut killed = false;
        for enemy in next.enemies.iter_mut() {
            if enemy.state != EntityState::Alive {
                continue;
            }
            let (w, h) = sprites::enemy_extent(enemy.kind, enemy.scale);
            if geometry::bullet_hits_box(
                &next.player_bullet,
                enemy.position.x,
                enemy.position.x + w,
                enemy.position.y,
                enemy.position.y + h,
            ) {
                next.player_bullet.is_active = false;
                enemy.state = EntityState::Dead;
                next.score += ENEMY_POINTS;
                next.fleet.alive_count -= 1;
                killed = true;
                break;
            }
        }
        if killed && next.fleet.alive_count == 0 {
            next.screen = Screen::GameOver(Outcome::Victory);
        }
    }

    // 3. Top of the screen: the shot missed.
    if next.player_bullet.is_active && next.player_bullet.position.y <= TOP_MISS_Y {
        next.player_bullet.is_active = false;
    }

    // 4. Enemy bullets, each against bunkers, the player, then the player
    //    bullet; the first hit consumes the bullet.
    for i in 0..next.fleet.bullet_count {
        let mut bullet = next.fleet.bullets[i];
        if !bullet.is_active {
            continue;
        }

        // Bunkers erode downward when hit from above: the top edge follows
        // the removed brick.
        for segment in next.bunkers.iter_mut() {
            if segment.height <= 0.0 {
                continue;
            }
            if geometry::bullet_hits_rect(&bullet, segment) {
                let bite = segment.height.min(sprites::BUNKER_BRICK);
                segment.height -= bite;
                segment.position.y += bite;
                bullet.is_active = false;
                break;
            }
        }

        if bullet.is_active
            && geometry::bullet_hits_box(
                &bullet,
                next.player.position.x,
                next.player.position.x + sprites::PLAYER_WIDTH,
                next.player.position.y,
                next.player.position.y + sprites::PLAYER_HEIGHT,
            )
        {
            bullet.is_active = false;
            next.player.lives = next.player.lives.saturating_sub(1);
            if next.player.lives == 0 {
                next.screen = Screen::GameOver(Outcome::Defeat);
            }
        }

        if bullet.is_active
            && next.player_bullet.is_active
            && geometry::bullets_collide(&next.player_bullet, &bullet)
        {
            bullet.is_active = false;
            next.player_bullet.is_active = false;
            next.score += INTERCEPT_POINTS;
        }

        if bullet.is_active && bullet.position.y >= BOTTOM_LIMIT {
            bullet.is_active = false;
        }

        next.fleet.bullets[i] = bullet;
    }

    // 5. Breach: any alive enemy level with the player ends the game.
    if next
        .enemies
        .iter()
        .any(|e| e.state == EntityState::Alive && e.position.y >= next.player.position.y)
    {
        next.player.lives = 0;
        next.screen = Screen::GameOver(Outcome::Defeat);
    }

    // 6. Compact the enemy-bullet pool.
    compact_pool(&mut next.fleet);

    next
}
