//! Rendering layer, all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! state into terminal commands, projecting the 640x480 logical playfield
//! onto whatever cell grid the terminal offers.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::entities::{EnemyKind, EntityState, GameState, Outcome, Screen, Tier};
use crate::sprites;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_LABEL: Color = Color::White;
const C_SCORE: Color = sprites::NEON_GREEN;
const C_LIVES: Color = sprites::NEON_GREEN;
const C_PLAYER: Color = sprites::NEON_GREEN;
const C_ENEMY_SQUID: Color = Color::Magenta;
const C_ENEMY_CRAB: Color = Color::Cyan;
const C_ENEMY_OCTOPUS: Color = Color::Yellow;
const C_BULLET_PLAYER: Color = Color::White;
const C_BULLET_ENEMY: Color = Color::Red;
const C_BUNKER: Color = sprites::NEON_GREEN;
const C_BASELINE: Color = sprites::NEON_GREEN;
const C_HINT: Color = Color::DarkGrey;

// ── Pixel-to-cell projection ──────────────────────────────────────────────────

fn to_col(state: &GameState, x: f32, cols: u16) -> u16 {
    let c = (x / state.width * cols as f32) as i32;
    c.clamp(0, cols.saturating_sub(1) as i32) as u16
}

fn to_row(state: &GameState, y: f32, rows: u16) -> u16 {
    let r = (y / state.height * rows as f32) as i32;
    r.clamp(0, rows.saturating_sub(1) as i32) as u16
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame, dispatching on the active screen.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match state.screen {
        Screen::Menu => draw_menu(out, state, cols, rows)?,
        Screen::Play => draw_play(out, state, cols, rows)?,
        Screen::GameOver(outcome) => {
            draw_play(out, state, cols, rows)?;
            draw_game_over(out, state, outcome, cols, rows)?;
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Menu screen ───────────────────────────────────────────────────────────────

fn draw_menu<W: Write>(out: &mut W, state: &GameState, cols: u16, rows: u16) -> std::io::Result<()> {
    let cx = cols / 2;
    let cy = rows / 2;

    let title = "★  I N V A D E R S  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(title))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy.saturating_sub(3)))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("Select difficulty:"))?;

    let options: &[(Tier, &str, Color, &str)] = &[
        (Tier::Easy, "Easy     ", Color::Green, "Slow sweep, sparse fire"),
        (Tier::Medium, "Medium   ", Color::Yellow, "Balanced challenge"),
        (Tier::Deathzone, "Deathzone", Color::Red, "Fast drops, dense fire"),
    ];

    for (i, (tier, label, color, desc)) in options.iter().enumerate() {
        let row = cy.saturating_sub(1) + i as u16;
        let marker = if *tier == state.tier { "▸ " } else { "  " };
        out.queue(cursor::MoveTo(cx.saturating_sub(12), row))?;
        out.queue(style::SetForegroundColor(Color::White))?;
        out.queue(Print(marker))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(format!("{:<10}", label)))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(format!(" {}", desc)))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy + 4))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("↑ ↓ : Difficulty   SPACE / ENTER : Start   Q : Quit"))?;

    Ok(())
}

// ── Play screen ───────────────────────────────────────────────────────────────

fn draw_play<W: Write>(out: &mut W, state: &GameState, cols: u16, rows: u16) -> std::io::Result<()> {
    draw_hud(out, state, cols)?;

    for enemy in &state.enemies {
        if enemy.state == EntityState::Dead {
            continue;
        }
        let col = to_col(state, enemy.position.x, cols);
        let row = to_row(state, enemy.position.y, rows);
        out.queue(cursor::MoveTo(col, row))?;
        if enemy.state == EntityState::Dying {
            out.queue(style::SetForegroundColor(Color::White))?;
            out.queue(Print("✸"))?;
            continue;
        }
        match enemy.kind {
            EnemyKind::Squid => {
                out.queue(style::SetForegroundColor(C_ENEMY_SQUID))?;
                out.queue(Print("\\Y/"))?;
            }
            EnemyKind::Crab => {
                out.queue(style::SetForegroundColor(C_ENEMY_CRAB))?;
                out.queue(Print("[M]"))?;
            }
            EnemyKind::Octopus => {
                out.queue(style::SetForegroundColor(C_ENEMY_OCTOPUS))?;
                out.queue(Print("(W)"))?;
            }
        }
    }

    draw_bunkers(out, state, cols, rows)?;
    draw_bullets(out, state, cols, rows)?;
    draw_player(out, state, cols, rows)?;
    draw_baseline(out, state, cols, rows)?;

    Ok(())
}

fn draw_hud<W: Write>(out: &mut W, state: &GameState, cols: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(to_col(state, 50.0, cols), 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LABEL))?;
    out.queue(Print("SCORE"))?;
    out.queue(cursor::MoveTo(to_col(state, 150.0, cols), 0))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(format!("{:>5}", state.score)))?;

    out.queue(cursor::MoveTo(to_col(state, 400.0, cols), 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LABEL))?;
    out.queue(Print("LIVES"))?;
    out.queue(style::SetForegroundColor(C_LIVES))?;
    for i in 0..state.player.lives {
        out.queue(cursor::MoveTo(to_col(state, 480.0 + i as f32 * 50.0, cols), 0))?;
        out.queue(Print("▲"))?;
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, state: &GameState, cols: u16, rows: u16) -> std::io::Result<()> {
    // Nose at the sprite's horizontal center, hull one row below.
    let center = state.player.position.x + sprites::PLAYER_WIDTH / 2.0;
    let col = to_col(state, center, cols);
    let row = to_row(state, state.player.position.y, rows);
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("▲"))?;
    if row + 1 < rows {
        out.queue(cursor::MoveTo(col.saturating_sub(1), row + 1))?;
        out.queue(Print("▟█▙"))?;
    }
    Ok(())
}

fn draw_bullets<W: Write>(out: &mut W, state: &GameState, cols: u16, rows: u16) -> std::io::Result<()> {
    if state.player_bullet.is_active {
        let col = to_col(state, state.player_bullet.position.x, cols);
        let row = to_row(state, state.player_bullet.position.y, rows);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_BULLET_PLAYER))?;
        out.queue(Print("║"))?;
    }
    for bullet in &state.fleet.bullets[..state.fleet.bullet_count] {
        let col = to_col(state, bullet.position.x, cols);
        let row = to_row(state, bullet.position.y, rows);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_BULLET_ENEMY))?;
        out.queue(Print("↓"))?;
    }
    Ok(())
}

fn draw_bunkers<W: Write>(out: &mut W, state: &GameState, cols: u16, rows: u16) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BUNKER))?;
    for segment in &state.bunkers {
        if segment.height <= 0.0 {
            continue;
        }
        let col = to_col(state, segment.position.x, cols);
        let top = to_row(state, segment.position.y, rows);
        let bottom = to_row(state, segment.position.y + segment.height, rows);
        for row in top..=bottom {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("█"))?;
        }
    }
    Ok(())
}

fn draw_baseline<W: Write>(out: &mut W, state: &GameState, cols: u16, rows: u16) -> std::io::Result<()> {
    let row = to_row(state, state.height - 10.0, rows);
    let left = to_col(state, 50.0, cols);
    let right = to_col(state, state.width - 50.0, cols);
    out.queue(cursor::MoveTo(left, row))?;
    out.queue(style::SetForegroundColor(C_BASELINE))?;
    out.queue(Print("─".repeat((right - left) as usize)))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    outcome: Outcome,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let (banner, color) = match outcome {
        Outcome::Victory => ("║     YOU  WIN !     ║", Color::Yellow),
        Outcome::Defeat => ("║    GAME  OVER      ║", Color::Red),
    };
    let lines: &[&str] = &[
        "╔════════════════════╗",
        banner,
        "╚════════════════════╝",
    ];

    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(3);

    for (i, msg) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(*msg))?;
    }

    let score_line = format!("Final Score: {:>5}", state.score);
    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let hint = "SPACE - Replay   ENTER - Menu   Q - Quit";
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row + 1))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
