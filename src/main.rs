use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use invaders::compute;
use invaders::display;
use invaders::entities::{Screen, Tier};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key.  Each frame we check which keys are still "fresh"
/// (within `HOLD_WINDOW` frames) and apply all their effects simultaneously,
/// so Space and an arrow can be held at the same time with no interference.
/// Menu and game-over keys are edge-triggered off the Press event instead.
fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    // Seeded once for the whole process; every random decision in the
    // simulation draws from this generator.
    let mut rng = StdRng::from_entropy();
    let origin = Instant::now();

    let mut state = compute::init_state(Tier::Easy);

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let now_ms = origin.elapsed().as_millis() as u64;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                // Press: record key + handle edge-triggered actions
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match (state.screen, code) {
                        (_, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) => {
                            return Ok(());
                        }
                        (_, KeyCode::Char('c'))
                            if modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            return Ok(());
                        }
                        (Screen::Menu, KeyCode::Up) => {
                            state = compute::menu_tier_up(&state);
                        }
                        (Screen::Menu, KeyCode::Down) => {
                            state = compute::menu_tier_down(&state);
                        }
                        (Screen::Menu, KeyCode::Enter | KeyCode::Char(' ')) => {
                            state = compute::confirm(&state, now_ms);
                        }
                        (Screen::GameOver(_), KeyCode::Char(' ')) => {
                            state = compute::confirm(&state, now_ms);
                        }
                        (Screen::GameOver(_), KeyCode::Enter) => {
                            state = compute::to_menu(&state);
                        }
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Apply held-key actions every frame ────────────────────────────────
        if state.screen == Screen::Play {
            let left = is_held(&key_frame, &KeyCode::Left, frame);
            let right = is_held(&key_frame, &KeyCode::Right, frame);
            let shoot = is_held(&key_frame, &KeyCode::Char(' '), frame);

            if left {
                state = compute::move_player_left(&state);
            } else if right {
                state = compute::move_player_right(&state);
            }
            // The single-bullet rule and the shot cooldown live in the core;
            // holding Space simply retries every frame.
            if shoot {
                state = compute::player_fire(&state, now_ms);
            }

            state = compute::tick(&state, now_ms, &mut rng);
        }

        display::render(out, &state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
