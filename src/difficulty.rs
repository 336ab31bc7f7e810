//! Difficulty scaling.
//!
//! All three curves (horizontal speed, vertical drop interval, fire chance)
//! share one rule: their pacing interval shrinks by a third of the base per
//! tier rank above Easy.  The ramps step up once per full elapsed interval
//! and clamp at a tier-dependent cap.

use crate::entities::Tier;

const SPEED_BASE: f32 = 1.0;
const SPEED_STEP: f32 = 0.25;
const SPEED_RAMP_INTERVAL_MS: u64 = 20_000;

const DROP_BASE_INTERVAL_MS: u64 = 5_000;
const DROP_STEP_PX: f32 = 6.0;

const FIRE_BASE: f32 = 1.0;
const FIRE_STEP: f32 = 1.0;
const FIRE_RAMP_INTERVAL_MS: u64 = 15_000;

pub fn rank(tier: Tier) -> u32 {
    match tier {
        Tier::Easy => 1,
        Tier::Medium => 2,
        Tier::Deathzone => 3,
    }
}

/// Interval shrunk by tier: each rank above Easy removes a third of the base.
pub fn tier_interval_ms(base_ms: u64, tier: Tier) -> u64 {
    base_ms - base_ms / 3 * (rank(tier) as u64 - 1)
}

/// Stepwise linear ramp: `base` plus one `step` per full (tier-shrunk)
/// interval elapsed, clamped at `cap`.
pub fn ramp(base: f32, step: f32, base_interval_ms: u64, tier: Tier, elapsed_ms: u64, cap: f32) -> f32 {
    let interval = tier_interval_ms(base_interval_ms, tier);
    (base + step * (elapsed_ms / interval) as f32).min(cap)
}

/// Shared formation sweep speed in px per tick, capped at 2.0 + rank / 2.
pub fn horizontal_speed(tier: Tier, elapsed_ms: u64) -> f32 {
    let cap = 2.0 + rank(tier) as f32 / 2.0;
    ramp(SPEED_BASE, SPEED_STEP, SPEED_RAMP_INTERVAL_MS, tier, elapsed_ms, cap)
}

/// Milliseconds between vertical formation drops.
pub fn drop_interval_ms(tier: Tier) -> u64 {
    tier_interval_ms(DROP_BASE_INTERVAL_MS, tier)
}

/// Pixels the formation descends per drop.
pub fn drop_step(tier: Tier) -> f32 {
    DROP_STEP_PX * rank(tier) as f32
}

/// Chance out of 100 that the fleet fires this tick, capped at 10 * rank.
pub fn fire_rate(tier: Tier, elapsed_ms: u64) -> u32 {
    let cap = (10 * rank(tier)) as f32;
    ramp(FIRE_BASE, FIRE_STEP, FIRE_RAMP_INTERVAL_MS, tier, elapsed_ms, cap) as u32
}
