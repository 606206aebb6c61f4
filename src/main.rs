//! Gridfall entry point
//!
//! Headless round driver: simulates the display-refresh tick and the wall
//! clock, feeds scripted key events, and forwards each round-end report to
//! stdout. A real presentation layer supplies the same three feeds (key
//! events, frame ticks, monotonic time) and consumes the same report.

use gridfall::RoundConfig;
use gridfall::sim::{Key, RoundEvent, RoundState, TickInput, tick};

/// Simulated display refresh cadence
const TICK_DT: f32 = 1.0 / 60.0;
/// Safety valve for a charmed run that never collides
const MAX_ROUND_SECS: f32 = 90.0;

fn main() {
    env_logger::init();

    let config = RoundConfig::load_or_default("gridfall.json");
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xD0D6E);

    let mut state = RoundState::new(seed, config);
    for round in 0..3u64 {
        let round_seed = seed.wrapping_add(round);
        if round > 0 {
            state.restart(round_seed);
        }
        log::info!("Round {} starting with seed {}", round + 1, round_seed);
        run_round(&mut state);
    }
}

/// Drive one round from spawn to its report
fn run_round(state: &mut RoundState) {
    let mut now = 0.0_f32;
    let mut frame = 0_u64;

    loop {
        frame += 1;
        now += TICK_DT;

        let input = scripted_input(frame);
        if let Some(event @ RoundEvent::Ended { score }) = tick(state, &input, now) {
            log::info!("Round ended after {:.1}s with score {}", now, score);
            if let Ok(json) = serde_json::to_string(&event) {
                println!("{json}");
            }
            break;
        }

        if frame % 600 == 0 {
            log::info!(
                "clock={} pos=({:.1}, {:.1}) obstacles={}",
                format_clock(state.timer.remaining),
                state.actor.pos.x,
                state.actor.pos.z,
                state.field.obstacles.len(),
            );
        }

        if now > MAX_ROUND_SECS {
            log::warn!("Round outlived the demo window without a report, moving on");
            break;
        }
    }
}

/// A deterministic little choreography: drift in a square, hop now and then
fn scripted_input(frame: u64) -> TickInput {
    let mut input = TickInput::default();

    match (frame / 120) % 4 {
        0 => input.keys.push(Key::Right),
        1 => input.keys.push(Key::Forward),
        2 => input.keys.push(Key::Left),
        _ => input.keys.push(Key::Back),
    }
    if frame % 150 == 0 {
        input.keys.push(Key::Jump);
    }

    input
}

/// Presentation-side mm:ss rendering of the countdown
fn format_clock(remaining: u32) -> String {
    format!("{}:{:02}", remaining / 60, remaining % 60)
}
