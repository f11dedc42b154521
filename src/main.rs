//! Space Rocks headless demo
//!
//! Runs the simulation at 60 FPS with the autopilot at the controls and
//! logs the events a windowed frontend would render and play. Pass a seed
//! as the first argument for a reproducible run.
//!
//! ```text
//! space-rocks [seed] [runs]
//! ```

use space_rocks::Settings;
use space_rocks::consts::TARGET_FPS;
use space_rocks::platform::FrameClock;
use space_rocks::sim::{FrameInput, GameEvent, GameState, tick};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    let max_runs: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);

    let settings = Settings::load();
    log::info!("Seed {seed}, playing {max_runs} demo run(s)");

    let mut clock = FrameClock::new(TARGET_FPS);
    let mut state = GameState::new(seed, clock.now_ms());
    let input = FrameInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut runs = 0;
    let mut frames: u64 = 0;
    let mut fps_anchor = clock.now_ms();

    loop {
        tick(&mut state, &input, clock.now_ms());

        for event in state.drain_events() {
            match event {
                GameEvent::ShotFired => log::debug!("pew"),
                GameEvent::MobShotDown { pos, sound } => {
                    log::debug!("mob down at ({:.0},{:.0}), sample {sound}", pos.x, pos.y)
                }
                GameEvent::PlayerHit { health_left, .. } => {
                    log::info!("hit! {health_left} health left")
                }
                GameEvent::PlayerDestroyed { .. } => log::info!("ship destroyed"),
                GameEvent::RunEnded { score } => {
                    runs += 1;
                    log::info!("run {runs} over, score {score}");
                    if runs >= max_runs {
                        settings.save();
                        return;
                    }
                }
            }
        }

        frames += 1;
        if settings.show_fps && frames % u64::from(TARGET_FPS) == 0 {
            let now = clock.now_ms();
            let elapsed = now.saturating_sub(fps_anchor).max(1);
            log::info!("{} fps", u64::from(TARGET_FPS) * 1000 / elapsed);
            fps_anchor = now;
        }

        clock.wait_for_next_frame();
    }
}
