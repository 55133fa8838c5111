//! Terminal bike runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no widget library).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::info;

use bike_dash::core::GameSnapshot;
use bike_dash::engine::{FrameClock, GameEngine};
use bike_dash::input::{handle_key_event, is_key_down, should_quit};
use bike_dash::logging::init_logging;
use bike_dash::term::{
    frame_fingerprint, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport,
};
use bike_dash::{parse_args, simulate, Command, Config, USAGE};

/// Redraw interval for the idle and game-over screens.
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let mut config = Config::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match parse_args(&args, &mut config)? {
        Command::Help => {
            print!("{}", USAGE);
            Ok(())
        }
        Command::Simulate { frames } => {
            init_logging(&config, true)?;
            let summary = simulate(config.seed, frames);
            println!("{}", serde_json::to_string(&summary)?);
            Ok(())
        }
        Command::Play => {
            init_logging(&config, false)?;
            info!("seed {} frame {}ms", config.seed, config.frame_ms);

            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&mut term, &config);

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut engine = GameEngine::new(config.seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut clock = FrameClock::new();

    let frame_duration = Duration::from_millis(config.frame_ms as u64);
    let launched = Instant::now();
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        engine.snapshot_into(&mut snap);
        let now_ms = launched.elapsed().as_millis() as u64;
        let fingerprint = frame_fingerprint(&snap, viewport);
        if throttle.should_render(now_ms, fingerprint, engine.is_running()) {
            view.render_into(&engine, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_key_down(&key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let was_running = engine.is_running();
                        if engine.handle_input(action) && !was_running {
                            // Fresh run: the first step must not see the idle time.
                            clock.reset();
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Step.
        if last_frame.elapsed() >= frame_duration {
            last_frame = Instant::now();
            let dt = clock.tick(last_frame);
            engine.step(dt);
        }
    }
}
