//! Terminal DMD demo (default binary).
//!
//! Runs the display controller against a crossterm-backed sink at a fixed
//! tick. Keys: `q`/Esc quit, `m` flashes a message, space toggles the
//! overlay mode.

use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use tui_dmd::core::{Animation, Font};
use tui_dmd::engine::{DisplayConfig, DisplayController, ModeStack};
use tui_dmd::scene;
use tui_dmd::term::{DmdView, TerminalSink};
use tui_dmd::types::TICK_MS;

const HELP: &str = " q quit | m message | space overlay";
const MESSAGE_TIME: Duration = Duration::from_secs(3);

/// Demo settings read from `DMD_FONT`, `DMD_ANIM` and `DMD_TICK_MS`.
struct DemoConfig {
    font: Option<PathBuf>,
    anim: Option<PathBuf>,
    tick_ms: u64,
}

impl DemoConfig {
    fn from_env() -> Self {
        let path = |key: &str| env::var_os(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        let tick_ms = env::var("DMD_TICK_MS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(TICK_MS);
        Self {
            font: path("DMD_FONT"),
            anim: path("DMD_ANIM"),
            tick_ms,
        }
    }
}

/// Log to `DMD_LOG_PATH` if set; the terminal owns stdout and stderr.
fn init_logging() -> Result<()> {
    let Some(path) = env::var_os("DMD_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot create log file {}", PathBuf::from(&path).display()))?;
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("DMD_LOG_LEVEL", "info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;

    let demo = DemoConfig::from_env();
    let display = DisplayConfig::from_env();

    // Load assets before touching the terminal so errors print normally.
    let font = match &demo.font {
        Some(path) => Some(Rc::new(
            Font::load(path).with_context(|| format!("loading font {}", path.display()))?,
        )),
        None => None,
    };
    let anim = match &demo.anim {
        Some(path) => Some(
            Animation::load(path).with_context(|| format!("loading animation {}", path.display()))?,
        ),
        None => None,
    };
    let modes = scene::demo_modes(display, anim, font.clone());

    let mut sink = TerminalSink::new(DmdView::default());
    sink.enter()?;

    let result = run(&mut sink, modes, display, font, demo.tick_ms);

    // Always try to restore terminal state.
    let _ = sink.exit();
    result
}

fn run(
    sink: &mut TerminalSink,
    modes: ModeStack,
    display: DisplayConfig,
    font: Option<Rc<Font>>,
    tick_ms: u64,
) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    sink.set_status(HELP);
    let mut dmd = DisplayController::new(modes, sink, display, font, now_ms())?;

    let tick = Duration::from_millis(tick_ms);
    let mut last_tick = Instant::now();
    let mut messages = 0u32;

    loop {
        let timeout = tick.checked_sub(last_tick.elapsed()).unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(())
                    }
                    KeyCode::Char('m') => {
                        messages += 1;
                        let text = format!("MESSAGE {messages}");
                        if let Err(err) = dmd.set_message(&text, Some(MESSAGE_TIME)) {
                            log::warn!("message not shown: {err}");
                            dmd.sink_mut().set_status(format!(" {err}"));
                        }
                    }
                    KeyCode::Char(' ') => {
                        let shown = scene::toggle_overlay(dmd.source_mut(), display);
                        log::debug!("overlay {}", if shown { "on" } else { "off" });
                    }
                    _ => {}
                },
                Event::Resize(..) => dmd.sink_mut().invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            dmd.update(now_ms())?;
        }
    }
}
