//! Memory Pads headless driver
//!
//! Reads one JSON input frame per line on stdin, runs one tick per frame and
//! writes the resulting render state as one JSON line on stdout. Logs go to
//! stderr (`RUST_LOG=info` to see level changes).
//!
//! A frame is a `TickInput` (`pointer_down`, `restart_requested`,
//! `quit_requested`) and may instead carry a raw `pointer` sample with mouse
//! and touch state, which is resolved to a single pointer position.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;

use memory_pads::consts::WINDOW_TITLE;
use memory_pads::sim::{GameState, PointerSample, TickInput, tick};

/// One line of driver input
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Frame {
    #[serde(flatten)]
    input: TickInput,
    /// Raw pointer state; overrides `pointer_down` when present
    pointer: Option<PointerSample>,
}

impl Frame {
    fn into_input(self) -> TickInput {
        let mut input = self.input;
        if let Some(sample) = self.pointer {
            input.pointer_down = sample.pointer_down();
        }
        input
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn seed_from_args() -> u64 {
    match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(seed) => seed,
            Err(_) => {
                log::warn!("Ignoring invalid seed {:?}, using clock", arg);
                clock_seed()
            }
        },
        None => clock_seed(),
    }
}

fn main() {
    env_logger::init();
    log::info!("{} (headless) starting...", WINDOW_TITLE);

    let mut state = GameState::new(seed_from_args());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("stdin read failed: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let frame: Frame = match serde_json::from_str(&line) {
            Ok(frame) => frame,
            Err(e) => {
                log::warn!("Skipping line {}: {}", line_no + 1, e);
                continue;
            }
        };

        let input = frame.into_input();
        if input.quit_requested {
            log::info!("Quit requested");
            break;
        }

        let view = tick(&mut state, &input);
        let written = serde_json::to_string(&view)
            .map_err(io::Error::from)
            .and_then(|json| writeln!(out, "{}", json));
        if let Err(e) = written {
            log::warn!("stdout write failed: {}", e);
            break;
        }
    }

    let _ = out.flush();
}
