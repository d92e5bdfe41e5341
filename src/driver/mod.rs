//! Interactive pacing of a [`SortEngine`].
//!
//! The [`Player`] runs a frame loop: it drains input events, releases steps through a
//! [`StepPacer`], renders each one by awaiting [`SortEngine::advance`], and sleeps out the rest of
//! the frame.
//!
//! Controls:
//! *   `space`: pause / resume
//! *   `n` or `→`: one step while paused
//! *   `+`, `↑` or scroll up: faster; `-`, `↓` or scroll down: slower
//! *   `q` or `Esc`: quit

pub mod keyboard;
pub mod pacer;

use crate::engine::{EngineState, SortEngine};
use crate::error::{PlayError, RenderError, SortError};
use crate::rendering::bars::SurfaceControl;
use crate::surface::RenderSurface;
use crossterm::event::{Event, KeyCode};
use keyboard::PressedKeys;
use log::{debug, info};
use pacer::StepPacer;
use std::io;
use std::time::{Duration, Instant};

const MIN_RATE: f64 = 0.5;
const MAX_RATE: f64 = 100_000.0;
const SPEED_FACTOR: f64 = 1.5;

/// How a [`Player`] runs.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerConfig {
    pub steps_per_second: f64,
    pub target_fps: f64,
    pub start_paused: bool,
    /// Return as soon as the sort is done instead of waiting for `q`.
    pub exit_on_finish: bool,
}

impl PlayerConfig {
    /// Rejects rates the frame loop cannot run at: zero, negative, infinite or NaN.
    pub fn validate(&self) -> Result<(), SortError> {
        if !is_positive_finite(self.steps_per_second) {
            return Err(SortError::Configuration(
                "steps per second must be positive and finite",
            ));
        }
        if !is_positive_finite(self.target_fps) {
            return Err(SortError::Configuration(
                "target fps must be positive and finite",
            ));
        }
        Ok(())
    }
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            steps_per_second: 20.0,
            target_fps: 60.0,
            start_paused: false,
            exit_on_finish: false,
        }
    }
}

/// How a [`Player::play`] call ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The sort ran to completion.
    Finished,
    /// The user quit before the sort was done. The data is left as the last step committed it.
    Aborted,
}

/// A non-blocking source of terminal events.
pub trait EventSource {
    /// The next pending event, or `None` if there is none right now.
    fn poll(&mut self) -> io::Result<Option<Event>>;
}

/// Reads events from the real terminal through crossterm.
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self) -> io::Result<Option<Event>> {
        if crossterm::event::poll(Duration::ZERO)? {
            crossterm::event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Paces an engine in real time, reacting to user input.
pub struct Player<E> {
    config: PlayerConfig,
    events: E,
    pacer: StepPacer,
    keys: PressedKeys,
    paused: bool,
}

impl<E: EventSource> Player<E> {
    /// Fails if `config` does not [validate](PlayerConfig::validate).
    pub fn new(config: PlayerConfig, events: E) -> Result<Self, SortError> {
        config.validate()?;
        Ok(Self {
            pacer: StepPacer::new(config.steps_per_second.clamp(MIN_RATE, MAX_RATE)),
            paused: config.start_paused,
            keys: PressedKeys::new(),
            config,
            events,
        })
    }

    /// Current steps per second.
    pub fn rate(&self) -> f64 {
        self.pacer.rate()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Runs the frame loop until the user quits, or the sort is done and
    /// [`PlayerConfig::exit_on_finish`] is set.
    pub fn play<T, R>(&mut self, engine: &mut SortEngine<T, R>) -> Result<PlayOutcome, PlayError>
    where
        T: 'static,
        R: RenderSurface<T> + SurfaceControl,
    {
        let frame_time = Duration::from_secs_f64(1.0 / self.config.target_fps);

        // show the untouched input before anything else
        if engine.state() == EngineState::Idle {
            pollster::block_on(engine.advance())?;
        }
        self.show_status(engine)?;

        let mut last_frame = Instant::now();
        // how much longer the last sleep took than asked for
        let mut last_overhead = Duration::ZERO;
        loop {
            let now = Instant::now();
            let dt = now.duration_since(last_frame).as_secs_f64();
            last_frame = now;

            self.collect_input(engine)?;
            if self.keys.did_press_char_ignore_case('q') || self.keys.did_press(KeyCode::Esc) {
                let outcome = if engine.state() == EngineState::Finished {
                    PlayOutcome::Finished
                } else {
                    PlayOutcome::Aborted
                };
                info!("quit by user: {outcome:?}");
                return Ok(outcome);
            }

            let mut status_changed = self.apply_controls();
            let was_done = engine.is_done();
            if !was_done {
                if !self.paused {
                    self.pacer.fuel(dt);
                    while self.pacer.has_gas() {
                        self.pacer.consume();
                        if pollster::block_on(engine.advance())?.is_none() {
                            break;
                        }
                    }
                } else if self.keys.did_press_char_ignore_case('n')
                    || self.keys.did_press(KeyCode::Right)
                {
                    pollster::block_on(engine.advance())?;
                }
            }
            if engine.is_done() {
                if self.config.exit_on_finish {
                    return Ok(PlayOutcome::Finished);
                }
                status_changed |= !was_done;
            }
            if status_changed {
                self.show_status(engine)?;
            }

            let elapsed = now.elapsed();
            let remaining = frame_time
                .saturating_sub(elapsed)
                .saturating_sub(last_overhead);
            let before_sleep = Instant::now();
            std::thread::sleep(remaining);
            last_overhead = before_sleep.elapsed().saturating_sub(remaining);
        }
    }

    fn collect_input<T: 'static, R: SurfaceControl>(
        &mut self,
        engine: &mut SortEngine<T, R>,
    ) -> Result<(), PlayError> {
        self.keys.clear();
        while let Some(event) = self.events.poll()? {
            if let Event::Resize(width, height) = event {
                if let Some(surface) = engine.surface_mut() {
                    surface
                        .resize(width as usize, height as usize)
                        .map_err(surface_error)?;
                }
            }
            self.keys.record(&event);
        }
        Ok(())
    }

    /// Applies pause and speed keys. Returns whether anything changed.
    fn apply_controls(&mut self) -> bool {
        let mut changed = false;
        if self.keys.did_press(KeyCode::Char(' ')) {
            self.paused = !self.paused;
            // don't burst through the steps that would have happened while paused
            self.pacer.drain();
            debug!("paused: {}", self.paused);
            changed = true;
        }

        let presses = |keys: &[KeyCode]| -> i32 {
            keys.iter().map(|&key| i32::from(self.keys.count(key))).sum()
        };
        let exponent = presses(&[KeyCode::Char('+'), KeyCode::Char('='), KeyCode::Up])
            - presses(&[KeyCode::Char('-'), KeyCode::Down]);
        if exponent != 0 {
            let rate = (self.pacer.rate() * SPEED_FACTOR.powi(exponent)).clamp(MIN_RATE, MAX_RATE);
            self.pacer.set_rate(rate);
            debug!("rate: {rate:.1} steps/s");
            changed = true;
        }
        changed
    }

    fn show_status<T: 'static, R: SurfaceControl>(
        &self,
        engine: &mut SortEngine<T, R>,
    ) -> Result<(), PlayError> {
        let status = if engine.is_done() {
            "done, q to quit".to_string()
        } else if self.paused {
            "paused, space to resume, n to step".to_string()
        } else {
            format!("{:.1} steps/s, space to pause, +/- speed, q to quit", self.pacer.rate())
        };
        if let Some(surface) = engine.surface_mut() {
            surface.show_status(&status).map_err(surface_error)?;
        }
        Ok(())
    }
}

/// Terminal I/O failed on the drawing side, not while reading events.
fn surface_error(err: io::Error) -> PlayError {
    SortError::from(RenderError::from(err)).into()
}
