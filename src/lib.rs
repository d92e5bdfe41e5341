//! # sortviz
//!
//! Animated comparison sorts in the terminal.
//!
//! A sorting algorithm is written as a resumable [`StepSource`](algorithms::StepSource): each call
//! does one comparison, swap or boundary move and describes the resulting visual state as a
//! [`Step`](step::Step). A [`SortEngine`](engine::SortEngine) owns the data, pulls steps one at a
//! time, renders each on a [`RenderSurface`](surface::RenderSurface) and waits for the render to
//! complete before letting the algorithm continue.
//!
//! ```rust ,no_run
//! use sortviz::algorithms::Algorithm;
//! use sortviz::driver::{Player, PlayerConfig, TerminalEvents};
//! use sortviz::engine::SortEngine;
//! use sortviz::rendering::bars::BarChartSurface;
//! use sortviz::{install_panic_handler, terminal_cleanup, terminal_setup, CustomBufWriter};
//!
//! terminal_setup().unwrap();
//! install_panic_handler();
//!
//! let (width, height) = crossterm::terminal::size().unwrap();
//! let surface = BarChartSurface::new(width as usize, height as usize, CustomBufWriter::new(), "demo");
//! let mut engine = SortEngine::new(vec![5, 2, 4, 1, 3], Algorithm::Selection)
//!     .unwrap()
//!     .with_surface(surface);
//! let mut player = Player::new(PlayerConfig::default(), TerminalEvents).unwrap();
//! player.play(&mut engine).unwrap();
//!
//! terminal_cleanup().unwrap();
//! ```

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{cursor, execute};
use std::io;
use std::io::{stdout, Stdout, Write};

pub mod algorithms;
pub mod dataset;
pub mod datasets;
pub mod driver;
pub mod engine;
pub mod error;
pub mod legend;
pub mod rendering;
pub mod step;
pub mod surface;
pub mod trace;

/// Puts the terminal into the state the animation needs.
///
/// Enters the alternate screen, enables raw mode and mouse capture (for scroll speed control),
/// and hides the cursor. Pair with [`terminal_cleanup`], and call [`install_panic_handler`] right
/// after this.
///
/// Note: If you are stuck in a bad terminal state, you can try running `reset` in the terminal.
pub fn terminal_setup() -> io::Result<()> {
    let mut stdout = stdout();
    execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    enable_raw_mode()?;
    execute!(stdout, EnableMouseCapture, cursor::Hide)?;
    Ok(())
}

/// Undoes everything [`terminal_setup`] did.
pub fn terminal_cleanup() -> io::Result<()> {
    let mut stdout = stdout();
    execute!(
        stdout,
        DisableMouseCapture,
        cursor::Show,
        crossterm::terminal::Clear(crossterm::terminal::ClearType::All)
    )?;
    disable_raw_mode()?;
    execute!(stdout, crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Restores the terminal before the default panic output, so the message is readable.
pub fn install_panic_handler() {
    let old_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = terminal_cleanup();
        old_hook(info);
    }));
}

/// Buffers everything written and only hits stdout on an explicit flush.
///
/// One frame becomes a single write, which avoids tearing on slow terminals.
pub struct CustomBufWriter {
    buf: Vec<u8>,
    stdout: Stdout,
}

impl CustomBufWriter {
    pub fn new() -> Self {
        Self {
            buf: vec![],
            stdout: stdout(),
        }
    }
}

impl Default for CustomBufWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for CustomBufWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut lock = self.stdout.lock();
        lock.write_all(&self.buf)?;
        lock.flush()?;
        self.buf.clear();
        Ok(())
    }
}
