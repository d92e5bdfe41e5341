//! Key presses collected over one driver tick.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseEventKind};

const CAPACITY: usize = 16;

/// The keys pressed since the last tick, with how often each was pressed.
///
/// Scroll wheel movement is folded in as `Up`/`Down` presses so speed controls work with both.
pub struct PressedKeys {
    inner: micromap::Map<KeyCode, u8, CAPACITY>,
}

impl PressedKeys {
    pub fn new() -> Self {
        Self {
            inner: micromap::Map::new(),
        }
    }

    /// Records the key in `event`, if it is a key press or a scroll.
    pub fn record(&mut self, event: &Event) {
        let code = match event {
            // only presses, some platforms also report releases
            Event::Key(KeyEvent {
                kind: KeyEventKind::Press,
                code,
                ..
            }) => *code,
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => KeyCode::Up,
                MouseEventKind::ScrollDown => KeyCode::Down,
                _ => return,
            },
            _ => return,
        };
        if let Some(count) = self.inner.get_mut(&code) {
            *count = count.saturating_add(1);
        } else if self.inner.len() < CAPACITY {
            self.inner.insert(code, 1);
        }
    }

    /// How many times `key` was pressed this tick.
    pub fn count(&self, key: KeyCode) -> u8 {
        self.inner.get(&key).copied().unwrap_or(0)
    }

    pub fn did_press(&self, key: KeyCode) -> bool {
        self.inner.contains_key(&key)
    }

    pub fn did_press_char_ignore_case(&self, c: char) -> bool {
        self.did_press(KeyCode::Char(c.to_ascii_lowercase()))
            || self.did_press(KeyCode::Char(c.to_ascii_uppercase()))
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl Default for PressedKeys {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn counts_repeated_presses() {
        let mut keys = PressedKeys::new();
        keys.record(&press(KeyCode::Char('+')));
        keys.record(&press(KeyCode::Char('+')));
        keys.record(&press(KeyCode::Char('Q')));
        assert_eq!(keys.count(KeyCode::Char('+')), 2);
        assert!(keys.did_press_char_ignore_case('q'));
        keys.clear();
        assert!(!keys.did_press(KeyCode::Char('+')));
    }

    #[test]
    fn ignores_releases_and_folds_scrolling() {
        let mut keys = PressedKeys::new();
        keys.record(&Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        )));
        keys.record(&Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }));
        assert!(!keys.did_press(KeyCode::Char(' ')));
        assert!(keys.did_press(KeyCode::Up));
    }
}
