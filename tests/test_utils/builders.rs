use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

/// Builds key event sequences for driving the workbench in tests.
pub struct EventBuilder {
  events: Vec<KeyEvent>,
}

impl Default for EventBuilder {
  fn default() -> Self {
    Self::new()
  }
}

impl EventBuilder {
  pub fn new() -> Self {
    Self { events: Vec::new() }
  }

  pub fn key(mut self, key: char) -> Self {
    self.events.push(KeyEvent {
      code: KeyCode::Char(key),
      modifiers: KeyModifiers::empty(),
      kind: KeyEventKind::Press,
      state: KeyEventState::empty(),
    });
    self
  }

  pub fn keys(mut self, keys: &str) -> Self {
    for ch in keys.chars() {
      self = self.key(ch);
    }
    self
  }

  pub fn code(mut self, code: KeyCode) -> Self {
    self.events.push(KeyEvent {
      code,
      modifiers: KeyModifiers::empty(),
      kind: KeyEventKind::Press,
      state: KeyEventState::empty(),
    });
    self
  }

  pub fn enter(self) -> Self {
    self.code(KeyCode::Enter)
  }

  pub fn esc(self) -> Self {
    self.code(KeyCode::Esc)
  }

  pub fn up(self) -> Self {
    self.code(KeyCode::Up)
  }

  pub fn down(self) -> Self {
    self.code(KeyCode::Down)
  }

  pub fn build(self) -> Vec<KeyEvent> {
    self.events
  }
}
