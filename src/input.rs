use ratatui::crossterm::event::{self, KeyCode, KeyModifiers};

use crate::app::App;
use crate::constants::constants;

// --- Helpers ---

/// Convert a char index to a byte offset within the string.
pub fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
  s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

// --- Event Handling ---

pub fn handle_key_event(app: &mut App, key: event::KeyEvent) {
  if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
    app.should_quit = true;
    return;
  }

  if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('t') {
    app.next_theme();
    return;
  }

  let step = constants().results_step as i64;
  match key.code {
    KeyCode::Enter => {
      app.trigger_generate();
    }
    KeyCode::Tab => {
      app.next_panel();
    }
    KeyCode::BackTab => {
      app.prev_panel();
    }
    KeyCode::Up => {
      app.active_panel_mut().adjust_results(step);
    }
    KeyCode::Down => {
      app.active_panel_mut().adjust_results(-step);
    }
    KeyCode::PageUp => {
      app.active_panel_mut().scroll_table(-10);
    }
    KeyCode::PageDown => {
      app.active_panel_mut().scroll_table(10);
    }
    KeyCode::Char(c) => {
      app.status_message = None;
      let panel = app.active_panel_mut();
      let byte_idx = char_to_byte_index(&panel.query, panel.cursor);
      panel.query.insert(byte_idx, c);
      panel.cursor += 1;
    }
    KeyCode::Backspace => {
      let panel = app.active_panel_mut();
      if panel.cursor > 0 {
        panel.cursor -= 1;
        let byte_idx = char_to_byte_index(&panel.query, panel.cursor);
        panel.query.remove(byte_idx);
      }
    }
    KeyCode::Delete => {
      let panel = app.active_panel_mut();
      if panel.cursor < panel.query.chars().count() {
        let byte_idx = char_to_byte_index(&panel.query, panel.cursor);
        panel.query.remove(byte_idx);
      }
    }
    KeyCode::Left => {
      let panel = app.active_panel_mut();
      panel.cursor = panel.cursor.saturating_sub(1);
    }
    KeyCode::Right => {
      let panel = app.active_panel_mut();
      if panel.cursor < panel.query.chars().count() {
        panel.cursor += 1;
      }
    }
    KeyCode::Home => {
      app.active_panel_mut().cursor = 0;
    }
    KeyCode::End => {
      let panel = app.active_panel_mut();
      panel.cursor = panel.query.chars().count();
    }
    KeyCode::Esc => {
      let panel = app.active_panel_mut();
      if !panel.query.is_empty() {
        panel.query.clear();
        panel.cursor = 0;
        panel.input_scroll = 0;
      } else {
        app.should_quit = true;
      }
    }
    _ => {}
  }
}
