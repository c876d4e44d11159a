use ratatui::widgets::TableState;
use reqwest::Client;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::cloud::PlacedWord;
use crate::config::Config;
use crate::constants::constants;
use crate::theme::{THEMES, Theme};
use crate::words::clean_and_count;
use crate::youtube::{FetchOutcome, fetch_trending};

pub const PANEL_COUNT: usize = 3;

// --- Presentation ---

/// One ranked view, ready for display. Only ever built from a non-empty
/// frequency mapping — the orchestration short-circuits to `EmptyWords`
/// before this point otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
  ranked: Vec<(String, u32)>,
}

impl Presentation {
  pub fn new(ranked: Vec<(String, u32)>) -> Self {
    debug_assert!(!ranked.is_empty(), "Presentation requires a non-empty ranking");
    Self { ranked }
  }

  /// Rows for the frequency table (top 50).
  pub fn table_rows(&self) -> &[(String, u32)] {
    &self.ranked[..self.ranked.len().min(constants().table_rows)]
  }

  /// Entries for the word-cloud layout (top 200).
  pub fn cloud_entries(&self) -> &[(String, u32)] {
    &self.ranked[..self.ranked.len().min(constants().cloud_words)]
  }

  pub fn distinct_words(&self) -> usize {
    self.ranked.len()
  }
}

// --- Panel state machine ---

/// Where a panel currently sits in its Generate cycle. Every variant is
/// re-enterable: the next Generate leaves it for `Fetching`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelOutcome {
  Idle,
  Fetching,
  /// The service reported a structured error; message shown verbatim.
  ApiError(String),
  /// Transport-level failure; message shown verbatim.
  NetworkError(String),
  /// Fetch succeeded but the combined text was below the 10-char threshold.
  EmptyContent,
  /// Text was non-trivial but no token survived the length filter.
  EmptyWords,
  Ready(Presentation),
}

/// One analysis panel. The three panels are structurally identical and share
/// no state; each keeps its own query, slider value, and last outcome.
pub struct Panel {
  pub query: String,
  pub cursor: usize,
  pub input_scroll: usize,
  pub max_results: u32,
  pub outcome: PanelOutcome,
  pub table_state: TableState,
  /// Cloud layout cached per canvas size, recomputed when the area changes.
  pub cloud_cache: Option<(u16, u16, Vec<PlacedWord>)>,
}

impl Panel {
  fn new(index: usize) -> Self {
    let query = format!("{} {}", constants().default_query_prefix, index + 1);
    let cursor = query.chars().count();
    Self {
      query,
      cursor,
      input_scroll: 0,
      max_results: constants().results_default,
      outcome: PanelOutcome::Idle,
      table_state: TableState::default(),
      cloud_cache: None,
    }
  }

  /// Nudge the result-count slider, clamped to its range.
  pub fn adjust_results(&mut self, delta: i64) {
    let c = constants();
    let next = (self.max_results as i64 + delta).clamp(c.results_min as i64, c.results_max as i64);
    self.max_results = next as u32;
  }

  /// Scroll the frequency table by whole rows.
  pub fn scroll_table(&mut self, delta: i64) {
    let rows = match &self.outcome {
      PanelOutcome::Ready(p) => p.table_rows().len(),
      _ => return,
    };
    let offset = (*self.table_state.offset_mut() as i64 + delta).clamp(0, rows.saturating_sub(1) as i64);
    *self.table_state.offset_mut() = offset as usize;
  }
}

// --- App ---

pub struct App {
  pub panels: [Panel; PANEL_COUNT],
  pub active: usize,
  pub theme_index: usize,
  /// App-level notice (missing key, fetch already running). Panel results
  /// render through `PanelOutcome`, not here.
  pub status_message: Option<String>,
  pub should_quit: bool,
  api_key: Option<String>,
  http: Client,
  /// The single in-flight fetch, tagged with its panel index. At most one
  /// pipeline runs system-wide.
  fetch_rx: Option<(usize, oneshot::Receiver<FetchOutcome>)>,
}

impl App {
  pub fn new(config: Config) -> Self {
    let theme_index =
      if let Some(ref name) = config.theme_name { THEMES.iter().position(|t| t.name == name).unwrap_or(0) } else { 0 };
    let api_key = config.resolve_api_key();
    if api_key.is_none() {
      warn!("no API key configured; Generate will report it inline");
    }

    Self {
      panels: std::array::from_fn(Panel::new),
      active: 0,
      theme_index,
      status_message: None,
      should_quit: false,
      api_key,
      http: Client::new(),
      fetch_rx: None,
    }
  }

  pub fn theme(&self) -> &'static Theme {
    &THEMES[self.theme_index]
  }

  pub fn next_theme(&mut self) {
    self.theme_index = (self.theme_index + 1) % THEMES.len();
    self.save_config();
  }

  fn save_config(&self) {
    let config = Config { api_key: self.api_key.clone(), theme_name: Some(self.theme().name.to_string()) };
    config.save();
  }

  pub fn active_panel(&self) -> &Panel {
    &self.panels[self.active]
  }

  pub fn active_panel_mut(&mut self) -> &mut Panel {
    &mut self.panels[self.active]
  }

  pub fn next_panel(&mut self) {
    self.active = (self.active + 1) % PANEL_COUNT;
    self.status_message = None;
  }

  pub fn prev_panel(&mut self) {
    self.active = (self.active + PANEL_COUNT - 1) % PANEL_COUNT;
    self.status_message = None;
  }

  /// Kick off the fetch → count → present pipeline for the active panel.
  ///
  /// Refused while another fetch is in flight anywhere: execution is one
  /// pipeline at a time, and a running fetch has no cancellation primitive.
  pub fn trigger_generate(&mut self) {
    if self.fetch_rx.is_some() {
      self.status_message = Some("A fetch is already running — wait for it to finish.".to_string());
      return;
    }

    let idx = self.active;
    let query = self.panels[idx].query.trim().to_string();
    if query.is_empty() {
      self.status_message = Some("Enter a keyword first.".to_string());
      return;
    }
    let Some(api_key) = self.api_key.clone() else {
      self.status_message = Some("No API key configured. Set api_key in config.toml or YOUTUBE_API_KEY.".to_string());
      return;
    };

    let c = constants();
    let limit = self.panels[idx].max_results.clamp(c.results_min, c.results_max);
    self.panels[idx].outcome = PanelOutcome::Fetching;
    self.panels[idx].table_state = TableState::default();
    self.panels[idx].cloud_cache = None;
    self.status_message = None;
    info!(panel = idx, query = %query, limit, "generate: fetching");

    let client = self.http.clone();
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
      let _ = tx.send(fetch_trending(&client, &api_key, &query, limit).await);
    });
    self.fetch_rx = Some((idx, rx));
  }

  /// Poll the in-flight fetch, if any. Called once per event-loop tick.
  pub fn check_pending(&mut self) {
    if let Some((idx, mut rx)) = self.fetch_rx.take() {
      match rx.try_recv() {
        Ok(outcome) => self.apply_fetch_outcome(idx, outcome),
        Err(oneshot::error::TryRecvError::Empty) => {
          self.fetch_rx = Some((idx, rx));
        }
        Err(oneshot::error::TryRecvError::Closed) => {
          warn!(panel = idx, "generate: fetch task dropped without a result");
          self.panels[idx].outcome = PanelOutcome::NetworkError("fetch task failed".to_string());
        }
      }
    }
  }

  /// Advance panel `idx` through the counting/presenting transitions for a
  /// completed fetch. Pure state logic, exercised directly by tests.
  pub fn apply_fetch_outcome(&mut self, idx: usize, outcome: FetchOutcome) {
    let c = constants();
    self.panels[idx].outcome = match outcome {
      FetchOutcome::ApiError(msg) => {
        warn!(panel = idx, msg = %msg, "generate: API error");
        PanelOutcome::ApiError(msg)
      }
      FetchOutcome::NetworkError(msg) => {
        warn!(panel = idx, msg = %msg, "generate: network error");
        PanelOutcome::NetworkError(msg)
      }
      FetchOutcome::Text(text) if text.chars().count() < c.min_text_chars => {
        debug!(panel = idx, chars = text.chars().count(), "generate: empty content");
        PanelOutcome::EmptyContent
      }
      FetchOutcome::Text(text) => {
        let counts = clean_and_count(&text, c.min_word_length);
        if counts.is_empty() {
          debug!(panel = idx, "generate: no words survived the filter");
          PanelOutcome::EmptyWords
        } else {
          info!(panel = idx, distinct = counts.len(), "generate: ready");
          PanelOutcome::Ready(Presentation::new(counts.ranked()))
        }
      }
    };
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn test_app() -> App {
    App::new(Config::default())
  }

  fn ready_ranking(app: &App, idx: usize) -> Vec<(String, u32)> {
    match &app.panels[idx].outcome {
      PanelOutcome::Ready(p) => p.table_rows().to_vec(),
      other => panic!("expected Ready, got {other:?}"),
    }
  }

  // --- apply_fetch_outcome ---

  #[test]
  fn cats_scenario_lands_in_ready_with_expected_counts() {
    let mut app = test_app();
    app.apply_fetch_outcome(0, FetchOutcome::Text("Cute Cats Video cats playing fun".to_string()));
    let ranked = ready_ranking(&app, 0);
    assert_eq!(ranked[0], ("cats".to_string(), 2));
    let rest: Vec<&str> = ranked[1..].iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(rest, vec!["cute", "video", "playing", "fun"]);
    assert!(ranked[1..].iter().all(|(_, c)| *c == 1));
  }

  #[test]
  fn api_error_is_carried_verbatim() {
    let mut app = test_app();
    app.apply_fetch_outcome(1, FetchOutcome::ApiError("quotaExceeded".to_string()));
    assert_eq!(app.panels[1].outcome, PanelOutcome::ApiError("quotaExceeded".to_string()));
  }

  #[test]
  fn network_error_is_carried_verbatim() {
    let mut app = test_app();
    app.apply_fetch_outcome(2, FetchOutcome::NetworkError("connection refused".to_string()));
    assert_eq!(app.panels[2].outcome, PanelOutcome::NetworkError("connection refused".to_string()));
  }

  #[test]
  fn short_text_is_empty_content_not_counted() {
    let mut app = test_app();
    app.apply_fetch_outcome(0, FetchOutcome::Text("tiny".to_string()));
    assert_eq!(app.panels[0].outcome, PanelOutcome::EmptyContent);
  }

  #[test]
  fn empty_text_is_empty_content() {
    let mut app = test_app();
    app.apply_fetch_outcome(0, FetchOutcome::Text(String::new()));
    assert_eq!(app.panels[0].outcome, PanelOutcome::EmptyContent);
  }

  #[test]
  fn nontrivial_text_with_no_surviving_words_is_empty_words() {
    let mut app = test_app();
    // 14 chars, above the content threshold, but nothing survives cleaning.
    app.apply_fetch_outcome(0, FetchOutcome::Text("a1 b2 c3 d4 e5".to_string()));
    assert_eq!(app.panels[0].outcome, PanelOutcome::EmptyWords);
  }

  #[test]
  fn panels_are_independent() {
    let mut app = test_app();
    app.apply_fetch_outcome(0, FetchOutcome::ApiError("boom".to_string()));
    app.apply_fetch_outcome(2, FetchOutcome::Text("cats cats cats and more cats".to_string()));
    assert_eq!(app.panels[0].outcome, PanelOutcome::ApiError("boom".to_string()));
    assert_eq!(app.panels[1].outcome, PanelOutcome::Idle);
    assert!(matches!(app.panels[2].outcome, PanelOutcome::Ready(_)));
  }

  // --- Panel ---

  #[test]
  fn panels_get_distinct_default_queries() {
    let app = test_app();
    assert_eq!(app.panels[0].query, "Trending Topic 1");
    assert_eq!(app.panels[1].query, "Trending Topic 2");
    assert_eq!(app.panels[2].query, "Trending Topic 3");
  }

  #[test]
  fn slider_clamps_to_its_range() {
    let mut panel = Panel::new(0);
    assert_eq!(panel.max_results, 30);
    panel.adjust_results(1000);
    assert_eq!(panel.max_results, 100);
    panel.adjust_results(-1000);
    assert_eq!(panel.max_results, 10);
    panel.adjust_results(5);
    assert_eq!(panel.max_results, 15);
  }

  #[test]
  fn panel_cycling_wraps_both_ways() {
    let mut app = test_app();
    app.next_panel();
    app.next_panel();
    app.next_panel();
    assert_eq!(app.active, 0);
    app.prev_panel();
    assert_eq!(app.active, PANEL_COUNT - 1);
  }

  // --- Presentation ---

  #[test]
  fn presentation_caps_table_and_cloud_slices() {
    let ranked: Vec<(String, u32)> = (0..300).map(|i| (format!("w{i:03}"), 300 - i as u32)).collect();
    let p = Presentation::new(ranked);
    assert_eq!(p.table_rows().len(), 50);
    assert_eq!(p.cloud_entries().len(), 200);
    assert_eq!(p.distinct_words(), 300);
  }

  #[test]
  fn presentation_keeps_short_rankings_whole() {
    let p = Presentation::new(vec![("only".to_string(), 1)]);
    assert_eq!(p.table_rows().len(), 1);
    assert_eq!(p.cloud_entries().len(), 1);
  }
}
