//! Application constants loaded from `constants.ron` at compile time.
//!
//! The RON file is embedded via `include_str!` so it's always available —
//! no runtime file I/O. Parsed once on first access via `LazyLock`.

use serde::Deserialize;
use std::sync::LazyLock;

/// All tuneable application constants.
#[derive(Debug, Deserialize)]
pub struct Constants {
  // YouTube Data API
  pub search_endpoint: String,

  // Word counting
  pub min_word_length: usize,
  pub min_text_chars: usize,

  // Presentation
  pub table_rows: usize,
  pub cloud_words: usize,

  // Result-count slider
  pub results_min: u32,
  pub results_max: u32,
  pub results_default: u32,
  pub results_step: u32,

  // Panel defaults
  pub default_query_prefix: String,
}

static CONSTANTS: LazyLock<Constants> = LazyLock::new(|| {
  // Safety: the RON file is embedded at compile time; if it's malformed this is a build-time error.
  ron::from_str(include_str!("../constants.ron")).expect("constants.ron must be valid RON (embedded at compile time)")
});

/// Returns a reference to the parsed application constants.
pub fn constants() -> &'static Constants {
  &CONSTANTS
}
