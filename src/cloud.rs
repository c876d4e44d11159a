//! Word-cloud layout and rendering.
//!
//! Terminal adaptation of the classic proportional word-cloud image: words
//! can't change font size in a cell grid, so prominence is expressed two
//! ways instead — a color/emphasis tier derived from relative frequency, and
//! placement centrality. The layout packs words row by row working outward
//! from the vertical center, so the highest-ranked words land mid-canvas.
//!
//! The layout is deterministic, every placement stays in bounds, and no two
//! words overlap. Words that don't fit anywhere are skipped.

use ratatui::{
  buffer::Buffer,
  layout::Rect,
  style::{Modifier, Style},
  widgets::Widget,
};

use crate::theme::Theme;

/// One word placed on the cloud canvas, coordinates relative to the canvas
/// origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
  pub text: String,
  pub x: u16,
  pub y: u16,
  /// Emphasis tier 0..=4, most frequent words get the highest tier.
  pub tier: u8,
}

/// Map a count to its emphasis tier relative to the canvas maximum.
fn tier_for(count: u32, max: u32) -> u8 {
  if max == 0 {
    return 0;
  }
  let ratio = count as f64 / max as f64;
  match ratio {
    r if r >= 0.8 => 4,
    r if r >= 0.6 => 3,
    r if r >= 0.4 => 2,
    r if r >= 0.2 => 1,
    _ => 0,
  }
}

/// Row visiting order: center first, then alternating outward.
fn rows_center_out(height: u16) -> Vec<u16> {
  let center = height / 2;
  let mut rows: Vec<u16> = (0..height).collect();
  rows.sort_by_key(|&y| ((y as i32 - center as i32).unsigned_abs(), y));
  rows
}

/// Pack `ranked` words (count descending) into a `width`×`height` canvas.
///
/// Greedy: each word goes to the innermost row it still fits on, words on a
/// row separated by one space, every row centered horizontally. Tokens are
/// ASCII by construction so byte length equals display width.
pub fn layout(ranked: &[(String, u32)], width: u16, height: u16) -> Vec<PlacedWord> {
  if ranked.is_empty() || width == 0 || height == 0 {
    return Vec::new();
  }
  let max_count = ranked[0].1;
  let row_order = rows_center_out(height);

  // Per visiting-order row: words assigned so far and the width they use.
  let mut row_words: Vec<Vec<(&str, u8)>> = vec![Vec::new(); row_order.len()];
  let mut row_used: Vec<usize> = vec![0; row_order.len()];

  for (word, count) in ranked {
    let len = word.len();
    if len == 0 || len > width as usize {
      continue;
    }
    let tier = tier_for(*count, max_count);
    for (slot, &used) in row_used.iter().enumerate() {
      let needed = if used == 0 { len } else { len + 1 };
      if used + needed <= width as usize {
        row_words[slot].push((word, tier));
        row_used[slot] += needed;
        break;
      }
    }
  }

  // Materialize placements, centering each row horizontally. Words within a
  // row keep rank order.
  let mut placed = Vec::new();
  for (slot, words) in row_words.iter().enumerate() {
    if words.is_empty() {
      continue;
    }
    let y = row_order[slot];
    let mut x = (width as usize - row_used[slot]) / 2;
    for (word, tier) in words {
      placed.push(PlacedWord { text: (*word).to_string(), x: x as u16, y, tier: *tier });
      x += word.len() + 1;
    }
  }
  placed
}

// --- Widget ---

/// Renders a laid-out cloud over the theme's fixed canvas background.
pub struct WordCloudWidget<'a> {
  pub placed: &'a [PlacedWord],
  pub theme: &'a Theme,
}

impl Widget for WordCloudWidget<'_> {
  fn render(self, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
      return;
    }
    let bg = Style::default().bg(self.theme.cloud_bg);
    let blank = " ".repeat(area.width as usize);
    for y in area.top()..area.bottom() {
      buf.set_string(area.x, y, &blank, bg);
    }

    for word in self.placed {
      if word.y >= area.height {
        continue;
      }
      let mut style =
        Style::default().fg(self.theme.cloud_tiers[word.tier.min(4) as usize]).bg(self.theme.cloud_bg);
      if word.tier >= 3 {
        style = style.add_modifier(Modifier::BOLD);
      }
      buf.set_string(area.x + word.x, area.y + word.y, &word.text, style);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ranked(pairs: &[(&str, u32)]) -> Vec<(String, u32)> {
    pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
  }

  // --- tier_for ---

  #[test]
  fn tiers_cover_the_ratio_range() {
    assert_eq!(tier_for(10, 10), 4);
    assert_eq!(tier_for(7, 10), 3);
    assert_eq!(tier_for(5, 10), 2);
    assert_eq!(tier_for(2, 10), 1);
    assert_eq!(tier_for(1, 10), 0);
  }

  #[test]
  fn tier_handles_zero_max() {
    assert_eq!(tier_for(0, 0), 0);
  }

  #[test]
  fn single_word_gets_top_tier() {
    assert_eq!(tier_for(1, 1), 4);
  }

  // --- layout ---

  #[test]
  fn empty_input_or_canvas_yields_no_placements() {
    assert!(layout(&[], 40, 10).is_empty());
    assert!(layout(&ranked(&[("word", 3)]), 0, 10).is_empty());
    assert!(layout(&ranked(&[("word", 3)]), 40, 0).is_empty());
  }

  #[test]
  fn placements_stay_in_bounds() {
    let words = ranked(&[("alpha", 9), ("beta", 7), ("gamma", 5), ("delta", 3), ("epsilon", 1)]);
    for placed in layout(&words, 12, 4) {
      assert!((placed.x as usize + placed.text.len()) <= 12, "{placed:?}");
      assert!(placed.y < 4, "{placed:?}");
    }
  }

  #[test]
  fn words_on_a_row_never_overlap() {
    let words = ranked(&[("one", 5), ("two", 5), ("three", 4), ("four", 3), ("five", 2), ("six", 1)]);
    let placed = layout(&words, 14, 3);
    for a in &placed {
      for b in &placed {
        if a != b && a.y == b.y {
          let a_end = a.x as usize + a.text.len();
          let b_end = b.x as usize + b.text.len();
          assert!(a_end <= b.x as usize || b_end <= a.x as usize, "overlap: {a:?} vs {b:?}");
        }
      }
    }
  }

  #[test]
  fn top_ranked_word_lands_on_the_center_row() {
    let words = ranked(&[("biggest", 10), ("small", 1)]);
    let placed = layout(&words, 20, 5);
    assert_eq!(placed.iter().find(|p| p.text == "biggest").map(|p| p.y), Some(2));
  }

  #[test]
  fn oversized_words_are_skipped() {
    let words = ranked(&[("absurdlyoverlongword", 5), ("fits", 1)]);
    let placed = layout(&words, 10, 3);
    assert!(placed.iter().all(|p| p.text == "fits"));
    assert_eq!(placed.len(), 1);
  }

  #[test]
  fn layout_is_deterministic() {
    let words = ranked(&[("aaa", 6), ("bbb", 6), ("ccc", 4), ("ddd", 2)]);
    assert_eq!(layout(&words, 16, 4), layout(&words, 16, 4));
  }

  #[test]
  fn tier_reflects_relative_frequency() {
    let words = ranked(&[("major", 10), ("minor", 1)]);
    let placed = layout(&words, 30, 3);
    let major = placed.iter().find(|p| p.text == "major").unwrap();
    let minor = placed.iter().find(|p| p.text == "minor").unwrap();
    assert_eq!(major.tier, 4);
    assert_eq!(minor.tier, 0);
  }
}
