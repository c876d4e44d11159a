//! Text normalization and word-frequency counting.
//!
//! The cleaning step deletes every character outside `a-z`/whitespace rather
//! than replacing it with a separator, so words joined only by digits or
//! punctuation merge into one token ("word1word2" → "wordword"). That is the
//! documented behavior, not an accident; see the tests pinning it down.

use std::collections::HashMap;

/// Word → occurrence count for one query's fetched text.
///
/// Entries remember first-encounter order so the ranked view breaks count
/// ties deterministically.
#[derive(Debug, Default, Clone)]
pub struct WordCounts {
  entries: Vec<(String, u32)>,
  index: HashMap<String, usize>,
}

impl WordCounts {
  pub fn new() -> Self {
    Self::default()
  }

  /// Increment the count for `word`, inserting it at the back on first sight.
  fn bump(&mut self, word: &str) {
    match self.index.get(word) {
      Some(&i) => self.entries[i].1 += 1,
      None => {
        self.index.insert(word.to_string(), self.entries.len());
        self.entries.push((word.to_string(), 1));
      }
    }
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn get(&self, word: &str) -> Option<u32> {
    self.index.get(word).map(|&i| self.entries[i].1)
  }

  /// Materialize the ranked view: count descending, ties in first-encounter
  /// order (stable sort).
  pub fn ranked(&self) -> Vec<(String, u32)> {
    let mut ranked = self.entries.clone();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
  }
}

/// Lowercase `text`, delete everything outside `a-z` and whitespace, split on
/// whitespace runs, and count the tokens at least `min_len` chars long.
///
/// Total for any input: empty text or all-short tokens yield an empty map.
pub fn clean_and_count(text: &str, min_len: usize) -> WordCounts {
  let lowered = text.to_lowercase();
  let cleaned: String = lowered.chars().filter(|c| c.is_ascii_lowercase() || c.is_whitespace()).collect();

  let mut counts = WordCounts::new();
  for token in cleaned.split_whitespace() {
    if token.len() >= min_len {
      counts.bump(token);
    }
  }
  counts
}

#[cfg(test)]
mod tests {
  use super::*;

  const MIN_LEN: usize = 3;

  // --- clean_and_count ---

  #[test]
  fn empty_input_yields_empty_counts() {
    assert!(clean_and_count("", MIN_LEN).is_empty());
  }

  #[test]
  fn all_short_tokens_yield_empty_counts() {
    assert!(clean_and_count("ab cd ef", MIN_LEN).is_empty());
  }

  #[test]
  fn lowercases_before_counting() {
    let counts = clean_and_count("Hello hello WORLD", MIN_LEN);
    assert_eq!(counts.get("hello"), Some(2));
    assert_eq!(counts.get("world"), Some(1));
    assert_eq!(counts.len(), 2);
  }

  #[test]
  fn digits_are_deleted_not_replaced() {
    // "abc123def" collapses to "abcdef"; "99" vanishes; "xy" is too short.
    let counts = clean_and_count("abc123def 99 xy", MIN_LEN);
    assert_eq!(counts.get("abcdef"), Some(1));
    assert_eq!(counts.len(), 1);
  }

  #[test]
  fn punctuation_is_deleted_not_replaced() {
    let counts = clean_and_count("don't re-use", MIN_LEN);
    assert_eq!(counts.get("dont"), Some(1));
    assert_eq!(counts.get("reuse"), Some(1));
  }

  #[test]
  fn keys_are_lowercase_alpha_of_min_length() {
    let counts = clean_and_count("Mixed UP input, with 42 numbers & symbols!! aa", MIN_LEN);
    for (word, count) in counts.ranked() {
      assert!(word.len() >= MIN_LEN);
      assert!(word.chars().all(|c| c.is_ascii_lowercase()), "bad key: {word:?}");
      assert!(count >= 1);
    }
  }

  #[test]
  fn counts_sum_to_surviving_token_count() {
    let text = "one two two three three three x yz";
    // Survivors after cleaning + length filter: one, two, two, three x3.
    let counts = clean_and_count(text, MIN_LEN);
    let total: u32 = counts.ranked().iter().map(|(_, c)| c).sum();
    assert_eq!(total, 6);
  }

  #[test]
  fn non_ascii_letters_are_dropped() {
    // Unicode letters are outside a-z and get deleted like punctuation.
    let counts = clean_and_count("naïve café日本語 abc", MIN_LEN);
    assert_eq!(counts.get("nave"), Some(1));
    assert_eq!(counts.get("caf"), Some(1));
    assert_eq!(counts.get("abc"), Some(1));
    assert_eq!(counts.len(), 3);
  }

  #[test]
  fn min_length_is_respected_per_call() {
    let counts = clean_and_count("to be or not to be", 2);
    assert_eq!(counts.get("to"), Some(2));
    assert_eq!(counts.get("be"), Some(2));
    assert_eq!(counts.get("or"), Some(1));
  }

  // --- ranked ---

  #[test]
  fn ranked_sorts_by_count_descending() {
    let counts = clean_and_count("cats cats cats dogs dogs fish", MIN_LEN);
    let ranked = counts.ranked();
    assert_eq!(ranked[0], ("cats".to_string(), 3));
    assert_eq!(ranked[1], ("dogs".to_string(), 2));
    assert_eq!(ranked[2], ("fish".to_string(), 1));
  }

  #[test]
  fn ranked_breaks_ties_by_first_encounter() {
    // aaa and bbb both occur 5 times; ccc once. aaa was seen first.
    let text = "aaa bbb aaa bbb aaa bbb aaa bbb aaa bbb ccc";
    let ranked = clean_and_count(text, MIN_LEN).ranked();
    assert_eq!(ranked[0].0, "aaa");
    assert_eq!(ranked[1].0, "bbb");
    assert_eq!(ranked[2].0, "ccc");
  }

  #[test]
  fn ranked_is_stable_across_calls() {
    let counts = clean_and_count("red blue red green blue red", MIN_LEN);
    assert_eq!(counts.ranked(), counts.ranked());
  }
}
