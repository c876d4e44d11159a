use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Layout, Rect},
  style::{Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Cell, Padding, Paragraph, Row, Table, Tabs},
};

use crate::app::{App, PANEL_COUNT, Panel, PanelOutcome};
use crate::cloud::{self, WordCloudWidget};
use crate::constants::constants;
use crate::theme::Theme;

// --- Helpers ---

/// Compute the display width of the first `n` chars (accounting for double-width CJK).
pub fn display_width(s: &str, n: usize) -> usize {
  use unicode_width::UnicodeWidthChar;
  s.chars().take(n).map(|c| c.width().unwrap_or(0)).sum()
}

/// Truncate a string to `max_width` characters, appending "…" if truncated.
fn truncate_str(s: &str, max_width: usize) -> String {
  if s.chars().count() <= max_width {
    s.to_string()
  } else {
    let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    format!("{}…", truncated)
  }
}

// --- UI Rendering ---

pub fn ui(frame: &mut Frame, app: &mut App) {
  let theme = app.theme();
  frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), frame.area());

  let [header_area, tabs_area, input_area, slider_area, status_area, main_area, footer_area] = Layout::vertical([
    Constraint::Length(1),
    Constraint::Length(1),
    Constraint::Length(3),
    Constraint::Length(1),
    Constraint::Length(1),
    Constraint::Min(4),
    Constraint::Length(1),
  ])
  .areas(frame.area());

  render_header(frame, theme, header_area);
  render_tabs(frame, app, tabs_area);
  render_input(frame, app, input_area);
  render_slider(frame, app, slider_area);
  render_status(frame, app, status_area);
  render_main(frame, app, main_area);
  render_footer(frame, app, footer_area);
}

fn render_header(frame: &mut Frame, theme: &Theme, area: Rect) {
  let left =
    Line::from(Span::styled(" ☁ trendcloud ", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)));
  frame.render_widget(left, area);

  let version = format!("v{} ", env!("CARGO_PKG_VERSION"));
  let right = Line::from(Span::styled(&version, Style::default().fg(theme.muted)));
  let right_area =
    Rect { x: area.x + area.width.saturating_sub(version.len() as u16), width: version.len() as u16, ..area };
  frame.render_widget(right, right_area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let titles: Vec<Line> = (0..PANEL_COUNT).map(|i| Line::from(format!(" Topic {} ", i + 1))).collect();
  let tabs = Tabs::new(titles)
    .select(app.active)
    .style(Style::default().fg(theme.muted))
    .highlight_style(Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg).add_modifier(Modifier::BOLD));
  frame.render_widget(tabs, area);
}

fn render_input(frame: &mut Frame, app: &mut App, area: Rect) {
  let theme = app.theme();
  let title = format!(" Keyword for Topic {} ", app.active + 1);
  let input_block = Block::bordered()
    .title(title)
    .title_style(Style::default().fg(theme.accent))
    .border_type(ratatui::widgets::BorderType::Rounded)
    .border_style(Style::default().fg(theme.accent))
    .padding(Padding::horizontal(1));

  let inner_w = area.width.saturating_sub(4) as usize;
  let panel = app.active_panel_mut();
  let cursor_col = display_width(&panel.query, panel.cursor);

  if cursor_col < panel.input_scroll {
    panel.input_scroll = cursor_col;
  } else if cursor_col >= panel.input_scroll + inner_w {
    panel.input_scroll = cursor_col.saturating_sub(inner_w) + 1;
  }
  let input_scroll = panel.input_scroll;

  let visible: String = panel
    .query
    .chars()
    .scan(0usize, |col, c| {
      let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
      let start = *col;
      *col += w;
      Some((start, *col, c))
    })
    .skip_while(|(_, end, _)| *end <= input_scroll)
    .take_while(|(start, _, _)| *start < input_scroll + inner_w)
    .map(|(_, _, c)| c)
    .collect();

  let paragraph = Paragraph::new(visible).style(Style::default().fg(theme.fg)).block(input_block);
  frame.render_widget(paragraph, area);

  let cursor_x = area.x + 2 + (cursor_col - input_scroll) as u16;
  frame.set_cursor_position((cursor_x, area.y + 1));
}

fn render_slider(frame: &mut Frame, app: &App, area: Rect) {
  let c = constants();
  let theme = app.theme();
  let panel = app.active_panel();

  let label = format!(" Videos to analyze {:>4}  ", panel.max_results);
  let bar_w = (area.width as usize).saturating_sub(label.len() + 2);
  let range = (c.results_max - c.results_min).max(1) as usize;
  let filled = ((panel.max_results - c.results_min) as usize * bar_w) / range;
  let bar: String = format!("{}{}", "█".repeat(filled), "░".repeat(bar_w.saturating_sub(filled)));

  let line = Line::from(vec![
    Span::styled(label, Style::default().fg(theme.muted)),
    Span::styled(bar, Style::default().fg(theme.accent)),
  ]);
  frame.render_widget(line, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let (text, style) = if let Some(msg) = &app.status_message {
    (format!(" ⚠  {}", msg), Style::default().fg(theme.warn))
  } else {
    match &app.active_panel().outcome {
      PanelOutcome::Idle => (" Ready".to_string(), Style::default().fg(theme.muted)),
      PanelOutcome::Fetching => (" ⏳ Fetching & processing data…".to_string(), Style::default().fg(theme.status)),
      PanelOutcome::ApiError(msg) => (format!(" ✗ API Error: {}", msg), Style::default().fg(theme.error)),
      PanelOutcome::NetworkError(msg) => (format!(" ✗ Network Error: {}", msg), Style::default().fg(theme.error)),
      PanelOutcome::EmptyContent => (" ⚠  No text found for that topic.".to_string(), Style::default().fg(theme.warn)),
      PanelOutcome::EmptyWords => {
        (" ⚠  Not enough valid words found.".to_string(), Style::default().fg(theme.warn))
      }
      PanelOutcome::Ready(p) => {
        (format!(" ✓ {} distinct words", p.distinct_words()), Style::default().fg(theme.status))
      }
    }
  };
  frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_main(frame: &mut Frame, app: &mut App, area: Rect) {
  let theme = app.theme();
  let panel = &mut app.panels[app.active];
  match panel.outcome {
    PanelOutcome::Ready(_) => render_results(frame, theme, panel, area),
    _ => render_welcome(frame, theme, area),
  }
}

fn render_welcome(frame: &mut Frame, theme: &Theme, area: Rect) {
  let text = vec![
    Line::from(""),
    Line::from(Span::styled("☁  trendcloud", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))),
    Line::from(""),
    Line::from(Span::styled("What is YouTube talking about?", Style::default().fg(theme.fg))),
    Line::from(""),
    Line::from(Span::styled(
      "Type a keyword above and press Enter to build its word cloud.",
      Style::default().fg(theme.muted),
    )),
  ];
  let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
    Block::bordered()
      .border_type(ratatui::widgets::BorderType::Rounded)
      .border_style(Style::default().fg(theme.border)),
  );
  frame.render_widget(paragraph, area);
}

fn render_results(frame: &mut Frame, theme: &Theme, panel: &mut Panel, area: Rect) {
  let [table_area, cloud_area] =
    Layout::horizontal([Constraint::Percentage(38), Constraint::Percentage(62)]).areas(area);

  render_table(frame, theme, panel, table_area);
  render_cloud(frame, theme, panel, cloud_area);
}

fn render_table(frame: &mut Frame, theme: &Theme, panel: &mut Panel, area: Rect) {
  let PanelOutcome::Ready(ref presentation) = panel.outcome else { return };

  let word_w = area.width.saturating_sub(13) as usize;
  let rows: Vec<Row> = presentation
    .table_rows()
    .iter()
    .enumerate()
    .map(|(i, (word, count))| {
      let bg = if i % 2 == 1 { theme.stripe_bg } else { theme.bg };
      Row::new(vec![
        Cell::from(truncate_str(word, word_w)).style(Style::default().fg(theme.fg)),
        Cell::from(count.to_string()).style(Style::default().fg(theme.muted)),
      ])
      .style(Style::default().bg(bg))
    })
    .collect();

  let header = Row::new(vec![Cell::from("Word"), Cell::from("Count")])
    .style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD));

  let table = Table::new(rows, [Constraint::Fill(1), Constraint::Length(7)]).header(header).block(
    Block::bordered()
      .title(" Word Frequency ")
      .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
      .border_type(ratatui::widgets::BorderType::Rounded)
      .border_style(Style::default().fg(theme.border)),
  );

  frame.render_stateful_widget(table, area, &mut panel.table_state);
}

fn render_cloud(frame: &mut Frame, theme: &Theme, panel: &mut Panel, area: Rect) {
  let block = Block::bordered()
    .title(" Word Cloud ")
    .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
    .border_type(ratatui::widgets::BorderType::Rounded)
    .border_style(Style::default().fg(theme.border));
  let inner = block.inner(area);
  frame.render_widget(block, area);

  if inner.is_empty() {
    return;
  }

  let PanelOutcome::Ready(ref presentation) = panel.outcome else { return };

  // The layout depends only on the canvas size; reuse it until that changes.
  let stale = match &panel.cloud_cache {
    Some((w, h, _)) => *w != inner.width || *h != inner.height,
    None => true,
  };
  if stale {
    let placed = cloud::layout(presentation.cloud_entries(), inner.width, inner.height);
    panel.cloud_cache = Some((inner.width, inner.height, placed));
  }

  if let Some((_, _, ref placed)) = panel.cloud_cache {
    frame.render_widget(WordCloudWidget { placed, theme }, inner);
  }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let has_results = matches!(app.active_panel().outcome, PanelOutcome::Ready(_));

  let mut keys: Vec<(&str, &str)> = vec![("Enter", "Generate"), ("Tab", "Topic"), ("↑/↓", "Videos")];
  if has_results {
    keys.push(("PgUp/PgDn", "Table"));
  }
  keys.push(("^t", "Theme"));
  keys.push(("Esc", "Quit"));

  let spans: Vec<Span> = keys
    .iter()
    .enumerate()
    .flat_map(|(i, (key, action))| {
      let mut s = vec![
        Span::styled(format!(" {} ", key), Style::default().fg(theme.key_fg).bg(theme.key_bg)),
        Span::styled(format!(" {} ", action), Style::default().fg(theme.muted)),
      ];
      if i < keys.len() - 1 {
        s.push(Span::raw("  "));
      }
      s
    })
    .collect();

  frame.render_widget(Line::from(spans), area);

  let theme_label = format!("{} ", theme.name);
  let right = Line::from(Span::styled(&theme_label, Style::default().fg(theme.muted)));
  let right_area =
    Rect { x: area.x + area.width.saturating_sub(theme_label.len() as u16), width: theme_label.len() as u16, ..area };
  frame.render_widget(right, right_area);
}

#[cfg(test)]
mod tests {
  use super::*;

  // --- truncate_str ---

  #[test]
  fn truncate_keeps_short_strings() {
    assert_eq!(truncate_str("word", 10), "word");
    assert_eq!(truncate_str("word", 4), "word");
  }

  #[test]
  fn truncate_appends_ellipsis() {
    assert_eq!(truncate_str("frequency", 5), "freq…");
  }

  // --- display_width ---

  #[test]
  fn display_width_ascii() {
    assert_eq!(display_width("hello", 3), 3);
    assert_eq!(display_width("hello", 10), 5);
  }

  #[test]
  fn display_width_wide_chars() {
    assert_eq!(display_width("日本", 2), 4);
  }
}
