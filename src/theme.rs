use ratatui::style::Color;

/// A full color theme. Cycled at runtime with Ctrl+T and persisted by name.
pub struct Theme {
  pub name: &'static str,
  pub bg: Color,
  pub fg: Color,
  pub accent: Color,
  pub muted: Color,
  pub border: Color,
  pub status: Color,
  pub error: Color,
  pub warn: Color,
  pub highlight_fg: Color,
  pub highlight_bg: Color,
  pub stripe_bg: Color,
  pub key_fg: Color,
  pub key_bg: Color,
  /// Fixed word-cloud canvas background, regardless of `bg`.
  pub cloud_bg: Color,
  /// Word color ramp, least to most frequent tier.
  pub cloud_tiers: [Color; 5],
}

pub static THEMES: [Theme; 3] = [
  Theme {
    name: "Paper",
    bg: Color::Rgb(250, 248, 243),
    fg: Color::Rgb(60, 56, 54),
    accent: Color::Rgb(175, 58, 3),
    muted: Color::Rgb(146, 131, 116),
    border: Color::Rgb(213, 196, 161),
    status: Color::Rgb(121, 116, 14),
    error: Color::Rgb(204, 36, 29),
    warn: Color::Rgb(181, 118, 20),
    highlight_fg: Color::Rgb(250, 248, 243),
    highlight_bg: Color::Rgb(175, 58, 3),
    stripe_bg: Color::Rgb(242, 238, 228),
    key_fg: Color::Rgb(250, 248, 243),
    key_bg: Color::Rgb(124, 111, 100),
    cloud_bg: Color::Rgb(255, 255, 255),
    cloud_tiers: [
      Color::Rgb(189, 174, 147),
      Color::Rgb(152, 151, 26),
      Color::Rgb(69, 133, 136),
      Color::Rgb(177, 98, 134),
      Color::Rgb(204, 36, 29),
    ],
  },
  Theme {
    name: "Ink",
    bg: Color::Rgb(29, 32, 33),
    fg: Color::Rgb(235, 219, 178),
    accent: Color::Rgb(254, 128, 25),
    muted: Color::Rgb(124, 111, 100),
    border: Color::Rgb(80, 73, 69),
    status: Color::Rgb(184, 187, 38),
    error: Color::Rgb(251, 73, 52),
    warn: Color::Rgb(250, 189, 47),
    highlight_fg: Color::Rgb(29, 32, 33),
    highlight_bg: Color::Rgb(254, 128, 25),
    stripe_bg: Color::Rgb(40, 40, 40),
    key_fg: Color::Rgb(29, 32, 33),
    key_bg: Color::Rgb(168, 153, 132),
    cloud_bg: Color::Rgb(16, 18, 19),
    cloud_tiers: [
      Color::Rgb(124, 111, 100),
      Color::Rgb(184, 187, 38),
      Color::Rgb(131, 165, 152),
      Color::Rgb(211, 134, 155),
      Color::Rgb(254, 128, 25),
    ],
  },
  Theme {
    name: "Lagoon",
    bg: Color::Rgb(15, 27, 36),
    fg: Color::Rgb(205, 221, 222),
    accent: Color::Rgb(95, 209, 196),
    muted: Color::Rgb(92, 113, 120),
    border: Color::Rgb(44, 68, 80),
    status: Color::Rgb(148, 210, 162),
    error: Color::Rgb(240, 113, 120),
    warn: Color::Rgb(229, 192, 123),
    highlight_fg: Color::Rgb(15, 27, 36),
    highlight_bg: Color::Rgb(95, 209, 196),
    stripe_bg: Color::Rgb(21, 36, 46),
    key_fg: Color::Rgb(15, 27, 36),
    key_bg: Color::Rgb(122, 162, 172),
    cloud_bg: Color::Rgb(9, 17, 23),
    cloud_tiers: [
      Color::Rgb(92, 113, 120),
      Color::Rgb(148, 210, 162),
      Color::Rgb(122, 162, 247),
      Color::Rgb(229, 192, 123),
      Color::Rgb(95, 209, 196),
    ],
  },
];
