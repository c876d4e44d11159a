use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct Config {
  /// YouTube Data API v3 key. Required for fetching; the app starts without
  /// one and reports its absence inline when Generate is pressed.
  pub api_key: Option<String>,
  pub theme_name: Option<String>,
}

impl Config {
  pub fn load() -> Self {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "trendcloud") {
      let config_file = proj_dirs.config_dir().join("config.toml");
      if let Ok(content) = std::fs::read_to_string(config_file)
        && let Ok(config) = toml::from_str(&content)
      {
        return config;
      }
    }
    Self::default()
  }

  pub fn save(&self) {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "trendcloud") {
      let config_dir = proj_dirs.config_dir();
      if std::fs::create_dir_all(config_dir).is_ok() {
        let config_file = config_dir.join("config.toml");
        if let Ok(content) = toml::to_string(self) {
          let _ = std::fs::write(config_file, content);
        }
      }
    }
  }

  /// Resolve the API credential: config file first, `YOUTUBE_API_KEY` env
  /// variable as fallback. Resolved once at startup and injected into the App.
  pub fn resolve_api_key(&self) -> Option<String> {
    self
      .api_key
      .clone()
      .filter(|k| !k.trim().is_empty())
      .or_else(|| std::env::var("YOUTUBE_API_KEY").ok().filter(|k| !k.trim().is_empty()))
  }
}
