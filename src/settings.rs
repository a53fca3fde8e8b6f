use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Initial window size. If absent, a default size is used.
    #[serde(default = "default_window_size")]
    pub window_size: Option<(f32, f32)>,
    /// Path of the board layout file. If `None`, `board.json` next to the
    /// executable's working directory is used.
    #[serde(default)]
    pub board_path: Option<String>,
}

fn default_window_size() -> Option<(f32, f32)> {
    Some((960.0, 640.0))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            window_size: default_window_size(),
            board_path: None,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn board_path(&self) -> &str {
        self.board_path.as_deref().unwrap_or("board.json")
    }

    pub fn window_size(&self) -> (f32, f32) {
        self.window_size.unwrap_or((960.0, 640.0))
    }
}
