use crate::board::widgets::WidgetRegistry;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::Path;

fn default_version() -> u32 {
    1
}

/// One panel of the startup layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PanelConfig {
    pub widget: String,
    #[serde(default)]
    pub settings: serde_json::Value,
}

impl PanelConfig {
    pub fn with_widget(widget: &str) -> Self {
        Self {
            widget: widget.to_string(),
            settings: serde_json::Value::Object(Default::default()),
        }
    }
}

/// Default panel set mounted at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub panels: Vec<PanelConfig>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            panels: vec![
                PanelConfig::with_widget("clock"),
                PanelConfig::with_widget("todo"),
                PanelConfig::with_widget("pomodoro"),
            ],
        }
    }
}

impl BoardConfig {
    /// Load a configuration from disk. A missing or empty file yields the
    /// default layout; unknown widget kinds are dropped using the provided
    /// registry.
    pub fn load(path: impl AsRef<Path>, registry: &WidgetRegistry) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut cfg: BoardConfig = serde_json::from_str(&content)?;
        let warnings = cfg.sanitize(registry);
        for w in warnings {
            tracing::warn!("{w}");
        }
        Ok(cfg)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Remove unsupported widgets and normalize empty settings.
    pub fn sanitize(&mut self, registry: &WidgetRegistry) -> Vec<String> {
        let mut warnings = Vec::new();
        self.panels.retain(|panel| {
            if panel.widget.is_empty() {
                return false;
            }
            if !registry.contains(&panel.widget) {
                let msg = format!("unknown board widget '{}' dropped", panel.widget);
                tracing::warn!(widget = %panel.widget, "unknown board widget dropped");
                warnings.push(msg);
                return false;
            }
            true
        });
        for panel in &mut self.panels {
            if panel.settings.is_null() {
                panel.settings = registry
                    .default_settings(&panel.widget)
                    .unwrap_or_else(|| json!({}));
            }
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_mounts_clock_todo_pomodoro() {
        let cfg = BoardConfig::default();
        assert_eq!(cfg.version, 1);
        let kinds: Vec<&str> = cfg.panels.iter().map(|p| p.widget.as_str()).collect();
        assert_eq!(kinds, vec!["clock", "todo", "pomodoro"]);
    }

    #[test]
    fn sanitize_drops_unknown_kinds() {
        let registry = WidgetRegistry::with_defaults();
        let mut cfg = BoardConfig {
            version: 1,
            panels: vec![
                PanelConfig::with_widget("clock"),
                PanelConfig::with_widget("weather"),
            ],
        };
        let warnings = cfg.sanitize(&registry);
        assert_eq!(cfg.panels.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("weather"));
    }

    #[test]
    fn sanitize_fills_null_settings_with_defaults() {
        let registry = WidgetRegistry::with_defaults();
        let mut cfg = BoardConfig {
            version: 1,
            panels: vec![PanelConfig {
                widget: "pomodoro".into(),
                settings: serde_json::Value::Null,
            }],
        };
        cfg.sanitize(&registry);
        assert!(cfg.panels[0].settings.is_object());
    }
}
