use super::{Widget, WidgetEvent};
use crate::board::board::BoardContext;
use eframe::egui;
use rand::Rng;
use serde::{Deserialize, Serialize};

const DEFAULT_QUOTES: &[&str] = &[
    "Write code as if the person maintaining it is a violent psychopath who knows where you live.",
    "If it works, don't touch it.",
    "First solve the problem, then write the code.",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Quote set for this instance. An empty list falls back to the built-in
    /// defaults.
    #[serde(default)]
    pub quotes: Vec<String>,
}

/// Rotates through a fixed quote list. The starting index is random so two
/// panels mounted together do not show the same line.
pub struct QuoteWidget {
    quotes: Vec<String>,
    index: usize,
}

impl QuoteWidget {
    pub fn new(cfg: QuoteConfig) -> Self {
        let quotes = if cfg.quotes.is_empty() {
            DEFAULT_QUOTES.iter().map(|q| q.to_string()).collect()
        } else {
            cfg.quotes
        };
        let index = rand::thread_rng().gen_range(0..quotes.len());
        Self { quotes, index }
    }

    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        &self.quotes[self.index]
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.quotes.len();
    }
}

impl Widget for QuoteWidget {
    fn render(&mut self, ui: &mut egui::Ui, _ctx: &BoardContext) -> Option<WidgetEvent> {
        ui.label(egui::RichText::new(self.current()).italics());
        ui.add_space(4.0);
        let next = egui::Button::new("Next").min_size(egui::vec2(ui.available_width(), 0.0));
        if ui.add(next).clicked() {
            self.advance();
        }
        None
    }

    fn on_config_updated(&mut self, settings: &serde_json::Value) {
        if let Ok(cfg) = serde_json::from_value::<QuoteConfig>(settings.clone()) {
            if !cfg.quotes.is_empty() {
                self.quotes = cfg.quotes;
                self.index %= self.quotes.len();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{QuoteConfig, QuoteWidget};

    fn widget_with(quotes: &[&str]) -> QuoteWidget {
        QuoteWidget::new(QuoteConfig {
            quotes: quotes.iter().map(|q| q.to_string()).collect(),
        })
    }

    #[test]
    fn starts_inside_the_quote_set() {
        let widget = widget_with(&["a", "b", "c"]);
        assert!(widget.index() < widget.quotes().len());
    }

    #[test]
    fn advances_cyclically() {
        let mut widget = widget_with(&["a", "b", "c"]);
        let start = widget.index();
        let len = widget.quotes().len();
        for n in 1..=7 {
            widget.advance();
            assert_eq!(widget.index(), (start + n) % len);
        }
    }

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let widget = QuoteWidget::new(QuoteConfig::default());
        assert!(!widget.quotes().is_empty());
        assert!(!widget.current().is_empty());
    }

    #[test]
    fn custom_quotes_replace_defaults() {
        let widget = widget_with(&["only one"]);
        assert_eq!(widget.quotes().len(), 1);
        assert_eq!(widget.current(), "only one");
    }
}
