use super::{Widget, WidgetEvent};
use crate::board::board::BoardContext;
use eframe::egui;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteConfig {}

/// Free-text scratch area. In-memory only, no teardown logic beyond the
/// default drop.
pub struct NoteWidget {
    content: String,
}

impl NoteWidget {
    pub fn new(_cfg: NoteConfig) -> Self {
        Self {
            content: String::new(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Widget for NoteWidget {
    fn render(&mut self, ui: &mut egui::Ui, _ctx: &BoardContext) -> Option<WidgetEvent> {
        ui.add(
            egui::TextEdit::multiline(&mut self.content)
                .hint_text("Write something down...")
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );
        None
    }
}
