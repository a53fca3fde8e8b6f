use super::{Widget, WidgetEvent};
use crate::board::board::BoardContext;
use eframe::egui;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoConfig {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    pub id: i64,
    pub text: String,
}

/// Per-instance task list. Every widget owns its own collection; nothing is
/// shared between two todo panels on the same board.
pub struct TodoWidget {
    tasks: Vec<TaskEntry>,
    input: String,
}

impl TodoWidget {
    pub fn new(_cfg: TodoConfig) -> Self {
        Self {
            tasks: Vec::new(),
            input: String::new(),
        }
    }

    pub fn tasks(&self) -> &[TaskEntry] {
        &self.tasks
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Append an entry as-is. Ids are normally millisecond timestamps; two
    /// submits within the same millisecond collide, and removal by that id
    /// drops both entries.
    pub fn push_entry(&mut self, entry: TaskEntry) {
        self.tasks.push(entry);
    }

    /// Take the trimmed input as a new task. Empty or whitespace-only input
    /// is a silent no-op and the input is left untouched.
    pub fn submit(&mut self) {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return;
        }
        self.push_entry(TaskEntry {
            id: chrono::Local::now().timestamp_millis(),
            text,
        });
        self.input.clear();
    }

    /// Remove every entry matching `id`, preserving the order of the rest.
    pub fn remove_task(&mut self, id: i64) {
        self.tasks.retain(|t| t.id != id);
    }
}

impl Widget for TodoWidget {
    fn render(&mut self, ui: &mut egui::Ui, _ctx: &BoardContext) -> Option<WidgetEvent> {
        // One dispatch point for the whole list: the clicked id is collected
        // here and applied after the row loop.
        let mut remove: Option<i64> = None;
        for entry in &self.tasks {
            ui.horizontal(|ui| {
                ui.label(&entry.text);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        remove = Some(entry.id);
                    }
                });
            });
        }
        if let Some(id) = remove {
            self.remove_task(id);
        }

        if self.tasks.is_empty() {
            ui.label("Nothing to do yet");
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.input)
                    .hint_text("New task...")
                    .desired_width(ui.available_width() - 60.0),
            );
            let submitted = response.lost_focus()
                && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Add").clicked() || submitted {
                self.submit();
            }
        });

        None
    }
}
