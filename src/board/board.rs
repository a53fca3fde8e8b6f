use crate::board::config::BoardConfig;
use crate::board::widgets::{Widget, WidgetEvent, WidgetRegistry};
use eframe::egui;
use serde_json::Value;
use std::time::{Duration, Instant};

/// Identifier of a mounted panel, unique for the lifetime of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(u64);

/// Context shared with widgets at render time.
pub struct BoardContext {
    /// Wall-clock instant of the current frame. Widgets that start tickers
    /// from an interaction anchor them here so a tick and the interaction
    /// that caused it stay strictly sequenced.
    pub frame_now: Instant,
}

struct PanelRuntime {
    id: PanelId,
    kind: String,
    title: String,
    widget: Box<dyn Widget>,
}

/// The container. Owns every mounted widget and its lifecycle: mounting
/// appends a panel, closing removes it, and removal drops the widget
/// together with any tickers it holds. Removals are applied only after the
/// frame's render pass, so a pending tick never observes a half-torn-down
/// panel.
pub struct Board {
    panels: Vec<PanelRuntime>,
    registry: WidgetRegistry,
    next_id: u64,
}

impl Board {
    pub fn new(registry: WidgetRegistry) -> Self {
        Self {
            panels: Vec::new(),
            registry,
            next_id: 0,
        }
    }

    /// Mount every panel of a board configuration in order. Unknown kinds
    /// have already been dropped by [`BoardConfig::sanitize`]; anything left
    /// that still fails to build is logged and skipped.
    pub fn mount_config(&mut self, config: &BoardConfig) {
        for panel in &config.panels {
            if self.mount_with(&panel.widget, &panel.settings).is_none() {
                tracing::warn!(widget = %panel.widget, "configured widget could not be mounted");
            }
        }
    }

    /// Instantiate a widget kind with its default settings and append it.
    pub fn mount(&mut self, kind: &str) -> Option<PanelId> {
        self.mount_with(kind, &Value::Null)
    }

    pub fn mount_with(&mut self, kind: &str, settings: &Value) -> Option<PanelId> {
        let widget = self.registry.create(kind, settings)?;
        let title = self
            .registry
            .title(kind)
            .unwrap_or_else(|| kind.to_string());
        let id = PanelId(self.next_id);
        self.next_id += 1;
        self.panels.push(PanelRuntime {
            id,
            kind: kind.to_string(),
            title,
            widget,
        });
        tracing::debug!(widget = %kind, ?id, "panel mounted");
        Some(id)
    }

    /// Remove a panel. Dropping the runtime releases the widget's listeners
    /// and tickers exactly once; a second close of the same id is a no-op.
    pub fn close(&mut self, id: PanelId) {
        let before = self.panels.len();
        self.panels.retain(|p| p.id != id);
        if self.panels.len() != before {
            tracing::debug!(?id, "panel closed");
        }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Kind names of the mounted panels, in mount order.
    pub fn panel_kinds(&self) -> Vec<String> {
        self.panels.iter().map(|p| p.kind.clone()).collect()
    }

    pub fn panel_ids(&self) -> Vec<PanelId> {
        self.panels.iter().map(|p| p.id).collect()
    }

    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    /// Advance every widget's time-driven state up to `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<WidgetEvent> {
        self.panels
            .iter_mut()
            .filter_map(|p| p.widget.tick(now))
            .collect()
    }

    /// Smallest pending ticker deadline across all panels, for repaint
    /// scheduling. `None` when nothing is waiting on time.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        self.panels
            .iter()
            .filter_map(|p| p.widget.next_wakeup(now))
            .min()
    }

    /// Render every panel: a framed group with a header row (title plus the
    /// close control) and the widget body. Close clicks collected during the
    /// pass are applied after it.
    pub fn ui(&mut self, ui: &mut egui::Ui, ctx: &BoardContext) -> Vec<WidgetEvent> {
        let mut events = Vec::new();
        let mut closed: Vec<PanelId> = Vec::new();

        for panel in &mut self.panels {
            ui.push_id(panel.id.0, |ui| {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.heading(&panel.title);
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.small_button("✕").clicked() {
                                    closed.push(panel.id);
                                }
                            },
                        );
                    });
                    ui.separator();
                    if let Some(event) = panel.widget.render(ui, ctx) {
                        events.push(event);
                    }
                });
            });
            ui.add_space(6.0);
        }

        for id in closed {
            self.close(id);
        }

        events
    }
}
