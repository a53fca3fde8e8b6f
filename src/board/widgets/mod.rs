use crate::board::board::BoardContext;
use eframe::egui;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

mod clock;
mod note;
mod pomodoro;
mod quote;
mod todo;

pub use clock::{ClockConfig, ClockWidget};
pub use note::{NoteConfig, NoteWidget};
pub use pomodoro::{Phase, PomodoroConfig, PomodoroWidget};
pub use quote::{QuoteConfig, QuoteWidget};
pub use todo::{TaskEntry, TodoConfig, TodoWidget};

/// Event reported by a widget to the application shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A pomodoro session ran down to zero. Carries the notice text shown in
    /// the blocking dialog.
    SessionFinished(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetMetadata {
    pub name: String,
    pub title: String,
}

/// Widget trait implemented by every board widget.
///
/// The board owns the panel chrome (title and close control); a widget owns
/// only its body and whatever resources it acquired in its constructor.
/// Teardown is the drop of the widget, so there is no cleanup method to
/// forget to chain.
pub trait Widget: Send {
    fn render(&mut self, ui: &mut egui::Ui, ctx: &BoardContext) -> Option<WidgetEvent>;

    /// Advance time-driven state up to `now`. Widgets without tickers keep
    /// the default no-op.
    fn tick(&mut self, _now: Instant) -> Option<WidgetEvent> {
        None
    }

    fn on_config_updated(&mut self, _settings: &Value) {}

    /// Earliest point after `now` at which this widget needs to be woken to
    /// advance state. `None` while it has no pending work.
    fn next_wakeup(&self, _now: Instant) -> Option<Duration> {
        None
    }
}

/// Descriptor for building widgets from JSON settings.
#[derive(Clone)]
pub struct WidgetFactory {
    title: String,
    ctor: Arc<dyn Fn(&Value) -> Box<dyn Widget> + Send + Sync>,
    default_settings: Arc<dyn Fn() -> Value + Send + Sync>,
}

impl WidgetFactory {
    pub fn new<
        T: Widget + 'static,
        C: DeserializeOwned + Serialize + Default + 'static,
    >(
        title: &str,
        build: fn(C) -> T,
    ) -> Self {
        Self {
            title: title.to_string(),
            ctor: Arc::new(move |v| {
                let cfg = serde_json::from_value::<C>(v.clone()).unwrap_or_default();
                Box::new(build(cfg))
            }),
            default_settings: Arc::new(|| {
                serde_json::to_value(C::default()).unwrap_or_else(|_| json!({}))
            }),
        }
    }

    pub fn create(&self, settings: &Value) -> Box<dyn Widget> {
        (self.ctor)(settings)
    }

    pub fn default_settings(&self) -> Value {
        (self.default_settings)()
    }

    pub fn metadata(&self, name: &str) -> WidgetMetadata {
        WidgetMetadata {
            name: name.to_string(),
            title: self.title.clone(),
        }
    }
}

/// Mapping of widget kind name to factory. The board and the add-widget
/// toolbar are driven entirely by this registry, so wiring a new widget type
/// is one `register` call.
#[derive(Clone, Default)]
pub struct WidgetRegistry {
    map: HashMap<String, WidgetFactory>,
}

impl WidgetRegistry {
    pub fn with_defaults() -> Self {
        let mut reg = Self::default();
        reg.register("clock", WidgetFactory::new("Clock", ClockWidget::new));
        reg.register("todo", WidgetFactory::new("To-Do List", TodoWidget::new));
        reg.register("quote", WidgetFactory::new("Motivation", QuoteWidget::new));
        reg.register(
            "pomodoro",
            WidgetFactory::new("Pomodoro", PomodoroWidget::new),
        );
        reg.register("note", WidgetFactory::new("Notes", NoteWidget::new));
        reg
    }

    pub fn register(&mut self, name: &str, factory: WidgetFactory) {
        self.map.insert(name.to_string(), factory);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn create(&self, name: &str, settings: &Value) -> Option<Box<dyn Widget>> {
        let settings = if settings.is_null() {
            self.default_settings(name)
                .unwrap_or_else(|| Value::Object(Default::default()))
        } else {
            settings.clone()
        };
        self.map.get(name).map(|f| f.create(&settings))
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn metadata(&self) -> Vec<WidgetMetadata> {
        let mut meta: Vec<WidgetMetadata> = self
            .map
            .iter()
            .map(|(name, factory)| factory.metadata(name))
            .collect();
        meta.sort_by(|a, b| a.name.cmp(&b.name));
        meta
    }

    pub fn title(&self, name: &str) -> Option<String> {
        self.map.get(name).map(|f| f.title.clone())
    }

    pub fn default_settings(&self, name: &str) -> Option<Value> {
        self.map.get(name).map(|f| f.default_settings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_creates_every_kind() {
        let registry = WidgetRegistry::with_defaults();
        for name in registry.names() {
            assert!(
                registry.create(&name, &Value::Null).is_some(),
                "kind '{name}' failed to build from default settings"
            );
        }
    }

    #[test]
    fn metadata_is_sorted_by_kind() {
        let registry = WidgetRegistry::with_defaults();
        let names: Vec<String> = registry.metadata().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["clock", "note", "pomodoro", "quote", "todo"]);
    }

    #[test]
    fn unknown_kind_creates_nothing() {
        let registry = WidgetRegistry::with_defaults();
        assert!(registry.create("weather", &Value::Null).is_none());
        assert!(registry.title("weather").is_none());
    }
}
