pub mod board;
pub mod config;
pub mod ticker;
pub mod widgets;

pub use board::{Board, BoardContext, PanelId};
pub use config::{BoardConfig, PanelConfig};
pub use ticker::Ticker;
pub use widgets::{Widget, WidgetEvent, WidgetFactory, WidgetMetadata, WidgetRegistry};
