use widget_board::board::{Board, BoardConfig, WidgetRegistry};
use widget_board::gui::BoardApp;
use widget_board::logging;
use widget_board::settings::Settings;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load("settings.json")?;
    logging::init(settings.debug_logging);

    let registry = WidgetRegistry::with_defaults();
    let config = BoardConfig::load(settings.board_path(), &registry)?;
    let mut board = Board::new(registry);
    board.mount_config(&config);

    let (width, height) = settings.window_size();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([480.0, 320.0])
            .with_title("Widget Board"),
        ..Default::default()
    };

    eframe::run_native(
        "Widget Board",
        native_options,
        Box::new(move |_cc| Box::new(BoardApp::new(board))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start ui: {e}"))?;

    Ok(())
}
