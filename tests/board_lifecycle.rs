use eframe::egui;
use once_cell::sync::Lazy;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use widget_board::board::{Board, BoardConfig, BoardContext, Ticker, WidgetRegistry};

// The live-ticker gauge is process-global, so every test that creates or
// destroys widgets with tickers runs under this lock and asserts deltas.
static TEST_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn board_with_defaults() -> Board {
    Board::new(WidgetRegistry::with_defaults())
}

fn render_board(board: &mut Board) -> Vec<widget_board::board::WidgetEvent> {
    let mut events = Vec::new();
    egui::__run_test_ui(|ui| {
        let ctx = BoardContext {
            frame_now: Instant::now(),
        };
        events = board.ui(ui, &ctx);
    });
    events
}

#[test]
fn default_config_mounts_clock_todo_pomodoro() {
    let _lock = TEST_MUTEX.lock().unwrap();
    let baseline = Ticker::live_count();

    let mut board = board_with_defaults();
    board.mount_config(&BoardConfig::default());

    assert_eq!(board.panel_kinds(), vec!["clock", "todo", "pomodoro"]);
    // Only the clock holds a ticker while the pomodoro is idle.
    assert_eq!(Ticker::live_count(), baseline + 1);

    drop(board);
    assert_eq!(Ticker::live_count(), baseline);
}

#[test]
fn closing_a_panel_releases_its_ticker() {
    let _lock = TEST_MUTEX.lock().unwrap();
    let baseline = Ticker::live_count();

    let mut board = board_with_defaults();
    let id = board.mount("clock").unwrap();
    assert_eq!(Ticker::live_count(), baseline + 1);

    board.close(id);
    assert_eq!(board.len(), 0);
    assert_eq!(Ticker::live_count(), baseline);

    // A second close of the same id must not double-release anything.
    board.close(id);
    assert_eq!(Ticker::live_count(), baseline);
}

#[test]
fn ticker_drop_is_the_single_release_point() {
    let _lock = TEST_MUTEX.lock().unwrap();
    let baseline = Ticker::live_count();
    {
        let _ticker = Ticker::new(Duration::from_secs(1));
        assert_eq!(Ticker::live_count(), baseline + 1);
    }
    assert_eq!(Ticker::live_count(), baseline);
}

#[test]
fn mount_of_unknown_kind_is_rejected() {
    let _lock = TEST_MUTEX.lock().unwrap();
    let mut board = board_with_defaults();
    assert!(board.mount("weather").is_none());
    assert!(board.is_empty());
}

#[test]
fn mounted_panels_render_without_events() {
    let _lock = TEST_MUTEX.lock().unwrap();
    let mut board = board_with_defaults();
    board.mount("todo").unwrap();
    board.mount("quote").unwrap();
    board.mount("note").unwrap();

    let events = render_board(&mut board);
    assert!(events.is_empty());
    assert_eq!(board.len(), 3);
}

#[test]
fn render_then_close_leaves_no_ticker_behind() {
    let _lock = TEST_MUTEX.lock().unwrap();
    let baseline = Ticker::live_count();

    let mut board = board_with_defaults();
    let id = board.mount("clock").unwrap();
    render_board(&mut board);

    board.close(id);
    assert_eq!(Ticker::live_count(), baseline);

    // Ticking the board afterwards produces nothing from the closed panel.
    let events = board.tick(Instant::now() + Duration::from_secs(5));
    assert!(events.is_empty());
}

#[test]
fn idle_board_reports_no_wakeup() {
    let _lock = TEST_MUTEX.lock().unwrap();
    let now = Instant::now();
    let mut board = board_with_defaults();
    board.mount("todo").unwrap();
    board.mount("note").unwrap();
    assert_eq!(board.next_wakeup(now), None);

    board.mount("clock").unwrap();
    let wakeup = board.next_wakeup(now).expect("clock schedules a wakeup");
    assert!(wakeup <= Duration::from_secs(1));
}

#[test]
fn same_kind_instances_are_independent_panels() {
    let _lock = TEST_MUTEX.lock().unwrap();
    let mut board = board_with_defaults();
    let first = board.mount("todo").unwrap();
    let second = board.mount("todo").unwrap();
    assert_ne!(first, second);
    assert_eq!(board.len(), 2);

    board.close(first);
    assert_eq!(board.len(), 1);
    assert_eq!(board.panel_ids(), vec![second]);
}
