use super::{Widget, WidgetEvent};
use crate::board::board::BoardContext;
use crate::board::ticker::Ticker;
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

const TICK_PERIOD: Duration = Duration::from_secs(1);

pub const SESSION_FINISHED_NOTICE: &str = "Time's up! Time to rest.";

fn default_duration_secs() -> u64 {
    1500
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PomodoroConfig {
    /// Session length in seconds.
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u64,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

/// Countdown state machine. The 1-second ticker exists only while the phase
/// is Running; stopping, resetting or closing the panel drops it, so expiry
/// can fire at most once per started session.
pub struct PomodoroWidget {
    cfg: PomodoroConfig,
    remaining: u64,
    phase: Phase,
    ticker: Option<Ticker>,
}

impl PomodoroWidget {
    pub fn new(cfg: PomodoroConfig) -> Self {
        let cfg = PomodoroConfig {
            duration_secs: cfg.duration_secs.max(1),
        };
        Self {
            remaining: cfg.duration_secs,
            cfg,
            phase: Phase::Idle,
            ticker: None,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Idle starts the countdown, Running pauses it. Elapsed progress is
    /// preserved across a pause.
    pub fn toggle(&mut self, now: Instant) {
        match self.phase {
            Phase::Idle => {
                self.ticker = Some(Ticker::starting_at(now, TICK_PERIOD));
                self.phase = Phase::Running;
            }
            Phase::Running => self.stop(),
        }
    }

    /// Force Idle and restore the configured duration, from any state.
    pub fn reset(&mut self) {
        self.stop();
        self.remaining = self.cfg.duration_secs;
    }

    fn stop(&mut self) {
        self.ticker = None;
        self.phase = Phase::Idle;
    }

    /// `MM:SS`, both fields zero-padded.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

impl Widget for PomodoroWidget {
    fn render(&mut self, ui: &mut egui::Ui, ctx: &BoardContext) -> Option<WidgetEvent> {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(self.display()).monospace().size(34.0));
        });
        let total = self.cfg.duration_secs.max(1);
        let progress = 1.0 - self.remaining as f32 / total as f32;
        ui.add(egui::ProgressBar::new(progress));
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let label = match self.phase {
                Phase::Running => "Pause",
                Phase::Idle => "Start",
            };
            if ui.button(label).clicked() {
                self.toggle(ctx.frame_now);
            }
            if ui.button("Reset").clicked() {
                self.reset();
            }
        });
        None
    }

    fn tick(&mut self, now: Instant) -> Option<WidgetEvent> {
        let Some(ticker) = self.ticker.as_mut() else {
            return None;
        };
        let ticks = ticker.poll(now);
        for _ in 0..ticks {
            if self.remaining > 0 {
                self.remaining -= 1;
            }
            if self.remaining == 0 {
                self.stop();
                return Some(WidgetEvent::SessionFinished(SESSION_FINISHED_NOTICE.into()));
            }
        }
        None
    }

    fn on_config_updated(&mut self, settings: &serde_json::Value) {
        if let Ok(cfg) = serde_json::from_value::<PomodoroConfig>(settings.clone()) {
            let cfg = PomodoroConfig {
                duration_secs: cfg.duration_secs.max(1),
            };
            // An untouched idle session follows the new length; a session in
            // progress keeps its remaining time until the next reset.
            if self.phase == Phase::Idle && self.remaining == self.cfg.duration_secs {
                self.remaining = cfg.duration_secs;
            }
            self.cfg = cfg;
        }
    }

    fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        self.ticker.as_ref().map(|t| t.time_to_due(now))
    }
}
