use super::{Widget, WidgetEvent};
use crate::board::board::BoardContext;
use crate::board::ticker::Ticker;
use chrono::{DateTime, Local, Locale};
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

const CLOCK_PERIOD: Duration = Duration::from_secs(1);

fn default_locale() -> String {
    "en_US".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Locale identifier for time and date formatting, e.g. `en_US` or
    /// `ru_RU`. Unknown identifiers fall back to the default.
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

fn resolve_locale(identifier: &str) -> Locale {
    Locale::try_from(identifier).unwrap_or_else(|_| {
        tracing::warn!(locale = %identifier, "unknown locale, falling back to en_US");
        Locale::en_US
    })
}

fn format_parts(now: DateTime<Local>, locale: Locale) -> (String, String) {
    (
        now.format_localized("%X", locale).to_string(),
        now.format_localized("%A, %-d %B %Y", locale).to_string(),
    )
}

/// Wall clock. The 1-second ticker is acquired in the constructor and lives
/// exactly as long as the widget; the display text is computed immediately
/// and recomputed on every tick.
pub struct ClockWidget {
    locale: Locale,
    ticker: Ticker,
    time_text: String,
    date_text: String,
}

impl ClockWidget {
    pub fn new(cfg: ClockConfig) -> Self {
        let locale = resolve_locale(&cfg.locale);
        let (time_text, date_text) = format_parts(Local::now(), locale);
        Self {
            locale,
            ticker: Ticker::new(CLOCK_PERIOD),
            time_text,
            date_text,
        }
    }

    fn refresh(&mut self) {
        let (time_text, date_text) = format_parts(Local::now(), self.locale);
        self.time_text = time_text;
        self.date_text = date_text;
    }

    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    pub fn date_text(&self) -> &str {
        &self.date_text
    }
}

impl Widget for ClockWidget {
    fn render(&mut self, ui: &mut egui::Ui, _ctx: &BoardContext) -> Option<WidgetEvent> {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&self.time_text).monospace().size(30.0));
            ui.label(egui::RichText::new(&self.date_text).small());
        });
        None
    }

    fn tick(&mut self, now: Instant) -> Option<WidgetEvent> {
        if self.ticker.poll(now) > 0 {
            self.refresh();
        }
        None
    }

    fn on_config_updated(&mut self, settings: &serde_json::Value) {
        if let Ok(cfg) = serde_json::from_value::<ClockConfig>(settings.clone()) {
            self.locale = resolve_locale(&cfg.locale);
            self.refresh();
        }
    }

    fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        Some(self.ticker.time_to_due(now))
    }
}

#[cfg(test)]
mod tests {
    use super::{format_parts, resolve_locale};
    use chrono::{Locale, Local, TimeZone};

    #[test]
    fn date_spells_out_weekday_month_and_year() {
        let date = Local.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap();
        let (time, date_text) = format_parts(date, Locale::en_US);
        assert_eq!(date_text, "Tuesday, 2 January 2024");
        assert!(time.contains("04"), "unexpected time text: {time}");
        assert!(time.contains("05"), "unexpected time text: {time}");
    }

    #[test]
    fn unknown_locale_falls_back() {
        assert_eq!(resolve_locale("xx_XX"), Locale::en_US);
        assert_eq!(resolve_locale("ru_RU"), Locale::ru_RU);
    }
}
