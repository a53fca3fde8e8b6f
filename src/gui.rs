use crate::board::{Board, BoardContext, WidgetEvent};
use eframe::egui;
use std::time::Instant;

/// Application shell: the add-widget toolbar, the board area and the
/// session-end notice dialog.
pub struct BoardApp {
    board: Board,
    notices: Vec<String>,
}

impl BoardApp {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            notices: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn pending_notices(&self) -> &[String] {
        &self.notices
    }

    pub fn push_notice(&mut self, message: String) {
        self.notices.push(message);
    }

    /// Dismiss the currently shown notice, if any.
    pub fn dismiss_notice(&mut self) {
        if !self.notices.is_empty() {
            self.notices.remove(0);
        }
    }

    fn toolbar(board: &mut Board, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for meta in board.registry().metadata() {
                if ui.button(format!("+ {}", meta.title)).clicked()
                    && board.mount(&meta.name).is_none()
                {
                    tracing::warn!(widget = %meta.name, "failed to mount widget");
                }
            }
        });
    }

    /// Modal-style notice: dims the screen, swallows clicks behind the card
    /// and stays up until dismissed.
    fn notice_overlay(&mut self, ctx: &egui::Context) {
        let Some(message) = self.notices.first().cloned() else {
            return;
        };
        let mut dismissed = false;
        egui::Area::new(egui::Id::new("session_notice"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let screen = ui.ctx().screen_rect();
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(160));
                ui.allocate_rect(screen, egui::Sense::click());

                let card =
                    egui::Rect::from_center_size(screen.center(), egui::vec2(320.0, 110.0));
                let mut card_ui = ui.child_ui(card, egui::Layout::top_down(egui::Align::Center));
                egui::Frame::window(ui.style()).show(&mut card_ui, |ui| {
                    ui.heading("Pomodoro");
                    ui.label(&message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        if dismissed {
            self.dismiss_notice();
        }
    }
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let mut events = self.board.tick(now);

        egui::TopBottomPanel::top("add_widgets").show(ctx, |ui| {
            Self::toolbar(&mut self.board, ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let bctx = BoardContext { frame_now: now };
                    events.extend(self.board.ui(ui, &bctx));
                });
        });

        for event in events {
            match event {
                WidgetEvent::SessionFinished(message) => self.notices.push(message),
            }
        }

        self.notice_overlay(ctx);

        if let Some(wakeup) = self.board.next_wakeup(now) {
            ctx.request_repaint_after(wakeup);
        }
    }
}
