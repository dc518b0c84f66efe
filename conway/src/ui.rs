// ui.rs - egui front end: draws the board and buttons, turns clicks into game calls

use eframe::egui;
use egui::{Align2, Color32, FontId, Painter, Pos2, Sense, Stroke, Vec2};
use std::time::Instant;

use conway::layout::{ButtonAction, ClickTarget, Layout};
use conway::{GameOfLife, GameOfLifeInterface, LifeConfig};

const STATUS_HEIGHT: f32 = 32.0;
const PANEL_MARGIN: f32 = 8.0;

const GRID_LINE: Color32 = Color32::GRAY;
const LIVE_CELL: Color32 = Color32::BLACK;
const BUTTON_FILL: Color32 = Color32::GREEN;
const BUTTON_TEXT: Color32 = Color32::BLACK;

/// Inner window size that fits the canvas plus the status line
pub fn window_size(config: &LifeConfig) -> [f32; 2] {
    [
        config.window_width + 2.0 * PANEL_MARGIN,
        config.window_height + STATUS_HEIGHT + 2.0 * PANEL_MARGIN,
    ]
}

pub struct LifeApp {
    game: GameOfLife,
    layout: Layout,
    status: String,
}

impl LifeApp {
    pub fn new(game: GameOfLife, config: &LifeConfig) -> Self {
        log::info!("Initial population: {}", game.grid().live_count());
        Self {
            game,
            layout: Layout::new(config),
            status: String::new(),
        }
    }

    fn on_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Button(ButtonAction::TogglePause) => {
                self.game.toggle_pause();
            }
            ClickTarget::Button(ButtonAction::NextGeneration) => self.game.update_generation(),
            ClickTarget::Button(ButtonAction::Save) => {
                self.status = match self.game.save_grid() {
                    Ok(()) => format!("Saved to {}", self.game.save_path().display()),
                    Err(err) => {
                        log::error!("Save failed: {err}");
                        format!("Save failed: {err}")
                    }
                };
            }
            ClickTarget::Button(ButtonAction::Load) => {
                self.status = match self.game.load_grid() {
                    Ok(true) => format!("Loaded {}", self.game.save_path().display()),
                    Ok(false) => format!("File {} does not exist.", self.game.save_path().display()),
                    Err(err) => {
                        log::error!("Load failed: {err}");
                        format!("Load failed: {err}")
                    }
                };
            }
            ClickTarget::Cell { x, y } => {
                self.game.toggle_cell(x, y);
            }
            ClickTarget::Outside => {}
        }
    }

    fn draw_board(&self, painter: &Painter, origin: Vec2) {
        let grid = self.game.grid();

        // Cell outlines
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let rect = self.layout.cell_rect(x, y).translate(origin);
                painter.rect_stroke(rect, 0.0, Stroke::new(1.0, GRID_LINE));
            }
        }

        for (x, y) in grid.iter_live() {
            let rect = self.layout.cell_rect(x, y).translate(origin);
            painter.rect_filled(rect, 0.0, LIVE_CELL);
        }
    }

    fn draw_buttons(&self, painter: &Painter, origin: Vec2) {
        let paused = self.game.is_paused();
        for button in &self.layout.buttons {
            let rect = button.rect.translate(origin);
            painter.rect_filled(rect, 0.0, BUTTON_FILL);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                button.action.label(paused),
                FontId::proportional(24.0),
                BUTTON_TEXT,
            );
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.game.tick(now);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::WHITE).inner_margin(PANEL_MARGIN))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(self.layout.canvas, Sense::click());
                let origin = response.rect.min.to_vec2();

                painter.rect_filled(response.rect, 0.0, Color32::WHITE);
                self.draw_board(&painter, origin);
                self.draw_buttons(&painter, origin);

                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let local: Pos2 = pos - origin;
                        let target = self.layout.hit_test(local);
                        self.on_click(target);
                    }
                }

                ui.horizontal(|ui| {
                    ui.colored_label(Color32::BLACK, format!("Generation: {}", self.game.generation()));
                    ui.separator();
                    ui.colored_label(Color32::BLACK, format!("Live cells: {}", self.game.grid().live_count()));
                    if !self.status.is_empty() {
                        ui.separator();
                        ui.colored_label(Color32::DARK_GRAY, self.status.as_str());
                    }
                });
            });

        // Wake up for the next tick even without input
        if let Some(wait) = self.game.clock().time_until_next_tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
