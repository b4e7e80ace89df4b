use eframe::egui::{self, Align2, Color32, FontId, Rect, Sense};
use log::{error, info};
use model::{Field, FieldError, Game, Side};

use crate::control::{pressed_commands, Command};

const TILE_GAP: f32 = 6.0;
const BOARD_COLOR: Color32 = Color32::from_rgb(128, 128, 128);

fn tile_color(n: u32) -> Color32 {
    match n {
        2 => Color32::from_rgb(255, 175, 175),
        4 => Color32::from_rgb(255, 200, 0),
        8 => Color32::from_rgb(255, 255, 0),
        16 => Color32::from_rgb(0, 255, 0),
        32 => Color32::from_rgb(0, 255, 255),
        64 => Color32::from_rgb(0, 0, 255),
        128 => Color32::from_rgb(255, 0, 255),
        256 => Color32::from_rgb(255, 0, 0),
        512 => Color32::from_rgb(192, 192, 192),
        1024 => Color32::from_rgb(64, 64, 64),
        2048 => Color32::BLACK,
        _ => Color32::from_rgb(192, 192, 192),
    }
}

fn tile_font_color(n: u32) -> Color32 {
    match n {
        64 | 1024 | 2048 => Color32::WHITE,
        _ => Color32::BLACK,
    }
}

fn tile_font_size(n: u32, tile_size: f32) -> f32 {
    let digits = n.to_string().len() as f32;
    tile_size * 0.5 * (2.0 / digits.max(2.0))
}

pub struct GameFieldPanel {
    game: Game,
    seed: Option<u64>,
    games_started: u64,
}

impl GameFieldPanel {
    pub fn new(game: Game, seed: Option<u64>) -> Self {
        Self {
            game,
            seed,
            games_started: 1,
        }
    }

    fn next_field(&mut self) -> Result<Field, FieldError> {
        let size = self.game.field().size();
        let field = match self.seed {
            Some(seed) => Field::with_seed(size, seed.wrapping_add(self.games_started))?,
            None => Field::new(size)?,
        };
        self.games_started += 1;
        Ok(field)
    }

    fn reset(&mut self) {
        match self.next_field() {
            Ok(field) => {
                self.game.reset(field);
                info!("new game #{}", self.games_started);
            }
            Err(e) => error!("cannot start a new game: {}", e),
        }
    }

    fn swipe(&mut self, side: Side) {
        if let Err(e) = self.game.swipe(side) {
            error!("swipe {:?} failed: {}", side, e);
        }
    }

    fn process_command(&mut self, command: Command, frame: &mut eframe::Frame) {
        match command {
            Command::Swipe(side) => self.swipe(side),
            Command::Reset => self.reset(),
            Command::Quit => frame.close(),
        }
    }

    fn draw_board(&self, ui: &mut egui::Ui) {
        let field = self.game.field();
        let board_size = ui.available_width().min(ui.available_height());
        let (board_rect, _) = ui.allocate_exact_size(egui::vec2(board_size, board_size), Sense::hover());
        let painter = ui.painter_at(board_rect);
        painter.rect_filled(board_rect, 4.0, BOARD_COLOR);

        let n = field.size() as f32;
        let tile_size = ((board_size - TILE_GAP * (n + 1.0)) / n).max(1.0);
        for ((row, col), &value) in field.cells().indexed_iter() {
            let min = board_rect.min
                + egui::vec2(
                    TILE_GAP + col as f32 * (tile_size + TILE_GAP),
                    TILE_GAP + row as f32 * (tile_size + TILE_GAP),
                );
            let rect = Rect::from_min_size(min, egui::vec2(tile_size, tile_size));
            painter.rect_filled(rect, 3.0, tile_color(value));
            if value != 0 {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    value.to_string(),
                    FontId::proportional(tile_font_size(value, tile_size)),
                    tile_font_color(value),
                );
            }
        }
    }

    fn draw_game_over(&mut self, ctx: &egui::Context) {
        let mut restart = false;
        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(format!("No moves left. Best tile: {}", self.game.field().max_tile()));
                restart = ui.button("New game").clicked();
            });
        if restart {
            self.reset();
        }
    }
}

impl eframe::App for GameFieldPanel {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        for command in ctx.input(pressed_commands) {
            self.process_command(command, frame);
        }

        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Best tile: {}", self.game.field().max_tile()));
                if ui.button("New game").clicked() {
                    self.reset();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_board(ui);
        });

        if self.game.is_over() {
            self.draw_game_over(ctx);
        }
    }
}
