//! Top-level GUI elements and functionality.

pub mod colors;
pub mod prompt;
pub mod transforms;

use crate::grid::{SketchGrid, BOARD_SIDE_PX, DEFAULT_GRID_SIDE};
use crate::gui::colors::{cell_fill, BOARD_COLOR, GRID_LINE_COLOR};
use crate::gui::prompt::{parse_size, SizePrompt, SizeRequest, CLAMPED_SIZE_MESSAGE};
use crate::gui::transforms::Transform;
use eframe::egui;
use eframe::egui::{Align, Align2, Key, Painter, Pos2, Rounding, Stroke, Visuals};
use log::info;
use rand::rngs::ThreadRng;

/// Launches the GUI application. Blocks until the application has quit.
pub fn run_gui() -> eframe::Result {
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Etch Grid",
        native_options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}

/// What the user did with the size prompt this frame.
enum PromptAction {
    KeepOpen,
    Cancel,
    Submit,
}

/// Stores all the data needed for the application.
struct App {
    grid: SketchGrid,
    rng: ThreadRng,
    /// Cell index currently under the pointer, if any.
    hovered: Option<usize>,
    pointer_pos: Option<Pos2>,
    world_to_screen: Transform,
    size_prompt: Option<SizePrompt>,
    notice: Option<String>,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pointer_pos = ctx.pointer_latest_pos();
        self.draw_layout(ctx);
        self.draw_dialogs(ctx);
    }
}

impl App {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx
            .style_mut(|style| style.visuals = Visuals::dark());

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self {
            grid: SketchGrid::new(DEFAULT_GRID_SIDE),
            rng: ThreadRng::default(),
            hovered: None,
            pointer_pos: None,
            world_to_screen: Transform::new_letterboxed(
                Pos2::new(0.0, 0.0),
                Pos2::new(0.0, 1.0),
                Pos2::new(0.0, 0.0),
                Pos2::new(0.0, 1.0),
            ),
            size_prompt: None,
            notice: None,
        }
    }

    /// Draw the main outer layout.
    fn draw_layout(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::left_to_right(Align::Center), |ui| {
                    let button = ui.button(format!(
                        "{} New Grid",
                        egui_phosphor::regular::GRID_FOUR
                    ));
                    if button.clicked() && self.size_prompt.is_none() && self.notice.is_none() {
                        self.size_prompt = Some(SizePrompt::default());
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    ui.label(match self.hovered {
                        None => "".to_string(),
                        Some(index) => {
                            let side = self.grid.side();
                            format!("({}, {})", index / side, index % side)
                        }
                    });
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let canvas = ui.max_rect();
            self.world_to_screen = Transform::new_letterboxed(
                Pos2::new(0.0, 0.0),
                Pos2::new(BOARD_SIDE_PX, BOARD_SIDE_PX),
                canvas.min,
                canvas.max,
            );
            self.process_hover();
            self.draw_board(ui.painter());
        });
    }

    /// Fires the hover state machine when the pointer crosses into a different cell.
    fn process_hover(&mut self) {
        // an open dialog takes the pointer; the board underneath stays frozen
        if self.size_prompt.is_some() || self.notice.is_some() {
            self.hovered = None;
            return;
        }
        let entered = self.pointer_pos.and_then(|pos| self.cell_under(pos));
        if entered != self.hovered {
            self.hovered = entered;
            if let Some(index) = entered {
                self.grid.hover_enter(index, &mut self.rng);
            }
        }
    }

    /// Maps a screen position to the row-major index of the cell below it.
    fn cell_under(&self, pointer: Pos2) -> Option<usize> {
        let side = self.grid.side();
        if side == 0 {
            return None;
        }
        let world = self.world_to_screen.inverse().map_point(pointer);
        if world.x < 0.0 || world.y < 0.0 || world.x >= BOARD_SIDE_PX || world.y >= BOARD_SIDE_PX {
            return None;
        }
        let col = ((world.x / self.grid.cell_edge()) as usize).min(side - 1);
        let row = ((world.y / self.grid.cell_edge()) as usize).min(side - 1);
        Some(row * side + col)
    }

    /// Paints the board background, the colored cells, and the cell boundaries.
    fn draw_board(&self, painter: &Painter) {
        let wts = self.world_to_screen;
        let side = self.grid.side();
        let edge = self.grid.cell_edge();

        let board = wts.map_rect(
            Pos2::new(0.0, 0.0),
            Pos2::new(BOARD_SIDE_PX, BOARD_SIDE_PX),
        );
        painter.rect(
            board,
            Rounding::ZERO,
            BOARD_COLOR,
            Stroke::new(1.0, GRID_LINE_COLOR),
        );

        for row in 0..side {
            for col in 0..side {
                if let Some(color) = self.grid.cell_at(row, col) {
                    painter.rect_filled(
                        wts.map_rect(
                            Pos2::new(col as f32 * edge, row as f32 * edge),
                            Pos2::new((col + 1) as f32 * edge, (row + 1) as f32 * edge),
                        ),
                        Rounding::ZERO,
                        cell_fill(&color),
                    );
                }
            }
        }

        // cell boundaries
        for i in 1..side {
            let offset = i as f32 * edge;
            painter.line_segment(
                [
                    wts.map_point(Pos2::new(offset, 0.0)),
                    wts.map_point(Pos2::new(offset, BOARD_SIDE_PX)),
                ],
                Stroke::new(1.0, GRID_LINE_COLOR),
            );
            painter.line_segment(
                [
                    wts.map_point(Pos2::new(0.0, offset)),
                    wts.map_point(Pos2::new(BOARD_SIDE_PX, offset)),
                ],
                Stroke::new(1.0, GRID_LINE_COLOR),
            );
        }
    }

    /// Draw the notice and size prompt windows, applying whatever the user chose.
    fn draw_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.notice.clone() {
            let mut dismissed = false;
            egui::Window::new("Notice")
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("OK").clicked()
                        || ctx.input(|i| i.key_pressed(Key::Enter) || i.key_pressed(Key::Escape))
                    {
                        dismissed = true;
                    }
                });
            if dismissed {
                self.notice = None;
            }
            // the notice replaces the prompt until acknowledged
            return;
        }

        if self.size_prompt.is_none() {
            return;
        }
        let mut action = PromptAction::KeepOpen;
        if let Some(prompt) = &mut self.size_prompt {
            egui::Window::new("New Grid")
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label("Enter new grid size (max 100):");
                    let response = ui.text_edit_singleline(&mut prompt.buffer);
                    if response.lost_focus() && ctx.input(|i| i.key_pressed(Key::Enter)) {
                        action = PromptAction::Submit;
                    }
                    ui.horizontal(|ui| {
                        if ui.button("OK").clicked() {
                            action = PromptAction::Submit;
                        }
                        if ui.button("Cancel").clicked()
                            || ctx.input(|i| i.key_pressed(Key::Escape))
                        {
                            action = PromptAction::Cancel;
                        }
                    });
                });
        }

        match action {
            PromptAction::KeepOpen => {}
            PromptAction::Cancel => self.size_prompt = None,
            PromptAction::Submit => {
                let input = self
                    .size_prompt
                    .take()
                    .map(|prompt| prompt.buffer)
                    .unwrap_or_default();
                self.apply_size_request(&input);
            }
        }
    }

    /// Rebuilds the board from prompt text, surfacing a notice for bad input.
    fn apply_size_request(&mut self, input: &str) {
        match parse_size(input) {
            Err(e) => self.notice = Some(e.to_string()),
            Ok(request) => {
                if let SizeRequest::Clamped(_) = request {
                    self.notice = Some(CLAMPED_SIZE_MESSAGE.to_string());
                }
                self.rebuild(request.side());
            }
        }
    }

    fn rebuild(&mut self, side: usize) {
        info!("building {side}x{side} grid");
        self.grid.rebuild(side);
        self.hovered = None;
    }
}
