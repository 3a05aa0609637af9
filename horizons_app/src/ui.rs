// ui.rs - Controls, history slider and board painting

use std::time::Duration;

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use horizons_engine::config::CELL_SIZE;

use crate::HorizonsApp;

const MAJOR_GRID_EVERY: usize = 10;  // Heavier line every ten cells

impl eframe::App for HorizonsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Run the generation that came due since the last frame, if any
        self.sim.pump_ticks();
        if let Some(notice) = self.sim.take_notice() {
            self.notice = Some(notice);
        }

        // Arrow keys scrub history
        let (left, right) = ctx.input(|i| {
            (i.key_pressed(egui::Key::ArrowLeft), i.key_pressed(egui::Key::ArrowRight))
        });
        if left {
            self.sim.move_backward();
        }
        if right {
            self.sim.move_forward();
        }

        egui::SidePanel::left("controls")
            .resizable(false)
            .min_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Cellular Horizons");
                ui.separator();
                self.controls(ui);
                ui.separator();
                self.history_slider(ui);
                ui.separator();
                self.pattern_list(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.board_view(ui);
            ui.separator();
            self.statistics(ui);
        });

        self.notice_window(ctx);

        // Keep ticking while playing
        if self.sim.is_playing() {
            ctx.request_repaint_after(self.sim.tick_interval());
        }
    }
}

impl HorizonsApp {
    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Reset Board").clicked() {
                self.sim.reset_board();
            }
            if ui.button("Reset All").clicked() {
                self.sim.reset_all();
            }
        });

        ui.horizontal(|ui| {
            let playing = self.sim.is_playing();
            let button_text = if playing { "⏸ Pause" } else { "▶ Play" };
            let enabled = playing || self.sim.has_live_cells();
            if ui.add_enabled(enabled, egui::Button::new(button_text)).clicked() {
                self.sim.set_playing(!playing);
            }
        });

        // Speed control
        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = 1000.0 / self.sim.tick_interval().as_millis().max(1) as f32;
            if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                self.sim.set_tick_interval(Duration::from_millis((1000.0 / speed) as u64));
            }
        });

        ui.horizontal(|ui| {
            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
        });
    }

    fn history_slider(&mut self, ui: &mut egui::Ui) {
        let len = self.sim.history_len();
        ui.label(format!(
            "History: {} / {}",
            self.sim.current_index().map_or(0, |i| i + 1),
            len
        ));

        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.sim.can_move_backward(), egui::Button::new("Previous"))
                .clicked()
            {
                self.sim.move_backward();
            }

            let mut index = self.sim.current_index().unwrap_or(0);
            let max = len.saturating_sub(1);
            let slider = egui::Slider::new(&mut index, 0..=max).show_value(false);
            if ui.add_enabled(len > 1, slider).changed() {
                self.sim.move_to_index(index);
            }

            // Replays recorded history first, then computes new generations
            if ui.button("Next").clicked() {
                self.sim.step_forward();
            }
        });
    }

    fn pattern_list(&mut self, ui: &mut egui::Ui) {
        ui.label("Patterns");
        let selected = self.sim.selected_pattern().map(|p| p.name.clone());

        if ui.button("Clear Pattern").clicked() {
            self.sim.set_selected_pattern(None);
        }

        let mut chosen = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (i, pattern) in self.patterns.iter().enumerate() {
                let is_selected = selected.as_deref() == Some(pattern.name.as_str());
                if ui.selectable_label(is_selected, pattern.name.as_str()).clicked() {
                    chosen = Some(i);
                }
            }
        });

        // Selecting a pattern drops it in the middle and keeps it for click-stamping
        if let Some(pattern) = chosen.and_then(|i| self.patterns.get(i)).cloned() {
            self.sim.apply_pattern(&pattern);
            self.sim.set_selected_pattern(Some(pattern));
        }
    }

    fn board_view(&mut self, ui: &mut egui::Ui) {
        let board = self.sim.board();
        let cell = CELL_SIZE as f32;
        let total_size = Vec2::new(board.cols() as f32 * cell, board.rows() as f32 * cell);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        // Fill background
        painter.rect_filled(Rect::from_min_size(origin, total_size), 0.0, Color32::BLACK);

        let [r, g, b] = self.shadow_rgb;
        for (row, col, state) in board.iter() {
            let rect = Rect::from_min_size(
                egui::pos2(origin.x + col as f32 * cell, origin.y + row as f32 * cell),
                Vec2::splat(cell),
            );

            // Afterglow first, live cells on top
            if state.shadow > 0.0 {
                let alpha = (state.shadow * 255.0).round() as u8;
                painter.rect_filled(rect, 0.0, Color32::from_rgba_unmultiplied(r, g, b, alpha));
            }
            if state.alive {
                painter.rect_filled(rect, 0.0, self.live_color);
            }
        }

        // Grid lines
        let minor = Stroke::new(0.3, Color32::from_gray(60));
        let major = Stroke::new(0.8, Color32::from_rgb(120, 110, 40));
        for row in 0..=board.rows() {
            let y = origin.y + row as f32 * cell;
            let stroke = if row % MAJOR_GRID_EVERY == 0 { major } else { minor };
            painter.line_segment([Pos2::new(origin.x, y), Pos2::new(origin.x + total_size.x, y)], stroke);
        }
        for col in 0..=board.cols() {
            let x = origin.x + col as f32 * cell;
            let stroke = if col % MAJOR_GRID_EVERY == 0 { major } else { minor };
            painter.line_segment([Pos2::new(x, origin.y), Pos2::new(x, origin.y + total_size.y)], stroke);
        }

        // Handle clicking
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - origin;
                if offset.x >= 0.0 && offset.y >= 0.0 {
                    let row = (offset.y / cell) as usize;
                    let col = (offset.x / cell) as usize;
                    self.sim.toggle_cell(row, col);
                }
            }
        }
    }

    fn statistics(&self, ui: &mut egui::Ui) {
        let board = self.sim.board();
        let total = board.rows() * board.cols();
        let live = board.live_count();

        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", self.sim.generation()));
            ui.separator();
            ui.label(format!("Live cells: {}", live));
            ui.label(format!("Dead cells: {}", total - live));
            ui.label(format!("Population: {:.1}%", (live as f32 / total as f32) * 100.0));
        });
    }

    fn notice_window(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.notice else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Simulation stopped")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(notice.to_string());
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.notice = None;
        }
    }
}
