//! GUI rendering components for Renamer With Subs
//!
//! This module contains the panels of the main window: the action bar, the
//! pairing table with its row drag-and-drop, the session log and the About
//! window.

use eframe::egui;
use crate::{
    config::{ABOUT_TEXT, APP_NAME, APP_VERSION, EMPTY_TABLE_HINT},
    data_structures::{FileRef, RenameDirection, RenamerApp},
    helper_functions::Utils,
};

use log::{debug, info};

const ROW_HEIGHT: f32 = 20.0;
const ACCENT: egui::Color32 = egui::Color32::from_rgb(189, 147, 249);
const SUCCESS: egui::Color32 = egui::Color32::from_rgb(80, 250, 123);
const WARNING: egui::Color32 = egui::Color32::from_rgb(255, 184, 108);
const FAILURE: egui::Color32 = egui::Color32::from_rgb(255, 85, 85);

impl RenamerApp {
    /// Render the row of action buttons and the status line
    pub fn render_action_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            if ui.button("📂 Import").clicked() {
                info!("User opened the import dialog");
                self.import_with_dialog();
            }
            if ui.button("🗑 Clear table").clicked() {
                self.clear_table();
            }
            ui.separator();

            let rename_videos = ui.add_enabled(self.has_pairs(), egui::Button::new("▶ Rename video clips"))
                .on_hover_text("Rename video clips files with the same name as their corresponding subtitles.");
            if rename_videos.clicked() {
                self.rename(RenameDirection::Videos);
            }
            let rename_subs = ui.add_enabled(self.has_pairs(), egui::Button::new("▶ Rename subtitles"))
                .on_hover_text("Rename subtitles files with the same name as their corresponding videos.");
            if rename_subs.clicked() {
                self.rename(RenameDirection::Subtitles);
            }
            let undo = ui.add_enabled(self.can_undo(), egui::Button::new("↩ Undo last rename"))
                .on_hover_text("Move the files of the last rename back to their previous names.");
            if undo.clicked() {
                self.undo_last_rename();
            }
            ui.separator();

            if ui.checkbox(&mut self.settings.show_full_paths, "Show full paths").changed() {
                debug!("(Show full paths) changed to: {}", self.settings.show_full_paths);
                self.save_current_settings();
            }
            if ui.button("ℹ About").clicked() {
                self.show_about = true;
            }
        });
        ui.label(egui::RichText::new(self.get_status()).small());
    }

    fn file_cell(&self, file: &FileRef, max_chars: usize) -> egui::RichText {
        if file.is_placeholder() {
            egui::RichText::new("(none)").weak().italics()
        } else {
            egui::RichText::new(Utils::truncate_string(&self.display_name(file), max_chars))
        }
    }

    /// Render the pairing table. A subtitle cell can be dragged onto another
    /// row to swap the two subtitles.
    pub fn render_table(&mut self, ui: &mut egui::Ui) {
        let pairs = self.session.snapshot();
        if pairs.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new(EMPTY_TABLE_HINT).weak());
            });
            return;
        }

        let column_width = ((ui.available_width() - 24.0) / 2.0).max(100.0);
        // Rough fit of characters into a column at the body font size
        let max_chars = (column_width / 7.0) as usize;

        ui.horizontal(|ui| {
            ui.add_sized([column_width, ROW_HEIGHT], egui::Label::new(egui::RichText::new("Video clips").strong()));
            ui.add_sized([column_width, ROW_HEIGHT], egui::Label::new(egui::RichText::new("Subtitles").strong()));
        });
        ui.separator();

        let mut swap = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (row, pair) in pairs.iter().enumerate() {
                    let row_response = ui.horizontal(|ui| {
                        ui.add_sized([column_width, ROW_HEIGHT], egui::Label::new(self.file_cell(pair.video(), max_chars)));
                        let cell = self.file_cell(pair.subtitle(), max_chars);
                        ui.dnd_drag_source(egui::Id::new(("subtitle_cell", row)), row, |ui| {
                            ui.add_sized([column_width, ROW_HEIGHT], egui::Label::new(cell));
                        })
                        .response
                        .on_hover_cursor(egui::CursorIcon::Grab);
                    })
                    .response;

                    if row_response.dnd_hover_payload::<usize>().is_some() {
                        ui.painter().rect_stroke(row_response.rect, 2.0, egui::Stroke::new(1.5, ACCENT));
                    }
                    if let Some(from) = row_response.dnd_release_payload::<usize>() {
                        if *from != row {
                            swap = Some((*from, row));
                        }
                    }
                }
            });

        if let Some((from, to)) = swap {
            debug!("Subtitle dragged from row {} to row {}", from, to);
            self.swap_rows(from, to);
        }
    }

    /// Render the append-only session log
    pub fn render_log(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for line in self.session.log_lines() {
                    let text = egui::RichText::new(line).monospace();
                    let text = if line.starts_with("Renamed") || line.starts_with("Restored") {
                        text.color(SUCCESS)
                    } else if line.starts_with("Skipped") {
                        text.color(WARNING)
                    } else if line.starts_with("Impossible") {
                        text.color(FAILURE)
                    } else {
                        text
                    };
                    ui.label(text);
                }
            });
    }

    /// Render the About window when it is open
    pub fn render_about(&mut self, ctx: &egui::Context) {
        let mut open = self.show_about;
        egui::Window::new("About")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(format!("{} v{}", APP_NAME, APP_VERSION)).color(ACCENT).heading());
                    ui.label(ABOUT_TEXT);
                    ui.hyperlink_to(
                        "Icons made by Google from www.flaticon.com (CC BY 3.0)",
                        "http://www.flaticon.com",
                    );
                });
            });
        self.show_about = open;
    }

    /// Dim the window while files are dragged over it
    pub fn render_drop_overlay(&self, ctx: &egui::Context) {
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
        if !hovering {
            return;
        }
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("file_drop_target"),
        ));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(160));
        painter.text(
            screen_rect.center(),
            egui::Align2::CENTER_CENTER,
            "Drop video clips and subtitles to import them",
            egui::TextStyle::Heading.resolve(&ctx.style()),
            egui::Color32::WHITE,
        );
    }
}

impl eframe::App for RenamerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        egui::TopBottomPanel::top("actions").show(ctx, |ui| {
            ui.add_space(5.0);
            self.render_action_bar(ui);
            ui.add_space(3.0);
        });

        egui::TopBottomPanel::bottom("log")
            .resizable(true)
            .default_height(160.0)
            .min_height(60.0)
            .show(ctx, |ui| {
                ui.add_space(3.0);
                self.render_log(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_table(ui);
        });

        self.render_about(ctx);
        self.render_drop_overlay(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application closed by user");
        info!("---------------------------------------------------------------");
    }
}
