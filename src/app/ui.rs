use super::{NumberSplitter, RequestState};
use crate::upload::{SpreadsheetFile, SPREADSHEET_EXTENSION};
use crate::utils::color::Palette;
use crate::utils::file_size::format_size;
use eframe::egui::{self, Align2, Color32, RichText};
use rfd::FileDialog;
use std::path::Path;

impl NumberSplitter {
    pub fn render(&mut self, ctx: &egui::Context) {
        self.accept_dropped_files(ctx);

        let blocked = self.state.alert.is_some();

        egui::SidePanel::left("sidebar")
            .exact_width(220.0)
            .resizable(false)
            .frame(
                egui::Frame::none()
                    .fill(Palette::SIDEBAR)
                    .inner_margin(20.0),
            )
            .show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| self.render_sidebar(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(20.0);
                    ui.heading(RichText::new("Number Splitter").size(28.0).strong());
                    ui.add_space(3.0);
                    ui.label(
                        RichText::new("Split NTC, Ncell, and SmartCell spreadsheets.")
                            .color(ui.visuals().text_color().gamma_multiply(0.7)),
                    );
                    ui.add_space(20.0);

                    ui.group(|ui| {
                        self.render_column_input(ui);
                        ui.add_space(16.0);
                        self.render_drop_zone(ui);
                        ui.add_space(16.0);
                        self.render_actions(ui);
                    });

                    if !self.state.message.is_empty() {
                        ui.add_space(16.0);
                        self.render_status(ui);
                    }
                });
            });
        });

        self.render_alert(ctx);
    }

    fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new("⚡ TeleSplit Admin")
                .size(18.0)
                .strong()
                .color(Color32::WHITE),
        );
        ui.add_space(20.0);
        ui.label(
            RichText::new("📊 Excel Splitter")
                .strong()
                .color(Palette::ACCENT),
        );

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
            let button = egui::Button::new(
                RichText::new("⟲ FORCE RESET")
                    .small()
                    .color(Palette::MUTED),
            )
            .frame(false);
            if ui.add(button).clicked() {
                self.reset();
            }
        });
    }

    fn render_column_input(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("📞 EXCEL COLUMN NAME").strong());
        ui.add_space(4.0);

        let mut column = self.state.column_name.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut column)
                .desired_width(320.0)
                .font(egui::TextStyle::Heading),
        );
        if response.changed() {
            self.set_column_name(column);
        }
    }

    fn render_drop_zone(&mut self, ui: &mut egui::Ui) {
        let (stroke_color, fill) = if self.state.file.is_some() {
            (
                Palette::SUCCESS,
                Palette::SUCCESS_BG,
            )
        } else {
            (Palette::MUTED, ui.visuals().extreme_bg_color)
        };

        // Keyed on the picker token so a reset drops any widget memory.
        ui.push_id(self.state.picker_key, |ui| {
            let response = egui::Frame::none()
                .fill(fill)
                .stroke(egui::Stroke::new(2.0, stroke_color))
                .rounding(16.0)
                .inner_margin(40.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| match &self.state.file {
                        Some(file) => {
                            ui.label(RichText::new("✅").size(36.0));
                            ui.label(RichText::new(&file.name).size(20.0).strong());
                            ui.label(format_size(file.size()));
                        }
                        None => {
                            ui.label(RichText::new("☁").size(36.0));
                            ui.label(RichText::new("CLICK TO UPLOAD FILE").size(20.0).strong());
                            ui.label(format!("or drop a .{} file here", SPREADSHEET_EXTENSION));
                        }
                    });
                })
                .response
                .interact(egui::Sense::click());

            if response.clicked() && !self.state.is_processing() {
                if let Some(path) = FileDialog::new()
                    .add_filter("Excel workbook", &[SPREADSHEET_EXTENSION])
                    .pick_file()
                {
                    self.load_file(&path);
                }
            }
        });
    }

    fn render_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let processing = self.state.is_processing();
            let label = if processing {
                "⏳ Processing..."
            } else {
                "📥 Process and Split"
            };
            let submit = egui::Button::new(RichText::new(label).size(18.0).strong())
                .min_size(egui::vec2(260.0, 44.0));

            if ui.add_enabled(!processing, submit).clicked() {
                if let Err(e) = self.submit() {
                    tracing::debug!("submit rejected: {e}");
                }
            }

            let reset = egui::Button::new(RichText::new("⟲ Reset").size(16.0))
                .min_size(egui::vec2(120.0, 44.0));
            if ui.add(reset).clicked() {
                self.reset();
            }
        });
    }

    fn render_status(&mut self, ui: &mut egui::Ui) {
        let is_error = self.state.request == RequestState::Error;
        let icon = if is_error { "⚠" } else { "✅" };
        let (text_color, fill) = Palette::banner(is_error);

        egui::Frame::none()
            .fill(fill)
            .rounding(12.0)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icon).size(22.0).color(text_color));
                    ui.label(
                        RichText::new(&self.state.message)
                            .size(16.0)
                            .strong()
                            .color(text_color),
                    );
                });

                if let Some(path) = &self.state.last_download {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(path.display().to_string()).small());
                        if ui.small_button("📂 Show in folder").clicked() {
                            let dir = path.parent().unwrap_or(self.saver.dir());
                            if let Err(e) = open::that(dir) {
                                tracing::warn!("failed to open download folder: {e}");
                            }
                        }
                    });
                }
            });
    }

    fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.state.alert.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(alert);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.dismiss_alert();
        }
    }

    fn accept_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        match (file.path, file.bytes) {
            (Some(path), _) if SpreadsheetFile::has_spreadsheet_extension(&path) => {
                self.load_file(&path);
            }
            (None, Some(bytes))
                if SpreadsheetFile::has_spreadsheet_extension(Path::new(&file.name)) => {
                self.select_file(SpreadsheetFile::new(file.name, bytes.to_vec()));
            }
            _ => tracing::warn!(name = %file.name, "ignoring dropped file without .xlsx extension"),
        }
    }
}
