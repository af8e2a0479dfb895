use super::view::CardAction;
use super::FileboxApp;
use crate::utils::file_size::format_size;
use eframe::egui::{self, Color32, RichText};

impl FileboxApp {
    pub fn render(&mut self, ctx: &egui::Context) -> Vec<CardAction> {
        let mut actions = Vec::new();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let running = self.reconciler.in_flight().len();
                ui.label(self.state.status_text(self.reconciler.files().len(), running));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(&self.state.backend_label)
                            .color(ui.visuals().text_color().gamma_multiply(0.6)),
                    );
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.heading("📁 File Upload System");
            });
            ui.add_space(16.0);

            ui.group(|ui| {
                ui.vertical_centered(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("📂 Choose file").clicked() {
                            self.choose_file();
                        }
                        match self.reconciler.pending() {
                            Some(file) => {
                                ui.label(format!("{} ({})", file.name, format_size(file.size)));
                            }
                            None => {
                                ui.label(
                                    RichText::new("No file chosen")
                                        .color(ui.visuals().text_color().gamma_multiply(0.6)),
                                );
                            }
                        }
                    });
                    ui.add_space(8.0);
                    let button =
                        egui::Button::new("📤 Upload").min_size(egui::vec2(160.0, 32.0));
                    if ui.add(button).clicked() {
                        self.upload(ctx);
                    }
                });
            });

            if let Some(error) = &self.state.error_message {
                ui.add_space(6.0);
                ui.colored_label(Color32::from_rgb(220, 50, 50), error);
            }

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                ui.heading("Uploaded Files");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("🔄 Refresh").clicked() {
                        self.refresh(ctx);
                    }
                    ui.checkbox(&mut self.state.show_previews, "Previews");
                });
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if self.reconciler.files().is_empty() {
                        ui.add_space(20.0);
                        ui.vertical_centered(|ui| {
                            ui.label("No files uploaded yet");
                        });
                    } else {
                        actions = self.view.show(
                            ui,
                            self.reconciler.files(),
                            self.state.show_previews,
                        );
                    }
                });
        });

        actions
    }
}
