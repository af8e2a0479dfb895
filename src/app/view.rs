//! Rendering strategies for the file list.
//!
//! Views only draw; anything that changes state comes back as a
//! [`CardAction`] for the app to handle after the frame's layout is done.

use crate::config::ViewKind;
use crate::display::{classify, DisplayMode, FileIcon};
use crate::registry::FileDescriptor;
use eframe::egui::{self, Color32, RichText};

const CARD_WIDTH: f32 = 180.0;
const PREVIEW_HEIGHT: f32 = 120.0;
const PLAY_LABEL: &str = "▶ Play externally";
const PLAY_HINT: &str = "Opens the video in your system player";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Delete(String),
    Play(String),
}

pub trait FileListView {
    fn show(
        &self,
        ui: &mut egui::Ui,
        files: &[FileDescriptor],
        show_previews: bool,
    ) -> Vec<CardAction>;
}

pub fn for_kind(kind: ViewKind) -> Box<dyn FileListView> {
    match kind {
        ViewKind::Grid => Box::new(CardGrid { allow_delete: true }),
        ViewKind::List => Box::new(CompactList),
    }
}

/// Cards with a preview, download link and delete button.
pub struct CardGrid {
    pub allow_delete: bool,
}

impl FileListView for CardGrid {
    fn show(
        &self,
        ui: &mut egui::Ui,
        files: &[FileDescriptor],
        show_previews: bool,
    ) -> Vec<CardAction> {
        let mut actions = Vec::new();
        let spacing = ui.spacing().item_spacing.x + 16.0;
        let columns = ((ui.available_width() + spacing) / (CARD_WIDTH + spacing))
            .floor()
            .max(1.0) as usize;

        egui::Grid::new("file_grid")
            .spacing([spacing, 12.0])
            .show(ui, |ui| {
                for (index, file) in files.iter().enumerate() {
                    ui.push_id(index, |ui| {
                        ui.group(|ui| {
                            ui.set_width(CARD_WIDTH);
                            ui.vertical_centered(|ui| {
                                show_media(ui, file, show_previews, &mut actions);
                                ui.add_space(6.0);
                                ui.add(egui::Label::new(RichText::new(&file.filename).strong()).wrap(true));
                                ui.add_space(4.0);
                                ui.add(
                                    egui::Hyperlink::from_label_and_url("⬇ Download", &file.url)
                                        .open_in_new_tab(true),
                                );
                                if self.allow_delete {
                                    let delete = egui::Button::new(
                                        RichText::new("🗑 Delete").color(Color32::WHITE),
                                    )
                                    .fill(Color32::from_rgb(220, 50, 50));
                                    if ui.add(delete).clicked() {
                                        actions.push(CardAction::Delete(file.filename.clone()));
                                    }
                                }
                            });
                        });
                    });

                    if (index + 1) % columns == 0 {
                        ui.end_row();
                    }
                }
            });

        actions
    }
}

/// One row per file with an icon and download link; no delete.
pub struct CompactList;

impl FileListView for CompactList {
    fn show(
        &self,
        ui: &mut egui::Ui,
        files: &[FileDescriptor],
        _show_previews: bool,
    ) -> Vec<CardAction> {
        let mut actions = Vec::new();
        for (index, file) in files.iter().enumerate() {
            ui.push_id(index, |ui| {
                ui.horizontal(|ui| {
                    let icon = match classify(&file.filename) {
                        DisplayMode::ImagePreview => FileIcon::Image,
                        DisplayMode::VideoPreview => FileIcon::Video,
                        DisplayMode::Icon(icon) => icon,
                    };
                    ui.label(RichText::new(icon.glyph()).color(icon.color()).size(18.0));
                    ui.label(&file.filename);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add(
                            egui::Hyperlink::from_label_and_url("⬇ Download", &file.url)
                                .open_in_new_tab(true),
                        );
                        if icon == FileIcon::Video
                            && ui.small_button("▶").on_hover_text(PLAY_HINT).clicked()
                        {
                            actions.push(CardAction::Play(file.url.clone()));
                        }
                    });
                });
            });
            ui.separator();
        }
        actions
    }
}

fn show_media(
    ui: &mut egui::Ui,
    file: &FileDescriptor,
    show_previews: bool,
    actions: &mut Vec<CardAction>,
) {
    match classify(&file.filename) {
        DisplayMode::ImagePreview if show_previews => {
            ui.add(
                egui::Image::new(file.url.as_str())
                    .max_width(CARD_WIDTH)
                    .max_height(PREVIEW_HEIGHT)
                    .rounding(4.0),
            );
        }
        DisplayMode::ImagePreview => show_icon(ui, FileIcon::Image),
        DisplayMode::VideoPreview => {
            show_icon(ui, FileIcon::Video);
            if ui.button(PLAY_LABEL).on_hover_text(PLAY_HINT).clicked() {
                actions.push(CardAction::Play(file.url.clone()));
            }
        }
        DisplayMode::Icon(icon) => show_icon(ui, icon),
    }
}

fn show_icon(ui: &mut egui::Ui, icon: FileIcon) {
    ui.allocate_ui(egui::vec2(CARD_WIDTH, PREVIEW_HEIGHT), |ui| {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new(icon.glyph()).size(40.0).color(icon.color()));
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str) -> FileDescriptor {
        FileDescriptor {
            filename: name.to_string(),
            url: format!("http://x/{}", name),
        }
    }

    fn render(view: &dyn FileListView, files: &[FileDescriptor]) -> Vec<CardAction> {
        let ctx = egui::Context::default();
        let mut actions = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                actions = view.show(ui, files, false);
            });
        });
        actions
    }

    #[test]
    fn test_views_render_without_actions_until_clicked() {
        let files = vec![
            descriptor("clip.mp4"),
            descriptor("cat.png"),
            descriptor("report.pdf"),
        ];
        assert!(render(&CardGrid { allow_delete: true }, &files).is_empty());
        assert!(render(&CompactList, &files).is_empty());
    }
}
