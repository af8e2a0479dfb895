//! How a stored file is shown on its card.
//!
//! Classification only looks at the file name, so it is cheap enough to
//! recompute on every frame.

use crate::utils::color::ColorExt;
use eframe::egui::Color32;

const PREVIEW_IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];
const PREVIEW_VIDEO_EXTENSIONS: [&str; 2] = ["mp4", "webm"];

const ICON_IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];
const ICON_VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "webm", "avi", "mov"];
const ICON_PDF_EXTENSIONS: [&str; 1] = ["pdf"];
const ICON_ARCHIVE_EXTENSIONS: [&str; 3] = ["zip", "rar", "7z"];
const ICON_DOCUMENT_EXTENSIONS: [&str; 3] = ["txt", "doc", "docx"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    ImagePreview,
    VideoPreview,
    Icon(FileIcon),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIcon {
    Image,
    Video,
    Pdf,
    Archive,
    Document,
    Generic,
}

impl FileIcon {
    pub fn for_extension(ext: &str) -> Self {
        if ICON_IMAGE_EXTENSIONS.contains(&ext) {
            Self::Image
        } else if ICON_VIDEO_EXTENSIONS.contains(&ext) {
            Self::Video
        } else if ICON_PDF_EXTENSIONS.contains(&ext) {
            Self::Pdf
        } else if ICON_ARCHIVE_EXTENSIONS.contains(&ext) {
            Self::Archive
        } else if ICON_DOCUMENT_EXTENSIONS.contains(&ext) {
            Self::Document
        } else {
            Self::Generic
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Image => "🖼",
            Self::Video => "🎞",
            Self::Pdf => "📕",
            Self::Archive => "📦",
            Self::Document => "📄",
            Self::Generic => "📁",
        }
    }

    pub fn color(self) -> Color32 {
        let hex = match self {
            Self::Image => "#4caf50",
            Self::Video => "#2196f3",
            Self::Pdf => "#f44336",
            Self::Archive => "#9c27b0",
            Self::Document => "#607d8b",
            Self::Generic => "#000000",
        };
        <Color32 as ColorExt>::from_hex(hex).unwrap_or(Color32::BLACK)
    }
}

/// Lowercased text after the last dot, or the whole name if there is none.
pub fn extension(filename: &str) -> String {
    filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

pub fn classify(filename: &str) -> DisplayMode {
    let ext = extension(filename);
    if PREVIEW_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        DisplayMode::ImagePreview
    } else if PREVIEW_VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        DisplayMode::VideoPreview
    } else {
        DisplayMode::Icon(FileIcon::for_extension(&ext))
    }
}
