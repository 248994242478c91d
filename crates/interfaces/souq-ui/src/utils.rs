use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;
use egui_taffy::taffy;
use souq_app_core::Locale;

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(12.0)
            .color(COL_TEXT_DIM)
            .strong(),
    );
}

pub fn cmd_button(ui: &mut egui::Ui, label: &str, variant: &str, enabled: bool) -> egui::Response {
    let (fill, stroke_col, text_col) = match variant {
        "primary" => (COL_HIGHLIGHT, COL_HIGHLIGHT, COL_BG),
        "danger" => (Color32::TRANSPARENT, COL_DANGER, COL_DANGER),
        "success" => (COL_SUCCESS, COL_SUCCESS, COL_BG),
        _ => (Color32::TRANSPARENT, COL_HIGHLIGHT, COL_HIGHLIGHT),
    };

    let text = egui::RichText::new(label)
        .size(13.0)
        .color(if enabled { text_col } else { COL_TEXT_DIM });

    let btn = egui::Button::new(text)
        .min_size(egui::vec2(90.0, 26.0))
        .fill(if enabled && matches!(variant, "primary" | "success") {
            fill
        } else {
            Color32::TRANSPARENT
        })
        .stroke(egui::Stroke::new(
            1.0,
            if enabled { stroke_col } else { COL_BORDER },
        ));

    ui.add_enabled(enabled, btn)
}

/// Row direction for the active locale. Arabic lays rows out right to left.
pub fn row_direction(locale: Locale) -> taffy::FlexDirection {
    if locale.is_rtl() {
        taffy::FlexDirection::RowReverse
    } else {
        taffy::FlexDirection::Row
    }
}
