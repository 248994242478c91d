use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};

// Dark slate palette with a yellow highlight
pub const COL_BG: Color32 = Color32::from_rgb(17, 24, 39);
pub const COL_PANEL: Color32 = Color32::from_rgb(31, 41, 55);
pub const COL_BORDER: Color32 = Color32::from_rgb(55, 65, 81);
pub const COL_TEXT: Color32 = Color32::from_rgb(229, 231, 235);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(156, 163, 175);
pub const COL_HIGHLIGHT: Color32 = Color32::from_rgb(250, 204, 21);
pub const COL_SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const COL_DANGER: Color32 = Color32::from_rgb(239, 68, 68);
pub const COL_INFO: Color32 = Color32::from_rgb(59, 130, 246);

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = COL_PANEL;
    visuals.panel_fill = COL_BG;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.inactive.bg_fill = COL_PANEL;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, COL_TEXT_DIM);

    visuals.widgets.hovered.bg_fill = COL_HIGHLIGHT.linear_multiply(0.15);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_HIGHLIGHT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, COL_HIGHLIGHT);

    visuals.widgets.active.bg_fill = COL_HIGHLIGHT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_BG);

    visuals.selection.bg_fill = COL_HIGHLIGHT.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, COL_HIGHLIGHT);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.visuals.button_frame = true;

    ctx.set_style(style);
}
