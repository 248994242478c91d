use crate::theme::*;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use souq_app_core::{i18n, SouqApplication};
use souq_core::links::whatsapp_link;

const SALES_NUMBER: &str = "+963911000000";

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &SouqApplication) {
    let locale = app.state.locale;
    let t = i18n::strings(locale);

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(16.0),
        align_items: Some(taffy::AlignItems::Center),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.label(
            egui::RichText::new(t.marketing_title)
                .size(20.0)
                .strong()
                .color(COL_HIGHLIGHT),
        );

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(12.0),
            padding: length(24.0),
            size: taffy::Size {
                width: length(520.0),
                height: auto(),
            },
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_PANEL)
                .with_border_color(COL_BORDER)
                .with_border_width(1.0)
                .with_corner_radius(6.0),
            |tui| {
                tui.colored_label(COL_TEXT, t.marketing_description);
                tui.ui(|ui| {
                    ui.hyperlink_to(
                        t.contact_us,
                        whatsapp_link(SALES_NUMBER, Some(t.marketing_title)),
                    )
                });
            },
        );
    });
}
