use crate::theme::*;
use crate::utils::row_direction;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use souq_app_core::viewmodel::transportation_vm;
use souq_app_core::{i18n, PageState, SouqApplication};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &SouqApplication) {
    let locale = app.state.locale;
    let t = i18n::strings(locale);

    let page = match &app.state.page {
        PageState::Transportation(page) => page,
        _ => return,
    };
    let cards = transportation_vm(page, locale);

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(12.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.label(
            egui::RichText::new(i18n::route_name(locale, souq_app_core::Route::Transportation))
                .size(20.0)
                .strong()
                .color(COL_HIGHLIGHT),
        );

        tui.style(taffy::Style {
            flex_direction: row_direction(locale),
            flex_wrap: taffy::FlexWrap::Wrap,
            gap: length(12.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            for card in &cards {
                tui.id(egui_taffy::tid(("shipment", card.shipment.id)))
                    .style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        gap: length(6.0),
                        padding: length(12.0),
                        size: taffy::Size {
                            width: length(330.0),
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
                            tui.label(
                                egui::RichText::new(&card.shipment.company_name)
                                    .size(15.0)
                                    .strong()
                                    .color(COL_HIGHLIGHT),
                            );
                            tui.colored_label(
                                COL_TEXT,
                                format!("{}: {}", t.cargo_type, card.shipment.cargo_type),
                            );
                            tui.colored_label(
                                COL_TEXT,
                                format!("{}: {}", t.truck_size, card.size_label),
                            );
                            tui.colored_label(
                                COL_TEXT_DIM,
                                format!(
                                    "{} {} → {} {}",
                                    t.route_from,
                                    card.shipment.origin,
                                    t.route_to,
                                    card.shipment.destination,
                                ),
                            );
                            tui.label(
                                egui::RichText::new(&card.price)
                                    .size(16.0)
                                    .strong()
                                    .color(COL_HIGHLIGHT),
                            );
                        },
                    );
            }
        });
    });
}
