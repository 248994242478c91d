use crate::theme::*;
use crate::utils::row_direction;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use souq_app_core::{i18n, Route, SouqApplication};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut SouqApplication) {
    let locale = app.state.locale;
    let t = i18n::strings(locale);

    let cards: [(Route, &str); 7] = [
        (Route::RealEstate, t.desc_real_estate),
        (Route::Transportation, t.desc_transportation),
        (Route::Hotels, t.desc_hotels),
        (Route::Tourism, t.desc_tourism),
        (Route::Medical, t.desc_medical),
        (Route::Government, t.desc_government),
        (Route::Marketing, t.desc_marketing),
    ];

    let mut selected: Option<Route> = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(16.0),
        align_items: Some(taffy::AlignItems::Center),
        size: taffy::Size {
            width: percent(1.),
            height: taffy::prelude::auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.label(
            egui::RichText::new(t.app_name)
                .size(26.0)
                .strong()
                .color(COL_HIGHLIGHT),
        );
        tui.label(egui::RichText::new(t.tagline).size(16.0).color(COL_TEXT_DIM));

        tui.style(taffy::Style {
            flex_direction: row_direction(locale),
            flex_wrap: taffy::FlexWrap::Wrap,
            justify_content: Some(taffy::JustifyContent::Center),
            gap: length(12.0),
            size: taffy::Size {
                width: percent(1.),
                height: taffy::prelude::auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            for (route, description) in cards {
                let response = tui
                    .id(egui_taffy::tid(("home", i18n::route_name(souq_app_core::Locale::En, route))))
                    .style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        align_items: Some(taffy::AlignItems::Center),
                        gap: length(6.0),
                        padding: length(16.0),
                        size: taffy::Size {
                            width: length(300.0),
                            height: length(110.0),
                        },
                        ..Default::default()
                    })
                    .bg_clickable(
                        TuiBackground::new()
                            .with_background_color(COL_PANEL)
                            .with_border_color(COL_BORDER)
                            .with_border_width(1.0)
                            .with_corner_radius(6.0),
                        |tui| {
                            tui.label(
                                egui::RichText::new(i18n::route_name(locale, route))
                                    .size(16.0)
                                    .strong()
                                    .color(COL_HIGHLIGHT),
                            );
                            tui.label(
                                egui::RichText::new(description)
                                    .size(12.0)
                                    .color(COL_TEXT_DIM),
                            );
                        },
                    );
                if response.clicked() {
                    selected = Some(route);
                }
            }
        });
    });

    if let Some(route) = selected {
        app.navigate(route);
    }
}
