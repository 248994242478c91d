use crate::theme::*;
use crate::utils::{cmd_button, row_direction};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use souq_app_core::{i18n, Locale, Route};

pub struct HeaderResponse {
    pub selected_route: Option<Route>,
    pub toggle_language: bool,
}

const NAV_ROUTES: [Route; 8] = [
    Route::Home,
    Route::RealEstate,
    Route::Transportation,
    Route::Hotels,
    Route::Tourism,
    Route::Medical,
    Route::Government,
    Route::Marketing,
];

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, locale: Locale, current: Route) -> HeaderResponse {
    let mut resp = HeaderResponse {
        selected_route: None,
        toggle_language: false,
    };
    let t = i18n::strings(locale);

    tui.style(taffy::Style {
        flex_direction: row_direction(locale),
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(8.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_PANEL)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.label(
                egui::RichText::new(t.app_name)
                    .size(18.0)
                    .strong()
                    .color(COL_HIGHLIGHT),
            );

            tui.style(taffy::Style {
                flex_direction: row_direction(locale),
                align_items: Some(taffy::AlignItems::Center),
                gap: length(4.0),
                ..Default::default()
            })
            .add(|tui| {
                for route in NAV_ROUTES {
                    let active = route == current;
                    let label = egui::RichText::new(i18n::route_name(locale, route))
                        .size(13.0)
                        .color(if active { COL_HIGHLIGHT } else { COL_TEXT });
                    let clicked = tui
                        .id(egui_taffy::tid(("nav", i18n::route_name(Locale::En, route))))
                        .ui(|ui| {
                            ui.add(
                                egui::Button::new(label)
                                    .fill(egui::Color32::TRANSPARENT)
                                    .stroke(egui::Stroke::new(
                                        1.0,
                                        if active {
                                            COL_HIGHLIGHT
                                        } else {
                                            egui::Color32::TRANSPARENT
                                        },
                                    )),
                            )
                        })
                        .clicked();
                    if clicked {
                        resp.selected_route = Some(route);
                    }
                }
            });

            tui.style(taffy::Style {
                flex_direction: row_direction(locale),
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                if tui
                    .ui(|ui| cmd_button(ui, t.switch_language, "outline", true))
                    .clicked()
                {
                    resp.toggle_language = true;
                }
                let account_active = current == Route::Account;
                if tui
                    .ui(|ui| {
                        cmd_button(
                            ui,
                            t.nav_account,
                            if account_active { "primary" } else { "outline" },
                            true,
                        )
                    })
                    .clicked()
                {
                    resp.selected_route = Some(Route::Account);
                }
            });
        },
    );

    resp
}
