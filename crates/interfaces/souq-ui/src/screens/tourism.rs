use crate::theme::*;
use crate::utils::{cmd_button, row_direction, section_label};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use souq_app_core::viewmodel::{agencies_vm, tourism_vm};
use souq_app_core::{i18n, PageState, SouqApplication};
use souq_core::filter::Selector;
use souq_core::{Governorate, ListingId};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut SouqApplication) {
    let locale = app.state.locale;
    let t = i18n::strings(locale);

    let page = match &app.state.page {
        PageState::Tourism(page) => page.clone(),
        _ => return,
    };
    let vm = tourism_vm(&page, locale);

    let mut gov_sel = page.filter.governorate;
    let mut plan_trip: Option<ListingId> = None;
    let mut image_step: Option<(ListingId, i64)> = None;

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
            egui::RichText::new(i18n::route_name(locale, souq_app_core::Route::Tourism))
                .size(20.0)
                .strong()
                .color(COL_HIGHLIGHT),
        );

        tui.ui(|ui| {
            ui.vertical(|ui| {
                section_label(ui, t.governorate);
                egui::ComboBox::from_id_salt("tourism-governorate")
                    .selected_text(match gov_sel {
                        Selector::All => t.all_governorates,
                        Selector::Only(g) => i18n::governorate_name(locale, g),
                    })
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut gov_sel, Selector::All, t.all_governorates);
                        for g in Governorate::ALL {
                            ui.selectable_value(
                                &mut gov_sel,
                                Selector::Only(g),
                                i18n::governorate_name(locale, g),
                            );
                        }
                    });
            });
        });

        if let Some(message) = vm.empty_message {
            tui.style(taffy::Style {
                flex_grow: 1.0,
                justify_content: Some(taffy::JustifyContent::Center),
                align_items: Some(taffy::AlignItems::Center),
                padding: length(32.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.colored_label(COL_TEXT_DIM, message);
            });
        } else {
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
                for card in &vm.cards {
                    tui.id(egui_taffy::tid(("site", card.site.id)))
                        .style(taffy::Style {
                            flex_direction: taffy::FlexDirection::Column,
                            gap: length(6.0),
                            padding: length(12.0),
                            size: taffy::Size {
                                width: length(360.0),
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
                                    egui::RichText::new(&card.site.name)
                                        .size(15.0)
                                        .strong()
                                        .color(COL_HIGHLIGHT),
                                );
                                tui.colored_label(
                                    COL_TEXT_DIM,
                                    format!("{} · {}", card.site.location, card.governorate_label),
                                );

                                // Photo carousel, counter plus step buttons
                                tui.style(taffy::Style {
                                    flex_direction: row_direction(locale),
                                    align_items: Some(taffy::AlignItems::Center),
                                    gap: length(8.0),
                                    ..Default::default()
                                })
                                .add(|tui| {
                                    if tui
                                        .id(egui_taffy::tid(("site-prev", card.site.id)))
                                        .ui(|ui| ui.button("‹"))
                                        .clicked()
                                    {
                                        image_step = Some((card.site.id, -1));
                                    }
                                    tui.colored_label(COL_TEXT_DIM, &card.image_position);
                                    tui.label(
                                        egui::RichText::new(card.current_image)
                                            .size(10.0)
                                            .monospace()
                                            .color(COL_TEXT_DIM),
                                    );
                                    if tui
                                        .id(egui_taffy::tid(("site-next", card.site.id)))
                                        .ui(|ui| ui.button("›"))
                                        .clicked()
                                    {
                                        image_step = Some((card.site.id, 1));
                                    }
                                });

                                tui.colored_label(COL_TEXT, &card.site.description);

                                tui.ui(|ui| {
                                    ui.horizontal(|ui| {
                                        ui.hyperlink_to(t.view_on_map, &card.site.maps_link);
                                        if cmd_button(ui, t.plan_trip, "primary", true).clicked() {
                                            plan_trip = Some(card.site.id);
                                        }
                                    });
                                });
                            },
                        );
                }
            });
        }
    });

    if gov_sel != page.filter.governorate {
        app.set_site_governorate(gov_sel);
    }
    if let Some((id, delta)) = image_step {
        app.step_site_image(id, delta);
    }
    if let Some(id) = plan_trip {
        app.open_trip_agencies(id);
    }
}

pub fn draw_agency_dialog(ctx: &egui::Context, app: &mut SouqApplication) {
    let locale = app.state.locale;
    let t = i18n::strings(locale);

    let (site_name, agencies) = match &app.state.page {
        PageState::Tourism(page) => match page.trip_site {
            Some(site_id) => {
                let Some(site) = page.catalog.iter().find(|s| s.id == site_id) else {
                    return;
                };
                (site.name.clone(), page.agencies.clone())
            }
            None => return,
        },
        _ => return,
    };

    let mut open = true;
    egui::Window::new(format!("{} {}", t.agencies_title, site_name))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            for vm in agencies_vm(&agencies) {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&vm.agency.name)
                            .size(14.0)
                            .strong()
                            .color(COL_TEXT),
                    );
                    ui.hyperlink_to(t.call, &vm.tel);
                    ui.hyperlink_to(t.whatsapp, &vm.whatsapp);
                });
                ui.separator();
            }
        });

    if !open {
        app.close_trip_agencies();
    }
}
