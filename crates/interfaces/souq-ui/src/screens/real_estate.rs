use crate::theme::*;
use crate::utils::{cmd_button, row_direction, section_label};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use souq_app_core::viewmodel::real_estate_vm;
use souq_app_core::{i18n, PageState, SouqApplication};
use souq_core::filter::Selector;
use souq_core::{Currency, Governorate};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut SouqApplication) {
    let locale = app.state.locale;
    let t = i18n::strings(locale);

    let page = match &app.state.page {
        PageState::RealEstate(page) => page.clone(),
        _ => return,
    };
    let vm = real_estate_vm(&page, locale);

    let mut price = page.filter.price_max;
    let mut area = page.filter.area_max;
    let mut floor_sel = page.filter.floor;
    let mut gov_sel = page.filter.governorate;
    let mut currency_pick: Option<Currency> = None;
    let mut reset = false;

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
            egui::RichText::new(i18n::route_name(locale, souq_app_core::Route::RealEstate))
                .size(20.0)
                .strong()
                .color(COL_HIGHLIGHT),
        );

        // Filter panel
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            gap: length(8.0),
            padding: length(12.0),
            size: taffy::Size {
                width: percent(1.),
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
                tui.ui(|ui| section_label(ui, t.filters_title));

                tui.style(taffy::Style {
                    flex_direction: row_direction(locale),
                    flex_wrap: taffy::FlexWrap::Wrap,
                    gap: length(16.0),
                    align_items: Some(taffy::AlignItems::Center),
                    ..Default::default()
                })
                .add(|tui| {
                    tui.ui(|ui| {
                        ui.horizontal(|ui| {
                            for currency in Currency::ALL {
                                let label = match currency {
                                    Currency::Syp => t.syp,
                                    Currency::Usd => t.usd,
                                };
                                let active = page.filter.currency == currency;
                                if ui.selectable_label(active, label).clicked() && !active {
                                    currency_pick = Some(currency);
                                }
                            }
                        });
                    });

                    tui.ui(|ui| {
                        ui.vertical(|ui| {
                            section_label(ui, t.governorate);
                            egui::ComboBox::from_id_salt("re-governorate")
                                .selected_text(match gov_sel {
                                    Selector::All => t.all_governorates,
                                    Selector::Only(g) => i18n::governorate_name(locale, g),
                                })
                                .show_ui(ui, |ui| {
                                    ui.selectable_value(
                                        &mut gov_sel,
                                        Selector::All,
                                        t.all_governorates,
                                    );
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

                    tui.ui(|ui| {
                        ui.vertical(|ui| {
                            section_label(ui, t.price_range);
                            ui.add(
                                egui::Slider::new(&mut price, 0..=page.filter.price_ceiling())
                                    .show_value(false),
                            );
                            ui.label(
                                egui::RichText::new(&vm.price_label)
                                    .size(11.0)
                                    .color(COL_TEXT_DIM),
                            );
                        });
                    });

                    tui.ui(|ui| {
                        ui.vertical(|ui| {
                            section_label(ui, t.area_range);
                            ui.add(
                                egui::Slider::new(&mut area, 0..=page.filter.area_ceiling())
                                    .show_value(false),
                            );
                            ui.label(
                                egui::RichText::new(&vm.area_label)
                                    .size(11.0)
                                    .color(COL_TEXT_DIM),
                            );
                        });
                    });

                    tui.ui(|ui| {
                        ui.vertical(|ui| {
                            section_label(ui, t.floor_number);
                            egui::ComboBox::from_id_salt("re-floor")
                                .selected_text(match floor_sel {
                                    Selector::All => t.all_floors.to_string(),
                                    Selector::Only(0) => t.basement.to_string(),
                                    Selector::Only(n) => n.to_string(),
                                })
                                .show_ui(ui, |ui| {
                                    ui.selectable_value(&mut floor_sel, Selector::All, t.all_floors);
                                    ui.selectable_value(
                                        &mut floor_sel,
                                        Selector::Only(0),
                                        t.basement,
                                    );
                                    for n in 1u8..=8 {
                                        ui.selectable_value(
                                            &mut floor_sel,
                                            Selector::Only(n),
                                            n.to_string(),
                                        );
                                    }
                                });
                        });
                    });

                    if tui
                        .ui(|ui| cmd_button(ui, t.reset_filters, "outline", true))
                        .clicked()
                    {
                        reset = true;
                    }
                });
            },
        );

        // Listing cards
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
                    tui.id(egui_taffy::tid(("property", card.property.id)))
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
                                tui.style(taffy::Style {
                                    flex_direction: row_direction(locale),
                                    justify_content: Some(taffy::JustifyContent::SpaceBetween),
                                    align_items: Some(taffy::AlignItems::Center),
                                    size: taffy::Size {
                                        width: percent(1.),
                                        height: auto(),
                                    },
                                    ..Default::default()
                                })
                                .add(|tui| {
                                    tui.label(
                                        egui::RichText::new(&card.property.title)
                                            .size(15.0)
                                            .strong()
                                            .color(COL_HIGHLIGHT),
                                    );
                                    tui.colored_label(
                                        if card.property.kind == souq_core::PropertyKind::Sale {
                                            COL_DANGER
                                        } else {
                                            COL_INFO
                                        },
                                        card.kind_label,
                                    );
                                });

                                tui.colored_label(COL_TEXT_DIM, &card.property.location);
                                tui.label(
                                    egui::RichText::new(&card.price)
                                        .size(16.0)
                                        .strong()
                                        .color(COL_HIGHLIGHT),
                                );

                                tui.colored_label(
                                    COL_TEXT,
                                    format!(
                                        "{} {} · {} {} · {} m² · {}",
                                        card.property.beds,
                                        t.beds,
                                        card.property.baths,
                                        t.baths,
                                        card.property.area,
                                        card.floor_label,
                                    ),
                                );
                                tui.colored_label(
                                    COL_TEXT_DIM,
                                    format!("{}: {}", t.ownership, card.property.ownership),
                                );

                                tui.separator();
                                tui.ui(|ui| {
                                    ui.horizontal(|ui| {
                                        ui.hyperlink_to(t.view_on_map, &card.property.maps_link);
                                        ui.hyperlink_to(t.call, &card.tel);
                                        ui.hyperlink_to(t.whatsapp, &card.whatsapp);
                                    });
                                });
                            },
                        );
                }
            });
        }
    });

    if let Some(currency) = currency_pick {
        app.set_property_currency(currency);
    } else {
        // The slider and combos write back only when the user moved them.
        if price != page.filter.price_max {
            app.set_property_price_max(price);
        }
        if area != page.filter.area_max {
            app.set_property_area_max(area);
        }
        if floor_sel != page.filter.floor {
            app.set_property_floor(floor_sel);
        }
        if gov_sel != page.filter.governorate {
            app.set_property_governorate(gov_sel);
        }
    }
    if reset {
        app.reset_property_filters();
    }
}
