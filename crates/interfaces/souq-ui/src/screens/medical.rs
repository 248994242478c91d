use crate::theme::*;
use crate::utils::{cmd_button, row_direction, section_label};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use souq_app_core::viewmodel::medical_vm;
use souq_app_core::{i18n, PageState, SouqApplication};
use souq_core::filter::Selector;
use souq_core::{Governorate, ListingId, Specialty};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut SouqApplication) {
    let locale = app.state.locale;
    let t = i18n::strings(locale);

    let page = match &app.state.page {
        PageState::Medical(page) => page.clone(),
        _ => return,
    };
    let vm = medical_vm(&page, locale);

    let mut specialty_sel = page.filter.specialty;
    let mut gov_sel = page.filter.governorate;
    let mut book: Option<ListingId> = None;
    let mut confirm = false;

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
            egui::RichText::new(i18n::route_name(locale, souq_app_core::Route::Medical))
                .size(20.0)
                .strong()
                .color(COL_HIGHLIGHT),
        );

        tui.style(taffy::Style {
            flex_direction: row_direction(locale),
            gap: length(16.0),
            align_items: Some(taffy::AlignItems::Center),
            ..Default::default()
        })
        .add(|tui| {
            tui.ui(|ui| {
                ui.vertical(|ui| {
                    section_label(ui, t.specialty);
                    egui::ComboBox::from_id_salt("medical-specialty")
                        .selected_text(match specialty_sel {
                            Selector::All => t.all_specialties,
                            Selector::Only(s) => i18n::specialty_name(locale, s),
                        })
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut specialty_sel, Selector::All, t.all_specialties);
                            for s in Specialty::ALL {
                                ui.selectable_value(
                                    &mut specialty_sel,
                                    Selector::Only(s),
                                    i18n::specialty_name(locale, s),
                                );
                            }
                        });
                });
            });

            tui.ui(|ui| {
                ui.vertical(|ui| {
                    section_label(ui, t.governorate);
                    egui::ComboBox::from_id_salt("medical-governorate")
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
                    let is_booking = page.booking_doctor == Some(card.doctor.id);
                    tui.id(egui_taffy::tid(("doctor", card.doctor.id)))
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
                                .with_border_color(if is_booking { COL_HIGHLIGHT } else { COL_BORDER })
                                .with_border_width(1.0)
                                .with_corner_radius(6.0),
                            |tui| {
                                tui.label(
                                    egui::RichText::new(&card.doctor.name)
                                        .size(15.0)
                                        .strong()
                                        .color(COL_HIGHLIGHT),
                                );
                                tui.colored_label(
                                    COL_TEXT,
                                    format!("{} · {}", card.specialty_label, card.governorate_label),
                                );
                                tui.colored_label(COL_TEXT_DIM, &card.doctor.address);
                                tui.colored_label(
                                    COL_TEXT_DIM,
                                    format!("{}: {}", t.working_hours, card.doctor.working_hours),
                                );
                                tui.colored_label(COL_TEXT, &card.doctor.bio);

                                tui.ui(|ui| {
                                    ui.horizontal(|ui| {
                                        ui.hyperlink_to(t.call, &card.tel);
                                        if is_booking {
                                            if cmd_button(ui, t.confirm_booking, "success", true)
                                                .clicked()
                                            {
                                                confirm = true;
                                            }
                                        } else if cmd_button(ui, t.book_appointment, "primary", true)
                                            .clicked()
                                        {
                                            book = Some(card.doctor.id);
                                        }
                                    });
                                });
                            },
                        );
                }
            });
        }
    });

    if specialty_sel != page.filter.specialty {
        app.set_doctor_specialty(specialty_sel);
    }
    if gov_sel != page.filter.governorate {
        app.set_doctor_governorate(gov_sel);
    }
    if let Some(id) = book {
        app.open_doctor_booking(id);
    }
    if confirm {
        app.confirm_doctor_booking();
    }
}
