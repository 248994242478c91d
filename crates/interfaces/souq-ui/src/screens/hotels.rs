use crate::theme::*;
use crate::utils::{cmd_button, row_direction, section_label};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use souq_app_core::viewmodel::{booking_vm, hotels_vm};
use souq_app_core::{i18n, ExtraService, PageState, SouqApplication};
use souq_core::ListingId;

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut SouqApplication) {
    let locale = app.state.locale;
    let t = i18n::strings(locale);

    let page = match &app.state.page {
        PageState::Hotels(page) => page.clone(),
        _ => return,
    };
    let cards = hotels_vm(&page, locale);
    let mut book: Option<ListingId> = None;

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
            egui::RichText::new(i18n::route_name(locale, souq_app_core::Route::Hotels))
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
                tui.id(egui_taffy::tid(("hotel", card.hotel.id)))
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
                                    egui::RichText::new(&card.hotel.name)
                                        .size(15.0)
                                        .strong()
                                        .color(COL_HIGHLIGHT),
                                );
                                tui.colored_label(COL_HIGHLIGHT, format!("★ {}", card.rating));
                            });

                            tui.colored_label(COL_TEXT_DIM, &card.hotel.location);
                            tui.colored_label(
                                COL_TEXT,
                                format!("{} {}", card.nightly_price, t.per_night),
                            );

                            if tui
                                .ui(|ui| cmd_button(ui, t.book_now, "primary", true))
                                .clicked()
                            {
                                book = Some(card.hotel.id);
                            }
                        },
                    );
            }
        });
    });

    if let Some(id) = book {
        app.open_hotel_booking(id);
    }
}

pub fn draw_booking_dialog(ctx: &egui::Context, app: &mut SouqApplication) {
    let locale = app.state.locale;
    let t = i18n::strings(locale);

    let (page, booking) = match &app.state.page {
        PageState::Hotels(page) => match &page.booking {
            Some(booking) => (page.clone(), booking.clone()),
            None => return,
        },
        _ => return,
    };
    let Some(vm) = booking_vm(&page, &booking, locale) else {
        return;
    };

    let mut days = booking.days;
    let mut toggled: Option<ExtraService> = None;
    let mut confirmed = false;
    let mut open = true;

    egui::Window::new(t.booking_details)
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(&vm.hotel.name)
                    .size(16.0)
                    .strong()
                    .color(COL_HIGHLIGHT),
            );
            ui.label(egui::RichText::new(&vm.hotel.location).color(COL_TEXT_DIM));
            ui.separator();

            ui.horizontal(|ui| {
                section_label(ui, t.number_of_days);
                ui.add(egui::DragValue::new(&mut days).range(
                    souq_config::MIN_BOOKING_DAYS..=souq_config::MAX_BOOKING_DAYS,
                ));
            });

            section_label(ui, t.select_services);
            for service in ExtraService::ALL {
                let mut checked = booking.has_service(service);
                let label = format!(
                    "{} ({})",
                    i18n::extra_service_name(locale, service),
                    souq_app_core::viewmodel::format_syp(locale, service.price()),
                );
                if ui.checkbox(&mut checked, label).changed() {
                    toggled = Some(service);
                }
            }

            ui.separator();
            ui.horizontal(|ui| {
                section_label(ui, t.total);
                ui.label(
                    egui::RichText::new(&vm.total)
                        .size(16.0)
                        .strong()
                        .color(COL_HIGHLIGHT),
                );
            });

            if cmd_button(ui, t.confirm_booking, "primary", true).clicked() {
                confirmed = true;
            }
        });

    if days != booking.days {
        app.set_booking_days(days);
    }
    if let Some(service) = toggled {
        app.toggle_booking_service(service);
    }
    if confirmed {
        app.confirm_hotel_booking();
    } else if !open {
        app.close_hotel_booking();
    }
}
