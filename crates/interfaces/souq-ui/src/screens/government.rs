use crate::theme::*;
use crate::utils::{cmd_button, row_direction, section_label};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use souq_app_core::viewmodel::payment_vm;
use souq_app_core::{i18n, PageState, PaymentStep, ServiceKind, SouqApplication, TelecomProvider};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut SouqApplication) {
    let locale = app.state.locale;
    let t = i18n::strings(locale);
    let mut open_service: Option<ServiceKind> = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(12.0),
        align_items: Some(taffy::AlignItems::Center),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.label(
            egui::RichText::new(t.government_title)
                .size(20.0)
                .strong()
                .color(COL_HIGHLIGHT),
        );
        tui.colored_label(COL_TEXT_DIM, t.government_description);

        tui.style(taffy::Style {
            flex_direction: row_direction(locale),
            flex_wrap: taffy::FlexWrap::Wrap,
            justify_content: Some(taffy::JustifyContent::Center),
            gap: length(12.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            for service in ServiceKind::ALL {
                tui.id(egui_taffy::tid(("service", service as u8)))
                    .style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        align_items: Some(taffy::AlignItems::Center),
                        gap: length(8.0),
                        padding: length(16.0),
                        size: taffy::Size {
                            width: length(250.0),
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
                                egui::RichText::new(i18n::service_name(locale, service))
                                    .size(15.0)
                                    .strong()
                                    .color(COL_TEXT),
                            );
                            if tui
                                .ui(|ui| cmd_button(ui, t.pay_now, "primary", true))
                                .clicked()
                            {
                                open_service = Some(service);
                            }
                        },
                    );
            }
        });
    });

    if let Some(service) = open_service {
        app.open_service(service);
    }
}

pub fn draw_payment_dialog(ctx: &egui::Context, app: &mut SouqApplication) {
    let locale = app.state.locale;
    let t = i18n::strings(locale);

    let modal = match &app.state.page {
        PageState::Government(page) => match &page.modal {
            Some(modal) => modal.clone(),
            None => return,
        },
        _ => return,
    };
    let vm = payment_vm(&modal, locale);

    let mut open = true;
    let mut input = modal.input.clone();
    let mut picked: Option<TelecomProvider> = None;
    let mut submit = false;

    egui::Window::new(vm.title)
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(vm.subject)
                    .size(16.0)
                    .strong()
                    .color(COL_HIGHLIGHT),
            );
            ui.separator();

            match modal.step {
                PaymentStep::SelectProvider => {
                    for provider in TelecomProvider::ALL {
                        if ui
                            .add_sized(
                                [240.0, 32.0],
                                egui::Button::new(i18n::provider_name(locale, provider)),
                            )
                            .clicked()
                        {
                            picked = Some(provider);
                        }
                    }
                }

                PaymentStep::Loading => {
                    ui.vertical_centered(|ui| {
                        ui.add(egui::Spinner::new().size(32.0));
                        ui.label(egui::RichText::new(t.loading).color(COL_TEXT_DIM));
                    });
                }

                PaymentStep::Entry | PaymentStep::Details => {
                    section_label(ui, vm.input_label);
                    ui.add_enabled(
                        !vm.input_locked,
                        egui::TextEdit::singleline(&mut input)
                            .hint_text(if modal.service.needs_provider() {
                                "09xxxxxxxx"
                            } else {
                                ""
                            })
                            .desired_width(240.0),
                    );

                    section_label(ui, vm.amount_label);
                    ui.label(
                        egui::RichText::new(&vm.amount)
                            .size(18.0)
                            .strong()
                            .color(COL_TEXT),
                    );

                    let enabled = !input.trim().is_empty();
                    if cmd_button(ui, vm.action_label, "primary", enabled).clicked() {
                        submit = true;
                    }
                }
            }
        });

    if let Some(provider) = picked {
        app.select_provider(provider);
    }
    if input != modal.input {
        app.set_payment_input(input);
    }
    if submit {
        if let Err(e) = app.submit_payment() {
            tracing::error!("failed to start bill inquiry: {e}");
        }
    }
    if !open {
        app.close_payment_modal();
    }
}
