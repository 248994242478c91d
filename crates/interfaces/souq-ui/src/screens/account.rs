use crate::theme::*;
use crate::utils::{row_direction, section_label};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use souq_app_core::viewmodel::account_vm;
use souq_app_core::{i18n, PageState, SouqApplication};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &SouqApplication) {
    let locale = app.state.locale;
    let t = i18n::strings(locale);

    let page = match &app.state.page {
        PageState::Account(page) => page,
        _ => return,
    };
    let vm = account_vm(page, locale);

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
            egui::RichText::new(vm.holder_name)
                .size(20.0)
                .strong()
                .color(COL_HIGHLIGHT),
        );

        tui.style(taffy::Style {
            flex_direction: row_direction(locale),
            gap: length(12.0),
            align_items: Some(taffy::AlignItems::Stretch),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            ..Default::default()
        })
        .add(|tui| {
            // Balance card
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                gap: length(6.0),
                padding: length(16.0),
                size: taffy::Size {
                    width: length(300.0),
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
                    tui.ui(|ui| section_label(ui, t.current_balance));
                    tui.label(
                        egui::RichText::new(&vm.balance)
                            .size(22.0)
                            .strong()
                            .color(COL_HIGHLIGHT),
                    );
                    tui.colored_label(COL_TEXT_DIM, t.bank_name);
                    tui.colored_label(
                        COL_TEXT_DIM,
                        format!("{} {}", t.account_number, vm.account_mask),
                    );
                },
            );

            // Ledger
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                flex_grow: 1.0,
                gap: length(6.0),
                padding: length(16.0),
                size: taffy::Size {
                    width: auto(),
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
                    tui.ui(|ui| section_label(ui, t.recent_transactions));
                    for row in &vm.rows {
                        tui.id(egui_taffy::tid(("tx", row.transaction.id)))
                            .style(taffy::Style {
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
                                tui.colored_label(COL_TEXT, row.description);
                                tui.colored_label(
                                    COL_TEXT_DIM,
                                    format!("{} · {}", row.date, row.kind_label),
                                );
                                tui.colored_label(
                                    if row.is_credit { COL_SUCCESS } else { COL_DANGER },
                                    &row.signed_amount,
                                );
                            });
                        tui.separator();
                    }
                },
            );
        });
    });
}
