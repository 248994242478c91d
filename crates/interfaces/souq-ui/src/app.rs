use crate::components::{header, toast};
use crate::screens::{
    account, government, home, hotels, marketing, medical, real_estate, tourism, transportation,
};
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use souq_app_core::{PageState, PaymentStep, SouqApplication};

pub struct SouqUiApp {
    core: SouqApplication,
}

impl SouqUiApp {
    pub fn new(core: SouqApplication) -> Self {
        Self { core }
    }

    fn inquiry_pending(&self) -> bool {
        match &self.core.state.page {
            PageState::Government(page) => page
                .modal
                .as_ref()
                .is_some_and(|m| m.step == PaymentStep::Loading),
            _ => false,
        }
    }
}

impl eframe::App for SouqUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.core.handle_events();

        ctx.options_mut(|options| {
            options.max_passes = std::num::NonZeroUsize::new(3)
                .unwrap_or(std::num::NonZeroUsize::MIN);
        });
        ctx.style_mut(|style| {
            // Width-independent text measurement keeps egui_taffy multi-pass
            // layout stable.
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        let locale = self.core.state.locale;
        let route = self.core.state.route;

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(48.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        let resp = header::draw(tui, locale, route);
                        if let Some(r) = resp.selected_route {
                            self.core.navigate(r);
                        }
                        if resp.toggle_language {
                            self.core.toggle_locale();
                        }
                    });

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        size: taffy::Size {
                            width: percent(1.),
                            height: auto(),
                        },
                        min_size: taffy::Size {
                            width: length(0.0),
                            height: length(0.0),
                        },
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Scroll,
                        },
                        padding: length(16.0),
                        gap: length(12.0),
                        ..Default::default()
                    })
                    .add(|tui| match &self.core.state.page {
                        PageState::Home => home::draw(tui, &mut self.core),
                        PageState::RealEstate(_) => real_estate::draw(tui, &mut self.core),
                        PageState::Transportation(_) => transportation::draw(tui, &self.core),
                        PageState::Hotels(_) => hotels::draw(tui, &mut self.core),
                        PageState::Tourism(_) => tourism::draw(tui, &mut self.core),
                        PageState::Medical(_) => medical::draw(tui, &mut self.core),
                        PageState::Government(_) => government::draw(tui, &mut self.core),
                        PageState::Marketing => marketing::draw(tui, &self.core),
                        PageState::Account(_) => account::draw(tui, &self.core),
                    });
                });
        });

        // Dialogs float above the routed page.
        government::draw_payment_dialog(ctx, &mut self.core);
        hotels::draw_booking_dialog(ctx, &mut self.core);
        tourism::draw_agency_dialog(ctx, &mut self.core);

        if let Some(notice) = self.core.state.toast {
            let resp = toast::draw(ctx, locale, notice);
            if resp.dismissed {
                self.core.dismiss_notice();
            }
        }

        if self.inquiry_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
