use crate::theme::*;
use eframe::egui;
use souq_app_core::{i18n, Locale, Notice};

pub struct ToastResponse {
    pub dismissed: bool,
}

/// Floating notice bar anchored to the bottom of the window.
pub fn draw(ctx: &egui::Context, locale: Locale, notice: Notice) -> ToastResponse {
    let mut dismissed = false;
    let color = match notice {
        Notice::PaymentSuccess | Notice::BookingSuccess => COL_SUCCESS,
        Notice::InvalidMobile | Notice::EmptyInvoice => COL_DANGER,
    };

    egui::Area::new(egui::Id::new("notice-toast"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
        .show(ctx, |ui| {
            egui::Frame::window(&ctx.style())
                .fill(COL_PANEL)
                .stroke(egui::Stroke::new(1.0, color))
                .inner_margin(egui::Margin::symmetric(16, 10))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(i18n::notice_text(locale, notice))
                                .size(14.0)
                                .color(color),
                        );
                        if ui.button("×").clicked() {
                            dismissed = true;
                        }
                    });
                });
        });

    ToastResponse { dismissed }
}
