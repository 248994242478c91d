//! Dialog state for the bill payment wizard and the hotel booking sheet.
//!
//! Every dialog is plain data owned by its page. Closing a dialog drops the
//! value, which discards all entered progress at once.

use serde::{Deserialize, Serialize};
use souq_config::clamp_booking_days;
use souq_core::{stub, ListingId};
use uuid::Uuid;

/// Identifier for one in-flight bill inquiry. A fresh id is drawn every time
/// an inquiry starts, so completions from an earlier inquiry can be told
/// apart and dropped.
pub type InquiryRunId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Electricity,
    Water,
    Telecom,
    TrafficFines,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::Electricity,
        ServiceKind::Water,
        ServiceKind::Telecom,
        ServiceKind::TrafficFines,
    ];

    /// Telecom bills are looked up per carrier, the rest by invoice number.
    pub fn needs_provider(self) -> bool {
        matches!(self, ServiceKind::Telecom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TelecomProvider {
    Syriatel,
    Mtn,
    SyrianTelecom,
}

impl TelecomProvider {
    pub const ALL: [TelecomProvider; 3] = [
        TelecomProvider::Syriatel,
        TelecomProvider::Mtn,
        TelecomProvider::SyrianTelecom,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStep {
    /// Telecom only: pick a carrier before anything else.
    SelectProvider,
    /// Phone number or invoice number entry.
    Entry,
    /// Waiting on the simulated bill inquiry.
    Loading,
    /// Inquiry finished, amount is known, awaiting confirmation.
    Details,
}

/// One open bill payment dialog.
#[derive(Debug, Clone)]
pub struct PaymentModal {
    pub service: ServiceKind,
    pub provider: Option<TelecomProvider>,
    pub step: PaymentStep,
    pub input: String,
    pub bill_amount: Option<u64>,
    pub run_id: Option<InquiryRunId>,
}

impl PaymentModal {
    pub fn open(service: ServiceKind) -> Self {
        let step = if service.needs_provider() {
            PaymentStep::SelectProvider
        } else {
            PaymentStep::Entry
        };
        Self {
            service,
            provider: None,
            step,
            input: String::new(),
            bill_amount: None,
            run_id: None,
        }
    }

    pub fn select_provider(&mut self, provider: TelecomProvider) {
        if self.step == PaymentStep::SelectProvider {
            self.provider = Some(provider);
            self.step = PaymentStep::Entry;
        }
    }

    /// Moves the dialog into the loading step and records the run id that a
    /// later completion must present.
    pub fn begin_inquiry(&mut self, run_id: InquiryRunId) {
        self.step = PaymentStep::Loading;
        self.bill_amount = None;
        self.run_id = Some(run_id);
    }

    /// Applies an inquiry result. Returns false and leaves the dialog
    /// untouched when the run id does not match the pending inquiry.
    pub fn complete_inquiry(&mut self, run_id: InquiryRunId, amount: u64) -> bool {
        if self.run_id != Some(run_id) {
            return false;
        }
        self.bill_amount = Some(amount);
        self.step = PaymentStep::Details;
        true
    }

    /// Amount shown in the dialog footer. Before the telecom inquiry
    /// resolves there is nothing to show; invoice services preview a figure
    /// straight from the entered number.
    pub fn amount_display(&self) -> u64 {
        if let Some(amount) = self.bill_amount {
            return amount;
        }
        if self.service.needs_provider() {
            0
        } else {
            stub::invoice_amount_preview(&self.input)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraService {
    Breakfast,
    Wifi,
    Pool,
    Gym,
}

impl ExtraService {
    pub const ALL: [ExtraService; 4] = [
        ExtraService::Breakfast,
        ExtraService::Wifi,
        ExtraService::Pool,
        ExtraService::Gym,
    ];

    /// Flat add-on price in SYP per night.
    pub fn price(self) -> u64 {
        match self {
            ExtraService::Breakfast => 50_000,
            ExtraService::Wifi => 0,
            ExtraService::Pool => 75_000,
            ExtraService::Gym => 40_000,
        }
    }
}

/// One open hotel booking dialog.
#[derive(Debug, Clone)]
pub struct HotelBooking {
    pub hotel_id: ListingId,
    pub days: u32,
    pub services: Vec<ExtraService>,
}

impl HotelBooking {
    pub fn new(hotel_id: ListingId) -> Self {
        Self {
            hotel_id,
            days: souq_config::DEFAULT_BOOKING_DAYS,
            services: Vec::new(),
        }
    }

    pub fn set_days(&mut self, days: u32) {
        self.days = clamp_booking_days(days);
    }

    pub fn toggle_service(&mut self, service: ExtraService) {
        if let Some(pos) = self.services.iter().position(|s| *s == service) {
            self.services.remove(pos);
        } else {
            self.services.push(service);
        }
    }

    pub fn has_service(&self, service: ExtraService) -> bool {
        self.services.contains(&service)
    }

    /// Total cost: nightly rate plus selected add-ons, times nights.
    pub fn total(&self, price_per_night: u64) -> u64 {
        let extras: u64 = self.services.iter().map(|s| s.price()).sum();
        (price_per_night + extras) * u64::from(self.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telecom_dialog_opens_on_provider_selection() {
        let modal = PaymentModal::open(ServiceKind::Telecom);
        assert_eq!(modal.step, PaymentStep::SelectProvider);
        assert!(modal.provider.is_none());
    }

    #[test]
    fn invoice_dialog_opens_directly_on_entry() {
        let modal = PaymentModal::open(ServiceKind::Electricity);
        assert_eq!(modal.step, PaymentStep::Entry);
    }

    #[test]
    fn picking_a_provider_advances_to_entry() {
        let mut modal = PaymentModal::open(ServiceKind::Telecom);
        modal.select_provider(TelecomProvider::Mtn);
        assert_eq!(modal.provider, Some(TelecomProvider::Mtn));
        assert_eq!(modal.step, PaymentStep::Entry);
    }

    #[test]
    fn completion_with_the_pending_run_id_shows_details() {
        let mut modal = PaymentModal::open(ServiceKind::Telecom);
        modal.select_provider(TelecomProvider::Syriatel);
        let run = Uuid::new_v4();
        modal.begin_inquiry(run);
        assert_eq!(modal.step, PaymentStep::Loading);
        assert!(modal.complete_inquiry(run, 21_665));
        assert_eq!(modal.step, PaymentStep::Details);
        assert_eq!(modal.amount_display(), 21_665);
    }

    #[test]
    fn completion_with_a_stale_run_id_is_dropped() {
        let mut modal = PaymentModal::open(ServiceKind::Telecom);
        modal.select_provider(TelecomProvider::Syriatel);
        modal.begin_inquiry(Uuid::new_v4());
        assert!(!modal.complete_inquiry(Uuid::new_v4(), 99_999));
        assert_eq!(modal.step, PaymentStep::Loading);
        assert!(modal.bill_amount.is_none());
    }

    #[test]
    fn invoice_preview_tracks_the_entered_number() {
        let mut modal = PaymentModal::open(ServiceKind::Water);
        assert_eq!(modal.amount_display(), 0);
        modal.input = "1234".to_string();
        assert_eq!(modal.amount_display(), 4 * 12_345);
    }

    #[test]
    fn booking_total_multiplies_nights_and_addons() {
        let mut booking = HotelBooking::new(3);
        booking.set_days(3);
        booking.toggle_service(ExtraService::Breakfast);
        booking.toggle_service(ExtraService::Gym);
        assert_eq!(booking.total(550_000), (550_000 + 50_000 + 40_000) * 3);
    }

    #[test]
    fn toggling_a_service_twice_removes_it() {
        let mut booking = HotelBooking::new(1);
        booking.toggle_service(ExtraService::Pool);
        assert!(booking.has_service(ExtraService::Pool));
        booking.toggle_service(ExtraService::Pool);
        assert!(!booking.has_service(ExtraService::Pool));
    }

    #[test]
    fn day_counts_are_clamped_into_range() {
        let mut booking = HotelBooking::new(1);
        booking.set_days(0);
        assert_eq!(booking.days, souq_config::MIN_BOOKING_DAYS);
        booking.set_days(500);
        assert_eq!(booking.days, souq_config::MAX_BOOKING_DAYS);
    }
}
