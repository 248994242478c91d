use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc;

use souq_core::filter::Selector;
use souq_core::validate::{validate_invoice, validate_mobile, ValidationError};
use souq_core::{stub, Currency, Governorate, ListingId, Specialty};

use crate::app_core::{reduce, DomainEvent};
use crate::domain::{AppState, Locale, Notice, PageState, Route};
use crate::modal::{
    ExtraService, HotelBooking, InquiryRunId, PaymentModal, PaymentStep, ServiceKind,
    TelecomProvider,
};

pub struct SouqApplication {
    pub state: AppState,

    msg_rx: mpsc::Receiver<DomainEvent>,
    msg_tx: mpsc::Sender<DomainEvent>,
}

impl Default for SouqApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl SouqApplication {
    pub fn new() -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(100);
        Self {
            state: AppState::default(),
            msg_rx,
            msg_tx,
        }
    }

    // --- Navigation and language ---

    pub fn navigate(&mut self, route: Route) {
        self.state = reduce(self.state.clone(), DomainEvent::RouteChanged(route));
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.state = reduce(self.state.clone(), DomainEvent::LocaleChanged(locale));
    }

    pub fn toggle_locale(&mut self) {
        self.set_locale(self.state.locale.toggled());
    }

    pub fn dismiss_notice(&mut self) {
        self.state = reduce(self.state.clone(), DomainEvent::NoticeDismissed);
    }

    fn show_notice(&mut self, notice: Notice) {
        self.state = reduce(self.state.clone(), DomainEvent::NoticeShown(notice));
    }

    // --- Real estate filters ---

    pub fn set_property_currency(&mut self, currency: Currency) {
        if let PageState::RealEstate(page) = &mut self.state.page {
            page.filter.set_currency(currency);
        }
    }

    pub fn set_property_price_max(&mut self, price: u64) {
        if let PageState::RealEstate(page) = &mut self.state.page {
            page.filter.price_max = price;
        }
    }

    pub fn set_property_area_max(&mut self, area: u32) {
        if let PageState::RealEstate(page) = &mut self.state.page {
            page.filter.area_max = area;
        }
    }

    pub fn set_property_floor(&mut self, floor: Selector<u8>) {
        if let PageState::RealEstate(page) = &mut self.state.page {
            page.filter.floor = floor;
        }
    }

    pub fn set_property_governorate(&mut self, governorate: Selector<Governorate>) {
        if let PageState::RealEstate(page) = &mut self.state.page {
            page.filter.governorate = governorate;
        }
    }

    pub fn reset_property_filters(&mut self) {
        if let PageState::RealEstate(page) = &mut self.state.page {
            page.filter.reset();
        }
    }

    // --- Medical ---

    pub fn set_doctor_specialty(&mut self, specialty: Selector<Specialty>) {
        if let PageState::Medical(page) = &mut self.state.page {
            page.filter.specialty = specialty;
        }
    }

    pub fn set_doctor_governorate(&mut self, governorate: Selector<Governorate>) {
        if let PageState::Medical(page) = &mut self.state.page {
            page.filter.governorate = governorate;
        }
    }

    pub fn open_doctor_booking(&mut self, doctor: ListingId) {
        if let PageState::Medical(page) = &mut self.state.page {
            if page.catalog.iter().any(|d| d.id == doctor) {
                page.booking_doctor = Some(doctor);
            }
        }
    }

    pub fn close_doctor_booking(&mut self) {
        if let PageState::Medical(page) = &mut self.state.page {
            page.booking_doctor = None;
        }
    }

    pub fn confirm_doctor_booking(&mut self) {
        if let PageState::Medical(page) = &mut self.state.page {
            if page.booking_doctor.take().is_some() {
                self.show_notice(Notice::BookingSuccess);
            }
        }
    }

    // --- Tourism ---

    pub fn set_site_governorate(&mut self, governorate: Selector<Governorate>) {
        if let PageState::Tourism(page) = &mut self.state.page {
            page.filter.governorate = governorate;
        }
    }

    pub fn open_trip_agencies(&mut self, site: ListingId) {
        if let PageState::Tourism(page) = &mut self.state.page {
            if page.catalog.iter().any(|s| s.id == site) {
                page.trip_site = Some(site);
            }
        }
    }

    pub fn close_trip_agencies(&mut self) {
        if let PageState::Tourism(page) = &mut self.state.page {
            page.trip_site = None;
        }
    }

    /// Advances a site's photo carousel by the given offset, wrapping at
    /// both ends.
    pub fn step_site_image(&mut self, site: ListingId, delta: i64) {
        if let PageState::Tourism(page) = &mut self.state.page {
            let Some(count) = page
                .catalog
                .iter()
                .find(|s| s.id == site)
                .map(|s| s.image_urls.len())
            else {
                return;
            };
            if count == 0 {
                return;
            }
            let current = *page.image_index.get(&site).unwrap_or(&0) as i64;
            let next = (current + delta).rem_euclid(count as i64) as usize;
            page.image_index.insert(site, next);
        }
    }

    // --- Hotels ---

    pub fn open_hotel_booking(&mut self, hotel: ListingId) {
        if let PageState::Hotels(page) = &mut self.state.page {
            if page.catalog.iter().any(|h| h.id == hotel) {
                page.booking = Some(HotelBooking::new(hotel));
            }
        }
    }

    pub fn close_hotel_booking(&mut self) {
        if let PageState::Hotels(page) = &mut self.state.page {
            page.booking = None;
        }
    }

    pub fn set_booking_days(&mut self, days: u32) {
        if let PageState::Hotels(page) = &mut self.state.page {
            if let Some(booking) = &mut page.booking {
                booking.set_days(days);
            }
        }
    }

    pub fn toggle_booking_service(&mut self, service: ExtraService) {
        if let PageState::Hotels(page) = &mut self.state.page {
            if let Some(booking) = &mut page.booking {
                booking.toggle_service(service);
            }
        }
    }

    pub fn confirm_hotel_booking(&mut self) {
        if let PageState::Hotels(page) = &mut self.state.page {
            if page.booking.take().is_some() {
                self.show_notice(Notice::BookingSuccess);
            }
        }
    }

    // --- Bill payment ---

    pub fn open_service(&mut self, service: ServiceKind) {
        if let PageState::Government(page) = &mut self.state.page {
            page.modal = Some(PaymentModal::open(service));
        }
    }

    pub fn select_provider(&mut self, provider: TelecomProvider) {
        if let Some(modal) = self.payment_modal_mut() {
            modal.select_provider(provider);
        }
    }

    pub fn set_payment_input(&mut self, input: String) {
        if let Some(modal) = self.payment_modal_mut() {
            if modal.step == PaymentStep::Entry {
                modal.input = input;
            }
        }
    }

    /// Closing the dialog discards every entered value. Any inquiry still in
    /// flight keeps running, but its completion no longer matches a pending
    /// run id and is dropped on arrival.
    pub fn close_payment_modal(&mut self) {
        if let PageState::Government(page) = &mut self.state.page {
            page.modal = None;
        }
    }

    /// Primary action of the payment dialog. In the entry step this
    /// validates and either starts the simulated inquiry (telecom) or
    /// completes the payment outright (invoice services); in the details
    /// step it confirms the looked-up bill.
    pub fn submit_payment(&mut self) -> anyhow::Result<()> {
        let tx = self.msg_tx.clone();

        let Some(modal) = self.payment_modal_mut() else {
            return Ok(());
        };

        match (modal.service.needs_provider(), modal.step) {
            (true, PaymentStep::Entry) => {
                let number = modal.input.clone();
                if let Err(e) = validate_mobile(&number) {
                    self.reject(e);
                    return Ok(());
                }
                let run_id: InquiryRunId = uuid::Uuid::new_v4();
                modal.begin_inquiry(run_id);
                spawn_inquiry_worker(tx, run_id, number)?;
            }

            (true, PaymentStep::Details) => {
                self.close_payment_modal();
                self.show_notice(Notice::PaymentSuccess);
            }

            (false, PaymentStep::Entry) => {
                if let Err(e) = validate_invoice(&modal.input) {
                    self.reject(e);
                    return Ok(());
                }
                self.close_payment_modal();
                self.show_notice(Notice::PaymentSuccess);
            }

            _ => {}
        }
        Ok(())
    }

    fn reject(&mut self, err: ValidationError) {
        let notice = match err {
            ValidationError::InvalidMobile => Notice::InvalidMobile,
            ValidationError::EmptyInvoice => Notice::EmptyInvoice,
        };
        self.show_notice(notice);
    }

    fn payment_modal_mut(&mut self) -> Option<&mut PaymentModal> {
        match &mut self.state.page {
            PageState::Government(page) => page.modal.as_mut(),
            _ => None,
        }
    }

    // --- State management ---

    /// Call this from the UI loop/tick to drain worker messages. Inquiry
    /// completions whose run id does not match the pending inquiry are
    /// dropped here.
    pub fn handle_events(&mut self) {
        while let Ok(ev) = self.msg_rx.try_recv() {
            if let DomainEvent::InquiryCompleted { run_id, .. } = &ev {
                if self.pending_inquiry() != Some(*run_id) {
                    continue;
                }
            }
            self.state = reduce(self.state.clone(), ev);
        }
    }

    fn pending_inquiry(&self) -> Option<InquiryRunId> {
        match &self.state.page {
            PageState::Government(page) => page.modal.as_ref().and_then(|m| m.run_id),
            _ => None,
        }
    }

    #[doc(hidden)]
    pub fn event_sender(&self) -> mpsc::Sender<DomainEvent> {
        self.msg_tx.clone()
    }
}

fn spawn_inquiry_worker(
    tx: mpsc::Sender<DomainEvent>,
    run_id: InquiryRunId,
    number: String,
) -> anyhow::Result<()> {
    std::thread::Builder::new()
        .name("souq-bill-inquiry".into())
        .spawn(move || {
            std::thread::sleep(Duration::from_millis(souq_config::INQUIRY_DELAY_MS));
            let amount = stub::telecom_bill_amount(&number);
            let _ = tx.blocking_send(DomainEvent::InquiryCompleted { run_id, amount });
        })
        .context("failed to spawn bill inquiry worker")?;
    Ok(())
}
