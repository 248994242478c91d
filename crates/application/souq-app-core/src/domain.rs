use std::collections::HashMap;

use souq_core::filter::{DoctorFilter, PropertyFilter, SiteFilter};
use souq_core::{
    Doctor, Hotel, ListingId, Property, Shipment, TouristSite, Transaction, TravelAgency,
};

use crate::modal::{HotelBooking, PaymentModal};
use crate::seed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::Ar)
    }

    pub fn toggled(self) -> Locale {
        match self {
            Locale::Ar => Locale::En,
            Locale::En => Locale::Ar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    RealEstate,
    Transportation,
    Hotels,
    Tourism,
    Medical,
    Government,
    Marketing,
    Account,
}

/// Transient user-facing notice. Success notices acknowledge a simulated
/// booking or payment; the rest block an invalid submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    PaymentSuccess,
    BookingSuccess,
    InvalidMobile,
    EmptyInvoice,
}

#[derive(Debug, Clone)]
pub struct RealEstatePage {
    pub catalog: Vec<Property>,
    pub filter: PropertyFilter,
}

#[derive(Debug, Clone)]
pub struct TransportationPage {
    pub catalog: Vec<Shipment>,
}

#[derive(Debug, Clone)]
pub struct HotelsPage {
    pub catalog: Vec<Hotel>,
    pub booking: Option<HotelBooking>,
}

#[derive(Debug, Clone)]
pub struct TourismPage {
    pub catalog: Vec<TouristSite>,
    pub agencies: Vec<TravelAgency>,
    pub filter: SiteFilter,
    /// Site whose agency list is currently open.
    pub trip_site: Option<ListingId>,
    /// Per-card carousel position.
    pub image_index: HashMap<ListingId, usize>,
}

#[derive(Debug, Clone)]
pub struct MedicalPage {
    pub catalog: Vec<Doctor>,
    pub filter: DoctorFilter,
    pub booking_doctor: Option<ListingId>,
}

#[derive(Debug, Clone, Default)]
pub struct GovernmentPage {
    pub modal: Option<PaymentModal>,
}

#[derive(Debug, Clone)]
pub struct AccountPage {
    pub holder_name: String,
    pub balance_syp: u64,
    pub account_mask: String,
    pub transactions: Vec<Transaction>,
}

/// Per-route page state. Each variant owns its catalog and filter, built
/// fresh on mount and dropped on navigation, so nothing leaks across pages.
#[derive(Debug, Clone)]
pub enum PageState {
    Home,
    RealEstate(RealEstatePage),
    Transportation(TransportationPage),
    Hotels(HotelsPage),
    Tourism(TourismPage),
    Medical(MedicalPage),
    Government(GovernmentPage),
    Marketing,
    Account(AccountPage),
}

impl PageState {
    pub fn mount(route: Route) -> PageState {
        match route {
            Route::Home => PageState::Home,
            Route::RealEstate => {
                let catalog = seed::properties();
                let filter = PropertyFilter::for_catalog(&catalog);
                PageState::RealEstate(RealEstatePage { catalog, filter })
            }
            Route::Transportation => PageState::Transportation(TransportationPage {
                catalog: seed::shipments(),
            }),
            Route::Hotels => PageState::Hotels(HotelsPage {
                catalog: seed::hotels(),
                booking: None,
            }),
            Route::Tourism => PageState::Tourism(TourismPage {
                catalog: seed::tourist_sites(),
                agencies: seed::travel_agencies(),
                filter: SiteFilter::default(),
                trip_site: None,
                image_index: HashMap::new(),
            }),
            Route::Medical => PageState::Medical(MedicalPage {
                catalog: seed::doctors(),
                filter: DoctorFilter::default(),
                booking_doctor: None,
            }),
            Route::Government => PageState::Government(GovernmentPage::default()),
            Route::Marketing => PageState::Marketing,
            Route::Account => PageState::Account(seed::account()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub locale: Locale,
    pub route: Route,
    pub page: PageState,
    pub toast: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            route: Route::Home,
            page: PageState::Home,
            toast: None,
        }
    }
}
