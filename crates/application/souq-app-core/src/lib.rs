pub mod app;
pub mod app_core;
pub mod domain;
pub mod i18n;
pub mod modal;
pub mod seed;
pub mod viewmodel;

pub use app::SouqApplication;
pub use app_core::*;
pub use domain::{AppState, Locale, Notice, PageState, Route};
pub use modal::{
    ExtraService, HotelBooking, InquiryRunId, PaymentModal, PaymentStep, ServiceKind,
    TelecomProvider,
};
pub use viewmodel::*;
