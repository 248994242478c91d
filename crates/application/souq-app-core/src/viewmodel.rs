//! Presentation helpers. Everything here is a pure projection of page state
//! into display strings; nothing mutates.

use souq_core::filter::project;
use souq_core::links::{tel_link, whatsapp_link};
use souq_core::{
    Currency, Doctor, Hotel, Money, Property, Shipment, TouristSite, Transaction, TransactionKind,
    TravelAgency,
};

use crate::domain::{
    AccountPage, HotelsPage, Locale, MedicalPage, RealEstatePage, TourismPage, TransportationPage,
};
use crate::i18n;
use crate::modal::{HotelBooking, PaymentModal, PaymentStep};

/// Groups digits with commas: 900000000 becomes "900,000,000".
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_money(locale: Locale, money: Money) -> String {
    let t = i18n::strings(locale);
    let unit = match money.currency {
        Currency::Syp => t.syp,
        Currency::Usd => t.usd,
    };
    format!("{} {}", format_thousands(money.amount), unit)
}

pub fn format_syp(locale: Locale, amount: u64) -> String {
    format_money(locale, Money::syp(amount))
}

// --- Real estate ---

pub struct PropertyCardVm<'a> {
    pub property: &'a Property,
    pub price: String,
    pub kind_label: &'static str,
    pub floor_label: String,
    pub tel: String,
    pub whatsapp: String,
}

pub struct RealEstateVm<'a> {
    pub cards: Vec<PropertyCardVm<'a>>,
    pub price_label: String,
    pub area_label: String,
    pub empty_message: Option<&'static str>,
}

pub fn real_estate_vm<'a>(page: &'a RealEstatePage, locale: Locale) -> RealEstateVm<'a> {
    let t = i18n::strings(locale);
    let cards: Vec<PropertyCardVm<'a>> = project(&page.catalog, &page.filter)
        .into_iter()
        .map(|p| PropertyCardVm {
            property: p,
            price: format_money(locale, p.price),
            kind_label: i18n::property_kind_name(locale, p.kind),
            floor_label: if p.floor == 0 {
                t.basement.to_string()
            } else {
                format!("{} {}", t.floor, p.floor)
            },
            tel: tel_link(&p.contact_number),
            whatsapp: whatsapp_link(&p.contact_number, None),
        })
        .collect();

    RealEstateVm {
        price_label: format!(
            "{} {}",
            format_thousands(page.filter.price_max),
            page.filter.currency.code()
        ),
        area_label: format!("{} m²", page.filter.area_max),
        empty_message: cards.is_empty().then_some(t.no_results),
        cards,
    }
}

// --- Transportation ---

pub struct ShipmentCardVm<'a> {
    pub shipment: &'a Shipment,
    pub price: String,
    pub size_label: &'static str,
}

pub fn transportation_vm<'a>(
    page: &'a TransportationPage,
    locale: Locale,
) -> Vec<ShipmentCardVm<'a>> {
    page.catalog
        .iter()
        .map(|s| ShipmentCardVm {
            shipment: s,
            price: format_money(locale, s.price),
            size_label: i18n::truck_size_name(locale, s.truck_size),
        })
        .collect()
}

// --- Hotels ---

pub struct HotelCardVm<'a> {
    pub hotel: &'a Hotel,
    pub nightly_price: String,
    pub rating: String,
}

pub fn hotels_vm<'a>(page: &'a HotelsPage, locale: Locale) -> Vec<HotelCardVm<'a>> {
    page.catalog
        .iter()
        .map(|h| HotelCardVm {
            hotel: h,
            nightly_price: format_syp(locale, h.price_per_night),
            rating: format!("{:.1}", h.rating),
        })
        .collect()
}

pub struct BookingVm<'a> {
    pub hotel: &'a Hotel,
    pub total: String,
}

pub fn booking_vm<'a>(
    page: &'a HotelsPage,
    booking: &HotelBooking,
    locale: Locale,
) -> Option<BookingVm<'a>> {
    let hotel = page.catalog.iter().find(|h| h.id == booking.hotel_id)?;
    Some(BookingVm {
        hotel,
        total: format_syp(locale, booking.total(hotel.price_per_night)),
    })
}

// --- Tourism ---

pub struct SiteCardVm<'a> {
    pub site: &'a TouristSite,
    pub current_image: &'a str,
    pub image_position: String,
    pub governorate_label: &'static str,
}

pub struct TourismVm<'a> {
    pub cards: Vec<SiteCardVm<'a>>,
    pub empty_message: Option<&'static str>,
}

pub fn tourism_vm<'a>(page: &'a TourismPage, locale: Locale) -> TourismVm<'a> {
    let cards: Vec<SiteCardVm<'a>> = project(&page.catalog, &page.filter)
        .into_iter()
        .map(|s| {
            let ix = page
                .image_index
                .get(&s.id)
                .copied()
                .unwrap_or(0)
                .min(s.image_urls.len().saturating_sub(1));
            SiteCardVm {
                site: s,
                current_image: s.image_urls.get(ix).map(String::as_str).unwrap_or(""),
                image_position: format!("{}/{}", ix + 1, s.image_urls.len()),
                governorate_label: i18n::governorate_name(locale, s.governorate),
            }
        })
        .collect();

    TourismVm {
        empty_message: cards
            .is_empty()
            .then_some(i18n::strings(locale).no_results),
        cards,
    }
}

pub struct AgencyVm<'a> {
    pub agency: &'a TravelAgency,
    pub tel: String,
    pub whatsapp: String,
}

pub fn agencies_vm<'a>(agencies: &'a [TravelAgency]) -> Vec<AgencyVm<'a>> {
    agencies
        .iter()
        .map(|a| AgencyVm {
            agency: a,
            tel: tel_link(&a.contact_number),
            whatsapp: whatsapp_link(&a.contact_number, None),
        })
        .collect()
}

// --- Medical ---

pub struct DoctorCardVm<'a> {
    pub doctor: &'a Doctor,
    pub specialty_label: &'static str,
    pub governorate_label: &'static str,
    pub tel: String,
}

pub struct MedicalVm<'a> {
    pub cards: Vec<DoctorCardVm<'a>>,
    pub empty_message: Option<&'static str>,
}

pub fn medical_vm<'a>(page: &'a MedicalPage, locale: Locale) -> MedicalVm<'a> {
    let cards: Vec<DoctorCardVm<'a>> = project(&page.catalog, &page.filter)
        .into_iter()
        .map(|d| DoctorCardVm {
            doctor: d,
            specialty_label: i18n::specialty_name(locale, d.specialty),
            governorate_label: i18n::governorate_name(locale, d.governorate),
            tel: tel_link(&d.contact_number),
        })
        .collect();

    MedicalVm {
        empty_message: cards
            .is_empty()
            .then_some(i18n::strings(locale).no_results),
        cards,
    }
}

// --- Government services ---

pub struct PaymentVm {
    pub title: &'static str,
    pub subject: &'static str,
    pub input_label: &'static str,
    pub amount_label: &'static str,
    pub amount: String,
    pub action_label: &'static str,
    pub input_locked: bool,
}

pub fn payment_vm(modal: &PaymentModal, locale: Locale) -> PaymentVm {
    let t = i18n::strings(locale);
    let telecom = modal.service.needs_provider();

    let subject = match modal.provider {
        Some(p) => i18n::provider_name(locale, p),
        None => i18n::service_name(locale, modal.service),
    };

    PaymentVm {
        title: if modal.step == PaymentStep::SelectProvider {
            t.select_company
        } else {
            t.payment_title
        },
        subject,
        input_label: if telecom { t.phone_number } else { t.invoice_number },
        amount_label: if telecom && modal.step == PaymentStep::Details {
            t.bill_amount
        } else {
            t.amount
        },
        amount: format_syp(locale, modal.amount_display()),
        action_label: if telecom && modal.step == PaymentStep::Entry {
            t.inquire
        } else {
            t.confirm_payment
        },
        input_locked: modal.step != PaymentStep::Entry,
    }
}

// --- Account ---

pub struct TransactionRowVm<'a> {
    pub transaction: &'a Transaction,
    pub description: &'static str,
    pub kind_label: &'static str,
    pub signed_amount: String,
    pub date: String,
    pub is_credit: bool,
}

pub struct AccountVm<'a> {
    pub holder_name: &'a str,
    pub balance: String,
    pub account_mask: &'a str,
    pub rows: Vec<TransactionRowVm<'a>>,
}

pub fn account_vm<'a>(page: &'a AccountPage, locale: Locale) -> AccountVm<'a> {
    let rows = page
        .transactions
        .iter()
        .map(|tx| {
            let is_credit = tx.kind == TransactionKind::Deposit;
            let sign = if is_credit { '+' } else { '-' };
            TransactionRowVm {
                transaction: tx,
                description: i18n::transaction_description(locale, tx.kind),
                kind_label: i18n::transaction_kind_name(locale, tx.kind),
                signed_amount: format!("{}{}", sign, format_syp(locale, tx.amount)),
                date: tx.date.format("%Y-%m-%d").to_string(),
                is_credit,
            }
        })
        .collect();

    AccountVm {
        holder_name: &page.holder_name,
        balance: format_syp(locale, page.balance_syp),
        account_mask: &page.account_mask,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PageState, Route};

    fn real_estate_page() -> RealEstatePage {
        match PageState::mount(Route::RealEstate) {
            PageState::RealEstate(page) => page,
            _ => unreachable!(),
        }
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(900_000_000), "900,000,000");
    }

    #[test]
    fn a_full_catalog_has_no_empty_message() {
        let page = real_estate_page();
        let vm = real_estate_vm(&page, Locale::Ar);
        assert!(vm.empty_message.is_none());
        assert!(!vm.cards.is_empty());
    }

    #[test]
    fn an_impossible_filter_surfaces_the_locale_message() {
        let mut page = real_estate_page();
        page.filter.price_max = 0;
        page.filter.area_max = 0;

        let vm = real_estate_vm(&page, Locale::Ar);
        assert_eq!(vm.empty_message, Some(i18n::AR.no_results));

        let vm = real_estate_vm(&page, Locale::En);
        assert_eq!(vm.empty_message, Some(i18n::EN.no_results));
    }

    #[test]
    fn basement_floors_get_their_own_label() {
        let page = real_estate_page();
        let vm = real_estate_vm(&page, Locale::En);
        let basement = vm
            .cards
            .iter()
            .find(|c| c.property.floor == 0)
            .expect("seed data has a basement listing");
        assert_eq!(basement.floor_label, "Basement");
    }

    #[test]
    fn ledger_rows_sign_credits_and_debits() {
        let page = crate::seed::account();
        let vm = account_vm(&page, Locale::En);
        for row in &vm.rows {
            if row.is_credit {
                assert!(row.signed_amount.starts_with('+'));
            } else {
                assert!(row.signed_amount.starts_with('-'));
            }
        }
    }
}
