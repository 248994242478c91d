//! Static Arabic and English string tables. The interface renders from
//! whichever table the active locale selects; records keep their own
//! language regardless.

use souq_core::{Governorate, PropertyKind, Specialty, TransactionKind, TruckSize};

use crate::domain::{Locale, Notice, Route};
use crate::modal::{ExtraService, ServiceKind, TelecomProvider};

#[derive(Debug)]
pub struct Strings {
    pub app_name: &'static str,
    pub tagline: &'static str,
    pub switch_language: &'static str,
    pub footer_rights: &'static str,

    // Navigation
    pub nav_home: &'static str,
    pub nav_real_estate: &'static str,
    pub nav_transportation: &'static str,
    pub nav_hotels: &'static str,
    pub nav_tourism: &'static str,
    pub nav_medical: &'static str,
    pub nav_government: &'static str,
    pub nav_marketing: &'static str,
    pub nav_account: &'static str,

    // Home cards
    pub desc_real_estate: &'static str,
    pub desc_transportation: &'static str,
    pub desc_hotels: &'static str,
    pub desc_tourism: &'static str,
    pub desc_medical: &'static str,
    pub desc_government: &'static str,
    pub desc_marketing: &'static str,

    // Real estate
    pub filters_title: &'static str,
    pub for_sale: &'static str,
    pub for_rent: &'static str,
    pub beds: &'static str,
    pub baths: &'static str,
    pub basement: &'static str,
    pub floor: &'static str,
    pub ownership: &'static str,
    pub view_on_map: &'static str,
    pub call: &'static str,
    pub whatsapp: &'static str,
    pub price_range: &'static str,
    pub area_range: &'static str,
    pub floor_number: &'static str,
    pub all_floors: &'static str,
    pub governorate: &'static str,
    pub all_governorates: &'static str,
    pub syp: &'static str,
    pub usd: &'static str,
    pub reset_filters: &'static str,
    pub no_results: &'static str,

    // Transportation
    pub cargo_type: &'static str,
    pub truck_size: &'static str,
    pub route_from: &'static str,
    pub route_to: &'static str,

    // Hotels
    pub per_night: &'static str,
    pub book_now: &'static str,
    pub booking_details: &'static str,
    pub number_of_days: &'static str,
    pub select_services: &'static str,
    pub total: &'static str,
    pub confirm_booking: &'static str,

    // Tourism
    pub plan_trip: &'static str,
    pub agencies_title: &'static str,

    // Medical
    pub book_appointment: &'static str,
    pub working_hours: &'static str,
    pub specialty: &'static str,
    pub all_specialties: &'static str,

    // Government services
    pub government_title: &'static str,
    pub government_description: &'static str,
    pub pay_now: &'static str,
    pub select_company: &'static str,
    pub payment_title: &'static str,
    pub phone_number: &'static str,
    pub invoice_number: &'static str,
    pub inquire: &'static str,
    pub confirm_payment: &'static str,
    pub loading: &'static str,
    pub bill_amount: &'static str,
    pub amount: &'static str,

    // Account
    pub current_balance: &'static str,
    pub add_funds: &'static str,
    pub withdraw: &'static str,
    pub bank_name: &'static str,
    pub account_number: &'static str,
    pub recent_transactions: &'static str,
    pub deposit_from_bank: &'static str,
    pub payment_to_store: &'static str,
    pub atm_withdrawal: &'static str,

    // Marketing
    pub marketing_title: &'static str,
    pub marketing_description: &'static str,
    pub contact_us: &'static str,

    // Notices
    pub payment_success: &'static str,
    pub booking_success: &'static str,
    pub invalid_mobile: &'static str,
    pub empty_invoice: &'static str,
}

pub static AR: Strings = Strings {
    app_name: "دليل السوق",
    tagline: "كل الخدمات في مكان واحد",
    switch_language: "English",
    footer_rights: "جميع الحقوق محفوظة",

    nav_home: "الرئيسية",
    nav_real_estate: "العقارات",
    nav_transportation: "النقل والشحن",
    nav_hotels: "الفنادق",
    nav_tourism: "السياحة",
    nav_medical: "الخدمات الطبية",
    nav_government: "الخدمات الحكومية",
    nav_marketing: "التسويق",
    nav_account: "حسابي",

    desc_real_estate: "بيع وشراء وإيجار العقارات في جميع المحافظات",
    desc_transportation: "شركات نقل وشحن البضائع داخل وخارج البلاد",
    desc_hotels: "احجز إقامتك في أفضل الفنادق والمنتجعات",
    desc_tourism: "اكتشف أجمل المواقع الأثرية والسياحية",
    desc_medical: "ابحث عن الأطباء واحجز موعدك بسهولة",
    desc_government: "سدد فواتيرك الحكومية إلكترونياً",
    desc_marketing: "روّج لأعمالك وخدماتك عبر منصتنا",

    filters_title: "تصفية النتائج",
    for_sale: "للبيع",
    for_rent: "للإيجار",
    beds: "غرف",
    baths: "حمامات",
    basement: "قبو",
    floor: "طابق",
    ownership: "نوع الملكية",
    view_on_map: "عرض على الخريطة",
    call: "اتصال",
    whatsapp: "واتساب",
    price_range: "السعر الأقصى",
    area_range: "المساحة القصوى",
    floor_number: "رقم الطابق",
    all_floors: "كل الطوابق",
    governorate: "المحافظة",
    all_governorates: "كل المحافظات",
    syp: "ل.س",
    usd: "دولار",
    reset_filters: "إعادة تعيين",
    no_results: "لا توجد نتائج مطابقة للبحث",

    cargo_type: "نوع الحمولة",
    truck_size: "حجم الشاحنة",
    route_from: "من",
    route_to: "إلى",

    per_night: "لليلة الواحدة",
    book_now: "احجز الآن",
    booking_details: "تفاصيل الحجز",
    number_of_days: "عدد الأيام",
    select_services: "خدمات إضافية",
    total: "الإجمالي",
    confirm_booking: "تأكيد الحجز",

    plan_trip: "خطط لرحلتك",
    agencies_title: "مكاتب سياحية تنظم رحلات إلى",

    book_appointment: "حجز موعد",
    working_hours: "أوقات الدوام",
    specialty: "الاختصاص",
    all_specialties: "كل الاختصاصات",

    government_title: "الخدمات الحكومية",
    government_description: "سدد فواتير الكهرباء والماء والاتصالات ومخالفات السير من مكانك",
    pay_now: "ادفع الآن",
    select_company: "اختر الشركة",
    payment_title: "دفع فاتورة",
    phone_number: "رقم الهاتف",
    invoice_number: "رقم الفاتورة",
    inquire: "استعلام",
    confirm_payment: "تأكيد الدفع",
    loading: "جاري الاستعلام...",
    bill_amount: "قيمة الفاتورة",
    amount: "المبلغ",

    current_balance: "الرصيد الحالي",
    add_funds: "إيداع",
    withdraw: "سحب",
    bank_name: "بنك الشام",
    account_number: "رقم الحساب",
    recent_transactions: "آخر الحركات",
    deposit_from_bank: "حوالة واردة من البنك",
    payment_to_store: "دفع لمتجر",
    atm_withdrawal: "سحب من الصراف الآلي",

    marketing_title: "التسويق والإعلان",
    marketing_description: "أعلن عن منتجاتك وخدماتك وصل إلى آلاف الزبائن",
    contact_us: "تواصل معنا",

    payment_success: "تمت عملية الدفع بنجاح",
    booking_success: "تم الحجز بنجاح",
    invalid_mobile: "يرجى إدخال رقم هاتف صحيح",
    empty_invoice: "يرجى إدخال رقم الفاتورة",
};

pub static EN: Strings = Strings {
    app_name: "Souq Directory",
    tagline: "All services in one place",
    switch_language: "العربية",
    footer_rights: "All rights reserved",

    nav_home: "Home",
    nav_real_estate: "Real Estate",
    nav_transportation: "Transportation",
    nav_hotels: "Hotels",
    nav_tourism: "Tourism",
    nav_medical: "Medical",
    nav_government: "Government Services",
    nav_marketing: "Marketing",
    nav_account: "My Account",

    desc_real_estate: "Buy, sell and rent property across all governorates",
    desc_transportation: "Freight and cargo companies, domestic and abroad",
    desc_hotels: "Book your stay at the finest hotels and resorts",
    desc_tourism: "Discover historic landmarks and tourist sites",
    desc_medical: "Find doctors and book appointments with ease",
    desc_government: "Pay your government bills online",
    desc_marketing: "Promote your business through our platform",

    filters_title: "Filter Results",
    for_sale: "For Sale",
    for_rent: "For Rent",
    beds: "beds",
    baths: "baths",
    basement: "Basement",
    floor: "Floor",
    ownership: "Ownership",
    view_on_map: "View on Map",
    call: "Call",
    whatsapp: "WhatsApp",
    price_range: "Max Price",
    area_range: "Max Area",
    floor_number: "Floor Number",
    all_floors: "All Floors",
    governorate: "Governorate",
    all_governorates: "All Governorates",
    syp: "SYP",
    usd: "USD",
    reset_filters: "Reset",
    no_results: "No results match your search",

    cargo_type: "Cargo Type",
    truck_size: "Truck Size",
    route_from: "From",
    route_to: "To",

    per_night: "per night",
    book_now: "Book Now",
    booking_details: "Booking Details",
    number_of_days: "Number of Days",
    select_services: "Extra Services",
    total: "Total",
    confirm_booking: "Confirm Booking",

    plan_trip: "Plan a Trip",
    agencies_title: "Agencies organizing trips to",

    book_appointment: "Book Appointment",
    working_hours: "Working Hours",
    specialty: "Specialty",
    all_specialties: "All Specialties",

    government_title: "Government Services",
    government_description: "Pay electricity, water, telecom bills and traffic fines from anywhere",
    pay_now: "Pay Now",
    select_company: "Select Company",
    payment_title: "Pay Bill",
    phone_number: "Phone Number",
    invoice_number: "Invoice Number",
    inquire: "Inquire",
    confirm_payment: "Confirm Payment",
    loading: "Looking up your bill...",
    bill_amount: "Bill Amount",
    amount: "Amount",

    current_balance: "Current Balance",
    add_funds: "Add Funds",
    withdraw: "Withdraw",
    bank_name: "Bank of Sham",
    account_number: "Account Number",
    recent_transactions: "Recent Transactions",
    deposit_from_bank: "Incoming bank transfer",
    payment_to_store: "Payment to store",
    atm_withdrawal: "ATM withdrawal",

    marketing_title: "Marketing & Advertising",
    marketing_description: "Advertise your products and services to thousands of customers",
    contact_us: "Contact Us",

    payment_success: "Payment completed successfully",
    booking_success: "Booking confirmed",
    invalid_mobile: "Please enter a valid phone number",
    empty_invoice: "Please enter an invoice number",
};

pub fn strings(locale: Locale) -> &'static Strings {
    match locale {
        Locale::Ar => &AR,
        Locale::En => &EN,
    }
}

pub fn route_name(locale: Locale, route: Route) -> &'static str {
    let t = strings(locale);
    match route {
        Route::Home => t.nav_home,
        Route::RealEstate => t.nav_real_estate,
        Route::Transportation => t.nav_transportation,
        Route::Hotels => t.nav_hotels,
        Route::Tourism => t.nav_tourism,
        Route::Medical => t.nav_medical,
        Route::Government => t.nav_government,
        Route::Marketing => t.nav_marketing,
        Route::Account => t.nav_account,
    }
}

pub fn governorate_name(locale: Locale, g: Governorate) -> &'static str {
    match locale {
        Locale::Ar => match g {
            Governorate::Damascus => "دمشق",
            Governorate::RifDimashq => "ريف دمشق",
            Governorate::Quneitra => "القنيطرة",
            Governorate::Daraa => "درعا",
            Governorate::Suwayda => "السويداء",
            Governorate::Homs => "حمص",
            Governorate::Tartus => "طرطوس",
            Governorate::Latakia => "اللاذقية",
            Governorate::Hama => "حماة",
            Governorate::Idlib => "إدلب",
            Governorate::Aleppo => "حلب",
            Governorate::Raqqa => "الرقة",
            Governorate::DeirEzZor => "دير الزور",
            Governorate::Hasakah => "الحسكة",
        },
        Locale::En => match g {
            Governorate::Damascus => "Damascus",
            Governorate::RifDimashq => "Rif Dimashq",
            Governorate::Quneitra => "Quneitra",
            Governorate::Daraa => "Daraa",
            Governorate::Suwayda => "As-Suwayda",
            Governorate::Homs => "Homs",
            Governorate::Tartus => "Tartus",
            Governorate::Latakia => "Latakia",
            Governorate::Hama => "Hama",
            Governorate::Idlib => "Idlib",
            Governorate::Aleppo => "Aleppo",
            Governorate::Raqqa => "Raqqa",
            Governorate::DeirEzZor => "Deir ez-Zor",
            Governorate::Hasakah => "Al-Hasakah",
        },
    }
}

pub fn specialty_name(locale: Locale, s: Specialty) -> &'static str {
    match locale {
        Locale::Ar => match s {
            Specialty::Cardiology => "أمراض القلب",
            Specialty::Dermatology => "الأمراض الجلدية",
            Specialty::Pediatrics => "طب الأطفال",
            Specialty::Neurology => "طب الأعصاب",
        },
        Locale::En => match s {
            Specialty::Cardiology => "Cardiology",
            Specialty::Dermatology => "Dermatology",
            Specialty::Pediatrics => "Pediatrics",
            Specialty::Neurology => "Neurology",
        },
    }
}

pub fn truck_size_name(locale: Locale, size: TruckSize) -> &'static str {
    match locale {
        Locale::Ar => match size {
            TruckSize::Small => "صغيرة",
            TruckSize::Medium => "متوسطة",
            TruckSize::Large => "كبيرة",
        },
        Locale::En => match size {
            TruckSize::Small => "Small",
            TruckSize::Medium => "Medium",
            TruckSize::Large => "Large",
        },
    }
}

pub fn property_kind_name(locale: Locale, kind: PropertyKind) -> &'static str {
    let t = strings(locale);
    match kind {
        PropertyKind::Sale => t.for_sale,
        PropertyKind::Rent => t.for_rent,
    }
}

pub fn service_name(locale: Locale, service: ServiceKind) -> &'static str {
    match locale {
        Locale::Ar => match service {
            ServiceKind::Electricity => "فاتورة الكهرباء",
            ServiceKind::Water => "فاتورة الماء",
            ServiceKind::Telecom => "فواتير الاتصالات",
            ServiceKind::TrafficFines => "مخالفات السير",
        },
        Locale::En => match service {
            ServiceKind::Electricity => "Electricity Bill",
            ServiceKind::Water => "Water Bill",
            ServiceKind::Telecom => "Telecom Bills",
            ServiceKind::TrafficFines => "Traffic Fines",
        },
    }
}

pub fn provider_name(locale: Locale, provider: TelecomProvider) -> &'static str {
    match locale {
        Locale::Ar => match provider {
            TelecomProvider::Syriatel => "سيريتل",
            TelecomProvider::Mtn => "إم تي إن",
            TelecomProvider::SyrianTelecom => "السورية للاتصالات",
        },
        Locale::En => match provider {
            TelecomProvider::Syriatel => "Syriatel",
            TelecomProvider::Mtn => "MTN",
            TelecomProvider::SyrianTelecom => "Syrian Telecom",
        },
    }
}

pub fn extra_service_name(locale: Locale, service: ExtraService) -> &'static str {
    match locale {
        Locale::Ar => match service {
            ExtraService::Breakfast => "فطور",
            ExtraService::Wifi => "واي فاي",
            ExtraService::Pool => "مسبح",
            ExtraService::Gym => "نادي رياضي",
        },
        Locale::En => match service {
            ExtraService::Breakfast => "Breakfast",
            ExtraService::Wifi => "Wi-Fi",
            ExtraService::Pool => "Pool",
            ExtraService::Gym => "Gym",
        },
    }
}

pub fn transaction_kind_name(locale: Locale, kind: TransactionKind) -> &'static str {
    match locale {
        Locale::Ar => match kind {
            TransactionKind::Deposit => "إيداع",
            TransactionKind::Withdrawal => "سحب",
            TransactionKind::Payment => "دفع",
        },
        Locale::En => match kind {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::Payment => "Payment",
        },
    }
}

/// Ledger rows reuse a fixed description per transaction kind.
pub fn transaction_description(locale: Locale, kind: TransactionKind) -> &'static str {
    let t = strings(locale);
    match kind {
        TransactionKind::Deposit => t.deposit_from_bank,
        TransactionKind::Withdrawal => t.atm_withdrawal,
        TransactionKind::Payment => t.payment_to_store,
    }
}

pub fn notice_text(locale: Locale, notice: Notice) -> &'static str {
    let t = strings(locale);
    match notice {
        Notice::PaymentSuccess => t.payment_success,
        Notice::BookingSuccess => t.booking_success,
        Notice::InvalidMobile => t.invalid_mobile,
        Notice::EmptyInvoice => t.empty_invoice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_governorate_has_a_name_in_both_languages() {
        for g in Governorate::ALL {
            assert!(!governorate_name(Locale::Ar, g).is_empty());
            assert!(!governorate_name(Locale::En, g).is_empty());
        }
    }

    #[test]
    fn the_switcher_always_offers_the_other_language() {
        assert_eq!(strings(Locale::Ar).switch_language, "English");
        assert_eq!(strings(Locale::En).switch_language, "العربية");
    }
}
