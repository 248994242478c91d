use souq_app_core::domain::{Locale, Notice, PageState, Route};
use souq_app_core::modal::ExtraService;
use souq_app_core::SouqApplication;
use souq_core::filter::Selector;
use souq_core::{Currency, Governorate};

#[test]
fn the_app_starts_in_arabic_on_the_home_page() {
    let app = SouqApplication::new();
    assert_eq!(app.state.locale, Locale::Ar);
    assert!(app.state.locale.is_rtl());
    assert_eq!(app.state.route, Route::Home);
}

#[test]
fn the_locale_survives_navigation_but_filters_do_not() {
    let mut app = SouqApplication::new();
    app.toggle_locale();
    assert_eq!(app.state.locale, Locale::En);

    app.navigate(Route::RealEstate);
    let ceiling = match &app.state.page {
        PageState::RealEstate(page) => page.filter.price_ceiling(),
        _ => panic!("expected the real estate page"),
    };

    app.set_property_price_max(0);
    app.set_property_governorate(Selector::Only(Governorate::Aleppo));
    app.navigate(Route::Home);
    app.navigate(Route::RealEstate);

    match &app.state.page {
        PageState::RealEstate(page) => {
            assert_eq!(page.filter.price_max, ceiling);
            assert_eq!(page.filter.governorate, Selector::All);
        }
        _ => panic!("expected the real estate page"),
    }
    assert_eq!(app.state.locale, Locale::En);
}

#[test]
fn switching_currency_snaps_the_threshold_to_the_new_ceiling() {
    let mut app = SouqApplication::new();
    app.navigate(Route::RealEstate);

    app.set_property_price_max(1_000);
    app.set_property_currency(Currency::Usd);

    match &app.state.page {
        PageState::RealEstate(page) => {
            assert_eq!(page.filter.currency, Currency::Usd);
            assert_eq!(page.filter.price_max, page.filter.price_ceiling());
        }
        _ => panic!("expected the real estate page"),
    }
}

#[test]
fn confirming_a_hotel_booking_clears_the_dialog_and_toasts() {
    let mut app = SouqApplication::new();
    app.navigate(Route::Hotels);
    app.open_hotel_booking(3);
    app.set_booking_days(4);
    app.toggle_booking_service(ExtraService::Breakfast);
    app.confirm_hotel_booking();

    match &app.state.page {
        PageState::Hotels(page) => assert!(page.booking.is_none()),
        _ => panic!("expected the hotels page"),
    }
    assert_eq!(app.state.toast, Some(Notice::BookingSuccess));
}

#[test]
fn booking_an_unknown_hotel_is_ignored() {
    let mut app = SouqApplication::new();
    app.navigate(Route::Hotels);
    app.open_hotel_booking(999);

    match &app.state.page {
        PageState::Hotels(page) => assert!(page.booking.is_none()),
        _ => panic!("expected the hotels page"),
    }
}

#[test]
fn confirming_a_doctor_appointment_toasts_success() {
    let mut app = SouqApplication::new();
    app.navigate(Route::Medical);
    app.open_doctor_booking(2);
    app.confirm_doctor_booking();

    match &app.state.page {
        PageState::Medical(page) => assert!(page.booking_doctor.is_none()),
        _ => panic!("expected the medical page"),
    }
    assert_eq!(app.state.toast, Some(Notice::BookingSuccess));
}

#[test]
fn the_site_carousel_wraps_in_both_directions() {
    let mut app = SouqApplication::new();
    app.navigate(Route::Tourism);

    // Site 4 ships with two photos.
    app.step_site_image(4, -1);
    match &app.state.page {
        PageState::Tourism(page) => assert_eq!(page.image_index.get(&4), Some(&1)),
        _ => panic!("expected the tourism page"),
    }

    app.step_site_image(4, 1);
    match &app.state.page {
        PageState::Tourism(page) => assert_eq!(page.image_index.get(&4), Some(&0)),
        _ => panic!("expected the tourism page"),
    }
}

#[test]
fn navigation_dismisses_a_lingering_toast() {
    let mut app = SouqApplication::new();
    app.navigate(Route::Medical);
    app.open_doctor_booking(1);
    app.confirm_doctor_booking();
    assert!(app.state.toast.is_some());

    app.navigate(Route::Home);
    assert!(app.state.toast.is_none());
}
