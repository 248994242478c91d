use souq_core::filter::{project, PropertyFilter, MIN_AREA_CEILING, MIN_PRICE_CEILING_USD};
use souq_core::{Currency, Governorate, Money, Property, PropertyKind};

fn make_property(id: u32, price: Money) -> Property {
    Property {
        id,
        title: format!("listing {id}"),
        kind: PropertyKind::Sale,
        price,
        location: String::new(),
        governorate: Governorate::Damascus,
        image_url: String::new(),
        beds: 2,
        baths: 1,
        area: 120,
        floor: 1,
        ownership: String::new(),
        maps_link: String::new(),
        contact_number: String::new(),
    }
}

#[test]
fn switching_currency_discards_the_chosen_threshold() {
    let catalog = vec![
        make_property(1, Money::syp(900_000_000)),
        make_property(2, Money::syp(1_200_000)),
        make_property(3, Money::usd(90_000)),
        make_property(4, Money::usd(150_000)),
    ];
    let mut filter = PropertyFilter::for_catalog(&catalog);

    filter.price_max = 2_000_000;
    filter.set_currency(Currency::Usd);

    // The threshold is the USD catalog ceiling, not the stale 2,000,000.
    assert_eq!(filter.price_max, MIN_PRICE_CEILING_USD);
    let selected: Vec<u32> = project(&catalog, &filter).iter().map(|p| p.id).collect();
    assert_eq!(selected, vec![3, 4]);
}

#[test]
fn reselecting_the_same_currency_keeps_the_threshold() {
    let catalog = vec![make_property(1, Money::syp(5_000_000))];
    let mut filter = PropertyFilter::for_catalog(&catalog);

    filter.price_max = 42;
    filter.set_currency(Currency::Syp);
    assert_eq!(filter.price_max, 42);
}

#[test]
fn switching_back_restores_the_original_currency_ceiling() {
    let catalog = vec![
        make_property(1, Money::syp(2_000_000_000)),
        make_property(2, Money::usd(90_000)),
    ];
    let mut filter = PropertyFilter::for_catalog(&catalog);
    assert_eq!(filter.price_max, 2_000_000_000);

    filter.set_currency(Currency::Usd);
    filter.set_currency(Currency::Syp);
    assert_eq!(filter.price_max, 2_000_000_000);
}

#[test]
fn ceilings_fall_back_to_minimums_on_a_sparse_catalog() {
    let catalog = vec![make_property(1, Money::syp(10_000))];
    let filter = PropertyFilter::for_catalog(&catalog);

    assert_eq!(filter.price_max, souq_core::filter::MIN_PRICE_CEILING_SYP);
    assert_eq!(filter.area_ceiling(), MIN_AREA_CEILING);
}
