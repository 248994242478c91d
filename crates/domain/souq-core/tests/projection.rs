use souq_core::filter::{project, DoctorFilter, PropertyFilter, Selector, SiteFilter};
use souq_core::{Currency, Doctor, Governorate, Money, Property, PropertyKind, Specialty};

// --- Helper functions to build catalogs easily ---

fn make_property(id: u32, price: Money, area: u32, floor: u8, governorate: Governorate) -> Property {
    Property {
        id,
        title: format!("listing {id}"),
        kind: PropertyKind::Sale,
        price,
        location: String::new(),
        governorate,
        image_url: String::new(),
        beds: 3,
        baths: 2,
        area,
        floor,
        ownership: String::new(),
        maps_link: String::new(),
        contact_number: String::new(),
    }
}

fn make_doctor(id: u32, specialty: Specialty, governorate: Governorate) -> Doctor {
    Doctor {
        id,
        name: format!("doctor {id}"),
        specialty,
        governorate,
        address: String::new(),
        image_url: String::new(),
        maps_link: String::new(),
        contact_number: String::new(),
        working_hours: String::new(),
        bio: String::new(),
    }
}

fn ids(selected: &[&Property]) -> Vec<u32> {
    selected.iter().map(|p| p.id).collect()
}

// --- Tests ---

#[test]
fn default_filter_projects_full_catalog_in_order() {
    let catalog = vec![
        make_property(1, Money::syp(900_000_000), 550, 0, Governorate::Damascus),
        make_property(2, Money::syp(2_500_000), 180, 3, Governorate::Aleppo),
        make_property(3, Money::syp(1_200_000), 250, 0, Governorate::Homs),
    ];
    let filter = PropertyFilter::for_catalog(&catalog);

    let selected = project(&catalog, &filter);
    assert_eq!(ids(&selected), vec![1, 2, 3]);
}

#[test]
fn projection_is_an_order_preserving_subsequence() {
    let catalog = vec![
        make_property(1, Money::syp(10), 500, 1, Governorate::Damascus),
        make_property(2, Money::syp(20), 100, 2, Governorate::Aleppo),
        make_property(3, Money::syp(30), 500, 3, Governorate::Damascus),
        make_property(4, Money::syp(40), 100, 4, Governorate::Homs),
    ];
    let mut filter = PropertyFilter::for_catalog(&catalog);
    filter.area_max = 200;

    let selected = project(&catalog, &filter);
    assert_eq!(ids(&selected), vec![2, 4]);

    // Every surviving id appears in the catalog's relative order.
    let catalog_order: Vec<u32> = catalog.iter().map(|p| p.id).collect();
    let mut cursor = 0;
    for id in ids(&selected) {
        let pos = catalog_order[cursor..]
            .iter()
            .position(|c| *c == id)
            .expect("projected id must exist downstream in the catalog");
        cursor += pos + 1;
    }
}

#[test]
fn projection_is_idempotent() {
    let catalog = vec![
        make_property(1, Money::syp(900_000_000), 550, 0, Governorate::Damascus),
        make_property(2, Money::usd(90_000), 220, 5, Governorate::Latakia),
        make_property(3, Money::syp(1_200_000), 250, 0, Governorate::Homs),
    ];
    let mut filter = PropertyFilter::for_catalog(&catalog);
    filter.governorate = Selector::Only(Governorate::Homs);

    let first = ids(&project(&catalog, &filter));
    let second = ids(&project(&catalog, &filter));
    assert_eq!(first, second);
}

#[test]
fn price_threshold_is_an_inclusive_upper_bound() {
    let catalog = vec![
        make_property(1, Money::syp(2_000_000), 100, 1, Governorate::Damascus),
        make_property(2, Money::syp(2_000_001), 100, 1, Governorate::Damascus),
    ];
    let mut filter = PropertyFilter::for_catalog(&catalog);
    filter.price_max = 2_000_000;

    assert_eq!(ids(&project(&catalog, &filter)), vec![1]);
}

#[test]
fn currency_gate_excludes_other_currencies_outright() {
    // Two SYP records, threshold 2,000,000 selects only the cheaper one;
    // the USD record never competes against the SYP bound.
    let catalog = vec![
        make_property(1, Money::syp(900_000_000), 550, 0, Governorate::Damascus),
        make_property(2, Money::usd(90_000), 220, 5, Governorate::Latakia),
        make_property(3, Money::syp(1_200_000), 250, 0, Governorate::Homs),
    ];
    let mut filter = PropertyFilter::for_catalog(&catalog);
    assert_eq!(filter.currency, Currency::Syp);
    filter.price_max = 2_000_000;

    assert_eq!(ids(&project(&catalog, &filter)), vec![3]);
}

#[test]
fn basement_floor_zero_is_selectable() {
    let catalog = vec![
        make_property(1, Money::syp(100), 100, 0, Governorate::Damascus),
        make_property(2, Money::syp(100), 100, 3, Governorate::Damascus),
    ];
    let mut filter = PropertyFilter::for_catalog(&catalog);
    filter.floor = Selector::Only(0);

    assert_eq!(ids(&project(&catalog, &filter)), vec![1]);
}

#[test]
fn filter_reset_restores_the_identity_element() {
    let catalog = vec![
        make_property(1, Money::syp(500), 400, 2, Governorate::Hama),
        make_property(2, Money::syp(900), 300, 4, Governorate::Idlib),
    ];
    let mut filter = PropertyFilter::for_catalog(&catalog);
    filter.price_max = 1;
    filter.area_max = 1;
    filter.floor = Selector::Only(7);
    filter.governorate = Selector::Only(Governorate::Raqqa);
    assert!(project(&catalog, &filter).is_empty());

    filter.reset();
    assert_eq!(ids(&project(&catalog, &filter)), vec![1, 2]);
}

#[test]
fn cardiology_filter_selects_exactly_the_cardiologists() {
    let catalog = vec![
        make_doctor(1, Specialty::Cardiology, Governorate::Damascus),
        make_doctor(2, Specialty::Dermatology, Governorate::Aleppo),
        make_doctor(3, Specialty::Pediatrics, Governorate::Damascus),
        make_doctor(4, Specialty::Neurology, Governorate::Homs),
        make_doctor(5, Specialty::Cardiology, Governorate::Latakia),
    ];
    let filter = DoctorFilter {
        specialty: Selector::Only(Specialty::Cardiology),
        governorate: Selector::All,
    };

    let selected: Vec<u32> = project(&catalog, &filter).iter().map(|d| d.id).collect();
    assert_eq!(selected, vec![1, 5]);
}

#[test]
fn doctor_facets_combine_with_logical_and() {
    let catalog = vec![
        make_doctor(1, Specialty::Cardiology, Governorate::Damascus),
        make_doctor(2, Specialty::Cardiology, Governorate::Latakia),
        make_doctor(3, Specialty::Neurology, Governorate::Damascus),
    ];
    let filter = DoctorFilter {
        specialty: Selector::Only(Specialty::Cardiology),
        governorate: Selector::Only(Governorate::Damascus),
    };

    let selected: Vec<u32> = project(&catalog, &filter).iter().map(|d| d.id).collect();
    assert_eq!(selected, vec![1]);
}

#[test]
fn impossible_constraints_yield_an_empty_projection() {
    let catalog = vec![
        make_doctor(1, Specialty::Cardiology, Governorate::Damascus),
        make_doctor(2, Specialty::Dermatology, Governorate::Aleppo),
    ];
    let filter = DoctorFilter {
        specialty: Selector::Only(Specialty::Pediatrics),
        governorate: Selector::All,
    };

    assert!(project(&catalog, &filter).is_empty());
}

#[test]
fn site_filter_defaults_to_all_governorates() {
    use souq_core::TouristSite;

    let catalog = vec![
        TouristSite {
            id: 1,
            name: "site a".into(),
            location: String::new(),
            governorate: Governorate::Damascus,
            description: String::new(),
            image_urls: vec![],
            maps_link: String::new(),
        },
        TouristSite {
            id: 2,
            name: "site b".into(),
            location: String::new(),
            governorate: Governorate::Homs,
            description: String::new(),
            image_urls: vec![],
            maps_link: String::new(),
        },
    ];

    let all = SiteFilter::default();
    assert_eq!(project(&catalog, &all).len(), 2);

    let homs = SiteFilter {
        governorate: Selector::Only(Governorate::Homs),
    };
    let selected: Vec<u32> = project(&catalog, &homs).iter().map(|s| s.id).collect();
    assert_eq!(selected, vec![2]);
}
