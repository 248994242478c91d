use crate::{Currency, Doctor, Governorate, Property, Specialty, TouristSite};

/// Floors below which a derived ceiling never drops, so sliders stay usable
/// on a sparse catalog.
pub const MIN_PRICE_CEILING_SYP: u64 = 1_000_000_000;
pub const MIN_PRICE_CEILING_USD: u64 = 200_000;
pub const MIN_AREA_CEILING: u32 = 600;

/// An "all or specific value" categorical constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selector<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(v) => v == value,
        }
    }
}

pub trait CatalogFilter<R> {
    fn matches(&self, record: &R) -> bool;
}

/// Order-preserving selection: the result is always a subsequence of
/// `records`, never a reordering, and may be empty.
pub fn project<'a, R, F>(records: &'a [R], filter: &F) -> Vec<&'a R>
where
    F: CatalogFilter<R>,
{
    records.iter().filter(|r| filter.matches(r)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PriceCeilings {
    syp: u64,
    usd: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyFilter {
    pub currency: Currency,
    pub price_max: u64,
    pub area_max: u32,
    pub floor: Selector<u8>,
    pub governorate: Selector<Governorate>,
    ceilings: PriceCeilings,
    area_ceiling: u32,
}

impl PropertyFilter {
    /// Unconstrained filter over `catalog`, with slider ceilings derived
    /// from the live records rather than hard-coded.
    pub fn for_catalog(catalog: &[Property]) -> Self {
        let ceiling = |currency: Currency, floor: u64| {
            catalog
                .iter()
                .filter(|p| p.price.currency == currency)
                .map(|p| p.price.amount)
                .max()
                .unwrap_or(0)
                .max(floor)
        };
        let ceilings = PriceCeilings {
            syp: ceiling(Currency::Syp, MIN_PRICE_CEILING_SYP),
            usd: ceiling(Currency::Usd, MIN_PRICE_CEILING_USD),
        };
        let area_ceiling = catalog
            .iter()
            .map(|p| p.area)
            .max()
            .unwrap_or(0)
            .max(MIN_AREA_CEILING);

        Self {
            currency: Currency::Syp,
            price_max: ceilings.syp,
            area_max: area_ceiling,
            floor: Selector::All,
            governorate: Selector::All,
            ceilings,
            area_ceiling,
        }
    }

    pub fn price_ceiling(&self) -> u64 {
        match self.currency {
            Currency::Syp => self.ceilings.syp,
            Currency::Usd => self.ceilings.usd,
        }
    }

    pub fn area_ceiling(&self) -> u32 {
        self.area_ceiling
    }

    /// Switching currency discards the chosen price threshold and restores
    /// the new currency's catalog ceiling. Selecting the current currency
    /// again is a no-op.
    pub fn set_currency(&mut self, currency: Currency) {
        if self.currency == currency {
            return;
        }
        self.currency = currency;
        self.price_max = self.price_ceiling();
    }

    /// Identity element: every threshold back to its ceiling, every
    /// selector back to `All`. The currency selection is kept.
    pub fn reset(&mut self) {
        self.price_max = self.price_ceiling();
        self.area_max = self.area_ceiling;
        self.floor = Selector::All;
        self.governorate = Selector::All;
    }
}

impl CatalogFilter<Property> for PropertyFilter {
    fn matches(&self, p: &Property) -> bool {
        p.price.currency == self.currency
            && p.price.amount <= self.price_max
            && p.area <= self.area_max
            && self.floor.admits(&p.floor)
            && self.governorate.admits(&p.governorate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DoctorFilter {
    pub specialty: Selector<Specialty>,
    pub governorate: Selector<Governorate>,
}

impl DoctorFilter {
    pub fn reset(&mut self) {
        *self = DoctorFilter::default();
    }
}

impl CatalogFilter<Doctor> for DoctorFilter {
    fn matches(&self, d: &Doctor) -> bool {
        self.specialty.admits(&d.specialty) && self.governorate.admits(&d.governorate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SiteFilter {
    pub governorate: Selector<Governorate>,
}

impl SiteFilter {
    pub fn reset(&mut self) {
        *self = SiteFilter::default();
    }
}

impl CatalogFilter<TouristSite> for SiteFilter {
    fn matches(&self, s: &TouristSite) -> bool {
        self.governorate.admits(&s.governorate)
    }
}
