use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod filter;
pub mod links;
pub mod stub;
pub mod validate;

pub type ListingId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Syp,
    Usd,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Syp, Currency::Usd];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Syp => "SYP",
            Currency::Usd => "USD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: u64,
    pub currency: Currency,
}

impl Money {
    pub fn syp(amount: u64) -> Self {
        Self {
            amount,
            currency: Currency::Syp,
        }
    }

    pub fn usd(amount: u64) -> Self {
        Self {
            amount,
            currency: Currency::Usd,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Governorate {
    Damascus,
    RifDimashq,
    Quneitra,
    Daraa,
    Suwayda,
    Homs,
    Tartus,
    Latakia,
    Hama,
    Idlib,
    Aleppo,
    Raqqa,
    DeirEzZor,
    Hasakah,
}

impl Governorate {
    pub const ALL: [Governorate; 14] = [
        Governorate::Damascus,
        Governorate::RifDimashq,
        Governorate::Quneitra,
        Governorate::Daraa,
        Governorate::Suwayda,
        Governorate::Homs,
        Governorate::Tartus,
        Governorate::Latakia,
        Governorate::Hama,
        Governorate::Idlib,
        Governorate::Aleppo,
        Governorate::Raqqa,
        Governorate::DeirEzZor,
        Governorate::Hasakah,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Governorate::Damascus => "damascus",
            Governorate::RifDimashq => "rif_dimashq",
            Governorate::Quneitra => "quneitra",
            Governorate::Daraa => "daraa",
            Governorate::Suwayda => "suwayda",
            Governorate::Homs => "homs",
            Governorate::Tartus => "tartus",
            Governorate::Latakia => "latakia",
            Governorate::Hama => "hama",
            Governorate::Idlib => "idlib",
            Governorate::Aleppo => "aleppo",
            Governorate::Raqqa => "raqqa",
            Governorate::DeirEzZor => "deir_ez_zor",
            Governorate::Hasakah => "hasakah",
        }
    }

    pub fn from_key(key: &str) -> Option<Governorate> {
        Governorate::ALL.into_iter().find(|g| g.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Sale,
    Rent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruckSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialty {
    Cardiology,
    Dermatology,
    Pediatrics,
    Neurology,
}

impl Specialty {
    pub const ALL: [Specialty; 4] = [
        Specialty::Cardiology,
        Specialty::Dermatology,
        Specialty::Pediatrics,
        Specialty::Neurology,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Payment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: ListingId,
    pub title: String,
    pub kind: PropertyKind,
    pub price: Money,
    pub location: String,
    pub governorate: Governorate,
    pub image_url: String,
    pub beds: u8,
    pub baths: u8,
    pub area: u32,
    /// 0 means basement.
    pub floor: u8,
    pub ownership: String,
    pub maps_link: String,
    pub contact_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    pub id: ListingId,
    pub company_name: String,
    pub cargo_type: String,
    pub truck_size: TruckSize,
    pub price: Money,
    pub origin: String,
    pub destination: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub id: ListingId,
    pub name: String,
    pub location: String,
    pub price_per_night: u64,
    pub rating: f32,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TouristSite {
    pub id: ListingId,
    pub name: String,
    pub location: String,
    pub governorate: Governorate,
    pub description: String,
    pub image_urls: Vec<String>,
    pub maps_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelAgency {
    pub id: ListingId,
    pub name: String,
    pub logo_url: String,
    pub contact_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: ListingId,
    pub name: String,
    pub specialty: Specialty,
    pub governorate: Governorate,
    pub address: String,
    pub image_url: String,
    pub maps_link: String,
    pub contact_number: String,
    pub working_hours: String,
    pub bio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: ListingId,
    pub kind: TransactionKind,
    pub amount: u64,
    pub date: NaiveDate,
}
