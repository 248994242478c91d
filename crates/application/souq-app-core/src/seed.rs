//! In-memory catalog data. The directory ships with a fixed set of listings
//! and an example bank account; nothing here is fetched or persisted.

use chrono::NaiveDate;
use souq_core::{
    Doctor, Governorate, Hotel, Money, Property, PropertyKind, Shipment, Specialty, TouristSite,
    Transaction, TransactionKind, TravelAgency, TruckSize,
};

use crate::domain::AccountPage;

pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: 1,
            title: "فيلا في المالكي".into(),
            kind: PropertyKind::Sale,
            price: Money::syp(900_000_000),
            location: "دمشق, سوريا".into(),
            governorate: Governorate::Damascus,
            image_url: "https://picsum.photos/seed/villa1/600/400".into(),
            beds: 5,
            baths: 6,
            area: 550,
            floor: 0,
            ownership: "طابو أخضر".into(),
            maps_link: "https://goo.gl/maps/xyz123".into(),
            contact_number: "+963912345671".into(),
        },
        Property {
            id: 2,
            title: "شقة في الشهباء".into(),
            kind: PropertyKind::Rent,
            price: Money::syp(2_500_000),
            location: "حلب, سوريا".into(),
            governorate: Governorate::Aleppo,
            image_url: "https://picsum.photos/seed/apt1/600/400".into(),
            beds: 3,
            baths: 2,
            area: 180,
            floor: 3,
            ownership: "عقد إيجار سنوي".into(),
            maps_link: "https://goo.gl/maps/xyz123".into(),
            contact_number: "+963912345672".into(),
        },
        Property {
            id: 3,
            title: "شقة مطلة على البحر".into(),
            kind: PropertyKind::Sale,
            price: Money::usd(90_000),
            location: "اللاذقية, سوريا".into(),
            governorate: Governorate::Latakia,
            image_url: "https://picsum.photos/seed/apt2/600/400".into(),
            beds: 4,
            baths: 3,
            area: 220,
            floor: 5,
            ownership: "طابو أخضر".into(),
            maps_link: "https://goo.gl/maps/xyz123".into(),
            contact_number: "+963912345673".into(),
        },
        Property {
            id: 4,
            title: "منزل في حي الوعر".into(),
            kind: PropertyKind::Rent,
            price: Money::syp(1_200_000),
            location: "حمص, سوريا".into(),
            governorate: Governorate::Homs,
            image_url: "https://picsum.photos/seed/house1/600/400".into(),
            beds: 3,
            baths: 2,
            area: 250,
            floor: 0,
            ownership: "عقد إيجار سنوي".into(),
            maps_link: "https://goo.gl/maps/xyz123".into(),
            contact_number: "+963912345674".into(),
        },
        Property {
            id: 5,
            title: "طابق في مشروع دمر".into(),
            kind: PropertyKind::Sale,
            price: Money::usd(150_000),
            location: "دمشق, سوريا".into(),
            governorate: Governorate::RifDimashq,
            image_url: "https://picsum.photos/seed/penthouse/600/400".into(),
            beds: 4,
            baths: 5,
            area: 300,
            floor: 7,
            ownership: "حكم محكمة".into(),
            maps_link: "https://goo.gl/maps/xyz123".into(),
            contact_number: "+963912345675".into(),
        },
        Property {
            id: 6,
            title: "استوديو في باب توما".into(),
            kind: PropertyKind::Rent,
            price: Money::usd(250),
            location: "دمشق, سوريا".into(),
            governorate: Governorate::Damascus,
            image_url: "https://picsum.photos/seed/studio/600/400".into(),
            beds: 1,
            baths: 1,
            area: 75,
            floor: 2,
            ownership: "عقد إيجار سنوي".into(),
            maps_link: "https://goo.gl/maps/xyz123".into(),
            contact_number: "+963912345676".into(),
        },
    ]
}

pub fn shipments() -> Vec<Shipment> {
    vec![
        Shipment {
            id: 1,
            company_name: "شركة الفهد للنقل".into(),
            cargo_type: "مواد بناء".into(),
            truck_size: TruckSize::Large,
            price: Money::syp(5_000_000),
            origin: "ميناء اللاذقية".into(),
            destination: "دمشق".into(),
            image_url: "https://picsum.photos/seed/truck1/600/400".into(),
        },
        Shipment {
            id: 2,
            company_name: "النسر السريع للشحن".into(),
            cargo_type: "أثاث منزلي".into(),
            truck_size: TruckSize::Medium,
            price: Money::usd(200),
            origin: "حلب".into(),
            destination: "حمص".into(),
            image_url: "https://picsum.photos/seed/truck2/600/400".into(),
        },
        Shipment {
            id: 3,
            company_name: "نقل آمن".into(),
            cargo_type: "مواد غذائية مبردة".into(),
            truck_size: TruckSize::Small,
            price: Money::syp(1_500_000),
            origin: "معبر نصيب الحدودي".into(),
            destination: "درعا".into(),
            image_url: "https://picsum.photos/seed/truck3/600/400".into(),
        },
        Shipment {
            id: 4,
            company_name: "شحن الشام الدولي".into(),
            cargo_type: "ألبسة ومنسوجات".into(),
            truck_size: TruckSize::Large,
            price: Money::usd(350),
            origin: "دمشق".into(),
            destination: "بيروت".into(),
            image_url: "https://picsum.photos/seed/truck4/600/400".into(),
        },
        Shipment {
            id: 5,
            company_name: "نقل الخيرات".into(),
            cargo_type: "خضروات وفواكه".into(),
            truck_size: TruckSize::Medium,
            price: Money::syp(2_200_000),
            origin: "طرطوس".into(),
            destination: "حلب".into(),
            image_url: "https://picsum.photos/seed/truck5/600/400".into(),
        },
        Shipment {
            id: 6,
            company_name: "البرق للشحن".into(),
            cargo_type: "إلكترونيات".into(),
            truck_size: TruckSize::Small,
            price: Money::usd(120),
            origin: "مطار دمشق الدولي".into(),
            destination: "دمشق".into(),
            image_url: "https://picsum.photos/seed/truck6/600/400".into(),
        },
    ]
}

pub fn hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            id: 1,
            name: "فندق الفور سيزونز".into(),
            location: "دمشق, سوريا".into(),
            price_per_night: 800_000,
            rating: 5.0,
            image_url: "https://picsum.photos/seed/hotel1/600/400".into(),
        },
        Hotel {
            id: 2,
            name: "فندق شيراتون حلب".into(),
            location: "حلب, سوريا".into(),
            price_per_night: 650_000,
            rating: 4.8,
            image_url: "https://picsum.photos/seed/hotel2/600/400".into(),
        },
        Hotel {
            id: 3,
            name: "فندق بيت الوالي".into(),
            location: "دمشق القديمة, سوريا".into(),
            price_per_night: 550_000,
            rating: 4.7,
            image_url: "https://picsum.photos/seed/hotel3/600/400".into(),
        },
        Hotel {
            id: 4,
            name: "منتجع أفاميا روتانا".into(),
            location: "اللاذقية, سوريا".into(),
            price_per_night: 700_000,
            rating: 4.9,
            image_url: "https://picsum.photos/seed/hotel4/600/400".into(),
        },
        Hotel {
            id: 5,
            name: "فندق داما روز".into(),
            location: "دمشق, سوريا".into(),
            price_per_night: 600_000,
            rating: 4.5,
            image_url: "https://picsum.photos/seed/hotel5/600/400".into(),
        },
        Hotel {
            id: 6,
            name: "فندق السفير".into(),
            location: "حمص, سوريا".into(),
            price_per_night: 450_000,
            rating: 4.2,
            image_url: "https://picsum.photos/seed/hotel6/600/400".into(),
        },
    ]
}

pub fn tourist_sites() -> Vec<TouristSite> {
    vec![
        TouristSite {
            id: 1,
            name: "الجامع الأموي".into(),
            location: "دمشق القديمة".into(),
            governorate: Governorate::Damascus,
            description: "تحفة معمارية إسلامية في قلب دمشق القديمة، وواحد من أكبر وأقدم المساجد في العالم.".into(),
            image_urls: vec![
                "https://picsum.photos/seed/umayyad1/800/600".into(),
                "https://picsum.photos/seed/umayyad2/800/600".into(),
                "https://picsum.photos/seed/umayyad3/800/600".into(),
            ],
            maps_link: "https://www.google.com/maps/place/Umayyad+Mosque".into(),
        },
        TouristSite {
            id: 2,
            name: "مدينة تدمر الأثرية".into(),
            location: "بادية الشام".into(),
            governorate: Governorate::Homs,
            description: "تعرف باسم \"عروس الصحراء\"، وهي مدينة أثرية غنية بالمعابد والأعمدة والمدافن الرومانية.".into(),
            image_urls: vec![
                "https://picsum.photos/seed/palmyra1/800/600".into(),
                "https://picsum.photos/seed/palmyra2/800/600".into(),
                "https://picsum.photos/seed/palmyra3/800/600".into(),
            ],
            maps_link: "https://www.google.com/maps/place/Palmyra".into(),
        },
        TouristSite {
            id: 3,
            name: "قلعة حلب".into(),
            location: "وسط حلب القديمة".into(),
            governorate: Governorate::Aleppo,
            description: "من أقدم وأكبر القلاع في العالم، تتربع على تلة في وسط مدينة حلب القديمة.".into(),
            image_urls: vec![
                "https://picsum.photos/seed/aleppo1/800/600".into(),
                "https://picsum.photos/seed/aleppo2/800/600".into(),
                "https://picsum.photos/seed/aleppo3/800/600".into(),
            ],
            maps_link: "https://www.google.com/maps/place/Citadel+of+Aleppo".into(),
        },
        TouristSite {
            id: 4,
            name: "قلعة الحصن".into(),
            location: "غرب حمص".into(),
            governorate: Governorate::Homs,
            description: "أهم القلاع الصليبية وأكبرها حجماً وأفضلها حفظاً على الإطلاق، وتعتبر نموذجاً مثالياً للعمارة العسكرية.".into(),
            image_urls: vec![
                "https://picsum.photos/seed/krak1/800/600".into(),
                "https://picsum.photos/seed/krak2/800/600".into(),
            ],
            maps_link: "https://www.google.com/maps/place/Krak+des+Chevaliers".into(),
        },
        TouristSite {
            id: 5,
            name: "بصرى الشام".into(),
            location: "محافظة درعا".into(),
            governorate: Governorate::Daraa,
            description: "مدينة أثرية تاريخية تشتهر بمدرجها الروماني المحفوظ بشكل استثنائي والذي يتسع لـ 15,000 متفرج.".into(),
            image_urls: vec![
                "https://picsum.photos/seed/bosra1/800/600".into(),
                "https://picsum.photos/seed/bosra2/800/600".into(),
                "https://picsum.photos/seed/bosra3/800/600".into(),
            ],
            maps_link: "https://www.google.com/maps/place/Bosra".into(),
        },
        TouristSite {
            id: 6,
            name: "أوغاريت".into(),
            location: "قرب اللاذقية".into(),
            governorate: Governorate::Latakia,
            description: "مملكة قديمة وموقع أثري هام اكتشفت فيه أول أبجدية في التاريخ، وهي الأبجدية الأوغاريتية.".into(),
            image_urls: vec![
                "https://picsum.photos/seed/ugarit1/800/600".into(),
                "https://picsum.photos/seed/ugarit2/800/600".into(),
            ],
            maps_link: "https://www.google.com/maps/place/Ugarit".into(),
        },
    ]
}

pub fn travel_agencies() -> Vec<TravelAgency> {
    vec![
        TravelAgency {
            id: 1,
            name: "أجنحة الشام للسياحة".into(),
            logo_url: "https://picsum.photos/seed/agency1/100/100".into(),
            contact_number: "+963987654321".into(),
        },
        TravelAgency {
            id: 2,
            name: "السورية للسفر والسياحة".into(),
            logo_url: "https://picsum.photos/seed/agency2/100/100".into(),
            contact_number: "+963987654322".into(),
        },
        TravelAgency {
            id: 3,
            name: "مكتب زنوبيا السياحي".into(),
            logo_url: "https://picsum.photos/seed/agency3/100/100".into(),
            contact_number: "+963987654323".into(),
        },
        TravelAgency {
            id: 4,
            name: "نجمة الشرق للسياحة".into(),
            logo_url: "https://picsum.photos/seed/agency4/100/100".into(),
            contact_number: "+963987654324".into(),
        },
    ]
}

pub fn doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: 1,
            name: "د. سامر المصري".into(),
            specialty: Specialty::Cardiology,
            governorate: Governorate::Damascus,
            address: "مزة، فيلات شرقية".into(),
            image_url: "https://picsum.photos/seed/doc1/400/400".into(),
            maps_link: "#".into(),
            contact_number: "+963911111111".into(),
            working_hours: "السبت - الخميس | 5م - 9م".into(),
            bio: "استشاري أمراض القلب والشرايين. خبرة 20 عاماً في تشخيص وعلاج أمراض القلب.".into(),
        },
        Doctor {
            id: 2,
            name: "د. ريما الحسن".into(),
            specialty: Specialty::Dermatology,
            governorate: Governorate::Aleppo,
            address: "الفرقان، جانب جامع الرحمن".into(),
            image_url: "https://picsum.photos/seed/doc2/400/400".into(),
            maps_link: "#".into(),
            contact_number: "+963922222222".into(),
            working_hours: "الأحد - الخميس | 10ص - 4م".into(),
            bio: "أخصائية في الأمراض الجلدية والتجميل والليزر. شهادات معتمدة دولياً.".into(),
        },
        Doctor {
            id: 3,
            name: "د. خالد العظم".into(),
            specialty: Specialty::Pediatrics,
            governorate: Governorate::Damascus,
            address: "شارع بغداد، بناء الأطباء".into(),
            image_url: "https://picsum.photos/seed/doc3/400/400".into(),
            maps_link: "#".into(),
            contact_number: "+963933333333".into(),
            working_hours: "يومياً عدا الجمعة | 11ص - 6م".into(),
            bio: "أخصائي طب الأطفال وحديثي الولادة. متابعة نمو الطفل وجميع اللقاحات.".into(),
        },
        Doctor {
            id: 4,
            name: "د. لمى مراد".into(),
            specialty: Specialty::Neurology,
            governorate: Governorate::Homs,
            address: "شارع الحضارة".into(),
            image_url: "https://picsum.photos/seed/doc4/400/400".into(),
            maps_link: "#".into(),
            contact_number: "+963944444444".into(),
            working_hours: "السبت - الأربعاء | 4م - 8م".into(),
            bio: "أخصائية في طب الأعصاب والدماغ. تشخيص وعلاج الصداع وآلام العمود الفقري.".into(),
        },
        Doctor {
            id: 5,
            name: "د. فارس الأحمد".into(),
            specialty: Specialty::Cardiology,
            governorate: Governorate::Latakia,
            address: "المشروع السابع، مقابل المشفى الوطني".into(),
            image_url: "https://picsum.photos/seed/doc5/400/400".into(),
            maps_link: "#".into(),
            contact_number: "+963955555555".into(),
            working_hours: "السبت - الخميس | 6م - 10م".into(),
            bio: "أخصائي أمراض القلب التداخلية والقسطرة العلاجية. عضو الجمعية الأوروبية لأمراض القلب.".into(),
        },
    ]
}

pub fn account() -> AccountPage {
    AccountPage {
        holder_name: "محمد الأيوبي".into(),
        balance_syp: 1_250_000,
        account_mask: "SY...1234".into(),
        transactions: vec![
            Transaction {
                id: 1,
                kind: TransactionKind::Deposit,
                amount: 500_000,
                date: date(2024, 7, 20),
            },
            Transaction {
                id: 2,
                kind: TransactionKind::Payment,
                amount: 75_000,
                date: date(2024, 7, 19),
            },
            Transaction {
                id: 3,
                kind: TransactionKind::Withdrawal,
                amount: 100_000,
                date: date(2024, 7, 18),
            },
            Transaction {
                id: 4,
                kind: TransactionKind::Deposit,
                amount: 200_000,
                date: date(2024, 7, 15),
            },
        ],
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_have_unique_ascending_ids() {
        fn check(ids: Vec<u32>) {
            for pair in ids.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
        check(properties().iter().map(|p| p.id).collect());
        check(shipments().iter().map(|s| s.id).collect());
        check(hotels().iter().map(|h| h.id).collect());
        check(tourist_sites().iter().map(|s| s.id).collect());
        check(travel_agencies().iter().map(|a| a.id).collect());
        check(doctors().iter().map(|d| d.id).collect());
    }

    #[test]
    fn every_site_carries_at_least_two_photos() {
        for site in tourist_sites() {
            assert!(site.image_urls.len() >= 2, "site {} has too few photos", site.id);
        }
    }

    #[test]
    fn account_ledger_is_newest_first() {
        let account = account();
        for pair in account.transactions.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }
}
