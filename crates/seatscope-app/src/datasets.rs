//! Built-in demo datasets
//!
//! A small seat part catalog, a competitor set and provider rate cards
//! so the tool is usable out of the box. A config entry pointing at a
//! CSV/TOML file replaces the corresponding set for the session.

use std::sync::LazyLock;

use seatscope_domain::{CompetitorRecord, LogisticsProvider, PartRecord};
use seatscope_types::{Dimensions, Feature, Material, SeatPosition};

/// Built-in seat part catalog
pub static SEAT_CATALOG: LazyLock<Vec<PartRecord>> = LazyLock::new(|| {
    vec![
        PartRecord {
            id: 1,
            brand: "BYD".to_string(),
            series: "Han".to_string(),
            year: 2024,
            model: "EV Flagship".to_string(),
            position: SeatPosition::DriverFront,
            material: Material::NappaLeather,
            features: vec![
                Feature::PowerAdjust,
                Feature::Memory,
                Feature::Heating,
                Feature::Ventilation,
            ],
            price: 12800.0,
            weight: 28.5,
            dimensions: Dimensions::new(58.0, 52.0, 45.0),
            description: "Flagship driver seat with 12-way power adjustment".to_string(),
            image: "byd-han-driver.jpg".to_string(),
        },
        PartRecord {
            id: 2,
            brand: "BYD".to_string(),
            series: "Han".to_string(),
            year: 2024,
            model: "EV Flagship".to_string(),
            position: SeatPosition::PassengerFront,
            material: Material::NappaLeather,
            features: vec![Feature::PowerAdjust, Feature::Heating, Feature::Ventilation],
            price: 11200.0,
            weight: 26.0,
            dimensions: Dimensions::new(58.0, 52.0, 45.0),
            description: "Front passenger seat, ventilated".to_string(),
            image: "byd-han-passenger.jpg".to_string(),
        },
        PartRecord {
            id: 3,
            brand: "BYD".to_string(),
            series: "Seal".to_string(),
            year: 2023,
            model: "Performance".to_string(),
            position: SeatPosition::DriverFront,
            material: Material::SyntheticLeather,
            features: vec![Feature::PowerAdjust, Feature::Heating, Feature::LumbarSupport],
            price: 8600.0,
            weight: 24.5,
            dimensions: Dimensions::new(56.0, 50.0, 43.0),
            description: "Sport bucket driver seat".to_string(),
            image: "byd-seal-driver.jpg".to_string(),
        },
        PartRecord {
            id: 4,
            brand: "Tesla".to_string(),
            series: "Model 3".to_string(),
            year: 2023,
            model: "Long Range".to_string(),
            position: SeatPosition::DriverFront,
            material: Material::SyntheticLeather,
            features: vec![Feature::PowerAdjust, Feature::Memory, Feature::Heating],
            price: 9800.0,
            weight: 24.0,
            dimensions: Dimensions::new(56.0, 50.0, 44.0),
            description: "Vegan leather driver seat".to_string(),
            image: "tesla-m3-driver.jpg".to_string(),
        },
        PartRecord {
            id: 5,
            brand: "Tesla".to_string(),
            series: "Model Y".to_string(),
            year: 2024,
            model: "Performance".to_string(),
            position: SeatPosition::SecondRowLeft,
            material: Material::SyntheticLeather,
            features: vec![Feature::Heating, Feature::EasyEntry],
            price: 6400.0,
            weight: 18.0,
            dimensions: Dimensions::new(52.0, 48.0, 40.0),
            description: "Folding second-row seat".to_string(),
            image: "tesla-my-rear.jpg".to_string(),
        },
        PartRecord {
            id: 6,
            brand: "NIO".to_string(),
            series: "ET7".to_string(),
            year: 2024,
            model: "Executive".to_string(),
            position: SeatPosition::PassengerFront,
            material: Material::NappaLeather,
            features: vec![
                Feature::PowerAdjust,
                Feature::Memory,
                Feature::Heating,
                Feature::Ventilation,
                Feature::Massage,
                Feature::LegRest,
            ],
            price: 15800.0,
            weight: 32.0,
            dimensions: Dimensions::new(62.0, 54.0, 48.0),
            description: "Executive lounge seat with leg rest and massage".to_string(),
            image: "nio-et7-lounge.jpg".to_string(),
        },
        PartRecord {
            id: 7,
            brand: "NIO".to_string(),
            series: "ES6".to_string(),
            year: 2023,
            model: "Signature".to_string(),
            position: SeatPosition::DriverFront,
            material: Material::PerforatedLeather,
            features: vec![Feature::PowerAdjust, Feature::Heating, Feature::Ventilation],
            price: 10900.0,
            weight: 27.0,
            dimensions: Dimensions::new(58.0, 52.0, 46.0),
            description: "Perforated leather driver seat".to_string(),
            image: "nio-es6-driver.jpg".to_string(),
        },
        PartRecord {
            id: 8,
            brand: "Zeekr".to_string(),
            series: "001".to_string(),
            year: 2024,
            model: "ME".to_string(),
            position: SeatPosition::DriverFront,
            material: Material::LeatherAlcantaraMix,
            features: vec![
                Feature::PowerAdjust,
                Feature::Memory,
                Feature::Heating,
                Feature::Massage,
            ],
            price: 11800.0,
            weight: 29.0,
            dimensions: Dimensions::new(59.0, 53.0, 46.0),
            description: "Alcantara-trimmed sport seat".to_string(),
            image: "zeekr-001-driver.jpg".to_string(),
        },
        PartRecord {
            id: 9,
            brand: "XPeng".to_string(),
            series: "P7".to_string(),
            year: 2023,
            model: "Wing Edition".to_string(),
            position: SeatPosition::DriverFront,
            material: Material::SyntheticLeather,
            features: vec![Feature::PowerAdjust, Feature::Heating, Feature::SeatAudio],
            price: 7900.0,
            weight: 23.0,
            dimensions: Dimensions::new(55.0, 50.0, 43.0),
            description: "Driver seat with integrated headrest speakers".to_string(),
            image: "xpeng-p7-driver.jpg".to_string(),
        },
        PartRecord {
            id: 10,
            brand: "Li Auto".to_string(),
            series: "L9".to_string(),
            year: 2024,
            model: "Max".to_string(),
            position: SeatPosition::SecondRowRight,
            material: Material::NappaLeather,
            features: vec![
                Feature::PowerAdjust,
                Feature::Heating,
                Feature::Ventilation,
                Feature::Massage,
                Feature::LegRest,
                Feature::AdjustableHeadrest,
            ],
            price: 14200.0,
            weight: 31.0,
            dimensions: Dimensions::new(60.0, 54.0, 47.0),
            description: "Second-row captain chair".to_string(),
            image: "liauto-l9-captain.jpg".to_string(),
        },
        PartRecord {
            id: 11,
            brand: "Li Auto".to_string(),
            series: "L9".to_string(),
            year: 2024,
            model: "Max".to_string(),
            position: SeatPosition::ThirdRowLeft,
            material: Material::Leather,
            features: vec![Feature::EasyEntry, Feature::AdjustableHeadrest],
            price: 5200.0,
            weight: 15.5,
            dimensions: Dimensions::new(48.0, 46.0, 38.0),
            description: "Third-row bench seat, left section".to_string(),
            image: "liauto-l9-third.jpg".to_string(),
        },
        PartRecord {
            id: 12,
            brand: "Zeekr".to_string(),
            series: "009".to_string(),
            year: 2024,
            model: "Grand".to_string(),
            position: SeatPosition::SecondRowCenter,
            material: Material::NappaLeather,
            features: vec![
                Feature::PowerAdjust,
                Feature::Memory,
                Feature::Heating,
                Feature::Ventilation,
                Feature::Massage,
                Feature::LegRest,
                Feature::SeatAudio,
            ],
            price: 18600.0,
            weight: 35.0,
            dimensions: Dimensions::new(64.0, 56.0, 50.0),
            description: "MPV lounge seat, the top of the range".to_string(),
            image: "zeekr-009-lounge.jpg".to_string(),
        },
    ]
});

/// Built-in competitor set for market analysis
pub static COMPETITOR_SET: LazyLock<Vec<CompetitorRecord>> = LazyLock::new(|| {
    vec![
        CompetitorRecord {
            id: 1,
            brand: "BYD".to_string(),
            series: "Han".to_string(),
            price: 12800.0,
            weight: 28.5,
            feature_score: 88.0,
            material_score: 8.5,
            market_share: 18.2,
        },
        CompetitorRecord {
            id: 2,
            brand: "Tesla".to_string(),
            series: "Model 3".to_string(),
            price: 9800.0,
            weight: 24.0,
            feature_score: 82.0,
            material_score: 7.0,
            market_share: 21.5,
        },
        CompetitorRecord {
            id: 3,
            brand: "NIO".to_string(),
            series: "ET7".to_string(),
            price: 15800.0,
            weight: 32.0,
            feature_score: 95.0,
            material_score: 9.2,
            market_share: 8.4,
        },
        CompetitorRecord {
            id: 4,
            brand: "Zeekr".to_string(),
            series: "001".to_string(),
            price: 11800.0,
            weight: 29.0,
            feature_score: 86.0,
            material_score: 8.8,
            market_share: 6.1,
        },
        CompetitorRecord {
            id: 5,
            brand: "XPeng".to_string(),
            series: "P7".to_string(),
            price: 7900.0,
            weight: 23.0,
            feature_score: 78.0,
            material_score: 6.5,
            market_share: 9.8,
        },
        CompetitorRecord {
            id: 6,
            brand: "Li Auto".to_string(),
            series: "L9".to_string(),
            price: 14200.0,
            weight: 31.0,
            feature_score: 92.0,
            material_score: 8.9,
            market_share: 11.3,
        },
        CompetitorRecord {
            id: 7,
            brand: "BYD".to_string(),
            series: "Seal".to_string(),
            price: 8600.0,
            weight: 24.5,
            feature_score: 80.0,
            material_score: 7.2,
            market_share: 13.6,
        },
        CompetitorRecord {
            id: 8,
            brand: "Tesla".to_string(),
            series: "Model Y".to_string(),
            price: 6400.0,
            weight: 18.0,
            feature_score: 70.0,
            material_score: 6.8,
            market_share: 24.0,
        },
    ]
});

/// Built-in logistics provider rate cards
pub static PROVIDER_RATES: LazyLock<Vec<LogisticsProvider>> = LazyLock::new(|| {
    vec![
        LogisticsProvider {
            id: 1,
            name: "SF Express".to_string(),
            base_rate: 20.0,
            weight_rate: 3.0,
            min_charge: 50.0,
            delivery_time: "1-3 days".to_string(),
        },
        LogisticsProvider {
            id: 2,
            name: "JD Logistics".to_string(),
            base_rate: 18.0,
            weight_rate: 3.2,
            min_charge: 45.0,
            delivery_time: "2-4 days".to_string(),
        },
        LogisticsProvider {
            id: 3,
            name: "Deppon Express".to_string(),
            base_rate: 15.0,
            weight_rate: 2.6,
            min_charge: 40.0,
            delivery_time: "3-5 days".to_string(),
        },
        LogisticsProvider {
            id: 4,
            name: "Best Freight".to_string(),
            base_rate: 12.0,
            weight_rate: 2.4,
            min_charge: 35.0,
            delivery_time: "4-7 days".to_string(),
        },
    ]
});

/// Look up a built-in part by id
pub fn get_part(id: u32) -> Option<&'static PartRecord> {
    SEAT_CATALOG.iter().find(|p| p.id == id)
}

/// Look up a built-in competitor by id
pub fn get_competitor(id: u32) -> Option<&'static CompetitorRecord> {
    COMPETITOR_SET.iter().find(|c| c.id == id)
}

/// Look up a built-in provider by id
pub fn get_provider(id: u32) -> Option<&'static LogisticsProvider> {
    PROVIDER_RATES.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<u32> = SEAT_CATALOG.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SEAT_CATALOG.len());
    }

    #[test]
    fn test_get_part() {
        assert_eq!(get_part(1).map(|p| p.brand.as_str()), Some("BYD"));
        assert!(get_part(999).is_none());
    }

    #[test]
    fn test_provider_rates_present() {
        assert_eq!(PROVIDER_RATES.len(), 4);
        let sf = get_provider(1).unwrap();
        assert_eq!(sf.name, "SF Express");
        assert!((sf.min_charge - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_competitor_set_covers_catalog_brands() {
        for competitor in COMPETITOR_SET.iter() {
            assert!(
                SEAT_CATALOG.iter().any(|p| p.brand == competitor.brand),
                "competitor brand {} missing from catalog",
                competitor.brand
            );
        }
    }
}
