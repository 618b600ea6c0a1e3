//! Shared enumerations and value types for the seat part catalog

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Mounting location of a seat inside the vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeatPosition {
    DriverFront,
    PassengerFront,
    SecondRowLeft,
    SecondRowRight,
    SecondRowCenter,
    ThirdRowLeft,
    ThirdRowRight,
    ThirdRowCenter,
}

impl SeatPosition {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            SeatPosition::DriverFront => "Driver front",
            SeatPosition::PassengerFront => "Passenger front",
            SeatPosition::SecondRowLeft => "2nd row left",
            SeatPosition::SecondRowRight => "2nd row right",
            SeatPosition::SecondRowCenter => "2nd row center",
            SeatPosition::ThirdRowLeft => "3rd row left",
            SeatPosition::ThirdRowRight => "3rd row right",
            SeatPosition::ThirdRowCenter => "3rd row center",
        }
    }
}

impl std::str::FromStr for SeatPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driver-front" => Ok(SeatPosition::DriverFront),
            "passenger-front" => Ok(SeatPosition::PassengerFront),
            "second-row-left" => Ok(SeatPosition::SecondRowLeft),
            "second-row-right" => Ok(SeatPosition::SecondRowRight),
            "second-row-center" => Ok(SeatPosition::SecondRowCenter),
            "third-row-left" => Ok(SeatPosition::ThirdRowLeft),
            "third-row-right" => Ok(SeatPosition::ThirdRowRight),
            "third-row-center" => Ok(SeatPosition::ThirdRowCenter),
            _ => Err(format!("unknown seat position: {}", s)),
        }
    }
}

/// Upholstery material of a seat configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Material {
    NappaLeather,
    Leather,
    SyntheticLeather,
    Polyurethane,
    Pvc,
    StandardFabric,
    PremiumFabric,
    Alcantara,
    Suede,
    LeatherFabricMix,
    LeatherAlcantaraMix,
    PerforatedLeather,
}

impl Material {
    pub fn label(&self) -> &'static str {
        match self {
            Material::NappaLeather => "Nappa leather",
            Material::Leather => "Leather",
            Material::SyntheticLeather => "Synthetic leather",
            Material::Polyurethane => "PU (polyurethane)",
            Material::Pvc => "PVC",
            Material::StandardFabric => "Standard fabric",
            Material::PremiumFabric => "Premium fabric",
            Material::Alcantara => "Alcantara",
            Material::Suede => "Suede",
            Material::LeatherFabricMix => "Leather/fabric mix",
            Material::LeatherAlcantaraMix => "Leather/Alcantara mix",
            Material::PerforatedLeather => "Perforated leather",
        }
    }
}

impl std::str::FromStr for Material {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nappa-leather" => Ok(Material::NappaLeather),
            "leather" => Ok(Material::Leather),
            "synthetic-leather" => Ok(Material::SyntheticLeather),
            "polyurethane" => Ok(Material::Polyurethane),
            "pvc" => Ok(Material::Pvc),
            "standard-fabric" => Ok(Material::StandardFabric),
            "premium-fabric" => Ok(Material::PremiumFabric),
            "alcantara" => Ok(Material::Alcantara),
            "suede" => Ok(Material::Suede),
            "leather-fabric-mix" => Ok(Material::LeatherFabricMix),
            "leather-alcantara-mix" => Ok(Material::LeatherAlcantaraMix),
            "perforated-leather" => Ok(Material::PerforatedLeather),
            _ => Err(format!("unknown material: {}", s)),
        }
    }
}

/// Capability tag of a seat configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    PowerAdjust,
    Memory,
    Heating,
    Ventilation,
    Massage,
    LegRest,
    LumbarSupport,
    AdjustableHeadrest,
    EasyEntry,
    SeatAudio,
    SideAirbag,
    FarSideAirbag,
    BeltPretensioner,
}

impl Feature {
    pub fn label(&self) -> &'static str {
        match self {
            Feature::PowerAdjust => "Power adjust",
            Feature::Memory => "Memory",
            Feature::Heating => "Heating",
            Feature::Ventilation => "Ventilation",
            Feature::Massage => "Massage",
            Feature::LegRest => "Leg rest",
            Feature::LumbarSupport => "Lumbar support",
            Feature::AdjustableHeadrest => "Adjustable headrest",
            Feature::EasyEntry => "Easy entry",
            Feature::SeatAudio => "Seat audio",
            Feature::SideAirbag => "Side airbag",
            Feature::FarSideAirbag => "Far-side airbag",
            Feature::BeltPretensioner => "Belt pretensioner",
        }
    }
}

impl std::str::FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "power-adjust" => Ok(Feature::PowerAdjust),
            "memory" => Ok(Feature::Memory),
            "heating" => Ok(Feature::Heating),
            "ventilation" => Ok(Feature::Ventilation),
            "massage" => Ok(Feature::Massage),
            "leg-rest" => Ok(Feature::LegRest),
            "lumbar-support" => Ok(Feature::LumbarSupport),
            "adjustable-headrest" => Ok(Feature::AdjustableHeadrest),
            "easy-entry" => Ok(Feature::EasyEntry),
            "seat-audio" => Ok(Feature::SeatAudio),
            "side-airbag" => Ok(Feature::SideAirbag),
            "far-side-airbag" => Ok(Feature::FarSideAirbag),
            "belt-pretensioner" => Ok(Feature::BeltPretensioner),
            _ => Err(format!("unknown feature: {}", s)),
        }
    }
}

/// Package dimensions in centimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self { length, width, height }
    }

    pub fn volume_cm3(&self) -> f64 {
        self.length * self.width * self.height
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{} cm", self.length, self.width, self.height)
    }
}

/// Which weight a freight quote was billed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightBasis {
    Actual,
    Dimensional,
}

impl WeightBasis {
    pub fn label(&self) -> &'static str {
        match self {
            WeightBasis::Actual => "actual",
            WeightBasis::Dimensional => "dimensional",
        }
    }
}

/// Weights for the comprehensive scoring model.
///
/// The four weights are taken as supplied; there is no sum-to-1
/// normalization. Presets all sum to 1.0, but a caller supplying its own
/// config owns the resulting score scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    pub price: f64,
    pub feature: f64,
    pub material: f64,
    pub weight: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        WeightPreset::Balanced.weights()
    }
}

/// Named weight presets for the comprehensive scoring model
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum WeightPreset {
    #[default]
    Balanced,
    FeaturePriority,
    CostSensitive,
    QualityPriority,
}

impl WeightPreset {
    pub fn weights(&self) -> WeightConfig {
        match self {
            WeightPreset::Balanced => WeightConfig {
                price: 0.5,
                feature: 0.2,
                material: 0.1,
                weight: 0.2,
            },
            WeightPreset::FeaturePriority => WeightConfig {
                price: 0.3,
                feature: 0.4,
                material: 0.2,
                weight: 0.1,
            },
            WeightPreset::CostSensitive => WeightConfig {
                price: 0.6,
                feature: 0.15,
                material: 0.1,
                weight: 0.15,
            },
            WeightPreset::QualityPriority => WeightConfig {
                price: 0.2,
                feature: 0.3,
                material: 0.35,
                weight: 0.15,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeightPreset::Balanced => "balanced",
            WeightPreset::FeaturePriority => "feature priority",
            WeightPreset::CostSensitive => "cost sensitive",
            WeightPreset::QualityPriority => "quality priority",
        }
    }
}

/// Coefficients for the cost-utility scoring model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostUtilityCoefficients {
    /// Feature score multiplier
    pub alpha: f64,
    /// Material score multiplier
    pub beta: f64,
    /// Logistics cost multiplier
    pub gamma: f64,
}

impl Default for CostUtilityCoefficients {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 0.8,
            gamma: 0.5,
        }
    }
}

/// Competitor analysis mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisMode {
    #[default]
    Comprehensive,
    CostUtility,
}

impl std::fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisMode::Comprehensive => write!(f, "comprehensive"),
            AnalysisMode::CostUtility => write!(f, "cost-utility"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_weights_sum_to_one() {
        for preset in [
            WeightPreset::Balanced,
            WeightPreset::FeaturePriority,
            WeightPreset::CostSensitive,
            WeightPreset::QualityPriority,
        ] {
            let w = preset.weights();
            let sum = w.price + w.feature + w.material + w.weight;
            assert!((sum - 1.0).abs() < 1e-9, "{:?} sums to {}", preset, sum);
        }
    }

    #[test]
    fn test_material_round_trip() {
        let m: Material = "nappa-leather".parse().unwrap();
        assert_eq!(m, Material::NappaLeather);
        assert!("cordovan".parse::<Material>().is_err());
    }

    #[test]
    fn test_dimensions_volume() {
        let d = Dimensions::new(60.0, 50.0, 40.0);
        assert!((d.volume_cm3() - 120_000.0).abs() < f64::EPSILON);
    }
}
