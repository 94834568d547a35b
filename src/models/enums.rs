use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Clinical category assigned by the MRI classifier.
///
/// The wire value is the classifier's label string. Anything outside the
/// known set lands in `Unknown` so that aggregation and display never
/// fail on upstream label drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DementiaCategory {
    NonDemented,
    VeryMildDementia,
    MildDementia,
    ModerateDementia,
    #[default]
    Unknown,
}

impl DementiaCategory {
    /// The closed set of labels the classifier emits, in severity order.
    pub const KNOWN: [DementiaCategory; 4] = [
        DementiaCategory::NonDemented,
        DementiaCategory::VeryMildDementia,
        DementiaCategory::MildDementia,
        DementiaCategory::ModerateDementia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NonDemented => "Non Demented",
            Self::VeryMildDementia => "Very Mild Dementia",
            Self::MildDementia => "Mild Dementia",
            Self::ModerateDementia => "Moderate Dementia",
            Self::Unknown => "Unknown",
        }
    }

    /// Lenient parse: unrecognized labels map to `Unknown` instead of
    /// erroring, per the display fallback contract.
    pub fn parse(s: &str) -> Self {
        match s {
            "Non Demented" => Self::NonDemented,
            "Very Mild Dementia" => Self::VeryMildDementia,
            "Mild Dementia" => Self::MildDementia,
            "Moderate Dementia" => Self::ModerateDementia,
            _ => Self::Unknown,
        }
    }

    /// True for the dementia-positive categories. `Unknown` counts as
    /// neither healthy nor demented.
    pub fn is_demented(&self) -> bool {
        matches!(
            self,
            Self::VeryMildDementia | Self::MildDementia | Self::ModerateDementia
        )
    }

    /// Presentation descriptor for list badges and the report banner.
    pub fn badge_color(&self) -> BadgeColor {
        match self {
            Self::NonDemented => BadgeColor::Green,
            Self::VeryMildDementia => BadgeColor::Yellow,
            Self::MildDementia => BadgeColor::Orange,
            Self::ModerateDementia => BadgeColor::Red,
            Self::Unknown => BadgeColor::Gray,
        }
    }
}

impl std::fmt::Display for DementiaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DementiaCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DementiaCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::parse(&label))
    }
}

/// Colour bucket for a category badge. The rendering layer maps this to
/// its own palette (CSS classes, PDF fill colours).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeColor {
    Green,
    Yellow,
    Orange,
    Red,
    Gray,
}
