use serde::{Deserialize, Serialize};

/// Raised when a string does not name a variant of a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field} value: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(HazardLabel {
    Fire => "fire",
    PowerOutage => "power_outage",
    GasLeak => "gas_leak",
    WaterLeak => "water_leak",
    Flood => "flood",
    Wildfire => "wildfire",
    Earthquake => "earthquake",
    Storm => "storm",
    SnowStuck => "snow_stuck",
    SuspiciousActivity => "suspicious_activity",
    BreakIn => "break_in",
    NoiseIssue => "noise_issue",
    LostPhone => "lost_phone",
    LostWallet => "lost_wallet",
    GeneralSafety => "general_safety",
    MedicalEmergency => "medical_emergency",
    Unknown => "unknown",
});

str_enum!(HazardSource {
    Rules => "rules",
    Ai => "ai",
});

str_enum!(GuidanceMode {
    Normal => "normal",
    Deep => "deep",
});

impl HazardLabel {
    /// Labels an external classifier is allowed to produce.
    ///
    /// Excludes `medical_emergency` (only the keyword guard may raise it)
    /// and `unknown` (never leaves the pipeline).
    pub fn classifiable() -> impl Iterator<Item = HazardLabel> {
        Self::ALL
            .iter()
            .copied()
            .filter(|l| !matches!(l, Self::MedicalEmergency | Self::Unknown))
    }

    /// Human-readable form: underscores become spaces.
    pub fn readable(&self) -> String {
        self.as_str().replace('_', " ")
    }
}
