use crate::models::{GuideMap, HazardLabel};

/// Candidate guides per hazard, in priority order (index 0 is primary).
pub const HAZARD_GUIDE_TABLE: &[(HazardLabel, &[&str])] = &[
    // Home safety
    (HazardLabel::Fire, &["fema_are_you_ready", "household_preparedness"]),
    (
        HazardLabel::PowerOutage,
        &["canada_power_outage", "bc_power_outage", "ont_power_outage"],
    ),
    (HazardLabel::GasLeak, &["fema_are_you_ready", "household_preparedness"]),
    (HazardLabel::WaterLeak, &["flood_preparedness", "household_preparedness"]),
    // Weather & natural hazards
    (HazardLabel::Flood, &["flood_preparedness", "fema_are_you_ready"]),
    (HazardLabel::Wildfire, &["wildfire_preparedness", "wildfire_toolkit"]),
    (
        HazardLabel::Earthquake,
        &["earthquake_tsunami_guide", "household_preparedness"],
    ),
    (HazardLabel::Storm, &["winter_storm_guide", "fema_are_you_ready"]),
    (HazardLabel::SnowStuck, &["winter_storm_guide"]),
    // Neighbourhood safety
    (HazardLabel::SuspiciousActivity, &["household_preparedness"]),
    (HazardLabel::BreakIn, &["household_preparedness"]),
    (HazardLabel::NoiseIssue, &["household_preparedness"]),
    // Everyday problems
    (HazardLabel::LostPhone, &["household_preparedness"]),
    (HazardLabel::LostWallet, &["household_preparedness"]),
    // Fallback
    (
        HazardLabel::GeneralSafety,
        &["fema_are_you_ready", "household_preparedness"],
    ),
];

/// Table entry for `hazard`, or the `general_safety` entry when absent.
pub fn guide_candidates(hazard: HazardLabel) -> &'static [&'static str] {
    let lookup = |label: HazardLabel| {
        HAZARD_GUIDE_TABLE
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, keys)| *keys)
    };
    lookup(hazard)
        .or_else(|| lookup(HazardLabel::GeneralSafety))
        .unwrap_or(&[])
}

/// Candidate keys that exist in the registry snapshot, table order kept.
pub fn resolve_guides(hazard: HazardLabel, registry: &GuideMap) -> Vec<String> {
    guide_candidates(hazard)
        .iter()
        .filter(|key| {
            let present = registry.contains_key(**key);
            if !present {
                tracing::debug!(guide = %key, hazard = %hazard, "Guide not in registry, dropped");
            }
            present
        })
        .map(|key| key.to_string())
        .collect()
}
