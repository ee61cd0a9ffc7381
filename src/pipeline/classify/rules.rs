use crate::models::HazardLabel;

/// One ordered check: the label wins if any phrase occurs in the text.
pub struct HazardRule {
    pub label: HazardLabel,
    pub phrases: &'static [&'static str],
}

/// Checked top to bottom; the first rule with a matching phrase wins.
///
/// Home-safety hazards come first so that text mentioning both a fire and
/// a storm resolves to the more dangerous category.
pub const HAZARD_RULES: &[HazardRule] = &[
    // Home safety
    HazardRule {
        label: HazardLabel::Fire,
        phrases: &["fire", "smoke", "burning", "flames"],
    },
    HazardRule {
        label: HazardLabel::PowerOutage,
        phrases: &[
            "power out",
            "power outage",
            "no electricity",
            "blackout",
            "lost power",
        ],
    },
    HazardRule {
        label: HazardLabel::GasLeak,
        phrases: &["gas leak", "smell of gas", "gas smell"],
    },
    HazardRule {
        label: HazardLabel::WaterLeak,
        phrases: &[
            "water leak",
            "pipe burst",
            "burst pipe",
            "water coming from ceiling",
            "water leaking inside",
        ],
    },
    // Weather & natural hazards
    HazardRule {
        label: HazardLabel::Flood,
        phrases: &["flood", "water is rising", "basement flooded", "river overflow"],
    },
    HazardRule {
        label: HazardLabel::Wildfire,
        phrases: &["wildfire", "forest fire", "heavy smoke from fire"],
    },
    HazardRule {
        label: HazardLabel::Earthquake,
        phrases: &["earthquake", "tremor", "shaking", "aftershock"],
    },
    HazardRule {
        label: HazardLabel::Storm,
        phrases: &[
            "storm",
            "thunderstorm",
            "high winds",
            "hurricane",
            "tornado",
            "blizzard",
        ],
    },
    HazardRule {
        label: HazardLabel::SnowStuck,
        phrases: &["stuck in snow", "car stuck", "snowed in", "snowbank"],
    },
    // Neighbourhood safety
    HazardRule {
        label: HazardLabel::SuspiciousActivity,
        phrases: &[
            "suspicious person",
            "suspicious activity",
            "someone is following me",
            "strange person outside",
        ],
    },
    HazardRule {
        label: HazardLabel::BreakIn,
        phrases: &[
            "break in",
            "broken into",
            "window broken",
            "door forced",
            "car broken into",
            "car break in",
        ],
    },
    HazardRule {
        label: HazardLabel::NoiseIssue,
        phrases: &[
            "loud music",
            "loud party",
            "noise complaint",
            "noisy neighbours",
            "noisy neighbors",
        ],
    },
    // Everyday problems
    HazardRule {
        label: HazardLabel::LostPhone,
        phrases: &[
            "lost my phone",
            "phone is missing",
            "stolen phone",
            "my phone was stolen",
        ],
    },
    HazardRule {
        label: HazardLabel::LostWallet,
        phrases: &[
            "lost my wallet",
            "wallet is missing",
            "wallet stolen",
            "lost my card",
            "credit card stolen",
            "debit card stolen",
        ],
    },
];

/// Classify by literal phrase matching. Returns `Unknown` when no rule fires.
pub fn classify_by_rules(text: &str) -> HazardLabel {
    let lower = text.to_lowercase();
    HAZARD_RULES
        .iter()
        .find(|rule| rule.phrases.iter().any(|p| lower.contains(p)))
        .map(|rule| rule.label)
        .unwrap_or(HazardLabel::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_order_is_fixed() {
        let order: Vec<_> = HAZARD_RULES.iter().map(|r| r.label).collect();
        assert_eq!(
            order,
            vec![
                HazardLabel::Fire,
                HazardLabel::PowerOutage,
                HazardLabel::GasLeak,
                HazardLabel::WaterLeak,
                HazardLabel::Flood,
                HazardLabel::Wildfire,
                HazardLabel::Earthquake,
                HazardLabel::Storm,
                HazardLabel::SnowStuck,
                HazardLabel::SuspiciousActivity,
                HazardLabel::BreakIn,
                HazardLabel::NoiseIssue,
                HazardLabel::LostPhone,
                HazardLabel::LostWallet,
            ]
        );
    }

    #[test]
    fn phrases_are_lower_case() {
        for rule in HAZARD_RULES {
            for phrase in rule.phrases {
                assert_eq!(*phrase, phrase.to_lowercase());
            }
        }
    }

    #[test]
    fn fire_beats_storm() {
        assert_eq!(
            classify_by_rules("There is a storm and the kitchen is on fire"),
            HazardLabel::Fire
        );
    }

    #[test]
    fn basement_flooding() {
        assert_eq!(
            classify_by_rules("My basement is flooding and water is rising quickly."),
            HazardLabel::Flood
        );
    }

    #[test]
    fn forest_fire_resolves_to_fire_first() {
        // "forest fire" contains "fire", which is checked earlier.
        assert_eq!(classify_by_rules("forest fire nearby"), HazardLabel::Fire);
        assert_eq!(classify_by_rules("wildfire warning"), HazardLabel::Fire);
    }

    #[test]
    fn each_category_is_reachable() {
        let cases = [
            ("We lost power an hour ago", HazardLabel::PowerOutage),
            ("I can smell of gas in the hallway", HazardLabel::GasLeak),
            ("A burst pipe under the sink", HazardLabel::WaterLeak),
            ("The river overflow reached our road", HazardLabel::Flood),
            ("Felt a tremor just now", HazardLabel::Earthquake),
            ("Hurricane warning tonight", HazardLabel::Storm),
            ("We are snowed in", HazardLabel::SnowStuck),
            ("There is a strange person outside", HazardLabel::SuspiciousActivity),
            ("Our car was broken into", HazardLabel::BreakIn),
            ("Loud party next door at 3am", HazardLabel::NoiseIssue),
            ("I think I lost my phone on the bus", HazardLabel::LostPhone),
            ("My wallet is missing", HazardLabel::LostWallet),
        ];
        for (text, expected) in cases {
            assert_eq!(classify_by_rules(text), expected, "{text}");
        }
    }

    #[test]
    fn case_does_not_matter() {
        let lower = classify_by_rules("gas leak in the kitchen");
        let upper = classify_by_rules("GAS LEAK IN THE KITCHEN");
        let mixed = classify_by_rules("Gas Leak In The Kitchen");
        assert_eq!(lower, HazardLabel::GasLeak);
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn no_match_is_unknown() {
        assert_eq!(classify_by_rules("A tree fell across the road"), HazardLabel::Unknown);
        assert_eq!(classify_by_rules(""), HazardLabel::Unknown);
    }

    #[test]
    fn never_returns_terminal_labels() {
        for text in ["unconscious", "general safety", "medical emergency"] {
            let label = classify_by_rules(text);
            assert_ne!(label, HazardLabel::MedicalEmergency);
            assert_ne!(label, HazardLabel::GeneralSafety);
        }
    }
}
