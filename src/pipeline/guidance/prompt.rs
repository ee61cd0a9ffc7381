use crate::models::HazardLabel;

pub const GUIDANCE_SYSTEM_PROMPT: &str = "You are a safety assistant. \
Provide 5–8 short, numbered, general safety steps. \
No medical or legal advice. \
If danger is immediate, remind the user to call emergency services.";

pub const DEEP_GUIDANCE_SYSTEM_PROMPT: &str = "You are a safety assistant. \
Use ONLY the attached PDF as your source. \
Do not invent information. No medical or legal advice. \
Keep the answer under 250 words.";

/// User content for free-form guidance.
pub fn guidance_prompt(text: &str, hazard: HazardLabel) -> String {
    format!(
        "User description:\n\"{text}\"\n\n\
         Hazard: {hazard}\n\n\
         Give clear, actionable steps for the next minutes and hours.\n\
         Do NOT give medical or legal advice.\n"
    )
}

/// User content for document-grounded guidance.
pub fn deep_guidance_prompt(text: &str, hazard: HazardLabel, guide_key: &str) -> String {
    format!(
        "User description:\n\"{text}\"\n\n\
         Hazard: {hazard}\n\n\
         Guide key: {guide_key}\n\n\
         Using ONLY the attached guide, summarize the most relevant steps and tips."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guidance_prompt_carries_text_and_label() {
        let prompt = guidance_prompt("Water in the basement", HazardLabel::WaterLeak);
        assert!(prompt.contains("\"Water in the basement\""));
        assert!(prompt.contains("Hazard: water_leak"));
        assert!(prompt.contains("Do NOT give medical or legal advice"));
    }

    #[test]
    fn deep_prompt_names_guide() {
        let prompt = deep_guidance_prompt("Snowed in", HazardLabel::SnowStuck, "winter_storm_guide");
        assert!(prompt.contains("Hazard: snow_stuck"));
        assert!(prompt.contains("Guide key: winter_storm_guide"));
        assert!(prompt.contains("ONLY the attached guide"));
    }

    #[test]
    fn system_prompts_bound_output() {
        assert!(GUIDANCE_SYSTEM_PROMPT.contains("5–8"));
        assert!(GUIDANCE_SYSTEM_PROMPT.contains("emergency services"));
        assert!(DEEP_GUIDANCE_SYSTEM_PROMPT.contains("250 words"));
        assert!(DEEP_GUIDANCE_SYSTEM_PROMPT.contains("ONLY the attached"));
    }
}
