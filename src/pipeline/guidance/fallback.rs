use crate::models::HazardLabel;

/// Deterministic guidance used whenever the AI service cannot answer.
///
/// Pure function of its inputs; needs no network.
pub fn fallback_guidance(text: &str, hazard: HazardLabel) -> String {
    let readable = hazard.readable();
    format!(
        "General non-medical safety steps ({readable}):\n\n\
         1. Ensure your immediate safety. If this feels life-threatening, call emergency services.\n\
         2. Avoid obvious hazards (fire, water, electrical, gas, unstable structures, unsafe roads).\n\
         3. Move to a safer location if possible.\n\
         4. Follow official alerts or local authority instructions.\n\
         5. Inform a trusted neighbour or family member.\n\
         6. Keep your phone charged and monitor conditions.\n\n\
         Your description:\n\"{text}\"\n"
    )
}
