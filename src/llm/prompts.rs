use crate::notes::SectionName;

/// Build a deterministic prompt asking for section-keyed JSON notes.
pub fn build_notes_prompt(transcript: &str) -> String {
    let structure: String = SectionName::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| format!("{}. {} - {}\n", i + 1, section.label(), section.description()))
        .collect();

    format!(
        "You are a professional meeting note-taker. Convert the following meeting transcript \
into structured meeting notes following this exact format:\n\
\n\
STRUCTURE TO FOLLOW:\n\
{structure}\
\n\
FORMATTING RULES:\n\
- Use bullet points (●) for main points\n\
- Use sub-bullets (○) for sub-points\n\
- Use nested bullets (■) for further details\n\
- Keep content concise but comprehensive\n\
- Extract specific details like numbers, names, dates\n\
- Maintain professional tone\n\
- Include all relevant technical details\n\
- Capture all decisions and next steps clearly\n\
\n\
TRANSCRIPT TO CONVERT:\n\
{transcript}\n\
\n\
Return ONLY a simple JSON object with section names as keys and formatted text content as values.\n\
Each value should be a single string with bullet points, not nested objects or arrays.\n\
Example format:\n\
{{\n  \"Client Vision\": \"● Core idea: Build mobile app\\n● Problem: Users need real-time features\",\n  \
\"Decisions Made\": \"● Launch date: November 15\\n● Owner: Product team\"\n}}"
    )
}
