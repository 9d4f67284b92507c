/// Instruction prompt sent with every photo unless the user supplies one.
///
/// Asks for the sections the report classifier expects: brand with a
/// confidence percentage, style details, purchase options with prices,
/// styling suggestions and care instructions, as headed markdown bullets.
pub const DEFAULT_PROMPT: &str = "Analyze this outfit image and provide a comprehensive fashion analysis including: 1) Brand identification with confidence percentage, 2) Detailed description of the style, colors, and materials, 3) Where to purchase this exact or similar items with price ranges, 4) Styling suggestions for different occasions, 5) Care instructions based on the likely materials. Format your response as markdown with appropriate headings and bullet points.";

/// The trimmed custom prompt, or [`DEFAULT_PROMPT`] when it is absent or blank.
pub fn effective_prompt(custom: Option<&str>) -> &str {
    match custom.map(str::trim) {
        Some(prompt) if !prompt.is_empty() => prompt,
        _ => DEFAULT_PROMPT,
    }
}
