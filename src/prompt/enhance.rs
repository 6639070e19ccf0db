use crate::prompt::analysis::{analyze_prompt, refine_prompt};
use crate::prompt::style::ImageStyle;

pub fn enhance_prompt(prompt: &str, style: ImageStyle) -> String {
    let signals = analyze_prompt(prompt);
    let refined = refine_prompt(prompt, &signals);
    format!("{}, {}", refined, style.quality_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_style_suffix_after_refinement() {
        let enhanced = enhance_prompt("a fast car", ImageStyle::Realistic);
        assert_eq!(
            enhanced,
            "a fast car, modern car, clear, detailed, well-defined, recognizable, accurate, \
             high quality, photorealistic, detailed, professional photography, 8K resolution, sharp focus"
        );
    }

    #[test]
    fn unknown_style_name_uses_default_suffix() {
        let enhanced = enhance_prompt("sunset", ImageStyle::parse_or_default("vaporwave"));
        assert!(enhanced.ends_with(
            ", high quality, detailed, visually appealing, professional, well-composed"
        ));
    }
}
