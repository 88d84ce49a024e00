use crate::models::{LogoConcept, LogoStyle, PaletteEntry};
use crate::rules::style_rules;

/// Pure function of `(brand_name, style)`; no randomness.
pub fn generate_logo_concept(brand_name: &str, style: LogoStyle) -> LogoConcept {
    let rules = style_rules(style);

    LogoConcept {
        brand_name: brand_name.to_string(),
        style,
        colors: rules.palette.map(|(name, hex, role)| PaletteEntry {
            name: name.to_string(),
            hex: hex.to_string(),
            role,
        }),
        font: rules.font.to_string(),
        tagline: rules.tagline.to_string(),
        concept: rules.concept.replace("{brand}", brand_name),
        icon_suggestion: rules.icon.to_string(),
    }
}
