use chrono::Utc;
use rand::Rng;

use crate::intent::classify_image_style;
use crate::models::{GeneratedLook, StyleSource};
use crate::rules::{GRADIENTS, IMAGE_STYLES};
use crate::select::{pick, stable_index};

/// Same prompt, same gradient, across runs and platforms.
pub fn gradient_for(prompt: &str) -> &'static str {
    GRADIENTS[stable_index(prompt, GRADIENTS.len())]
}

pub fn look_for<R>(prompt: &str, rng: &mut R) -> GeneratedLook
where
    R: Rng + ?Sized,
{
    let (style, style_source) = match classify_image_style(prompt) {
        Some(style) => (style, StyleSource::Classified),
        None => (*pick(rng, &IMAGE_STYLES), StyleSource::Random),
    };

    GeneratedLook {
        prompt: prompt.to_string(),
        gradient: gradient_for(prompt).to_string(),
        style,
        style_source,
        generated_at: Utc::now(),
    }
}
