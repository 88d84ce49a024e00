use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{
    ChatClassification, ChatIntent, EnglishBranch, ImageStyle, Script, ScienceBranch,
    ScriptDomain,
};

/// Ordered `(pattern, outcome)` pairs. The first pattern that matches decides, so
/// overlapping rules resolve by position.
pub struct RuleTable<T> {
    rules: Vec<(Regex, T)>,
}

impl<T: Copy> RuleTable<T> {
    pub fn new(entries: &[(&str, T)]) -> Self {
        let rules = entries
            .iter()
            .map(|(pattern, outcome)| {
                let regex = Regex::new(pattern).expect("valid rule table regex");
                (regex, *outcome)
            })
            .collect();

        Self { rules }
    }

    pub fn first_match(&self, text: &str) -> Option<T> {
        self.rules
            .iter()
            .find(|(regex, _)| regex.is_match(text))
            .map(|(_, outcome)| *outcome)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// Hindi rules run against the raw input; no case folding.
static HINDI_CHAT_RULES: Lazy<RuleTable<ChatIntent>> = Lazy::new(|| {
    RuleTable::new(&[
        ("नमस्|हेलो|हाय|हि", ChatIntent::Greeting),
        ("मौसम|weather", ChatIntent::Weather),
        ("मदद|help|सहायता", ChatIntent::Help),
        ("कौन|तुम|आप", ChatIntent::Identity),
        ("धन्यवाद|शुक्रिया", ChatIntent::Thanks),
    ])
});

// Help is listed before thanks: "thanks, can you help?" is a help request.
static ENGLISH_CHAT_RULES: Lazy<RuleTable<ChatIntent>> = Lazy::new(|| {
    RuleTable::new(&[
        (r"(?i)^(hi|hello|hey|helo|namaste|greetings)", ChatIntent::Greeting),
        (r"(?i)how are you|how r u|how do you do", ChatIntent::HowAreYou),
        (r"(?i)weather", ChatIntent::Weather),
        (r"(?i)what (is|are) (your name|you called)", ChatIntent::Identity),
        (r"(?i)help|assist|support", ChatIntent::Help),
        (r"(?i)thank(s| you)", ChatIntent::Thanks),
        (r"(?i)who (made|created|built) you", ChatIntent::Origin),
        (r"(?i)what can you do", ChatIntent::Capability),
        (r"(?i)joke|funny|humor", ChatIntent::Joke),
        (r"(?i)math|calculate|compute", ChatIntent::Math),
        (r"(?i)love|relationship|feelings", ChatIntent::Relationships),
    ])
});

static SCRIPT_DOMAIN_RULES: Lazy<RuleTable<ScriptDomain>> = Lazy::new(|| {
    RuleTable::new(&[
        (r"(?i)tech|ai|machine|software|code|program", ScriptDomain::Technology),
        (r"(?i)health|fitness|workout|diet|nutrition", ScriptDomain::Health),
    ])
});

static SCIENCE_RULES: Lazy<RuleTable<ScienceBranch>> = Lazy::new(|| {
    RuleTable::new(&[
        (
            r"(?i)force|motion|velocity|acceleration|energy|gravity|newton",
            ScienceBranch::Physics,
        ),
        (
            r"(?i)atom|molecule|element|compound|reaction|periodic|bond",
            ScienceBranch::Chemistry,
        ),
        (
            r"(?i)cell|organism|dna|evolution|photosynthesis|gene|species",
            ScienceBranch::Biology,
        ),
    ])
});

static ENGLISH_RULES: Lazy<RuleTable<EnglishBranch>> = Lazy::new(|| {
    RuleTable::new(&[
        (
            r"(?i)grammar|sentence|verb|noun|adjective|tense|pronoun",
            EnglishBranch::Grammar,
        ),
        (
            r"(?i)essay|paragraph|write|draft|thesis|argument",
            EnglishBranch::Writing,
        ),
        (
            r"(?i)story|novel|poem|character|theme|metaphor|symbolism",
            EnglishBranch::Literature,
        ),
    ])
});

static IMAGE_STYLE_RULES: Lazy<RuleTable<ImageStyle>> = Lazy::new(|| {
    RuleTable::new(&[
        (
            r"(?i)photo|real|picture|portrait|landscape",
            ImageStyle::Photorealistic,
        ),
        (r"(?i)anime|manga|cartoon|kawaii", ImageStyle::AnimeStyle),
        (r"(?i)paint|oil|watercolor|brush", ImageStyle::OilPainting),
        (r"(?i)3d|render|cg|digital", ImageStyle::Render3d),
        (r"(?i)sketch|draw|pencil|line", ImageStyle::Sketch),
    ])
});

pub fn detect_script(text: &str) -> Script {
    let devanagari = text
        .chars()
        .any(|ch| ('\u{0900}'..='\u{097F}').contains(&ch));

    if devanagari {
        Script::Devanagari
    } else {
        Script::Latin
    }
}

pub fn classify_chat(input: &str) -> ChatClassification {
    let script = detect_script(input);

    let intent = match script {
        Script::Devanagari => HINDI_CHAT_RULES.first_match(input),
        Script::Latin => ENGLISH_CHAT_RULES.first_match(&input.trim().to_lowercase()),
    };

    ChatClassification {
        script,
        intent: intent.unwrap_or(ChatIntent::Unknown),
    }
}

pub fn classify_script_domain(topic: &str) -> ScriptDomain {
    SCRIPT_DOMAIN_RULES
        .first_match(&topic.to_lowercase())
        .unwrap_or(ScriptDomain::General)
}

pub fn classify_science(question: &str) -> ScienceBranch {
    SCIENCE_RULES
        .first_match(&question.to_lowercase())
        .unwrap_or(ScienceBranch::General)
}

pub fn classify_english(question: &str) -> EnglishBranch {
    ENGLISH_RULES
        .first_match(&question.to_lowercase())
        .unwrap_or(EnglishBranch::General)
}

/// `None` when no keyword matches; the caller decides the fallback.
pub fn classify_image_style(prompt: &str) -> Option<ImageStyle> {
    IMAGE_STYLE_RULES.first_match(&prompt.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_devanagari() {
        assert_eq!(detect_script("नमस्ते"), Script::Devanagari);
        assert_eq!(detect_script("hello नमस्ते"), Script::Devanagari);
        assert_eq!(detect_script("hello"), Script::Latin);
        assert_eq!(detect_script(""), Script::Latin);
    }

    #[test]
    fn help_wins_over_thanks() {
        let result = classify_chat("thanks, can you help?");
        assert_eq!(result.intent, ChatIntent::Help);
        assert_eq!(classify_chat("Thank you so much").intent, ChatIntent::Thanks);
    }

    #[test]
    fn greeting_is_anchored_to_the_start() {
        assert_eq!(classify_chat("  Hello there").intent, ChatIntent::Greeting);
        assert_eq!(classify_chat("oh hello").intent, ChatIntent::Unknown);
        // Prefix match without a word boundary.
        assert_eq!(classify_chat("history of rome").intent, ChatIntent::Greeting);
    }

    #[test]
    fn hindi_rules_use_their_own_table() {
        let result = classify_chat("नमस्ते");
        assert_eq!(result.script, Script::Devanagari);
        assert_eq!(result.intent, ChatIntent::Greeting);

        assert_eq!(classify_chat("आज मौसम कैसा है").intent, ChatIntent::Weather);
        assert_eq!(classify_chat("धन्यवाद").intent, ChatIntent::Thanks);
        assert_eq!(classify_chat("क्या बात").intent, ChatIntent::Unknown);
    }

    #[test]
    fn technology_is_tested_before_health() {
        assert_eq!(
            classify_script_domain("AI for fitness"),
            ScriptDomain::Technology
        );
        assert_eq!(classify_script_domain("Healthy diet"), ScriptDomain::Health);
        assert_eq!(classify_script_domain("Gardening"), ScriptDomain::General);
    }

    #[test]
    fn science_branches_follow_priority() {
        assert_eq!(
            classify_science("How does energy affect a cell?"),
            ScienceBranch::Physics
        );
        assert_eq!(classify_science("What is a covalent bond?"), ScienceBranch::Chemistry);
        assert_eq!(classify_science("Explain DNA replication"), ScienceBranch::Biology);
        assert_eq!(classify_science("Why is the sky blue?"), ScienceBranch::General);
    }

    #[test]
    fn english_branches_follow_priority() {
        assert_eq!(
            classify_english("Write a sentence with a verb"),
            EnglishBranch::Grammar
        );
        assert_eq!(classify_english("Draft an essay outline"), EnglishBranch::Writing);
        assert_eq!(
            classify_english("Main theme of the novel"),
            EnglishBranch::Literature
        );
        assert_eq!(classify_english("Spell 'rhythm'"), EnglishBranch::General);
    }

    #[test]
    fn image_styles_follow_priority() {
        assert_eq!(
            classify_image_style("Realistic anime portrait"),
            Some(ImageStyle::Photorealistic)
        );
        assert_eq!(
            classify_image_style("Kawaii cat"),
            Some(ImageStyle::AnimeStyle)
        );
        assert_eq!(classify_image_style("A 3D castle"), Some(ImageStyle::Render3d));
        assert_eq!(classify_image_style("Mystic forest at dusk"), None);
    }
}
