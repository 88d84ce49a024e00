use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{HashtagSet, Platform};
use crate::rules::{BONUS_TAGS, LONG_TAIL_PATTERNS, NICHE_PATTERNS, TRENDING_PATTERNS};

static NON_TAG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s]").expect("valid tag cleaner regex"));

static BONUS_RULES: Lazy<Vec<(Regex, [&'static str; 4])>> = Lazy::new(|| {
    BONUS_TAGS
        .iter()
        .map(|(pattern, tags)| (Regex::new(pattern).expect("valid bonus tag regex"), *tags))
        .collect()
});

/// The compact stem (`morningyoga`) and its title-cased form (`MorningYoga`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicStem {
    pub stem: String,
    pub title: String,
}

impl TopicStem {
    pub fn from_topic(topic: &str) -> Self {
        let lowered = topic.trim().to_lowercase();
        let cleaned = NON_TAG_CHARS.replace_all(&lowered, "");
        let words = cleaned.split_whitespace().collect::<Vec<_>>();

        Self {
            stem: words.concat(),
            title: words.iter().map(|word| title_case(word)).collect(),
        }
    }

    fn expand(&self, pattern: &str, year: i32) -> String {
        pattern
            .replace("{stem}", &self.stem)
            .replace("{title}", &self.title)
            .replace("{year}", &year.to_string())
    }
}

pub fn generate_hashtags(topic: &str, platform: Platform) -> HashtagSet {
    generate_hashtags_for_year(topic, platform, Utc::now().year())
}

pub fn generate_hashtags_for_year(topic: &str, platform: Platform, year: i32) -> HashtagSet {
    let stem = TopicStem::from_topic(topic);
    let expand_all = |patterns: &[&str]| -> Vec<String> {
        patterns
            .iter()
            .map(|pattern| stem.expand(pattern, year))
            .collect()
    };

    let mut niche = expand_all(&NICHE_PATTERNS[..]);
    // Bonus tags land after the base ten, so the cap below keeps the base tags.
    for (regex, tags) in BONUS_RULES.iter() {
        if regex.is_match(topic) {
            niche.extend(tags.iter().map(|tag| tag.to_string()));
        }
    }

    HashtagSet {
        popular: capped(expand_all(popular_patterns(platform)), HashtagSet::POPULAR_CAP),
        niche: capped(niche, HashtagSet::NICHE_CAP),
        trending: capped(expand_all(&TRENDING_PATTERNS[..]), HashtagSet::TRENDING_CAP),
        long_tail: capped(expand_all(&LONG_TAIL_PATTERNS[..]), HashtagSet::LONG_TAIL_CAP),
    }
}

fn popular_patterns(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Instagram => &[
            "#instagood",
            "#photooftheday",
            "#instagram",
            "#love",
            "#{stem}",
        ],
        Platform::TwitterX => &["#{stem}", "#trending", "#viral", "#{title}Today", "#MustRead"],
        Platform::YouTube => &[
            "#{stem}",
            "#youtube",
            "#viral",
            "#{title}Tutorial",
            "#subscribe",
        ],
        Platform::LinkedIn => &[
            "#{stem}",
            "#professional",
            "#business",
            "#career",
            "#networking",
        ],
        Platform::General => &["#{stem}", "#viral", "#trending", "#explore", "#{title}Lovers"],
    }
}

fn capped(mut tags: Vec<String>, cap: usize) -> Vec<String> {
    tags.truncate(cap);
    tags
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
