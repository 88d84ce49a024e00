use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} label: {value:?}")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownLabel {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Implements `label`, `Display`, strict `FromStr` and lenient `from_label` for a
/// closed enum whose labels are the UI strings.
macro_rules! labelled_enum {
    ($ty:ident, $kind:literal, default = $default:ident, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }

            /// Never fails: unrecognised labels resolve to the default variant.
            pub fn from_label(value: &str) -> Self {
                value.parse().unwrap_or_default()
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                $ty::$default
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownLabel;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let wanted = value.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| UnknownLabel::new($kind, value))
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    Latin,
    Devanagari,
}

impl Script {
    pub fn is_hindi(self) -> bool {
        self == Self::Devanagari
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatIntent {
    Greeting,
    HowAreYou,
    Weather,
    Identity,
    Help,
    Thanks,
    Origin,
    Capability,
    Joke,
    Math,
    Relationships,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatClassification {
    pub script: Script,
    pub intent: ChatIntent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptDomain {
    Technology,
    Health,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogoStyle {
    Modern,
    Minimal,
    Bold,
    Playful,
    Professional,
}

labelled_enum!(LogoStyle, "logo style", default = Modern, {
    Modern => "Modern",
    Minimal => "Minimal",
    Bold => "Bold",
    Playful => "Playful",
    Professional => "Professional",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteRole {
    Primary,
    Secondary,
    Accent,
    Background,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub hex: String,
    pub role: PaletteRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoConcept {
    pub brand_name: String,
    pub style: LogoStyle,
    pub colors: [PaletteEntry; 3],
    pub font: String,
    pub tagline: String,
    pub concept: String,
    pub icon_suggestion: String,
}

impl LogoConcept {
    pub fn history_line(&self) -> String {
        let hexes = self
            .colors
            .iter()
            .map(|color| color.hex.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Logo concept for \"{}\" — Style: {}, Colors: {}",
            self.brand_name, self.style, hexes
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    #[serde(rename = "Twitter/X")]
    TwitterX,
    YouTube,
    LinkedIn,
    General,
}

labelled_enum!(Platform, "platform", default = General, {
    Instagram => "Instagram",
    TwitterX => "Twitter/X",
    YouTube => "YouTube",
    LinkedIn => "LinkedIn",
    General => "General",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashtagSet {
    pub popular: Vec<String>,
    pub niche: Vec<String>,
    pub trending: Vec<String>,
    pub long_tail: Vec<String>,
}

impl HashtagSet {
    pub const POPULAR_CAP: usize = 5;
    pub const NICHE_CAP: usize = 10;
    pub const TRENDING_CAP: usize = 5;
    pub const LONG_TAIL_CAP: usize = 8;

    /// Every tag in tier order: popular, niche, trending, long tail.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.popular
            .iter()
            .chain(&self.niche)
            .chain(&self.trending)
            .chain(&self.long_tail)
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.popular.len() + self.niche.len() + self.trending.len() + self.long_tail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn history_line(&self) -> String {
        self.all().collect::<Vec<_>>().join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Math,
    Science,
    History,
    English,
    General,
}

labelled_enum!(Subject, "subject", default = General, {
    Math => "Math",
    Science => "Science",
    History => "History",
    English => "English",
    General => "General",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScienceBranch {
    Physics,
    Chemistry,
    Biology,
    General,
}

impl ScienceBranch {
    pub fn label(self) -> &'static str {
        match self {
            Self::Physics => "Physics",
            Self::Chemistry => "Chemistry",
            Self::Biology => "Biology",
            Self::General => "General Science",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnglishBranch {
    Grammar,
    Writing,
    Literature,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub content: String,
}

impl Step {
    pub(crate) fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeworkSolution {
    pub steps: [Step; 5],
    pub summary: String,
    pub key_terms: Vec<String>,
    pub extra_detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageStyle {
    Photorealistic,
    #[serde(rename = "Digital Art")]
    DigitalArt,
    #[serde(rename = "Oil Painting")]
    OilPainting,
    Watercolor,
    #[serde(rename = "Concept Art")]
    ConceptArt,
    #[serde(rename = "Anime Style")]
    AnimeStyle,
    #[serde(rename = "3D Render")]
    Render3d,
    Sketch,
}

labelled_enum!(ImageStyle, "image style", default = DigitalArt, {
    Photorealistic => "Photorealistic",
    DigitalArt => "Digital Art",
    OilPainting => "Oil Painting",
    Watercolor => "Watercolor",
    ConceptArt => "Concept Art",
    AnimeStyle => "Anime Style",
    Render3d => "3D Render",
    Sketch => "Sketch",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleSource {
    Classified,
    /// Uniform pick; repeated calls with the same prompt may differ.
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedLook {
    pub prompt: String,
    pub gradient: String,
    pub style: ImageStyle,
    pub style_source: StyleSource,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedLook {
    pub fn history_line(&self) -> String {
        format!("Image generated: \"{}\" — Style: {}", self.prompt, self.style)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    Chat,
    Image,
    Script,
    Logo,
    Hashtag,
    Homework,
}

impl ToolKind {
    pub const ALL: [ToolKind; 6] = [
        Self::Chat,
        Self::Image,
        Self::Script,
        Self::Logo,
        Self::Hashtag,
        Self::Homework,
    ];

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Image => "image",
            Self::Script => "script",
            Self::Logo => "logo",
            Self::Hashtag => "hashtag",
            Self::Homework => "homework",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let wanted = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|tool| tool.as_code() == wanted)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub tool: ToolKind,
    pub input: String,
    pub output: String,
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(tool: ToolKind, input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool,
            input: input.into(),
            output: output.into(),
            recorded_at: Utc::now(),
        }
    }
}
