//! Read-only lookup data shared by the composers.

use crate::models::{ImageStyle, LogoStyle, PaletteRole, ScriptDomain};

pub const DEFAULT_WORD_BUDGET: u32 = 450;

pub const WORD_BUDGETS: &[(&str, u32)] = &[
    ("1 min", 150),
    ("3 min", 450),
    ("5 min", 750),
    ("10 min", 1500),
];

pub const HINDI_GREETING: &str =
    "नमस्ते! मैं आपकी AI सहायक हूँ। आज मैं आपकी कैसे मदद कर सकती हूँ? 😊";
pub const HINDI_WEATHER: &str = "आज का मौसम सुहाना लग रहा है! हालाँकि मुझे real-time डेटा नहीं मिलता, लेकिन आप किसी भी मौसम ऐप पर जाँच सकते हैं। आपके शहर में कैसा मौसम है?";
pub const HINDI_HELP: &str = "बिल्कुल! मैं आपकी मदद करने के लिए यहाँ हूँ। आप मुझसे किसी भी विषय पर बात कर सकते हैं — शिक्षा, मनोरंजन, टेक्नोलॉजी, या और कुछ भी!";
pub const HINDI_IDENTITY: &str = "मैं एक AI चैटबॉट हूँ। मुझे आपकी सहायता करने के लिए बनाया गया है। मैं सवालों के जवाब देने, जानकारी देने और बातचीत करने में माहिर हूँ।";
pub const HINDI_THANKS: &str = "आपका स्वागत है! अगर आपको और कोई मदद चाहिए तो बताइए। 🙏";

pub const ENGLISH_GREETING: &str = "Hey there! 👋 I'm your AI assistant. What can I help you with today? Feel free to ask me anything — I'm here to help!";
pub const ENGLISH_HOW_ARE_YOU: &str = "I'm doing great, thank you for asking! As an AI, I don't have feelings per se, but I'm fully charged and ready to help you. How about you? 😊";
pub const ENGLISH_WEATHER: &str = "I don't have access to real-time weather data, but you can check weather.com or your phone's weather app for accurate forecasts. Is there anything else I can help with?";
pub const ENGLISH_IDENTITY: &str = "I'm your AI assistant, here to help with questions, conversations, and more! I don't have a specific name, but you can call me whatever you like. 😄";
pub const ENGLISH_HELP: &str = "Of course! I'm here to help. I can answer questions, explain concepts, help brainstorm ideas, write content, and have conversations on virtually any topic. What do you need?";
pub const ENGLISH_THANKS: &str = "You're very welcome! It's my pleasure to assist. Feel free to come back anytime you need help. 🙏";
pub const ENGLISH_ORIGIN: &str = "I'm an AI assistant built as part of this AI Tools Suite. I'm designed to help you with conversations, answer questions, and assist with various tasks!";
pub const ENGLISH_CAPABILITY: &str = "Great question! I can:\n• Answer questions on almost any topic\n• Help you brainstorm and think through problems\n• Explain complex concepts in simple terms\n• Have meaningful conversations\n• Provide advice and suggestions\n\nWhat would you like to explore?";
pub const ENGLISH_MATH: &str = "Math is fascinating! For calculations, I can help explain concepts and solve problems step by step. What mathematical challenge are you working on?";
pub const ENGLISH_RELATIONSHIPS: &str = "That's a deeply human topic. Relationships and emotions are complex, beautiful, and sometimes challenging. I'm happy to listen and share thoughts. What's on your mind?";

pub const JOKES: [&str; 3] = [
    "Why don't scientists trust atoms? Because they make up everything! 😄",
    "I told my computer I needed a break. Now it won't stop sending me Kit-Kat ads. 🍫",
    "Why do programmers prefer dark mode? Because light attracts bugs! 🐛",
];

/// Talking points for a script domain; `{topic}` is replaced with the literal topic.
pub fn talking_points(domain: ScriptDomain) -> [&'static str; 5] {
    match domain {
        ScriptDomain::Technology => [
            "{topic} represents a fundamental shift in how we interact with technology. At its core, it's about solving real-world problems more efficiently.",
            "Research shows that professionals who master {topic} see a 3x increase in productivity and open doors to opportunities that didn't exist 5 years ago.",
            "Begin with the fundamentals — master the core concepts before moving to advanced techniques. Resources like documentation and communities are your best friends.",
            "The most successful practitioners of {topic} combine technical knowledge with creative problem-solving. It's not just about tools, but mindset.",
            "The best time to learn {topic} was yesterday. The second best time is right now. Small consistent steps beat occasional big efforts every time.",
        ],
        ScriptDomain::Health => [
            "{topic} is not a one-size-fits-all approach. Your body is unique, and what works for someone else may need adjustment for your specific needs.",
            "Studies consistently show that consistency trumps intensity when it comes to {topic}. Showing up 80% of the time beats occasional perfect efforts.",
            "Start with a baseline assessment. Know where you are before deciding where you want to go — track the metrics that actually matter for {topic}.",
            "The mental component of {topic} is often overlooked but accounts for 50% of success. Mindset shifts are as important as physical actions.",
            "Progress in {topic} isn't linear. Expect plateaus, embrace them as consolidation phases, and trust the process.",
        ],
        ScriptDomain::General => [
            "{topic} has evolved significantly over the past decade. Understanding its history helps us appreciate its current form and predict its future direction.",
            "The real value of {topic} lies not just in theory but in practical application. Real-world examples show us what's truly possible.",
            "Start small and iterate. Pick the most important aspect of {topic} and focus on mastering it before expanding your scope.",
            "Community and collaboration accelerate learning. Find others interested in {topic} and learn from their experiences.",
            "Every expert in {topic} started as a complete beginner. The only difference between them and you is time and consistent effort.",
        ],
    }
}

pub struct StyleRules {
    pub palette: [(&'static str, &'static str, PaletteRole); 3],
    pub font: &'static str,
    pub tagline: &'static str,
    /// `{brand}` is replaced with the brand name.
    pub concept: &'static str,
    pub icon: &'static str,
}

pub fn style_rules(style: LogoStyle) -> StyleRules {
    match style {
        LogoStyle::Modern => StyleRules {
            palette: [
                ("Midnight", "#0F172A", PaletteRole::Primary),
                ("Electric Cyan", "#06B6D4", PaletteRole::Accent),
                ("Slate", "#94A3B8", PaletteRole::Secondary),
            ],
            font: "Sora or Plus Jakarta Sans — clean geometric with personality",
            tagline: "Redefining what's possible",
            concept: "A forward-thinking mark that positions {brand} as an innovator. The logo uses geometric precision with subtle dynamic elements — suggesting movement and progress. Clean lines communicate reliability while the modern palette signals a tech-forward brand that's ahead of the curve.",
            icon: "Abstract geometric mark — hexagon or diamond with inner glow",
        },
        LogoStyle::Minimal => StyleRules {
            palette: [
                ("Obsidian", "#1C1C1C", PaletteRole::Primary),
                ("Pure White", "#FAFAFA", PaletteRole::Background),
                ("Graphite", "#6B7280", PaletteRole::Secondary),
            ],
            font: "Inter or Helvetica Neue — pure clarity, nothing extraneous",
            tagline: "Less noise. More signal.",
            concept: "Pure distillation of {brand}'s essence. The logo strips away everything non-essential, leaving only what truly communicates the brand's core value. Negative space is used intentionally — what's NOT there is as important as what IS. This approach signals confidence and sophistication.",
            icon: "Single letterform from brand initials, perfectly proportioned",
        },
        LogoStyle::Bold => StyleRules {
            palette: [
                ("Deep Crimson", "#DC2626", PaletteRole::Primary),
                ("Jet Black", "#111827", PaletteRole::Background),
                ("Gold Accent", "#F59E0B", PaletteRole::Accent),
            ],
            font: "Bebas Neue or Black Han Sans — maximum impact, zero compromise",
            tagline: "Make your mark.",
            concept: "{brand} demands attention. This logo concept uses maximum contrast and strong typography to create an undeniable visual presence. Perfect for brands that want to dominate their space and leave a lasting impression on every person who encounters it.",
            icon: "Strong shield or angular emblem with bold initials",
        },
        LogoStyle::Playful => StyleRules {
            palette: [
                ("Coral", "#FB7185", PaletteRole::Primary),
                ("Sunshine", "#FBBF24", PaletteRole::Secondary),
                ("Mint", "#34D399", PaletteRole::Accent),
            ],
            font: "Nunito or Fredoka One — rounded, friendly, approachable",
            tagline: "Where ideas come alive!",
            concept: "{brand} radiates warmth and approachability. The logo uses rounded forms, vibrant colors, and dynamic energy to communicate a brand that's fun to interact with. This style resonates particularly well with younger audiences and lifestyle brands.",
            icon: "Rounded character or mascot element with expressive features",
        },
        LogoStyle::Professional => StyleRules {
            palette: [
                ("Navy Blue", "#1E3A5F", PaletteRole::Primary),
                ("Silver", "#C0C0C0", PaletteRole::Secondary),
                ("Off-White", "#F8F9FA", PaletteRole::Background),
            ],
            font: "Libre Baskerville or Merriweather — trustworthy, established",
            tagline: "Excellence in every detail.",
            concept: "{brand} communicates trust, expertise, and longevity. Classic proportions and refined typography signal a brand with heritage and substance. This concept instills confidence — clients feel they're in capable hands.",
            icon: "Classic badge or crest with clean inner details",
        },
    }
}

/// Suffix patterns for the niche tier; `{stem}` is the compact topic tag.
pub const NICHE_PATTERNS: [&str; 10] = [
    "#{stem}community",
    "#{stem}tips",
    "#{stem}life",
    "#{stem}daily",
    "#{stem}vibes",
    "#{stem}goals",
    "#{stem}inspiration",
    "#best{stem}",
    "#{stem}world",
    "#{stem}culture",
];

pub const LONG_TAIL_PATTERNS: [&str; 10] = [
    "#{stem}forbeginners",
    "#{stem}tutorial{year}",
    "#best{stem}tips",
    "#how{stem}works",
    "#{stem}explained",
    "#{stem}stepbystep",
    "#{stem}ideas",
    "#{stem}hacks",
    "#{stem}secrets",
    "#{stem}101",
];

/// `{title}` is the title-cased stem.
pub const TRENDING_PATTERNS: [&str; 5] = [
    "#{title}{year}",
    "#New{title}",
    "#{title}Trend",
    "#{title}Challenge",
    "#{title}Viral",
];

pub const BONUS_TAGS: &[(&str, [&str; 4])] = &[
    (
        r"(?i)food|recipe|cook|eat|delicious",
        ["#foodphotography", "#foodie", "#yummy", "#homecooking"],
    ),
    (
        r"(?i)travel|trip|journey|explore",
        ["#wanderlust", "#travelgram", "#adventure", "#explore"],
    ),
    (
        r"(?i)fashion|style|outfit|clothes",
        ["#ootd", "#fashionista", "#styleinspo", "#lookbook"],
    ),
    (
        r"(?i)fitness|gym|workout|health",
        ["#fitfam", "#gymlife", "#healthylifestyle", "#motivated"],
    ),
    (
        r"(?i)tech|ai|software|code",
        ["#techinnovation", "#ai", "#coding", "#developer"],
    ),
];

pub const GRADIENTS: [&str; 12] = [
    "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
    "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
    "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
    "linear-gradient(135deg, #a18cd1 0%, #fbc2eb 100%)",
    "linear-gradient(135deg, #ffecd2 0%, #fcb69f 100%)",
    "linear-gradient(135deg, #ff9a9e 0%, #fecfef 100%)",
    "linear-gradient(135deg, #a1c4fd 0%, #c2e9fb 100%)",
    "linear-gradient(135deg, #d4fc79 0%, #96e6a1 100%)",
    "linear-gradient(135deg, #84fab0 0%, #8fd3f4 100%)",
    "linear-gradient(135deg, #cfd9df 0%, #e2ebf0 100%)",
];

pub const IMAGE_STYLES: [ImageStyle; 8] = [
    ImageStyle::Photorealistic,
    ImageStyle::DigitalArt,
    ImageStyle::OilPainting,
    ImageStyle::Watercolor,
    ImageStyle::ConceptArt,
    ImageStyle::AnimeStyle,
    ImageStyle::Render3d,
    ImageStyle::Sketch,
];
