pub mod chat;
pub mod hashtags;
pub mod homework;
pub mod intent;
pub mod logo;
pub mod look;
pub mod models;
pub mod rules;
pub mod script;
pub mod select;

pub use chat::{compose_chat_reply, generate_chat_response};
pub use hashtags::{generate_hashtags, generate_hashtags_for_year, TopicStem};
pub use homework::{extract_numbers, generate_homework_solution, render_number};
pub use intent::{
    classify_chat, classify_english, classify_image_style, classify_science,
    classify_script_domain, detect_script, RuleTable,
};
pub use logo::generate_logo_concept;
pub use look::{gradient_for, look_for};
pub use models::*;
pub use script::{generate_video_script, word_budget};
pub use select::{rolling_hash, stable_index};
