use std::env;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use parking_lot::Mutex;
use quill_core::{
    classify_chat, classify_english, classify_science, classify_script_domain,
    compose_chat_reply, generate_hashtags, generate_homework_solution, generate_logo_concept,
    generate_video_script, look_for, word_budget, ChatClassification, ChatIntent, EnglishBranch,
    GeneratedLook, HashtagSet, HistoryEntry, HomeworkSolution, LogoConcept, LogoStyle, Platform,
    ScienceBranch, Script, ScriptDomain, StyleSource, Subject, ToolKind,
};
use quill_observability::AppMetrics;
use quill_storage::{HistoryConfig, HistoryRepository, UsageCount};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuiteConfig {
    /// Fixes every random branch (jokes, fallback replies, image styles).
    pub seed: Option<u64>,
    pub history: HistoryConfig,
}

impl SuiteConfig {
    /// Sole reader of the `QUILL_*` variables. Malformed values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = HistoryConfig::default();

        Self {
            seed: parse_var(&lookup, "QUILL_SEED"),
            history: HistoryConfig {
                recent_limit: parse_var(&lookup, "QUILL_HISTORY_LIMIT")
                    .unwrap_or(defaults.recent_limit),
                max_entries: parse_var(&lookup, "QUILL_HISTORY_MAX")
                    .unwrap_or(defaults.max_entries),
            },
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring malformed environment value");
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub reply: String,
    pub script: Script,
    pub intent: ChatIntent,
}

enum RandomSource {
    Entropy,
    Seeded(Mutex<StdRng>),
}

pub struct ToolSuite<S>
where
    S: HistoryRepository,
{
    store: Arc<S>,
    metrics: Arc<AppMetrics>,
    rng: RandomSource,
}

impl<S> ToolSuite<S>
where
    S: HistoryRepository,
{
    pub fn new(config: SuiteConfig, store: Arc<S>, metrics: Arc<AppMetrics>) -> Self {
        let rng = match config.seed {
            Some(seed) => RandomSource::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
            None => RandomSource::Entropy,
        };

        Self {
            store,
            metrics,
            rng,
        }
    }

    pub fn metrics(&self) -> &AppMetrics {
        &self.metrics
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[instrument(skip(self, message))]
    pub async fn chat(&self, message: &str) -> ChatReply {
        let started = Instant::now();
        let message = message.trim();

        let classification = classify_chat(message);
        let ChatClassification { script, intent } = classification;
        let reply = self.with_rng(|rng| compose_chat_reply(classification, message, rng));

        if intent == ChatIntent::Unknown {
            self.metrics.inc_fallback(ToolKind::Chat);
        }
        if script == Script::Latin && matches!(intent, ChatIntent::Joke | ChatIntent::Unknown) {
            self.metrics.inc_random_branch();
        }
        info!(script = ?script, intent = ?intent, "chat composed");

        self.record(ToolKind::Chat, message, reply.clone(), started)
            .await;

        ChatReply {
            reply,
            script,
            intent,
        }
    }

    #[instrument(skip(self, prompt))]
    pub async fn image(&self, prompt: &str) -> GeneratedLook {
        let started = Instant::now();
        let prompt = prompt.trim();

        let look = self.with_rng(|rng| look_for(prompt, rng));
        if look.style_source == StyleSource::Random {
            self.metrics.inc_fallback(ToolKind::Image);
            self.metrics.inc_random_branch();
        }
        info!(style = %look.style, source = ?look.style_source, "image look composed");

        self.record(ToolKind::Image, prompt, look.history_line(), started)
            .await;
        look
    }

    #[instrument(skip(self, topic))]
    pub async fn script(&self, topic: &str, duration: &str) -> String {
        let started = Instant::now();
        let topic = topic.trim();

        let domain = classify_script_domain(topic);
        if domain == ScriptDomain::General {
            self.metrics.inc_fallback(ToolKind::Script);
        }
        let script = generate_video_script(topic, duration);
        info!(domain = ?domain, words = word_budget(duration), "video script composed");

        self.record(
            ToolKind::Script,
            format!("{topic} [{duration}]"),
            script.clone(),
            started,
        )
        .await;
        script
    }

    #[instrument(skip(self, brand_name))]
    pub async fn logo(&self, brand_name: &str, style: LogoStyle) -> LogoConcept {
        let started = Instant::now();
        let brand_name = brand_name.trim();

        let concept = generate_logo_concept(brand_name, style);
        info!(style = %style, "logo concept composed");

        self.record(
            ToolKind::Logo,
            format!("{brand_name} [{style}]"),
            concept.history_line(),
            started,
        )
        .await;
        concept
    }

    #[instrument(skip(self, topic))]
    pub async fn hashtags(&self, topic: &str, platform: Platform) -> HashtagSet {
        let started = Instant::now();
        let topic = topic.trim();

        let set = generate_hashtags(topic, platform);
        info!(platform = %platform, tags = set.len(), "hashtags composed");

        self.record(
            ToolKind::Hashtag,
            format!("{topic} [{platform}]"),
            set.history_line(),
            started,
        )
        .await;
        set
    }

    #[instrument(skip(self, question))]
    pub async fn homework(&self, question: &str, subject: Subject) -> HomeworkSolution {
        let started = Instant::now();
        let question = question.trim();

        let unmatched = match subject {
            Subject::Science => classify_science(question) == ScienceBranch::General,
            Subject::English => classify_english(question) == EnglishBranch::General,
            Subject::General => true,
            Subject::Math | Subject::History => false,
        };
        if unmatched {
            self.metrics.inc_fallback(ToolKind::Homework);
        }

        let solution = generate_homework_solution(question, subject);
        info!(subject = %subject, key_terms = solution.key_terms.len(), "homework composed");

        self.record(
            ToolKind::Homework,
            format!("[{subject}] {question}"),
            solution.summary.clone(),
            started,
        )
        .await;
        solution
    }

    pub async fn history(&self, tool: ToolKind) -> Result<Vec<HistoryEntry>> {
        self.store.list_recent(tool).await
    }

    pub async fn all_history(&self) -> Result<Vec<HistoryEntry>> {
        self.store.list_all_recent().await
    }

    pub async fn usage(&self) -> Result<Vec<UsageCount>> {
        self.store.usage_counts().await
    }

    pub async fn clear_history(&self, tool: ToolKind) -> Result<u64> {
        let removed = self.store.clear(tool).await?;
        info!(tool = %tool, removed, "history cleared");
        Ok(removed)
    }

    fn with_rng<T>(&self, compose: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match &self.rng {
            RandomSource::Entropy => compose(&mut rand::thread_rng()),
            RandomSource::Seeded(rng) => compose(&mut *rng.lock()),
        }
    }

    async fn record(
        &self,
        tool: ToolKind,
        input: impl Into<String>,
        output: String,
        started: Instant,
    ) {
        self.metrics.inc_composition(tool);
        self.metrics.observe_latency(started.elapsed());

        if let Err(err) = self.store.save(HistoryEntry::new(tool, input, output)).await {
            self.metrics.inc_history_failure();
            warn!(tool = %tool, error = %format!("{err:#}"), "history save failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_storage::MemoryStore;

    fn suite(seed: Option<u64>) -> ToolSuite<MemoryStore> {
        ToolSuite::new(
            SuiteConfig {
                seed,
                ..SuiteConfig::default()
            },
            Arc::new(MemoryStore::new()),
            AppMetrics::shared(),
        )
    }

    #[test]
    fn config_reads_quill_variables() {
        let config = SuiteConfig::from_lookup(|key| match key {
            "QUILL_SEED" => Some(" 42 ".to_string()),
            "QUILL_HISTORY_LIMIT" => Some("5".to_string()),
            _ => None,
        });
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.history.recent_limit, 5);
        assert_eq!(config.history.max_entries, 500);
    }

    #[test]
    fn malformed_variables_fall_back_to_defaults() {
        let config = SuiteConfig::from_lookup(|key| match key {
            "QUILL_SEED" => Some("abc".to_string()),
            "QUILL_HISTORY_MAX" => Some("-1".to_string()),
            _ => None,
        });
        assert_eq!(config, SuiteConfig::default());
    }

    #[tokio::test]
    async fn chat_trims_and_records() {
        let suite = suite(Some(1));
        let reply = suite.chat("   hello there  ").await;
        assert_eq!(reply.intent, ChatIntent::Greeting);

        let history = suite.history(ToolKind::Chat).await.unwrap();
        assert_eq!(history[0].input, "hello there");
        assert_eq!(history[0].output, reply.reply);
        assert_eq!(suite.metrics().compositions(ToolKind::Chat), 1);
    }

    #[tokio::test]
    async fn seeded_suites_agree() {
        let first = suite(Some(99));
        let second = suite(Some(99));
        for message in ["tell me a joke", "purple elephants", "why moss?"] {
            assert_eq!(first.chat(message).await, second.chat(message).await);
        }
        assert_eq!(first.metrics().fallbacks(ToolKind::Chat), 2);
    }

    #[tokio::test]
    async fn history_inputs_follow_tool_formats() {
        let suite = suite(None);
        suite.script("AI productivity", "1 min").await;
        suite.logo("Acme", LogoStyle::Bold).await;
        suite.hashtags("chess", Platform::TwitterX).await;
        suite.homework("What is 2 + 2?", Subject::Math).await;

        let all = suite.all_history().await.unwrap();
        let inputs = all.iter().map(|e| e.input.as_str()).collect::<Vec<_>>();
        assert_eq!(
            inputs,
            vec![
                "[Math] What is 2 + 2?",
                "chess [Twitter/X]",
                "Acme [Bold]",
                "AI productivity [1 min]",
            ]
        );
    }

    #[tokio::test]
    async fn random_image_styles_count_as_fallbacks() {
        let suite = suite(Some(5));
        let look = suite.image("a quiet mountain at dawn").await;
        assert_eq!(look.style_source, StyleSource::Random);
        assert_eq!(suite.metrics().fallbacks(ToolKind::Image), 1);
        assert_eq!(suite.metrics().snapshot().random_branch_total, 1);
    }
}
