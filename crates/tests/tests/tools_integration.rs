use std::sync::Arc;

use anyhow::{bail, Result};
use quill_agents::{SuiteConfig, ToolSuite};
use quill_core::{
    gradient_for, ChatIntent, HistoryEntry, ImageStyle, LogoStyle, Platform, Script, StyleSource, Subject,
    ToolKind,
};
use quill_observability::AppMetrics;
use quill_storage::{HistoryConfig, HistoryRepository, MemoryStore, UsageCount};

struct FailingStore;

impl HistoryRepository for FailingStore {
    async fn save(&self, _entry: HistoryEntry) -> Result<()> {
        bail!("disk full")
    }

    async fn list_recent(&self, _tool: ToolKind) -> Result<Vec<HistoryEntry>> {
        bail!("disk full")
    }

    async fn list_all_recent(&self) -> Result<Vec<HistoryEntry>> {
        bail!("disk full")
    }

    async fn usage_counts(&self) -> Result<Vec<UsageCount>> {
        bail!("disk full")
    }

    async fn clear(&self, _tool: ToolKind) -> Result<u64> {
        bail!("disk full")
    }
}

fn memory_suite(seed: u64) -> ToolSuite<MemoryStore> {
    ToolSuite::new(
        SuiteConfig {
            seed: Some(seed),
            history: HistoryConfig::default(),
        },
        Arc::new(MemoryStore::new()),
        AppMetrics::shared(),
    )
}

#[tokio::test]
async fn ai_productivity_across_tools() {
    let suite = memory_suite(7);

    let script = suite.script("AI productivity", "1 min").await;
    assert!(script.starts_with("🎬 VIDEO SCRIPT: \"AI PRODUCTIVITY\"\nDuration: 1 min (~150 words)"));
    assert!(script.contains("AI productivity represents a fundamental shift"));

    let look = suite.image("AI productivity").await;
    assert_eq!(
        look.gradient,
        "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)"
    );

    let tags = suite.hashtags("AI productivity", Platform::YouTube).await;
    assert_eq!(tags.popular[0], "#aiproductivity");
    assert_eq!(tags.popular[3], "#AiProductivityTutorial");
}

#[tokio::test]
async fn hindi_messages_get_hindi_replies() {
    let suite = memory_suite(1);
    let reply = suite.chat("नमस्ते दोस्त").await;
    assert_eq!(reply.script, Script::Devanagari);
    assert_eq!(reply.intent, ChatIntent::Greeting);
    assert!(reply.reply.starts_with("नमस्ते"));
}

#[tokio::test]
async fn gradients_do_not_depend_on_the_seed() {
    let first = memory_suite(1).image("sunset over the ocean").await;
    let second = memory_suite(2).image("sunset over the ocean").await;
    assert_eq!(first.gradient, second.gradient);

    let classified = memory_suite(3).image("oil on canvas harbour").await;
    assert_eq!(classified.style, ImageStyle::OilPainting);
    assert_eq!(classified.style_source, StyleSource::Classified);
}

#[tokio::test]
async fn failing_history_never_changes_results() {
    let metrics = AppMetrics::shared();
    let failing = ToolSuite::new(
        SuiteConfig {
            seed: Some(4),
            history: HistoryConfig::default(),
        },
        Arc::new(FailingStore),
        metrics.clone(),
    );
    let healthy = memory_suite(4);

    assert_eq!(
        failing.chat("tell me a joke").await,
        healthy.chat("tell me a joke").await
    );
    assert_eq!(
        failing.logo("Acme", LogoStyle::Playful).await,
        healthy.logo("Acme", LogoStyle::Playful).await
    );
    assert_eq!(
        failing.homework("Explain photosynthesis", Subject::Science).await,
        healthy.homework("Explain photosynthesis", Subject::Science).await
    );

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.history_failures_total, 3);
    assert_eq!(snapshot.compositions_total, 3);
    assert!(failing.usage().await.is_err());
}

#[tokio::test]
async fn usage_outlives_cleared_history() {
    let suite = memory_suite(9);
    suite.chat("hi").await;
    suite.chat("how are you").await;
    suite.logo("Nimbus", LogoStyle::Minimal).await;
    suite.homework("Causes of WW1", Subject::History).await;

    assert_eq!(suite.clear_history(ToolKind::Chat).await.unwrap(), 2);
    assert!(suite.history(ToolKind::Chat).await.unwrap().is_empty());

    let usage = suite.usage().await.unwrap();
    assert_eq!(
        usage,
        vec![
            UsageCount {
                tool: ToolKind::Chat,
                count: 2,
            },
            UsageCount {
                tool: ToolKind::Logo,
                count: 1,
            },
            UsageCount {
                tool: ToolKind::Homework,
                count: 1,
            },
        ]
    );

    let remaining = suite.all_history().await.unwrap();
    assert_eq!(remaining[0].tool, ToolKind::Homework);
    assert_eq!(remaining[0].input, "[History] Causes of WW1");
    assert_eq!(
        remaining[1].output,
        "Logo concept for \"Nimbus\" — Style: Minimal, Colors: #1C1C1C, #FAFAFA, #6B7280"
    );
}

#[tokio::test]
async fn homework_json_uses_ui_field_names() {
    let suite = memory_suite(2);
    let solution = suite.homework("If 12 apples cost 3.5 dollars", Subject::Math).await;

    let json = serde_json::to_value(&solution).unwrap();
    assert_eq!(json["steps"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["keyTerms"][0], "Variable");
    assert!(json["extraDetail"].as_str().unwrap().starts_with("📐 DEEPER UNDERSTANDING"));
    assert!(json["steps"][1]["content"]
        .as_str()
        .unwrap()
        .contains("values: 12, 3.5."));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_suite_handles_concurrent_callers() {
    let suite = Arc::new(memory_suite(21));
    let prompts = ["sunset over the ocean", "a quiet mountain at dawn", "AI productivity"];

    let mut handles = Vec::new();
    for index in 0..48 {
        let suite = Arc::clone(&suite);
        let prompt = prompts[index % prompts.len()];
        handles.push(tokio::spawn(async move {
            let reply = suite.chat(&format!("tell me a joke #{index}")).await;
            let look = suite.image(prompt).await;
            (reply, prompt, look)
        }));
    }

    for handle in handles {
        let (reply, prompt, look) = handle.await.unwrap();
        assert_eq!(reply.intent, ChatIntent::Joke);
        assert_eq!(look.gradient, gradient_for(prompt));
    }

    let snapshot = suite.metrics().snapshot();
    assert_eq!(snapshot.compositions_total, 96);
    assert_eq!(snapshot.compositions_by_tool["chat"], 48);
    assert_eq!(snapshot.compositions_by_tool["image"], 48);

    let usage = suite.usage().await.unwrap();
    assert_eq!(
        usage,
        vec![
            UsageCount {
                tool: ToolKind::Chat,
                count: 48,
            },
            UsageCount {
                tool: ToolKind::Image,
                count: 48,
            },
        ]
    );
}
