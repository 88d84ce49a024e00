use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use quill_core::ToolKind;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

const TOOL_COUNT: usize = ToolKind::ALL.len();

/// Process-wide counters; every increment is mirrored to the `metrics` facade so an
/// installed recorder sees the same numbers.
#[derive(Debug, Default)]
pub struct AppMetrics {
    compositions: [AtomicU64; TOOL_COUNT],
    fallbacks: [AtomicU64; TOOL_COUNT],
    random_branches_total: AtomicU64,
    history_failures_total: AtomicU64,
    total_latency_micros: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub compositions_total: u64,
    pub compositions_by_tool: BTreeMap<&'static str, u64>,
    pub fallback_total: u64,
    pub random_branch_total: u64,
    pub history_failures_total: u64,
    pub avg_latency_micros: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_composition(&self, tool: ToolKind) {
        self.compositions[tool as usize].fetch_add(1, Ordering::Relaxed);
        metrics::counter!("quill_compositions_total", "tool" => tool.as_code()).increment(1);
    }

    /// A classifier found no rule and the composer used its default branch.
    pub fn inc_fallback(&self, tool: ToolKind) {
        self.fallbacks[tool as usize].fetch_add(1, Ordering::Relaxed);
        metrics::counter!("quill_fallback_total", "tool" => tool.as_code()).increment(1);
    }

    pub fn inc_random_branch(&self) {
        self.random_branches_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("quill_random_branch_total").increment(1);
    }

    pub fn inc_history_failure(&self) {
        self.history_failures_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("quill_history_failures_total").increment(1);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        metrics::histogram!("quill_composition_seconds").record(duration.as_secs_f64());
    }

    pub fn compositions(&self, tool: ToolKind) -> u64 {
        self.compositions[tool as usize].load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self, tool: ToolKind) -> u64 {
        self.fallbacks[tool as usize].load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let compositions_by_tool = ToolKind::ALL
            .into_iter()
            .map(|tool| (tool.as_code(), self.compositions(tool)))
            .collect::<BTreeMap<_, _>>();
        let compositions = compositions_by_tool.values().sum::<u64>();
        let latency = self.total_latency_micros.load(Ordering::Relaxed);

        MetricsSnapshot {
            compositions_total: compositions,
            compositions_by_tool,
            fallback_total: ToolKind::ALL
                .into_iter()
                .map(|tool| self.fallbacks(tool))
                .sum(),
            random_branch_total: self.random_branches_total.load(Ordering::Relaxed),
            history_failures_total: self.history_failures_total.load(Ordering::Relaxed),
            avg_latency_micros: if compositions == 0 {
                0.0
            } else {
                latency as f64 / compositions as f64
            },
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info,quill_agents=info", service_name))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr)
            .init();
    });
}
