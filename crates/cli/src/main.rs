use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quill_agents::{SuiteConfig, ToolSuite};
use quill_core::{LogoStyle, Platform, Subject, ToolKind, UnknownLabel};
use quill_observability::{init_tracing, AppMetrics};
use quill_storage::MemoryStore;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Parser)]
#[command(name = "quill")]
#[command(about = "Offline content tools: chat, scripts, logos, hashtags, homework, image looks")]
struct Cli {
    /// Seed for every random branch; overrides `QUILL_SEED`.
    #[arg(long)]
    seed: Option<u64>,

    /// Overrides `QUILL_HISTORY_LIMIT`.
    #[arg(long)]
    history_limit: Option<usize>,

    /// Overrides `QUILL_HISTORY_MAX`.
    #[arg(long)]
    history_max: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive chat; `/history`, `/stats`, `/clear`, `exit`.
    Chat,
    Say {
        message: String,
    },
    Image {
        prompt: String,
    },
    Script {
        topic: String,
        #[arg(long, default_value = "3 min")]
        duration: String,
    },
    Logo {
        brand: String,
        #[arg(long, default_value = "Modern")]
        style: String,
    },
    Hashtags {
        topic: String,
        #[arg(long, default_value = "General")]
        platform: String,
    },
    Homework {
        question: String,
        #[arg(long, default_value = "General")]
        subject: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("quill_cli");
    let cli = Cli::parse();

    let suite = build_suite(&cli);

    match cli.command {
        Command::Chat => run_chat(&suite).await?,
        Command::Say { message } => {
            let reply = suite.chat(&message).await;
            println!("{}", reply.reply);
        }
        Command::Image { prompt } => print_json(&suite.image(&prompt).await)?,
        Command::Script { topic, duration } => {
            println!("{}", suite.script(&topic, &duration).await);
        }
        Command::Logo { brand, style } => {
            let style = label_or_default::<LogoStyle>(&style);
            print_json(&suite.logo(&brand, style).await)?;
        }
        Command::Hashtags { topic, platform } => {
            let platform = label_or_default::<Platform>(&platform);
            print_json(&suite.hashtags(&topic, platform).await)?;
        }
        Command::Homework { question, subject } => {
            let subject = label_or_default::<Subject>(&subject);
            print_json(&suite.homework(&question, subject).await)?;
        }
    }

    Ok(())
}

fn build_suite(cli: &Cli) -> ToolSuite<MemoryStore> {
    let config = cli.apply_overrides(SuiteConfig::from_env());
    let store = MemoryStore::with_config(config.history);
    ToolSuite::new(config, Arc::new(store), AppMetrics::shared())
}

impl Cli {
    fn apply_overrides(&self, mut config: SuiteConfig) -> SuiteConfig {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(limit) = self.history_limit {
            config.history.recent_limit = limit;
        }
        if let Some(max) = self.history_max {
            config.history.max_entries = max;
        }
        config
    }
}

fn label_or_default<T>(value: &str) -> T
where
    T: FromStr<Err = UnknownLabel> + Default + std::fmt::Display,
{
    value.parse().unwrap_or_else(|err: UnknownLabel| {
        let fallback = T::default();
        warn!(error = %err, fallback = %fallback, "unknown label, using default");
        fallback
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed rendering output")?;
    println!("{rendered}");
    Ok(())
}

async fn run_chat(suite: &ToolSuite<MemoryStore>) -> Result<()> {
    println!("Quill chat mode. /history, /stats, /clear, or 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        match message {
            "" => continue,
            "/history" => {
                for entry in suite.history(ToolKind::Chat).await? {
                    println!(
                        "[{}] {} -> {}",
                        entry.recorded_at.format("%H:%M:%S"),
                        entry.input,
                        entry.output
                    );
                }
            }
            "/stats" => {
                print_json(&suite.usage().await?)?;
                print_json(&suite.metrics().snapshot())?;
            }
            "/clear" => {
                let removed = suite.clear_history(ToolKind::Chat).await?;
                println!("cleared {removed} chat entries");
            }
            _ => {
                let reply = suite.chat(message).await;
                println!("\n{}\n", reply.reply);
            }
        }
    }

    Ok(())
}
