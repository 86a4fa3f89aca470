//! Pagegate CLI - drive the page progression gate from a terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use pagegate_core::{AccessDecision, Completion, PageId, PageInfo, PageSequence};
use pagegate_progress::{HtmlNavRenderer, ProgressionTracker, StaticLocation, TrackerConfig};
use pagegate_storage::JsonFileStore;

#[derive(Parser)]
#[command(name = "pagegate")]
#[command(about = "Unlock a sequence of pages one at a time", long_about = None)]
struct Cli {
    /// Directory holding persisted progress
    #[arg(long, default_value = ".pagegate")]
    data_dir: std::path::PathBuf,

    /// Storage key for the unlocked set
    #[arg(long, default_value = "unlockedPages")]
    storage_key: String,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a page: check access, then print its navigation
    Visit {
        /// Page path, e.g. /timeline.html
        path: String,
    },
    /// Mark a page complete and unlock the next one
    Complete {
        /// Page path, e.g. /timeline.html
        path: String,
    },
    /// Unlock a page directly
    Unlock {
        /// Page identifier
        page: String,
    },
    /// Forget all progress
    Reset,
    /// Show which pages are unlocked
    Status,
}

type Tracker = ProgressionTracker<JsonFileStore, StaticLocation, HtmlNavRenderer>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let store = JsonFileStore::new(&cli.data_dir).await?;
    let config = TrackerConfig {
        storage_key: cli.storage_key.clone(),
        ..Default::default()
    };
    let open = |path: &str| -> Result<Tracker> {
        Ok(ProgressionTracker::new(
            store.clone(),
            StaticLocation::new(path),
            HtmlNavRenderer::new(),
            default_sequence()?,
        )
        .with_config(config.clone()))
    };

    match cli.command {
        Commands::Visit { path } => {
            let mut tracker = open(&path)?;
            match tracker.init().await? {
                AccessDecision::Granted => {
                    println!("Page: {}", tracker.current_page());
                    for entry in tracker.navigation().await? {
                        let marker = if entry.active { "*" } else { " " };
                        println!(" {} {:<18} {}", marker, entry.text(), entry.href);
                    }
                    if let Some(markup) = tracker.renderer().markup() {
                        println!("{}", markup);
                    }
                }
                AccessDecision::Denied { page, redirect } => {
                    println!("Locked: {} -> {}", page, redirect);
                }
            }
        }
        Commands::Complete { path } => {
            let mut tracker = open(&path)?;
            if let AccessDecision::Denied { page, redirect } = tracker.check_access().await? {
                println!("Locked: {} -> {}", page, redirect);
                return Ok(());
            }
            match tracker.complete_current_page().await? {
                Completion::Next { target, .. } => println!("Next: {}", target),
                Completion::NoNextPage => println!("No next page"),
            }
        }
        Commands::Unlock { page } => {
            let page = PageId::new(page);
            let mut tracker = open("")?;
            if !tracker.sequence().contains(&page) {
                anyhow::bail!("Unknown page: {}", page);
            }
            if tracker.unlock_page(page.clone()).await? {
                info!("Unlocked {}", page);
            } else {
                println!("Already unlocked: {}", page);
            }
        }
        Commands::Reset => {
            let mut tracker = open("")?;
            tracker.reset_progress().await?;
            println!("Progress reset");
        }
        Commands::Status => {
            let tracker = open("")?;
            let unlocked = tracker.unlocked_pages().await?;
            println!("Pagegate Status");
            for page in tracker.sequence().pages() {
                let info = tracker.sequence().info(page);
                let state = if unlocked.contains(page) {
                    "UNLOCKED"
                } else {
                    "LOCKED"
                };
                println!("  {:<10} {} {}", state, info.icon, info.label);
            }
        }
    }

    Ok(())
}

fn default_sequence() -> Result<PageSequence> {
    Ok(PageSequence::new(["index", "timeline", "photos", "love-cycle", "game", "surprise"])?
        .with_info("index", PageInfo::new("🏠", "Home"))
        .with_info("timeline", PageInfo::new("📅", "Timeline"))
        .with_info("photos", PageInfo::new("📸", "Photos"))
        .with_info("love-cycle", PageInfo::new("✨", "Reasons"))
        .with_info("game", PageInfo::new("🎮", "Game"))
        .with_info("surprise", PageInfo::new("🎁", "Surprise")))
}
