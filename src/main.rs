use clap::Parser;
use colored::*;
use portfolio_feed::cli::Cli;
use portfolio_feed::error::Result;
use portfolio_feed::feed::{FeedConfig, FeedState, PageSurface, RepositoryFeed};
use portfolio_feed::github::GitHubClient;
use portfolio_feed::page;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let cli = Cli::parse();

    eprintln!("{}", "Portfolio Feed".bold().green());
    eprintln!("{}\n", "=".repeat(50).dimmed());

    let count = cli.count.max(1);
    let title = cli.title.clone().unwrap_or_else(|| cli.user.clone());

    let client = GitHubClient::new()?;
    let mut surface = PageSurface::new();
    let mut feed = RepositoryFeed::new(client, FeedConfig::new(&cli.user, count));

    eprintln!("📡 Fetching up to {} repositories for {}...", count, cli.user.cyan());

    let state = feed.render(&mut surface).await;
    match state {
        FeedState::Rendered => eprintln!("{}", "✅ Projects rendered".green()),
        FeedState::Empty => eprintln!("{}", "No repositories found.".yellow()),
        FeedState::Error => {
            // The page still gets written with the visible error element.
            eprintln!("{}", "⚠️ Could not load projects; rendering error page".red());
        }
        FeedState::Idle | FeedState::Loading => unreachable!("render returns a terminal state"),
    }

    let html = page::render_page(&title, &surface);
    match &cli.output {
        Some(path) => {
            std::fs::write(path, html)?;
            eprintln!("📝 Wrote {}", path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}
