use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio-feed")]
#[command(about = "Renders a user's GitHub repositories as portfolio project cards")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub account to list repositories for
    #[arg(long, env = "GITHUB_USERNAME")]
    pub user: String,

    /// Maximum number of repositories to fetch
    #[arg(long, env = "GITHUB_PROJECTS_COUNT", default_value_t = crate::feed::DEFAULT_COUNT)]
    pub count: u32,

    /// Page title (defaults to the account name)
    #[arg(long)]
    pub title: Option<String>,

    /// Write the rendered page here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}
