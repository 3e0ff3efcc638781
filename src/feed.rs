use crate::card::DisplayCard;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::types::RepoSummary;
use serde_json::Value;
use tracing::error;

pub const LOADING_HTML: &str = "<div class=\"muted\">Loading projects…</div>";
pub const EMPTY_HTML: &str = "<div class=\"muted\">No repositories found.</div>";

pub const DEFAULT_COUNT: u32 = 6;

/// Render lifecycle: `Idle → Loading → {Rendered | Empty | Error}`.
/// A fresh `render` call restarts the cycle from `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    Idle,
    Loading,
    Rendered,
    Empty,
    Error,
}

#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub username: String,
    pub count: u32,
}

impl FeedConfig {
    pub fn new(username: impl Into<String>, count: u32) -> Self {
        FeedConfig {
            username: username.into(),
            count,
        }
    }
}

/// The two writable slots the feed owns on the page: the card container and
/// the error element (`None` = hidden). Stands in for the live document so
/// the same render logic runs under test and on repeated manual reloads.
#[derive(Debug, Default)]
pub struct PageSurface {
    container: String,
    error: Option<String>,
}

impl PageSurface {
    pub fn new() -> Self {
        PageSurface::default()
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Step 1 of the lifecycle: transient loading placeholder, error hidden.
    pub fn begin_loading(&mut self) {
        self.container = LOADING_HTML.to_string();
        self.error = None;
    }

    fn set_container(&mut self, html: String) {
        self.container = html;
    }

    fn show_error(&mut self, message: String) {
        self.container.clear();
        self.error = Some(message);
    }
}

pub struct RepositoryFeed {
    client: GitHubClient,
    config: FeedConfig,
    state: FeedState,
}

impl RepositoryFeed {
    pub fn new(client: GitHubClient, config: FeedConfig) -> Self {
        RepositoryFeed {
            client,
            config,
            state: FeedState::Idle,
        }
    }

    pub fn state(&self) -> FeedState {
        self.state
    }

    /// One full load cycle: loading placeholder, single fetch, then either
    /// the card list, the empty placeholder, or the error element. Holding
    /// `&mut` on both the feed and the surface means two cycles can never
    /// interleave on the same container.
    pub async fn render(&mut self, surface: &mut PageSurface) -> FeedState {
        surface.begin_loading();
        self.state = FeedState::Loading;

        let outcome = self
            .client
            .fetch_user_repos(&self.config.username, self.config.count)
            .await;
        self.state = apply_outcome(surface, outcome);
        self.state
    }
}

/// Applies a fetch outcome to the surface. Split from `render` so the
/// display contract is exercisable without a live endpoint.
///
/// A payload that is not an array, or an empty array, is the terminal
/// "no repositories" success state, not an error.
pub fn apply_outcome(surface: &mut PageSurface, outcome: Result<Value>) -> FeedState {
    match outcome.and_then(|repos| build_cards(&repos)) {
        Ok(Some(html)) => {
            surface.set_container(html);
            FeedState::Rendered
        }
        Ok(None) => {
            surface.set_container(EMPTY_HTML.to_string());
            FeedState::Empty
        }
        Err(err) => {
            error!("Failed to load projects: {:?}", err);
            surface.show_error(format!("Could not load projects: {}", err));
            FeedState::Error
        }
    }
}

fn build_cards(repos: &Value) -> Result<Option<String>> {
    let items = match repos.as_array() {
        Some(items) if !items.is_empty() => items,
        _ => return Ok(None),
    };

    let mut html = String::new();
    for item in items {
        let summary: RepoSummary = serde_json::from_value(item.clone())?;
        if !html.is_empty() {
            html.push('\n');
        }
        html.push_str(&DisplayCard::from_summary(&summary).to_html());
    }
    Ok(Some(html))
}
