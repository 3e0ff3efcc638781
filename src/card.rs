use crate::types::RepoSummary;
use chrono::DateTime;
use url::Url;

/// Render-ready representation of one repository. Built fresh from a
/// `RepoSummary` each render cycle and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct DisplayCard {
    pub name: String,
    pub description: String,
    pub language: String,
    pub stars: u64,
    pub forks: u64,
    pub updated: String,
    pub link: Option<Url>,
}

impl DisplayCard {
    pub fn from_summary(summary: &RepoSummary) -> Self {
        DisplayCard {
            name: summary.name.clone().unwrap_or_else(|| "Unnamed".to_string()),
            description: summary
                .description
                .clone()
                .unwrap_or_else(|| "No description provided".to_string()),
            language: summary.language.clone().unwrap_or_else(|| "—".to_string()),
            stars: summary.stargazers_count.unwrap_or(0),
            forks: summary.forks_count.unwrap_or(0),
            updated: summary
                .updated_at
                .as_deref()
                .map(format_updated_date)
                .unwrap_or_default(),
            link: summary.html_url.as_deref().and_then(validate_link),
        }
    }

    /// Card markup: heading with link, description paragraph, metadata row.
    /// Text fields are escaped; stars and forks are integers and interpolate
    /// as-is. A repository without a usable link gets a plain heading.
    pub fn to_html(&self) -> String {
        let heading = match &self.link {
            Some(url) => format!(
                "<h3><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></h3>",
                url,
                escape_html(&self.name)
            ),
            None => format!("<h3>{}</h3>", escape_html(&self.name)),
        };

        format!(
            "<div class=\"project-card\">\n  {}\n  <p>{}</p>\n  <div class=\"repo-meta\">\n    <span title=\"Primary language\">🛈 {}</span>\n    <span title=\"Stars\">★ {}</span>\n    <span title=\"Forks\">⎇ {}</span>\n    <span title=\"Last updated\">⏱ {}</span>\n  </div>\n</div>",
            heading,
            escape_html(&self.description),
            escape_html(&self.language),
            self.stars,
            self.forks,
            escape_html(&self.updated),
        )
    }
}

/// Minimal HTML escaping for text content: `&`, `<`, `>`. Attribute values
/// never receive escaped text directly (links go through `validate_link`,
/// which percent-encodes quotes), so quote escaping is deliberately omitted.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Repository URLs come from the remote response and are untrusted. Only
/// well-formed http/https URLs are allowed into an href.
fn validate_link(raw: &str) -> Option<Url> {
    let url = Url::parse(raw).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}

fn format_updated_date(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_default()
}
