use serde::Deserialize;

// GitHub repository-listing response structure. Any field may be missing
// or null in the wild, so every field is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub name: Option<String>,
    pub description: Option<String>,
    pub html_url: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub updated_at: Option<String>,
}
