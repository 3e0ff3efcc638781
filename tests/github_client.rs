use portfolio_feed::error::FeedError;
use portfolio_feed::github::GitHubClient;
use tokio_test::assert_ok;

#[test]
fn test_client_creation() {
    assert_ok!(GitHubClient::new());
}

#[test]
fn test_repos_url_shape() {
    let url = GitHubClient::repos_url("octocat", 6).expect("valid url");

    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("api.github.com"));
    assert_eq!(url.path(), "/users/octocat/repos");
    assert_eq!(url.query(), Some("sort=updated&per_page=6"));
}

#[test]
fn test_repos_url_encodes_username() {
    // A hostile account name must not break out of its path segment
    let url = GitHubClient::repos_url("a/b c", 10).expect("valid url");

    assert_eq!(url.path(), "/users/a%2Fb%20c/repos");
    assert_eq!(url.query(), Some("sort=updated&per_page=10"));
}

#[tokio::test]
#[ignore = "Requires network access to api.github.com"]
async fn test_fetch_user_repos() {
    let client = GitHubClient::new().expect("Failed to create client");

    let repos = client
        .fetch_user_repos("octocat", 3)
        .await
        .expect("Failed to fetch repositories");

    let items = repos.as_array().expect("Expected a JSON array");
    assert!(items.len() <= 3);
    for item in items {
        assert!(item.get("name").is_some());
        assert!(item.get("html_url").is_some());
    }
}

#[tokio::test]
#[ignore = "Requires network access to api.github.com"]
async fn test_fetch_unknown_user_is_api_error() {
    let client = GitHubClient::new().expect("Failed to create client");

    let result = client
        .fetch_user_repos("this-account-does-not-exist-a1b2c3d4e5", 3)
        .await;

    match result.unwrap_err() {
        FeedError::Api { status, .. } => assert_eq!(status, 404),
        other => panic!("Expected Api error, got: {:?}", other),
    }
}
