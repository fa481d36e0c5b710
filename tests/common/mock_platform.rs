//! wiremock-based mock helpers for hosting platform API tests.
//!
//! Provides response builders for the GitHub repository endpoints, allowing
//! fully offline testing of the adapter and of both workflows. Clone URLs in
//! the responses point at local bare repositories.

use quickrepo::platform::{Credentials, GitHubAdapter, Session};
use serde_json::{json, Map, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const OWNER: &str = "octocat";
pub const PASSWORD: &str = "secret";

/// Start a wiremock server and a GitHubAdapter pointed at it.
pub async fn setup_github_mock() -> (MockServer, GitHubAdapter) {
    let server = MockServer::start().await;
    let session = Session::new(Credentials::new(OWNER, PASSWORD), Some(&server.uri()));
    (server, GitHubAdapter::new(session))
}

/// Generate a complete GitHub Author JSON object matching octocrab's Author struct.
fn github_user_json(login: &str, id: u64) -> Value {
    let api = format!("https://api.github.com/users/{}", login);
    let mut m = Map::new();
    m.insert("login".into(), json!(login));
    m.insert("id".into(), json!(id));
    m.insert("node_id".into(), json!(format!("MDQ6VXNlcjE{}", id)));
    m.insert(
        "avatar_url".into(),
        json!(format!(
            "https://avatars.githubusercontent.com/u/{}?v=4",
            id
        )),
    );
    m.insert("gravatar_id".into(), json!(""));
    m.insert("url".into(), json!(&api));
    m.insert(
        "html_url".into(),
        json!(format!("https://github.com/{}", login)),
    );
    m.insert("followers_url".into(), json!(format!("{}/followers", api)));
    m.insert(
        "following_url".into(),
        json!(format!("{}/following{{/other_user}}", api)),
    );
    m.insert(
        "gists_url".into(),
        json!(format!("{}/gists{{/gist_id}}", api)),
    );
    m.insert(
        "starred_url".into(),
        json!(format!("{}/starred{{/owner}}{{/repo}}", api)),
    );
    m.insert(
        "subscriptions_url".into(),
        json!(format!("{}/subscriptions", api)),
    );
    m.insert("organizations_url".into(), json!(format!("{}/orgs", api)));
    m.insert("repos_url".into(), json!(format!("{}/repos", api)));
    m.insert(
        "events_url".into(),
        json!(format!("{}/events{{/privacy}}", api)),
    );
    m.insert(
        "received_events_url".into(),
        json!(format!("{}/received_events", api)),
    );
    m.insert("type".into(), json!("User"));
    m.insert("site_admin".into(), json!(false));
    Value::Object(m)
}

/// Generate a complete GitHub repository JSON object that octocrab can deserialize.
/// Built programmatically to avoid macro recursion limits.
pub fn github_repo_json(owner: &str, repo: &str, clone_url: &str) -> Value {
    let base = format!("https://api.github.com/repos/{}/{}", owner, repo);
    let html = format!("https://github.com/{}/{}", owner, repo);

    let mut m = Map::new();
    m.insert("id".into(), json!(1));
    m.insert("node_id".into(), json!("MDEwOlJlcG9zaXRvcnkx"));
    m.insert("name".into(), json!(repo));
    m.insert("full_name".into(), json!(format!("{}/{}", owner, repo)));
    m.insert("private".into(), json!(false));
    m.insert("owner".into(), github_user_json(owner, 1));
    m.insert("html_url".into(), json!(html));
    m.insert("description".into(), Value::Null);
    m.insert("fork".into(), json!(false));
    m.insert("url".into(), json!(&base));

    // All the *_url fields octocrab expects
    let url_fields = [
        ("forks_url", "/forks"),
        ("keys_url", "/keys{/key_id}"),
        ("collaborators_url", "/collaborators{/collaborator}"),
        ("teams_url", "/teams"),
        ("hooks_url", "/hooks"),
        ("issue_events_url", "/issues/events{/number}"),
        ("events_url", "/events"),
        ("assignees_url", "/assignees{/user}"),
        ("branches_url", "/branches{/branch}"),
        ("tags_url", "/tags"),
        ("blobs_url", "/git/blobs{/sha}"),
        ("git_tags_url", "/git/tags{/sha}"),
        ("git_refs_url", "/git/refs{/sha}"),
        ("trees_url", "/git/trees{/sha}"),
        ("statuses_url", "/statuses/{sha}"),
        ("languages_url", "/languages"),
        ("stargazers_url", "/stargazers"),
        ("contributors_url", "/contributors"),
        ("subscribers_url", "/subscribers"),
        ("subscription_url", "/subscription"),
        ("commits_url", "/commits{/sha}"),
        ("git_commits_url", "/git/commits{/sha}"),
        ("comments_url", "/comments{/number}"),
        ("issue_comment_url", "/issues/comments{/number}"),
        ("contents_url", "/contents/{+path}"),
        ("compare_url", "/compare/{base}...{head}"),
        ("merges_url", "/merges"),
        ("archive_url", "/{archive_format}{/ref}"),
        ("downloads_url", "/downloads"),
        ("issues_url", "/issues{/number}"),
        ("pulls_url", "/pulls{/number}"),
        ("milestones_url", "/milestones{/number}"),
        (
            "notifications_url",
            "/notifications{?since,all,participating}",
        ),
        ("labels_url", "/labels{/name}"),
        ("releases_url", "/releases{/id}"),
        ("deployments_url", "/deployments"),
    ];

    for (field, suffix) in url_fields {
        m.insert(field.into(), json!(format!("{}{}", base, suffix)));
    }

    m.insert("created_at".into(), json!("2024-01-01T00:00:00Z"));
    m.insert("updated_at".into(), json!("2024-01-01T00:00:00Z"));
    m.insert("pushed_at".into(), json!("2024-01-01T00:00:00Z"));
    m.insert(
        "git_url".into(),
        json!(format!("git://github.com/{}/{}.git", owner, repo)),
    );
    m.insert(
        "ssh_url".into(),
        json!(format!("git@github.com:{}/{}.git", owner, repo)),
    );
    m.insert("clone_url".into(), json!(clone_url));
    m.insert("svn_url".into(), json!(html));
    m.insert("homepage".into(), Value::Null);
    m.insert("size".into(), json!(0));
    m.insert("stargazers_count".into(), json!(0));
    m.insert("watchers_count".into(), json!(0));
    m.insert("language".into(), Value::Null);
    m.insert("has_issues".into(), json!(true));
    m.insert("has_projects".into(), json!(true));
    m.insert("has_downloads".into(), json!(true));
    m.insert("has_wiki".into(), json!(true));
    m.insert("has_pages".into(), json!(false));
    m.insert("forks_count".into(), json!(0));
    m.insert("mirror_url".into(), Value::Null);
    m.insert("archived".into(), json!(false));
    m.insert("disabled".into(), json!(false));
    m.insert("open_issues_count".into(), json!(0));
    m.insert("license".into(), Value::Null);
    m.insert("forks".into(), json!(0));
    m.insert("open_issues".into(), json!(0));
    m.insert("watchers".into(), json!(0));
    m.insert("default_branch".into(), json!("main"));
    m.insert("allow_squash_merge".into(), json!(true));
    m.insert("allow_merge_commit".into(), json!(true));
    m.insert("allow_rebase_merge".into(), json!(true));

    Value::Object(m)
}

/// Repository creation succeeds (POST /user/repos).
pub async fn mock_create_repo(server: &MockServer, repo: &str, clone_url: &str) {
    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(github_repo_json(OWNER, repo, clone_url)),
        )
        .mount(server)
        .await;
}

/// Repository creation fails because the name is taken.
pub async fn mock_create_conflict(server: &MockServer) {
    let body = json!({
        "message": "Repository creation failed.",
        "errors": [{
            "resource": "Repository",
            "code": "custom",
            "field": "name",
            "message": "name already exists on this account"
        }],
        "documentation_url": "https://docs.github.com/rest/repos/repos#create-a-repository-for-the-authenticated-user"
    });

    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(422).set_body_json(body))
        .mount(server)
        .await;
}

/// Repository creation is rejected for bad credentials.
pub async fn mock_create_unauthorized(server: &MockServer) {
    let body = json!({
        "message": "Bad credentials",
        "documentation_url": "https://docs.github.com/rest"
    });

    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(401).set_body_json(body))
        .mount(server)
        .await;
}

/// Repository lookup (GET /repos/:owner/:repo).
pub async fn mock_get_repo(server: &MockServer, repo: &str, clone_url: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/{}", OWNER, repo)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(github_repo_json(OWNER, repo, clone_url)),
        )
        .mount(server)
        .await;
}

/// Create and lookup both succeed for `repo`.
pub async fn mock_provision(server: &MockServer, repo: &str, clone_url: &str) {
    mock_create_repo(server, repo, clone_url).await;
    mock_get_repo(server, repo, clone_url).await;
}

/// Repository deletion (DELETE /repos/:owner/:repo), expected `times` times.
pub async fn mock_delete_repo(server: &MockServer, repo: &str, times: u64) {
    Mock::given(method("DELETE"))
        .and(path(format!("/repos/{}/{}", OWNER, repo)))
        .respond_with(ResponseTemplate::new(204))
        .expect(times)
        .mount(server)
        .await;
}

/// Mock a 404 response for any request to a specific path.
pub async fn mock_not_found(server: &MockServer, path_str: &str) {
    let body = json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest"
    });

    Mock::given(path(path_str))
        .respond_with(ResponseTemplate::new(404).set_body_json(body))
        .mount(server)
        .await;
}

/// All requests the server has seen so far.
pub async fn received(server: &MockServer) -> Vec<Request> {
    server.received_requests().await.unwrap_or_default()
}

/// Requests matching a method and path.
pub async fn requests_to(server: &MockServer, verb: &str, path_str: &str) -> Vec<Request> {
    received(server)
        .await
        .into_iter()
        .filter(|r| r.method.as_str() == verb && r.url.path() == path_str)
        .collect()
}

/// JSON body of the single repository creation request.
pub async fn create_request_body(server: &MockServer) -> Value {
    let creates = requests_to(server, "POST", "/user/repos").await;
    assert_eq!(creates.len(), 1, "expected exactly one create request");
    serde_json::from_slice(&creates[0].body).expect("create body should be JSON")
}
