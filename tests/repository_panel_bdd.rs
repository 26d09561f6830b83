//! Behavioural tests for expanding users and paging through repositories.

mod support;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario};
use serde_json::{Value, json};
use support::{ExplorerWorld, REPOS_PAGE_SIZE, StepResult, unquote, users_body};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[fixture]
fn explorer_world() -> ExplorerWorld {
    ExplorerWorld::default()
}

/// Repository listing body with repositories `repo{first}..=repo{last}`.
fn repositories_body(first: u32, last: u32) -> Value {
    let items: Vec<Value> = (first..=last)
        .map(|n| {
            json!({
                "id": n,
                "name": format!("repo{n}"),
                "description": null,
                "stargazers_count": 0,
                "forks_count": 0
            })
        })
        .collect();
    Value::Array(items)
}

fn mount_user(explorer_world: &ExplorerWorld, login: &str) -> StepResult {
    let mock = Mock::given(method("GET"))
        .and(path("/search/users"))
        .and(query_param("q", login))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body(&[login])));
    explorer_world.mount(mock)
}

fn repos_path(login: &str) -> String {
    format!("/users/{login}/repos")
}

#[given(
    "a GitHub API where {login} owns {name} described as {description} with {stars:u32} stars and {forks:u32} forks"
)]
fn given_single_repository(
    explorer_world: &ExplorerWorld,
    login: String,
    name: String,
    description: String,
    stars: u32,
    forks: u32,
) -> StepResult {
    let owner = unquote(&login);
    mount_user(explorer_world, owner)?;
    let body = json!([{
        "id": 1,
        "name": unquote(&name),
        "description": unquote(&description),
        "stargazers_count": stars,
        "forks_count": forks
    }]);
    let mock = Mock::given(method("GET"))
        .and(path(repos_path(owner)))
        .and(query_param("page", "1"))
        .and(query_param("per_page", REPOS_PAGE_SIZE.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body));
    explorer_world.mount(mock)
}

#[given("a GitHub API where {login} owns {total:u32} repositories in pages of 2")]
fn given_paged_repositories(explorer_world: &ExplorerWorld, login: String, total: u32) -> StepResult {
    let owner = unquote(&login);
    mount_user(explorer_world, owner)?;
    let page_size = u32::from(REPOS_PAGE_SIZE);
    let mut first = 1_u32;
    let mut page = 1_u32;
    while first <= total {
        let last = first.saturating_add(page_size - 1).min(total);
        let mock = Mock::given(method("GET"))
            .and(path(repos_path(owner)))
            .and(query_param("page", page.to_string()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(repositories_body(first, last)),
            );
        explorer_world.mount(mock)?;
        first = last.saturating_add(1);
        page = page.saturating_add(1);
    }
    Ok(())
}

#[given("a GitHub API where listing repositories for {login} fails once")]
fn given_flaky_listing(explorer_world: &ExplorerWorld, login: String) -> StepResult {
    let owner = unquote(&login);
    mount_user(explorer_world, owner)?;
    let failure = Mock::given(method("GET"))
        .and(path(repos_path(owner)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .up_to_n_times(1);
    explorer_world.mount(failure)?;
    let success = Mock::given(method("GET"))
        .and(path(repos_path(owner)))
        .respond_with(ResponseTemplate::new(200).set_body_json(repositories_body(1, 1)));
    explorer_world.mount(success)
}

#[scenario(path = "tests/features/repository_panel.feature", index = 0)]
fn expanding_user_shows_repositories(explorer_world: ExplorerWorld) {
    let _ = explorer_world;
}

#[scenario(path = "tests/features/repository_panel.feature", index = 1)]
fn collapsed_users_never_load(explorer_world: ExplorerWorld) {
    let _ = explorer_world;
}

#[scenario(path = "tests/features/repository_panel.feature", index = 2)]
fn reexpanding_reuses_cache(explorer_world: ExplorerWorld) {
    let _ = explorer_world;
}

#[scenario(path = "tests/features/repository_panel.feature", index = 3)]
fn visible_sentinel_loads_next_page(explorer_world: ExplorerWorld) {
    let _ = explorer_world;
}

#[scenario(path = "tests/features/repository_panel.feature", index = 4)]
fn failed_listing_retried_on_refresh(explorer_world: ExplorerWorld) {
    let _ = explorer_world;
}
