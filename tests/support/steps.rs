//! Step definitions shared by every explorer feature.

use reposcope::tui::messages::AppMsg;
use rstest_bdd_macros::{then, when};

use super::{ExplorerWorld, StepResult, unquote};

#[when("the user searches for {keyword}")]
pub fn when_user_searches(explorer_world: &ExplorerWorld, keyword: String) -> StepResult {
    if explorer_world.app.with_ref(|_| ()).is_none() {
        explorer_world.start_explorer()?;
    }
    explorer_world.search(unquote(&keyword))
}

#[when("the user toggles the selected panel")]
pub fn when_user_toggles_panel(explorer_world: &ExplorerWorld) -> StepResult {
    explorer_world.dispatch(&AppMsg::TogglePanel)
}

#[when("the user refreshes the selected panel")]
pub fn when_user_refreshes_panel(explorer_world: &ExplorerWorld) -> StepResult {
    explorer_world.dispatch(&AppMsg::RefreshPanel)
}

#[then("the view contains {text}")]
pub fn then_view_contains(explorer_world: &ExplorerWorld, text: String) -> StepResult {
    explorer_world.assert_view_contains(unquote(&text), true)
}

#[then("the view does not contain {text}")]
pub fn then_view_does_not_contain(explorer_world: &ExplorerWorld, text: String) -> StepResult {
    explorer_world.assert_view_contains(unquote(&text), false)
}

fn assert_request_count(explorer_world: &ExplorerWorld, count: usize, path: &str) -> StepResult {
    let actual = explorer_world.requests_under(unquote(path))?;
    if actual != count {
        return Err(format!("expected {count} request(s) under {path}, got {actual}").into());
    }
    Ok(())
}

#[then("the API received {count:usize} request under {path}")]
pub fn then_api_received_request(
    explorer_world: &ExplorerWorld,
    count: usize,
    path: String,
) -> StepResult {
    assert_request_count(explorer_world, count, &path)
}

#[then("the API received {count:usize} requests under {path}")]
pub fn then_api_received_requests(
    explorer_world: &ExplorerWorld,
    count: usize,
    path: String,
) -> StepResult {
    assert_request_count(explorer_world, count, &path)
}
