//! Shared harness for the explorer behavioural tests.
//!
//! Scenarios drive a real [`ExplorerApp`] wired to the Octocrab gateway,
//! which talks to a Wiremock server standing in for the GitHub REST API.
//! Every command the app returns is executed on a shared Tokio runtime and
//! its message fed back until the app settles.

use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;
use std::sync::Arc;

use bubbletea_rs::{Cmd, Model};
use reposcope::tui::ExplorerApp;
use reposcope::tui::messages::AppMsg;
use reposcope::{Explorer, GatewaySettings, OctocrabExplorerGateway, QuerySettings};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

pub mod steps;

/// Result type returned by fallible step definitions.
pub type StepResult = Result<(), Box<dyn Error>>;

/// Users requested per search in every scenario.
pub const USERS_PER_PAGE: u8 = 5;

/// Repositories requested per page in every scenario.
pub const REPOS_PAGE_SIZE: u8 = 2;

/// Shared runtime wrapper that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// State shared by the steps of one scenario.
#[derive(ScenarioState, Default)]
pub struct ExplorerWorld {
    pub runtime: Slot<SharedRuntime>,
    pub server: Slot<MockServer>,
    pub app: Slot<ExplorerApp>,
    pub rendered_view: Slot<String>,
}

impl ExplorerWorld {
    /// Ensures a Tokio runtime and Wiremock server are initialised.
    ///
    /// # Errors
    ///
    /// Returns an error if the Tokio runtime cannot be created.
    pub fn ensure_runtime_and_server(&self) -> Result<SharedRuntime, Box<dyn Error>> {
        if self.runtime.with_ref(|_| ()).is_none() {
            self.runtime.set(SharedRuntime::new(Runtime::new()?));
        }

        let shared_runtime = self
            .runtime
            .get()
            .ok_or("runtime not initialised after set")?;

        if self.server.with_ref(|_| ()).is_none() {
            self.server.set(shared_runtime.block_on(MockServer::start()));
        }

        Ok(shared_runtime)
    }

    /// Mounts `mock` on the scenario's server.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime or server cannot be initialised.
    pub fn mount(&self, mock: Mock) -> StepResult {
        let runtime = self.ensure_runtime_and_server()?;
        self.server
            .with_ref(|server| runtime.block_on(mock.mount(server)))
            .ok_or("mock server not initialised")?;
        Ok(())
    }

    /// Starts an explorer connected to the mock server.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway cannot be built.
    pub fn start_explorer(&self) -> StepResult {
        let runtime = self.ensure_runtime_and_server()?;
        let api_base = self
            .server
            .with_ref(MockServer::uri)
            .ok_or("mock server URL missing")?;
        let settings = GatewaySettings {
            api_base,
            token: None,
        };
        // Octocrab spawns its buffer worker on construction.
        let gateway =
            runtime.block_on(async { OctocrabExplorerGateway::from_settings(&settings) })?;
        let explorer = Explorer::new(QuerySettings {
            users_per_page: USERS_PER_PAGE,
            repos_page_size: REPOS_PAGE_SIZE,
        });
        self.app.set(ExplorerApp::with_dimensions(
            explorer,
            Some(Arc::new(gateway)),
            100,
            30,
        ));
        Ok(())
    }

    /// Sends `msg` to the app and runs every resulting command.
    ///
    /// # Errors
    ///
    /// Returns an error if the explorer has not been started.
    pub fn dispatch(&self, msg: &AppMsg) -> StepResult {
        let cmd = self
            .app
            .with_mut(|app| app.handle_message(msg))
            .ok_or("explorer should be started before sending messages")?;
        self.settle(cmd)
    }

    /// Types `keyword` into the search input and presses Enter.
    ///
    /// # Errors
    ///
    /// Returns an error if the explorer has not been started.
    pub fn search(&self, keyword: &str) -> StepResult {
        self.dispatch(&AppMsg::FocusSearch)?;
        for ch in keyword.chars() {
            self.dispatch(&AppMsg::InputChar(ch))?;
        }
        self.dispatch(&AppMsg::SubmitSearch)
    }

    /// Renders the current frame into `rendered_view`.
    ///
    /// # Errors
    ///
    /// Returns an error if the explorer has not been started.
    pub fn render(&self) -> StepResult {
        let view = self
            .app
            .with_ref(ExplorerApp::view)
            .ok_or("explorer should be started before rendering")?;
        self.rendered_view.set(view);
        Ok(())
    }

    /// Asserts whether the rendered view contains `text`.
    ///
    /// # Errors
    ///
    /// Returns an error describing the mismatch.
    pub fn assert_view_contains(&self, text: &str, should_contain: bool) -> StepResult {
        self.render()?;
        let view = self
            .rendered_view
            .with_ref(Clone::clone)
            .ok_or("view should be rendered before assertions")?;
        if view.contains(text) != should_contain {
            let verb = if should_contain {
                "contain"
            } else {
                "not contain"
            };
            return Err(format!("expected view to {verb} '{text}', got:\n{view}").into());
        }
        Ok(())
    }

    /// Number of requests the server received under `path_prefix`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server is missing or not recording.
    pub fn requests_under(&self, path_prefix: &str) -> Result<usize, Box<dyn Error>> {
        let runtime = self.ensure_runtime_and_server()?;
        let requests = self
            .server
            .with_ref(|server| runtime.block_on(server.received_requests()))
            .ok_or("mock server not initialised")?
            .ok_or("request recording is disabled")?;
        Ok(requests
            .iter()
            .filter(|request| request.url.path().starts_with(path_prefix))
            .count())
    }

    fn settle(&self, cmd: Option<Cmd>) -> StepResult {
        let runtime = self.ensure_runtime_and_server()?;
        let mut pending = cmd;
        while let Some(next) = pending.take() {
            let Some(message) = runtime.block_on(next) else {
                break;
            };
            pending = self
                .app
                .with_mut(|app| app.update(message))
                .ok_or("explorer should be started before running commands")?;
        }
        Ok(())
    }
}

/// Strips the quotes Gherkin leaves around string parameters.
pub fn unquote(text: &str) -> &str {
    text.trim_matches('"')
}

/// User search response body listing `logins` in order.
pub fn users_body(logins: &[&str]) -> Value {
    let items: Vec<Value> = logins
        .iter()
        .zip(1_u64..)
        .map(|(login, id)| {
            json!({
                "id": id,
                "login": login,
                "avatar_url": format!("https://avatars.example.com/{login}")
            })
        })
        .collect();
    json!({
        "total_count": items.len(),
        "incomplete_results": false,
        "items": items
    })
}
