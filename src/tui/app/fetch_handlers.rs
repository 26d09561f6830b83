//! Fetch commands and their completion.
//!
//! Explorer fetch requests run as bubbletea-rs commands. Requests started by
//! the same update run concurrently and report back together in a single
//! [`AppMsg::FetchCompleted`] message.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::Cmd;
use tokio::task::JoinSet;

use super::ExplorerApp;
use crate::explorer::{FetchOutcome, FetchRequest};
use crate::github::error::ExplorerError;
use crate::github::gateway::ExplorerGateway;
use crate::tui::messages::AppMsg;

impl ExplorerApp {
    /// Hands each outcome to the explorer and refreshes the layout.
    pub(super) fn handle_fetch_completed(&mut self, outcomes: &[FetchOutcome]) -> Option<Cmd> {
        for outcome in outcomes {
            self.explorer.apply(outcome.clone());
        }
        self.relayout(Vec::new())
    }

    /// Creates a command executing `requests`, or `None` when there are none.
    pub(super) fn fetch_cmd(&self, requests: Vec<FetchRequest>) -> Option<Cmd> {
        if requests.is_empty() {
            return None;
        }

        let gateway = self.gateway.clone();
        Some(Box::pin(async move {
            let outcomes = execute_all(gateway, requests).await;
            Some(Box::new(AppMsg::FetchCompleted(outcomes)) as Box<dyn Any + Send>)
        }))
    }
}

async fn execute_all(
    gateway: Option<Arc<dyn ExplorerGateway>>,
    requests: Vec<FetchRequest>,
) -> Vec<FetchOutcome> {
    let Some(gateway) = gateway else {
        return requests
            .into_iter()
            .map(|request| {
                request.fail(ExplorerError::Configuration {
                    message: "explorer context not configured".to_owned(),
                })
            })
            .collect();
    };

    let mut tasks = JoinSet::new();
    for request in requests {
        let task_gateway = Arc::clone(&gateway);
        tasks.spawn(async move { request.execute(task_gateway.as_ref()).await });
    }

    let mut outcomes = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(outcome) => outcomes.push(outcome),
            Err(error) => tracing::error!(%error, "fetch task did not complete"),
        }
    }
    outcomes
}
