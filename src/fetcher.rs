//! The fetcher component.
//!
//! On activation it sends one GET to its configured URL and writes exactly
//! one console line: `Response: <body>` when the exchange succeeded, or
//! `Error: <description>` for connection and protocol failures. Failures
//! never leave the component and nothing is retried.

use crate::engine::component::{Component, ComponentContext};
use crate::engine::config::FetcherConfig;
use crate::engine::console::Console;
use crate::engine::events::{EngineEvent, FetchOutcome};
use crate::net::fetch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    config: FetcherConfig,
}

impl Fetcher {
    pub fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    /// Issues the request once and logs the result to `console`.
    pub async fn activate(&self, console: &dyn Console) -> FetchOutcome {
        let outcome = match fetch(&self.config.url, self.config.user_agent.as_deref()).await {
            Ok(resp) => FetchOutcome::Success {
                status: resp.status,
                body: resp.text(),
            },
            Err(e) => FetchOutcome::Failure { error: e.to_string() },
        };

        match &outcome {
            FetchOutcome::Success { .. } => console.log(&outcome.console_line()),
            FetchOutcome::Failure { .. } => console.log_error(&outcome.console_line()),
        }

        outcome
    }
}

impl Component for Fetcher {
    fn name(&self) -> &str {
        "fetcher"
    }

    fn start(&mut self, ctx: ComponentContext) -> JoinHandle<()> {
        ctx.emit(EngineEvent::ComponentStarted {
            id: ctx.id,
            name: self.name().to_string(),
        });

        let fetcher = self.clone();
        tokio::spawn(async move {
            let outcome = fetcher.activate(ctx.console.as_ref()).await;

            ctx.emit(EngineEvent::RequestFinished {
                id: ctx.id,
                url: fetcher.config.url.clone(),
                outcome,
            });
            ctx.emit(EngineEvent::ComponentFinished { id: ctx.id });
        })
    }
}
