//! Events published on the engine bus.
//!
//! Subscribe with [`Engine::subscribe_events`](crate::Engine::subscribe_events).
//! Only events sent after subscribing are received.

use crate::engine::component::ComponentId;
use std::fmt::{Display, Formatter};
use url::Url;

/// Result of one fetch, as reported on the event bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Request completed with a 2xx status
    Success { status: u16, body: String },
    /// Connection or protocol failure
    Failure { error: String },
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }

    /// The console line for this outcome
    pub fn console_line(&self) -> String {
        match self {
            FetchOutcome::Success { body, .. } => format!("Response: {body}"),
            FetchOutcome::Failure { error } => format!("Error: {error}"),
        }
    }
}

impl Display for FetchOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.console_line())
    }
}

#[derive(Debug, Clone)]
pub enum EngineEvent {
    // ****************************************
    // ** Engine lifecycle
    /// Engine has started and activated its components
    EngineStarted,

    // ****************************************
    // ** Component lifecycle
    /// Component start hook has been called
    ComponentStarted { id: ComponentId, name: String },
    /// A request issued by a component completed
    RequestFinished {
        id: ComponentId,
        url: Url,
        outcome: FetchOutcome,
    },
    /// Component task has run to completion
    ComponentFinished { id: ComponentId },
}
