use crate::engine::console::Console;
use crate::engine::events::EngineEvent;
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// A unique identifier for a component, represented as a UUID.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ComponentId(Uuid);

impl ComponentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ComponentId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything a component gets handed when it is activated
#[derive(Clone)]
pub struct ComponentContext {
    pub id: ComponentId,
    pub console: Arc<dyn Console>,
    pub events: broadcast::Sender<EngineEvent>,
}

impl ComponentContext {
    /// Publish an event. Having no subscribers is fine.
    pub fn emit(&self, event: EngineEvent) {
        let _ = self.events.send(event);
    }
}

/// Something the engine can activate.
///
/// `start` is called exactly once per activation and must not block: the
/// actual work runs on the returned task.
pub trait Component: Send {
    fn name(&self) -> &str;

    fn start(&mut self, ctx: ComponentContext) -> JoinHandle<()>;
}
