use crate::engine::component::{Component, ComponentContext, ComponentId};
use crate::engine::console::Console;
use crate::engine::events::EngineEvent;
use crate::{EngineConfig, EngineError};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

pub struct Engine {
    /// Configuration for the whole engine.
    config: EngineConfig,
    /// Console shared with every component.
    console: Arc<dyn Console>,
    /// Registered components, in registration order.
    components: Vec<(ComponentId, Box<dyn Component>)>,
    /// Event bus sender, cloned into every component context.
    event_tx: broadcast::Sender<EngineEvent>,
    /// Tasks of activated components that have not been joined yet.
    tasks: Vec<(ComponentId, JoinHandle<()>)>,
    /// Is the engine running?
    running: bool,
}

impl Engine {
    /// Create a new engine.
    ///
    /// If `config` is `None`, [`EngineConfig::default`] is used.
    ///
    /// ```
    /// # use std::sync::Arc;
    /// # use restprobe::{Engine, LogConsole};
    /// let engine = Engine::new(None, Arc::new(LogConsole::new()));
    /// assert!(!engine.is_running());
    /// ```
    pub fn new(config: Option<EngineConfig>, console: Arc<dyn Console>) -> Self {
        let config = config.unwrap_or_default();
        let (event_tx, _first_rx) = broadcast::channel::<EngineEvent>(config.event_capacity);

        Self {
            config,
            console,
            components: Vec::new(),
            event_tx,
            tasks: Vec::new(),
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Registers a component. When the engine is already running the component is activated
    /// right away, otherwise it is activated by [`start`](Self::start).
    pub fn add_component(&mut self, component: Box<dyn Component>) -> Result<ComponentId, EngineError> {
        if self.components.len() >= self.config.max_components {
            return Err(EngineError::ComponentLimitExceeded);
        }

        let id = ComponentId::new();
        self.components.push((id, component));
        log::debug!("registered component {id}");

        if self.running {
            let idx = self.components.len() - 1;
            self.activate(idx);
        }

        Ok(id)
    }

    /// Activates every registered component once. Needs to be called from within a tokio runtime.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.running {
            return Err(EngineError::AlreadyStarted);
        }
        self.running = true;

        for idx in 0..self.components.len() {
            self.activate(idx);
        }

        let _ = self.event_tx.send(EngineEvent::EngineStarted);
        log::debug!("engine started with {} component(s)", self.components.len());

        Ok(())
    }

    /// Waits for all activated components to finish. The engine stays running, so components
    /// added later are still activated.
    pub async fn wait(&mut self) -> Result<(), EngineError> {
        if !self.running {
            return Err(EngineError::NotStarted);
        }

        let mut first_err = None;
        for (id, handle) in self.tasks.drain(..) {
            if let Err(e) = handle.await {
                log::error!("component {id} task failed: {e}");
                first_err.get_or_insert(EngineError::TaskFailed(e));
            }
        }

        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn activate(&mut self, idx: usize) {
        let ctx = ComponentContext {
            id: self.components[idx].0,
            console: self.console.clone(),
            events: self.event_tx.clone(),
        };

        let (id, component) = &mut self.components[idx];
        log::debug!("activating component {id} ({})", component.name());
        let handle = component.start(ctx);
        self.tasks.push((*id, handle));
    }
}
