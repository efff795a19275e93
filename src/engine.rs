//! Host side of restprobe: components are registered on an [`Engine`],
//! activated once when the engine starts, and report through a shared
//! [`Console`] and the engine event bus.

pub mod component;
pub mod config;
pub mod console;
#[allow(clippy::module_inception)]
pub mod engine;
pub mod errors;
pub mod events;

pub use component::{Component, ComponentContext, ComponentId};
pub use config::{EngineConfig, FetcherConfig};
pub use console::{Console, ConsoleLine, LogConsole, MemoryConsole};
pub use engine::Engine;
pub use errors::{ConfigError, EngineError};
pub use events::{EngineEvent, FetchOutcome};

/// Default capacity for the engine event channel
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;
