//! # colloquy
//!
//! A library for simulating multi-turn conversations between
//! persona-driven agents backed by an opaque text-completion service,
//! with composable orchestrators that steer the conversation without
//! touching the underlying model.
//!
//! The moving parts:
//!
//! - [`CompletionService`] — the external backend contract: history in,
//!   one reply out. Wrap it in [`ResilientCompletion`] for retries,
//!   backoff, and per-attempt deadlines.
//! - [`Agent`] — a participant with a [`Persona`], a service handle,
//!   and a private conversation memory.
//! - [`Orchestrator`] — a stateful policy that observes the dialogue
//!   before each generation step and may inject an instruction or
//!   request termination. Compose any number onto an agent with
//!   [`Agent::compose`]; composition is ordered, flattening, and
//!   associative.
//! - [`DialogueSimulator`] — the turn-taking loop. It alternates two
//!   [`OrchestratedAgent`]s, appends every [`Turn`] and orchestration
//!   [`Event`] to the [`Dialogue`] log, and closes the log with a
//!   [`TerminationReason`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use colloquy::{Agent, DialogueSimulator, Persona, TurnBoundOrchestrator};
//! # use colloquy::{CompletionService, DialogueError, Message};
//! # use async_trait::async_trait;
//! # struct Backend;
//! # #[async_trait]
//! # impl CompletionService for Backend {
//! #     async fn complete(&self, _: &[Message], _: Option<&str>) -> Result<String, DialogueError> {
//! #         Ok(String::new())
//! #     }
//! # }
//!
//! # async fn demo() -> Result<(), DialogueError> {
//! let service: Arc<dyn CompletionService> = Arc::new(Backend);
//!
//! let guide = Persona::builder()
//!     .name("Mara")
//!     .role("a museum guide")
//!     .build()?;
//! let visitor = Persona::builder()
//!     .name("Theo")
//!     .role("a curious visitor")
//!     .build()?;
//!
//! let mut first = Agent::builder()
//!     .persona(guide)
//!     .service(service.clone())
//!     .build()?
//!     .compose(TurnBoundOrchestrator::new(4, 12)?);
//! let mut second = Agent::builder()
//!     .persona(visitor)
//!     .service(service)
//!     .build()?
//!     .into();
//!
//! let dialogue = DialogueSimulator::builder()
//!     .max_turns(16)
//!     .build()?
//!     .run(&mut first, &mut second)
//!     .await?;
//! println!("{}", dialogue.render());
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod completion;
pub mod dialogue;
pub mod error;
pub mod message;
pub mod orchestrated;
pub mod orchestrator;
pub mod persona;
pub mod resilient;
pub mod simulator;

pub use agent::{Agent, AgentBuilder};
pub use completion::CompletionService;
pub use dialogue::{Dialogue, Event, EventKind, TerminationReason, Turn};
pub use error::DialogueError;
pub use message::{Message, Role};
pub use orchestrated::{AgentTurn, OrchestratedAgent};
pub use orchestrator::{
    BehaviorChangeOrchestrator, Goal, InstructionListOrchestrator, Orchestrator,
    OrchestratorAction, ReflexOrchestrator, ScenarioOrchestrator, StopSignal, TurnBoundOrchestrator,
    TurnCondition,
};
pub use persona::{Persona, PersonaBuilder};
pub use resilient::{ResilienceConfig, ResilientCompletion};
pub use simulator::{DialogueSimulator, DialogueSimulatorBuilder};

/// Initialize env_logger-based logging (requires the `logging` feature).
#[cfg(feature = "logging")]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(false).try_init();
}
