mod action;
mod behavior_change;
mod condition;
mod instruction_list;
mod reflex;
mod scenario;
mod turn_bound;

pub use action::{OrchestratorAction, StopSignal};
pub use behavior_change::BehaviorChangeOrchestrator;
pub use condition::TurnCondition;
pub use instruction_list::InstructionListOrchestrator;
pub use reflex::ReflexOrchestrator;
pub use scenario::{Goal, ScenarioOrchestrator};
pub use turn_bound::TurnBoundOrchestrator;

use crate::dialogue::Dialogue;
use crate::error::DialogueError;

/// A stateful policy that observes dialogue state and steers the next
/// generation step.
///
/// Orchestrators are pure reactive policies: `observe` reads the dialogue
/// log and the orchestrator's own private state, never the completion
/// service. It may mutate only that private state. Configuration is
/// supplied in full at construction time and validated there; invalid
/// parameters are rejected before any dialogue starts.
pub trait Orchestrator: Send {
    /// Identity recorded as the source of emitted events.
    fn name(&self) -> &str;

    /// Inspect the dialogue so far and decide what to do before the next
    /// generation step. Errors are fatal to the dialogue run.
    fn observe(&mut self, dialogue: &Dialogue) -> Result<OrchestratorAction, DialogueError>;

    /// Return internal state to its initial configuration, for reuse of
    /// the owning agent in a fresh dialogue.
    fn reset(&mut self);
}
