use crate::agent::Agent;
use crate::dialogue::{Dialogue, Event};
use crate::error::DialogueError;
use crate::orchestrator::{Orchestrator, OrchestratorAction, StopSignal};

/// The outcome of one orchestrated generation step.
#[derive(Debug)]
pub struct AgentTurn {
    /// The produced reply text
    pub text: String,
    /// Name of the first orchestrator that requested termination, if any
    pub stop: Option<String>,
    /// Events to attach to the produced turn
    pub events: Vec<Event>,
}

/// An [`Agent`] composed with an ordered sequence of orchestrators.
///
/// Composition is flattening and associative: composing an already
/// orchestrated agent appends to the ordered list rather than nesting,
/// so `agent.compose(o1).compose(o2)` behaves identically to a single
/// wrapper over `[o1, o2]`. The wrapper owns its orchestrators
/// exclusively; the ownership model makes attaching one orchestrator
/// instance to two agents unrepresentable.
pub struct OrchestratedAgent {
    agent: Agent,
    orchestrators: Vec<Box<dyn Orchestrator>>,
}

impl OrchestratedAgent {
    /// Wrap an agent with no orchestrators attached yet.
    pub fn new(agent: Agent) -> Self {
        Self {
            agent,
            orchestrators: Vec::new(),
        }
    }

    /// Append an orchestrator to the evaluation order.
    pub fn compose(mut self, orchestrator: impl Orchestrator + 'static) -> Self {
        self.orchestrators.push(Box::new(orchestrator));
        self
    }

    /// Display name of the underlying agent.
    pub fn name(&self) -> &str {
        self.agent.name()
    }

    /// Access the underlying agent.
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Record an utterance heard from the interlocutor.
    pub fn hear(&mut self, text: impl Into<String>) {
        self.agent.hear(text);
    }

    /// Reset the agent memory and every attached orchestrator for a
    /// fresh dialogue.
    pub fn reset(&mut self) {
        self.agent.reset();
        for orchestrator in &mut self.orchestrators {
            orchestrator.reset();
        }
    }

    /// Run one orchestrated generation step against the dialogue so far.
    ///
    /// Orchestrators are evaluated in attachment order; instructions are
    /// merged additively in that order, stop signals are OR-ed, and one
    /// event per non-trivial action is attached to the upcoming turn
    /// index. Delegates to the agent with the merged instruction.
    pub async fn respond(&mut self, dialogue: &Dialogue) -> Result<AgentTurn, DialogueError> {
        let turn_index = dialogue.next_index();
        let mut instructions: Vec<String> = Vec::new();
        let mut events: Vec<Event> = Vec::new();
        let mut stop: Option<String> = None;

        for orchestrator in &mut self.orchestrators {
            let name = orchestrator.name().to_string();
            let action = orchestrator
                .observe(dialogue)
                .map_err(|err| DialogueError::OrchestratorFailure {
                    orchestrator: name.clone(),
                    turn: turn_index,
                    message: err.to_string(),
                })?;
            match action {
                OrchestratorAction::None => {}
                OrchestratorAction::Instruct(text) => {
                    events.push(Event::instruction(&name, &text, turn_index));
                    instructions.push(text);
                }
                OrchestratorAction::Signal(StopSignal::Stop) => {
                    events.push(Event::signal(&name, "stop requested", turn_index));
                    stop.get_or_insert(name);
                }
            }
        }

        let merged = merge_instructions(&instructions);
        let text = self.agent.respond(merged.as_deref()).await?;
        Ok(AgentTurn { text, stop, events })
    }
}

impl From<Agent> for OrchestratedAgent {
    fn from(agent: Agent) -> Self {
        OrchestratedAgent::new(agent)
    }
}

fn merge_instructions(instructions: &[String]) -> Option<String> {
    if instructions.is_empty() {
        return None;
    }
    Some(instructions.join("\n"))
}
