use std::sync::Arc;

use crate::completion::CompletionService;
use crate::error::DialogueError;
use crate::message::Message;
use crate::orchestrated::OrchestratedAgent;
use crate::orchestrator::Orchestrator;
use crate::persona::Persona;

/// A simulated conversational participant.
///
/// An agent owns a fixed persona-derived prompt fragment, a handle to the
/// completion service, and a private memory: the message history it
/// believes is shared with its interlocutor. The service handle is
/// constructed once by the caller and passed in explicitly; agents never
/// reach for global state.
pub struct Agent {
    name: String,
    persona_prompt: String,
    service: Arc<dyn CompletionService>,
    memory: Vec<Message>,
}

impl Agent {
    /// Create a new builder.
    pub fn builder() -> AgentBuilder {
        AgentBuilder::default()
    }

    /// Display name, used as the speaker identity in the dialogue log.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The agent's private conversation memory (debugging/inspection).
    pub fn memory(&self) -> &[Message] {
        &self.memory
    }

    /// Record an utterance heard from the interlocutor.
    pub fn hear(&mut self, text: impl Into<String>) {
        self.memory.push(Message::interlocutor(text));
    }

    /// Produce the next reply for the conversation so far.
    ///
    /// `instruction` is the merged orchestrator instruction block for this
    /// generation step, if any; it is combined with the persona fragment
    /// and passed to the completion service alongside the history. The
    /// produced reply is appended to private memory only on success.
    pub async fn respond(&mut self, instruction: Option<&str>) -> Result<String, DialogueError> {
        let system = self.system_fragment(instruction);
        let reply = self
            .service
            .complete(&self.memory, Some(&system))
            .await?;
        self.memory.push(Message::own(reply.clone()));
        Ok(reply)
    }

    /// Clear private memory back to the initial persona-only state.
    pub fn reset(&mut self) {
        self.memory.clear();
    }

    /// Compose this agent with an orchestrator.
    pub fn compose(self, orchestrator: impl Orchestrator + 'static) -> OrchestratedAgent {
        OrchestratedAgent::new(self).compose(orchestrator)
    }

    fn system_fragment(&self, instruction: Option<&str>) -> String {
        match instruction {
            Some(extra) if !extra.is_empty() => {
                format!("{}\n\n{}", self.persona_prompt, extra)
            }
            _ => self.persona_prompt.clone(),
        }
    }
}

/// Builder for [`Agent`].
#[derive(Default)]
pub struct AgentBuilder {
    name: Option<String>,
    persona: Option<Persona>,
    service: Option<Arc<dyn CompletionService>>,
}

impl AgentBuilder {
    /// Override the display name; defaults to the persona name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the persona profile.
    pub fn persona(mut self, persona: Persona) -> Self {
        self.persona = Some(persona);
        self
    }

    /// Set the completion service handle.
    pub fn service(mut self, service: Arc<dyn CompletionService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Build the agent; persona and service are required.
    pub fn build(self) -> Result<Agent, DialogueError> {
        let persona = self
            .persona
            .ok_or_else(|| DialogueError::InvalidConfig("No persona set".to_string()))?;
        let service = self
            .service
            .ok_or_else(|| DialogueError::InvalidConfig("No completion service set".to_string()))?;
        Ok(Agent {
            name: self.name.unwrap_or_else(|| persona.name.clone()),
            persona_prompt: persona.prompt(),
            service,
            memory: Vec::new(),
        })
    }
}
