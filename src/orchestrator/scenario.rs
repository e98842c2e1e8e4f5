use crate::dialogue::Dialogue;
use crate::error::DialogueError;

use super::action::OrchestratorAction;
use super::condition::TurnCondition;
use super::Orchestrator;

/// One scenario goal: a human-readable description and the condition
/// that marks it satisfied.
pub struct Goal {
    /// What the agent should be steered toward
    pub description: String,
    /// Condition over a turn that marks the goal done
    pub done_when: TurnCondition,
}

impl Goal {
    pub fn new(description: impl Into<String>, done_when: TurnCondition) -> Self {
        Self {
            description: description.into(),
            done_when,
        }
    }
}

/// Steers the agent toward the first unmet scenario goal.
///
/// Goals are checked in order against every new turn; once a goal's
/// condition matches any turn it latches as satisfied until `reset`.
/// While unmet goals remain, the agent is instructed to steer toward
/// the first of them.
pub struct ScenarioOrchestrator {
    name: String,
    goals: Vec<Goal>,
    satisfied: Vec<bool>,
    scanned: usize,
}

impl ScenarioOrchestrator {
    /// Create a scenario policy; an empty goal list is rejected.
    pub fn new(goals: Vec<Goal>) -> Result<Self, DialogueError> {
        if goals.is_empty() {
            return Err(DialogueError::InvalidConfig(
                "scenario requires at least one goal".to_string(),
            ));
        }
        let satisfied = vec![false; goals.len()];
        Ok(Self {
            name: "scenario".to_string(),
            goals,
            satisfied,
            scanned: 0,
        })
    }

    /// Override the event-source name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// How many goals are still unmet.
    pub fn unmet_goals(&self) -> usize {
        self.satisfied.iter().filter(|met| !**met).count()
    }

    fn absorb_new_turns(&mut self, dialogue: &Dialogue) {
        for turn in &dialogue.turns()[self.scanned..] {
            for (ix, goal) in self.goals.iter().enumerate() {
                if !self.satisfied[ix] && goal.done_when.matches(turn) {
                    self.satisfied[ix] = true;
                    log::debug!("scenario goal satisfied: {}", goal.description);
                }
            }
        }
        self.scanned = dialogue.len();
    }
}

impl Orchestrator for ScenarioOrchestrator {
    fn name(&self) -> &str {
        &self.name
    }

    fn observe(&mut self, dialogue: &Dialogue) -> Result<OrchestratorAction, DialogueError> {
        self.absorb_new_turns(dialogue);
        let next = self
            .goals
            .iter()
            .zip(&self.satisfied)
            .find(|(_, met)| !**met);
        match next {
            Some((goal, _)) => Ok(OrchestratorAction::Instruct(format!(
                "Steer the conversation toward this goal: {}",
                goal.description
            ))),
            None => Ok(OrchestratorAction::None),
        }
    }

    fn reset(&mut self) {
        self.satisfied.iter_mut().for_each(|met| *met = false);
        self.scanned = 0;
    }
}
