use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dialogue::Dialogue;
use crate::error::DialogueError;

use super::action::OrchestratorAction;
use super::Orchestrator;

/// Randomly injects a behavior-changing instruction, up to a cap.
///
/// Each observation draws one Bernoulli trial with the configured
/// probability. On success below the activation cap, the next reason is
/// selected round-robin from the configured list (the selection policy
/// is fixed so runs are testable) and emitted as an instruction. Once
/// the cap is reached the orchestrator stays silent for the rest of the
/// dialogue.
pub struct BehaviorChangeOrchestrator {
    name: String,
    probability: f64,
    reasons: Vec<String>,
    max_times: usize,
    seed: Option<u64>,
    rng: StdRng,
    cursor: usize,
    activations: usize,
}

impl BehaviorChangeOrchestrator {
    /// Create a behavior-change policy.
    ///
    /// Rejects probabilities outside `[0, 1]`, an empty reason list, and
    /// a zero activation cap.
    pub fn new(
        probability: f64,
        reasons: Vec<String>,
        max_times: usize,
    ) -> Result<Self, DialogueError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(DialogueError::InvalidConfig(format!(
                "probability {probability} is outside [0, 1]"
            )));
        }
        if reasons.is_empty() {
            return Err(DialogueError::InvalidConfig(
                "behavior change requires at least one reason".to_string(),
            ));
        }
        if max_times == 0 {
            return Err(DialogueError::InvalidConfig(
                "behavior change activation cap must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            name: "behavior_change".to_string(),
            probability,
            reasons,
            max_times,
            seed: None,
            rng: StdRng::from_entropy(),
            cursor: 0,
            activations: 0,
        })
    }

    /// Fix the RNG seed for reproducible runs; `reset` restores it.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Override the event-source name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// How many times this instance has fired so far.
    pub fn activations(&self) -> usize {
        self.activations
    }
}

impl Orchestrator for BehaviorChangeOrchestrator {
    fn name(&self) -> &str {
        &self.name
    }

    fn observe(&mut self, _dialogue: &Dialogue) -> Result<OrchestratorAction, DialogueError> {
        if self.activations >= self.max_times {
            return Ok(OrchestratorAction::None);
        }
        if !self.rng.gen_bool(self.probability) {
            return Ok(OrchestratorAction::None);
        }
        let reason = self.reasons[self.cursor % self.reasons.len()].clone();
        self.cursor += 1;
        self.activations += 1;
        log::debug!("behavior change fired ({}/{})", self.activations, self.max_times);
        Ok(OrchestratorAction::Instruct(reason))
    }

    fn reset(&mut self) {
        self.activations = 0;
        self.cursor = 0;
        self.rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
    }
}
