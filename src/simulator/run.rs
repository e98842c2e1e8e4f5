use crate::dialogue::{Dialogue, Event, TerminationReason, Turn};
use crate::error::DialogueError;
use crate::orchestrated::OrchestratedAgent;

use super::config::DialogueSimulator;

/// Event source recorded for signals emitted by the loop itself.
const LOOP_SOURCE: &str = "dialogue_loop";

impl DialogueSimulator {
    /// Run a fresh dialogue between two orchestrated agents.
    ///
    /// `first` speaks the opening turn. Completion-service failures close
    /// the dialogue with [`TerminationReason::ServiceFailure`] and still
    /// return it; only orchestrator failures are propagated as errors.
    pub async fn run(
        &self,
        first: &mut OrchestratedAgent,
        second: &mut OrchestratedAgent,
    ) -> Result<Dialogue, DialogueError> {
        let mut dialogue = Dialogue::new();
        self.run_into(first, second, &mut dialogue).await?;
        Ok(dialogue)
    }

    /// Run a dialogue, appending into a caller-owned log.
    ///
    /// Because the log lives outside the returned future, cancelling the
    /// run at the completion-service await leaves every turn appended so
    /// far valid and inspectable.
    pub async fn run_into(
        &self,
        first: &mut OrchestratedAgent,
        second: &mut OrchestratedAgent,
        dialogue: &mut Dialogue,
    ) -> Result<(), DialogueError> {
        if dialogue.is_terminated() {
            return Err(DialogueError::Generic(
                "cannot resume a terminated dialogue".to_string(),
            ));
        }

        let mut first_speaks = dialogue.len() % 2 == 0;
        while !dialogue.is_terminated() {
            let (speaker, listener) = if first_speaks {
                (&mut *first, &mut *second)
            } else {
                (&mut *second, &mut *first)
            };
            self.step(speaker, listener, dialogue).await?;
            first_speaks = !first_speaks;
        }

        log::info!(
            "dialogue terminated after {} turns: {:?}",
            dialogue.len(),
            dialogue.termination()
        );
        Ok(())
    }

    async fn step(
        &self,
        speaker: &mut OrchestratedAgent,
        listener: &mut OrchestratedAgent,
        dialogue: &mut Dialogue,
    ) -> Result<(), DialogueError> {
        let outcome = match speaker.respond(dialogue).await {
            Ok(outcome) => outcome,
            Err(err @ DialogueError::OrchestratorFailure { .. }) => return Err(err),
            Err(err) => {
                log::warn!("completion service failed, closing dialogue: {err}");
                dialogue.close(TerminationReason::ServiceFailure);
                return Ok(());
            }
        };

        let index = dialogue.next_index();
        let (text, marker_hit) = self.strip_end_marker(outcome.text);

        if text.is_empty() && marker_hit {
            // A marker-only reply is a pure end signal, not spoken content.
            dialogue.close(TerminationReason::ServiceEndMarker);
            return Ok(());
        }

        let mut turn = Turn::new(speaker.name(), &text, index);
        if self.timestamps {
            turn = turn.stamped();
        }
        dialogue.push_turn(turn)?;
        for event in outcome.events {
            dialogue.push_event(event);
        }
        listener.hear(&text);
        log::debug!("turn {index} by {}", speaker.name());

        let ceiling_hit = dialogue.len() >= self.max_turns;
        match outcome.stop {
            Some(source) if ceiling_hit => {
                // Ambiguous precedence is logged, never silently dropped.
                dialogue.push_event(Event::signal(
                    LOOP_SOURCE,
                    format!("turn ceiling coincided with stop signal from '{source}'"),
                    index,
                ));
                dialogue.close(TerminationReason::Ceiling);
            }
            Some(source) => {
                dialogue.close(TerminationReason::OrchestratorSignal(source));
            }
            None if marker_hit => {
                dialogue.close(TerminationReason::ServiceEndMarker);
            }
            None if ceiling_hit => {
                dialogue.close(TerminationReason::MaxTurns);
            }
            None => {}
        }
        Ok(())
    }

    /// Run several independent agent pairings concurrently.
    ///
    /// Dialogues share no state, so they parallelize freely; each pairing
    /// must be freshly constructed or reset by the caller.
    pub async fn run_all(
        &self,
        pairs: Vec<(OrchestratedAgent, OrchestratedAgent)>,
    ) -> Vec<Result<Dialogue, DialogueError>> {
        let runs = pairs.into_iter().map(|(mut first, mut second)| async move {
            self.run(&mut first, &mut second).await
        });
        futures::future::join_all(runs).await
    }

    fn strip_end_marker(&self, text: String) -> (String, bool) {
        let Some(marker) = &self.end_marker else {
            return (text, false);
        };
        if !text.contains(marker.as_str()) {
            return (text, false);
        }
        (text.replace(marker.as_str(), "").trim().to_string(), true)
    }
}
