use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::agent::Agent;
use crate::completion::CompletionService;
use crate::dialogue::{EventKind, TerminationReason};
use crate::error::DialogueError;
use crate::message::Message;
use crate::orchestrated::OrchestratedAgent;
use crate::orchestrator::{BehaviorChangeOrchestrator, TurnBoundOrchestrator};
use crate::persona::Persona;
use crate::resilient::{ResilienceConfig, ResilientCompletion};
use crate::simulator::DialogueSimulator;

/// Replays a fixed list of replies, cycling when exhausted.
struct ScriptedService {
    replies: Vec<String>,
    cursor: Mutex<usize>,
}

impl ScriptedService {
    fn new(replies: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            replies: replies.iter().map(|r| r.to_string()).collect(),
            cursor: Mutex::new(0),
        })
    }

    fn rewind(&self) {
        *self.cursor.lock().expect("cursor lock") = 0;
    }
}

#[async_trait]
impl CompletionService for ScriptedService {
    async fn complete(
        &self,
        _history: &[Message],
        _instruction: Option<&str>,
    ) -> Result<String, DialogueError> {
        let mut cursor = self.cursor.lock().expect("cursor lock");
        let reply = self.replies[*cursor % self.replies.len()].clone();
        *cursor += 1;
        Ok(reply)
    }
}

struct TimeoutService {
    calls: AtomicUsize,
}

#[async_trait]
impl CompletionService for TimeoutService {
    async fn complete(
        &self,
        _history: &[Message],
        _instruction: Option<&str>,
    ) -> Result<String, DialogueError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DialogueError::Timeout("stub deadline".to_string()))
    }
}

fn agent(name: &str, service: Arc<dyn CompletionService>) -> Agent {
    let persona = Persona::builder()
        .name(name)
        .role("a test participant")
        .build()
        .expect("persona");
    Agent::builder()
        .persona(persona)
        .service(service)
        .build()
        .expect("agent")
}

fn bare(name: &str, service: Arc<dyn CompletionService>) -> OrchestratedAgent {
    OrchestratedAgent::new(agent(name, service))
}

fn simulator(max_turns: usize) -> DialogueSimulator {
    DialogueSimulator::builder()
        .max_turns(max_turns)
        .build()
        .expect("simulator")
}

#[test]
fn zero_ceiling_is_rejected() {
    assert!(DialogueSimulator::builder().max_turns(0).build().is_err());
}

#[tokio::test]
async fn ceiling_alone_terminates_with_max_turns() {
    let service = ScriptedService::new(&["hello there"]);
    let mut a = bare("Ada", service.clone());
    let mut b = bare("Brice", service.clone());

    let dialogue = simulator(10).run(&mut a, &mut b).await.expect("run");

    assert_eq!(dialogue.len(), 10);
    assert_eq!(dialogue.termination(), Some(&TerminationReason::MaxTurns));
    for (expected, turn) in dialogue.turns().iter().enumerate() {
        assert_eq!(turn.index, expected);
        let speaker = if expected % 2 == 0 { "Ada" } else { "Brice" };
        assert_eq!(turn.speaker, speaker);
    }
}

#[tokio::test]
async fn turn_bound_stop_is_attributed_to_its_source() {
    let service = ScriptedService::new(&["still talking"]);
    let mut a = bare("Ada", service.clone())
        .compose(TurnBoundOrchestrator::new(2, 6).expect("turn bound"));
    let mut b = bare("Brice", service.clone());

    let dialogue = simulator(50).run(&mut a, &mut b).await.expect("run");

    // Ada observes at even indices; the first observation at or past six
    // recorded turns happens before turn 6.
    assert_eq!(dialogue.len(), 7);
    assert_eq!(
        dialogue.termination(),
        Some(&TerminationReason::OrchestratorSignal("turn_bound".to_string()))
    );
    let signal = dialogue
        .events()
        .iter()
        .find(|e| e.kind == EventKind::Signal)
        .expect("signal event");
    assert_eq!(signal.source, "turn_bound");
    assert_eq!(signal.turn_index, 6);
}

#[tokio::test]
async fn coinciding_ceiling_and_stop_record_ambiguity() {
    let service = ScriptedService::new(&["reply"]);
    let mut a = bare("Ada", service.clone())
        .compose(TurnBoundOrchestrator::new(0, 4).expect("turn bound"));
    let mut b = bare("Brice", service.clone());

    // Ada's stop fires while producing turn 4, which is also the fifth
    // and final turn under the ceiling.
    let dialogue = simulator(5).run(&mut a, &mut b).await.expect("run");

    assert_eq!(dialogue.len(), 5);
    assert_eq!(dialogue.termination(), Some(&TerminationReason::Ceiling));
    let loop_event = dialogue
        .events()
        .iter()
        .find(|e| e.source == "dialogue_loop")
        .expect("loop event");
    assert_eq!(loop_event.kind, EventKind::Signal);
    assert!(loop_event.payload.contains("turn_bound"));
}

#[tokio::test]
async fn service_failure_preserves_empty_log_after_retry_budget() {
    let inner = Arc::new(TimeoutService {
        calls: AtomicUsize::new(0),
    });
    let resilient = Arc::new(ResilientCompletion::new(
        inner.clone(),
        ResilienceConfig {
            max_attempts: 3,
            base_delay_ms: 1,
            max_delay_ms: 2,
            jitter: false,
            timeout_ms: None,
        },
    ));
    let mut a = bare("Ada", resilient.clone());
    let mut b = bare("Brice", resilient);

    let dialogue = simulator(10).run(&mut a, &mut b).await.expect("run");

    assert!(dialogue.is_empty());
    assert_eq!(
        dialogue.termination(),
        Some(&TerminationReason::ServiceFailure)
    );
    assert_eq!(inner.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn end_marker_strips_and_terminates() {
    let service = ScriptedService::new(&["nice to meet you", "goodbye [END]"]);
    let mut a = bare("Ada", service.clone());
    let mut b = bare("Brice", service.clone());

    let dialogue = DialogueSimulator::builder()
        .max_turns(10)
        .end_marker("[END]")
        .build()
        .expect("simulator")
        .run(&mut a, &mut b)
        .await
        .expect("run");

    assert_eq!(dialogue.len(), 2);
    assert_eq!(dialogue.turns()[1].text, "goodbye");
    assert_eq!(
        dialogue.termination(),
        Some(&TerminationReason::ServiceEndMarker)
    );
}

#[tokio::test]
async fn marker_only_reply_is_not_appended() {
    let service = ScriptedService::new(&["hello", "[END]"]);
    let mut a = bare("Ada", service.clone());
    let mut b = bare("Brice", service.clone());

    let dialogue = DialogueSimulator::builder()
        .max_turns(10)
        .end_marker("[END]")
        .build()
        .expect("simulator")
        .run(&mut a, &mut b)
        .await
        .expect("run");

    assert_eq!(dialogue.len(), 1);
    assert_eq!(
        dialogue.termination(),
        Some(&TerminationReason::ServiceEndMarker)
    );
}

#[tokio::test]
async fn reset_and_rerun_reproduce_the_dialogue() {
    let service = ScriptedService::new(&["alpha", "beta", "gamma", "delta"]);
    let behavior = BehaviorChangeOrchestrator::new(
        0.5,
        vec!["Switch topics.".to_string()],
        2,
    )
    .expect("behavior change")
    .with_seed(7);
    let mut a = bare("Ada", service.clone()).compose(behavior);
    let mut b = bare("Brice", service.clone());

    let sim = simulator(8);
    let run_one = sim.run(&mut a, &mut b).await.expect("first run");

    a.reset();
    b.reset();
    service.rewind();
    let run_two = sim.run(&mut a, &mut b).await.expect("second run");

    assert_eq!(run_one.turns(), run_two.turns());
    assert_eq!(run_one.events(), run_two.events());
    assert_eq!(run_one.termination(), run_two.termination());
}

#[tokio::test]
async fn independent_dialogues_run_concurrently() {
    let sim = simulator(4);
    let pairs = (0..3)
        .map(|_| {
            let service = ScriptedService::new(&["hi", "ho"]);
            (
                bare("Ada", service.clone()),
                bare("Brice", service.clone()),
            )
        })
        .collect();

    let dialogues = sim.run_all(pairs).await;

    assert_eq!(dialogues.len(), 3);
    for dialogue in dialogues {
        let dialogue = dialogue.expect("run");
        assert_eq!(dialogue.len(), 4);
        assert_eq!(dialogue.termination(), Some(&TerminationReason::MaxTurns));
    }
}

#[tokio::test]
async fn run_into_keeps_partial_log_on_caller_side() {
    let service = ScriptedService::new(&["one", "two"]);
    let mut a = bare("Ada", service.clone());
    let mut b = bare("Brice", service.clone());

    let sim = simulator(4);
    let mut dialogue = crate::dialogue::Dialogue::new();
    sim.run_into(&mut a, &mut b, &mut dialogue)
        .await
        .expect("run");

    assert_eq!(dialogue.len(), 4);
    assert!(dialogue.is_terminated());

    // A closed dialogue cannot be resumed.
    let err = sim.run_into(&mut a, &mut b, &mut dialogue).await;
    assert!(err.is_err());
}
