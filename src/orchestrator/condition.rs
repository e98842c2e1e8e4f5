use std::sync::Arc;

use regex::Regex;

use crate::dialogue::Turn;

/// Predicate over a single turn, used by reflex and scenario policies.
#[derive(Clone)]
pub enum TurnCondition {
    /// Always match
    Any,
    /// Match if the turn text equals the exact string
    Eq(String),
    /// Match if the turn text contains the substring
    Contains(String),
    /// Match if the turn text does not contain the substring
    NotContains(String),
    /// Match if the speaker name matches
    SpeakerIs(String),
    /// Match if the turn text is longer than the given length
    LenGt(usize),
    /// Match if the turn text matches the regex
    Regex(String),
    /// Custom condition function
    Custom(Arc<dyn Fn(&Turn) -> bool + Send + Sync>),
    /// Match if all conditions are met
    All(Vec<TurnCondition>),
    /// Match if any condition is met
    AnyOf(Vec<TurnCondition>),
}

impl TurnCondition {
    /// Check whether the condition holds for the given turn.
    pub fn matches(&self, turn: &Turn) -> bool {
        match self {
            TurnCondition::Any => true,
            TurnCondition::Eq(text) => turn.text == *text,
            TurnCondition::Contains(text) => turn.text.contains(text),
            TurnCondition::NotContains(text) => !turn.text.contains(text),
            TurnCondition::SpeakerIs(speaker) => turn.speaker == *speaker,
            TurnCondition::LenGt(len) => turn.text.len() > *len,
            TurnCondition::Regex(pattern) => Regex::new(pattern)
                .map(|re| re.is_match(&turn.text))
                .unwrap_or(false),
            TurnCondition::Custom(func) => func(turn),
            TurnCondition::All(inner) => inner.iter().all(|c| c.matches(turn)),
            TurnCondition::AnyOf(inner) => inner.iter().any(|c| c.matches(turn)),
        }
    }
}

impl std::fmt::Debug for TurnCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnCondition::Any => write!(f, "Any"),
            TurnCondition::Eq(text) => write!(f, "Eq({text:?})"),
            TurnCondition::Contains(text) => write!(f, "Contains({text:?})"),
            TurnCondition::NotContains(text) => write!(f, "NotContains({text:?})"),
            TurnCondition::SpeakerIs(speaker) => write!(f, "SpeakerIs({speaker:?})"),
            TurnCondition::LenGt(len) => write!(f, "LenGt({len})"),
            TurnCondition::Regex(pattern) => write!(f, "Regex({pattern:?})"),
            TurnCondition::Custom(_) => write!(f, "Custom(..)"),
            TurnCondition::All(inner) => write!(f, "All({inner:?})"),
            TurnCondition::AnyOf(inner) => write!(f, "AnyOf({inner:?})"),
        }
    }
}
