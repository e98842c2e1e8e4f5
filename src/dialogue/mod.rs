mod event;
mod transcript;
mod turn;

pub use event::{Event, EventKind};
pub use transcript::{Dialogue, TerminationReason};
pub use turn::Turn;
