#[path = "simulator/config.rs"]
mod config;

#[path = "simulator/run.rs"]
mod run;

#[cfg(test)]
#[path = "simulator/tests.rs"]
mod tests;

pub use config::{DialogueSimulator, DialogueSimulatorBuilder};
