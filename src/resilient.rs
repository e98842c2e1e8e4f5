#[path = "resilient/config.rs"]
mod config;

#[path = "resilient/wrapper.rs"]
mod wrapper;

#[path = "resilient/service.rs"]
mod service;

pub use config::ResilienceConfig;
pub use wrapper::ResilientCompletion;
