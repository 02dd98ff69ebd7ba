pub mod environment_service;

pub use environment_service::{EnvironmentService, RunContext, GO_TOOL};
