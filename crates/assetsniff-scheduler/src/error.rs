use thiserror::Error;

/// Errors that can occur within the scheduler subsystem.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The run configuration failed validation.
    #[error("configuration error: {0}")]
    Config(#[from] assetsniff_core::ConfigError),

    /// `start()` was called while the trigger is already armed.
    #[error("scheduler is already running")]
    AlreadyRunning,

    /// Failure in the underlying timer engine (spawn, ack, or join).
    #[error("engine error: {0}")]
    Engine(String),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
