use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use assetsniff_core::RunConfig;

/// One firing of the recurring trigger.
///
/// Created fresh for every firing and handed to the [`SyncExecutor`] by
/// value — no state is carried between invocations. Anything cumulative
/// (e.g. which devices were already seen) belongs to the executor.
#[derive(Debug, Clone)]
pub struct JobInvocation {
    /// Unique per firing — used for log correlation.
    pub id: Uuid,
    /// 1-based firing counter since the trigger was armed.
    pub run: u64,
    /// UTC instant the trigger fired.
    pub fired_at: DateTime<Utc>,
    /// Snapshot of the run configuration (server_mode, api_address,
    /// api_token, subnets) taken at service construction.
    pub config: RunConfig,
}

impl JobInvocation {
    pub fn new(run: u64, config: RunConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            run,
            fired_at: Utc::now(),
            config,
        }
    }
}

/// Collaborator that performs the actual discovery-and-sync work.
///
/// Implementations report success/failure through their own logging; the
/// scheduler logs a returned error and moves on without reacting to it —
/// retries, if any, are the executor's business.
#[async_trait]
pub trait SyncExecutor: Send + Sync {
    async fn execute(&self, job: JobInvocation) -> anyhow::Result<()>;
}
