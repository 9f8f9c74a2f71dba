//! End-to-end lifecycle run against a virtual clock: a five-second trigger
//! observed over fifteen seconds, then stopped.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use assetsniff_core::{RunConfig, REDACTED_TOKEN};
use assetsniff_scheduler::{JobInvocation, SnifferService, SyncExecutor};

#[derive(Default)]
struct RecordingExecutor {
    invocations: Mutex<Vec<JobInvocation>>,
}

#[async_trait]
impl SyncExecutor for RecordingExecutor {
    async fn execute(&self, job: JobInvocation) -> anyhow::Result<()> {
        self.invocations.lock().unwrap().push(job);
        Ok(())
    }
}

async fn advance_secs(n: u64) {
    for _ in 0..n {
        tokio::time::advance(Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn five_second_trigger_over_fifteen_seconds() {
    let config = RunConfig::new(5, true, "http://snipe.local", "abc123", "10.0.0.0/24").unwrap();
    let executor = Arc::new(RecordingExecutor::default());
    let mut service = SnifferService::new(config.clone(), executor.clone()).unwrap();

    service.start().await.unwrap();
    advance_secs(15).await;

    {
        let invocations = executor.invocations.lock().unwrap();
        assert_eq!(invocations.len(), 3, "firings at t=5, t=10, t=15");

        // Every invocation carries the same configuration payload.
        for (i, job) in invocations.iter().enumerate() {
            assert_eq!(job.run, (i + 1) as u64);
            assert_eq!(job.config, config);
            assert!(job.config.server_mode);
            assert_eq!(job.config.api_address, "http://snipe.local");
            assert_eq!(job.config.subnets, "10.0.0.0/24");
        }

        // Ephemeral identity: each firing gets its own id.
        assert_ne!(invocations[0].id, invocations[1].id);
    }

    // Stop halts further firings, even well past more intervals.
    service.stop().await.unwrap();
    advance_secs(20).await;
    assert_eq!(executor.invocations.lock().unwrap().len(), 3);

    service.close().await.unwrap();
    service.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn invocation_debug_output_keeps_token_redacted() {
    let config = RunConfig::new(1, false, "http://snipe.local", "abc123", "").unwrap();
    let executor = Arc::new(RecordingExecutor::default());
    let mut service = SnifferService::new(config, executor.clone()).unwrap();

    service.start().await.unwrap();
    advance_secs(1).await;
    service.stop().await.unwrap();

    let invocations = executor.invocations.lock().unwrap();
    let rendered = format!("{:?}", invocations[0]);
    assert!(rendered.contains(REDACTED_TOKEN));
    assert!(!rendered.contains("abc123"));
}
