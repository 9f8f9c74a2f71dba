use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{error, info};

use assetsniff_core::RunConfig;

use crate::error::{Result, SchedulerError};
use crate::job::{JobInvocation, SyncExecutor};

/// Handle to the spawned worker task while the trigger is armed.
struct Worker {
    shutdown_tx: watch::Sender<bool>,
    join: JoinHandle<()>,
}

/// Recurring-trigger service: fires the discovery-and-sync executor every
/// `interval_secs` seconds until stopped.
///
/// One worker task per running service; invocations execute sequentially on
/// it, so at most one sync run is ever in flight. Lifecycle methods take
/// `&mut self` and only resolve once the transition is confirmed — `start()`
/// returns after the trigger is armed, `stop()` after the worker has exited.
pub struct SnifferService {
    config: RunConfig,
    executor: Arc<dyn SyncExecutor>,
    worker: Option<Worker>,
    closed: bool,
}

impl SnifferService {
    /// Create a stopped service. Revalidates `config` and echoes every
    /// configuration value to the log, token redacted.
    pub fn new(config: RunConfig, executor: Arc<dyn SyncExecutor>) -> Result<Self> {
        config.validate()?;
        config.log_parameters();
        Ok(Self {
            config,
            executor,
            worker: None,
            closed: false,
        })
    }

    /// Arm the trigger. The first invocation fires after one full interval.
    ///
    /// Errors with [`SchedulerError::AlreadyRunning`] when the trigger is
    /// already armed, and with [`SchedulerError::Engine`] after `close()`.
    pub async fn start(&mut self) -> Result<()> {
        if self.closed {
            return Err(SchedulerError::Engine(
                "service has been closed".to_string(),
            ));
        }
        if self.worker.is_some() {
            return Err(SchedulerError::AlreadyRunning);
        }

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (armed_tx, armed_rx) = oneshot::channel();
        let join = tokio::spawn(run_loop(
            self.config.clone(),
            Arc::clone(&self.executor),
            shutdown_rx,
            armed_tx,
        ));

        // Don't report "running" until the worker confirms the trigger is armed.
        armed_rx.await.map_err(|_| {
            SchedulerError::Engine("worker exited before arming the trigger".to_string())
        })?;

        self.worker = Some(Worker { shutdown_tx, join });
        info!("scheduler started");
        Ok(())
    }

    /// Disarm the trigger. Idempotent; a never-started service is a no-op.
    ///
    /// An in-flight invocation is not cancelled — `stop()` waits for it to
    /// finish, and no further firings occur after it returns.
    pub async fn stop(&mut self) -> Result<()> {
        let Some(worker) = self.worker.take() else {
            return Ok(());
        };
        let _ = worker.shutdown_tx.send(true);
        worker
            .join
            .await
            .map_err(|e| SchedulerError::Engine(e.to_string()))?;
        info!("scheduler stopped");
        Ok(())
    }

    /// Stop if running and release the service for good. Idempotent; a later
    /// `start()` on this instance fails.
    pub async fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.stop().await?;
        self.closed = true;
        Ok(())
    }

    /// True while the trigger is armed.
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }
}

impl Drop for SnifferService {
    fn drop(&mut self) {
        // Best effort only: Drop cannot await the worker. The shutdown signal
        // stops further firings after any in-flight run; call `close()` for
        // deterministic teardown.
        if let Some(worker) = self.worker.take() {
            let _ = worker.shutdown_tx.send(true);
        }
    }
}

/// Worker loop. Ticks every `interval_secs` until `shutdown` flips to true.
///
/// The executor is awaited inline, so runs never overlap; ticks that elapse
/// while a run is executing are skipped, not queued. `biased` makes a pending
/// shutdown win against a tick that became due at the same time.
async fn run_loop(
    config: RunConfig,
    executor: Arc<dyn SyncExecutor>,
    mut shutdown: watch::Receiver<bool>,
    armed_tx: oneshot::Sender<()>,
) {
    let period = Duration::from_secs(config.interval_secs);
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let _ = armed_tx.send(());
    info!(interval_secs = config.interval_secs, "trigger armed");

    let mut run: u64 = 0;
    loop {
        tokio::select! {
            biased;
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    info!("trigger disarmed");
                    break;
                }
            }
            _ = ticker.tick() => {
                run += 1;
                let job = JobInvocation::new(run, config.clone());
                info!(job_id = %job.id, run, "executing sync run");
                if let Err(e) = executor.execute(job).await {
                    error!(run, "sync run failed: {e:#}");
                }
            }
        }
    }
}
