//! `assetsniff-scheduler` — Tokio-based recurring trigger for sync runs.
//!
//! # Overview
//!
//! [`engine::SnifferService`] owns a single repeating trigger. `start()` arms
//! it, and each firing hands a fresh [`job::JobInvocation`] — a snapshot of
//! the run configuration — to the [`job::SyncExecutor`] collaborator that
//! performs the actual subnet scan and asset-API sync. `stop()` disarms the
//! trigger; `close()` tears the service down for good.
//!
//! # Lifecycle contract
//!
//! | Call       | From state          | Effect                                  |
//! |------------|---------------------|-----------------------------------------|
//! | `start()`  | constructed/stopped | arms the trigger; errors when running   |
//! | `stop()`   | any                 | disarms; idempotent, waits for in-flight |
//! | `close()`  | any                 | stop + terminal; idempotent             |
//!
//! The first invocation fires one full interval after `start()`, and firings
//! that land while a previous invocation is still executing are skipped.

pub mod engine;
pub mod error;
pub mod job;

pub use engine::SnifferService;
pub use error::{Result, SchedulerError};
pub use job::{JobInvocation, SyncExecutor};
