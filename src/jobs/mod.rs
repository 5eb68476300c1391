//! Background jobs dispatched by the automation engine.
//!
//! Each job is an async function of a [`JobContext`](crate::services::automation_engine::JobContext)
//! returning a [`JobResult`](crate::services::automation_engine::JobResult). Jobs
//! either complete or fail; the engine records the outcome, so a job never
//! needs its own retry or crash handling. All figures a job produces come
//! from the deterministic scoring tables, never from random draws, so re-runs
//! write the same rows for the same configuration.

pub mod analytics_update_job;
pub mod batch_assessment_job;
pub mod health_check_job;
pub mod market_data_job;
pub mod model_retrain_job;
pub mod weekly_report_job;
