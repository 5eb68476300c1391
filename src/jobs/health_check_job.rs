use crate::db::report_queries;
use crate::errors::AppError;
use crate::services::automation_engine::{JobContext, JobResult};
use chrono::Utc;
use tracing::info;

/// Hourly health probe: pings the store and records the outcome.
pub async fn run(ctx: JobContext) -> Result<JobResult, AppError> {
    let database_status = match ctx.db.ping().await {
        Ok(()) => "healthy",
        Err(_) => "unreachable",
    };

    report_queries::insert_health_check(ctx.db.pool(), "healthy", database_status, Utc::now())
        .await?;

    info!(database_status, "health check recorded");

    if database_status != "healthy" {
        return Err(AppError::JobExecution(format!(
            "database status: {}",
            database_status
        )));
    }

    Ok(JobResult {
        items_processed: 1,
        items_failed: 0,
    })
}
