use crate::db::{assessment_queries, market_queries, report_queries};
use crate::errors::AppError;
use crate::services::automation_engine::{JobContext, JobResult};
use chrono::{Duration, Utc};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
struct WeeklyReport {
    report_period_start: String,
    report_period_end: String,
    total_assessments: i64,
    market_updates: i64,
    engine_errors: u64,
    notifications_sent: u64,
    generated_at: String,
}

/// Weekly platform report: aggregates stored rows and engine counters, persists
/// the report, and pushes it through the notifier.
pub async fn run(ctx: JobContext) -> Result<JobResult, AppError> {
    info!("generating weekly report");

    let now = Utc::now();
    let metrics = ctx.metrics.snapshot();
    let report = WeeklyReport {
        report_period_start: (now - Duration::days(7)).to_rfc3339(),
        report_period_end: now.to_rfc3339(),
        total_assessments: assessment_queries::count_assessments(ctx.db.pool()).await?,
        market_updates: market_queries::count_market_updates(ctx.db.pool()).await?,
        engine_errors: metrics.errors_encountered,
        notifications_sent: metrics.notifications_sent,
        generated_at: now.to_rfc3339(),
    };

    let body = serde_json::to_string(&report)
        .map_err(|e| AppError::JobExecution(format!("report serialization: {}", e)))?;
    report_queries::insert_weekly_report(ctx.db.pool(), &body, now).await?;

    ctx.notifier.notify("Weekly platform report", &body).await?;
    ctx.metrics.incr_notifications();

    info!("weekly report generated and distributed");

    Ok(JobResult {
        items_processed: 1,
        items_failed: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::ScoringTables;
    use crate::services::automation_engine::EngineMetrics;
    use crate::services::notifier::LogNotifier;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_report_is_stored_and_notified() {
        let db = Arc::new(Database::connect_in_memory().await.unwrap());
        db.init().await.unwrap();
        let ctx = JobContext {
            db: Arc::clone(&db),
            tables: Arc::new(ScoringTables::default()),
            metrics: Arc::new(EngineMetrics::default()),
            notifier: Arc::new(LogNotifier),
        };

        run(ctx.clone()).await.unwrap();

        assert_eq!(report_queries::count_weekly_reports(db.pool()).await.unwrap(), 1);
        assert_eq!(ctx.metrics.snapshot().notifications_sent, 1);
    }
}
