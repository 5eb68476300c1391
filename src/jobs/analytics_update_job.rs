use crate::db::market_queries::{self, CreateIndustryAnalytics};
use crate::errors::AppError;
use crate::models::INDUSTRIES;
use crate::services::analytics_service;
use crate::services::automation_engine::{JobContext, JobResult};
use chrono::Utc;
use tracing::info;

/// Daily analytics refresh: one derived row per tracked industry.
pub async fn run(ctx: JobContext) -> Result<JobResult, AppError> {
    info!("starting analytics data update");

    for industry in INDUSTRIES {
        let (skill_demand_score, automation_readiness, training_effectiveness) =
            analytics_service::industry_figures(&ctx.tables, industry);

        let analytics = CreateIndustryAnalytics {
            industry: industry.to_string(),
            skill_demand_score,
            automation_readiness,
            training_effectiveness,
        };
        market_queries::insert_industry_analytics(ctx.db.pool(), &analytics, Utc::now()).await?;
    }

    ctx.metrics.incr_data_updates();
    info!(industries = INDUSTRIES.len(), "analytics data update completed");

    Ok(JobResult {
        items_processed: INDUSTRIES.len() as i64,
        items_failed: 0,
    })
}
