use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::SqlitePool;

#[derive(Debug, Clone)]
pub struct CreateMarketUpdate {
    pub source: String,
    pub records_updated: i64,
    pub industries_covered: i64,
    pub data_quality_score: f64,
}

pub async fn insert_market_update(
    pool: &SqlitePool,
    update: &CreateMarketUpdate,
    at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO job_market_data
            (source, records_updated, industries_covered, data_quality_score, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&update.source)
    .bind(update.records_updated)
    .bind(update.industries_covered)
    .bind(update.data_quality_score)
    .bind(at.to_rfc3339())
    .execute(pool)
    .await?;

    Ok(())
}

#[derive(Debug, Clone)]
pub struct CreateIndustryAnalytics {
    pub industry: String,
    pub skill_demand_score: f64,
    pub automation_readiness: f64,
    pub training_effectiveness: f64,
}

pub async fn insert_industry_analytics(
    pool: &SqlitePool,
    analytics: &CreateIndustryAnalytics,
    at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO industry_analytics
            (industry, skill_demand_score, automation_readiness, training_effectiveness, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&analytics.industry)
    .bind(analytics.skill_demand_score)
    .bind(analytics.automation_readiness)
    .bind(analytics.training_effectiveness)
    .bind(at.to_rfc3339())
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn count_market_updates(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS n FROM job_market_data")
        .fetch_one(pool)
        .await?;
    row.try_get("n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[tokio::test]
    async fn test_market_update_roundtrip() {
        let db = Database::connect_in_memory().await.unwrap();
        db.init().await.unwrap();

        let update = CreateMarketUpdate {
            source: "job_boards_api".to_string(),
            records_updated: 420,
            industries_covered: 8,
            data_quality_score: 0.95,
        };
        insert_market_update(db.pool(), &update, Utc::now()).await.unwrap();

        assert_eq!(count_market_updates(db.pool()).await.unwrap(), 1);
    }
}
