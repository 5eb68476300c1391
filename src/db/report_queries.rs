use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::SqlitePool;

pub async fn insert_training_result(
    pool: &SqlitePool,
    model_name: &str,
    data_points_used: i64,
    at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO training_results (model_name, data_points_used, trained_at) VALUES (?, ?, ?)",
    )
    .bind(model_name)
    .bind(data_points_used)
    .bind(at.to_rfc3339())
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn insert_weekly_report(
    pool: &SqlitePool,
    report_json: &str,
    at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO weekly_reports (report_json, generated_at) VALUES (?, ?)")
        .bind(report_json)
        .bind(at.to_rfc3339())
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn insert_health_check(
    pool: &SqlitePool,
    api_status: &str,
    database_status: &str,
    at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO health_checks (api_status, database_status, checked_at) VALUES (?, ?, ?)")
        .bind(api_status)
        .bind(database_status)
        .bind(at.to_rfc3339())
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn count_weekly_reports(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS n FROM weekly_reports")
        .fetch_one(pool)
        .await?;
    row.try_get("n")
}

pub async fn count_health_checks(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS n FROM health_checks")
        .fetch_one(pool)
        .await?;
    row.try_get("n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[tokio::test]
    async fn test_health_check_insert() {
        let db = Database::connect_in_memory().await.unwrap();
        db.init().await.unwrap();

        insert_health_check(db.pool(), "healthy", "healthy", Utc::now())
            .await
            .unwrap();
        assert_eq!(count_health_checks(db.pool()).await.unwrap(), 1);
    }
}
