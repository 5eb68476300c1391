use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateAssessmentRecord {
    pub user_id: String,
    pub industry: String,
    pub overall_score: f64,
    pub recommendations_count: i64,
}

pub async fn insert_assessment(
    pool: &SqlitePool,
    record: &CreateAssessmentRecord,
    at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO skills_assessments
            (id, user_id, industry, overall_score, recommendations_count, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(&record.user_id)
    .bind(&record.industry)
    .bind(record.overall_score)
    .bind(record.recommendations_count)
    .bind(at.to_rfc3339())
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn count_assessments(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS n FROM skills_assessments")
        .fetch_one(pool)
        .await?;
    row.try_get("n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[tokio::test]
    async fn test_insert_and_count() {
        let db = Database::connect_in_memory().await.unwrap();
        db.init().await.unwrap();

        let record = CreateAssessmentRecord {
            user_id: "user_0001".to_string(),
            industry: "finance".to_string(),
            overall_score: 72.5,
            recommendations_count: 3,
        };
        insert_assessment(db.pool(), &record, Utc::now()).await.unwrap();
        insert_assessment(db.pool(), &record, Utc::now()).await.unwrap();

        assert_eq!(count_assessments(db.pool()).await.unwrap(), 2);
    }
}
