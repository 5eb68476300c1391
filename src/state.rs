use std::sync::Arc;

use crate::db::Database;
use crate::models::ScoringTables;
use crate::services::automation_engine::AutomationEngine;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub tables: Arc<ScoringTables>,
    pub engine: Arc<AutomationEngine>,
}
