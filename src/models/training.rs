use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TrainingModule {
    pub module_id: String,
    pub title: String,
    pub duration_weeks: u32,
    pub difficulty: String,
    pub priority: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrainingRecommendationsResponse {
    pub assessment_score: f64,
    pub recommended_modules: Vec<TrainingModule>,
    pub estimated_completion_time: u32,
    pub learning_path_id: String,
}
