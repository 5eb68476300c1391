use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct RoiCalculationRequest {
    pub industry: String,
    pub employee_count: i64,
    pub training_budget: f64,
    #[serde(default = "default_avg_salary")]
    pub current_avg_salary: f64,
}

fn default_avg_salary() -> f64 {
    50_000.0
}

#[derive(Debug, Clone, Serialize)]
pub struct RoiCalculationResponse {
    pub traditional_cost: f64,
    pub ai_enhanced_cost: f64,
    pub cost_savings: f64,
    pub roi_percentage: f64,
    pub payback_months: i64,
    pub productivity_increase: f64,
}
