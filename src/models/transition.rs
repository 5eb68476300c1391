use serde::{Deserialize, Serialize};

/// Query parameters accepted by the transition prediction endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitionQuery {
    #[serde(default = "default_current_industry")]
    pub current_industry: String,
    /// Comma-separated list of skills, e.g. `ai-ml,data-analysis`.
    #[serde(default)]
    pub skills: Option<String>,
}

fn default_current_industry() -> String {
    "technology".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerTransitionResponse {
    pub success_probability: f64,
    pub required_skills: Vec<String>,
    pub recommended_roles: Vec<String>,
    pub timeline_months: i64,
    pub salary_increase_percent: f64,
}
