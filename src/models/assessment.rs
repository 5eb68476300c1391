use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SkillsAssessmentRequest {
    pub current_industry: String,
    #[serde(default)]
    pub target_industry: Option<String>,
    pub experience_years: String,
    pub skills: Vec<String>,
    #[serde(default = "default_education_level")]
    pub education_level: String,
    #[serde(default)]
    pub certifications: Vec<String>,
}

fn default_education_level() -> String {
    "bachelor".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGap {
    pub skill: String,
    pub current_level: i32,
    pub required_level: i32,
    pub priority: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransitionOpportunity {
    pub role: String,
    pub match_score: f64,
    pub industry: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillsAssessmentResponse {
    pub overall_score: f64,
    pub skill_gaps: Vec<SkillGap>,
    pub transition_opportunities: Vec<TransitionOpportunity>,
    pub recommendations: Vec<String>,
}
