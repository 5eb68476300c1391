use crate::models::{
    ScoringTables, SkillsAssessmentRequest, TrainingModule, TrainingRecommendationsResponse,
};
use crate::services::assessment_service;

const MODULE_DURATION_WEEKS: u32 = 4;
const MAX_MODULES: usize = 5;

/// One training module per identified skill gap, ordered by the gap list.
pub fn recommendations(
    tables: &ScoringTables,
    request: &SkillsAssessmentRequest,
) -> TrainingRecommendationsResponse {
    let assessment = assessment_service::assess_skills(tables, request);

    let mut modules: Vec<TrainingModule> = assessment
        .skill_gaps
        .iter()
        .map(|gap| TrainingModule {
            module_id: format!("{}-training", gap.skill.to_lowercase().replace(' ', "-")),
            title: format!("{} Training", gap.skill),
            duration_weeks: MODULE_DURATION_WEEKS,
            difficulty: "intermediate".to_string(),
            priority: gap.priority.clone(),
        })
        .collect();

    let estimated_completion_time = modules.len() as u32 * MODULE_DURATION_WEEKS;
    modules.truncate(MAX_MODULES);

    TrainingRecommendationsResponse {
        assessment_score: assessment.overall_score,
        recommended_modules: modules,
        estimated_completion_time,
        learning_path_id: format!("path-{}", request.current_industry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modules_follow_gaps() {
        let tables = ScoringTables::default();
        let request = SkillsAssessmentRequest {
            current_industry: "finance".to_string(),
            target_industry: None,
            experience_years: "3-5".to_string(),
            skills: vec!["communication".to_string()],
            education_level: "bachelor".to_string(),
            certifications: vec![],
        };

        let response = recommendations(&tables, &request);
        assert_eq!(response.recommended_modules.len(), 3);
        assert_eq!(response.recommended_modules[0].module_id, "ai-ml-training");
        assert_eq!(response.recommended_modules[0].title, "Ai Ml Training");
        assert_eq!(response.estimated_completion_time, 12);
        assert_eq!(response.learning_path_id, "path-finance");
    }

    #[test]
    fn test_no_gaps_no_modules() {
        let tables = ScoringTables::default();
        let request = SkillsAssessmentRequest {
            current_industry: "cybersecurity".to_string(),
            target_industry: None,
            experience_years: "6-10".to_string(),
            skills: vec![
                "ai-ml".to_string(),
                "data-analysis".to_string(),
                "process-automation".to_string(),
            ],
            education_level: "bachelor".to_string(),
            certifications: vec![],
        };

        let response = recommendations(&tables, &request);
        assert!(response.recommended_modules.is_empty());
        assert_eq!(response.estimated_completion_time, 0);
    }
}
