use crate::models::{
    ScoringTables, SkillGap, SkillsAssessmentRequest, SkillsAssessmentResponse,
    TransitionOpportunity,
};

/// Skills every transition path is benchmarked against. Missing ones become
/// high-priority gaps.
const CRITICAL_SKILLS: [&str; 3] = ["ai-ml", "data-analysis", "process-automation"];

const MAX_SKILL_GAPS: usize = 3;
const REQUIRED_GAP_LEVEL: i32 = 8;

fn experience_factor(experience_years: &str) -> f64 {
    match experience_years {
        "0-2" => 0.7,
        "3-5" => 1.0,
        "6-10" => 1.3,
        "10+" => 1.5,
        _ => 1.0,
    }
}

fn title_case(skill: &str) -> String {
    skill
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed-form assessment score: weighted sum of the reported skills, scaled
/// by industry relevance and experience, normalized to 0..100.
pub fn assess_skills(
    tables: &ScoringTables,
    request: &SkillsAssessmentRequest,
) -> SkillsAssessmentResponse {
    let exp_factor = experience_factor(&request.experience_years);

    let mut base_score = 0.0;
    for skill in &request.skills {
        let weight = tables.skill_weight(skill);
        let industry_mult = tables.industry_multiplier(&request.current_industry, skill);
        base_score += weight * industry_mult * exp_factor;
    }

    // 20 is the largest skill weight and 1.5 the largest industry multiplier
    let max_possible = request.skills.len() as f64 * 20.0 * 1.5;
    let overall_score = if max_possible > 0.0 {
        ((base_score / max_possible) * 100.0).min(100.0)
    } else {
        0.0
    };
    let overall_score = (overall_score * 10.0).round() / 10.0;

    let mut skill_gaps = Vec::new();
    for skill in CRITICAL_SKILLS {
        if !request.skills.iter().any(|s| s == skill) {
            skill_gaps.push(SkillGap {
                skill: title_case(skill),
                current_level: 0,
                required_level: REQUIRED_GAP_LEVEL,
                priority: "high".to_string(),
            });
        }
    }
    skill_gaps.truncate(MAX_SKILL_GAPS);

    let opportunity_industry = request
        .target_industry
        .clone()
        .unwrap_or_else(|| request.current_industry.clone());
    let transition_opportunities = vec![
        TransitionOpportunity {
            role: "Data Scientist".to_string(),
            match_score: 0.8,
            industry: opportunity_industry.clone(),
        },
        TransitionOpportunity {
            role: "ML Engineer".to_string(),
            match_score: 0.75,
            industry: opportunity_industry,
        },
    ];

    let recommendations = if overall_score < 40.0 {
        vec![
            "Focus on foundational digital skills".to_string(),
            "Complete AI literacy training".to_string(),
        ]
    } else if overall_score < 70.0 {
        vec![
            "Advance technical skills".to_string(),
            "Pursue certifications".to_string(),
        ]
    } else {
        vec![
            "Ready for leadership roles".to_string(),
            "Explore emerging technologies".to_string(),
        ]
    };

    SkillsAssessmentResponse {
        overall_score,
        skill_gaps,
        transition_opportunities,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(industry: &str, skills: &[&str], experience: &str) -> SkillsAssessmentRequest {
        SkillsAssessmentRequest {
            current_industry: industry.to_string(),
            target_industry: None,
            experience_years: experience.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            education_level: "bachelor".to_string(),
            certifications: vec![],
        }
    }

    #[test]
    fn test_empty_skills_scores_zero() {
        let tables = ScoringTables::default();
        let response = assess_skills(&tables, &request("finance", &[], "3-5"));
        assert_eq!(response.overall_score, 0.0);
        assert_eq!(response.skill_gaps.len(), 3);
    }

    #[test]
    fn test_known_input_score() {
        let tables = ScoringTables::default();
        // ai-ml in cybersecurity with 3-5 years: 20 * 1.5 * 1.0 = 30 of max 30
        let response = assess_skills(&tables, &request("cybersecurity", &["ai-ml"], "3-5"));
        assert_eq!(response.overall_score, 100.0);
    }

    #[test]
    fn test_score_is_capped_at_100() {
        let tables = ScoringTables::default();
        let response = assess_skills(&tables, &request("cybersecurity", &["ai-ml"], "10+"));
        assert!(response.overall_score <= 100.0);
    }

    #[test]
    fn test_missing_critical_skills_become_gaps() {
        let tables = ScoringTables::default();
        let response = assess_skills(&tables, &request("finance", &["ai-ml"], "3-5"));
        let gaps: Vec<&str> = response.skill_gaps.iter().map(|g| g.skill.as_str()).collect();
        assert_eq!(gaps, vec!["Data Analysis", "Process Automation"]);
        assert!(response.skill_gaps.iter().all(|g| g.priority == "high"));
    }

    #[test]
    fn test_recommendation_buckets() {
        let tables = ScoringTables::default();

        let low = assess_skills(&tables, &request("retail", &["ethical-decision"], "0-2"));
        assert!(low.overall_score < 40.0);
        assert!(low.recommendations[0].contains("foundational"));

        let high = assess_skills(&tables, &request("cybersecurity", &["ai-ml"], "3-5"));
        assert!(high.overall_score >= 70.0);
        assert!(high.recommendations[0].contains("leadership"));
    }

    #[test]
    fn test_opportunities_use_target_industry() {
        let tables = ScoringTables::default();
        let mut req = request("finance", &["ai-ml"], "3-5");
        req.target_industry = Some("cybersecurity".to_string());
        let response = assess_skills(&tables, &req);
        assert!(response
            .transition_opportunities
            .iter()
            .all(|o| o.industry == "cybersecurity"));
    }
}
