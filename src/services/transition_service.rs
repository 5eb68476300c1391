use crate::models::{CareerTransitionResponse, ScoringTables};

const SKILL_BONUS: f64 = 0.05;
const MAX_PROBABILITY: f64 = 0.95;

/// Transition success probability from the industry matrix plus a capped
/// per-skill bonus; timeline and salary uplift derive from the probability.
pub fn predict_transition(
    tables: &ScoringTables,
    current_industry: &str,
    target_industry: &str,
    skills: &[String],
) -> CareerTransitionResponse {
    let base_prob = tables.transition_probability(current_industry, target_industry);
    let skill_bonus = skills.len() as f64 * SKILL_BONUS;
    let success_probability = (base_prob + skill_bonus).min(MAX_PROBABILITY);
    let success_probability = (success_probability * 100.0).round() / 100.0;

    CareerTransitionResponse {
        success_probability,
        required_skills: tables.required_skills(target_industry),
        recommended_roles: vec![
            "Specialist".to_string(),
            "Analyst".to_string(),
            "Coordinator".to_string(),
        ],
        timeline_months: (18 - (success_probability * 12.0) as i64).max(6),
        salary_increase_percent: (success_probability * 30.0 * 10.0).round() / 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_lookup() {
        let tables = ScoringTables::default();
        let response = predict_transition(&tables, "manufacturing", "logistics", &[]);
        assert_eq!(response.success_probability, 0.85);
    }

    #[test]
    fn test_unknown_pair_uses_default() {
        let tables = ScoringTables::default();
        let response = predict_transition(&tables, "retail", "legal", &[]);
        assert_eq!(response.success_probability, 0.6);
    }

    #[test]
    fn test_skill_bonus_is_capped() {
        let tables = ScoringTables::default();
        let skills: Vec<String> = (0..20).map(|i| format!("skill-{}", i)).collect();
        let response = predict_transition(&tables, "cybersecurity", "finance", &skills);
        assert_eq!(response.success_probability, 0.95);
    }

    #[test]
    fn test_timeline_floor() {
        let tables = ScoringTables::default();
        let skills: Vec<String> = (0..20).map(|i| format!("skill-{}", i)).collect();
        let response = predict_transition(&tables, "cybersecurity", "finance", &skills);
        // 18 - int(0.95 * 12) = 7, above the 6-month floor
        assert_eq!(response.timeline_months, 7);
    }

    #[test]
    fn test_required_skills_fallback() {
        let tables = ScoringTables::default();
        let response = predict_transition(&tables, "finance", "retail", &[]);
        assert_eq!(response.required_skills, vec!["Technical Skills".to_string()]);
    }
}
