use crate::models::{RoiCalculationRequest, RoiCalculationResponse, ScoringTables};

const TRADITIONAL_COST_PER_EMPLOYEE: f64 = 2500.0;
const AI_COST_FACTOR: f64 = 0.7;

/// Closed-form training ROI: AI-enhanced delivery is modeled as a flat 30%
/// cost reduction; the ROI percentage comes from the per-industry multiplier.
pub fn calculate_roi(
    tables: &ScoringTables,
    request: &RoiCalculationRequest,
) -> RoiCalculationResponse {
    let multiplier = tables.roi_multiplier(&request.industry);
    let traditional_cost = request.employee_count as f64 * TRADITIONAL_COST_PER_EMPLOYEE;
    let ai_enhanced_cost = traditional_cost * AI_COST_FACTOR;
    let cost_savings = traditional_cost - ai_enhanced_cost;
    let roi_percentage = ((multiplier * 100.0) * 10.0).round() / 10.0;

    let payback_months = if cost_savings > 0.0 {
        ((ai_enhanced_cost / (cost_savings / 12.0)) as i64).max(1)
    } else {
        1
    };

    RoiCalculationResponse {
        traditional_cost,
        ai_enhanced_cost,
        cost_savings,
        roi_percentage,
        payback_months,
        productivity_increase: roi_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(industry: &str, employee_count: i64) -> RoiCalculationRequest {
        RoiCalculationRequest {
            industry: industry.to_string(),
            employee_count,
            training_budget: 100_000.0,
            current_avg_salary: 50_000.0,
        }
    }

    #[test]
    fn test_cost_formula() {
        let tables = ScoringTables::default();
        let response = calculate_roi(&tables, &request("healthcare", 100));
        assert_eq!(response.traditional_cost, 250_000.0);
        assert_eq!(response.ai_enhanced_cost, 175_000.0);
        assert_eq!(response.cost_savings, 75_000.0);
        assert_eq!(response.roi_percentage, 350.0);
    }

    #[test]
    fn test_payback_is_constant_28_months() {
        // 0.7T / (0.3T / 12) = 28 regardless of headcount
        let tables = ScoringTables::default();
        let response = calculate_roi(&tables, &request("finance", 10));
        assert_eq!(response.payback_months, 28);
    }

    #[test]
    fn test_zero_employees_does_not_divide_by_zero() {
        let tables = ScoringTables::default();
        let response = calculate_roi(&tables, &request("finance", 0));
        assert_eq!(response.payback_months, 1);
        assert_eq!(response.cost_savings, 0.0);
    }

    #[test]
    fn test_unknown_industry_uses_default_multiplier() {
        let tables = ScoringTables::default();
        let response = calculate_roi(&tables, &request("agriculture", 10));
        assert_eq!(response.roi_percentage, 250.0);
    }
}
