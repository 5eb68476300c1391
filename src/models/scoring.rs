use serde::Serialize;
use std::collections::HashMap;

/// Industries the platform tracks, in canonical order.
pub const INDUSTRIES: [&str; 8] = [
    "cybersecurity",
    "healthcare",
    "manufacturing",
    "finance",
    "retail",
    "education",
    "logistics",
    "legal",
];

#[derive(Debug, Clone, Serialize)]
pub struct MarketRow {
    pub growth_rate: f64,
    pub avg_salary: f64,
    pub job_openings: i64,
}

/// Deterministic scoring configuration for the assessment, transition, and ROI
/// formulas. Passed as data to the services; never regenerated at runtime.
#[derive(Debug, Clone)]
pub struct ScoringTables {
    pub skill_weights: HashMap<&'static str, f64>,
    pub industry_multipliers: HashMap<&'static str, HashMap<&'static str, f64>>,
    pub roi_multipliers: HashMap<&'static str, f64>,
    pub transition_matrix: HashMap<&'static str, HashMap<&'static str, f64>>,
    pub industry_skills: HashMap<&'static str, Vec<&'static str>>,
    pub market_rows: HashMap<&'static str, MarketRow>,
    pub fallback_market: MarketRow,
    pub market_last_updated: &'static str,
}

impl Default for ScoringTables {
    fn default() -> Self {
        let skill_weights = HashMap::from([
            ("data-analysis", 15.0),
            ("ai-ml", 20.0),
            ("digital-literacy", 10.0),
            ("process-automation", 18.0),
            ("human-ai-collaboration", 12.0),
            ("critical-thinking", 14.0),
            ("adaptability", 13.0),
            ("communication", 11.0),
            ("project-management", 16.0),
            ("ethical-decision", 9.0),
        ]);

        let industry_multipliers = HashMap::from([
            (
                "cybersecurity",
                HashMap::from([("ai-ml", 1.5), ("data-analysis", 1.3), ("critical-thinking", 1.4)]),
            ),
            (
                "healthcare",
                HashMap::from([
                    ("human-ai-collaboration", 1.4),
                    ("ethical-decision", 1.5),
                    ("communication", 1.3),
                ]),
            ),
            (
                "manufacturing",
                HashMap::from([
                    ("process-automation", 1.5),
                    ("project-management", 1.3),
                    ("adaptability", 1.2),
                ]),
            ),
            (
                "finance",
                HashMap::from([("data-analysis", 1.4), ("ai-ml", 1.3), ("critical-thinking", 1.3)]),
            ),
            (
                "retail",
                HashMap::from([
                    ("communication", 1.4),
                    ("adaptability", 1.3),
                    ("digital-literacy", 1.2),
                ]),
            ),
            (
                "education",
                HashMap::from([
                    ("communication", 1.5),
                    ("human-ai-collaboration", 1.3),
                    ("adaptability", 1.4),
                ]),
            ),
            (
                "logistics",
                HashMap::from([
                    ("process-automation", 1.4),
                    ("project-management", 1.3),
                    ("data-analysis", 1.2),
                ]),
            ),
            (
                "legal",
                HashMap::from([
                    ("critical-thinking", 1.5),
                    ("ethical-decision", 1.4),
                    ("communication", 1.3),
                ]),
            ),
        ]);

        let roi_multipliers = HashMap::from([
            ("cybersecurity", 2.8),
            ("healthcare", 3.5),
            ("manufacturing", 3.0),
            ("finance", 3.7),
            ("retail", 2.7),
            ("education", 2.6),
            ("logistics", 2.6),
            ("legal", 3.7),
        ]);

        let transition_matrix = HashMap::from([
            ("cybersecurity", HashMap::from([("healthcare", 0.75), ("finance", 0.85)])),
            ("healthcare", HashMap::from([("cybersecurity", 0.70), ("education", 0.80)])),
            ("manufacturing", HashMap::from([("logistics", 0.85), ("retail", 0.70)])),
            ("finance", HashMap::from([("cybersecurity", 0.80), ("legal", 0.75)])),
        ]);

        let industry_skills = HashMap::from([
            ("cybersecurity", vec!["AI/ML", "Security Analysis", "Risk Management"]),
            ("healthcare", vec!["Healthcare IT", "Patient Care", "Compliance"]),
            ("finance", vec!["Financial Analysis", "Risk Assessment", "Regulations"]),
        ]);

        let market_rows = HashMap::from([
            (
                "cybersecurity",
                MarketRow { growth_rate: 15.2, avg_salary: 95_000.0, job_openings: 125_000 },
            ),
            (
                "healthcare",
                MarketRow { growth_rate: 8.7, avg_salary: 75_000.0, job_openings: 890_000 },
            ),
            (
                "manufacturing",
                MarketRow { growth_rate: -2.1, avg_salary: 65_000.0, job_openings: 450_000 },
            ),
        ]);

        Self {
            skill_weights,
            industry_multipliers,
            roi_multipliers,
            transition_matrix,
            industry_skills,
            market_rows,
            fallback_market: MarketRow {
                growth_rate: 2.5,
                avg_salary: 60_000.0,
                job_openings: 100_000,
            },
            market_last_updated: "2025-01-04",
        }
    }
}

impl ScoringTables {
    pub fn skill_weight(&self, skill: &str) -> f64 {
        self.skill_weights.get(skill).copied().unwrap_or(10.0)
    }

    pub fn industry_multiplier(&self, industry: &str, skill: &str) -> f64 {
        self.industry_multipliers
            .get(industry)
            .and_then(|m| m.get(skill))
            .copied()
            .unwrap_or(1.0)
    }

    pub fn roi_multiplier(&self, industry: &str) -> f64 {
        self.roi_multipliers.get(industry).copied().unwrap_or(2.5)
    }

    pub fn transition_probability(&self, from: &str, to: &str) -> f64 {
        self.transition_matrix
            .get(from)
            .and_then(|m| m.get(to))
            .copied()
            .unwrap_or(0.6)
    }

    pub fn required_skills(&self, industry: &str) -> Vec<String> {
        self.industry_skills
            .get(industry)
            .map(|skills| skills.iter().map(|s| s.to_string()).collect())
            .unwrap_or_else(|| vec!["Technical Skills".to_string()])
    }

    pub fn market_row(&self, industry: &str) -> MarketRow {
        self.market_rows
            .get(industry)
            .cloned()
            .unwrap_or_else(|| self.fallback_market.clone())
    }
}
