mod analytics;
mod assessment;
mod roi;
mod training;
mod transition;
pub mod scoring;

pub use analytics::JobMarketResponse;
pub use assessment::{
    SkillGap, SkillsAssessmentRequest, SkillsAssessmentResponse, TransitionOpportunity,
};
pub use roi::{RoiCalculationRequest, RoiCalculationResponse};
pub use scoring::{MarketRow, ScoringTables, INDUSTRIES};
pub use training::{TrainingModule, TrainingRecommendationsResponse};
pub use transition::{CareerTransitionResponse, TransitionQuery};
