pub mod analytics_service;
pub mod assessment_service;
pub mod automation_engine;
pub mod notifier;
pub mod roi_service;
pub mod training_service;
pub mod transition_service;
