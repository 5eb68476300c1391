pub(crate) mod analytics;
pub(crate) mod assess;
pub(crate) mod automation;
pub(crate) mod health;
pub(crate) mod roi;
pub(crate) mod training;
pub(crate) mod transition;
