use crate::db::Database;
use crate::errors::AppError;
use crate::jobs;
use crate::models::ScoringTables;
use crate::services::notifier::Notifier;
use chrono::{DateTime, Datelike, Duration as ChronoDuration, NaiveTime, Timelike, Utc, Weekday};
use futures::future::BoxFuture;
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

const STOP_TIMEOUT: Duration = Duration::from_secs(5);

// ==============================================================================
// Cadence
// ==============================================================================

/// When a job becomes due. `next_fire_after` is a pure function of the rule
/// and the clock, so it can be tested without the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    Daily { time: NaiveTime },
    Weekly { weekday: Weekday, time: NaiveTime },
    Hourly,
}

impl Cadence {
    /// Next firing instant strictly after `now`.
    pub fn next_fire_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match *self {
            Cadence::Daily { time } => {
                let candidate = now.date_naive().and_time(time).and_utc();
                if candidate > now {
                    candidate
                } else {
                    candidate + ChronoDuration::days(1)
                }
            }
            Cadence::Weekly { weekday, time } => {
                let days_ahead = (weekday.num_days_from_monday() as i64
                    - now.weekday().num_days_from_monday() as i64)
                    .rem_euclid(7);
                let candidate = (now.date_naive() + ChronoDuration::days(days_ahead))
                    .and_time(time)
                    .and_utc();
                if candidate > now {
                    candidate
                } else {
                    candidate + ChronoDuration::days(7)
                }
            }
            Cadence::Hourly => {
                let next = now + ChronoDuration::hours(1);
                next.with_minute(0)
                    .and_then(|t| t.with_second(0))
                    .and_then(|t| t.with_nanosecond(0))
                    .unwrap_or(next)
            }
        }
    }

    pub fn describe(&self) -> String {
        match *self {
            Cadence::Daily { time } => format!("daily at {}", time.format("%H:%M")),
            Cadence::Weekly { weekday, time } => {
                format!("weekly on {} at {}", weekday, time.format("%H:%M"))
            }
            Cadence::Hourly => "hourly".to_string(),
        }
    }
}

/// Panic-free constructor for fixed schedule times; out-of-range input falls
/// back to midnight.
pub fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

// ==============================================================================
// Job bookkeeping
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Scheduled,
    Running,
    Completed,
    Failed,
}

#[derive(Debug)]
pub struct JobResult {
    pub items_processed: i64,
    pub items_failed: i64,
}

/// Context passed to job functions.
#[derive(Clone)]
pub struct JobContext {
    pub db: Arc<Database>,
    pub tables: Arc<ScoringTables>,
    pub metrics: Arc<EngineMetrics>,
    pub notifier: Arc<dyn Notifier>,
}

pub type JobAction =
    Arc<dyn Fn(JobContext) -> BoxFuture<'static, Result<JobResult, AppError>> + Send + Sync>;

struct JobEntry {
    name: String,
    cadence: Cadence,
    action: JobAction,
    status: JobStatus,
    last_run_at: Option<DateTime<Utc>>,
    next_run_at: DateTime<Utc>,
    in_flight: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobSnapshot {
    pub name: String,
    pub status: JobStatus,
    pub cadence: String,
    pub last_run_at: Option<DateTime<Utc>>,
    pub next_run_at: DateTime<Utc>,
}

// ==============================================================================
// Metrics
// ==============================================================================

/// Process-wide counters, bumped by job actions and dispatch bookkeeping.
/// Never reset while the process lives.
#[derive(Default)]
pub struct EngineMetrics {
    assessments_processed: AtomicU64,
    data_updates_completed: AtomicU64,
    notifications_sent: AtomicU64,
    errors_encountered: AtomicU64,
    last_run_time: RwLock<Option<DateTime<Utc>>>,
}

impl EngineMetrics {
    pub fn add_assessments(&self, n: u64) {
        self.assessments_processed.fetch_add(n, Ordering::Relaxed);
    }

    pub fn incr_data_updates(&self) {
        self.data_updates_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn incr_notifications(&self) {
        self.notifications_sent.fetch_add(1, Ordering::Relaxed);
    }

    pub fn incr_errors(&self) {
        self.errors_encountered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_run(&self, at: DateTime<Utc>) {
        *self.last_run_time.write() = Some(at);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            assessments_processed: self.assessments_processed.load(Ordering::Relaxed),
            data_updates_completed: self.data_updates_completed.load(Ordering::Relaxed),
            notifications_sent: self.notifications_sent.load(Ordering::Relaxed),
            errors_encountered: self.errors_encountered.load(Ordering::Relaxed),
            last_run_time: *self.last_run_time.read(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub assessments_processed: u64,
    pub data_updates_completed: u64,
    pub notifications_sent: u64,
    pub errors_encountered: u64,
    pub last_run_time: Option<DateTime<Utc>>,
}

// ==============================================================================
// Status and insight views
// ==============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct EngineStatus {
    pub is_running: bool,
    pub active_jobs: usize,
    pub completed_jobs: usize,
    pub failed_jobs: usize,
    pub jobs: Vec<JobSnapshot>,
    pub metrics: MetricsSnapshot,
    pub next_scheduled_run: Option<DateTime<Utc>>,
    pub uptime_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct TriggerResult {
    pub status: TriggerStatus,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl TriggerResult {
    fn success(message: String) -> Self {
        Self { status: TriggerStatus::Success, message, timestamp: Utc::now() }
    }

    fn error(message: String) -> Self {
        Self { status: TriggerStatus::Error, message, timestamp: Utc::now() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EfficiencyMetrics {
    pub success_rate: f64,
    pub assessments_per_hour: f64,
    pub data_updates_completed: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceTrends {
    pub data_freshness: String,
    pub error_trend: String,
    pub last_run_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AutomationInsights {
    pub efficiency_metrics: EfficiencyMetrics,
    pub performance_trends: PerformanceTrends,
    pub recommendations: Vec<String>,
}

// ==============================================================================
// Engine
// ==============================================================================

/// Recurring task scheduler. Owns the job registry, per-job run state, and
/// process metrics; nothing else mutates them. One background loop evaluates
/// cadences on a poll interval and launches due jobs as independent tasks,
/// with an explicit in-flight flag so a job never overlaps itself.
pub struct AutomationEngine {
    running: AtomicBool,
    jobs: Mutex<Vec<JobEntry>>,
    metrics: Arc<EngineMetrics>,
    context: JobContext,
    poll_interval: Duration,
    loop_handle: Mutex<Option<JoinHandle<()>>>,
    shutdown: watch::Sender<bool>,
    started_at: RwLock<Option<DateTime<Utc>>>,
}

impl AutomationEngine {
    pub fn new(
        db: Arc<Database>,
        tables: Arc<ScoringTables>,
        notifier: Arc<dyn Notifier>,
        poll_interval: Duration,
    ) -> Self {
        let metrics = Arc::new(EngineMetrics::default());
        let context = JobContext {
            db,
            tables,
            metrics: Arc::clone(&metrics),
            notifier,
        };
        let (shutdown, _) = watch::channel(false);

        Self {
            running: AtomicBool::new(false),
            jobs: Mutex::new(Vec::new()),
            metrics,
            context,
            poll_interval,
            loop_handle: Mutex::new(None),
            shutdown,
            started_at: RwLock::new(None),
        }
    }

    /// Register a job, or overwrite the definition (and reset the run state)
    /// if the name is already taken. Registration order is dispatch order.
    pub fn register_job<F, Fut>(&self, name: &str, cadence: Cadence, job_fn: F)
    where
        F: Fn(JobContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<JobResult, AppError>> + Send + 'static,
    {
        let action: JobAction = Arc::new(move |ctx| Box::pin(job_fn(ctx)));
        let entry = JobEntry {
            name: name.to_string(),
            cadence,
            action,
            status: JobStatus::Scheduled,
            last_run_at: None,
            next_run_at: cadence.next_fire_after(Utc::now()),
            in_flight: false,
        };

        let mut jobs = self.jobs.lock();
        match jobs.iter_mut().find(|j| j.name == name) {
            Some(existing) => *existing = entry,
            None => jobs.push(entry),
        }
        info!(job = name, cadence = %cadence.describe(), "job registered");
    }

    fn register_default_jobs(&self) {
        self.register_job(
            "market_data_update",
            Cadence::Daily { time: at(2, 0) },
            jobs::market_data_job::run,
        );
        self.register_job(
            "batch_assessment",
            Cadence::Daily { time: at(3, 0) },
            jobs::batch_assessment_job::run,
        );
        self.register_job(
            "analytics_update",
            Cadence::Daily { time: at(4, 0) },
            jobs::analytics_update_job::run,
        );
        self.register_job(
            "model_retrain",
            Cadence::Weekly { weekday: Weekday::Mon, time: at(1, 0) },
            jobs::model_retrain_job::run,
        );
        self.register_job(
            "weekly_report",
            Cadence::Weekly { weekday: Weekday::Sun, time: at(23, 0) },
            jobs::weekly_report_job::run,
        );
        self.register_job("health_check", Cadence::Hourly, jobs::health_check_job::run);
    }

    /// Idempotent: registers the fixed job set and launches the dispatch loop.
    /// A second call while running is a no-op.
    pub fn start(self: &Arc<Self>) {
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }

        self.register_default_jobs();
        *self.started_at.write() = Some(Utc::now());
        let _ = self.shutdown.send_replace(false);

        let engine = Arc::clone(self);
        let handle = tokio::spawn(async move {
            engine.dispatch_loop().await;
        });
        *self.loop_handle.lock() = Some(handle);

        info!(poll_interval = ?self.poll_interval, "automation engine started");
    }

    /// Idempotent: flips the running flag and waits (bounded) for the loop to
    /// observe it. In-flight jobs are not cancelled; only new dispatch stops.
    pub async fn stop(&self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            return;
        }

        let _ = self.shutdown.send_replace(true);
        let handle = self.loop_handle.lock().take();
        if let Some(handle) = handle {
            if tokio::time::timeout(STOP_TIMEOUT, handle).await.is_err() {
                warn!("dispatch loop did not exit within {:?}", STOP_TIMEOUT);
            }
        }

        info!("automation engine stopped");
    }

    async fn dispatch_loop(self: Arc<Self>) {
        let mut shutdown = self.shutdown.subscribe();
        info!("dispatch loop running");

        while self.running.load(Ordering::SeqCst) {
            let _ = self.run_due_jobs(Utc::now());

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                _ = shutdown.changed() => {}
            }
        }

        info!("dispatch loop exited");
    }

    /// One dispatch tick. Due jobs are marked running, their next firing is
    /// recomputed immediately (failed or not, missed runs are never caught
    /// up), and each action is launched as its own task so a slow job cannot
    /// stall detection of the others. Returns the launched handles so tests
    /// can await settlement; the loop deliberately drops them.
    pub(crate) fn run_due_jobs(self: &Arc<Self>, now: DateTime<Utc>) -> Vec<JoinHandle<()>> {
        let due: Vec<(String, JobAction)> = {
            let mut jobs = self.jobs.lock();
            let mut due = Vec::new();
            for job in jobs.iter_mut() {
                if job.next_run_at > now {
                    continue;
                }
                if job.in_flight {
                    // Single-flight: skip this firing, wait for the next one
                    warn!(job = %job.name, "previous run still in flight, skipping firing");
                    job.next_run_at = job.cadence.next_fire_after(now);
                    continue;
                }
                job.status = JobStatus::Running;
                job.in_flight = true;
                job.next_run_at = job.cadence.next_fire_after(now);
                due.push((job.name.clone(), Arc::clone(&job.action)));
            }
            due
        };

        due.into_iter()
            .map(|(name, action)| {
                let engine = Arc::clone(self);
                tokio::spawn(async move {
                    let _ = engine.execute_job(&name, action).await;
                })
            })
            .collect()
    }

    /// Shared completion bookkeeping for both the loop and manual triggers.
    async fn execute_job(&self, name: &str, action: JobAction) -> Result<JobResult, AppError> {
        info!(job = name, "starting job");
        let started_at = Utc::now();

        let result = action(self.context.clone()).await;

        let finished_at = Utc::now();
        let duration_ms = (finished_at - started_at).num_milliseconds();

        let mut jobs = self.jobs.lock();
        if let Some(job) = jobs.iter_mut().find(|j| j.name == name) {
            job.in_flight = false;
            job.last_run_at = Some(finished_at);
            match &result {
                Ok(outcome) => {
                    job.status = JobStatus::Completed;
                    self.metrics.record_run(finished_at);
                    info!(
                        job = name,
                        processed = outcome.items_processed,
                        failed = outcome.items_failed,
                        duration_ms,
                        "job completed"
                    );
                }
                Err(e) => {
                    job.status = JobStatus::Failed;
                    self.metrics.incr_errors();
                    error!(job = name, error = %e, duration_ms, "job failed");
                }
            }
        }

        result
    }

    /// Run one job immediately, out of cadence, awaiting completion. Unknown
    /// keys come back as an error-status result, never as a propagated error,
    /// and leave the metrics untouched.
    pub async fn trigger(&self, job_key: &str) -> TriggerResult {
        let action = {
            let mut jobs = self.jobs.lock();
            match jobs.iter_mut().find(|j| j.name == job_key) {
                Some(job) if job.in_flight => {
                    return TriggerResult::error(format!(
                        "Job {} is already running",
                        job_key
                    ));
                }
                Some(job) => {
                    job.status = JobStatus::Running;
                    job.in_flight = true;
                    Some(Arc::clone(&job.action))
                }
                None => None,
            }
        };

        match action {
            Some(action) => match self.execute_job(job_key, action).await {
                Ok(_) => {
                    TriggerResult::success(format!("Job {} completed successfully", job_key))
                }
                Err(e) => TriggerResult::error(format!("Job {} failed: {}", job_key, e)),
            },
            None => {
                warn!(job = job_key, "manual trigger for unknown job");
                TriggerResult::error(AppError::UnknownJob(job_key.to_string()).to_string())
            }
        }
    }

    pub fn get_status(&self) -> EngineStatus {
        let jobs = self.jobs.lock();

        let mut active_jobs = 0;
        let mut completed_jobs = 0;
        let mut failed_jobs = 0;
        for job in jobs.iter() {
            match job.status {
                JobStatus::Running => active_jobs += 1,
                JobStatus::Completed => completed_jobs += 1,
                JobStatus::Failed => failed_jobs += 1,
                JobStatus::Scheduled => {}
            }
        }

        EngineStatus {
            is_running: self.running.load(Ordering::SeqCst),
            active_jobs,
            completed_jobs,
            failed_jobs,
            jobs: jobs
                .iter()
                .map(|j| JobSnapshot {
                    name: j.name.clone(),
                    status: j.status,
                    cadence: j.cadence.describe(),
                    last_run_at: j.last_run_at,
                    next_run_at: j.next_run_at,
                })
                .collect(),
            next_scheduled_run: jobs.iter().map(|j| j.next_run_at).min(),
            metrics: self.metrics.snapshot(),
            uptime_hours: self.uptime_hours(),
        }
    }

    /// Read-only summary derived from current metrics and job state.
    pub fn get_insights(&self) -> AutomationInsights {
        let status = self.get_status();
        let metrics = &status.metrics;

        let finished = (status.completed_jobs + status.failed_jobs) as f64;
        let success_rate = if finished > 0.0 {
            (status.completed_jobs as f64 / finished) * 100.0
        } else {
            100.0
        };

        let uptime = status.uptime_hours;
        let assessments_per_hour = if uptime > 0.0 {
            metrics.assessments_processed as f64 / uptime
        } else {
            0.0
        };

        let data_freshness = match metrics.last_run_time {
            None => "never".to_string(),
            Some(at) if Utc::now() - at < ChronoDuration::hours(2) => "fresh".to_string(),
            Some(_) => "stale".to_string(),
        };
        let error_trend = if metrics.errors_encountered == 0 {
            "stable".to_string()
        } else {
            "elevated".to_string()
        };

        let mut recommendations = vec![
            "Batch heavy refresh jobs into off-peak hours".to_string(),
            "Cache frequently requested market analytics".to_string(),
        ];
        if status.failed_jobs > 0 {
            recommendations.push("Investigate failed jobs before their next firing".to_string());
        }

        AutomationInsights {
            efficiency_metrics: EfficiencyMetrics {
                success_rate,
                assessments_per_hour,
                data_updates_completed: metrics.data_updates_completed,
            },
            performance_trends: PerformanceTrends {
                data_freshness,
                error_trend,
                last_run_time: metrics.last_run_time,
            },
            recommendations,
        }
    }

    pub fn metrics(&self) -> &Arc<EngineMetrics> {
        &self.metrics
    }

    fn uptime_hours(&self) -> f64 {
        match *self.started_at.read() {
            Some(started) => (Utc::now() - started).num_seconds() as f64 / 3600.0,
            None => 0.0,
        }
    }

    #[cfg(test)]
    fn force_due(&self, name: &str) {
        let mut jobs = self.jobs.lock();
        if let Some(job) = jobs.iter_mut().find(|j| j.name == name) {
            job.next_run_at = Utc::now() - ChronoDuration::seconds(1);
        }
    }

    #[cfg(test)]
    fn job_status(&self, name: &str) -> Option<JobStatus> {
        self.jobs.lock().iter().find(|j| j.name == name).map(|j| j.status)
    }
}
