/// Automation API contract tests
///
/// Validates the JSON shapes the automation endpoints promise to callers:
/// - POST /api/automation/trigger/:job_key -> {status, message, timestamp}
/// - GET  /api/automation/status          -> engine status snapshot
/// - GET  /api/automation/insights        -> derived insight summary
///
/// NOTE: These tests validate the wire contract the frontend depends on.
/// Full end-to-end tests require the running server.

use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct TriggerResult {
    status: String,
    message: String,
    timestamp: String,
}

#[derive(Debug, Deserialize)]
struct MetricsBlock {
    assessments_processed: u64,
    data_updates_completed: u64,
    notifications_sent: u64,
    errors_encountered: u64,
    last_run_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusSnapshot {
    is_running: bool,
    active_jobs: usize,
    completed_jobs: usize,
    failed_jobs: usize,
    metrics: MetricsBlock,
    next_scheduled_run: Option<String>,
    uptime_hours: f64,
}

#[test]
fn test_trigger_result_contract() {
    let payload = json!({
        "status": "error",
        "message": "Unknown job: not_a_real_job",
        "timestamp": "2025-03-10T14:25:13Z"
    });

    let result: TriggerResult = serde_json::from_value(payload).unwrap();
    assert_eq!(result.status, "error");
    assert!(result.message.contains("not_a_real_job"));
    assert!(!result.timestamp.is_empty());
}

#[test]
fn test_status_snapshot_contract() {
    let payload = json!({
        "is_running": true,
        "active_jobs": 0,
        "completed_jobs": 2,
        "failed_jobs": 0,
        "jobs": [],
        "metrics": {
            "assessments_processed": 24,
            "data_updates_completed": 1,
            "notifications_sent": 0,
            "errors_encountered": 0,
            "last_run_time": null
        },
        "next_scheduled_run": "2025-03-11T02:00:00Z",
        "uptime_hours": 1.5
    });

    let status: StatusSnapshot = serde_json::from_value(payload).unwrap();
    assert!(status.is_running);
    assert_eq!(status.completed_jobs, 2);
    assert_eq!(status.active_jobs + status.failed_jobs, 0);
    assert_eq!(status.metrics.assessments_processed, 24);
    assert_eq!(status.metrics.errors_encountered, 0);
    assert!(status.metrics.last_run_time.is_none());
    assert!(status.next_scheduled_run.is_some());
    assert!(status.uptime_hours >= 0.0);
    assert_eq!(status.metrics.data_updates_completed, 1);
    assert_eq!(status.metrics.notifications_sent, 0);
}
