use crate::errors::AppError;
use async_trait::async_trait;
use tracing::info;

/// Outbound notification seam for report distribution. The engine only needs
/// delivery to either succeed or fail; transport is a collaborator concern.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, subject: &str, body: &str) -> Result<(), AppError>;
}

/// Default notifier: logs the notification instead of delivering it.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, subject: &str, body: &str) -> Result<(), AppError> {
        info!(subject, bytes = body.len(), "notification dispatched");
        Ok(())
    }
}
