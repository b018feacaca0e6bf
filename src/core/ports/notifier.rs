//! Notifier port

use super::super::models::Notice;

/// Outbound notifications to the presentation layer
pub trait Notifier: Send + Sync {
    /// Show a success or error toast
    fn notify(&self, notice: &Notice);

    /// Show or hide the "Application Name is required" banner
    fn set_missing_app_name_alert(&self, visible: bool);
}
