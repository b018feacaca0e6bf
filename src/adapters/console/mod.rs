//! Terminal notifier
//!
//! Implements `Notifier` by printing colored notices.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

use crate::core::models::{Notice, NoticeKind};
use crate::core::ports::Notifier;
use crate::output::OutputMode;

/// Notices kept for the final report; older ones are dropped first
pub const MAX_NOTICES: usize = 100;

/// Prints notices to the terminal and keeps a copy of the latest
/// [`MAX_NOTICES`]
///
/// In JSON mode nothing is printed; the collected notices go into the final
/// report instead.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    mode: OutputMode,
    alert: AtomicBool,
    notices: Mutex<Vec<Notice>>,
}

impl ConsoleNotifier {
    /// Notifier printing in `mode`
    #[must_use]
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Every notice received so far
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }

    /// Whether the missing-name banner is currently shown
    #[must_use]
    pub fn alert_visible(&self) -> bool {
        self.alert.load(Ordering::Relaxed)
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            if notices.len() >= MAX_NOTICES {
                let excess = notices.len() + 1 - MAX_NOTICES;
                notices.drain(..excess);
            }
            notices.push(notice.clone());
        }
        if self.mode == OutputMode::Json {
            return;
        }

        match notice.kind {
            NoticeKind::Success => println!("{} {}", "✓".green().bold(), notice.title.green()),
            NoticeKind::Error => eprintln!("{} {}", "✗".red().bold(), notice.title.red()),
        }
        for line in notice.message.lines() {
            match notice.kind {
                NoticeKind::Success => println!("  {line}"),
                NoticeKind::Error => eprintln!("  {line}"),
            }
        }
    }

    fn set_missing_app_name_alert(&self, visible: bool) {
        let was_visible = self.alert.swap(visible, Ordering::Relaxed);
        if visible && !was_visible && self.mode == OutputMode::Human {
            eprintln!(
                "{} Please enter the Application Name before uploading the file.",
                "Application Name is required!".red().bold()
            );
        }
    }
}
