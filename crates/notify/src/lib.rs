//! Supervisor notifications for exceeded thresholds.
//!
//! - [`Notifier`]: outbound message delivery seam.
//! - [`SlackNotifier`]: delivery through Slack `chat.postMessage`.
//! - [`LogNotifier`]: fallback that only logs, used when Slack is not
//!   configured.
//! - [`ThresholdMonitor`]: periodic scan of thresholds that alerts the
//!   supervisor of every exceeded one.

pub mod monitor;
pub mod notifier;
pub mod slack;

pub use monitor::{CycleReport, MonitorConfig, ThresholdMonitor};
pub use notifier::{LogNotifier, Notifier, NotifyError};
pub use slack::{SlackConfig, SlackNotifier};
