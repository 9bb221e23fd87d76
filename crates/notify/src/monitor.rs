//! Periodic threshold monitor.
//!
//! [`ThresholdMonitor`] runs as a background task. On every tick it reads all
//! thresholds, and for each exceeded one sends the supervisor an alert. A
//! threshold that stays exceeded is reported again on every cycle.
//!
//! Cycles never overlap: the loop awaits each cycle before waiting for the
//! next tick, and ticks missed during a slow cycle are skipped.

use std::sync::Arc;
use std::time::Duration;

use roster_core::threshold::alert_message;
use roster_db::repositories::ThresholdRepository;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::notifier::Notifier;

/// Default time between monitor cycles.
const DEFAULT_INTERVAL_SECS: u64 = 60;

// ---------------------------------------------------------------------------
// MonitorConfig
// ---------------------------------------------------------------------------

/// Scheduling configuration for the threshold monitor.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Time between cycles (default: 60 seconds).
    pub interval: Duration,
}

impl MonitorConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                           | Default |
    /// |-----------------------------------|---------|
    /// | `THRESHOLD_MONITOR_INTERVAL_SECS` | `60`    |
    ///
    /// A missing, unparsable or zero value falls back to the default.
    pub fn from_env() -> Self {
        let secs = std::env::var("THRESHOLD_MONITOR_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&s| s > 0)
            .unwrap_or(DEFAULT_INTERVAL_SECS);
        Self {
            interval: Duration::from_secs(secs),
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
        }
    }
}

// ---------------------------------------------------------------------------
// CycleReport
// ---------------------------------------------------------------------------

/// Outcome counts for a single monitor cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Thresholds read from the store.
    pub scanned: usize,
    /// Thresholds whose predicate was true.
    pub exceeded: usize,
    /// Alerts delivered successfully.
    pub notified: usize,
    /// Alerts whose delivery failed.
    pub failed: usize,
}

// ---------------------------------------------------------------------------
// ThresholdMonitor
// ---------------------------------------------------------------------------

/// Background service that alerts supervisors about exceeded thresholds.
pub struct ThresholdMonitor {
    thresholds: Arc<dyn ThresholdRepository>,
    notifier: Arc<dyn Notifier>,
    config: MonitorConfig,
}

impl ThresholdMonitor {
    pub fn new(
        thresholds: Arc<dyn ThresholdRepository>,
        notifier: Arc<dyn Notifier>,
        config: MonitorConfig,
    ) -> Self {
        Self {
            thresholds,
            notifier,
            config,
        }
    }

    /// Run the monitor loop until `cancel` is triggered.
    ///
    /// The first cycle runs immediately. A failed cycle is logged and the
    /// loop carries on with the next tick.
    pub async fn run(self, cancel: CancellationToken) {
        tracing::info!(
            interval_secs = self.config.interval.as_secs(),
            "Threshold monitor started"
        );

        let mut interval = tokio::time::interval(self.config.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Threshold monitor stopping");
                    break;
                }
                _ = interval.tick() => {
                    match self.run_cycle().await {
                        Ok(report) => {
                            if report.exceeded > 0 {
                                tracing::info!(
                                    scanned = report.scanned,
                                    exceeded = report.exceeded,
                                    notified = report.notified,
                                    failed = report.failed,
                                    "Threshold monitor: cycle complete"
                                );
                            } else {
                                tracing::debug!(
                                    scanned = report.scanned,
                                    "Threshold monitor: nothing exceeded"
                                );
                            }
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Threshold monitor: failed to load thresholds");
                        }
                    }
                }
            }
        }
    }

    /// Evaluate every threshold once and alert on the exceeded ones.
    ///
    /// Each record is handled independently: a delivery failure is logged,
    /// counted, and the scan moves on to the next record.
    pub async fn run_cycle(&self) -> Result<CycleReport, sqlx::Error> {
        let thresholds = self.thresholds.list().await?;
        let mut report = CycleReport {
            scanned: thresholds.len(),
            ..CycleReport::default()
        };

        for threshold in thresholds.iter().filter(|t| t.is_exceeded()) {
            report.exceeded += 1;
            let message = alert_message(&threshold.employee_name);

            match self
                .notifier
                .send(&threshold.supervisor_slack_id, &message)
                .await
            {
                Ok(()) => report.notified += 1,
                Err(e) => {
                    report.failed += 1;
                    tracing::warn!(
                        threshold_id = threshold.id,
                        supervisor = %threshold.supervisor_slack_id,
                        error = %e,
                        "Failed to notify supervisor"
                    );
                }
            }
        }

        Ok(report)
    }
}
