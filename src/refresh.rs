//! Periodic and on-demand refreshing of the dashboard.
//!
//! A refresh reloads the snapshot and rebuilds the report from scratch. The
//! scheduler runs refreshes on a fixed interval and whenever a
//! [RefreshTrigger] asks for one, until a shutdown future completes.

use std::{future::Future, time::Duration};

use tokio::{
    signal,
    sync::mpsc,
    time::{MissedTickBehavior, interval},
};

use crate::Error;

/// Runs a refresh function on an interval and on request.
#[derive(Debug)]
pub struct RefreshScheduler {
    period: Duration,
    requests: mpsc::UnboundedReceiver<()>,
    sender: mpsc::UnboundedSender<()>,
}

/// A handle for requesting an immediate refresh.
#[derive(Debug, Clone)]
pub struct RefreshTrigger {
    sender: mpsc::UnboundedSender<()>,
}

impl RefreshTrigger {
    /// Queue a refresh to run as soon as the scheduler is free.
    ///
    /// Returns false if the scheduler has stopped.
    pub fn request(&self) -> bool {
        self.sender.send(()).is_ok()
    }
}

impl RefreshScheduler {
    /// Create a scheduler that refreshes every `period`.
    ///
    /// # Errors
    /// Returns [Error::InvalidRefreshPeriod] if `period` is zero.
    pub fn new(period: Duration) -> Result<Self, Error> {
        if period.is_zero() {
            return Err(Error::InvalidRefreshPeriod(period));
        }

        let (sender, requests) = mpsc::unbounded_channel();

        Ok(Self {
            period,
            requests,
            sender,
        })
    }

    /// The time between scheduled refreshes.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Get a handle for requesting refreshes outside the schedule.
    pub fn manual_trigger(&self) -> RefreshTrigger {
        RefreshTrigger {
            sender: self.sender.clone(),
        }
    }

    /// Refresh immediately, then every period and on every manual request,
    /// until `shutdown` completes.
    ///
    /// A failed refresh is logged and does not stop the scheduler. A manual
    /// refresh restarts the wait for the next scheduled one.
    ///
    /// Returns the number of refreshes that were run.
    pub async fn run<F, S>(mut self, mut refresh: F, shutdown: S) -> usize
    where
        F: FnMut() -> Result<(), Error>,
        S: Future<Output = ()>,
    {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        let mut refresh_count = 0;

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    tracing::info!("Stopping refreshes after {refresh_count} refreshes.");
                    break;
                },
                _ = ticker.tick() => {
                    tracing::debug!("Running scheduled refresh.");
                },
                Some(()) = self.requests.recv() => {
                    tracing::debug!("Running requested refresh.");
                    ticker.reset();
                },
            }

            refresh_count += 1;

            if let Err(error) = refresh() {
                tracing::error!("Refresh failed: {error}");
            }
        }

        refresh_count
    }
}

/// Completes when the process receives ctrl+c or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Could not listen for ctrl+c: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("Could not listen for the terminate signal: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
        },
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::sleep;

    use crate::{Error, refresh::RefreshScheduler};

    #[tokio::test(start_paused = true)]
    async fn refreshes_immediately_then_every_period() {
        let scheduler = RefreshScheduler::new(Duration::from_secs(30)).unwrap();
        let mut calls = 0;

        let count = scheduler
            .run(
                || {
                    calls += 1;
                    Ok(())
                },
                sleep(Duration::from_secs(95)),
            )
            .await;

        assert_eq!(count, 4);
        assert_eq!(calls, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_requests_refresh_immediately() {
        let scheduler = RefreshScheduler::new(Duration::from_secs(60)).unwrap();
        let trigger = scheduler.manual_trigger();
        assert!(trigger.request());
        assert!(trigger.clone().request());

        let count = scheduler.run(|| Ok(()), sleep(Duration::from_secs(1))).await;

        assert_eq!(count, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_refresh_does_not_stop_scheduler() {
        let scheduler = RefreshScheduler::new(Duration::from_secs(10)).unwrap();

        let count = scheduler
            .run(
                || Err(Error::ApiFailure("Service unavailable".to_owned())),
                sleep(Duration::from_secs(25)),
            )
            .await;

        assert_eq!(count, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn completed_shutdown_stops_before_first_refresh() {
        let scheduler = RefreshScheduler::new(Duration::from_secs(10)).unwrap();

        let count = scheduler.run(|| Ok(()), std::future::ready(())).await;

        assert_eq!(count, 0);
    }

    #[test]
    fn zero_period_is_rejected() {
        let result = RefreshScheduler::new(Duration::ZERO);

        assert_eq!(
            result.unwrap_err(),
            Error::InvalidRefreshPeriod(Duration::ZERO)
        );
    }

    #[test]
    fn positive_period_is_kept() {
        let scheduler = RefreshScheduler::new(Duration::from_millis(1)).unwrap();

        assert_eq!(scheduler.period(), Duration::from_millis(1));
    }

    #[tokio::test]
    async fn trigger_reports_stopped_scheduler() {
        let scheduler = RefreshScheduler::new(Duration::from_secs(10)).unwrap();
        let trigger = scheduler.manual_trigger();

        scheduler.run(|| Ok(()), std::future::ready(())).await;

        assert!(!trigger.request());
    }
}
