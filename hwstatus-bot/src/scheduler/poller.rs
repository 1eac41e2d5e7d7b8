//! Status poller
//!
//! Each cycle fetches the statuses since the checkpoint, renders the most
//! recent homework into a message and sends it if it differs from the
//! last report. Failures are rendered into a diagnostic and go through the
//! same deduplicated path, so a persistent outage produces one message.

use hwstatus_client::ApiError;
use hwstatus_core::ErrorKind;
use hwstatus_core::ResponseError;
use hwstatus_core::domain::homework;
use hwstatus_core::domain::report::Report;
use hwstatus_core::dto::statuses;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::repository::StatusRepository;
use crate::service::{Clock, Notifier};

/// Anything that can go wrong between polling and rendering
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Response(#[from] ResponseError),
}

impl CycleError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Api(e) => e.kind(),
            Self::Response(e) => e.kind(),
        }
    }
}

/// State carried from one cycle to the next
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleState {
    /// Last report handed to the notifier
    pub report: Report,
    /// Lower bound of the next poll window (Unix seconds)
    pub checkpoint: i64,
}

impl CycleState {
    pub fn new(checkpoint: i64) -> Self {
        Self {
            report: Report::default(),
            checkpoint,
        }
    }
}

/// What one successful poll produced
struct Observation {
    report: Report,
    current_date: Option<i64>,
}

/// Poller that forwards homework status changes
pub struct StatusPoller {
    retry_period: Duration,
    repository: Arc<dyn StatusRepository>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
}

impl StatusPoller {
    /// Creates a new status poller
    pub fn new(
        retry_period: Duration,
        repository: Arc<dyn StatusRepository>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            retry_period,
            repository,
            notifier,
            clock,
        }
    }

    /// Runs the polling loop until `shutdown` resolves
    ///
    /// The checkpoint starts at the current time. Shutdown is observed at
    /// await points only; a cycle in flight is dropped.
    ///
    /// # Returns
    /// The state reached when the loop stopped
    pub async fn run<F>(&self, shutdown: F) -> CycleState
    where
        F: Future<Output = ()>,
    {
        info!(
            "Starting status poller (interval: {:?})",
            self.retry_period
        );

        tokio::pin!(shutdown);
        let mut state = CycleState::new(self.clock.now());

        loop {
            let next = tokio::select! {
                biased;
                _ = &mut shutdown => None,
                next = self.poll_once(&state) => Some(next),
            };

            match next {
                Some(next) => state = next,
                None => break,
            }

            let stopped = tokio::select! {
                biased;
                _ = &mut shutdown => true,
                _ = self.clock.sleep(self.retry_period) => false,
            };

            if stopped {
                break;
            }
        }

        info!("Status poller stopped");
        state
    }

    /// Performs a single poll cycle
    ///
    /// Takes the previous state and returns the next one; the poller keeps
    /// no state of its own.
    pub async fn poll_once(&self, state: &CycleState) -> CycleState {
        debug!("Polling homework statuses since {}", state.checkpoint);

        match self.observe(state.checkpoint).await {
            Ok(observation) => {
                self.deliver(state, observation.report, observation.current_date)
                    .await
            }
            Err(e) if e.kind() == ErrorKind::EmptyResponse => {
                warn!("Status API response has no homeworks: {}", e);
                state.clone()
            }
            Err(e) => {
                let report = Report::failure(&e);
                error!("{}", report.message);
                self.deliver(state, report, None).await
            }
        }
    }

    /// Fetches, validates and renders the most recent homework
    async fn observe(&self, since: i64) -> Result<Observation, CycleError> {
        let body = self.repository.fetch_statuses(since).await?;
        let current_date = statuses::current_date(&body);

        let report = match statuses::validate(&body) {
            Ok(homeworks) => {
                let latest = &homeworks[0];
                Report::new(homework::homework_name(latest)?, homework::render(latest)?)
            }
            Err(ResponseError::EmptyResponse { key_present: true }) => {
                debug!("No homeworks in the poll window");
                Report::no_new_status()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Observation {
            report,
            current_date,
        })
    }

    /// Sends `candidate` unless it matches the last report
    ///
    /// Report and checkpoint only move after the notifier accepted the
    /// message, so a failed send is retried on the next cycle.
    async fn deliver(
        &self,
        state: &CycleState,
        candidate: Report,
        current_date: Option<i64>,
    ) -> CycleState {
        if candidate == state.report {
            debug!("No status change, skipping notification");
            return state.clone();
        }

        if !self.notifier.notify(&candidate.message).await {
            warn!("Notification was not sent, will retry next cycle");
            return state.clone();
        }

        info!("Notification sent: {}", candidate.message);

        CycleState {
            report: candidate,
            checkpoint: current_date.unwrap_or(state.checkpoint),
        }
    }
}
