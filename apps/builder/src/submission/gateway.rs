use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::submission::webhook::SubmissionError;

pub const ACKNOWLEDGEMENT: &str = "Generating your PDF... This may take a moment.";

/// Gateway status as seen by the UI. `Idle` only before the first attempt;
/// afterwards the status reflects the most recently started attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionStatus {
    Idle,
    Submitting {
        attempt: Uuid,
        started_at: DateTime<Utc>,
        message: &'static str,
    },
    Succeeded {
        attempt: Uuid,
        finished_at: DateTime<Utc>,
        url: String,
    },
    Failed {
        attempt: Uuid,
        finished_at: DateTime<Utc>,
        kind: &'static str,
        message: String,
    },
}

impl SubmissionStatus {
    pub fn from_outcome(attempt: Uuid, outcome: &Result<String, SubmissionError>) -> Self {
        let finished_at = Utc::now();
        match outcome {
            Ok(url) => SubmissionStatus::Succeeded {
                attempt,
                finished_at,
                url: url.clone(),
            },
            Err(e) => SubmissionStatus::Failed {
                attempt,
                finished_at,
                kind: e.kind(),
                message: e.user_message().to_string(),
            },
        }
    }

    pub fn attempt(&self) -> Option<Uuid> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Submitting { attempt, .. }
            | SubmissionStatus::Succeeded { attempt, .. }
            | SubmissionStatus::Failed { attempt, .. } => Some(*attempt),
        }
    }

    /// One-line notification for the user, if the status warrants one.
    pub fn notification(&self) -> Option<String> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Submitting { message, .. } => Some(message.to_string()),
            SubmissionStatus::Succeeded { url, .. } => Some(format!("Your PDF is ready: {url}")),
            SubmissionStatus::Failed { message, .. } => {
                Some(format!("Failed to generate PDF: {message}"))
            }
        }
    }
}

/// Idle → Submitting → Succeeded | Failed. A new attempt may start from any
/// state; there is no retry.
#[derive(Debug)]
pub struct SubmissionGateway {
    status: SubmissionStatus,
}

impl Default for SubmissionGateway {
    fn default() -> Self {
        Self {
            status: SubmissionStatus::Idle,
        }
    }
}

impl SubmissionGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Starts a new attempt and returns its `Submitting` status.
    pub fn begin(&mut self) -> SubmissionStatus {
        let attempt = Uuid::new_v4();
        self.status = SubmissionStatus::Submitting {
            attempt,
            started_at: Utc::now(),
            message: ACKNOWLEDGEMENT,
        };
        info!(%attempt, "{ACKNOWLEDGEMENT}");
        self.status.clone()
    }

    /// Records the outcome of `attempt` and returns that attempt's final status.
    /// Outcomes of superseded attempts are returned but not recorded.
    pub fn complete(
        &mut self,
        attempt: Uuid,
        outcome: Result<String, SubmissionError>,
    ) -> SubmissionStatus {
        let status = SubmissionStatus::from_outcome(attempt, &outcome);

        match &outcome {
            Ok(url) => info!(%attempt, %url, "PDF generated"),
            Err(e) => warn!(%attempt, kind = e.kind(), "Failed to generate PDF: {e}"),
        }

        if self.status.attempt() == Some(attempt) {
            self.status = status.clone();
        } else {
            info!(%attempt, "Ignoring outcome of superseded submission");
        }
        status
    }
}
