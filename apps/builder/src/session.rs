//! Editor session: the single owner of the form state and the submission status.
//!
//! Runs as one tokio task fed by an mpsc channel, so every mutation is applied
//! in arrival order by one logical mutator and no lock guards the document.
//! Webhook calls run in their own task against the snapshot taken at submit
//! time; edits made while a call is in flight do not affect it.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::form::{DocumentSnapshot, FormAction, FormError, FormStateStore, FormView};
use crate::submission::{ArtifactService, SubmissionError, SubmissionGateway, SubmissionStatus};

const COMMAND_BUFFER: usize = 64;

enum SessionCommand {
    Snapshot {
        reply: oneshot::Sender<DocumentSnapshot>,
    },
    FormView {
        reply: oneshot::Sender<FormView>,
    },
    Apply {
        action: FormAction,
        reply: oneshot::Sender<Result<DocumentSnapshot, FormError>>,
    },
    Submit {
        accepted: oneshot::Sender<SubmissionStatus>,
        finished: oneshot::Sender<SubmissionStatus>,
    },
    Finished {
        attempt: Uuid,
        outcome: Result<String, SubmissionError>,
        finished: oneshot::Sender<SubmissionStatus>,
    },
    Status {
        reply: oneshot::Sender<SubmissionStatus>,
    },
}

/// Cloneable handle used by route handlers to talk to the session task.
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<SessionCommand>,
}

/// A submission that has been accepted. `finished` resolves once the webhook
/// call completes.
pub struct PendingSubmission {
    pub accepted: SubmissionStatus,
    finished: oneshot::Receiver<SubmissionStatus>,
}

impl PendingSubmission {
    pub async fn finished(self) -> Result<SubmissionStatus, AppError> {
        self.finished.await.map_err(|_| AppError::SessionClosed)
    }
}

impl SessionHandle {
    pub async fn snapshot(&self) -> Result<DocumentSnapshot, AppError> {
        self.request(|reply| SessionCommand::Snapshot { reply }).await
    }

    /// Revision and section summaries taken from the same snapshot.
    pub async fn form_view(&self) -> Result<FormView, AppError> {
        self.request(|reply| SessionCommand::FormView { reply }).await
    }

    pub async fn apply(&self, action: FormAction) -> Result<DocumentSnapshot, AppError> {
        let snapshot = self
            .request(|reply| SessionCommand::Apply { action, reply })
            .await??;
        Ok(snapshot)
    }

    pub async fn submission_status(&self) -> Result<SubmissionStatus, AppError> {
        self.request(|reply| SessionCommand::Status { reply }).await
    }

    /// Starts a submission of the current snapshot.
    pub async fn submit(&self) -> Result<PendingSubmission, AppError> {
        let (finished_tx, finished_rx) = oneshot::channel();
        let accepted = self
            .request(|accepted| SessionCommand::Submit {
                accepted,
                finished: finished_tx,
            })
            .await?;
        Ok(PendingSubmission {
            accepted,
            finished: finished_rx,
        })
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> SessionCommand,
    ) -> Result<T, AppError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(command(reply))
            .await
            .map_err(|_| AppError::SessionClosed)?;
        rx.await.map_err(|_| AppError::SessionClosed)
    }
}

/// Spawns the session task with a blank document and returns its handle.
/// The task exits once every handle has been dropped.
pub fn spawn_session(artifacts: Arc<dyn ArtifactService>) -> SessionHandle {
    let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
    let session = Session {
        store: FormStateStore::new(),
        gateway: SubmissionGateway::new(),
        artifacts,
        inbox: tx.downgrade(),
    };
    tokio::spawn(session.run(rx));
    SessionHandle { tx }
}

struct Session {
    store: FormStateStore,
    gateway: SubmissionGateway,
    artifacts: Arc<dyn ArtifactService>,
    inbox: mpsc::WeakSender<SessionCommand>,
}

impl Session {
    async fn run(mut self, mut rx: mpsc::Receiver<SessionCommand>) {
        info!("Editor session started");
        while let Some(command) = rx.recv().await {
            self.handle(command);
        }
        info!("Editor session stopped");
    }

    fn handle(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Snapshot { reply } => {
                let _ = reply.send(self.store.snapshot());
            }
            SessionCommand::FormView { reply } => {
                let _ = reply.send(self.store.form_view());
            }
            SessionCommand::Apply { action, reply } => {
                let _ = reply.send(self.store.apply(action));
            }
            SessionCommand::Status { reply } => {
                let _ = reply.send(self.gateway.status().clone());
            }
            SessionCommand::Submit { accepted, finished } => {
                self.start_submission(accepted, finished);
            }
            SessionCommand::Finished {
                attempt,
                outcome,
                finished,
            } => {
                let status = self.gateway.complete(attempt, outcome);
                let _ = finished.send(status);
            }
        }
    }

    fn start_submission(
        &mut self,
        accepted: oneshot::Sender<SubmissionStatus>,
        finished: oneshot::Sender<SubmissionStatus>,
    ) {
        let status = self.gateway.begin();
        let Some(attempt) = status.attempt() else {
            return;
        };
        let snapshot = self.store.snapshot();
        let _ = accepted.send(status);

        let Some(inbox) = self.inbox.upgrade() else {
            return;
        };
        let artifacts = Arc::clone(&self.artifacts);
        debug!(%attempt, revision = snapshot.revision, "Submitting document snapshot");

        tokio::spawn(async move {
            let outcome = artifacts.generate(&snapshot.document).await;
            let _ = inbox
                .send(SessionCommand::Finished {
                    attempt,
                    outcome,
                    finished,
                })
                .await;
        });
    }
}
