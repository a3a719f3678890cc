// Submission gateway: snapshot → PDF webhook → artifact URL or user-facing error.
// All webhook calls go through `ArtifactService`; the session owns the gateway status.

pub mod gateway;
pub mod handlers;
pub mod webhook;

pub use gateway::{SubmissionGateway, SubmissionStatus};
pub use webhook::{ArtifactService, SubmissionError, WebhookClient};
