//! # Upload Client
//!
//! Typed access to the [`UploadDesk`](crate::upload::UploadDesk).
use crate::upload::{FormEdit, Submission, UploadError, UploadRequest, UploadSnapshot};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct UploadClient {
    sender: mpsc::Sender<UploadRequest>,
}

impl UploadClient {
    pub fn new(sender: mpsc::Sender<UploadRequest>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, UploadError>>) -> UploadRequest,
    ) -> Result<R, UploadError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| UploadError::DeskError("Upload desk closed".into()))?;
        response
            .await
            .map_err(|_| UploadError::DeskError("Upload desk dropped response channel".into()))?
    }

    #[instrument(skip(self))]
    pub async fn edit(&self, edit: FormEdit) -> Result<(), UploadError> {
        debug!("Sending request");
        self.request(|respond_to| UploadRequest::Edit { edit, respond_to })
            .await
    }

    /// Validates and submits the current form. Returns once the desk has accepted it; the
    /// processing delay, banner and redirect follow on their own.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<Submission, UploadError> {
        debug!("Sending request");
        self.request(|respond_to| UploadRequest::Submit { respond_to })
            .await
    }

    pub async fn snapshot(&self) -> Result<UploadSnapshot, UploadError> {
        self.request(|respond_to| UploadRequest::Snapshot { respond_to })
            .await
    }
}
