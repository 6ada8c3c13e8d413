//! # Upload Desk
//!
//! A small actor that owns the upload form and walks each submission through its phases:
//!
//! ```text
//! Editing ──submit (valid)──▶ Uploading ──processing delay──▶ Succeeded ──banner──▶ Editing
//!    ▲                                                                             │
//!    └──── form reset to defaults, visitor sent to /books or /notes ───────────────┘
//! ```
//!
//! Edits and submissions are refused with [`UploadError::Busy`] outside `Editing`. An invalid
//! form is rejected synchronously and the phase does not move.

use super::error::UploadError;
use super::form::{FormEdit, Submission, UploadForm};
use crate::clients::UploadClient;
use crate::config::UploadConfig;
use crate::navigation::Navigator;
use listing_framework::scheduler::Scheduler;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

pub type Response<T> = oneshot::Sender<Result<T, UploadError>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum UploadPhase {
    #[default]
    Editing,
    Uploading,
    /// The success banner is showing.
    Succeeded,
}

/// The desk's two delays. Also the scheduler slot each one occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeskTimer {
    Processed,
    BannerElapsed,
}

#[derive(Debug)]
pub enum UploadRequest {
    Edit {
        edit: FormEdit,
        respond_to: Response<()>,
    },
    Submit {
        respond_to: Response<Submission>,
    },
    Snapshot {
        respond_to: Response<UploadSnapshot>,
    },
    Timer(DeskTimer),
}

/// What the upload screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadSnapshot {
    pub phase: UploadPhase,
    pub form: UploadForm,
    /// The submission being processed, or the last one that completed.
    pub last_submission: Option<Submission>,
}

pub struct UploadDesk {
    receiver: mpsc::Receiver<UploadRequest>,
    scheduler: Scheduler<UploadRequest, DeskTimer>,
    form: UploadForm,
    phase: UploadPhase,
    last_submission: Option<Submission>,
    config: UploadConfig,
}

impl UploadDesk {
    pub fn new(config: UploadConfig) -> (Self, UploadClient) {
        let (sender, receiver) = mpsc::channel(config.buffer_size.max(1));
        let desk = Self {
            receiver,
            scheduler: Scheduler::new(sender.downgrade()),
            form: UploadForm::default(),
            phase: UploadPhase::Editing,
            last_submission: None,
            config,
        };
        (desk, UploadClient::new(sender))
    }

    /// Runs the desk until every client is dropped. The `navigator` performs the redirect
    /// once a success banner has been shown.
    pub async fn run(mut self, navigator: Arc<dyn Navigator>) {
        info!("Upload desk opened");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                UploadRequest::Edit { edit, respond_to } => {
                    let _ = respond_to.send(self.edit(edit));
                }
                UploadRequest::Submit { respond_to } => {
                    let result = self.submit();
                    if let Err(e) = &result {
                        warn!(error = %e, "Submission rejected");
                    }
                    let _ = respond_to.send(result);
                }
                UploadRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(UploadSnapshot {
                        phase: self.phase,
                        form: self.form.clone(),
                        last_submission: self.last_submission.clone(),
                    }));
                }
                UploadRequest::Timer(timer) => self.on_timer(timer, navigator.as_ref()),
            }
        }

        self.scheduler.cancel_all();
        info!(phase = ?self.phase, "Upload desk closed");
    }

    fn edit(&mut self, edit: FormEdit) -> Result<(), UploadError> {
        if self.phase != UploadPhase::Editing {
            return Err(UploadError::Busy);
        }
        debug!(?edit, "Form edit");
        self.form.apply(edit);
        Ok(())
    }

    fn submit(&mut self) -> Result<Submission, UploadError> {
        if self.phase != UploadPhase::Editing {
            return Err(UploadError::Busy);
        }
        let submission = self.form.validate()?;
        info!(
            kind = %submission.kind,
            title = %submission.title,
            file = %submission.file.name,
            "Uploading"
        );
        self.phase = UploadPhase::Uploading;
        self.last_submission = Some(submission.clone());
        self.scheduler.schedule(
            DeskTimer::Processed,
            self.config.processing_delay(),
            UploadRequest::Timer(DeskTimer::Processed),
        );
        Ok(submission)
    }

    fn on_timer(&mut self, timer: DeskTimer, navigator: &dyn Navigator) {
        self.scheduler.complete(timer);
        match (timer, self.phase) {
            (DeskTimer::Processed, UploadPhase::Uploading) => {
                info!(
                    cover = ?self.last_submission.as_ref().and_then(|s| s.cover_image.as_ref()),
                    "Upload processed"
                );
                self.phase = UploadPhase::Succeeded;
                self.scheduler.schedule(
                    DeskTimer::BannerElapsed,
                    self.config.banner_duration(),
                    UploadRequest::Timer(DeskTimer::BannerElapsed),
                );
            }
            (DeskTimer::BannerElapsed, UploadPhase::Succeeded) => {
                self.phase = UploadPhase::Editing;
                self.form = self.form.reset();
                let kind = self
                    .last_submission
                    .as_ref()
                    .map_or(self.form.kind, |s| s.kind);
                navigator.navigate(kind.listing_route());
            }
            (timer, phase) => {
                debug!(?timer, ?phase, "Timer out of phase ignored");
            }
        }
    }
}
