//! Upload controller: one file in, one request out, session updated on completion.

use super::error::ExtractError;
use super::state::ExtractionSession;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_invoice_extraction::{ExtractionResponse, InvoiceExtraction};
use leptos::prelude::*;
use std::future::Future;

/// Access to the session the controller writes into.
///
/// Returns `None` when the session no longer exists (page torn down).
pub trait SessionHandle {
    fn with_session<R>(&self, f: impl FnOnce(&mut ExtractionSession) -> R) -> Option<R>;
}

impl SessionHandle for RwSignal<ExtractionSession> {
    fn with_session<R>(&self, f: impl FnOnce(&mut ExtractionSession) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    NoFile,
    AlreadyUploading,
    Completed,
    Failed,
}

/// Send `file` for extraction and store the result.
///
/// Without a file, or while another upload runs, nothing is sent and the
/// session is left as is. `send` is awaited exactly once otherwise.
pub async fn submit<H, F, S, Fut>(handle: &H, file: Option<F>, send: S) -> SubmitOutcome
where
    H: SessionHandle,
    S: FnOnce(F) -> Fut,
    Fut: Future<Output = Result<ExtractionResponse, ExtractError>>,
{
    let tag = InvoiceExtraction::full_name();

    let Some(file) = file else {
        log::warn!("[{}] submit skipped: no file selected", tag);
        return SubmitOutcome::NoFile;
    };

    if !handle.with_session(|s| s.begin_upload()).unwrap_or(false) {
        log::warn!("[{}] submit skipped: upload already in progress", tag);
        return SubmitOutcome::AlreadyUploading;
    }

    let file_name = handle
        .with_session(|s| s.selected_file.as_ref().map(|f| f.name.clone()))
        .flatten()
        .unwrap_or_default();
    log::info!("[{}] extraction started: '{}'", tag, file_name);

    let outcome = send(file).await;
    let completed = match &outcome {
        Ok(response) => {
            log::info!(
                "[{}] extraction finished: {} invoices, {} products, {} customers",
                tag,
                response.invoices.len(),
                response.products.len(),
                response.customers.len(),
            );
            true
        }
        Err(e) => {
            log::error!("[{}] extraction failed for '{}': {}", tag, file_name, e);
            false
        }
    };

    handle.with_session(|s| s.finish_upload(outcome));

    if completed {
        SubmitOutcome::Completed
    } else {
        SubmitOutcome::Failed
    }
}
