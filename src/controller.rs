//! Summarize-and-display controller.
//!
//! Posts the form values to a [`SummaryService`], then either raises an alert
//! or shows the summary in the modal. Completions are applied in the order
//! they arrive, so the last response to land wins.

use crate::client::{ClientError, SummaryService};
use crate::modal::{DismissRegion, ModalBounds};
use crate::summary::{Outcome, SummarizeRequest, SummarizeResponse};
use crate::surface::{Diagnostics, RequestId, Surface, TracingDiagnostics, Visibility};
use std::sync::Arc;
use tokio::sync::mpsc;

/// A finished request waiting to be applied to the surface
#[derive(Debug)]
pub struct Completion {
    pub id: RequestId,
    pub result: Result<SummarizeResponse, ClientError>,
}

pub struct Controller<S: Surface, D: Diagnostics = TracingDiagnostics> {
    service: Arc<dyn SummaryService>,
    surface: S,
    diagnostics: D,
    dismiss: Option<DismissRegion>,
    next_id: RequestId,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl<S: Surface, D: Diagnostics> Controller<S, D> {
    pub fn new(service: Arc<dyn SummaryService>, surface: S, diagnostics: D) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            service,
            surface,
            diagnostics,
            dismiss: None,
            next_id: 0,
            completions_tx,
            completions_rx,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Start a summarize request. Must be called inside a tokio runtime.
    ///
    /// Returns immediately; the result shows up through [`Self::try_completion`]
    /// or [`Self::next_completion`].
    pub fn summarize(&mut self, request: SummarizeRequest) -> RequestId {
        let id = self.next_id;
        self.next_id += 1;

        tracing::info!(
            request = id,
            text_len = request.article_text.len(),
            url = %request.article_url,
            "summarize triggered"
        );

        let service = Arc::clone(&self.service);
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = service.summarize(&request).await;
            // The receiver lives as long as the controller.
            let _ = tx.send(Completion { id, result });
        });

        id
    }

    /// Take the next finished request without waiting
    pub fn try_completion(&mut self) -> Option<Completion> {
        self.completions_rx.try_recv().ok()
    }

    /// Wait for the next finished request
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.completions_rx.recv().await
    }

    /// Apply every request that has finished so far; returns how many
    pub fn apply_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Some(completion) = self.try_completion() {
            self.apply(completion);
            applied += 1;
        }
        applied
    }

    /// Apply a finished request to the surface
    pub fn apply(&mut self, completion: Completion) {
        let Completion { id, result } = completion;
        match result {
            Ok(response) => match response.outcome() {
                Outcome::Failed(error) => {
                    tracing::warn!(request = id, %error, "server reported an error");
                    self.surface.alert(&format!("Error: {}", error));
                }
                Outcome::Summary(text) => {
                    tracing::info!(request = id, len = text.len(), "showing summary");
                    self.surface.set_modal_text(&text);
                    self.surface.set_modal_visibility(Visibility::Shown);
                    self.dismiss.get_or_insert_with(DismissRegion::new);
                }
            },
            Err(error) => self.diagnostics.request_failed(id, &error),
        }
    }

    /// Hide the modal unconditionally
    pub fn close(&mut self) {
        self.surface.set_modal_visibility(Visibility::Hidden);
        self.dismiss = None;
    }

    /// Route a click at `column`, `row`; returns true when it hid the modal
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        let dismisses = self
            .dismiss
            .as_ref()
            .is_some_and(|region| region.dismisses(column, row));
        if dismisses {
            tracing::debug!(column, row, "modal dismissed by click");
            self.close();
        }
        dismisses
    }

    /// Report where the modal was drawn this frame
    pub fn place_modal(&mut self, bounds: ModalBounds) {
        if let Some(region) = self.dismiss.as_mut() {
            region.place(bounds);
        }
    }

    pub fn dismiss_registered(&self) -> bool {
        self.dismiss.is_some()
    }

    /// Drop the dismiss region. Clicks are ignored until a summary is shown again.
    pub fn teardown(&mut self) {
        self.dismiss = None;
    }
}
